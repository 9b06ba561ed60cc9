//! # lingua-core
//!
//! Language catalog, message tables, placeholder formatting, fallback
//! resolution, configuration, and error handling for lingua.

pub mod catalog;
pub mod config;
pub mod document;
pub mod error;
pub mod format;
pub mod resolve;
pub mod table;

pub use catalog::{Catalog, Language};
pub use error::{LinguaError, Result};
pub use format::Placeholders;
pub use resolve::{resolve, resolve_with_fallback, Fallback, Query, Translation};
pub use table::MessageTable;
