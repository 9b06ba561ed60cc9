//! The language catalog: anglicized language names mapped to their local spelling.

use std::path::Path;

use crate::document::read_table;
use crate::error::{LinguaError, Result};

/// One supported language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Language {
    /// English spelling, also the stem of the language's file (`french`).
    pub anglicized: String,
    /// The language's own spelling (`Français`).
    pub local: String,
}

/// Supported languages in catalog file order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    languages: Vec<Language>,
}

impl Catalog {
    /// Load the catalog from a `languages.toml` file.
    pub fn load(path: &Path) -> Result<Self> {
        let table = read_table(path)?;
        Self::from_table(table, path)
    }

    /// Build a catalog from a parsed table. Every value must be a string.
    pub fn from_table(table: toml::Table, path: &Path) -> Result<Self> {
        let mut languages = Vec::with_capacity(table.len());
        for (anglicized, value) in table {
            let Some(local) = value.as_str() else {
                return Err(LinguaError::Config(format!(
                    "catalog entry \"{anglicized}\" in {} is not a string",
                    path.display()
                )));
            };
            languages.push(Language {
                local: local.to_string(),
                anglicized,
            });
        }
        Ok(Self { languages })
    }

    /// Local spellings, in catalog order.
    pub fn local_names(&self) -> Vec<&str> {
        self.languages.iter().map(|l| l.local.as_str()).collect()
    }

    /// Anglicized spellings, in catalog order.
    pub fn anglicized_names(&self) -> Vec<&str> {
        self.languages.iter().map(|l| l.anglicized.as_str()).collect()
    }

    /// Find a language by either spelling, ignoring case.
    pub fn find(&self, name: &str) -> Option<&Language> {
        let needle = name.trim().to_lowercase();
        self.languages.iter().find(|l| {
            l.anglicized.to_lowercase() == needle || l.local.to_lowercase() == needle
        })
    }

    /// Whether `name` matches an anglicized or local spelling, ignoring case.
    pub fn is_supported(&self, name: &str) -> bool {
        self.find(name).is_some()
    }
}
