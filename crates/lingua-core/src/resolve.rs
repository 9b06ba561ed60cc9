//! Message resolution and the preferred → default language fallback.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{LinguaError, Result};
use crate::format::{substitute, Placeholders};
use crate::table::MessageTable;

/// What to look up: a key, optionally inside a section, with placeholder values.
#[derive(Debug, Clone, Default)]
pub struct Query {
    pub key: String,
    pub section: Option<String>,
    pub placeholders: Placeholders,
}

impl Query {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Default::default()
        }
    }

    /// Set the section. An empty section means none.
    pub fn section(mut self, section: impl Into<String>) -> Self {
        let section = section.into();
        self.section = (!section.is_empty()).then_some(section);
        self
    }

    pub fn placeholders(mut self, placeholders: Placeholders) -> Self {
        self.placeholders = placeholders;
        self
    }
}

/// Resolve `query` against one message table.
///
/// Placeholders are only substituted when at least one was supplied; otherwise
/// the stored string is returned untouched.
pub fn resolve(table: &MessageTable, query: &Query) -> Result<String> {
    let raw = table.get(&query.key, query.section.as_deref())?;
    if query.placeholders.is_empty() {
        return Ok(raw.to_string());
    }
    substitute(raw, &query.placeholders).map_err(|e| LinguaError::PlaceholderSubstitutionFailed {
        key: query.key.clone(),
        reason: e.to_string(),
        path: table.path().to_path_buf(),
    })
}

/// Load the table at `path` and resolve `query` against it.
pub fn resolve_file(path: &Path, query: &Query) -> Result<String> {
    let table = MessageTable::load(path)?;
    resolve(&table, query)
}

/// A resolved message and how it was obtained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    pub text: String,
    /// Set when the preferred language failed and the default answered.
    pub fallback: Option<Fallback>,
}

/// Record of a preferred-language failure that was recovered from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fallback {
    pub preferred_path: PathBuf,
    pub default_path: PathBuf,
    pub reason: String,
}

impl Fallback {
    /// One-line diagnostic for the user.
    pub fn diagnostic(&self) -> String {
        format!(
            "Could not obtain translation from: {} due to {}. Attempting to obtain translation from: {}.",
            self.preferred_path.display(),
            self.reason,
            self.default_path.display()
        )
    }
}

/// Resolve against the preferred file, retrying once against the default file.
///
/// Any failure on the preferred side (missing file, bad TOML, missing key,
/// unfillable placeholder) triggers the retry. A failure on the default side
/// is terminal and reported as [`LinguaError::TranslationUnavailable`].
pub fn resolve_with_fallback(
    preferred_path: &Path,
    default_path: &Path,
    query: &Query,
) -> Result<Translation> {
    let preferred_err = match resolve_file(preferred_path, query) {
        Ok(text) => {
            debug!("resolved \"{}\" from {}", query.key, preferred_path.display());
            return Ok(Translation {
                text,
                fallback: None,
            });
        }
        Err(e) => e,
    };

    if preferred_path == default_path {
        return Err(unavailable(preferred_path, preferred_err, default_path, None));
    }

    debug!(
        "preferred language failed for \"{}\" ({}), falling back to {}",
        query.key,
        preferred_err,
        default_path.display()
    );
    let fallback = Fallback {
        preferred_path: preferred_path.to_path_buf(),
        default_path: default_path.to_path_buf(),
        reason: preferred_err.to_string(),
    };

    match resolve_file(default_path, query) {
        Ok(text) => Ok(Translation {
            text,
            fallback: Some(fallback),
        }),
        Err(default_err) => Err(unavailable(
            preferred_path,
            preferred_err,
            default_path,
            Some(default_err),
        )),
    }
}

fn unavailable(
    preferred_path: &Path,
    preferred: LinguaError,
    default_path: &Path,
    default: Option<LinguaError>,
) -> LinguaError {
    let default = match default {
        Some(e) => e,
        None => LinguaError::Config(format!(
            "{} is also the default language; nothing to fall back to",
            default_path.display()
        )),
    };
    LinguaError::TranslationUnavailable {
        preferred_path: preferred_path.to_path_buf(),
        preferred: Box::new(preferred),
        default_path: default_path.to_path_buf(),
        default: Box::new(default),
    }
}
