//! Per-language message tables.

use std::path::{Path, PathBuf};

use crate::document::read_table;
use crate::error::{LinguaError, Result};

/// Messages for one language: top-level keys, or keys nested one level under a section.
#[derive(Debug, Clone)]
pub struct MessageTable {
    path: PathBuf,
    entries: toml::Table,
}

impl MessageTable {
    /// Load a `<language>.toml` file.
    pub fn load(path: &Path) -> Result<Self> {
        let entries = read_table(path)?;
        Ok(Self::from_table(entries, path))
    }

    /// Wrap an already-parsed table. `path` is used in error messages.
    pub fn from_table(entries: toml::Table, path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
            entries,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Look up the raw message string for `key`, optionally inside `section`.
    ///
    /// A value that is not a string (a number, or a table where a message was
    /// expected) counts as not found.
    pub fn get(&self, key: &str, section: Option<&str>) -> Result<&str> {
        let scope = match section {
            Some(section) => self.entries.get(section).and_then(toml::Value::as_table),
            None => Some(&self.entries),
        };
        scope
            .and_then(|t| t.get(key))
            .and_then(toml::Value::as_str)
            .ok_or_else(|| LinguaError::KeyNotFound {
                key: key.to_string(),
                section: section.map(str::to_string),
                path: self.path.clone(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> MessageTable {
        let entries: toml::Table = r#"
            hello = "Hello, {name}!"
            setting = "Settings"
            count = 3

            [start]
            section_name = "Start"
            welcome = "Welcome, {name}"
        "#
        .parse()
        .unwrap();
        MessageTable::from_table(entries, Path::new("english.toml"))
    }

    #[test]
    fn test_top_level_key() {
        assert_eq!(table().get("setting", None).unwrap(), "Settings");
    }

    #[test]
    fn test_sectioned_key() {
        assert_eq!(table().get("welcome", Some("start")).unwrap(), "Welcome, {name}");
    }

    #[test]
    fn test_missing_key_names_key_and_file() {
        let err = table().get("absent", None).unwrap_err();
        match &err {
            LinguaError::KeyNotFound { key, section, path } => {
                assert_eq!(key, "absent");
                assert!(section.is_none());
                assert_eq!(path, Path::new("english.toml"));
            }
            other => panic!("expected KeyNotFound, got {other:?}"),
        }
        assert!(err.to_string().contains("\"absent\""));
    }

    #[test]
    fn test_missing_section_is_key_not_found() {
        let err = table().get("welcome", Some("nowhere")).unwrap_err();
        assert!(matches!(
            err,
            LinguaError::KeyNotFound { section: Some(ref s), .. } if s == "nowhere"
        ));
    }

    #[test]
    fn test_section_key_not_reachable_without_section() {
        assert!(table().get("welcome", None).is_err());
    }

    #[test]
    fn test_section_itself_is_not_a_message() {
        assert!(table().get("start", None).is_err());
    }

    #[test]
    fn test_top_level_string_is_not_a_section() {
        assert!(table().get("x", Some("setting")).is_err());
    }

    #[test]
    fn test_non_string_value_is_not_found() {
        assert!(table().get("count", None).is_err());
    }
}
