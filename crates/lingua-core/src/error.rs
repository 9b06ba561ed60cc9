use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type for lingua.
#[derive(Debug, Error)]
pub enum LinguaError {
    /// Fewer command-line tokens than the selected command requires.
    #[error("missing argument: {0}")]
    MissingArgument(String),

    /// A `name=value` token that cannot be split into a placeholder.
    #[error("invalid placeholder argument \"{0}\" (expected name=value)")]
    InvalidPlaceholder(String),

    /// The command selector matched none of the known commands.
    #[error(
        "could not determine the desired task: \"{0}\". \
         Did you spell it correctly? Use `help` for the list of commands"
    )]
    UnknownCommand(String),

    /// An expected file or directory is absent.
    #[error("file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// A language file or catalog is not valid TOML.
    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// The message key, or the section holding it, is absent.
    #[error("{}", key_not_found(.key, .section.as_deref(), .path))]
    KeyNotFound {
        key: String,
        section: Option<String>,
        path: PathBuf,
    },

    /// The message references a placeholder that cannot be filled in.
    #[error("could not insert arguments into \"{key}\" from {}: {reason}", .path.display())]
    PlaceholderSubstitutionFailed {
        key: String,
        reason: String,
        path: PathBuf,
    },

    /// The requested language is not in the catalog.
    #[error(
        "the language \"{0}\" is not supported. \
         Corroborate your spelling with the languages catalog"
    )]
    UnsupportedLanguage(String),

    /// Both the preferred and the default language failed.
    #[error(
        "translation unavailable: {} failed ({preferred}) and {} failed ({default})",
        .preferred_path.display(),
        .default_path.display()
    )]
    TranslationUnavailable {
        preferred_path: PathBuf,
        preferred: Box<LinguaError>,
        default_path: PathBuf,
        default: Box<LinguaError>,
    },

    /// Configuration error.
    #[error("config error: {0}")]
    Config(String),

    /// I/O error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

fn key_not_found(key: &str, section: Option<&str>, path: &std::path::Path) -> String {
    match section {
        Some(section) => format!(
            "section \"{section}\" or variable \"{key}\" in {} could not be found \
             (is \"{key}\" under \"{section}\"?)",
            path.display()
        ),
        None => format!(
            "variable \"{key}\" in {} could not be found (is \"{key}\" under a section?)",
            path.display()
        ),
    }
}

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, LinguaError>;
