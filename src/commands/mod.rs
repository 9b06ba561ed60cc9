//! Command selection, positional argument parsing, and dispatch.

mod languages;
mod translate;


use std::io::Write;

use lingua_core::config::LinguaConfig;
use lingua_core::{LinguaError, Placeholders, Query};
use tracing::debug;

/// Known commands. Each accepts several spellings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Translate,
    List,
    ListAnglicized,
    IsSupported,
    Help,
}

impl Command {
    /// Parse a command selector, ignoring case. Returns `None` for unknown selectors.
    pub fn parse(selector: &str) -> Option<Self> {
        match selector.trim().to_lowercase().as_str() {
            "translate" | "translation" | "get-translation" => Some(Self::Translate),
            "list" | "get-available" | "list-available" | "get-list" => Some(Self::List),
            "list-anglicized" | "get-anglicized-list" | "anglicized-list" => {
                Some(Self::ListAnglicized)
            }
            "is-supported" | "is-available" | "check-supported" => Some(Self::IsSupported),
            "help" => Some(Self::Help),
            _ => None,
        }
    }
}

/// Arguments of a `translate` command.
#[derive(Debug, Clone)]
pub struct TranslateArgs {
    /// Requested language, lowercased.
    pub language: String,
    pub query: Query,
}

/// One fully parsed command line.
#[derive(Debug, Clone)]
pub enum Invocation {
    Translate(TranslateArgs),
    List,
    ListAnglicized,
    IsSupported { language: String },
    Help,
}

impl Invocation {
    /// Split positional tokens into a typed invocation.
    ///
    /// Layout: `<command> [language] [key] [section] [name=value ...]`. A section
    /// token containing `=` is read as the first placeholder instead.
    pub fn parse<S: AsRef<str>>(tokens: &[S]) -> Result<Self, LinguaError> {
        let tokens: Vec<&str> = tokens.iter().map(|s| s.as_ref()).collect();
        let Some(selector) = tokens.first() else {
            return Err(LinguaError::MissingArgument(
                "no command given (try `help`)".to_string(),
            ));
        };
        let command =
            Command::parse(selector).ok_or_else(|| LinguaError::UnknownCommand(selector.to_string()))?;
        let rest = &tokens[1..];

        match command {
            Command::Translate => parse_translate(rest).map(Self::Translate),
            Command::IsSupported => {
                let language = required(rest, 0, "language")?;
                Ok(Self::IsSupported {
                    language: language.to_lowercase(),
                })
            }
            Command::List | Command::ListAnglicized | Command::Help => {
                if !rest.is_empty() {
                    debug!("ignoring {} extra argument(s) for {command:?}", rest.len());
                }
                Ok(match command {
                    Command::List => Self::List,
                    Command::ListAnglicized => Self::ListAnglicized,
                    _ => Self::Help,
                })
            }
        }
    }
}

fn parse_translate(rest: &[&str]) -> Result<TranslateArgs, LinguaError> {
    let language = required(rest, 0, "language")?.to_lowercase();
    let key = required(rest, 1, "message key")?;

    let mut tail = rest.get(2..).unwrap_or_default();
    let mut query = Query::new(key);
    if let Some(section) = tail.first().filter(|s| !s.contains('=')) {
        query = query.section(*section);
        tail = &tail[1..];
    }
    let query = query.placeholders(Placeholders::parse(tail)?);

    Ok(TranslateArgs { language, query })
}

/// Fetch a non-empty positional argument.
fn required<'a>(args: &[&'a str], index: usize, name: &str) -> Result<&'a str, LinguaError> {
    match args.get(index) {
        Some(value) if !value.trim().is_empty() => Ok(value.trim()),
        Some(_) => Err(LinguaError::MissingArgument(format!("{name} is empty"))),
        None => Err(LinguaError::MissingArgument(format!("{name} was not given"))),
    }
}

/// Usage text printed by `help`.
pub const USAGE: &str = "\
Usage: lingua [OPTIONS] <COMMAND> [ARGS...]

Commands:
  translate <language> <key> [section] [name=value ...]
      Print the message <key> (optionally under [section]) in <language>,
      falling back to the default language when it cannot be found.
      Aliases: translation, get-translation
  list
      Print supported languages in their local spelling.
      Aliases: get-available, list-available, get-list
  list-anglicized
      Print supported languages in their English spelling.
      Aliases: get-anglicized-list, anglicized-list
  is-supported <language>
      Print whether <language> (either spelling) is supported.
      Aliases: is-available, check-supported
  help
      Print this text.

Options must come before the command; see `lingua --help`.";

/// Run an invocation, writing results to `out` and diagnostics to `diag`.
pub fn run(
    invocation: Invocation,
    config: &LinguaConfig,
    out: &mut impl Write,
    diag: &mut impl Write,
) -> anyhow::Result<()> {
    match invocation {
        Invocation::Translate(args) => translate::handle_translate(&args, config, out, diag),
        Invocation::List => languages::handle_list(config, out),
        Invocation::ListAnglicized => languages::handle_list_anglicized(config, out),
        Invocation::IsSupported { language } => {
            languages::handle_is_supported(&language, config, out)
        }
        Invocation::Help => {
            writeln!(out, "{USAGE}")?;
            Ok(())
        }
    }
}

/// Ensure the library directory and catalog exist, plus the default
/// language file when `with_default` is set.
fn check_paths(config: &LinguaConfig, with_default: bool) -> Result<(), LinguaError> {
    let mut required = vec![config.lib_path(), config.catalog_path()];
    if with_default {
        required.push(config.default_language_path());
    }
    match required.into_iter().find(|p| !p.exists()) {
        Some(missing) => Err(LinguaError::FileNotFound(missing)),
        None => Ok(()),
    }
}
