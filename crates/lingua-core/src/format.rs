//! Named placeholder substitution for message strings.
//!
//! Messages use `{name}` tokens. `{{` and `}}` produce literal braces.

use std::collections::HashMap;

use thiserror::Error;

use crate::error::LinguaError;

/// Placeholder values keyed by name, parsed from `name=value` arguments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Placeholders(HashMap<String, String>);

impl Placeholders {
    /// Parse `name=value` tokens. The split happens on the first `=`, so values
    /// may contain `=`. A repeated name keeps the last value.
    pub fn parse<I, S>(tokens: I) -> Result<Self, LinguaError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut map = HashMap::new();
        for token in tokens {
            let token = token.as_ref();
            match token.split_once('=') {
                Some((name, value)) if !name.is_empty() => {
                    map.insert(name.to_string(), value.to_string());
                }
                _ => return Err(LinguaError::InvalidPlaceholder(token.to_string())),
            }
        }
        Ok(Self(map))
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

/// Why a template could not be filled in.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// `{name}` has no matching placeholder.
    #[error("no value given for placeholder \"{0}\"")]
    Missing(String),
    /// `{}` with no name.
    #[error("unnamed placeholder \"{{}}\"")]
    EmptyToken,
    /// `{` without a closing `}`.
    #[error("unterminated \"{{\"")]
    Unterminated,
    /// `}` not part of a token or `}}`.
    #[error("single \"}}\" encountered")]
    StrayBrace,
}

/// Replace every `{name}` in `template` with its value from `args`.
pub fn substitute(template: &str, args: &Placeholders) -> Result<String, FormatError> {
    let mut out = String::with_capacity(template.len());
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '{' if chars.peek() == Some(&'{') => {
                chars.next();
                out.push('{');
            }
            '{' => {
                let mut name = String::new();
                loop {
                    match chars.next() {
                        Some('}') => break,
                        Some(ch) => name.push(ch),
                        None => return Err(FormatError::Unterminated),
                    }
                }
                if name.is_empty() {
                    return Err(FormatError::EmptyToken);
                }
                match args.get(&name) {
                    Some(value) => out.push_str(value),
                    None => return Err(FormatError::Missing(name)),
                }
            }
            '}' if chars.peek() == Some(&'}') => {
                chars.next();
                out.push('}');
            }
            '}' => return Err(FormatError::StrayBrace),
            _ => out.push(c),
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(pairs: &[&str]) -> Placeholders {
        Placeholders::parse(pairs).unwrap()
    }

    #[test]
    fn test_substitutes_named_token() {
        let out = substitute("Hello, {name}!", &args(&["name=Blake"])).unwrap();
        assert_eq!(out, "Hello, Blake!");
    }

    #[test]
    fn test_substitutes_repeated_and_multiple_tokens() {
        let out = substitute(
            "{a} and {b}, then {a} again",
            &args(&["a=one", "b=two"]),
        )
        .unwrap();
        assert_eq!(out, "one and two, then one again");
    }

    #[test]
    fn test_unused_placeholders_are_ignored() {
        let out = substitute("Plain text", &args(&["name=Blake"])).unwrap();
        assert_eq!(out, "Plain text");
    }

    #[test]
    fn test_doubled_braces_are_literal() {
        let out = substitute("{{literal}} {name}", &args(&["name=x"])).unwrap();
        assert_eq!(out, "{literal} x");
    }

    #[test]
    fn test_missing_placeholder_fails() {
        let err = substitute("Hello, {name}!", &args(&["other=x"])).unwrap_err();
        assert_eq!(err, FormatError::Missing("name".to_string()));
    }

    #[test]
    fn test_malformed_templates_fail() {
        let a = args(&["name=x"]);
        assert_eq!(substitute("{}", &a), Err(FormatError::EmptyToken));
        assert_eq!(substitute("oops {name", &a), Err(FormatError::Unterminated));
        assert_eq!(substitute("oops }", &a), Err(FormatError::StrayBrace));
    }

    #[test]
    fn test_token_name_is_not_trimmed() {
        let err = substitute("Hi {  name }", &args(&["name=x"])).unwrap_err();
        assert_eq!(err, FormatError::Missing("  name ".to_string()));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            FormatError::Missing("name".to_string()).to_string(),
            "no value given for placeholder \"name\""
        );
        assert_eq!(FormatError::EmptyToken.to_string(), "unnamed placeholder \"{}\"");
        assert_eq!(FormatError::Unterminated.to_string(), "unterminated \"{\"");
        assert_eq!(FormatError::StrayBrace.to_string(), "single \"}\" encountered");
    }

    #[test]
    fn test_non_ascii_text_survives() {
        let out = substitute("¡Hola, {nombre}! ✓", &args(&["nombre=Señor"])).unwrap();
        assert_eq!(out, "¡Hola, Señor! ✓");
    }

    #[test]
    fn test_parse_splits_on_first_equals() {
        let p = args(&["expr=a=b"]);
        assert_eq!(p.get("expr"), Some("a=b"));
    }

    #[test]
    fn test_parse_last_value_wins() {
        let p = args(&["name=first", "name=second"]);
        assert_eq!(p.len(), 1);
        assert_eq!(p.get("name"), Some("second"));
    }

    #[test]
    fn test_parse_empty_value_is_allowed() {
        let p = args(&["name="]);
        assert_eq!(p.get("name"), Some(""));
    }

    #[test]
    fn test_parse_rejects_bad_tokens() {
        assert!(matches!(
            Placeholders::parse(["noequals"]),
            Err(LinguaError::InvalidPlaceholder(t)) if t == "noequals"
        ));
        assert!(matches!(
            Placeholders::parse(["=value"]),
            Err(LinguaError::InvalidPlaceholder(_))
        ));
    }
}
