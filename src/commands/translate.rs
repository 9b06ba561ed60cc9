use std::io::Write;

use anyhow::Context as _;
use lingua_core::config::LinguaConfig;
use lingua_core::{resolve_with_fallback, Catalog, LinguaError};
use tracing::info;

use super::{check_paths, TranslateArgs};

/// Resolve a message in the requested language and print it.
///
/// The language must be in the catalog; only then is the preferred → default
/// fallback attempted.
pub(super) fn handle_translate(
    args: &TranslateArgs,
    config: &LinguaConfig,
    out: &mut impl Write,
    diag: &mut impl Write,
) -> anyhow::Result<()> {
    check_paths(config, true)?;

    let catalog = Catalog::load(&config.catalog_path())?;
    let language = catalog
        .find(&args.language)
        .ok_or_else(|| LinguaError::UnsupportedLanguage(args.language.clone()))?;

    let preferred = config.language_path(&language.anglicized);
    let default = config.default_language_path();
    info!(
        "translating \"{}\" into {} (default {})",
        args.query.key, language.anglicized, config.default_language
    );

    let translation = resolve_with_fallback(&preferred, &default, &args.query)
        .context("FATAL: translation files could not be loaded")?;

    if let Some(fallback) = &translation.fallback {
        writeln!(diag, "{}", fallback.diagnostic())?;
    }
    writeln!(out, "TRANSLATION: {}", translation.text)?;
    Ok(())
}
