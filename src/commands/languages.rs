use std::io::Write;

use lingua_core::config::LinguaConfig;
use lingua_core::Catalog;

use super::check_paths;

fn load_catalog(config: &LinguaConfig) -> anyhow::Result<Catalog> {
    check_paths(config, false)?;
    Ok(Catalog::load(&config.catalog_path())?)
}

/// Render names as `["a", "b"]`, keeping each name exactly as stored.
fn quoted_list(names: &[&str]) -> String {
    let items: Vec<String> = names.iter().map(|name| format!("\"{name}\"")).collect();
    format!("[{}]", items.join(", "))
}

/// Print supported languages in their local spelling.
pub(super) fn handle_list(config: &LinguaConfig, out: &mut impl Write) -> anyhow::Result<()> {
    let catalog = load_catalog(config)?;
    writeln!(out, "OUTPUT: {}", quoted_list(&catalog.local_names()))?;
    Ok(())
}

/// Print supported languages in their anglicized spelling.
pub(super) fn handle_list_anglicized(
    config: &LinguaConfig,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let catalog = load_catalog(config)?;
    writeln!(out, "OUTPUT: {}", quoted_list(&catalog.anglicized_names()))?;
    Ok(())
}

pub(super) fn handle_is_supported(
    language: &str,
    config: &LinguaConfig,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let catalog = load_catalog(config)?;
    writeln!(out, "OUTPUT: {}", catalog.is_supported(language))?;
    Ok(())
}
