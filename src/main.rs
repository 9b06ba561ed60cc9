mod commands;

use anyhow::Context as _;
use clap::Parser;
use lingua_core::config::{self, LinguaConfig, DEFAULT_CONFIG_PATH};
use tracing_subscriber::EnvFilter;

use commands::Invocation;

#[derive(Parser)]
#[command(
    name = "lingua",
    version,
    about = "Look up localized messages from per-language TOML files",
    after_help = "Run `lingua help` for the list of commands and their aliases."
)]
struct Cli {
    /// Path to config file.
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: String,

    /// Directory holding languages.toml and the per-language files.
    #[arg(long)]
    lib_dir: Option<String>,

    /// Language to fall back to when the requested one cannot answer.
    #[arg(long)]
    default_language: Option<String>,

    /// Command followed by its arguments, e.g. `translate spanish hello name=Blake`.
    #[arg(trailing_var_arg = true, value_name = "COMMAND")]
    command: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // `log_level` lives in the config, so loading it runs under RUST_LOG alone.
    let bootstrap = tracing_subscriber::fmt()
        .with_env_filter(env_filter("warn"))
        .with_writer(std::io::stderr)
        .finish();
    let mut cfg = tracing::subscriber::with_default(bootstrap, || config::load(&cli.config))
        .with_context(|| format!("loading config from {}", cli.config))?
        .lingua;
    apply_overrides(&mut cfg, &cli);

    tracing_subscriber::fmt()
        .with_env_filter(env_filter(&cfg.log_level))
        .with_writer(std::io::stderr)
        .init();

    let invocation = Invocation::parse(cli.command.as_slice())?;
    let stdout = std::io::stdout();
    let stderr = std::io::stderr();
    commands::run(invocation, &cfg, &mut stdout.lock(), &mut stderr.lock())
}

/// `RUST_LOG` when set, otherwise `fallback`, otherwise `warn`.
fn env_filter(fallback: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(fallback))
        .unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Command-line flags take precedence over the config file.
fn apply_overrides(cfg: &mut LinguaConfig, cli: &Cli) {
    if let Some(dir) = &cli.lib_dir {
        cfg.lib_dir = dir.clone();
    }
    if let Some(lang) = &cli.default_language {
        cfg.default_language = lang.clone();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("lingua").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_flags_override_config() {
        let mut cfg = LinguaConfig::default();
        let cli = cli(&[
            "--lib-dir",
            "/srv/i18n",
            "--default-language",
            "spanish",
            "translate",
            "french",
            "hello",
        ]);
        apply_overrides(&mut cfg, &cli);
        assert_eq!(cfg.lib_dir, "/srv/i18n");
        assert_eq!(cfg.default_language, "spanish");
        assert_eq!(cli.command, vec!["translate", "french", "hello"]);
    }

    #[test]
    fn test_no_flags_keep_config() {
        let mut cfg = LinguaConfig {
            lib_dir: "/etc/lingua".to_string(),
            default_language: "french".to_string(),
            ..Default::default()
        };
        apply_overrides(&mut cfg, &cli(&["list"]));
        assert_eq!(cfg.lib_dir, "/etc/lingua");
        assert_eq!(cfg.default_language, "french");
    }

    #[test]
    fn test_config_path_defaults() {
        assert_eq!(cli(&["list"]).config, DEFAULT_CONFIG_PATH);
        assert_eq!(cli(&["-c", "other.toml", "list"]).config, "other.toml");
    }

    #[test]
    fn test_tokens_after_command_are_not_flags() {
        let cli = cli(&["translate", "english", "--lib-dir", "elsewhere"]);
        assert_eq!(cli.command.len(), 4);
        assert!(cli.lib_dir.is_none());
    }
}
