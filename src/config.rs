use serde::Deserialize;
use std::env;
use std::fs;
use std::path::PathBuf;

use crate::cli_args::Cli;
use crate::credentials;

pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";

/// Final resolved configuration for aicommit.
#[derive(Debug, Clone)]
pub struct Config {
    pub model: String,
    pub credential_path: PathBuf,
}

impl Config {
    /// Build the final config from CLI flags, environment, TOML file, and defaults.
    ///
    /// Model precedence:
    ///   1. CLI flag (`--model`)
    ///   2. Env var `AICOMMIT_MODEL`
    ///   3. TOML `~/.config/aicommit.toml`
    ///   4. Hardcoded default ("gemini-1.5-flash")
    ///
    /// Credential-path precedence: `--config`, then `AICOMMIT_CONFIG`, then
    /// the per-user default.
    pub fn from_sources(cli: &Cli) -> Self {
        let file_cfg = load_file_config().unwrap_or_default();

        let model = cli
            .model
            .clone()
            .or_else(|| env::var("AICOMMIT_MODEL").ok())
            .or(file_cfg.model)
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());

        let credential_path = cli
            .config
            .clone()
            .or_else(|| env::var("AICOMMIT_CONFIG").ok().map(PathBuf::from))
            .unwrap_or_else(credentials::default_credential_path);

        Config {
            model,
            credential_path,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    /// Default model to use when not provided via CLI or env.
    pub model: Option<String>,
}

/// Return `~/.config/aicommit.toml`
fn config_path() -> Option<PathBuf> {
    let home = dirs::home_dir()?;
    Some(home.join(".config").join("aicommit.toml"))
}

fn load_file_config() -> Option<FileConfig> {
    let path = config_path()?;
    if !path.exists() {
        return None;
    }

    let data = fs::read_to_string(&path).ok()?;
    toml::from_str::<FileConfig>(&data).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn cli_model_flag_wins() {
        let cli = Cli::parse_from(["aicommit", "--model", "gemini-2.0-flash"]);
        let config = Config::from_sources(&cli);
        assert_eq!(config.model, "gemini-2.0-flash");
    }

    #[test]
    fn cli_config_flag_sets_credential_path() {
        let cli = Cli::parse_from(["aicommit", "--config", "/tmp/creds.json"]);
        let config = Config::from_sources(&cli);
        assert_eq!(config.credential_path, PathBuf::from("/tmp/creds.json"));
    }

    #[test]
    fn file_config_parses_model() {
        let parsed: FileConfig = toml::from_str("model = \"gemini-1.5-pro\"").unwrap();
        assert_eq!(parsed.model.as_deref(), Some("gemini-1.5-pro"));
    }

    #[test]
    fn file_config_allows_missing_model() {
        let parsed: FileConfig = toml::from_str("").unwrap();
        assert!(parsed.model.is_none());
    }
}
