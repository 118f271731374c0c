use log::debug;

use crate::cli_args::Cli;
use crate::config::Config;
use crate::credentials::{self, FileCredentialStore};
use crate::llm::gemini::GeminiClient;
use crate::llm::{LlmClient, NoopClient};

/// Build the LLM client based on CLI + config.
pub fn build_llm_client(cli: &Cli, cfg: &Config) -> Box<dyn LlmClient> {
    let use_no_model = cli.no_model || cfg.model.to_lowercase() == "none";

    if use_no_model {
        debug!("Using NoopClient (no model calls)");
        return Box::new(NoopClient);
    }

    // A key from the CLI or environment skips the credential file entirely.
    let api_key = match &cli.api_key {
        Some(key) => key.clone(),
        None => {
            let store = FileCredentialStore::new(cfg.credential_path.clone());
            credentials::bootstrap(&store)
        }
    };

    debug!("Using GeminiClient with model: {}", cfg.model);
    Box::new(GeminiClient::new(api_key, cfg.model.clone()))
}
