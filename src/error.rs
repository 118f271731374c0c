//! Typed errors for the credential and LLM boundaries.
//!
//! Both enums funnel to the same observable outcome (an empty suggestion
//! list plus a diagnostic), but callers can still tell "no key configured"
//! apart from "key file corrupted" and a network failure apart from a
//! malformed response.

use std::path::PathBuf;

use thiserror::Error;

/// Failures while reading, writing, or prompting for the API credential.
#[derive(Debug, Error)]
pub enum CredentialError {
    #[error("failed to read credential file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("credential file {path} is not a valid JSON record: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to write credential file {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read API key from stdin: {0}")]
    Prompt(#[source] std::io::Error),
}

/// Failures while calling the model or interpreting its response.
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("request to the Gemini API failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Gemini API error: HTTP {status} - {body}")]
    Api { status: u16, body: String },

    #[error("the Gemini API returned no candidates")]
    EmptyResponse,

    #[error("model response is not valid JSON: {0}")]
    MalformedResponse(#[source] serde_json::Error),

    #[error("model response did not contain a \"commits\" array of strings")]
    InvalidShape,
}
