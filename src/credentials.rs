//! API-key bootstrap: load from disk, prompt once, persist.
//!
//! The store sits behind a trait so the suggestion pipeline never talks to a
//! terminal directly and tests can swap in an in-memory provider.

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::CredentialError;

/// The on-disk credential record. One recognized field.
#[derive(Debug, Default, Serialize, Deserialize)]
struct CredentialRecord {
    #[serde(rename = "apiKey")]
    api_key: Option<String>,
}

/// Capability the suggestion pipeline depends on for its API key.
pub trait CredentialProvider {
    /// Read the stored key. `Ok(None)` means no key is configured; `Err`
    /// means a record exists but could not be used.
    fn load(&self) -> Result<Option<String>, CredentialError>;

    /// Overwrite the stored record with the given key.
    fn save(&self, key: &str) -> Result<(), CredentialError>;

    /// Block on one unmasked line of interactive input.
    fn prompt_interactively(&self) -> Result<String, CredentialError>;
}

/// JSON-file-backed credential store at a caller-chosen path.
pub struct FileCredentialStore {
    path: PathBuf,
}

/// Default per-user location, `~/.aicommit-config`.
pub fn default_credential_path() -> PathBuf {
    dirs::home_dir().unwrap_or_default().join(".aicommit-config")
}

impl FileCredentialStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CredentialProvider for FileCredentialStore {
    fn load(&self) -> Result<Option<String>, CredentialError> {
        if !self.path.exists() {
            return Ok(None);
        }

        let data = fs::read_to_string(&self.path).map_err(|source| CredentialError::Read {
            path: self.path.clone(),
            source,
        })?;

        let record: CredentialRecord =
            serde_json::from_str(&data).map_err(|source| CredentialError::Parse {
                path: self.path.clone(),
                source,
            })?;

        Ok(record.api_key.filter(|key| !key.is_empty()))
    }

    fn save(&self, key: &str) -> Result<(), CredentialError> {
        let record = CredentialRecord {
            api_key: Some(key.to_string()),
        };
        let data =
            serde_json::to_string(&record).map_err(|source| CredentialError::Parse {
                path: self.path.clone(),
                source,
            })?;

        fs::write(&self.path, data).map_err(|source| CredentialError::Write {
            path: self.path.clone(),
            source,
        })?;

        println!("API key saved successfully.");
        Ok(())
    }

    fn prompt_interactively(&self) -> Result<String, CredentialError> {
        print!("Please enter your Gemini API key: ");
        io::stdout().flush().map_err(CredentialError::Prompt)?;

        let mut buf = String::new();
        io::stdin()
            .read_line(&mut buf)
            .map_err(CredentialError::Prompt)?;
        Ok(buf.trim().to_string())
    }
}

/// Load-or-prompt-or-persist. Never fails the caller: the worst case is an
/// empty key, which later surfaces as an authentication error from the API.
pub fn bootstrap(provider: &dyn CredentialProvider) -> String {
    let existing = match provider.load() {
        Ok(found) => found,
        Err(e) => {
            log::error!("{e}");
            None
        }
    };

    if let Some(key) = existing {
        return key;
    }

    println!("No API key found. Let's set it up.");
    let key = match provider.prompt_interactively() {
        Ok(key) => key,
        Err(e) => {
            log::error!("{e}");
            String::new()
        }
    };

    // A failed save still leaves the in-memory key usable for this run.
    if let Err(e) = provider.save(&key) {
        log::error!("{e}");
    }

    key
}
