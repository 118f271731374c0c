use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::{LlmClient, prompt_builder, response};
use crate::error::LlmError;

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Minimal request/response structs for the Gemini generateContent API.
#[derive(Serialize)]
struct GeminiRequest {
    contents: Vec<Content>,
}

#[derive(Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Deserialize)]
struct GeminiResponse {
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Content,
}

/// Gemini-based implementation of LlmClient.
pub struct GeminiClient {
    client: Client,
    api_key: String,
    model: String,
}

impl GeminiClient {
    pub fn new(api_key: String, model: String) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(90))
            .build()
            .expect("failed to build HTTP client");

        GeminiClient {
            client,
            api_key,
            model,
        }
    }

    /// One synchronous generateContent call; returns the first candidate's text.
    fn generate(&self, prompt: String) -> Result<String, LlmError> {
        let url = format!(
            "{}/{}:generateContent?key={}",
            GEMINI_API_BASE, self.model, self.api_key
        );

        log::info!("Calling Gemini model {:?}", self.model);

        let req = GeminiRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
        };

        let resp = self.client.post(&url).json(&req).send()?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().unwrap_or_default();
            return Err(LlmError::Api { status, body });
        }

        let parsed: GeminiResponse = resp.json()?;

        parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().next())
            .map(|p| p.text)
            .ok_or(LlmError::EmptyResponse)
    }
}

impl LlmClient for GeminiClient {
    fn suggest_commits(
        &self,
        diff: &str,
        context: Option<&str>,
    ) -> Result<Vec<String>, LlmError> {
        let prompt = prompt_builder::suggestion_prompt(diff, context);
        log::debug!("Suggestion prompt:\n{}", truncate(&prompt, 3000));

        let raw = self.generate(prompt)?;
        log::trace!("Raw Gemini response:\n{raw}");

        response::parse_suggestions(&raw)
    }
}

/// Truncate long strings for debug logging.
fn truncate(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else {
        format!(
            "{}...\n[truncated {} chars]",
            &s[..max_len],
            s.len() - max_len
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unwraps_the_first_candidate_text() {
        let body = r#"{
            "candidates": [
                {"content": {"parts": [{"text": "{\"commits\":[\"feat: a\"]}"}]}}
            ]
        }"#;

        let parsed: GeminiResponse = serde_json::from_str(body).unwrap();
        let text = parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().next())
            .map(|p| p.text)
            .unwrap();

        assert_eq!(text, "{\"commits\":[\"feat: a\"]}");
    }

    #[test]
    fn truncate_marks_the_cut() {
        let long = "x".repeat(50);
        let short = truncate(&long, 10);
        assert!(short.starts_with("xxxxxxxxxx..."));
        assert!(short.contains("[truncated 40 chars]"));
    }
}
