pub mod gemini;
mod prompt_builder;
mod prompts;
pub mod response;

use crate::error::LlmError;

/// Trait for talking to an LLM backend.
pub trait LlmClient {
    /// Turn (diff, context) into an ordered list of candidate commit messages.
    fn suggest_commits(
        &self,
        diff: &str,
        context: Option<&str>,
    ) -> Result<Vec<String>, LlmError>;
}

/// Offline client for development with --no-model or model=none.
pub struct NoopClient;

impl LlmClient for NoopClient {
    fn suggest_commits(
        &self,
        _diff: &str,
        _context: Option<&str>,
    ) -> Result<Vec<String>, LlmError> {
        Ok(vec![
            "feat(core): add dummy suggestion output".to_string(),
            "fix(core): correct placeholder behavior".to_string(),
            "refactor(core): simplify offline code path".to_string(),
            "chore(core): exercise the selection flow".to_string(),
        ])
    }
}

/// Soft boundary around the remote call: every failure mode (network,
/// malformed JSON, missing field, credential rejection) degrades to an empty
/// list plus a diagnostic. Callers never see an error from here.
pub fn generate_suggestions(
    client: &dyn LlmClient,
    diff: &str,
    context: Option<&str>,
) -> Vec<String> {
    match client.suggest_commits(diff, context) {
        Ok(suggestions) => suggestions,
        Err(e) => {
            log::error!("{e}");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Client that replays a canned HTTP body through the real response
    /// sanitization and validation path.
    struct CannedClient {
        body: &'static str,
    }

    impl LlmClient for CannedClient {
        fn suggest_commits(
            &self,
            _diff: &str,
            _context: Option<&str>,
        ) -> Result<Vec<String>, LlmError> {
            response::parse_suggestions(self.body)
        }
    }

    struct FailingClient;

    impl LlmClient for FailingClient {
        fn suggest_commits(
            &self,
            _diff: &str,
            _context: Option<&str>,
        ) -> Result<Vec<String>, LlmError> {
            Err(LlmError::EmptyResponse)
        }
    }

    #[test]
    fn returns_the_four_suggestions_in_model_order() {
        let client = CannedClient {
            body: r#"{"commits":["feat(x): add hi log","fix(x): correct typo","refactor(x): simplify log","style(x): format log"]}"#,
        };

        let diff = "diff --git a/x b/x\n+console.log('hi')\n";
        let suggestions = generate_suggestions(&client, diff, None);

        assert_eq!(
            suggestions,
            vec![
                "feat(x): add hi log",
                "fix(x): correct typo",
                "refactor(x): simplify log",
                "style(x): format log",
            ]
        );
    }

    #[test]
    fn prose_response_degrades_to_empty() {
        let client = CannedClient {
            body: "Sorry, I cannot produce commit messages for this diff.",
        };
        assert!(generate_suggestions(&client, "some diff", None).is_empty());
    }

    #[test]
    fn client_failure_degrades_to_empty() {
        assert!(generate_suggestions(&FailingClient, "", None).is_empty());
    }

    #[test]
    fn empty_diff_and_context_are_accepted() {
        let client = CannedClient {
            body: r#"{"commits":["chore: noop"]}"#,
        };
        assert_eq!(
            generate_suggestions(&client, "", Some("")),
            vec!["chore: noop"]
        );
    }
}
