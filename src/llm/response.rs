//! Sanitization and validation of the model's suggestion payload.

use serde::Deserialize;

use crate::error::LlmError;

#[derive(Deserialize)]
struct SuggestionPayload {
    commits: Vec<String>,
}

/// Remove any markdown code-fence markup the model wrapped around the JSON,
/// tagged or not, wherever it appears.
pub fn strip_code_fences(raw: &str) -> String {
    raw.replace("```json", "")
        .replace("```", "")
        .trim()
        .to_string()
}

/// Parse a raw model response into the suggestion list.
///
/// The instruction asks for exactly four entries, but the count is advisory:
/// whatever array comes back is passed through unchanged.
pub fn parse_suggestions(raw: &str) -> Result<Vec<String>, LlmError> {
    let cleaned = strip_code_fences(raw);

    let value: serde_json::Value =
        serde_json::from_str(&cleaned).map_err(LlmError::MalformedResponse)?;

    let payload: SuggestionPayload =
        serde_json::from_value(value).map_err(|_| LlmError::InvalidShape)?;

    Ok(payload.commits)
}

#[cfg(test)]
mod tests {
    use super::*;

    const FOUR: &str =
        r#"{"commits":["feat(x): add hi log","fix(x): correct typo","refactor(x): simplify log","style(x): format log"]}"#;

    #[test]
    fn parses_bare_json() {
        let commits = parse_suggestions(FOUR).unwrap();
        assert_eq!(commits.len(), 4);
        assert_eq!(commits[0], "feat(x): add hi log");
        assert_eq!(commits[3], "style(x): format log");
    }

    #[test]
    fn tagged_fence_parses_identically_to_bare_json() {
        let fenced = format!("```json\n{FOUR}\n```");
        assert_eq!(
            parse_suggestions(&fenced).unwrap(),
            parse_suggestions(FOUR).unwrap()
        );
    }

    #[test]
    fn untagged_fence_parses_identically_to_bare_json() {
        let fenced = format!("```\n{FOUR}\n```");
        assert_eq!(
            parse_suggestions(&fenced).unwrap(),
            parse_suggestions(FOUR).unwrap()
        );
    }

    #[test]
    fn truncated_json_is_rejected_without_panicking() {
        let result = parse_suggestions(r#"{"commits":["feat: a", "fix: b""#);
        assert!(matches!(result, Err(LlmError::MalformedResponse(_))));
    }

    #[test]
    fn prose_is_rejected() {
        let result = parse_suggestions("Here are some commit ideas you could use.");
        assert!(matches!(result, Err(LlmError::MalformedResponse(_))));
    }

    #[test]
    fn missing_commits_field_is_rejected() {
        let result = parse_suggestions(r#"{"messages":["feat: a"]}"#);
        assert!(matches!(result, Err(LlmError::InvalidShape)));
    }

    #[test]
    fn non_array_commits_field_is_rejected() {
        let result = parse_suggestions(r#"{"commits":"feat: a"}"#);
        assert!(matches!(result, Err(LlmError::InvalidShape)));
    }

    #[test]
    fn non_string_entries_are_rejected() {
        let result = parse_suggestions(r#"{"commits":[1,2,3,4]}"#);
        assert!(matches!(result, Err(LlmError::InvalidShape)));
    }

    #[test]
    fn count_is_not_enforced() {
        let commits = parse_suggestions(r#"{"commits":["feat: a","fix: b"]}"#).unwrap();
        assert_eq!(commits, vec!["feat: a", "fix: b"]);
    }

    #[test]
    fn fence_markers_inside_one_line_are_stripped_globally() {
        let raw = "```json{\"commits\":[\"docs: x\"]}```";
        assert_eq!(parse_suggestions(raw).unwrap(), vec!["docs: x"]);
    }
}
