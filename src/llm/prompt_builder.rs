use super::prompts;

/// Build the single instruction sent to the model, embedding the diff and
/// optional context verbatim.
pub fn suggestion_prompt(diff: &str, context: Option<&str>) -> String {
    let context = match context {
        Some(text) if !text.trim().is_empty() => text,
        _ => "No additional context provided",
    };

    format!(
        "{instructions}\n\nDIFF:\n{diff}\n\nCONTEXT:\n{context}",
        instructions = prompts::SUGGESTION_INSTRUCTIONS,
        diff = diff,
        context = context
    )
}
