pub const SUGGESTION_INSTRUCTIONS: &str = r#"As an expert Git commit message writer, analyze the following git diff and generate semantic, conventional commits following best practices.

Requirements for commit messages:
- Follow the Conventional Commits specification (type(scope): description).
- Use types: feat, fix, refactor, style, docs, test, chore.
- Include a scope when it is clear from the changes.
- Keep each message under 72 characters.
- Use imperative mood ("add" not "added").
- Focus on WHY and WHAT, not HOW.
- Highlight key impacts and breaking changes.
- Be specific but concise.
- Commit messages should be in lowercase.

Return EXACTLY 4 commit message suggestions in this JSON format:
{
  "commits": [
    "feat(scope): concise description of main feature change",
    "fix(scope): specific bug fix description",
    "refactor(scope): what was improved and why",
    "style(scope): what was reformatted or styled"
  ]
}

RULES:
- ONLY return valid JSON.
- NO explanations, code fences, or additional text.
- EXACTLY 4 suggestions.
- Each message MUST be complete and meaningful.
- NEVER include placeholder text."#;
