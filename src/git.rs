use anyhow::{Context, Result, anyhow};
use std::process::{Command as GitCommand, Stdio};

/// Snapshot of the working tree, shown in the status header.
#[derive(Debug, Clone)]
pub struct RepoStatus {
    pub branch: String,
    pub has_unstaged: bool,
}

/// Run a git command and capture stdout as String.
pub fn git_output(args: &[&str]) -> Result<String> {
    let output = GitCommand::new("git")
        .args(args)
        .output()
        .with_context(|| format!("failed to run git {:?}", args))?;

    if !output.status.success() {
        return Err(anyhow!(
            "git {:?} exited with status {:?}",
            args,
            output.status.code()
        ));
    }

    Ok(String::from_utf8_lossy(&output.stdout).to_string())
}

/// Run a git command with the user's terminal attached.
fn git_passthrough(args: &[&str]) -> Result<()> {
    let status = GitCommand::new("git")
        .args(args)
        .status()
        .with_context(|| format!("failed to run git {:?}", args))?;

    if !status.success() {
        return Err(anyhow!(
            "git {:?} exited with status {:?}",
            args,
            status.code()
        ));
    }

    Ok(())
}

/// Fatal gate: nothing downstream can proceed outside a git work tree.
pub fn ensure_repository() -> Result<()> {
    let status = GitCommand::new("git")
        .args(["rev-parse", "--is-inside-work-tree"])
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .context("git is not installed or not on PATH")?;

    if !status.success() {
        return Err(anyhow!(
            "not a git repository (or any of the parent directories)"
        ));
    }

    Ok(())
}

/// Get the current branch name.
pub fn current_branch() -> Result<String> {
    let name = git_output(&["rev-parse", "--abbrev-ref", "HEAD"])?
        .trim()
        .to_string();
    Ok(name)
}

/// Branch name plus unstaged-change presence.
pub fn repo_status() -> Result<RepoStatus> {
    let branch = current_branch()?;
    let unstaged = git_output(&["diff", "--name-only"])?;

    Ok(RepoStatus {
        branch,
        has_unstaged: !unstaged.trim().is_empty(),
    })
}

/// Get the full staged diff.
pub fn staged_diff() -> Result<String> {
    git_output(&["diff", "--cached"])
}

/// Stage all new, modified, and deleted files.
pub fn stage_all() -> Result<()> {
    log::warn!("Staging all changes");
    git_output(&["add", "-A"])?;
    Ok(())
}

/// Hand the terminal to `git add -i`.
pub fn stage_interactive() -> Result<()> {
    git_passthrough(&["add", "-i"])
}

/// Create the commit with the chosen message.
pub fn commit(message: &str) -> Result<()> {
    git_passthrough(&["commit", "-m", message])
}

/// Push the current branch.
pub fn push() -> Result<()> {
    git_passthrough(&["push"])
}
