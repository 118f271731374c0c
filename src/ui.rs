//! Console rendering and interactive prompts.

use std::io::{self, Write};

use anyhow::{Result, bail};
use arboard::Clipboard;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use crate::git::RepoStatus;

/// Status header printed before the diff is collected.
pub fn print_status(status: &RepoStatus) {
    println!("{}", "\nGit Status:".cyan());
    println!("Branch: {}", status.branch);
    if status.has_unstaged {
        println!("{}", "You have unstaged changes".yellow());
    }
}

/// Numbered suggestion list with the conventional-commit prefix highlighted.
pub fn print_suggestions(suggestions: &[String]) {
    println!("{}", "\nAI Commit Suggestions:\n".cyan());
    for (index, suggestion) in suggestions.iter().enumerate() {
        let number = format!("{}. ", index + 1).bright_black();
        match suggestion.split_once(':') {
            Some((kind, rest)) => {
                println!("{}{}{}", number, format!("{kind}:").green(), rest)
            }
            None => println!("{number}{suggestion}"),
        }
    }
}

/// Ask the user a question and return a trimmed input line.
pub fn prompt_input(prompt: &str) -> Result<String> {
    print!("{prompt}");
    io::stdout().flush()?;

    let mut buf = String::new();
    let read = io::stdin().read_line(&mut buf)?;
    if read == 0 {
        bail!("input stream closed");
    }
    Ok(buf.trim().to_string())
}

/// Selection loop over the numbered suggestion list.
pub fn select_suggestion(suggestions: &[String]) -> Result<String> {
    loop {
        let input = prompt_input(&format!(
            "\nSelect a commit message [1-{}]: ",
            suggestions.len()
        ))?;

        match input.parse::<usize>() {
            Ok(choice) if (1..=suggestions.len()).contains(&choice) => {
                return Ok(suggestions[choice - 1].clone());
            }
            _ => println!(
                "Invalid choice. Please enter a number between 1 and {}.",
                suggestions.len()
            ),
        }
    }
}

/// Yes/no confirmation; bare Enter picks the default.
pub fn confirm(question: &str, default_yes: bool) -> Result<bool> {
    let hint = if default_yes { "[Y/n]" } else { "[y/N]" };
    loop {
        let input = prompt_input(&format!("{question} {hint} "))?;
        match input.to_lowercase().as_str() {
            "" => return Ok(default_yes),
            "y" | "yes" => return Ok(true),
            "n" | "no" => return Ok(false),
            _ => println!("Please answer y or n."),
        }
    }
}

/// Spinner shown while the remote call is in flight.
pub struct Spinner {
    pb: ProgressBar,
}

impl Spinner {
    pub fn new(message: &str) -> Self {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .expect("invalid spinner template"),
        );
        pb.set_message(message.to_string());
        pb.enable_steady_tick(std::time::Duration::from_millis(80));
        Self { pb }
    }

    pub fn finish_and_clear(&self) {
        self.pb.finish_and_clear();
    }
}

/// Copy text to the system clipboard.
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut clipboard = Clipboard::new()?;
    clipboard.set_text(text.to_string())?;
    Ok(())
}
