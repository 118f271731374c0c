use anyhow::Result;
use clap::Parser;
use colored::Colorize;

mod cli_args;
mod config;
mod credentials;
mod error;
mod git;
mod llm;
mod logging;
mod setup;
mod ui;

use cli_args::Cli;
use config::Config;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logger(cli.verbose);

    println!("{}", "\nAI Git Commit Assistant".cyan().bold());

    git::ensure_repository()?;

    let status = git::repo_status()?;
    ui::print_status(&status);

    let Some(diff) = resolve_staged_diff()? else {
        return Ok(());
    };

    let config = Config::from_sources(&cli);
    let client = setup::build_llm_client(&cli, &config);

    let spinner = ui::Spinner::new("Generating commit suggestions...");
    let suggestions = llm::generate_suggestions(client.as_ref(), &diff, cli.context.as_deref());
    spinner.finish_and_clear();

    if suggestions.is_empty() {
        println!("{}", "\nNo commit suggestions were generated.".red());
        return Ok(());
    }

    ui::print_suggestions(&suggestions);
    let chosen = ui::select_suggestion(&suggestions)?;

    let commit_command = format!("git commit -m \"{chosen}\"");
    println!("{}", "\nCommit command:".cyan());
    println!("{commit_command}");
    match ui::copy_to_clipboard(&commit_command) {
        Ok(()) => println!("{}", "(copied to clipboard)".bright_black()),
        Err(e) => log::warn!("could not copy to clipboard: {e:#}"),
    }

    confirm_and_execute(&chosen)
}

/// The staged diff, or None when the user declines to stage anything.
fn resolve_staged_diff() -> Result<Option<String>> {
    loop {
        let diff = git::staged_diff()?;
        if !diff.trim().is_empty() {
            return Ok(Some(diff));
        }

        println!(
            "{}",
            "\nNo staged changes detected. Would you like to:".yellow()
        );
        println!("  1) Stage all changes");
        println!("  2) Stage changes interactively");
        println!("  3) Exit");

        match ui::prompt_input("Enter choice [1-3]: ")?.as_str() {
            "1" => {
                git::stage_all()?;
                println!("{}", "All changes staged".green());
            }
            "2" => git::stage_interactive()?,
            "3" | "" => return Ok(None),
            _ => println!("Invalid choice. Please enter 1, 2, or 3."),
        }
    }
}

/// Run the commit (and optionally push) once the user confirms. Failures
/// here are reported, not propagated; the command is already on the
/// clipboard.
fn confirm_and_execute(message: &str) -> Result<()> {
    if !ui::confirm("\nExecute this commit command now?", true)? {
        println!(
            "{}",
            "\nCommit command copied to clipboard. You can run it manually.".yellow()
        );
        return Ok(());
    }

    if let Err(e) = git::commit(message) {
        println!("{} {e:#}", "\nError executing git commit:".red());
        return Ok(());
    }
    println!("{}", "\nCommit successful!".green());

    if ui::confirm("Push these changes?", false)? {
        match git::push() {
            Ok(()) => println!("{}", "\nChanges pushed successfully!".green()),
            Err(e) => println!("{} {e:#}", "\nError pushing changes:".red()),
        }
    }

    Ok(())
}
