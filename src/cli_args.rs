use clap::{ArgGroup, Parser};
use std::path::PathBuf;

/// CLI options
#[derive(Parser, Debug)]
#[command(
    name = "aicommit",
    version,
    about = "AI-assisted commit message suggestions for your staged changes"
)]
#[command(group(
    ArgGroup::new("model_group")
        .args(["model", "no_model"])
        .multiple(false)
))]
pub struct Cli {
    /// Optional free-text context to steer the suggestions
    pub context: Option<String>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Model name to use (e.g. gemini-1.5-flash). If 'none', acts like --no-model.
    #[arg(long)]
    pub model: Option<String>,

    /// Disable model calls; return canned suggestions instead
    #[arg(long)]
    pub no_model: bool,

    /// API key (otherwise uses the GEMINI_API_KEY env var or the credential file)
    #[arg(long, env = "GEMINI_API_KEY")]
    pub api_key: Option<String>,

    /// Path of the credential file (defaults to ~/.aicommit-config)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}
