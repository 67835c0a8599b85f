use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use diary_core::{EntryId, Mood};

use crate::config::ThemeMode;

#[derive(Parser)]
#[command(name = "diary")]
#[command(about = "Keep a personal diary from the command line")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Base URL of the remote entry API
    #[arg(long, global = true, value_name = "URL")]
    pub api_url: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a new entry
    #[command(alias = "new")]
    Add {
        /// Entry title
        #[arg(short, long)]
        title: String,
        /// Entry date (YYYY-MM-DD, defaults to today)
        #[arg(long, value_name = "DATE")]
        date: Option<NaiveDate>,
        /// Mood tag
        #[arg(long, default_value_t = Mood::Neutral)]
        mood: Mood,
        /// Entry content (piped stdin or $EDITOR when omitted)
        content: Vec<String>,
    },
    /// List entries, newest first
    List {
        /// Only show entries with this mood
        #[arg(long)]
        mood: Option<Mood>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Search entries by title or content
    Search {
        /// Search term
        query: String,
        /// Only show entries with this mood
        #[arg(long)]
        mood: Option<Mood>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Edit an existing entry
    Edit {
        /// Entry ID
        id: EntryId,
        /// Replacement title (kept when omitted)
        #[arg(short, long)]
        title: Option<String>,
        /// Replacement date (kept when omitted)
        #[arg(long, value_name = "DATE")]
        date: Option<NaiveDate>,
        /// Replacement mood (kept when omitted)
        #[arg(long)]
        mood: Option<Mood>,
        /// Replacement content ($EDITOR seeded with the current content when omitted)
        content: Vec<String>,
    },
    /// Delete an entry
    Delete {
        /// Entry ID
        id: EntryId,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
    /// Show or change persisted preferences
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
    /// Generate shell completion scripts
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: CompletionShell,
        /// Optional output path (stdout when omitted)
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Print the current configuration
    Show,
    /// Update configuration values
    Set {
        /// Theme preference
        #[arg(long, value_enum)]
        theme: Option<ThemeMode>,
        /// Default API base URL
        #[arg(long, value_name = "URL")]
        api_url: Option<String>,
    },
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum CompletionShell {
    Bash,
    Zsh,
    Fish,
}
