//! Diary CLI - Keep a personal diary from the command line
//!
//! The terminal presentation layer over the shared entry store. Every
//! command talks to the remote entry API; nothing is stored locally except
//! the configuration file.

mod cli;
mod commands;
mod config;
mod error;

use clap::{CommandFactory, Parser};

use crate::cli::{Cli, Commands, ConfigCommands};
use crate::config::{resolve_api_base_url, CliConfig};
use crate::error::CliError;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), CliError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("diary=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();
    let config = CliConfig::load().map_err(CliError::Config)?;
    let api_base_url = resolve_api_base_url(cli.api_url.as_deref(), &config);

    match cli.command {
        Some(Commands::Add {
            title,
            date,
            mood,
            content,
        }) => {
            commands::add::run_add(&title, &content, date, mood, &api_base_url).await?;
        }
        Some(Commands::List { mood, json }) => {
            commands::list::run_list(mood, json, &api_base_url).await?;
        }
        Some(Commands::Search { query, mood, json }) => {
            commands::search::run_search(&query, mood, json, &api_base_url).await?;
        }
        Some(Commands::Edit {
            id,
            title,
            date,
            mood,
            content,
        }) => {
            commands::edit::run_edit(id, title, date, mood, &content, &api_base_url).await?;
        }
        Some(Commands::Delete { id, yes }) => {
            commands::delete::run_delete(id, yes, &api_base_url).await?;
        }
        Some(Commands::Config { command }) => match command {
            ConfigCommands::Show => commands::config::run_config_show(&config),
            ConfigCommands::Set { theme, api_url } => {
                commands::config::run_config_set(theme, api_url)?;
            }
        },
        Some(Commands::Completions { shell, output }) => {
            commands::completions::run_completions(shell, output.as_deref())?;
        }
        None => {
            Cli::command().print_help()?;
            println!();
        }
    }

    Ok(())
}
