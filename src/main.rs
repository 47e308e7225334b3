//! recap - Transcript summaries powered by an LLM
//!
//! Entry point for the recap CLI application.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use recap::cli::{Cli, Commands};
use recap::config::Settings;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    match cli.command {
        Commands::Completions { shell } => {
            recap::cli::completions::print(shell);
        }
        command => {
            // Load configuration only for runtime commands.
            let settings = Settings::load()?;

            match command {
                Commands::Summarize {
                    file,
                    model,
                    output,
                } => {
                    recap::cli::commands::summarize_file(&settings, &file, model, output).await?;
                }
                Commands::Title { file, head } => {
                    recap::cli::commands::title_file(&settings, &file, head).await?;
                }
                Commands::Plan { file, model } => {
                    recap::cli::commands::plan_file(&settings, &file, model)?;
                }
                Commands::Models => {
                    recap::cli::commands::list_models(&settings);
                }
                Commands::Config(config_cmd) => {
                    recap::cli::commands::config_command(&settings, config_cmd)?;
                }
                Commands::Completions { .. } => unreachable!(),
            }
        }
    }

    Ok(())
}
