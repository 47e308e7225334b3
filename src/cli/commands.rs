//! CLI command implementations

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::cli::args::ConfigCommand;
use crate::config::Settings;
use crate::llm::build_provider;
use crate::summary::{self, Plan, Strategy, TranscriptSummarizer};

/// Summarize a transcript file and write the markdown summary
pub async fn summarize_file(
    settings: &Settings,
    file: &Path,
    model: Option<String>,
    output: Option<PathBuf>,
) -> Result<()> {
    let transcript = read_transcript(file)?;
    let model = model.unwrap_or_else(|| settings.llm.model().to_string());
    let output = output.unwrap_or_else(|| settings.summarize.output.clone());

    // Fail on an unknown model before asking for credentials.
    settings.models.get(&model)?;

    let provider = build_provider(settings)?;
    let summarizer = TranscriptSummarizer::from_settings(settings, provider.as_ref());

    let outcome = summarizer.summarize(&transcript, &model, &output).await?;

    match outcome.strategy {
        Strategy::Direct => println!("Summary written to {}", output.display()),
        Strategy::Chunked { chunks } => println!(
            "Summary written to {} (merged from {} parts)",
            output.display(),
            chunks
        ),
    }

    Ok(())
}

/// Print a short, filename-safe title for a transcript file
pub async fn title_file(settings: &Settings, file: &Path, head: Option<usize>) -> Result<()> {
    let transcript = read_transcript(file)?;
    let head = head.unwrap_or(settings.summarize.title_head_chars);

    let provider = build_provider(settings)?;
    let summarizer = TranscriptSummarizer::from_settings(settings, provider.as_ref());

    let title = summarizer.title_for(&transcript, head).await?;
    println!("{}", title);

    Ok(())
}

/// Show how a transcript would be summarized
pub fn plan_file(settings: &Settings, file: &Path, model: Option<String>) -> Result<()> {
    let transcript = read_transcript(file)?;
    let model = model.unwrap_or_else(|| settings.llm.model().to_string());

    let profile = settings.models.get(&model)?;
    let policy = settings.summarize.policy();
    let context_chars = policy.context_chars(profile);

    println!(
        "Model: {} ({} tokens, {} characters)",
        model, profile.context_tokens, context_chars
    );
    println!("Transcript: {} characters", transcript.chars().count());

    match summary::plan(&transcript, context_chars, &policy) {
        Plan::Direct => {
            println!("Path: direct (1 model call)");
        }
        Plan::Chunked(chunks) => {
            println!(
                "Path: chunked ({} chunks, {} model calls)",
                chunks.len(),
                chunks.len() + 1
            );
            for (i, chunk) in chunks.iter().enumerate() {
                println!(
                    "  Chunk {}: {} characters, {} sentences",
                    i + 1,
                    chunk.chars(),
                    chunk.sentences().len()
                );
            }
        }
    }

    Ok(())
}

/// List known models
pub fn list_models(settings: &Settings) {
    if settings.models.is_empty() {
        println!("No models configured");
        return;
    }

    let width = settings
        .models
        .iter()
        .map(|(id, _)| id.len())
        .max()
        .unwrap_or(0);

    for (id, profile) in settings.models.iter() {
        let marker = if id == settings.llm.model() {
            " (default)"
        } else {
            ""
        };
        println!(
            "{:<width$}  {:>7} tokens{}",
            id,
            profile.context_tokens,
            marker,
            width = width
        );
    }
}

/// Handle config subcommands
pub fn config_command(settings: &Settings, cmd: ConfigCommand) -> Result<()> {
    match cmd {
        ConfigCommand::Show => {
            let toml = toml::to_string_pretty(&redacted(settings))?;
            println!("{}", toml);
        }
        ConfigCommand::Path => {
            let path = Settings::config_path()?;
            println!("{}", path.display());
        }
        ConfigCommand::Init { force } => {
            let path = Settings::config_path()?;
            if path.exists() && !force {
                anyhow::bail!(
                    "Config file already exists at {}. Use --force to overwrite.",
                    path.display()
                );
            }
            Settings::write_default(&path)?;
            println!("Configuration initialized at: {}", path.display());
        }
    }

    Ok(())
}

// Helper functions

fn read_transcript(file: &Path) -> Result<String> {
    std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read transcript: {}", file.display()))
}

fn redacted(settings: &Settings) -> Settings {
    let mut settings = settings.clone();
    if !settings.llm.api_key.is_empty() {
        settings.llm.api_key = "********".to_string();
    }
    settings
}
