//! recap - Turn long transcripts into markdown summaries with an LLM
//!
//! Short transcripts are summarized with a single model call. Transcripts that
//! do not fit the model's context window are split into sentence-aligned
//! chunks, summarized part by part and merged with a final call.

pub mod cli;
pub mod config;
pub mod llm;
pub mod summary;

use thiserror::Error;

/// Main error type for recap
#[derive(Error, Debug)]
pub enum RecapError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Remote service error: {0}")]
    RemoteService(String),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Transcript error: {0}")]
    Transcript(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, RecapError>;

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = "recap";
