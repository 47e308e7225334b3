//! Configuration module for recap
//!
//! Handles loading and managing application settings from TOML files.

mod settings;

pub use settings::{LlmSettings, Settings, SummarizeSettings};
