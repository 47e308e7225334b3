//! Known models and their context window sizes.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::{RecapError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelProfile {
    /// Maximum tokens per call, prompt and response combined
    pub context_tokens: u32,
}

/// Model id to [`ModelProfile`] mapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModelTable {
    models: BTreeMap<String, ModelProfile>,
}

impl Default for ModelTable {
    fn default() -> Self {
        Self::new()
            .with("gpt-4-0125-preview", 128_000)
            .with("gpt-3.5-turbo-0125", 16_385)
            .with("gemini-2.5-flash", 1_048_576)
    }
}

impl ModelTable {
    /// An empty table
    pub fn new() -> Self {
        Self {
            models: BTreeMap::new(),
        }
    }

    /// Add or replace a model entry
    pub fn with(mut self, id: impl Into<String>, context_tokens: u32) -> Self {
        self.models
            .insert(id.into(), ModelProfile { context_tokens });
        self
    }

    /// Look up a model, failing with a configuration error for unknown ids
    pub fn get(&self, id: &str) -> Result<&ModelProfile> {
        self.models.get(id).ok_or_else(|| {
            let known: Vec<&str> = self.models.keys().map(String::as_str).collect();
            RecapError::Config(format!(
                "Unknown model '{}'. Known models: {}",
                id,
                if known.is_empty() {
                    "none".to_string()
                } else {
                    known.join(", ")
                }
            ))
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ModelProfile)> {
        self.models.iter().map(|(id, profile)| (id.as_str(), profile))
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}
