use std::path::Path;

use crate::config::Settings;
use crate::llm::{CompletionRequest, InstructionSet, LlmProvider, Purpose};
use crate::summary::chunker::{self, ChunkPolicy, Plan};
use crate::summary::models::ModelTable;
use crate::summary::output::write_summary;
use crate::{RecapError, Result};

/// Which path produced a summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    Direct,
    Chunked { chunks: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryOutcome {
    pub summary: String,
    pub strategy: Strategy,
}

/// Summarizes transcripts and names them through an [`LlmProvider`].
///
/// Model calls are issued one at a time, in chunk order. Nothing is retried:
/// the first failing call aborts the whole operation.
pub struct TranscriptSummarizer<'a> {
    provider: &'a dyn LlmProvider,
    models: &'a ModelTable,
    instructions: &'a InstructionSet,
    policy: ChunkPolicy,
    default_model: &'a str,
}

impl<'a> TranscriptSummarizer<'a> {
    pub fn new(
        provider: &'a dyn LlmProvider,
        models: &'a ModelTable,
        instructions: &'a InstructionSet,
        policy: ChunkPolicy,
        default_model: &'a str,
    ) -> Self {
        Self {
            provider,
            models,
            instructions,
            policy,
            default_model,
        }
    }

    pub fn from_settings(settings: &'a Settings, provider: &'a dyn LlmProvider) -> Self {
        Self::new(
            provider,
            &settings.models,
            &settings.instructions,
            settings.summarize.policy(),
            settings.llm.model(),
        )
    }

    /// Send one system + user message pair and return the completion text.
    pub async fn complete(&self, instructions: &str, text: &str, model: &str) -> Result<String> {
        self.provider
            .complete(CompletionRequest {
                model,
                instructions,
                text,
            })
            .await
    }

    /// Produce the final summary without writing it anywhere.
    pub async fn compose(&self, transcript: &str, model: &str) -> Result<SummaryOutcome> {
        let profile = self.models.get(model)?;
        if transcript.is_empty() {
            return Err(RecapError::Transcript("Transcript is empty".to_string()));
        }

        let context_chars = self.policy.context_chars(profile);
        let summarize = self.instructions.get(Purpose::Summarize);

        let chunks = match chunker::plan(transcript, context_chars, &self.policy) {
            Plan::Direct => {
                tracing::debug!(
                    "Transcript has {} characters, summarizing in one call",
                    transcript.chars().count()
                );
                let summary = self.complete(summarize, transcript, model).await?;
                return Ok(SummaryOutcome {
                    summary,
                    strategy: Strategy::Direct,
                });
            }
            Plan::Chunked(chunks) => chunks,
        };

        for (i, chunk) in chunks.iter().enumerate() {
            tracing::debug!("Chunk {} has {} characters", i + 1, chunk.chars());
        }

        let mut partials = Vec::with_capacity(chunks.len());
        for (i, chunk) in chunks.iter().enumerate() {
            tracing::info!("Summarizing part {}/{}", i + 1, chunks.len());
            partials.push(self.complete(summarize, &chunk.text(), model).await?);
        }

        let joined = partials.join("\n");
        let joined_chars = joined.chars().count() as u64;
        if joined_chars > context_chars {
            // Merging is a single call; oversized input is passed through as is.
            tracing::warn!(
                "Partial summaries total {} characters, above the {} character context of {}",
                joined_chars,
                context_chars,
                model
            );
        }

        tracing::info!("Merging {} partial summaries", partials.len());
        let summary = self
            .complete(self.instructions.get(Purpose::FixSummary), &joined, model)
            .await?;

        Ok(SummaryOutcome {
            summary,
            strategy: Strategy::Chunked {
                chunks: chunks.len(),
            },
        })
    }

    /// Summarize `transcript` and write the result to `output`.
    ///
    /// The file is only touched once the final summary exists.
    pub async fn summarize(
        &self,
        transcript: &str,
        model: &str,
        output: &Path,
    ) -> Result<SummaryOutcome> {
        let outcome = self.compose(transcript, model).await?;
        write_summary(output, &outcome.summary)?;
        Ok(outcome)
    }

    /// Ask the default model for a short, filename-safe title.
    pub async fn title_for(&self, transcript: &str, head_chars: usize) -> Result<String> {
        let head: String = transcript.chars().take(head_chars).collect();
        let title = self
            .complete(self.instructions.get(Purpose::Title), &head, self.default_model)
            .await?;
        Ok(format_title(&title))
    }
}

/// Drop double quotes and turn spaces into underscores.
pub fn format_title(raw: &str) -> String {
    raw.replace('"', "").replace(' ', "_")
}
