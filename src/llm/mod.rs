//! LLM module for recap
//!
//! The remote model service behind a small provider trait, plus the system
//! prompts each summarization step sends.

mod client;
mod gemini;
mod openai;
mod prompts;

pub use client::{build_provider, CompletionRequest, LlmProvider};
pub use gemini::GeminiClient;
pub use openai::OpenAiClient;
pub use prompts::{InstructionSet, Purpose};
