//! Summarization module for recap
//!
//! Decides between a single call and the split/summarize/merge path, and
//! writes the final summary to disk.

mod chunker;
mod models;
mod output;
mod summarizer;

pub use chunker::{chunk_transcript, plan, split_sentences, Chunk, ChunkPolicy, Plan};
pub use models::{ModelProfile, ModelTable};
pub use output::write_summary;
pub use summarizer::{format_title, Strategy, SummaryOutcome, TranscriptSummarizer};
