//! Sentence-aligned chunking of oversized transcripts.
//!
//! Sentences are the pieces between `.` characters. A chunk is a run of
//! consecutive sentences; chunks are rejoined with `.`, so the period that
//! ended the last sentence of each chunk is not part of the chunk text.

use crate::summary::models::ModelProfile;

/// Size thresholds, as percentages of a model's context window in characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkPolicy {
    pub chars_per_token: u32,
    /// A transcript shorter than this share is summarized with one call
    pub direct_percent: u32,
    /// A chunk is closed once its length grows past this share
    pub chunk_percent: u32,
}

impl Default for ChunkPolicy {
    fn default() -> Self {
        Self {
            chars_per_token: 4,
            direct_percent: 60,
            chunk_percent: 80,
        }
    }
}

impl ChunkPolicy {
    /// Context window of `profile` expressed in characters
    pub fn context_chars(&self, profile: &ModelProfile) -> u64 {
        u64::from(profile.context_tokens) * u64::from(self.chars_per_token)
    }

    /// True when a transcript of `chars` characters fits in a single call
    pub fn fits_directly(&self, chars: usize, context_chars: u64) -> bool {
        (chars as u64) * 100 < context_chars * u64::from(self.direct_percent)
    }

    fn chunk_full(&self, accumulated: usize, context_chars: u64) -> bool {
        (accumulated as u64) * 100 > context_chars * u64::from(self.chunk_percent)
    }
}

/// A run of consecutive sentences sent to the model as one unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk<'a> {
    sentences: Vec<&'a str>,
    chars: usize,
}

impl<'a> Chunk<'a> {
    fn new() -> Self {
        Self {
            sentences: Vec::new(),
            chars: 0,
        }
    }

    fn push(&mut self, sentence: &'a str) {
        self.chars += sentence.chars().count();
        self.sentences.push(sentence);
    }

    pub fn sentences(&self) -> &[&'a str] {
        &self.sentences
    }

    /// Sum of sentence lengths in characters, excluding the rejoining periods
    pub fn chars(&self) -> usize {
        self.chars
    }

    /// Sentences rejoined with `.`
    pub fn text(&self) -> String {
        self.sentences.join(".")
    }
}

/// How a transcript will be summarized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Plan<'a> {
    Direct,
    Chunked(Vec<Chunk<'a>>),
}

/// Split on `.`; a trailing empty piece after a final period is not a sentence.
pub fn split_sentences(text: &str) -> Vec<&str> {
    text.split_terminator('.').collect()
}

/// Greedily group sentences into chunks.
///
/// The size check runs before a sentence is appended: once the running total
/// has passed the chunk threshold the current chunk is closed and the sentence
/// opens the next one. Every chunk therefore stays within the threshold plus
/// its final sentence, and no sentence is dropped or repeated.
pub fn chunk_transcript<'a>(
    transcript: &'a str,
    context_chars: u64,
    policy: &ChunkPolicy,
) -> Vec<Chunk<'a>> {
    let mut chunks = Vec::new();
    let mut current = Chunk::new();

    for sentence in split_sentences(transcript) {
        if policy.chunk_full(current.chars, context_chars) {
            chunks.push(std::mem::replace(&mut current, Chunk::new()));
        }
        current.push(sentence);
    }

    if !current.sentences.is_empty() {
        chunks.push(current);
    }

    chunks
}

/// Decide between the direct and the chunked path for `transcript`.
pub fn plan<'a>(transcript: &'a str, context_chars: u64, policy: &ChunkPolicy) -> Plan<'a> {
    if policy.fits_directly(transcript.chars().count(), context_chars) {
        Plan::Direct
    } else {
        Plan::Chunked(chunk_transcript(transcript, context_chars, policy))
    }
}
