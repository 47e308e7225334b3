//! System prompts for each kind of model call.

use serde::{Deserialize, Serialize};

const SUMMARIZE_INSTRUCTIONS: &str = r#"You will be given a text that represents a lesson transcript.
        The main speaker does 90% of the talking. Sometimes others will ask questions and he will answer them.
        Please format everything in markdown. Create sections based on the topic that is being talked about.
        Be detailed, incorporate main ideas and essential information, eliminating extraneous language and focusing on critical aspects.
        Rely strictly on the provided text, without including external information.
        Take notes from the perspective of a listener. Use bullet points for main ideas. 
        Note should represent concrete advice that is being given."#;

const FIX_SUMMARY_INSTRUCTIONS: &str = r#"You will be given summary that is made out of multiple notes. 
        Please create one note out of it. Don't leave anything out unless it's already mentioned multiple times.
        Don't add any extra content.
        Fix the section names so that they don't repeat."#;

const TITLE_INSTRUCTIONS: &str =
    r#"You will be given part of a larger text, please provide the name that is 3-5 words long that reflects the text content."#;

/// What a model call is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Purpose {
    Summarize,
    FixSummary,
    Title,
}

/// System prompt text for every [`Purpose`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstructionSet {
    /// Summarize a whole transcript or a single chunk
    #[serde(default = "default_summarize")]
    pub summarize: String,

    /// Merge per-chunk summaries into one note
    #[serde(default = "default_fix_summary")]
    pub fix_summary: String,

    /// Derive a short title from the start of a transcript
    #[serde(default = "default_title")]
    pub title: String,
}

fn default_summarize() -> String {
    SUMMARIZE_INSTRUCTIONS.to_string()
}

fn default_fix_summary() -> String {
    FIX_SUMMARY_INSTRUCTIONS.to_string()
}

fn default_title() -> String {
    TITLE_INSTRUCTIONS.to_string()
}

impl Default for InstructionSet {
    fn default() -> Self {
        Self {
            summarize: default_summarize(),
            fix_summary: default_fix_summary(),
            title: default_title(),
        }
    }
}

impl InstructionSet {
    pub fn get(&self, purpose: Purpose) -> &str {
        match purpose {
            Purpose::Summarize => &self.summarize,
            Purpose::FixSummary => &self.fix_summary,
            Purpose::Title => &self.title,
        }
    }
}
