//! Prompt templates for the generation flow
//!
//! The system instruction carries persistent style constraints; the user
//! instruction carries the concrete task. Both are deterministic given a
//! request and an already-resolved vocabulary domain.

use crate::core::request::GenerationRequest;
use crate::vocabulary::VocabularyDomain;

/// The system and user instructions for one completion call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptPair {
    /// Persistent style constraints (system role).
    pub system_instruction: String,
    /// The concrete task (user role).
    pub user_instruction: String,
}

/// Templates for composing the prompt pair
pub struct IpsumPromptTemplate;

impl IpsumPromptTemplate {
    /// Base style constraints, parameterized by word count.
    fn base_system(word_count: u32) -> String {
        format!(
            r#"You are a placeholder text generator. Your task is to generate a string of placeholder text that is {word_count} words long.

Requirements:
- Output exactly {word_count} English words.
- Favor novelty over familiarity (even if slightly bizarre/non-sensical).
- Avoid overused "LLM-poetry" vocabulary (do not use any of these words): whisper, whispers, whispering, dreamy, dream, dreams, cloud, clouds, velvet, crimson.
- Avoid corporate/process/computer phrasing (do not mention systems, parameters, documentation, data transfer; do not write requests like "please confirm").
- Prefer concrete objects, textures, and surprising pairings; write a statement, not an instruction.
"#
        )
    }

    /// Addendum for short phrases (fewer than ten words, non-title).
    fn short_phrase_addendum() -> &'static str {
        r#"
Additional requirements (short phrase):
- For short phrases, avoid punctuation entirely.
"#
    }

    /// Addendum for title/heading text.
    fn title_addendum() -> &'static str {
        r#"
Additional requirements (title text):
- Output should be usable as a title/heading: do not end the text with punctuation.
- Prefer noun phrases over complete sentences.
"#
    }

    /// Build the system instruction for a request.
    ///
    /// Title rules win over short-phrase rules; the two addenda are never
    /// combined.
    pub fn system_instruction(word_count: u32, is_title: bool) -> String {
        let mut prompt = Self::base_system(word_count);
        if is_title {
            prompt.push_str(Self::title_addendum());
        } else if word_count < 10 {
            prompt.push_str(Self::short_phrase_addendum());
        }
        prompt
    }

    /// Build the user instruction for a request and resolved domain.
    pub fn user_instruction(
        word_count: u32,
        domain: &VocabularyDomain,
        is_title: bool,
    ) -> String {
        let style_hint = if is_title { " suitable as a title" } else { "" };
        format!(
            "Instruction: Output exactly {word_count} words of placeholder text{style_hint}. \
             Draw vocabulary from: {domain}. Output *nothing* else.\n"
        )
    }

    /// Compose the full prompt pair for one completion call.
    pub fn compose(request: &GenerationRequest, domain: &VocabularyDomain) -> PromptPair {
        PromptPair {
            system_instruction: Self::system_instruction(request.word_count, request.is_title),
            user_instruction: Self::user_instruction(request.word_count, domain, request.is_title),
        }
    }
}
