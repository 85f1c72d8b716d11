//! Sentence-level evidence selection
//!
//! Scores every sentence of the re-ranked chunks against the detected
//! intent and returns the highest-signal sentences, each carrying its
//! parent chunk's metadata for citation purposes.

use crate::sentence::split_into_sentences;
use ragpress_retrieval::{Intent, IntentInfo, RankedChunk, CONFIDENCE_THRESHOLD};
use regex_lite::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use uuid::Uuid;

/// Evidence sentence with inherited chunk metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evidence {
    /// Sentence text
    pub sentence: String,

    /// Page number inherited from the parent chunk
    pub page: Option<i32>,

    /// Section label inherited from the parent chunk
    pub section: Option<String>,

    /// Originating chunk, for citations
    pub chunk_id: Uuid,

    /// Intent-conditioned relevance score
    pub score: f32,
}

fn numbered_item_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\d+\.").expect("valid numbered-item pattern"))
}

/// Score one sentence against the detected intent.
///
/// Signals are additive at sentence granularity, with larger
/// increments than the chunk-level bonus since sentences are the
/// final unit fed to the budget step. `position` is the sentence's
/// index within its parent chunk.
pub fn score_sentence(sentence: &str, position: usize, intent: Intent) -> f32 {
    let sentence_lower = sentence.to_lowercase();
    let mut score = 0.0_f32;

    match intent {
        Intent::Result => {
            if sentence.chars().any(|c| c.is_ascii_digit()) {
                score += 0.20;
            }
            if sentence.contains('%') {
                score += 0.15;
            }
            if ["accuracy", "f1", "precision", "recall"]
                .iter()
                .any(|kw| sentence_lower.contains(kw))
            {
                score += 0.20;
            }
        }
        Intent::Method => {
            if ["step", "algorithm", "pipeline", "architecture"]
                .iter()
                .any(|kw| sentence_lower.contains(kw))
            {
                score += 0.20;
            }
            if numbered_item_re().is_match(sentence.trim_start())
                || sentence_lower.starts_with("first,")
            {
                score += 0.15;
            }
        }
        Intent::ApiUsage => {
            let symbols = ['(', ')', '=']
                .iter()
                .filter(|s| sentence.contains(**s))
                .count();
            if symbols >= 2 {
                score += 0.25;
            } else if symbols == 1 {
                score += 0.15;
            }
            if ["parameter", "argument", "return"]
                .iter()
                .any(|kw| sentence_lower.contains(kw))
            {
                score += 0.15;
            }
        }
        Intent::Definition => {
            if ["is defined as", "refers to", "means"]
                .iter()
                .any(|kw| sentence_lower.contains(kw))
            {
                score += 0.25;
            }
            if position < 2 {
                score += 0.10;
            }
        }
        Intent::Comparison => {
            if ["compare", "difference", "versus", "better", "worse"]
                .iter()
                .any(|kw| sentence_lower.contains(kw))
            {
                score += 0.20;
            }
        }
        Intent::Unknown => {}
    }

    score
}

/// Select high-signal evidence sentences from re-ranked chunks.
///
/// With a confident intent, sentences are scored by
/// [`score_sentence`] and zero-signal sentences are dropped. With an
/// unknown or low-confidence intent every sentence scores 0.0 and
/// survives in production order, so selection degrades to a
/// deterministic first-N fallback. The sort is stable: equal scores
/// keep the order in which sentences were produced. Returns at most
/// `limit` sentences, descending by score.
pub fn select_evidence(
    chunks: &[RankedChunk],
    intent_info: &IntentInfo,
    limit: usize,
) -> Vec<Evidence> {
    let apply_scoring =
        intent_info.intent != Intent::Unknown && intent_info.confidence > CONFIDENCE_THRESHOLD;

    let mut evidence = Vec::new();

    for chunk in chunks {
        for (position, sentence) in split_into_sentences(&chunk.text).into_iter().enumerate() {
            let score = if apply_scoring {
                score_sentence(&sentence, position, intent_info.intent)
            } else {
                0.0
            };

            if apply_scoring && score <= 0.0 {
                continue;
            }

            evidence.push(Evidence {
                sentence,
                page: chunk.metadata.page,
                section: chunk.metadata.section.clone(),
                chunk_id: chunk.chunk_id,
                score,
            });
        }
    }

    evidence.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    evidence.truncate(limit);

    evidence
}
