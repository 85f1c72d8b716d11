//! Token budget management
//!
//! Greedily packs ranked evidence sentences into a fixed token
//! budget and assembles the final compressed context string.

use crate::evidence::Evidence;
use serde::{Deserialize, Serialize};

/// Separator between selected sentences in the compressed context
const SENTENCE_SEPARATOR: &str = "\n\n";

/// Result of applying the token budget
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompressionResult {
    /// Selected sentences joined in rank order
    pub compressed_context: String,

    /// Selected evidence, in selection order
    pub selected_evidence: Vec<Evidence>,

    /// Estimated tokens consumed by the selection
    pub tokens_used: usize,

    /// Number of sentences selected
    pub num_sentences: usize,

    /// True only when the forced-inclusion rule had to exceed the
    /// budget to avoid an empty result
    pub budget_exceeded: bool,
}

/// Estimate token count using a fixed approximation.
///
/// Rule of thumb: ~4 characters per token for English text, rounded
/// up. A rough approximation; real tokenizers vary.
pub fn estimate_tokens(text: &str) -> usize {
    text.len().div_ceil(4)
}

/// Fraction of tokens saved relative to an uncompressed baseline
pub fn token_reduction_ratio(baseline_tokens: usize, compressed_tokens: usize) -> f32 {
    if baseline_tokens == 0 {
        return 0.0;
    }
    1.0 - (compressed_tokens as f32 / baseline_tokens as f32)
}

/// Apply the token budget to ranked evidence.
///
/// Walks the list in the given (already-ranked) order and includes
/// each sentence whose estimated cost still fits; over-budget
/// sentences are skipped, not terminal, since a later shorter
/// sentence may still fit. If nothing fits and the input was
/// non-empty, the single highest-ranked sentence is force-included so
/// the result is never empty; that sole case is flagged via
/// `budget_exceeded`. Pure and idempotent.
pub fn apply_budget(evidence: Vec<Evidence>, token_limit: usize) -> CompressionResult {
    let mut selected: Vec<Evidence> = Vec::new();
    let mut tokens_used = 0_usize;

    for item in &evidence {
        let cost = estimate_tokens(&item.sentence);
        if tokens_used + cost <= token_limit {
            selected.push(item.clone());
            tokens_used += cost;
        }
    }

    let mut budget_exceeded = false;
    if selected.is_empty() {
        if let Some(first) = evidence.into_iter().next() {
            tokens_used = estimate_tokens(&first.sentence);
            budget_exceeded = tokens_used > token_limit;
            selected.push(first);
        }
    }

    let compressed_context = selected
        .iter()
        .map(|item| item.sentence.as_str())
        .collect::<Vec<_>>()
        .join(SENTENCE_SEPARATOR);

    CompressionResult {
        compressed_context,
        num_sentences: selected.len(),
        selected_evidence: selected,
        tokens_used,
        budget_exceeded,
    }
}
