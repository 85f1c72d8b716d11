//! Adaptive context compression orchestrator
//!
//! Composes the full pipeline into one call:
//! 1. Intent-aware retrieval (re-ranked similarity search)
//! 2. Sentence-level evidence selection
//! 3. Token budget enforcement and context assembly

use crate::budget::{apply_budget, CompressionResult};
use crate::evidence::select_evidence;
use ragpress_common::errors::Result;
use ragpress_retrieval::{retrieve_with_intent, IntentInfo, SimilaritySearch};
use std::time::Instant;
use tracing::debug;

/// Evidence sentences gathered per retrieved chunk before the budget
/// step trims them
pub const EVIDENCE_PER_CHUNK: usize = 5;

/// Compress retrieved context using intent-aware evidence selection
/// and budget management.
///
/// Retrieval errors from the search backend propagate; every other
/// edge case (empty candidates, unknown intent, unsatisfiable budget)
/// degrades to a deterministic, documented fallback.
pub fn compress_context(
    index: &dyn SimilaritySearch,
    query_embedding: &[f32],
    intent_info: &IntentInfo,
    top_k: usize,
    token_limit: usize,
) -> Result<CompressionResult> {
    let started = Instant::now();

    let chunks = retrieve_with_intent(index, query_embedding, intent_info, top_k)?;

    // Gather more sentences than the budget can hold; the budget
    // step does the final trimming
    let evidence = select_evidence(&chunks, intent_info, top_k * EVIDENCE_PER_CHUNK);

    let result = apply_budget(evidence, token_limit);

    debug!(
        intent = %intent_info.intent,
        chunks = chunks.len(),
        tokens_used = result.tokens_used,
        token_limit,
        num_sentences = result.num_sentences,
        budget_exceeded = result.budget_exceeded,
        "Context compressed"
    );

    ragpress_common::metrics::record_compression(
        started.elapsed().as_secs_f64(),
        intent_info.intent.as_str(),
        result.tokens_used,
        result.num_sentences,
        result.budget_exceeded,
    );

    Ok(result)
}
