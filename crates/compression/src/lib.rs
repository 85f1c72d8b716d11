//! Adaptive context compression
//!
//! Compresses intent-aware retrieval results into a bounded context
//! string:
//! - Sentence splitting with inherited chunk metadata
//! - Intent-conditioned sentence relevance scoring
//! - Greedy token-budget selection
//! - One-call compression orchestrator
//!
//! Every stage is a pure, synchronous function; identical inputs
//! always yield identical outputs.

mod budget;
mod compressor;
mod evidence;
mod sentence;

pub use budget::{apply_budget, estimate_tokens, token_reduction_ratio, CompressionResult};
pub use compressor::{compress_context, EVIDENCE_PER_CHUNK};
pub use evidence::{score_sentence, select_evidence, Evidence};
pub use sentence::split_into_sentences;
