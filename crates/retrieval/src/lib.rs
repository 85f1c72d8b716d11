//! Intent-aware retrieval
//!
//! Provides two stages of the RAGpress pipeline:
//! - Rule-based query intent classification
//! - Intent-aware re-ranking over an external similarity search
//!
//! Both stages are pure, synchronous functions over in-memory values.
//! The similarity search itself (vector index, embeddings) is an
//! external collaborator consumed through the [`SimilaritySearch`]
//! trait, never built here.

mod intent;
mod rerank;

pub use intent::{detect_intent, Intent, IntentInfo, INTENT_RULES};
pub use rerank::{
    calculate_intent_bonus, rerank, retrieve_with_intent, CONFIDENCE_THRESHOLD,
    EARLY_CHUNK_WINDOW, MAX_INTENT_BONUS,
};

use ragpress_common::errors::Result;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Metadata attached to a retrieved chunk.
///
/// All fields are optional: candidates with missing metadata are
/// tolerated and simply contribute no section/position signal.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChunkMetadata {
    /// Section label the chunk was extracted from (e.g. "Results")
    #[serde(default)]
    pub section: Option<String>,

    /// Page number in the source document
    #[serde(default)]
    pub page: Option<i32>,

    /// Source document identifier
    #[serde(default)]
    pub source: Option<String>,

    /// Position of the chunk within its document
    #[serde(default)]
    pub chunk_index: Option<i32>,
}

/// Candidate chunk produced by the similarity search collaborator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredChunk {
    /// Chunk ID
    pub chunk_id: Uuid,

    /// Chunk content
    pub text: String,

    /// Chunk metadata
    pub metadata: ChunkMetadata,

    /// Similarity score; higher = better match
    pub similarity_score: f32,
}

/// Chunk after intent-aware re-ranking, with full score breakdown
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedChunk {
    /// Chunk ID
    pub chunk_id: Uuid,

    /// Chunk content
    pub text: String,

    /// Chunk metadata
    pub metadata: ChunkMetadata,

    /// Similarity score from the search backend
    pub similarity_score: f32,

    /// Additive intent bonus in [0.0, 0.3]
    pub intent_bonus: f32,

    /// similarity_score + intent_bonus
    pub final_score: f32,

    /// Rank after re-ranking (1-based)
    pub rank: usize,
}

/// External similarity search collaborator.
///
/// Implementations return up to `limit` candidates ordered by
/// descending similarity, where higher `similarity_score` means a
/// better match regardless of the backend's native distance metric.
pub trait SimilaritySearch {
    /// Retrieve the nearest candidates for a query embedding
    fn search(&self, query_embedding: &[f32], limit: usize) -> Result<Vec<ScoredChunk>>;
}
