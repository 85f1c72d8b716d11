//! Intent-aware re-ranking
//!
//! Re-orders similarity-search candidates by blending the backend's
//! similarity score with a small additive bonus derived from the
//! detected query intent. With an unknown or low-confidence intent
//! the bonus is zero everywhere and ranking degrades to pure
//! similarity order.

use crate::{ChunkMetadata, Intent, IntentInfo, RankedChunk, ScoredChunk, SimilaritySearch};
use ragpress_common::errors::Result;
use std::time::Instant;
use tracing::debug;

/// Minimum detector confidence before intent signals are applied
pub const CONFIDENCE_THRESHOLD: f32 = 0.3;

/// Upper bound on the additive intent bonus per candidate
pub const MAX_INTENT_BONUS: f32 = 0.3;

/// Chunks with an index below this count as document-opening material
/// for the DEFINITION signal
pub const EARLY_CHUNK_WINDOW: i32 = 3;

/// Compute the additive intent bonus for one candidate.
///
/// Signals are checked independently and each contributes a fixed
/// increment; the total is clamped to [`MAX_INTENT_BONUS`]. Missing
/// metadata fields contribute no signal.
pub fn calculate_intent_bonus(text: &str, metadata: &ChunkMetadata, intent: Intent) -> f32 {
    let text_lower = text.to_lowercase();
    let section_lower = metadata
        .section
        .as_deref()
        .unwrap_or("")
        .to_lowercase();

    let mut bonus = 0.0_f32;

    match intent {
        Intent::Result => {
            if section_lower.contains("result") {
                bonus += 0.15;
            }
            if text.chars().any(|c| c.is_ascii_digit()) {
                bonus += 0.10;
            }
            if text.contains('%') {
                bonus += 0.05;
            }
        }
        Intent::Method => {
            if section_lower.contains("method") {
                bonus += 0.15;
            }
            if ["algorithm", "pipeline", "step"]
                .iter()
                .any(|kw| text_lower.contains(kw))
            {
                bonus += 0.05;
            }
        }
        Intent::ApiUsage => {
            // Scales with the number of distinct code-like symbols present
            let symbols = ['(', ')', '=', ':']
                .iter()
                .filter(|s| text.contains(**s))
                .count();
            bonus += match symbols {
                3.. => 0.20,
                2 => 0.15,
                1 => 0.10,
                _ => 0.0,
            };
        }
        Intent::Definition => {
            if section_lower == "abstract" || section_lower == "introduction" {
                bonus += 0.15;
            } else if section_lower.contains("intro") {
                bonus += 0.10;
            }
            if metadata
                .chunk_index
                .map_or(false, |idx| (0..EARLY_CHUNK_WINDOW).contains(&idx))
            {
                bonus += 0.10;
            }
        }
        Intent::Comparison => {
            if ["compare", "comparison", "difference", "versus", "vs"]
                .iter()
                .any(|kw| text_lower.contains(kw))
            {
                bonus += 0.15;
            }
        }
        Intent::Unknown => {}
    }

    bonus.min(MAX_INTENT_BONUS)
}

/// Re-rank candidates by `similarity_score + intent_bonus`.
///
/// The input is expected in descending similarity order, as returned
/// by the search backend. The sort is stable: candidates with equal
/// final scores keep their original similarity rank relative to each
/// other. Returns the first `top_k` with 1-based ranks assigned.
pub fn rerank(candidates: Vec<ScoredChunk>, intent_info: &IntentInfo, top_k: usize) -> Vec<RankedChunk> {
    let apply_bonus =
        intent_info.intent != Intent::Unknown && intent_info.confidence > CONFIDENCE_THRESHOLD;

    let mut ranked: Vec<RankedChunk> = candidates
        .into_iter()
        .map(|chunk| {
            let intent_bonus = if apply_bonus {
                calculate_intent_bonus(&chunk.text, &chunk.metadata, intent_info.intent)
            } else {
                0.0
            };
            RankedChunk {
                final_score: chunk.similarity_score + intent_bonus,
                intent_bonus,
                chunk_id: chunk.chunk_id,
                text: chunk.text,
                metadata: chunk.metadata,
                similarity_score: chunk.similarity_score,
                rank: 0,
            }
        })
        .collect();

    ranked.sort_by(|a, b| {
        b.final_score
            .partial_cmp(&a.final_score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    ranked.truncate(top_k);

    for (idx, chunk) in ranked.iter_mut().enumerate() {
        chunk.rank = idx + 1;
    }

    ranked
}

/// Intent-aware retrieval over an external similarity search.
///
/// Requests `2 * top_k` raw candidates from the backend, applies the
/// intent bonus, and returns the re-ranked top `top_k`. An empty
/// candidate set degrades to an empty result.
pub fn retrieve_with_intent(
    index: &dyn SimilaritySearch,
    query_embedding: &[f32],
    intent_info: &IntentInfo,
    top_k: usize,
) -> Result<Vec<RankedChunk>> {
    if top_k == 0 {
        return Ok(Vec::new());
    }

    let started = Instant::now();
    let initial_k = top_k * 2;
    let candidates = index.search(query_embedding, initial_k)?;

    debug!(
        requested = initial_k,
        returned = candidates.len(),
        intent = %intent_info.intent,
        confidence = intent_info.confidence,
        "Similarity search complete"
    );

    let ranked = rerank(candidates, intent_info, top_k);

    ragpress_common::metrics::record_retrieval(
        started.elapsed().as_secs_f64(),
        intent_info.intent.as_str(),
        ranked.len(),
    );

    Ok(ranked)
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn make_chunk(id: u128, text: &str, section: Option<&str>, similarity: f32) -> ScoredChunk {
        ScoredChunk {
            chunk_id: Uuid::from_u128(id),
            text: text.to_string(),
            metadata: ChunkMetadata {
                section: section.map(|s| s.to_string()),
                page: Some(1),
                source: Some("paper.pdf".to_string()),
                chunk_index: Some(id as i32),
            },
            similarity_score: similarity,
        }
    }

    fn result_intent() -> IntentInfo {
        IntentInfo::new(Intent::Result, 0.8)
    }

    #[test]
    fn test_result_bonus_signals() {
        let metadata = ChunkMetadata {
            section: Some("Results".to_string()),
            page: Some(5),
            source: None,
            chunk_index: Some(6),
        };
        let bonus =
            calculate_intent_bonus("We achieved 95% accuracy.", &metadata, Intent::Result);
        // section match + digit + percent, capped at 0.3
        assert!((bonus - 0.30).abs() < 1e-6);
    }

    #[test]
    fn test_bonus_bounds() {
        let sections = [Some("Results"), Some("Method"), Some("Abstract"), None];
        let texts = [
            "We achieved 95% accuracy.",
            "The algorithm pipeline has three steps.",
            "model.fit(x, y) returns a tuple (a, b) with verbose=True",
            "plain prose with nothing special",
        ];
        let intents = [
            Intent::Result,
            Intent::Method,
            Intent::ApiUsage,
            Intent::Definition,
            Intent::Comparison,
            Intent::Unknown,
        ];
        for section in sections {
            for text in texts {
                for intent in intents {
                    let metadata = ChunkMetadata {
                        section: section.map(|s| s.to_string()),
                        ..Default::default()
                    };
                    let bonus = calculate_intent_bonus(text, &metadata, intent);
                    assert!(bonus >= 0.0);
                    assert!(bonus <= MAX_INTENT_BONUS + 1e-6);
                }
            }
        }
    }

    #[test]
    fn test_api_usage_bonus_scales_with_symbols() {
        let metadata = ChunkMetadata::default();
        let none = calculate_intent_bonus("plain text", &metadata, Intent::ApiUsage);
        let one = calculate_intent_bonus("x = 5", &metadata, Intent::ApiUsage);
        let three =
            calculate_intent_bonus("fit(x, y) with verbose=True", &metadata, Intent::ApiUsage);
        assert_eq!(none, 0.0);
        assert!((one - 0.10).abs() < 1e-6);
        assert!((three - 0.20).abs() < 1e-6);
    }

    #[test]
    fn test_definition_early_chunk_bonus() {
        let metadata = ChunkMetadata {
            section: Some("Abstract".to_string()),
            chunk_index: Some(0),
            ..Default::default()
        };
        let bonus = calculate_intent_bonus("This paper introduces X.", &metadata, Intent::Definition);
        assert!((bonus - 0.25).abs() < 1e-6);

        let late = ChunkMetadata {
            section: Some("Discussion".to_string()),
            chunk_index: Some(9),
            ..Default::default()
        };
        assert_eq!(
            calculate_intent_bonus("This paper introduces X.", &late, Intent::Definition),
            0.0
        );
    }

    #[test]
    fn test_missing_metadata_is_tolerated() {
        let metadata = ChunkMetadata::default();
        let bonus = calculate_intent_bonus("We achieved 95% accuracy.", &metadata, Intent::Result);
        // digit + percent still fire without section metadata
        assert!((bonus - 0.15).abs() < 1e-6);
    }

    #[test]
    fn test_unknown_intent_preserves_similarity_order() {
        let candidates = vec![
            make_chunk(1, "We achieved 95% accuracy.", Some("Results"), 0.9),
            make_chunk(2, "The pipeline has steps.", Some("Method"), 0.8),
            make_chunk(3, "Plain prose.", Some("Discussion"), 0.7),
        ];
        let info = IntentInfo {
            intent: Intent::Unknown,
            confidence: 0.0,
            method: "fallback".to_string(),
        };
        let ranked = rerank(candidates, &info, 3);
        let ids: Vec<u128> = ranked.iter().map(|c| c.chunk_id.as_u128()).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        for chunk in &ranked {
            assert_eq!(chunk.intent_bonus, 0.0);
            assert_eq!(chunk.final_score, chunk.similarity_score);
        }
    }

    #[test]
    fn test_low_confidence_preserves_similarity_order() {
        let candidates = vec![
            make_chunk(1, "Plain prose.", Some("Discussion"), 0.9),
            make_chunk(2, "We achieved 95% accuracy.", Some("Results"), 0.8),
        ];
        let info = IntentInfo::new(Intent::Result, 0.2);
        let ranked = rerank(candidates, &info, 2);
        assert_eq!(ranked[0].chunk_id, Uuid::from_u128(1));
        assert_eq!(ranked[0].intent_bonus, 0.0);
    }

    #[test]
    fn test_final_score_is_similarity_plus_bonus() {
        let candidates = vec![
            make_chunk(1, "We achieved 95% accuracy.", Some("Results"), 0.62),
            make_chunk(2, "Plain prose.", Some("Discussion"), 0.61),
        ];
        let ranked = rerank(candidates, &result_intent(), 2);
        for chunk in &ranked {
            assert!(
                (chunk.final_score - (chunk.similarity_score + chunk.intent_bonus)).abs() < 1e-6
            );
        }
    }

    #[test]
    fn test_stable_sort_keeps_tied_candidates_in_order() {
        // No RESULT signals fire, so all final scores tie pairwise
        let candidates = vec![
            make_chunk(1, "Alpha prose.", Some("Discussion"), 0.5),
            make_chunk(2, "Beta prose.", Some("Discussion"), 0.5),
            make_chunk(3, "Gamma prose.", Some("Discussion"), 0.5),
        ];
        let ranked = rerank(candidates, &result_intent(), 3);
        let ids: Vec<u128> = ranked.iter().map(|c| c.chunk_id.as_u128()).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_rerank_truncates_and_assigns_ranks() {
        let candidates = vec![
            make_chunk(1, "Plain prose.", None, 0.9),
            make_chunk(2, "Plain prose.", None, 0.8),
            make_chunk(3, "Plain prose.", None, 0.7),
            make_chunk(4, "Plain prose.", None, 0.6),
        ];
        let ranked = rerank(candidates, &result_intent(), 2);
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].rank, 1);
        assert_eq!(ranked[1].rank, 2);
    }

    #[test]
    fn test_bonus_promotes_results_section() {
        // Results chunk starts below two others on pure similarity
        let candidates = vec![
            make_chunk(1, "Background discussion of prior art.", Some("Introduction"), 0.80),
            make_chunk(2, "Details of the data collection.", Some("Method"), 0.78),
            make_chunk(3, "We achieved 95% accuracy overall.", Some("Results"), 0.75),
            make_chunk(4, "Future work is left open.", Some("Conclusion"), 0.70),
        ];
        let ranked = rerank(candidates, &result_intent(), 4);
        assert_eq!(ranked[0].chunk_id, Uuid::from_u128(3));
        assert_eq!(ranked[0].metadata.section.as_deref(), Some("Results"));
        assert!(ranked[0].intent_bonus > 0.0);
    }

    struct StaticIndex {
        chunks: Vec<ScoredChunk>,
    }

    impl SimilaritySearch for StaticIndex {
        fn search(&self, _query_embedding: &[f32], limit: usize) -> Result<Vec<ScoredChunk>> {
            Ok(self.chunks.iter().take(limit).cloned().collect())
        }
    }

    #[test]
    fn test_retrieve_with_intent_requests_double_and_truncates() {
        // 12 chunks in descending similarity; the only Results-section
        // chunk sits mid-list and must surface to rank 1
        let mut chunks = Vec::new();
        for idx in 0..12u128 {
            let (text, section) = if idx == 5 {
                ("We achieved 95% accuracy on the test set.", "Results")
            } else {
                ("General prose without signals.", "Discussion")
            };
            chunks.push(make_chunk(idx + 1, text, Some(section), 0.9 - idx as f32 * 0.01));
        }
        let index = StaticIndex { chunks };

        let ranked =
            retrieve_with_intent(&index, &[0.1, 0.2, 0.3], &result_intent(), 10).unwrap();
        assert_eq!(ranked.len(), 10);
        assert_eq!(ranked[0].metadata.section.as_deref(), Some("Results"));
        assert_eq!(ranked[0].rank, 1);
    }

    #[test]
    fn test_retrieve_with_empty_index() {
        let index = StaticIndex { chunks: Vec::new() };
        let ranked = retrieve_with_intent(&index, &[0.0], &result_intent(), 5).unwrap();
        assert!(ranked.is_empty());
    }

    #[test]
    fn test_retrieve_with_top_k_zero() {
        let index = StaticIndex {
            chunks: vec![make_chunk(1, "text", None, 0.9)],
        };
        let ranked = retrieve_with_intent(&index, &[0.0], &result_intent(), 0).unwrap();
        assert!(ranked.is_empty());
    }
}
