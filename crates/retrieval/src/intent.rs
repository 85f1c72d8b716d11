//! Rule-based query intent classification
//!
//! Maps a raw query string to one of a fixed set of intent labels
//! plus a confidence score, using case-insensitive keyword matching
//! against constant rule tables. Deliberately simple and inspectable;
//! no learned components.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Query intent categories
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Intent {
    /// How something works: architecture, algorithms, procedures
    Method,
    /// Performance, metrics, outcomes
    Result,
    /// Function usage, parameters, examples
    ApiUsage,
    /// What something is or means
    Definition,
    /// Comparing multiple things
    Comparison,
    /// No rule group matched
    Unknown,
}

impl Intent {
    /// Wire label for this intent
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::Method => "METHOD",
            Intent::Result => "RESULT",
            Intent::ApiUsage => "API_USAGE",
            Intent::Definition => "DEFINITION",
            Intent::Comparison => "COMPARISON",
            Intent::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Detected intent with confidence and detection-method tag
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntentInfo {
    /// Detected intent label
    pub intent: Intent,

    /// Confidence score (0.0 - 1.0)
    pub confidence: f32,

    /// Which detection path produced this result
    pub method: String,
}

impl IntentInfo {
    /// Build an IntentInfo for a known intent, as produced by an
    /// upstream detector
    pub fn new(intent: Intent, confidence: f32) -> Self {
        Self {
            intent,
            confidence: confidence.clamp(0.0, 1.0),
            method: "rule-based".to_string(),
        }
    }
}

/// Keyword rule groups per intent, in tie-break priority order:
/// RESULT > METHOD > API_USAGE > COMPARISON > DEFINITION.
///
/// Adding an intent or a signal means adding a row here, not touching
/// the control flow below.
pub const INTENT_RULES: &[(Intent, &[&str])] = &[
    (
        Intent::Result,
        &[
            "accuracy", "score", "result", "performance", "achieved",
            "percentage", "metric", "evaluation", "benchmark", "improvement",
            "precision", "recall", "f1", "error rate", "loss",
        ],
    ),
    (
        Intent::Method,
        &[
            "how does", "how do", "architecture", "approach", "algorithm",
            "pipeline", "method", "technique", "process", "step", "procedure",
            "implementation", "design", "mechanism", "work",
        ],
    ),
    (
        Intent::ApiUsage,
        &[
            "parameter", "argument", "return", "function", "example",
            "usage", "syntax", "call", "invoke", "signature", "code",
            "how to use", "how to call", "how do i use",
        ],
    ),
    (
        Intent::Comparison,
        &[
            "compare", "comparison", "difference", "versus", "vs",
            "better than", "worse than", "similar to", "contrast",
            "advantage", "disadvantage",
        ],
    ),
    (
        Intent::Definition,
        &[
            "what is", "what are", "define", "definition", "meaning of",
            "explain", "describe", "concept of", "term",
        ],
    ),
];

/// Detect query intent using keyword matching.
///
/// Each rule group is scored independently: matched keywords are
/// weighted by word count (longer phrases weigh more) and normalized
/// by the group's keyword count. The best-scoring group wins; ties
/// resolve to the earlier (higher-priority) table entry. Confidence
/// grows with the raw score and gets a fixed boost when two or more
/// distinct keywords matched, clamped to [0, 1].
///
/// A query matching no rule group yields `Intent::Unknown` with
/// confidence 0.0, which downstream stages treat as the
/// similarity-only fallback path.
pub fn detect_intent(query: &str) -> IntentInfo {
    let query_lower = query.to_lowercase();

    let mut best: Option<(Intent, f32, usize)> = None;

    for (intent, keywords) in INTENT_RULES {
        let matched: usize = keywords
            .iter()
            .filter(|kw| query_lower.contains(*kw))
            .count();
        if matched == 0 {
            continue;
        }

        let weighted: usize = keywords
            .iter()
            .filter(|kw| query_lower.contains(*kw))
            .map(|kw| kw.split_whitespace().count())
            .sum();
        let raw = weighted as f32 / keywords.len() as f32;

        // Strictly greater keeps the earlier, higher-priority intent on ties
        if best.map_or(true, |(_, score, _)| raw > score) {
            best = Some((*intent, raw, matched));
        }
    }

    match best {
        Some((intent, raw, matched)) => {
            let mut confidence = (raw * 2.0).min(1.0);
            if matched >= 2 {
                confidence = (confidence + 0.2).min(1.0);
            }
            IntentInfo {
                intent,
                confidence,
                method: "rule-based".to_string(),
            }
        }
        None => IntentInfo {
            intent: Intent::Unknown,
            confidence: 0.0,
            method: "fallback".to_string(),
        },
    }
}
