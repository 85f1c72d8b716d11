//! Metrics and observability utilities
//!
//! Provides metric registration and recording helpers with
//! standardized naming conventions. A host application installs its
//! own recorder/exporter; without one these calls are no-ops.

use metrics::{counter, describe_counter, describe_gauge, describe_histogram, gauge, histogram, Unit};

/// Metrics prefix for all RAGpress metrics
pub const METRICS_PREFIX: &str = "ragpress";

/// Register all metric descriptions
pub fn register_metrics() {
    // Retrieval metrics
    describe_counter!(
        format!("{}_retrieval_queries_total", METRICS_PREFIX),
        Unit::Count,
        "Total number of intent-aware retrieval queries"
    );

    describe_histogram!(
        format!("{}_retrieval_duration_seconds", METRICS_PREFIX),
        Unit::Seconds,
        "Retrieval and re-ranking latency in seconds"
    );

    describe_gauge!(
        format!("{}_retrieval_results_count", METRICS_PREFIX),
        Unit::Count,
        "Number of chunks returned after re-ranking"
    );

    // Compression metrics
    describe_counter!(
        format!("{}_compression_requests_total", METRICS_PREFIX),
        Unit::Count,
        "Total number of context compression requests"
    );

    describe_histogram!(
        format!("{}_compression_duration_seconds", METRICS_PREFIX),
        Unit::Seconds,
        "Context compression latency in seconds"
    );

    describe_gauge!(
        format!("{}_compression_tokens_used", METRICS_PREFIX),
        Unit::Count,
        "Tokens used by the compressed context"
    );

    describe_gauge!(
        format!("{}_compression_sentences_selected", METRICS_PREFIX),
        Unit::Count,
        "Sentences selected into the compressed context"
    );

    describe_counter!(
        format!("{}_compression_budget_exceeded_total", METRICS_PREFIX),
        Unit::Count,
        "Compressions where the forced-inclusion rule exceeded the budget"
    );

    tracing::info!("Metrics registered");
}

/// Helper to record retrieval metrics
pub fn record_retrieval(duration_secs: f64, intent: &str, result_count: usize) {
    counter!(
        format!("{}_retrieval_queries_total", METRICS_PREFIX),
        "intent" => intent.to_string()
    )
    .increment(1);

    histogram!(
        format!("{}_retrieval_duration_seconds", METRICS_PREFIX),
        "intent" => intent.to_string()
    )
    .record(duration_secs);

    gauge!(
        format!("{}_retrieval_results_count", METRICS_PREFIX),
        "intent" => intent.to_string()
    )
    .set(result_count as f64);
}

/// Helper to record compression metrics
pub fn record_compression(
    duration_secs: f64,
    intent: &str,
    tokens_used: usize,
    num_sentences: usize,
    budget_exceeded: bool,
) {
    counter!(
        format!("{}_compression_requests_total", METRICS_PREFIX),
        "intent" => intent.to_string()
    )
    .increment(1);

    histogram!(
        format!("{}_compression_duration_seconds", METRICS_PREFIX),
        "intent" => intent.to_string()
    )
    .record(duration_secs);

    gauge!(
        format!("{}_compression_tokens_used", METRICS_PREFIX)
    )
    .set(tokens_used as f64);

    gauge!(
        format!("{}_compression_sentences_selected", METRICS_PREFIX)
    )
    .set(num_sentences as f64);

    if budget_exceeded {
        counter!(
            format!("{}_compression_budget_exceeded_total", METRICS_PREFIX)
        )
        .increment(1);
    }
}
