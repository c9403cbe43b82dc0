use serde_json::{json, Value};

use crate::AnalysisOutcome;

/// Machine-readable companion to the text report.
pub fn build_summary_json(outcome: &AnalysisOutcome, source: &str, generated_utc: &str) -> Value {
    let top_words: Vec<Value> = outcome
        .report
        .entries
        .iter()
        .map(|entry| json!({ "word": entry.word_lossy(), "count": entry.count }))
        .collect();

    json!({
        "source": source,
        "encoding": outcome.encoding,
        "source_bytes": outcome.source_bytes,
        "text_bytes": outcome.report.input_len,
        "top_words": top_words,
        "generated_utc": generated_utc,
    })
}
