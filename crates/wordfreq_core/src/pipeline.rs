use wordfreq_logging::{wf_debug, wf_trace};

use crate::{
    noise_reason, normalize_token, strip_josa, tokenize, AnalyzeError, FrequencyTable, Report,
    TOP_WORDS,
};

/// Returned by [`process_text`] in place of a report when input is missing.
pub const INPUT_ERROR_MESSAGE: &str = "입력 오류\n";

/// Run the whole pipeline over `text` and keep the top ten words.
pub fn analyze(text: &[u8]) -> Report {
    let mut token_count = 0usize;
    let table: FrequencyTable = tokenize(text)
        .inspect(|_| token_count += 1)
        .filter_map(surviving_word)
        .collect();

    wf_debug!(
        "Analyzed {} bytes: {} tokens, {} distinct words",
        text.len(),
        token_count,
        table.len()
    );
    Report::new(text.len(), table.ranked(TOP_WORDS))
}

/// Normalize and strip one raw token; `None` when it is empty or noise.
fn surviving_word(raw: &[u8]) -> Option<Vec<u8>> {
    let normalized = normalize_token(raw);
    if normalized.is_empty() {
        return None;
    }

    let word = strip_josa(&normalized);
    if let Some(reason) = noise_reason(word) {
        wf_trace!("Discarded {:?}: {}", String::from_utf8_lossy(word), reason);
        return None;
    }
    Some(word.to_vec())
}

/// Analyze `input`, treating `None` as the missing-input error.
pub fn try_process_text(input: Option<&[u8]>) -> Result<Report, AnalyzeError> {
    input.map(analyze).ok_or(AnalyzeError::MissingInput)
}

/// Rendered report bytes, or exactly [`INPUT_ERROR_MESSAGE`] when `input` is `None`.
/// The error is not signalled any other way.
pub fn process_text(input: Option<&[u8]>) -> Vec<u8> {
    match try_process_text(input) {
        Ok(report) => report.to_bytes(),
        Err(AnalyzeError::MissingInput) => INPUT_ERROR_MESSAGE.as_bytes().to_vec(),
    }
}
