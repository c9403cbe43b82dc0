use wordfreq_logging::{wf_debug, wf_info, wf_warn};

use crate::{decode_text, read_source, AnalysisOutcome, EngineError, InputSource};

/// One analysis request: a source plus an optional encoding label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisJob {
    pub source: InputSource,
    pub encoding: Option<String>,
}

/// Read, decode and analyze the job's source.
pub fn run_job(job: &AnalysisJob) -> Result<AnalysisOutcome, EngineError> {
    let bytes = read_source(&job.source)?;
    wf_info!("Read {}: {} bytes", job.source, bytes.len());
    analyze_source_bytes(&bytes, job.encoding.as_deref())
}

/// Decode `bytes` to UTF-8 and run the core pipeline over the decoded text.
pub fn analyze_source_bytes(
    bytes: &[u8],
    encoding: Option<&str>,
) -> Result<AnalysisOutcome, EngineError> {
    let decoded = decode_text(bytes, encoding)?;
    if decoded.replaced {
        wf_warn!(
            "Malformed {} sequences were replaced with U+FFFD",
            decoded.encoding
        );
    }
    wf_debug!(
        "Decoded {} bytes as {} into {} UTF-8 bytes",
        bytes.len(),
        decoded.encoding,
        decoded.text.len()
    );

    let report = wordfreq_core::analyze(decoded.text.as_bytes());
    wf_info!(
        "Analysis complete: {} words reported",
        report.entries.len()
    );

    Ok(AnalysisOutcome {
        report,
        encoding: decoded.encoding,
        source_bytes: bytes.len(),
    })
}
