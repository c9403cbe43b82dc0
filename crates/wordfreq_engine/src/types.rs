use thiserror::Error;
use wordfreq_core::Report;

use crate::{DecodeError, SourceError};

/// Result of analyzing one source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisOutcome {
    pub report: Report,
    /// Encoding the source was decoded from.
    pub encoding: &'static str,
    /// Byte length of the source before decoding. The report header carries
    /// the length of the decoded UTF-8 text instead.
    pub source_bytes: usize,
}

#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    Source(#[from] SourceError),
    #[error(transparent)]
    Decode(#[from] DecodeError),
}
