//! Wordfreq engine: reading, decoding and persisting around the core pipeline.
mod decode;
mod job;
mod persist;
mod source;
mod summary;
mod types;

pub use decode::{decode_text, DecodeError, DecodedText};
pub use job::{analyze_source_bytes, run_job, AnalysisJob};
pub use persist::{ensure_parent_dir, PersistError, ReportWriter};
pub use source::{read_source, InputSource, SourceError};
pub use summary::build_summary_json;
pub use types::{AnalysisOutcome, EngineError};
