//! Wordfreq core: pure tokenize → normalize → strip → filter → rank pipeline.
mod error;
pub mod ffi;
mod frequency;
mod josa;
mod noise;
mod pipeline;
mod report;
mod token;

pub use error::AnalyzeError;
pub use frequency::{FrequencyTable, RankedEntry, TOP_WORDS};
pub use josa::{strip_josa, JOSA_SUFFIXES};
pub use noise::{
    is_noise_word, noise_reason, NoiseReason, ADJECTIVE_ENDINGS, MAX_NOISE_LEN, STOPWORDS,
    VERB_ENDINGS,
};
pub use pipeline::{analyze, process_text, try_process_text, INPUT_ERROR_MESSAGE};
pub use report::Report;
pub use token::{normalize_ascii, normalize_token, tokenize, trim_punctuation, Tokens};
