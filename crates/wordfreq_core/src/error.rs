#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum AnalyzeError {
    /// The caller handed over no text at all (a null pointer across the C ABI).
    #[error("입력 오류")]
    MissingInput,
}
