use thiserror::Error;

/// Failures of a morphological [`Analyzer`](crate::Analyzer).
///
/// These never leave the crate's public classification API: the lemmatizer
/// folds them into a lowercase fallback.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("empty input")]
    Empty,

    #[error("unsupported input for morphological analysis: {0:?}")]
    UnsupportedInput(String),

    #[error("morphology dictionary unavailable")]
    DictionaryUnavailable,
}
