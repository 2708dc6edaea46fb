use thiserror::Error;

/// Errors that can occur while loading an annotator or annotating text.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AnnotateError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("unsupported language: {0}")]
    UnsupportedLanguage(String),
    /// The underlying engine is not loaded. Callers treat this as fatal.
    #[error("annotator unavailable: {0}")]
    Unavailable(String),
    #[error("malformed document: {0}")]
    MalformedDocument(String),
    #[error("annotation failed: {0}")]
    Failed(String),
}

impl AnnotateError {
    /// Whether the error means no annotation can succeed until a reload.
    pub fn is_unavailable(&self) -> bool {
        matches!(self, AnnotateError::Unavailable(_))
    }
}
