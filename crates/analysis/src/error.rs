use annotate::AnnotateError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors surfaced to callers of the analysis stages.
///
/// Processing faults inside a stage never show up here; they are absorbed
/// into [`Analysis::Degraded`](crate::Analysis::Degraded).
#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum AnalysisError {
    /// No annotator is loaded. Fatal for every operation until one is.
    #[error("model unavailable: {0}")]
    ModelUnavailable(String),
    #[error("unsupported language: {0}")]
    UnsupportedLanguage(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    /// The annotator ran but failed on this text.
    #[error("annotation failed: {0}")]
    Annotation(String),
    /// Blocking work could not be scheduled or panicked.
    #[error("dispatch failed: {0}")]
    Dispatch(String),
}

impl From<AnnotateError> for AnalysisError {
    fn from(value: AnnotateError) -> Self {
        match value {
            AnnotateError::Unavailable(reason) => AnalysisError::ModelUnavailable(reason),
            AnnotateError::UnsupportedLanguage(code) => AnalysisError::UnsupportedLanguage(code),
            AnnotateError::InvalidConfig(reason) => AnalysisError::InvalidConfig(reason),
            AnnotateError::MalformedDocument(_) | AnnotateError::Failed(_) => {
                AnalysisError::Annotation(value.to_string())
            }
        }
    }
}

/// Internal faults a stage recovers from.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ProcessingError {
    #[error("sentence {index} token range does not fit the document")]
    SentenceOutOfBounds { index: usize },
    #[error("ratio {0} outside (0, 1]")]
    RatioOutOfRange(f64),
}
