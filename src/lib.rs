//! Workspace umbrella crate for the ARAS text-analytics core.
//!
//! This crate stitches the annotation layer and the analysis stages together
//! behind [`AnalysisEngine`], so callers can go from raw text to sentiment,
//! entities, keywords, summaries and topic bands with a single entry point.
//!
//! ```rust
//! use aras::{AnalysisConfig, AnalysisEngine, AnnotatorConfig, SentimentLabel};
//!
//! let engine = AnalysisEngine::load(&AnnotatorConfig::default(), AnalysisConfig::default())
//!     .expect("valid config");
//! let sentiment = engine
//!     .sentiment("This is excellent news! The economy is improving and growth is strong.")
//!     .expect("model loaded");
//! assert_eq!(sentiment.value().label, SentimentLabel::Positive);
//! ```

pub mod config;
mod engine;

pub use analysis::{
    project_entities, validate_ratio, Analysis, AnalysisConfig, AnalysisError, EntityRecord,
    Keyword, KeywordRanker, KeywordResult, ProcessingError, SentimentLabel, SentimentLexicon,
    SentimentResult, SentimentScorer, SummaryExtractor, SummaryResult, TopicClusterer,
    TopicResult,
};
pub use annotate::{
    explain_label, AnnotateError, Annotator, AnnotatorConfig, AnnotatorHandle, Document,
    EntitySpan, PosTag, RuleAnnotator, Sentence, StopwordFilter, Token,
};

pub use crate::config::{AppConfig, ConfigLoadError, LoggingConfig};
pub use crate::engine::{AnalysisEngine, AnalysisRequest, BatchItem, ComprehensiveReport};

use std::sync::{Arc, OnceLock, RwLock};
use std::time::{Duration, Instant};

/// Facade operations reported to [`AnalysisMetrics`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Sentiment,
    Entities,
    Keywords,
    Summary,
    Topics,
    Comprehensive,
    BatchSentiment,
}

impl Operation {
    pub fn as_str(self) -> &'static str {
        match self {
            Operation::Sentiment => "sentiment",
            Operation::Entities => "entities",
            Operation::Keywords => "keywords",
            Operation::Summary => "summary",
            Operation::Topics => "topics",
            Operation::Comprehensive => "comprehensive",
            Operation::BatchSentiment => "batch_sentiment",
        }
    }
}

/// How a successful operation finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationStatus {
    Computed,
    Degraded,
}

/// Metrics observer for annotation and facade operations.
pub trait AnalysisMetrics: Send + Sync {
    fn record_annotation(&self, latency: Duration, result: Result<(), AnalysisError>);
    fn record_operation(
        &self,
        operation: Operation,
        latency: Duration,
        result: Result<OperationStatus, AnalysisError>,
    );
}

/// Install or clear the global analysis metrics recorder.
pub fn set_analysis_metrics(recorder: Option<Arc<dyn AnalysisMetrics>>) {
    let lock = metrics_lock();
    let mut guard = lock
        .write()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    *guard = recorder;
}

fn metrics_lock() -> &'static RwLock<Option<Arc<dyn AnalysisMetrics>>> {
    static METRICS: OnceLock<RwLock<Option<Arc<dyn AnalysisMetrics>>>> = OnceLock::new();
    METRICS.get_or_init(|| RwLock::new(None))
}

fn metrics_recorder() -> Option<Arc<dyn AnalysisMetrics>> {
    let guard = metrics_lock()
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    guard.clone()
}

pub(crate) struct MetricsSpan {
    recorder: Arc<dyn AnalysisMetrics>,
    start: Instant,
}

impl MetricsSpan {
    pub(crate) fn start() -> Option<Self> {
        metrics_recorder().map(|recorder| Self {
            recorder,
            start: Instant::now(),
        })
    }

    pub(crate) fn record_annotation(self, result: Result<(), AnalysisError>) {
        self.recorder.record_annotation(self.start.elapsed(), result);
    }

    pub(crate) fn record_operation(
        self,
        operation: Operation,
        result: Result<OperationStatus, AnalysisError>,
    ) {
        self.recorder
            .record_operation(operation, self.start.elapsed(), result);
    }
}
