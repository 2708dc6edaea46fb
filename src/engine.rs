//! The analysis facade.
//!
//! [`AnalysisEngine`] owns the loaded annotator and the stage instances. Every
//! single-text operation annotates exactly once and hands the document to one
//! or more stages. Errors that reach the caller are the fatal ones (no model,
//! bad language, bad ratio); anything recoverable comes back as
//! [`Analysis::Degraded`].

use std::sync::Arc;
use std::time::Instant;

use analysis::{
    project_entities, validate_ratio, Analysis, AnalysisConfig, AnalysisError, EntityRecord,
    KeywordRanker, KeywordResult, SentimentLexicon, SentimentResult, SentimentScorer,
    SummaryExtractor, SummaryResult, TopicClusterer, TopicResult,
};
use annotate::{AnnotatorConfig, AnnotatorHandle, Document, SUPPORTED_LANGUAGES};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::{MetricsSpan, Operation, OperationStatus};

/// One entry of a batch request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub text: String,
    #[serde(default = "default_language")]
    pub language: String,
}

impl AnalysisRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            language: default_language(),
        }
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }
}

fn default_language() -> String {
    "en".to_string()
}

/// Per-item batch outcome. A failed item never aborts the rest of the batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum BatchItem {
    Ok(SentimentResult),
    Failed { index: usize, error: AnalysisError },
}

impl BatchItem {
    pub fn is_ok(&self) -> bool {
        matches!(self, BatchItem::Ok(_))
    }
}

/// Everything `comprehensive` computes from one annotation pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComprehensiveReport {
    pub sentiment: Analysis<SentimentResult>,
    pub entities: Analysis<Vec<EntityRecord>>,
    pub keywords: Analysis<KeywordResult>,
    pub summary: Analysis<SummaryResult>,
}

#[derive(Debug, Clone)]
enum AnnotatorState {
    Ready(AnnotatorHandle),
    Unavailable(Arc<str>),
}

/// Stateless orchestration over a shared annotator. Cheap to clone.
#[derive(Debug, Clone)]
pub struct AnalysisEngine {
    annotator: AnnotatorState,
    config: Arc<AnalysisConfig>,
    scorer: Arc<SentimentScorer>,
    ranker: KeywordRanker,
    summarizer: SummaryExtractor,
    clusterer: TopicClusterer,
}

impl AnalysisEngine {
    /// Build an engine around an already loaded annotator.
    pub fn new(handle: AnnotatorHandle, config: AnalysisConfig) -> Result<Self, AnalysisError> {
        config.validate()?;
        Ok(Self::assemble(AnnotatorState::Ready(handle), config))
    }

    /// Load the bundled annotator. A load failure does not fail construction:
    /// the engine comes up in degraded mode and every operation reports
    /// [`AnalysisError::ModelUnavailable`]. An invalid `config` is an error.
    pub fn load(
        annotator: &AnnotatorConfig,
        config: AnalysisConfig,
    ) -> Result<Self, AnalysisError> {
        config.validate()?;
        match AnnotatorHandle::load(annotator) {
            Ok(handle) => Ok(Self::assemble(AnnotatorState::Ready(handle), config)),
            Err(err) => {
                warn!(error = %err, "engine_degraded");
                Ok(Self::assemble(
                    AnnotatorState::Unavailable(Arc::from(err.to_string())),
                    config,
                ))
            }
        }
    }

    /// An engine with no annotator.
    pub fn unavailable(reason: impl Into<String>) -> Self {
        let reason: String = reason.into();
        Self::assemble(
            AnnotatorState::Unavailable(Arc::from(reason)),
            AnalysisConfig::default(),
        )
    }

    fn assemble(annotator: AnnotatorState, config: AnalysisConfig) -> Self {
        let clusterer = TopicClusterer::from_config(&config);
        Self {
            annotator,
            config: Arc::new(config),
            scorer: Arc::new(SentimentScorer::default()),
            ranker: KeywordRanker::new(),
            summarizer: SummaryExtractor::new(),
            clusterer,
        }
    }

    /// Replace the sentiment lexicon.
    pub fn with_lexicon(mut self, lexicon: SentimentLexicon) -> Self {
        self.scorer = Arc::new(SentimentScorer::new(lexicon));
        self
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    pub fn is_available(&self) -> bool {
        matches!(self.annotator, AnnotatorState::Ready(_))
    }

    /// Reject languages the annotator has no rules for.
    pub fn validate_language(code: &str) -> Result<(), AnalysisError> {
        if SUPPORTED_LANGUAGES.contains(&code) {
            Ok(())
        } else {
            Err(AnalysisError::UnsupportedLanguage(code.to_string()))
        }
    }

    pub fn sentiment(&self, text: &str) -> Result<Analysis<SentimentResult>, AnalysisError> {
        self.observe(Operation::Sentiment, || {
            Ok(match self.document(text)? {
                Ok(doc) => self.scorer.score(&doc),
                Err(reason) => Analysis::degraded(SentimentResult::failed(), reason),
            })
        })
    }

    pub fn entities(&self, text: &str) -> Result<Analysis<Vec<EntityRecord>>, AnalysisError> {
        self.observe(Operation::Entities, || {
            Ok(match self.document(text)? {
                Ok(doc) => Analysis::Computed(project_entities(&doc)),
                Err(reason) => Analysis::degraded(Vec::new(), reason),
            })
        })
    }

    pub fn keywords(
        &self,
        text: &str,
        top_n: usize,
    ) -> Result<Analysis<KeywordResult>, AnalysisError> {
        self.observe(Operation::Keywords, || {
            Ok(match self.document(text)? {
                Ok(doc) => Analysis::Computed(self.ranker.rank(&doc, top_n)),
                Err(reason) => Analysis::degraded(KeywordResult::default(), reason),
            })
        })
    }

    /// Summarise `text`, keeping `ratio` of its sentences. The ratio must be
    /// in `(0, 1]`; it is checked before any annotation happens.
    pub fn summary(&self, text: &str, ratio: f64) -> Result<Analysis<SummaryResult>, AnalysisError> {
        validate_ratio(ratio)?;
        self.observe(Operation::Summary, || {
            Ok(match self.document(text)? {
                Ok(doc) => with_input_text(self.summarizer.summarize(&doc, ratio), text),
                Err(reason) => Analysis::degraded(
                    SummaryResult::unchanged(text.to_string(), 0),
                    reason,
                ),
            })
        })
    }

    /// Cluster the keywords of `texts` into at most `num_topics` bands.
    ///
    /// Texts that fail to annotate are skipped; the result is then marked
    /// degraded but still carries the topics of the remaining texts.
    pub fn topics<S>(
        &self,
        texts: &[S],
        num_topics: usize,
    ) -> Result<Analysis<TopicResult>, AnalysisError>
    where
        S: AsRef<str> + Sync,
    {
        self.observe(Operation::Topics, || {
            self.handle()?;
            if texts.is_empty() || num_topics == 0 {
                return Ok(Analysis::Computed(TopicResult::default()));
            }

            let per_document = self.map_items(texts, |_, text| {
                self.document(text.as_ref()).map(|outcome| {
                    outcome.map(|doc| {
                        self.ranker
                            .rank(&doc, self.clusterer.terms_per_document())
                    })
                })
            });

            let mut keyword_lists = Vec::with_capacity(texts.len());
            let mut skipped = 0usize;
            for item in per_document {
                match item? {
                    Ok(keywords) => keyword_lists.push(keywords),
                    Err(_) => skipped += 1,
                }
            }

            let topics = self.clusterer.cluster(&keyword_lists, num_topics);
            if skipped > 0 {
                Ok(Analysis::degraded(
                    topics,
                    format!("{skipped} of {} documents failed annotation", texts.len()),
                ))
            } else {
                Ok(Analysis::Computed(topics))
            }
        })
    }

    /// Annotate once and run every single-text stage on the result.
    /// Keywords use `config.keyword_top_n`, the summary `config.summary_ratio`.
    pub fn comprehensive(&self, text: &str) -> Result<ComprehensiveReport, AnalysisError> {
        let span = MetricsSpan::start();
        let began = Instant::now();
        let result = self.document(text).map(|outcome| match outcome {
            Ok(doc) => ComprehensiveReport {
                sentiment: self.scorer.score(&doc),
                entities: Analysis::Computed(project_entities(&doc)),
                keywords: Analysis::Computed(self.ranker.rank(&doc, self.config.keyword_top_n)),
                summary: with_input_text(
                    self.summarizer.summarize(&doc, self.config.summary_ratio),
                    text,
                ),
            },
            Err(reason) => ComprehensiveReport {
                sentiment: Analysis::degraded(SentimentResult::failed(), reason.clone()),
                entities: Analysis::degraded(Vec::new(), reason.clone()),
                keywords: Analysis::degraded(KeywordResult::default(), reason.clone()),
                summary: Analysis::degraded(
                    SummaryResult::unchanged(text.to_string(), 0),
                    reason,
                ),
            },
        });

        let elapsed_micros = began.elapsed().as_micros();
        let status = match &result {
            Ok(report) => {
                let degraded = report.sentiment.is_degraded()
                    || report.entities.is_degraded()
                    || report.keywords.is_degraded()
                    || report.summary.is_degraded();
                if degraded {
                    warn!(operation = "comprehensive", elapsed_micros, "analysis_degraded");
                    Ok(OperationStatus::Degraded)
                } else {
                    info!(
                        operation = "comprehensive",
                        entities = report.entities.value().len(),
                        keywords = report.keywords.value().len(),
                        elapsed_micros,
                        "analysis_success"
                    );
                    Ok(OperationStatus::Computed)
                }
            }
            Err(err) => {
                warn!(operation = "comprehensive", error = %err, elapsed_micros, "analysis_failure");
                Err(err.clone())
            }
        };
        if let Some(span) = span {
            span.record_operation(Operation::Comprehensive, status);
        }
        result
    }

    /// Sentiment for many texts. Items fail independently: an unsupported
    /// language or an annotation failure yields [`BatchItem::Failed`] and the
    /// batch carries on. Only a missing model fails the whole call.
    pub fn batch_sentiment(
        &self,
        requests: &[AnalysisRequest],
    ) -> Result<Vec<BatchItem>, AnalysisError> {
        let start = MetricsSpan::start();
        let began = Instant::now();
        if let Err(err) = self.handle() {
            if let Some(span) = start {
                span.record_operation(Operation::BatchSentiment, Err(err.clone()));
            }
            return Err(err);
        }

        let items = self.map_items(requests, |index, request| self.batch_item(index, request));
        let failed = items.iter().filter(|item| !item.is_ok()).count();

        let elapsed_micros = began.elapsed().as_micros();
        info!(
            operation = "batch_sentiment",
            items = items.len(),
            failed,
            elapsed_micros,
            "analysis_success"
        );
        if let Some(span) = start {
            let status = if failed > 0 {
                OperationStatus::Degraded
            } else {
                OperationStatus::Computed
            };
            span.record_operation(Operation::BatchSentiment, Ok(status));
        }
        Ok(items)
    }

    fn batch_item(&self, index: usize, request: &AnalysisRequest) -> BatchItem {
        if let Err(error) = Self::validate_language(&request.language) {
            return BatchItem::Failed { index, error };
        }
        let handle = match self.handle() {
            Ok(handle) => handle,
            Err(error) => return BatchItem::Failed { index, error },
        };
        match handle.annotate(&request.text) {
            Ok(doc) => BatchItem::Ok(self.scorer.score(&doc).into_value()),
            Err(err) => {
                let error = AnalysisError::from(err);
                warn!(index, error = %error, "batch_item_failed");
                BatchItem::Failed { index, error }
            }
        }
    }

    fn handle(&self) -> Result<&AnnotatorHandle, AnalysisError> {
        match &self.annotator {
            AnnotatorState::Ready(handle) => Ok(handle),
            AnnotatorState::Unavailable(reason) => {
                Err(AnalysisError::ModelUnavailable(reason.to_string()))
            }
        }
    }

    /// Annotate `text`. The outer error is fatal; the inner one is a
    /// per-text annotation failure the caller degrades on.
    fn document(&self, text: &str) -> Result<Result<Document, String>, AnalysisError> {
        let handle = self.handle()?;
        let start = MetricsSpan::start();
        let began = Instant::now();
        let result = handle.annotate(text);
        let elapsed_micros = began.elapsed().as_micros();

        let outcome = match result {
            Ok(doc) => {
                debug!(
                    annotator = handle.name(),
                    sentences = doc.sentences.len(),
                    tokens = doc.tokens.len(),
                    elapsed_micros,
                    "annotation_success"
                );
                Ok(Ok(doc))
            }
            Err(err) => {
                warn!(annotator = handle.name(), error = %err, elapsed_micros, "annotation_failure");
                match AnalysisError::from(err) {
                    AnalysisError::Annotation(reason) => Ok(Err(reason)),
                    fatal => Err(fatal),
                }
            }
        };

        if let Some(span) = start {
            let recorded = match &outcome {
                Ok(Ok(_)) => Ok(()),
                Ok(Err(reason)) => Err(AnalysisError::Annotation(reason.clone())),
                Err(err) => Err(err.clone()),
            };
            span.record_annotation(recorded);
        }
        outcome
    }

    fn observe<T, F>(&self, operation: Operation, run: F) -> Result<Analysis<T>, AnalysisError>
    where
        F: FnOnce() -> Result<Analysis<T>, AnalysisError>,
    {
        let start = MetricsSpan::start();
        let began = Instant::now();
        let result = run();
        let elapsed_micros = began.elapsed().as_micros();

        let status = match &result {
            Ok(Analysis::Computed(_)) => {
                info!(operation = operation.as_str(), elapsed_micros, "analysis_success");
                Ok(OperationStatus::Computed)
            }
            Ok(Analysis::Degraded { reason, .. }) => {
                warn!(
                    operation = operation.as_str(),
                    reason = %reason,
                    elapsed_micros,
                    "analysis_degraded"
                );
                Ok(OperationStatus::Degraded)
            }
            Err(err) => {
                warn!(
                    operation = operation.as_str(),
                    error = %err,
                    elapsed_micros,
                    "analysis_failure"
                );
                Err(err.clone())
            }
        };
        if let Some(span) = start {
            span.record_operation(operation, status);
        }
        result
    }

    /// Map `items` in order, over the rayon pool when `parallel` is set.
    fn map_items<I, R, F>(&self, items: &[I], f: F) -> Vec<R>
    where
        I: Sync,
        R: Send,
        F: Fn(usize, &I) -> R + Sync + Send,
    {
        #[cfg(feature = "parallel")]
        if self.config.parallel {
            use rayon::prelude::*;
            return items
                .par_iter()
                .enumerate()
                .map(|(index, item)| f(index, item))
                .collect();
        }

        items
            .iter()
            .enumerate()
            .map(|(index, item)| f(index, item))
            .collect()
    }
}

/// An uncompressed or degraded summary is the caller's text verbatim, which
/// differs from `Document::text` when the annotator normalises Unicode.
fn with_input_text(outcome: Analysis<SummaryResult>, input: &str) -> Analysis<SummaryResult> {
    match outcome {
        Analysis::Computed(mut summary) if !summary.compressed => {
            summary.text = input.to_string();
            Analysis::Computed(summary)
        }
        Analysis::Degraded { mut value, reason } => {
            value.text = input.to_string();
            Analysis::Degraded { value, reason }
        }
        computed => computed,
    }
}

#[cfg(feature = "async")]
impl AnalysisEngine {
    pub async fn sentiment_async(
        &self,
        text: impl Into<String>,
    ) -> Result<Analysis<SentimentResult>, AnalysisError> {
        let engine = self.clone();
        let text = text.into();
        dispatch(move || engine.sentiment(&text)).await
    }

    pub async fn entities_async(
        &self,
        text: impl Into<String>,
    ) -> Result<Analysis<Vec<EntityRecord>>, AnalysisError> {
        let engine = self.clone();
        let text = text.into();
        dispatch(move || engine.entities(&text)).await
    }

    pub async fn keywords_async(
        &self,
        text: impl Into<String>,
        top_n: usize,
    ) -> Result<Analysis<KeywordResult>, AnalysisError> {
        let engine = self.clone();
        let text = text.into();
        dispatch(move || engine.keywords(&text, top_n)).await
    }

    pub async fn summary_async(
        &self,
        text: impl Into<String>,
        ratio: f64,
    ) -> Result<Analysis<SummaryResult>, AnalysisError> {
        let engine = self.clone();
        let text = text.into();
        dispatch(move || engine.summary(&text, ratio)).await
    }

    pub async fn topics_async(
        &self,
        texts: Vec<String>,
        num_topics: usize,
    ) -> Result<Analysis<TopicResult>, AnalysisError> {
        let engine = self.clone();
        dispatch(move || engine.topics(&texts, num_topics)).await
    }

    pub async fn comprehensive_async(
        &self,
        text: impl Into<String>,
    ) -> Result<ComprehensiveReport, AnalysisError> {
        let engine = self.clone();
        let text = text.into();
        dispatch(move || engine.comprehensive(&text)).await
    }
}

/// Run CPU-bound work on tokio's blocking pool.
#[cfg(feature = "async")]
async fn dispatch<T, F>(work: F) -> Result<T, AnalysisError>
where
    F: FnOnce() -> Result<T, AnalysisError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(work)
        .await
        .map_err(|err| AnalysisError::Dispatch(err.to_string()))?
}

#[cfg(test)]
mod tests {
    use super::*;
    use analysis::SentimentLabel;
    use annotate::{AnnotateError, Annotator};

    fn engine() -> AnalysisEngine {
        AnalysisEngine::load(&AnnotatorConfig::default(), AnalysisConfig::default())
            .expect("default engine loads")
    }

    /// Fails on any text containing "boom".
    struct Flaky(annotate::RuleAnnotator);

    impl Annotator for Flaky {
        fn annotate(&self, text: &str) -> Result<Document, AnnotateError> {
            if text.contains("boom") {
                Err(AnnotateError::Failed("tokenizer crashed".into()))
            } else {
                self.0.annotate(text)
            }
        }

        fn name(&self) -> &str {
            "flaky"
        }
    }

    fn flaky_engine(parallel: bool) -> AnalysisEngine {
        let rules = annotate::RuleAnnotator::new(AnnotatorConfig::default()).unwrap();
        AnalysisEngine::new(
            AnnotatorHandle::new(Flaky(rules)),
            AnalysisConfig {
                parallel,
                ..Default::default()
            },
        )
        .unwrap()
    }

    #[test]
    fn sentiment_is_computed() {
        let outcome = engine()
            .sentiment("This is excellent news! The economy is improving and growth is strong.")
            .unwrap();
        assert!(!outcome.is_degraded());
        assert_eq!(outcome.value().label, SentimentLabel::Positive);
    }

    #[test]
    fn annotation_failure_degrades() {
        let outcome = flaky_engine(false).sentiment("boom goes the market").unwrap();
        assert!(outcome.is_degraded());
        assert_eq!(outcome.into_value(), SentimentResult::failed());
    }

    #[test]
    fn unavailable_engine_rejects_everything() {
        let engine = AnalysisEngine::unavailable("model not loaded");
        assert!(!engine.is_available());
        let expected = AnalysisError::ModelUnavailable("model not loaded".into());
        assert_eq!(engine.sentiment("text").unwrap_err(), expected);
        assert_eq!(engine.entities("text").unwrap_err(), expected);
        assert_eq!(engine.keywords("text", 5).unwrap_err(), expected);
        assert_eq!(engine.summary("text", 0.3).unwrap_err(), expected);
        assert_eq!(engine.topics::<&str>(&[], 5).unwrap_err(), expected);
        assert_eq!(engine.comprehensive("text").unwrap_err(), expected);
        assert_eq!(
            engine
                .batch_sentiment(&[AnalysisRequest::new("text")])
                .unwrap_err(),
            expected
        );
    }

    #[test]
    fn failed_load_yields_degraded_engine() {
        let cfg = AnnotatorConfig {
            version: 0,
            ..Default::default()
        };
        let engine = AnalysisEngine::load(&cfg, AnalysisConfig::default()).unwrap();
        assert!(matches!(
            engine.sentiment("hello"),
            Err(AnalysisError::ModelUnavailable(_))
        ));
    }

    #[test]
    fn invalid_analysis_config_is_an_error() {
        let cfg = AnalysisConfig {
            summary_ratio: 2.0,
            ..Default::default()
        };
        assert!(matches!(
            AnalysisEngine::load(&AnnotatorConfig::default(), cfg),
            Err(AnalysisError::InvalidConfig(_))
        ));
    }

    #[test]
    fn summary_ratio_checked_before_annotation() {
        let engine = AnalysisEngine::unavailable("offline");
        assert!(matches!(
            engine.summary("text", 0.0),
            Err(AnalysisError::InvalidInput(_))
        ));
    }

    #[test]
    fn language_validation() {
        assert!(AnalysisEngine::validate_language("en").is_ok());
        assert_eq!(
            AnalysisEngine::validate_language("fr"),
            Err(AnalysisError::UnsupportedLanguage("fr".into()))
        );
    }

    #[test]
    fn batch_isolates_failures() {
        for parallel in [false, true] {
            let engine = flaky_engine(parallel);
            let requests = vec![
                AnalysisRequest::new("Great progress today."),
                AnalysisRequest::new("boom"),
                AnalysisRequest::new("Terrible losses.").with_language("de"),
                AnalysisRequest::new("A bad failure."),
            ];
            let items = engine.batch_sentiment(&requests).unwrap();
            assert_eq!(items.len(), 4);
            assert!(matches!(&items[0], BatchItem::Ok(r) if r.label == SentimentLabel::Positive));
            assert!(matches!(
                &items[1],
                BatchItem::Failed { index: 1, error: AnalysisError::Annotation(_) }
            ));
            assert!(matches!(
                &items[2],
                BatchItem::Failed { index: 2, error: AnalysisError::UnsupportedLanguage(_) }
            ));
            assert!(matches!(&items[3], BatchItem::Ok(r) if r.label == SentimentLabel::Negative));
        }
    }

    #[test]
    fn topics_skip_failed_documents() {
        let engine = flaky_engine(false);
        let texts = [
            "Oil prices and oil exports rose.",
            "boom",
            "Oil markets watched prices closely.",
        ];
        let outcome = engine.topics(&texts, 1).unwrap();
        assert!(outcome.is_degraded());
        assert_eq!(
            outcome.degraded_reason(),
            Some("1 of 3 documents failed annotation")
        );
    }

    #[test]
    fn comprehensive_uses_one_annotation() {
        let report = engine()
            .comprehensive(
                "Tim Cook announced record growth. Investors cheered the strong results. \
                 Apple shares rose. Analysts praised the excellent quarter.",
            )
            .unwrap();
        assert_eq!(report.sentiment.value().label, SentimentLabel::Positive);
        assert!(report.entities.value().iter().any(|e| e.label == "PERSON"));
        assert!(report.keywords.value().len() <= 10);
        assert!(report.summary.value().compressed);
    }

    #[test]
    fn short_summary_returns_caller_text_under_normalization() {
        let annotator = AnnotatorConfig {
            normalize_unicode: true,
            ..Default::default()
        };
        let engine = AnalysisEngine::load(&annotator, AnalysisConfig::default()).unwrap();
        let text = "The \u{fb01}nance team met. Growth was strong.";

        let summary = engine.summary(text, 0.3).unwrap().into_value();
        assert!(!summary.compressed);
        assert_eq!(summary.text, text);

        let report = engine.comprehensive(text).unwrap();
        assert_eq!(report.summary.value().text, text);
    }

    #[test]
    fn degraded_summary_returns_caller_text() {
        struct Broken;

        impl Annotator for Broken {
            fn annotate(&self, text: &str) -> Result<Document, AnnotateError> {
                let cfg = AnnotatorConfig {
                    normalize_unicode: true,
                    ..Default::default()
                };
                let mut doc = annotate::RuleAnnotator::new(cfg)?.annotate(text)?;
                if let Some(last) = doc.sentences.last_mut() {
                    last.token_end = doc.tokens.len() + 3;
                }
                Ok(doc)
            }

            fn name(&self) -> &str {
                "broken"
            }
        }

        let engine =
            AnalysisEngine::new(AnnotatorHandle::new(Broken), AnalysisConfig::default()).unwrap();
        let text = "The \u{fb01}rst rate cut. Markets rose. Bonds fell. Rates eased.";
        let outcome = engine.summary(text, 0.5).unwrap();
        assert!(outcome.is_degraded());
        assert_eq!(outcome.value().text, text);
    }

    #[test]
    fn batch_item_serializes_with_status() {
        let item = BatchItem::Failed {
            index: 3,
            error: AnalysisError::UnsupportedLanguage("fr".into()),
        };
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["status"], "failed");
        assert_eq!(json["index"], 3);
        assert_eq!(json["error"]["kind"], "unsupported_language");
    }

    #[test]
    fn request_language_defaults_to_english() {
        let request: AnalysisRequest = serde_json::from_str(r#"{"text":"hi"}"#).unwrap();
        assert_eq!(request.language, "en");
    }
}
