use std::fmt;
use std::sync::Arc;
use std::time::Instant;

use tracing::{info, warn};

use crate::config::AnnotatorConfig;
use crate::document::Document;
use crate::error::AnnotateError;
use crate::rules::RuleAnnotator;

/// A linguistic annotation engine.
///
/// Implementations must be safe to call from many threads at once; the
/// analysis stages share one instance for the life of the process.
pub trait Annotator: Send + Sync {
    /// Annotate `text`. Empty input yields an empty document, not an error.
    fn annotate(&self, text: &str) -> Result<Document, AnnotateError>;

    /// Short engine name used in logs.
    fn name(&self) -> &str;
}

/// Shared, cheaply clonable handle to a loaded annotator.
#[derive(Clone)]
pub struct AnnotatorHandle {
    inner: Arc<dyn Annotator>,
}

impl AnnotatorHandle {
    pub fn new<A: Annotator + 'static>(annotator: A) -> Self {
        Self {
            inner: Arc::new(annotator),
        }
    }

    pub fn from_arc(inner: Arc<dyn Annotator>) -> Self {
        Self { inner }
    }

    /// Load the bundled rule annotator. Configuration errors surface here,
    /// once, instead of on every request.
    pub fn load(cfg: &AnnotatorConfig) -> Result<Self, AnnotateError> {
        let start = Instant::now();
        match RuleAnnotator::new(cfg.clone()) {
            Ok(annotator) => {
                let elapsed_micros = start.elapsed().as_micros();
                info!(
                    annotator = annotator.name(),
                    language = %cfg.language,
                    version = cfg.version,
                    elapsed_micros,
                    "annotator_loaded"
                );
                Ok(Self::new(annotator))
            }
            Err(err) => {
                let elapsed_micros = start.elapsed().as_micros();
                warn!(error = %err, elapsed_micros, "annotator_load_failed");
                Err(err)
            }
        }
    }

    pub fn annotate(&self, text: &str) -> Result<Document, AnnotateError> {
        self.inner.annotate(text)
    }

    pub fn name(&self) -> &str {
        self.inner.name()
    }
}

impl fmt::Debug for AnnotatorHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnnotatorHandle")
            .field("name", &self.inner.name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Offline;

    impl Annotator for Offline {
        fn annotate(&self, _text: &str) -> Result<Document, AnnotateError> {
            Err(AnnotateError::Unavailable("offline".into()))
        }

        fn name(&self) -> &str {
            "offline"
        }
    }

    #[test]
    fn load_default_rule_annotator() {
        let handle = AnnotatorHandle::load(&AnnotatorConfig::default()).unwrap();
        assert_eq!(handle.name(), "rule");
        let doc = handle.annotate("Growth is strong.").unwrap();
        assert_eq!(doc.sentences.len(), 1);
    }

    #[test]
    fn load_rejects_bad_config() {
        let cfg = AnnotatorConfig {
            language: "de".into(),
            ..Default::default()
        };
        assert!(matches!(
            AnnotatorHandle::load(&cfg),
            Err(AnnotateError::UnsupportedLanguage(_))
        ));
    }

    #[test]
    fn custom_annotator_errors_pass_through() {
        let handle = AnnotatorHandle::new(Offline);
        let err = handle.annotate("anything").unwrap_err();
        assert!(err.is_unavailable());
        assert_eq!(format!("{handle:?}"), "AnnotatorHandle { name: \"offline\" }");
    }

    #[test]
    fn clones_share_the_engine() {
        let handle = AnnotatorHandle::load(&AnnotatorConfig::default()).unwrap();
        let clone = handle.clone();
        assert_eq!(
            handle.annotate("Good news.").unwrap(),
            clone.annotate("Good news.").unwrap()
        );
    }
}
