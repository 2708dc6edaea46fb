//! Configuration for the reference annotator.
//!
//! [`AnnotatorConfig`] is validated once when a handle is loaded; a bad config
//! surfaces as a load error rather than failing mid-request.
//!
//! # Examples
//!
//! ```rust
//! use annotate::AnnotatorConfig;
//!
//! let config = AnnotatorConfig::default();
//! assert_eq!(config.version, 1);
//! assert_eq!(config.language, "en");
//! assert!(config.detect_entities);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::AnnotateError;

/// Languages the bundled annotator has stop-word and suffix rules for.
pub const SUPPORTED_LANGUAGES: &[&str] = &["en"];

/// Configuration for [`RuleAnnotator`](crate::RuleAnnotator).
///
/// Missing fields take their [`Default`] values when deserializing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AnnotatorConfig {
    /// Version of the annotation rules. Must be >= 1; bump when output changes.
    pub version: u32,

    /// ISO 639-1 language code. Only `"en"` is supported.
    pub language: String,

    /// Apply Unicode NFKC before segmentation.
    ///
    /// Offsets in the resulting [`Document`](crate::Document) always refer to
    /// `Document::text`, which is the normalized text when this is enabled.
    ///
    /// # Default
    ///
    /// `false`, so offsets line up with the caller's input.
    pub normalize_unicode: bool,

    /// Extra words flagged as stop words on top of the built-in English list.
    pub extra_stopwords: Vec<String>,

    /// Produce entity spans. Disabling it leaves `Document::entities` empty.
    pub detect_entities: bool,
}

impl AnnotatorConfig {
    pub fn validate(&self) -> Result<(), AnnotateError> {
        if self.version == 0 {
            return Err(AnnotateError::InvalidConfig(
                "config version must be >= 1".into(),
            ));
        }
        if !SUPPORTED_LANGUAGES.contains(&self.language.as_str()) {
            return Err(AnnotateError::UnsupportedLanguage(self.language.clone()));
        }
        Ok(())
    }
}

impl Default for AnnotatorConfig {
    fn default() -> Self {
        Self {
            version: 1,
            language: "en".into(),
            normalize_unicode: false,
            extra_stopwords: Vec::new(),
            detect_entities: true,
        }
    }
}
