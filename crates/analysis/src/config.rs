//! Tunables for the analysis stages.
//!
//! Defaults reproduce the behaviour callers expect without any config file:
//! ten keywords per text, twenty keywords per document when clustering, topic
//! bands of five terms and summaries at 30% of the sentences.

use serde::{Deserialize, Serialize};

use crate::error::AnalysisError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Keywords returned by single-text keyword extraction.
    #[serde(default = "default_keyword_top_n")]
    pub keyword_top_n: usize,

    /// Keywords taken from each document before global topic ranking.
    #[serde(default = "default_topic_terms_per_document")]
    pub topic_terms_per_document: usize,

    /// Terms per topic band.
    #[serde(default = "default_topic_band_size")]
    pub topic_band_size: usize,

    /// Fraction of sentences kept by the summary extractor, in (0, 1].
    #[serde(default = "default_summary_ratio")]
    pub summary_ratio: f64,

    /// Fan batch work out over the rayon pool.
    #[serde(default)]
    pub parallel: bool,
}

impl AnalysisConfig {
    pub fn validate(&self) -> Result<(), AnalysisError> {
        if self.topic_terms_per_document == 0 {
            return Err(AnalysisError::InvalidConfig(
                "topic_terms_per_document must be >= 1".into(),
            ));
        }
        if self.topic_band_size == 0 {
            return Err(AnalysisError::InvalidConfig(
                "topic_band_size must be >= 1".into(),
            ));
        }
        validate_ratio(self.summary_ratio).map_err(|_| {
            AnalysisError::InvalidConfig(format!(
                "summary_ratio must be in (0, 1], got {}",
                self.summary_ratio
            ))
        })
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            keyword_top_n: default_keyword_top_n(),
            topic_terms_per_document: default_topic_terms_per_document(),
            topic_band_size: default_topic_band_size(),
            summary_ratio: default_summary_ratio(),
            parallel: false,
        }
    }
}

/// Reject summary ratios outside `(0, 1]`, including NaN and infinities.
pub fn validate_ratio(ratio: f64) -> Result<(), AnalysisError> {
    if ratio.is_finite() && ratio > 0.0 && ratio <= 1.0 {
        Ok(())
    } else {
        Err(AnalysisError::InvalidInput(format!(
            "ratio must be in (0, 1], got {ratio}"
        )))
    }
}

fn default_keyword_top_n() -> usize {
    10
}

fn default_topic_terms_per_document() -> usize {
    20
}

fn default_topic_band_size() -> usize {
    5
}

fn default_summary_ratio() -> f64 {
    0.3
}
