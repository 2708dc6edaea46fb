//! Corpus-level topic bands.
//!
//! Per-document keyword lists are concatenated and counted again; the most
//! frequent terms are cut into contiguous bands of `band_size`. A band is only
//! emitted when it is full.

use crate::config::AnalysisConfig;
use crate::keywords::ranked_counts;
use crate::types::{KeywordResult, TopicResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TopicClusterer {
    terms_per_document: usize,
    band_size: usize,
}

impl Default for TopicClusterer {
    fn default() -> Self {
        Self::from_config(&AnalysisConfig::default())
    }
}

impl TopicClusterer {
    pub fn new(terms_per_document: usize, band_size: usize) -> Self {
        Self {
            terms_per_document: terms_per_document.max(1),
            band_size: band_size.max(1),
        }
    }

    pub fn from_config(cfg: &AnalysisConfig) -> Self {
        Self::new(cfg.topic_terms_per_document, cfg.topic_band_size)
    }

    /// How many keywords to rank per document before clustering.
    pub fn terms_per_document(&self) -> usize {
        self.terms_per_document
    }

    pub fn band_size(&self) -> usize {
        self.band_size
    }

    /// Cluster per-document keyword lists into at most `num_topics` bands.
    pub fn cluster(&self, documents: &[KeywordResult], num_topics: usize) -> TopicResult {
        if documents.is_empty() || num_topics == 0 {
            return TopicResult::default();
        }

        let stream = documents.iter().flat_map(|keywords| {
            keywords
                .terms()
                .take(self.terms_per_document)
                .map(str::to_string)
        });

        let mut ranked = ranked_counts(stream);
        ranked.truncate(num_topics.saturating_mul(self.band_size));

        let bands = num_topics.min(ranked.len() / self.band_size);
        let topics = ranked
            .chunks_exact(self.band_size)
            .take(bands)
            .map(|band| band.iter().map(|(term, _)| term.clone()).collect())
            .collect();

        TopicResult { topics }
    }
}
