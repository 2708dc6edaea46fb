//! ARAS analysis stages.
//!
//! Each stage is a pure, synchronous function over an annotated
//! [`Document`](annotate::Document):
//!
//! - [`SentimentScorer`]: lexicon polarity and confidence
//! - [`KeywordRanker`]: POS-filtered lemma frequency
//! - [`SummaryExtractor`]: sentence selection by normalised word frequency
//! - [`TopicClusterer`]: frequency bands over many keyword lists
//! - [`project_entities`]: outbound entity records
//!
//! Stages hold no mutable state, so one instance can serve any number of
//! threads. Faults inside a stage never escape as errors; they come back as
//! [`Analysis::Degraded`] carrying a safe default.
//!
//! ```rust
//! use analysis::{KeywordRanker, SentimentLabel, SentimentScorer};
//! use annotate::{AnnotatorConfig, AnnotatorHandle};
//!
//! let handle = AnnotatorHandle::load(&AnnotatorConfig::default()).unwrap();
//! let doc = handle.annotate("Excellent results and strong growth.").unwrap();
//!
//! let sentiment = SentimentScorer::default().score(&doc).into_value();
//! assert_eq!(sentiment.label, SentimentLabel::Positive);
//!
//! let keywords = KeywordRanker::new().rank(&doc, 3);
//! assert_eq!(keywords.keywords[0].score, 1.0);
//! ```

mod config;
mod entities;
mod error;
mod keywords;
mod lexicon;
mod outcome;
mod sentiment;
mod summary;
mod topics;
mod types;

pub use crate::config::{validate_ratio, AnalysisConfig};
pub use crate::entities::{project_entities, EntityRecord};
pub use crate::error::{AnalysisError, ProcessingError};
pub use crate::keywords::KeywordRanker;
pub use crate::lexicon::{SentimentLexicon, DEFAULT_NEGATIVE, DEFAULT_POSITIVE};
pub use crate::outcome::Analysis;
pub use crate::sentiment::SentimentScorer;
pub use crate::summary::SummaryExtractor;
pub use crate::topics::TopicClusterer;
pub use crate::types::{
    Keyword, KeywordResult, SentimentLabel, SentimentResult, SummaryResult, TopicResult,
};

#[cfg(test)]
mod tests {
    use super::*;
    use annotate::{AnnotatorConfig, AnnotatorHandle};

    #[test]
    fn stages_share_one_document() {
        let handle = AnnotatorHandle::load(&AnnotatorConfig::default()).unwrap();
        let text = "Oil prices rose sharply. Traders cited supply risk. \
                    Oil exporters welcomed the oil rally. Analysts were cautious.";
        let doc = handle.annotate(text).unwrap();

        let sentiment = SentimentScorer::default().score(&doc);
        let keywords = KeywordRanker::new().rank(&doc, 5);
        let summary = SummaryExtractor::new().summarize(&doc, 0.5);

        assert!(!sentiment.is_degraded());
        assert_eq!(keywords.keywords[0].term, "oil");
        assert_eq!(summary.value().sentence_indices.len(), 2);

        let topics = TopicClusterer::new(20, 1).cluster(&[keywords], 2);
        assert_eq!(topics.topics[0], vec!["oil"]);
    }
}
