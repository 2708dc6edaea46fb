use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    pub fn as_str(self) -> &'static str {
        match self {
            SentimentLabel::Positive => "positive",
            SentimentLabel::Negative => "negative",
            SentimentLabel::Neutral => "neutral",
        }
    }
}

/// Sentiment of a text. Scores are rounded to two decimals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentResult {
    pub label: SentimentLabel,
    /// Signed polarity in `[-1, 1]`.
    pub polarity: f64,
    /// Confidence in `[0, 1]`.
    pub confidence: f64,
}

impl SentimentResult {
    /// No scorable words at all.
    pub fn neutral() -> Self {
        Self {
            label: SentimentLabel::Neutral,
            polarity: 0.0,
            confidence: 0.5,
        }
    }

    /// Fallback after an internal fault: neutral with zero confidence.
    pub fn failed() -> Self {
        Self {
            label: SentimentLabel::Neutral,
            polarity: 0.0,
            confidence: 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Keyword {
    /// Lower-cased lemma.
    pub term: String,
    /// Frequency relative to the top keyword, in `(0, 1]`.
    pub score: f64,
}

/// Keywords in descending score order. The first score is 1.0 unless empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KeywordResult {
    pub keywords: Vec<Keyword>,
}

impl KeywordResult {
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.keywords.iter().map(|k| k.term.as_str())
    }

    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryResult {
    pub text: String,
    /// Indices of the kept sentences, ascending.
    pub sentence_indices: Vec<usize>,
    pub total_sentences: usize,
    /// False when the text was returned unchanged.
    pub compressed: bool,
}

impl SummaryResult {
    /// The input text as its own summary.
    pub fn unchanged(text: String, total_sentences: usize) -> Self {
        Self {
            text,
            sentence_indices: (0..total_sentences).collect(),
            total_sentences,
            compressed: false,
        }
    }
}

/// Topic clusters, each a band of `topic_band_size` terms.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicResult {
    pub topics: Vec<Vec<String>>,
}

impl TopicResult {
    pub fn len(&self) -> usize {
        self.topics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }
}
