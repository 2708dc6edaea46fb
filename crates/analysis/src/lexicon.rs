//! Polarity word lists for the sentiment scorer.

use fxhash::FxHashSet;

/// News-domain words counted as positive evidence.
pub const DEFAULT_POSITIVE: &[&str] = &[
    "good", "great", "excellent", "amazing", "wonderful", "fantastic", "positive", "best",
    "better", "outstanding", "superb", "brilliant", "impressive", "exceptional", "remarkable",
    "successful", "victory", "win", "progress", "improvement", "growth", "benefit", "advantage",
    "strong", "leading", "breakthrough", "innovation", "achievement",
];

/// News-domain words counted as negative evidence.
pub const DEFAULT_NEGATIVE: &[&str] = &[
    "bad", "terrible", "awful", "horrible", "negative", "worst", "worse", "poor", "disappointing",
    "failure", "failed", "crisis", "problem", "issue", "concern", "threat", "risk", "danger",
    "decline", "decrease", "loss", "damage", "harm", "conflict", "weak", "falling", "collapse",
    "corruption", "scandal", "violation",
];

/// Two case-normalised word sets. Read-only once built.
#[derive(Debug, Clone)]
pub struct SentimentLexicon {
    positive: FxHashSet<String>,
    negative: FxHashSet<String>,
}

impl Default for SentimentLexicon {
    fn default() -> Self {
        Self::new(DEFAULT_POSITIVE, DEFAULT_NEGATIVE)
    }
}

impl SentimentLexicon {
    pub fn new<S: AsRef<str>>(positive: &[S], negative: &[S]) -> Self {
        Self {
            positive: positive.iter().map(|w| w.as_ref().to_lowercase()).collect(),
            negative: negative.iter().map(|w| w.as_ref().to_lowercase()).collect(),
        }
    }

    /// Add positive words.
    pub fn with_positive<S: AsRef<str>>(mut self, words: &[S]) -> Self {
        self.positive
            .extend(words.iter().map(|w| w.as_ref().to_lowercase()));
        self
    }

    /// Add negative words.
    pub fn with_negative<S: AsRef<str>>(mut self, words: &[S]) -> Self {
        self.negative
            .extend(words.iter().map(|w| w.as_ref().to_lowercase()));
        self
    }

    /// `word` must already be lower case.
    pub fn is_positive(&self, word: &str) -> bool {
        self.positive.contains(word)
    }

    /// `word` must already be lower case.
    pub fn is_negative(&self, word: &str) -> bool {
        self.negative.contains(word)
    }

    pub fn positive_len(&self) -> usize {
        self.positive.len()
    }

    pub fn negative_len(&self) -> usize {
        self.negative.len()
    }
}
