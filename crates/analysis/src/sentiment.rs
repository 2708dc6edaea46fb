//! Lexicon-driven polarity and confidence.
//!
//! Every non-stop, non-punctuation token counts toward the total. A token
//! whose lower-cased surface form is in the positive set adds positive
//! evidence, and one in the negative set adds negative evidence. A word in
//! both sets of a custom lexicon counts both ways.
//!
//! | outcome   | polarity                           | confidence                          |
//! |-----------|------------------------------------|-------------------------------------|
//! | no tokens | 0.0                                | 0.5                                 |
//! | pos > neg | `min(0.9, 0.5 + 2 * pos / total)`  | `min(0.95, 0.6 + (pos-neg)/total)`  |
//! | neg > pos | `max(-0.9, -0.5 - 2 * neg / total)`| `min(0.95, 0.6 + (neg-pos)/total)`  |
//! | tie       | 0.0                                | 0.7 if no evidence, else 0.5        |

use annotate::Document;

use crate::lexicon::SentimentLexicon;
use crate::outcome::Analysis;
use crate::types::{SentimentLabel, SentimentResult};

#[derive(Debug, Clone, Default)]
pub struct SentimentScorer {
    lexicon: SentimentLexicon,
}

impl SentimentScorer {
    pub fn new(lexicon: SentimentLexicon) -> Self {
        Self { lexicon }
    }

    pub fn lexicon(&self) -> &SentimentLexicon {
        &self.lexicon
    }

    /// Score `document`.
    ///
    /// Always [`Analysis::Computed`]; the wrapper keeps the stage signatures
    /// uniform with the summary extractor.
    pub fn score(&self, document: &Document) -> Analysis<SentimentResult> {
        let mut positive = 0usize;
        let mut negative = 0usize;
        let mut total = 0usize;

        for token in document.content_tokens() {
            total += 1;
            let word = token.text.to_lowercase();
            if self.lexicon.is_positive(&word) {
                positive += 1;
            }
            if self.lexicon.is_negative(&word) {
                negative += 1;
            }
        }

        if total == 0 {
            return Analysis::Computed(SentimentResult::neutral());
        }

        let total_f = total as f64;
        let (label, polarity, confidence) = if positive > negative {
            (
                SentimentLabel::Positive,
                (0.5 + (positive as f64 / total_f) * 2.0).min(0.9),
                (0.6 + (positive - negative) as f64 / total_f).min(0.95),
            )
        } else if negative > positive {
            (
                SentimentLabel::Negative,
                (-0.5 - (negative as f64 / total_f) * 2.0).max(-0.9),
                (0.6 + (negative - positive) as f64 / total_f).min(0.95),
            )
        } else {
            let confidence = if positive == 0 { 0.7 } else { 0.5 };
            (SentimentLabel::Neutral, 0.0, confidence)
        };

        Analysis::Computed(SentimentResult {
            label,
            polarity: round2(polarity),
            confidence: round2(confidence),
        })
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
