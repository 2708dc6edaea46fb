//! Extractive summaries by normalised word frequency.

use annotate::Document;
use fxhash::FxHashMap;

use crate::error::ProcessingError;
use crate::outcome::Analysis;
use crate::types::SummaryResult;

/// Documents with this many sentences or fewer are returned unchanged.
const MIN_SENTENCES_TO_COMPRESS: usize = 2;

#[derive(Debug, Clone, Copy, Default)]
pub struct SummaryExtractor;

impl SummaryExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Keep the `max(1, floor(n * ratio))` highest-scoring sentences, in
    /// their original order. Faults fall back to the unmodified text.
    pub fn summarize(&self, document: &Document, ratio: f64) -> Analysis<SummaryResult> {
        match try_summarize(document, ratio) {
            Ok(summary) => Analysis::Computed(summary),
            Err(err) => Analysis::degraded(
                SummaryResult::unchanged(document.text.clone(), document.sentences.len()),
                err.to_string(),
            ),
        }
    }
}

fn try_summarize(document: &Document, ratio: f64) -> Result<SummaryResult, ProcessingError> {
    if !(ratio.is_finite() && ratio > 0.0 && ratio <= 1.0) {
        return Err(ProcessingError::RatioOutOfRange(ratio));
    }

    let total = document.sentences.len();
    if total <= MIN_SENTENCES_TO_COMPRESS {
        return Ok(SummaryResult::unchanged(document.text.clone(), total));
    }

    let mut frequency: FxHashMap<String, f64> = FxHashMap::default();
    for token in document.content_tokens() {
        *frequency.entry(token.lemma.to_lowercase()).or_insert(0.0) += 1.0;
    }
    let max = frequency.values().copied().fold(0.0_f64, f64::max);
    if max > 0.0 {
        for value in frequency.values_mut() {
            *value /= max;
        }
    }

    // Sentences without any frequency-bearing token cannot be ranked.
    let mut scored: Vec<(usize, f64)> = Vec::with_capacity(total);
    for sentence in &document.sentences {
        let tokens = document
            .sentence_tokens(sentence)
            .ok_or(ProcessingError::SentenceOutOfBounds {
                index: sentence.index,
            })?;
        let mut sum = 0.0;
        let mut count = 0usize;
        for token in tokens {
            if let Some(weight) = frequency.get(&token.lemma.to_lowercase()) {
                sum += weight;
                count += 1;
            }
        }
        if count > 0 {
            scored.push((sentence.index, sum / count as f64));
        }
    }

    let keep = ((total as f64 * ratio).floor() as usize).max(1);
    // stable: equal scores keep the earlier sentence first
    scored.sort_by(|a, b| b.1.total_cmp(&a.1));
    scored.truncate(keep);

    let mut indices: Vec<usize> = scored.into_iter().map(|(index, _)| index).collect();
    indices.sort_unstable();

    let text = indices
        .iter()
        .filter_map(|&index| document.sentences.get(index))
        .map(|sentence| sentence.text.trim())
        .collect::<Vec<_>>()
        .join(" ");

    Ok(SummaryResult {
        text,
        sentence_indices: indices,
        total_sentences: total,
        compressed: true,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use annotate::{Annotator, AnnotatorConfig, RuleAnnotator, Sentence};

    fn doc(text: &str) -> Document {
        RuleAnnotator::new(AnnotatorConfig::default())
            .unwrap()
            .annotate(text)
            .unwrap()
    }

    const ARTICLE: &str = "The central bank raised interest rates again. \
        Markets reacted calmly to the rate decision. \
        Analysts expect more rate increases this year. \
        Weather was sunny in the capital. \
        Rate hikes aim to curb inflation and interest costs.";

    #[test]
    fn short_text_is_unchanged() {
        let text = "One sentence here. And a second one.";
        let summary = SummaryExtractor::new().summarize(&doc(text), 0.3);
        assert!(!summary.is_degraded());
        let summary = summary.into_value();
        assert_eq!(summary.text, text);
        assert!(!summary.compressed);
        assert_eq!(summary.total_sentences, 2);
    }

    #[test]
    fn keeps_at_least_one_sentence() {
        let summary = SummaryExtractor::new()
            .summarize(&doc(ARTICLE), 0.1)
            .into_value();
        assert_eq!(summary.sentence_indices.len(), 1);
        assert!(summary.compressed);
        assert_eq!(summary.total_sentences, 5);
    }

    #[test]
    fn picks_frequent_sentences_in_order() {
        let summary = SummaryExtractor::new()
            .summarize(&doc(ARTICLE), 0.4)
            .into_value();
        assert_eq!(summary.sentence_indices.len(), 2);
        assert!(summary.sentence_indices.windows(2).all(|w| w[0] < w[1]));
        // the weather sentence shares no vocabulary with the rest
        assert!(!summary.sentence_indices.contains(&3));
        assert!(!summary.text.contains("Weather"));
    }

    #[test]
    fn full_ratio_keeps_everything() {
        let d = doc(ARTICLE);
        let summary = SummaryExtractor::new().summarize(&d, 1.0).into_value();
        assert_eq!(summary.sentence_indices, vec![0, 1, 2, 3, 4]);
        let joined: Vec<&str> = d.sentences.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(summary.text, joined.join(" "));
    }

    #[test]
    fn bad_ratio_degrades_to_input() {
        let d = doc(ARTICLE);
        let outcome = SummaryExtractor::new().summarize(&d, 0.0);
        assert!(outcome.is_degraded());
        assert_eq!(outcome.into_value().text, d.text);
    }

    #[test]
    fn stale_sentence_range_degrades() {
        let mut d = doc(ARTICLE);
        d.sentences.push(Sentence {
            index: 5,
            text: "ghost".into(),
            start: 0,
            end: 0,
            token_start: 0,
            token_end: d.tokens.len() + 10,
        });
        let outcome = SummaryExtractor::new().summarize(&d, 0.5);
        assert!(outcome.is_degraded());
        assert!(outcome.degraded_reason().unwrap().contains("sentence 5"));
    }

    #[test]
    fn unscorable_sentences_yield_empty_text() {
        let summary = SummaryExtractor::new()
            .summarize(&doc("It is. So it was. And so on."), 0.5)
            .into_value();
        assert!(summary.text.is_empty());
        assert!(summary.sentence_indices.is_empty());
    }
}
