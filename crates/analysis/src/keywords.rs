//! Frequency-weighted keyword ranking.
//!
//! Candidate tokens are nouns, proper nouns and adjectives that are neither
//! stop words nor punctuation and whose surface form and lemma are both
//! longer than two characters. Their
//! lower-cased lemmas are counted, ranked by count (ties keep first-occurrence
//! order) and scored relative to the top count.

use annotate::{Document, Token};
use fxhash::FxHashMap;

use crate::types::{Keyword, KeywordResult};

/// Surface forms or lemmas shorter than this never become keywords.
const MIN_KEYWORD_CHARS: usize = 3;

#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordRanker;

impl KeywordRanker {
    pub fn new() -> Self {
        Self
    }

    /// Top `top_n` keywords of `document`. Never fails; no candidates (or
    /// `top_n == 0`) yields an empty result.
    pub fn rank(&self, document: &Document, top_n: usize) -> KeywordResult {
        if top_n == 0 {
            return KeywordResult::default();
        }

        let candidates = document
            .tokens
            .iter()
            .filter(|token| is_candidate(token))
            .map(|token| token.lemma.to_lowercase());

        let mut counts = ranked_counts(candidates);
        counts.truncate(top_n);

        let Some(&(_, max)) = counts.first() else {
            return KeywordResult::default();
        };
        let max = max as f64;

        KeywordResult {
            keywords: counts
                .into_iter()
                .map(|(term, count)| Keyword {
                    term,
                    score: count as f64 / max,
                })
                .collect(),
        }
    }
}

fn is_candidate(token: &Token) -> bool {
    token.pos.is_keyword_class()
        && token.is_content()
        && token.text.chars().count() >= MIN_KEYWORD_CHARS
        && token.lemma.chars().count() >= MIN_KEYWORD_CHARS
}

/// Count items and order them by descending count. Equal counts keep the
/// order in which each item was first seen.
pub(crate) fn ranked_counts<I>(items: I) -> Vec<(String, usize)>
where
    I: IntoIterator<Item = String>,
{
    let mut slots: FxHashMap<String, usize> = FxHashMap::default();
    let mut counts: Vec<(String, usize)> = Vec::new();

    for item in items {
        match slots.get(&item) {
            Some(&slot) => counts[slot].1 += 1,
            None => {
                slots.insert(item.clone(), counts.len());
                counts.push((item, 1));
            }
        }
    }

    // sort_by is stable, so first-seen order breaks ties
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}
