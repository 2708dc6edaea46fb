//! Document types produced by an [`Annotator`](crate::Annotator).
//!
//! A [`Document`] is the unit of analysis. It holds:
//! - The text the offsets refer to
//! - Sentences, in order, each pointing at a range of the flattened tokens
//! - Tokens with lemma, coarse POS and stop/punctuation flags
//! - Entity spans with open-string labels
//!
//! Documents are built once per call and never mutated afterwards. All offsets
//! are character (Unicode scalar) offsets, not byte offsets.
//!
//! ```text
//! Document
//! ├── text: String
//! ├── sentences: Vec<Sentence>     # token_start..token_end into `tokens`
//! ├── tokens: Vec<Token>
//! └── entities: Vec<EntitySpan>
//! ```

use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::error::AnnotateError;
use crate::token::Token;

/// A sentence and the slice of tokens it owns.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Sentence {
    /// Ordinal position in the document, starting at 0.
    pub index: usize,
    /// Sentence text with surrounding whitespace trimmed.
    pub text: String,
    pub start: usize,
    pub end: usize,
    /// First token index (inclusive) in `Document::tokens`.
    pub token_start: usize,
    /// Last token index (exclusive) in `Document::tokens`.
    pub token_end: usize,
}

impl Sentence {
    pub fn token_range(&self) -> Range<usize> {
        self.token_start..self.token_end
    }
}

/// A named-entity span. Entities are independent; there is no entity graph.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EntitySpan {
    pub text: String,
    /// Open label such as `PERSON`, `ORG`, `GPE` or `DATE`.
    pub label: String,
    pub start: usize,
    pub end: usize,
    /// Human-readable description of `label`, when one is known.
    pub description: Option<String>,
}

/// An annotated document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Document {
    pub text: String,
    pub sentences: Vec<Sentence>,
    pub tokens: Vec<Token>,
    pub entities: Vec<EntitySpan>,
}

impl Document {
    /// Builds a document, checking that sentences are numbered in order and
    /// that their token ranges are ordered and in bounds.
    ///
    /// Annotator implementations should go through this constructor so
    /// downstream stages can rely on the structure.
    pub fn new(
        text: String,
        sentences: Vec<Sentence>,
        tokens: Vec<Token>,
        entities: Vec<EntitySpan>,
    ) -> Result<Self, AnnotateError> {
        let mut previous_end = 0;
        for (position, sentence) in sentences.iter().enumerate() {
            if sentence.index != position {
                return Err(AnnotateError::MalformedDocument(format!(
                    "sentence at position {position} has index {}",
                    sentence.index
                )));
            }
            if sentence.token_start > sentence.token_end
                || sentence.token_end > tokens.len()
                || sentence.token_start < previous_end
            {
                return Err(AnnotateError::MalformedDocument(format!(
                    "sentence {} token range {}..{} invalid for {} tokens",
                    sentence.index,
                    sentence.token_start,
                    sentence.token_end,
                    tokens.len()
                )));
            }
            previous_end = sentence.token_end;
        }

        Ok(Self {
            text,
            sentences,
            tokens,
            entities,
        })
    }

    /// An empty document for empty input.
    pub fn empty() -> Self {
        Self {
            text: String::new(),
            sentences: Vec::new(),
            tokens: Vec::new(),
            entities: Vec::new(),
        }
    }

    /// Tokens belonging to `sentence`, or `None` if its range does not fit
    /// this document.
    pub fn sentence_tokens(&self, sentence: &Sentence) -> Option<&[Token]> {
        self.tokens.get(sentence.token_range())
    }

    /// Tokens that are neither stop words nor punctuation.
    pub fn content_tokens(&self) -> impl Iterator<Item = &Token> {
        self.tokens.iter().filter(|token| token.is_content())
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}
