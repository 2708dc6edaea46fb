//! ARAS annotation layer.
//!
//! Everything downstream (sentiment, keywords, summaries, topics) consumes a
//! [`Document`]: sentences, tokens and entity spans with character offsets.
//! This crate defines that shape and the [`Annotator`] seam that produces it.
//!
//! ## What we provide
//!
//! - The [`Document`] model (sentences, tokens with lemma/POS/stop/punct, entities)
//! - The [`Annotator`] trait and a shared [`AnnotatorHandle`]
//! - [`RuleAnnotator`], a deterministic English annotator built on Unicode
//!   segmentation and word lists
//! - A case-insensitive [`StopwordFilter`]
//! - [`explain_label`] for entity label descriptions
//!
//! ## Invariants worth knowing
//!
//! - Sentences are numbered from 0 in document order
//! - Each sentence owns a contiguous, non-overlapping token range
//! - Offsets are characters into `Document::text`
//! - Same text + same config = same document
//!
//! ```rust
//! use annotate::{AnnotatorConfig, AnnotatorHandle};
//!
//! let handle = AnnotatorHandle::load(&AnnotatorConfig::default()).unwrap();
//! let doc = handle.annotate("Tim Cook visited Paris. It was great.").unwrap();
//! assert_eq!(doc.sentences.len(), 2);
//! ```

mod config;
mod document;
mod error;
mod handle;
mod labels;
mod rules;
mod stopwords;
mod token;

pub use crate::config::{AnnotatorConfig, SUPPORTED_LANGUAGES};
pub use crate::document::{Document, EntitySpan, Sentence};
pub use crate::error::AnnotateError;
pub use crate::handle::{Annotator, AnnotatorHandle};
pub use crate::labels::explain_label;
pub use crate::rules::RuleAnnotator;
pub use crate::stopwords::{StopwordFilter, ENGLISH_STOPWORDS};
pub use crate::token::{PosTag, Token};
