use serde::{Deserialize, Serialize};

/// Coarse part-of-speech category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PosTag {
    Noun,
    Propn,
    Adj,
    Verb,
    Other,
}

impl PosTag {
    /// Nouns, proper nouns and adjectives: the categories keywords come from.
    pub fn is_keyword_class(self) -> bool {
        matches!(self, PosTag::Noun | PosTag::Propn | PosTag::Adj)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PosTag::Noun => "NOUN",
            PosTag::Propn => "PROPN",
            PosTag::Adj => "ADJ",
            PosTag::Verb => "VERB",
            PosTag::Other => "OTHER",
        }
    }
}

/// An annotated token with character offsets into `Document::text`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Token {
    /// Surface form as it appears in the text.
    pub text: String,
    /// Lower-cased base form.
    pub lemma: String,
    pub pos: PosTag,
    pub is_stop: bool,
    pub is_punct: bool,
    /// Character offset (inclusive).
    pub start: usize,
    /// Character offset (exclusive).
    pub end: usize,
}

impl Token {
    /// Neither a stop word nor punctuation.
    pub fn is_content(&self) -> bool {
        !self.is_stop && !self.is_punct
    }

    /// Length of the surface form in characters.
    pub fn char_len(&self) -> usize {
        self.end - self.start
    }
}

impl AsRef<str> for Token {
    fn as_ref(&self) -> &str {
        self.text.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_classes() {
        assert!(PosTag::Noun.is_keyword_class());
        assert!(PosTag::Propn.is_keyword_class());
        assert!(PosTag::Adj.is_keyword_class());
        assert!(!PosTag::Verb.is_keyword_class());
        assert!(!PosTag::Other.is_keyword_class());
    }

    #[test]
    fn pos_serializes_uppercase() {
        assert_eq!(serde_json::to_string(&PosTag::Propn).unwrap(), "\"PROPN\"");
    }
}
