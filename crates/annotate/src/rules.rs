//! Rule-based reference annotator.
//!
//! Segments text with Unicode UAX#29 sentence and word boundaries, then tags
//! each word with a stop flag, a lemma and a coarse POS from suffix and word
//! list heuristics. Entity spans come from runs of capitalised words plus a
//! small gazetteer for dates, money and percentages.
//!
//! This is not a statistical model. It honours the [`Annotator`] contract
//! deterministically so the analysis stages work without an external engine.

use std::borrow::Cow;

use unicode_categories::UnicodeCategories;
use unicode_normalization::UnicodeNormalization;
use unicode_segmentation::UnicodeSegmentation;

use crate::config::AnnotatorConfig;
use crate::document::{Document, EntitySpan, Sentence};
use crate::error::AnnotateError;
use crate::handle::Annotator;
use crate::labels::explain_label;
use crate::stopwords::StopwordFilter;
use crate::token::{PosTag, Token};

const DETERMINERS: &[&str] = &[
    "the", "a", "an", "this", "that", "these", "those", "its", "their", "our", "his", "her", "my",
    "your", "every", "each", "no", "some", "any",
];

const COMMON_ADJECTIVES: &[&str] = &[
    "good", "great", "excellent", "amazing", "wonderful", "fantastic", "positive", "best",
    "better", "outstanding", "superb", "brilliant", "impressive", "exceptional", "remarkable",
    "successful", "strong", "leading", "bad", "terrible", "awful", "horrible", "negative", "worst",
    "worse", "poor", "disappointing", "weak", "new", "old", "big", "small", "large", "high", "low",
    "long", "short", "major", "minor", "economic", "political", "global", "local", "national",
    "international", "public", "private", "key", "important", "recent", "early", "late", "free",
    "open", "clear", "hard", "easy", "possible", "likely", "real", "true", "false", "huge",
    "significant", "financial", "social", "military", "foreign", "domestic", "annual",
];

const ADJECTIVE_SUFFIXES: &[&str] = &["ous", "ful", "ive", "able", "ible", "less", "ical", "ish"];

/// Irregular past forms and third-person forms mapped to their base.
const IRREGULAR_VERBS: &[(&str, &str)] = &[
    ("said", "say"),
    ("says", "say"),
    ("went", "go"),
    ("took", "take"),
    ("gave", "give"),
    ("held", "hold"),
    ("rose", "rise"),
    ("fell", "fall"),
    ("grew", "grow"),
    ("won", "win"),
    ("lost", "lose"),
    ("told", "tell"),
    ("came", "come"),
    ("saw", "see"),
    ("knew", "know"),
    ("thought", "think"),
    ("found", "find"),
    ("left", "leave"),
    ("began", "begin"),
    ("kept", "keep"),
    ("brought", "bring"),
    ("bought", "buy"),
    ("sold", "sell"),
    ("paid", "pay"),
    ("met", "meet"),
    ("ran", "run"),
    ("led", "lead"),
];

const BASE_VERBS: &[&str] = &[
    "announce", "report", "warn", "rise", "fall", "grow", "win", "lose", "tell", "plan", "expect",
    "hold",
];

/// Nouns whose trailing `s` is not a plural marker.
const INVARIANT_NOUNS: &[&str] = &[
    "news", "series", "species", "means", "physics", "economics", "politics", "mathematics",
    "headquarters", "business", "always",
];

/// Stem endings that lost a silent `e` when the suffix was attached.
const SILENT_E_STEMS: &[&str] = &["v", "c", "z", "at", "iz", "is", "ur", "ag", "dg", "bl", "ul"];

const MONTHS: &[&str] = &[
    "january", "february", "march", "april", "may", "june", "july", "august", "september",
    "october", "november", "december",
];

const WEEKDAYS: &[&str] = &[
    "monday", "tuesday", "wednesday", "thursday", "friday", "saturday", "sunday",
];

const ORG_HEADS: &[&str] = &[
    "inc", "corp", "corporation", "co", "ltd", "llc", "company", "group", "bank", "reserve",
    "university", "ministry", "council", "commission", "committee", "agency", "department",
    "party", "union", "association", "institute", "fund", "court", "senate", "congress",
    "parliament",
];

const ORG_ABBREVIATIONS: &[&str] = &["inc", "corp", "co", "ltd"];

const PLACES: &[&str] = &[
    "united states", "china", "iran", "russia", "india", "japan", "germany", "france", "italy",
    "spain", "canada", "saudi arabia", "mexico", "brazil", "israel", "ukraine", "turkey", "egypt",
    "britain", "united kingdom", "europe", "california", "texas", "new york", "washington",
    "london", "paris", "berlin", "tokyo", "beijing", "moscow", "tehran", "san francisco",
    "los angeles", "chicago", "boston",
];

const NATIONALITIES: &[&str] = &[
    "american", "iranian", "european", "chinese", "british", "russian", "german", "french",
    "japanese", "indian", "israeli", "ukrainian", "muslim", "christian", "jewish", "democrat",
    "republican",
];

const CURRENCY_SYMBOLS: &[&str] = &["$", "\u{20ac}", "\u{a3}", "\u{a5}"];

const MAGNITUDES: &[&str] = &["thousand", "million", "billion", "trillion"];

/// Deterministic annotator built from Unicode segmentation and word lists.
#[derive(Debug, Clone)]
pub struct RuleAnnotator {
    config: AnnotatorConfig,
    stopwords: StopwordFilter,
}

impl RuleAnnotator {
    pub fn new(config: AnnotatorConfig) -> Result<Self, AnnotateError> {
        config.validate()?;
        let mut stopwords = StopwordFilter::english();
        stopwords.add_stopwords(&config.extra_stopwords);
        Ok(Self { config, stopwords })
    }

    pub fn config(&self) -> &AnnotatorConfig {
        &self.config
    }

    fn annotate_word(
        &self,
        word: &str,
        start: usize,
        sentence_initial: bool,
        previous: Option<&str>,
    ) -> Token {
        let lower = word.to_lowercase();
        let is_punct = word
            .chars()
            .all(|ch| ch.is_punctuation() || ch.is_symbol());
        let is_stop = !is_punct && self.stopwords.is_stopword(&lower);
        let pos = if is_punct || is_stop {
            PosTag::Other
        } else {
            tag_word(word, &lower, sentence_initial, previous)
        };
        let lemma = lemmatize(&lower, pos);

        Token {
            text: word.to_string(),
            lemma,
            pos,
            is_stop,
            is_punct,
            start,
            end: start + word.chars().count(),
        }
    }
}

impl Annotator for RuleAnnotator {
    fn annotate(&self, input: &str) -> Result<Document, AnnotateError> {
        // NFKC can change lengths, so it runs before any offset is taken.
        let text: Cow<str> = if self.config.normalize_unicode {
            Cow::Owned(input.nfkc().collect::<String>())
        } else {
            Cow::Borrowed(input)
        };

        let mut cursor = CharCursor::new(&text);
        let mut tokens: Vec<Token> = Vec::with_capacity((text.len() / 5).saturating_add(1));
        let mut byte_spans: Vec<(usize, usize)> = Vec::with_capacity(tokens.capacity());
        let mut sentences: Vec<Sentence> = Vec::new();

        for (sentence_byte, raw) in text.split_sentence_bound_indices() {
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                continue;
            }
            let leading = raw.len() - raw.trim_start().len();
            let start = cursor.char_at(sentence_byte + leading);
            let end = start + trimmed.chars().count();
            let token_start = tokens.len();

            let mut seen_word = false;
            let mut previous: Option<String> = None;
            for (offset, word) in raw.split_word_bound_indices() {
                if word.chars().all(char::is_whitespace) {
                    continue;
                }
                let byte = sentence_byte + offset;
                let token_start_char = cursor.char_at(byte);
                let token =
                    self.annotate_word(word, token_start_char, !seen_word, previous.as_deref());
                if !token.is_punct {
                    seen_word = true;
                }
                previous = Some(token.text.to_lowercase());
                byte_spans.push((byte, byte + word.len()));
                tokens.push(token);
            }

            sentences.push(Sentence {
                index: sentences.len(),
                text: trimmed.to_string(),
                start,
                end,
                token_start,
                token_end: tokens.len(),
            });
        }

        let entities = if self.config.detect_entities {
            find_entities(&text, &tokens, &byte_spans, &sentences)
        } else {
            Vec::new()
        };

        Document::new(text.into_owned(), sentences, tokens, entities)
    }

    fn name(&self) -> &str {
        "rule"
    }
}

/// Converts increasing byte offsets to character offsets without rescanning.
struct CharCursor<'a> {
    text: &'a str,
    byte: usize,
    chars: usize,
}

impl<'a> CharCursor<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            text,
            byte: 0,
            chars: 0,
        }
    }

    fn char_at(&mut self, byte: usize) -> usize {
        if byte < self.byte {
            self.byte = 0;
            self.chars = 0;
        }
        self.chars += self.text[self.byte..byte].chars().count();
        self.byte = byte;
        self.chars
    }
}

fn tag_word(word: &str, lower: &str, sentence_initial: bool, previous: Option<&str>) -> PosTag {
    if !word.chars().any(char::is_alphabetic) {
        return PosTag::Other;
    }
    if has_proper_shape(word, sentence_initial) {
        return PosTag::Propn;
    }
    let len = lower.chars().count();
    if COMMON_ADJECTIVES.contains(&lower)
        || (len > 5 && ADJECTIVE_SUFFIXES.iter().any(|s| lower.ends_with(s)))
    {
        return PosTag::Adj;
    }
    let after_determiner = previous.is_some_and(|p| DETERMINERS.contains(&p));
    if !after_determiner
        && (IRREGULAR_VERBS.iter().any(|(form, _)| *form == lower)
            || BASE_VERBS.contains(&lower)
            || (len > 5 && lower.ends_with("ing"))
            || (len > 4 && lower.ends_with("ed")))
    {
        return PosTag::Verb;
    }
    PosTag::Noun
}

/// Capitalised mid-sentence, all caps (`NASA`) or camel case (`iPhone`).
fn has_proper_shape(word: &str, sentence_initial: bool) -> bool {
    let letters: Vec<char> = word.chars().filter(|c| c.is_alphabetic()).collect();
    if letters.len() > 1 && letters.iter().all(|c| c.is_uppercase()) {
        return true;
    }
    let inner_upper = letters.iter().skip(1).any(|c| c.is_uppercase());
    let any_lower = letters.iter().any(|c| c.is_lowercase());
    if inner_upper && any_lower {
        return true;
    }
    !sentence_initial && letters.first().is_some_and(|c| c.is_uppercase())
}

fn lemmatize(lower: &str, pos: PosTag) -> String {
    match pos {
        PosTag::Noun => noun_lemma(lower),
        PosTag::Verb => verb_lemma(lower),
        PosTag::Propn | PosTag::Adj | PosTag::Other => lower.to_string(),
    }
}

fn noun_lemma(lower: &str) -> String {
    let len = lower.chars().count();
    if len <= 3 || INVARIANT_NOUNS.contains(&lower) {
        return lower.to_string();
    }
    if let Some(stem) = lower.strip_suffix("ies") {
        // "ties" and "pies" only lose the plural s
        if stem.chars().count() < 2 {
            return lower[..lower.len() - 1].to_string();
        }
        return format!("{stem}y");
    }
    for suffix in ["sses", "ches", "shes", "xes"] {
        if lower.ends_with(suffix) {
            return lower[..lower.len() - 2].to_string();
        }
    }
    if lower.ends_with('s') && !["ss", "us", "is"].iter().any(|s| lower.ends_with(s)) {
        return lower[..lower.len() - 1].to_string();
    }
    lower.to_string()
}

fn verb_lemma(lower: &str) -> String {
    if let Some((_, base)) = IRREGULAR_VERBS.iter().find(|(form, _)| *form == lower) {
        return (*base).to_string();
    }
    if let Some(stem) = lower.strip_suffix("ing").filter(|s| s.chars().count() >= 3) {
        return restore_stem(stem);
    }
    if let Some(stem) = lower.strip_suffix("ied") {
        if stem.chars().count() < 2 {
            return lower[..lower.len() - 1].to_string();
        }
        return format!("{stem}y");
    }
    if let Some(stem) = lower.strip_suffix("ed").filter(|s| s.chars().count() >= 3) {
        return restore_stem(stem);
    }
    if let Some(stem) = lower.strip_suffix("ies") {
        // "dies", "ties"
        if stem.chars().count() < 2 {
            return lower[..lower.len() - 1].to_string();
        }
        return format!("{stem}y");
    }
    if lower.ends_with('s') && !lower.ends_with("ss") {
        return lower[..lower.len() - 1].to_string();
    }
    lower.to_string()
}

fn restore_stem(stem: &str) -> String {
    let chars: Vec<char> = stem.chars().collect();
    let n = chars.len();
    if n >= 2 && chars[n - 1] == chars[n - 2] && !matches!(chars[n - 1], 'l' | 's' | 'z' | 'f' | 'e')
    {
        return chars[..n - 1].iter().collect();
    }
    if SILENT_E_STEMS.iter().any(|s| stem.ends_with(s)) {
        return format!("{stem}e");
    }
    stem.to_string()
}

fn starts_upper(token: &Token) -> bool {
    !token.is_punct && token.text.chars().next().is_some_and(char::is_uppercase)
}

fn is_numeric(token: &Token) -> bool {
    token.text.chars().any(|c| c.is_ascii_digit())
        && token
            .text
            .chars()
            .all(|c| c.is_ascii_digit() || c == ',' || c == '.')
}

fn find_entities(
    text: &str,
    tokens: &[Token],
    byte_spans: &[(usize, usize)],
    sentences: &[Sentence],
) -> Vec<EntitySpan> {
    let mut entities = Vec::new();
    let mut push = |first: usize, last: usize, label: &str| {
        let (byte_start, _) = byte_spans[first];
        let (_, byte_end) = byte_spans[last];
        entities.push(EntitySpan {
            text: text[byte_start..byte_end].to_string(),
            label: label.to_string(),
            start: tokens[first].start,
            end: tokens[last].end,
            description: explain_label(label).map(str::to_string),
        });
    };

    for sentence in sentences {
        let range = sentence.token_range();
        let first_word = range.clone().find(|&i| !tokens[i].is_punct);
        let mut i = range.start;

        while i < range.end {
            let token = &tokens[i];

            if CURRENCY_SYMBOLS.contains(&token.text.as_str())
                && i + 1 < range.end
                && is_numeric(&tokens[i + 1])
            {
                let mut last = i + 1;
                if last + 1 < range.end && MAGNITUDES.contains(&tokens[last + 1].lemma.as_str()) {
                    last += 1;
                }
                push(i, last, "MONEY");
                i = last + 1;
                continue;
            }

            if is_numeric(token)
                && i + 1 < range.end
                && (tokens[i + 1].text == "%" || tokens[i + 1].lemma == "percent")
            {
                push(i, i + 1, "PERCENT");
                i += 2;
                continue;
            }

            if !starts_upper(token) {
                i += 1;
                continue;
            }

            let mut last = i;
            while last + 1 < range.end && starts_upper(&tokens[last + 1]) {
                last += 1;
            }
            let run_end = last;
            let mut first = i;
            while first <= last && tokens[first].is_stop {
                first += 1;
            }
            if first > last {
                i = run_end + 1;
                continue;
            }

            let lower: Vec<String> = tokens[first..=last]
                .iter()
                .map(|t| t.text.to_lowercase())
                .collect();
            let is_date = lower
                .iter()
                .any(|w| MONTHS.contains(&w.as_str()) || WEEKDAYS.contains(&w.as_str()));

            // Lone sentence-initial capitals and single letters are rarely names.
            let lone_initial = Some(first) == first_word && tokens[first].pos != PosTag::Propn;
            if first == last && !is_date && (lone_initial || tokens[first].char_len() < 2) {
                i = run_end + 1;
                continue;
            }

            let joined = lower.join(" ");
            let label = if is_date {
                while last + 1 < range.end {
                    let next = &tokens[last + 1];
                    if is_numeric(next) {
                        last += 1;
                    } else if next.text == "," && last + 2 < range.end && is_numeric(&tokens[last + 2]) {
                        last += 2;
                    } else {
                        break;
                    }
                }
                "DATE"
            } else if lower
                .last()
                .is_some_and(|w| ORG_HEADS.contains(&w.as_str()))
            {
                if lower.last().is_some_and(|w| ORG_ABBREVIATIONS.contains(&w.as_str()))
                    && last + 1 < range.end
                    && tokens[last + 1].text == "."
                {
                    last += 1;
                }
                "ORG"
            } else if PLACES.contains(&joined.as_str()) {
                "GPE"
            } else if first == last && NATIONALITIES.contains(&joined.as_str()) {
                "NORP"
            } else if first == last && tokens[first].text.chars().all(|c| !c.is_lowercase()) {
                "ORG"
            } else if (2..=3).contains(&(last - first + 1)) {
                "PERSON"
            } else {
                "MISC"
            };

            push(first, last, label);
            i = last.max(run_end) + 1;
        }
    }

    entities
}
