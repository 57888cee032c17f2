//! Word and sentence tokenization.
//!
//! Words are letter-initiated runs of letters with interior hyphens and
//! apostrophes. Sentences are cut at regex-detected boundaries: terminal
//! punctuation after a letter, the end of an in-sentence quotation, the start
//! of embedded direct speech, and terminal punctuation after a closing
//! parenthesis.

use std::collections::HashSet;
use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::dictionaries::abbreviations;

/// Quote marks that may open direct speech.
const OPENING_QUOTES: &str = "\"'»«‹›‚„‘“";

/// Quote marks that may close a quotation.
const CLOSING_QUOTES: &str = "\"'»«‹›’”";

/// Regex for a word token.
static WORD_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[\p{L}][-'\p{L}]*\b").expect("valid regex"));

/// Regex for validating a standalone token.
static VALID_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\p{L}][-'\p{L}]*$").expect("valid regex"));

/// Regex for sentence boundaries.
///
/// The `speech` group marks where the sentence is cut when direct speech
/// opens; every other alternative cuts at the end of the match.
static SENTENCE_END: LazyLock<Regex> = LazyLock::new(|| {
    let pattern = format!(
        concat!(
            r"(?:\p{{L}}(?:[.!?:;…]|\.\.\.)[{close}]?\s)",
            r"|(?:\p{{L}}[,;][{close}]\s)",
            r"|(?:(?P<speech>\p{{L}},\s)[{open}](?:(?:…|\.\.\.)\s?)?\p{{L}})",
            r"|(?:[\p{{L}}\p{{N}}]\)[.!?:;]\s)",
        ),
        close = CLOSING_QUOTES,
        open = OPENING_QUOTES,
    );
    Regex::new(&pattern).expect("valid regex")
});

/// Sentence-level facts needed by the statistics aggregator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentenceInfo {
    /// Number of sentences containing at least one word.
    pub count: usize,
    /// Word count of the longest sentence.
    pub longest: usize,
}

/// Words and sentence facts for one document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tokenized<'t> {
    /// Word tokens in document order, case preserved.
    pub words: Vec<&'t str>,
    /// Sentence count and longest sentence length.
    pub sentences: SentenceInfo,
}

/// Regex tokenizer with an optional advisory abbreviation list.
///
/// A period after a listed abbreviation only suppresses a boundary when the
/// following text starts in lowercase. A capitalized continuation still
/// starts a new sentence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tokenizer {
    abbreviations: HashSet<String>,
}

impl Tokenizer {
    /// Create a tokenizer without an abbreviation list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a tokenizer using the built-in abbreviation list.
    pub fn with_default_abbreviations() -> Self {
        Self {
            abbreviations: abbreviations::ABBREVIATIONS.clone(),
        }
    }

    /// Create a tokenizer using a caller-supplied abbreviation list.
    ///
    /// Entries may carry a trailing period; matching ignores case.
    pub fn with_abbreviations<'a, I>(words: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        Self {
            abbreviations: abbreviations::normalize(words),
        }
    }

    /// Whether any abbreviations are loaded.
    pub fn has_abbreviations(&self) -> bool {
        !self.abbreviations.is_empty()
    }

    /// Extract word tokens, discarding punctuation and digits.
    pub fn words<'t>(&self, text: &'t str) -> Vec<&'t str> {
        extract_words(text)
    }

    /// Split text into sentences that contain at least one word.
    #[tracing::instrument(skip_all, fields(text_len = text.len()))]
    pub fn split_sentences<'t>(&self, text: &'t str) -> Vec<&'t str> {
        self.sentence_spans(text)
            .into_iter()
            .map(|span| text[span].trim())
            .filter(|sentence| WORD_PATTERN.is_match(sentence))
            .collect()
    }

    /// Tokenize text into words and sentence facts in one call.
    #[tracing::instrument(skip_all, fields(text_len = text.len()))]
    pub fn tokenize<'t>(&self, text: &'t str) -> Tokenized<'t> {
        let sentences = self
            .split_sentences(text)
            .iter()
            .map(|sentence| WORD_PATTERN.find_iter(sentence).count())
            .fold(SentenceInfo::default(), |info, len| SentenceInfo {
                count: info.count + 1,
                longest: info.longest.max(len),
            });
        let words = extract_words(text);
        tracing::debug!(
            words = words.len(),
            sentences = sentences.count,
            "tokenized text"
        );
        Tokenized { words, sentences }
    }

    /// Byte ranges of raw sentence segments, including empty ones.
    fn sentence_spans(&self, text: &str) -> Vec<Range<usize>> {
        if text.trim().is_empty() {
            return Vec::new();
        }

        // Trailing space lets a final terminator match.
        let padded = format!("{text} ");
        let mut spans = Vec::new();
        let mut start = 0;
        let mut resume = 0;

        // The speech alternative consumes the letter after the opening quote,
        // so scanning resumes at the cut rather than at the end of the match.
        while let Some(caps) = SENTENCE_END.captures_at(&padded, resume) {
            let Some(whole) = caps.get(0) else {
                break;
            };
            if self.is_suppressed(&padded, whole.start(), whole.end()) {
                resume = whole.end();
                continue;
            }
            let boundary = caps
                .name("speech")
                .map_or_else(|| whole.end(), |speech| speech.end());
            resume = boundary;
            let cut = boundary.min(text.len());
            if cut > start {
                spans.push(start..cut);
                start = cut;
            }
        }

        if start < text.len() {
            spans.push(start..text.len());
        }
        spans
    }

    /// Whether an abbreviation vetoes the boundary matched at `start..end`.
    fn is_suppressed(&self, padded: &str, start: usize, end: usize) -> bool {
        if self.abbreviations.is_empty() {
            return false;
        }

        let matched = &padded[start..end];
        let Some((dot_offset, '.')) = matched.char_indices().nth(1) else {
            return false;
        };
        if matched[dot_offset..].starts_with("...") {
            return false;
        }

        let word_end = start + dot_offset;
        let word_start = padded[..word_end]
            .char_indices()
            .rev()
            .take_while(|(_, c)| c.is_alphabetic())
            .last()
            .map_or(word_end, |(idx, _)| idx);
        let word = &padded[word_start..word_end];

        let next_lowercase = padded[end..]
            .chars()
            .find(|c| !c.is_whitespace())
            .is_some_and(char::is_lowercase);

        next_lowercase && self.abbreviations.contains(&word.to_lowercase())
    }
}

/// Extract word tokens from text.
pub fn extract_words(text: &str) -> Vec<&str> {
    WORD_PATTERN.find_iter(text).map(|m| m.as_str()).collect()
}

/// Whether a standalone token is a well-formed word.
pub fn is_word(token: &str) -> bool {
    VALID_WORD.is_match(token)
}
