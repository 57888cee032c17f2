//! Aggregate text statistics.
//!
//! A [`TextStatistics`] snapshot is accumulated in a single pass over word
//! tokens and is never mutated afterward. Every readability formula is a pure
//! function of one snapshot.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::syllables::{HeuristicSyllables, SyllableCounter};
use crate::text::{self, SentenceInfo, Tokenizer};

/// Characters above which a word counts as long.
pub const LONG_WORD_CHARS: usize = 6;

/// Syllables above which a word counts as polysyllabic.
pub const POLYSYLLABIC_SYLLABLES: usize = 2;

/// A word with the facts computed for it once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    text: String,
    char_len: usize,
    syllables: usize,
}

impl Token {
    /// Build a token, estimating syllables with `counter`.
    pub fn new(text: &str, counter: &impl SyllableCounter) -> Self {
        Self::with_syllables(text, counter.count_syllables(text))
    }

    /// Build a token with a known syllable count.
    pub fn with_syllables(text: &str, syllables: usize) -> Self {
        Self {
            text: text.to_owned(),
            char_len: text.chars().count(),
            syllables,
        }
    }

    /// The word as it appeared in the text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Length in Unicode scalar values.
    pub const fn char_len(&self) -> usize {
        self.char_len
    }

    /// Estimated syllable count.
    pub const fn syllables(&self) -> usize {
        self.syllables
    }

    /// Exactly one syllable.
    pub const fn is_monosyllabic(&self) -> bool {
        self.syllables == 1
    }

    /// More than two syllables; also called a hard word.
    pub const fn is_polysyllabic(&self) -> bool {
        self.syllables > POLYSYLLABIC_SYLLABLES
    }

    /// More than six characters.
    pub const fn is_long(&self) -> bool {
        self.char_len > LONG_WORD_CHARS
    }
}

/// Immutable counts describing one document.
///
/// Fields are public so callers with their own tokenization can build a
/// snapshot directly:
///
/// ```
/// use readstat_core::TextStatistics;
///
/// let stats = TextStatistics {
///     num_words: 100,
///     num_sentences: 5,
///     ..Default::default()
/// };
/// assert_eq!(stats.num_hard_words(), 0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextStatistics {
    /// Number of valid word tokens.
    pub num_words: usize,
    /// Number of sentences containing at least one word.
    pub num_sentences: usize,
    /// Total estimated syllables.
    pub num_syllables: usize,
    /// Total characters across words.
    pub num_characters: usize,
    /// Words with more than two syllables.
    pub num_poly_syllables: usize,
    /// Words with exactly one syllable.
    pub num_mono_syllables: usize,
    /// Words longer than six characters.
    pub num_long_words: usize,
    /// Distinct lower-cased word types.
    pub num_unique_types: usize,
    /// Word count of the longest sentence.
    pub longest_sentence_len: usize,
    /// Character length of the longest word.
    pub longest_word_char_len: usize,
    /// Syllable count of the word with the most syllables.
    pub longest_word_syllable_len: usize,
}

impl TextStatistics {
    /// Hard words are polysyllabic words.
    pub const fn num_hard_words(&self) -> usize {
        self.num_poly_syllables
    }

    /// Tokenize `text` and aggregate it with the default syllable counter.
    #[tracing::instrument(skip_all, fields(text_len = text.len()))]
    pub fn from_text(text: &str, tokenizer: &Tokenizer) -> Self {
        Self::from_text_with(text, tokenizer, &HeuristicSyllables)
    }

    /// Tokenize `text` and aggregate it with a caller-supplied syllable counter.
    pub fn from_text_with(
        text: &str,
        tokenizer: &Tokenizer,
        counter: &impl SyllableCounter,
    ) -> Self {
        let tokenized = tokenizer.tokenize(text);
        Self::from_words(tokenized.words, tokenized.sentences, counter)
    }

    /// Aggregate raw words. Words failing validation are skipped.
    pub fn from_words<'a, I>(
        words: I,
        sentences: SentenceInfo,
        counter: &impl SyllableCounter,
    ) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut acc = Accumulator::default();
        for word in words.into_iter().filter(|w| text::is_word(w)) {
            acc.push(&Token::new(word, counter));
        }
        acc.finish(sentences)
    }

    /// Aggregate pre-built tokens. Tokens failing validation are skipped.
    pub fn from_tokens<'a, I>(tokens: I, sentences: SentenceInfo) -> Self
    where
        I: IntoIterator<Item = &'a Token>,
    {
        let mut acc = Accumulator::default();
        for token in tokens.into_iter().filter(|t| text::is_word(t.text())) {
            acc.push(token);
        }
        acc.finish(sentences)
    }
}

#[derive(Debug, Default)]
struct Accumulator {
    stats: TextStatistics,
    types: HashSet<String>,
}

impl Accumulator {
    fn push(&mut self, token: &Token) {
        let stats = &mut self.stats;
        stats.num_words += 1;
        stats.num_characters += token.char_len();
        stats.num_syllables += token.syllables();
        if token.is_polysyllabic() {
            stats.num_poly_syllables += 1;
        }
        if token.is_monosyllabic() {
            stats.num_mono_syllables += 1;
        }
        if token.is_long() {
            stats.num_long_words += 1;
        }
        stats.longest_word_char_len = stats.longest_word_char_len.max(token.char_len());
        stats.longest_word_syllable_len = stats.longest_word_syllable_len.max(token.syllables());
        self.types.insert(token.text().to_lowercase());
    }

    fn finish(self, sentences: SentenceInfo) -> TextStatistics {
        let stats = TextStatistics {
            num_unique_types: self.types.len(),
            num_sentences: sentences.count,
            longest_sentence_len: sentences.longest,
            ..self.stats
        };
        tracing::debug!(
            words = stats.num_words,
            sentences = stats.num_sentences,
            syllables = stats.num_syllables,
            "aggregated text statistics"
        );
        stats
    }
}
