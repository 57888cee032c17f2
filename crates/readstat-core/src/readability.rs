//! Readability formulas over a [`TextStatistics`] snapshot.
//!
//! Each [`Measure`] is a pure function of the snapshot. [`score`] evaluates a
//! measure with plain division, so an empty snapshot yields `NaN` or an
//! infinity. [`score_set`] is the feature path: every ratio goes through
//! [`safe_div`] and each score is truncated to two decimals, so the set is
//! always finite.
//!
//! | Measure       | Formula                                                   |
//! |---------------|-----------------------------------------------------------|
//! | Fog           | `0.4 * (words/sentences + 100 * poly/words)`              |
//! | Flesch        | `206.835 - 1.015 * words/sentences - 84.6 * syl/words`    |
//! | Kincaid       | `11.8 * syl/words + 0.39 * words/sentences - 15.59`       |
//! | Coleman-Liau  | `-29.5873 * sentences/words + 5.8799 * chars/words - 15.8007` |
//! | ARI           | `4.71 * chars/words + 0.5 * words/sentences - 21.43`      |
//! | SMOG          | `1.0430 * sqrt(30 * poly/sentences) + 3.1291`             |
//! | LIX           | `words/sentences + 100 * long/words`                      |
//! | FORCAST       | `20 - (150 * mono/words) / 10`                            |

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::numeric::{count, safe_div, truncate_two_decimals};
use crate::stats::TextStatistics;
use crate::text::Tokenizer;

/// A named readability measure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum Measure {
    /// Gunning fog index.
    Fog,
    /// Flesch reading ease.
    Flesch,
    /// Flesch-Kincaid grade level.
    Kincaid,
    /// Coleman-Liau index.
    ColemanLiau,
    /// Automated readability index.
    #[serde(rename = "ARI")]
    Ari,
    /// Simple measure of gobbledygook.
    #[serde(rename = "SMOG")]
    Smog,
    /// Läsbarhetsindex.
    #[serde(rename = "LIX")]
    Lix,
    /// FORCAST grade level.
    #[serde(rename = "FORCAST")]
    Forcast,
    /// Mean characters per word.
    #[serde(rename = "charsPerWord")]
    CharsPerWord,
    /// Mean syllables per word.
    #[serde(rename = "syllablesPerWord")]
    SyllablesPerWord,
}

/// Function used for every ratio inside a formula.
type Divide = fn(f64, f64) -> f64;

fn plain_div(numerator: f64, denominator: f64) -> f64 {
    numerator / denominator
}

impl Measure {
    /// The eight readability formulas.
    pub const FORMULAS: [Self; 8] = [
        Self::Fog,
        Self::Flesch,
        Self::Kincaid,
        Self::ColemanLiau,
        Self::Ari,
        Self::Smog,
        Self::Lix,
        Self::Forcast,
    ];

    /// Every measure in the feature score set.
    pub const ALL: [Self; 10] = [
        Self::Fog,
        Self::Flesch,
        Self::Kincaid,
        Self::ColemanLiau,
        Self::Ari,
        Self::Smog,
        Self::Lix,
        Self::Forcast,
        Self::CharsPerWord,
        Self::SyllablesPerWord,
    ];

    /// Name used in reports.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fog => "Fog",
            Self::Flesch => "Flesch",
            Self::Kincaid => "Kincaid",
            Self::ColemanLiau => "ColemanLiau",
            Self::Ari => "ARI",
            Self::Smog => "SMOG",
            Self::Lix => "LIX",
            Self::Forcast => "FORCAST",
            Self::CharsPerWord => "charsPerWord",
            Self::SyllablesPerWord => "syllablesPerWord",
        }
    }

    #[allow(clippy::suboptimal_flops)]
    fn evaluate_with(self, stats: &TextStatistics, div: Divide) -> f64 {
        let words = count(stats.num_words);
        let sentences = count(stats.num_sentences);
        let syllables = count(stats.num_syllables);
        let characters = count(stats.num_characters);
        let poly = count(stats.num_poly_syllables);
        let hard = count(stats.num_hard_words());
        let mono = count(stats.num_mono_syllables);
        let long = count(stats.num_long_words);

        let words_per_sentence = div(words, sentences);
        let syllables_per_word = div(syllables, words);

        match self {
            Self::Fog => (words_per_sentence + div(hard, words) * 100.0) * 0.4,
            Self::Flesch => 206.835 - 1.015 * words_per_sentence - 84.6 * syllables_per_word,
            Self::Kincaid => 11.8 * syllables_per_word + 0.39 * words_per_sentence - 15.59,
            Self::ColemanLiau => {
                div(-29.5873 * sentences, words) + div(5.8799 * characters, words) - 15.8007
            }
            Self::Ari => div(4.71 * characters, words) + 0.5 * words_per_sentence - 21.43,
            Self::Smog => 1.0430 * div(30.0 * poly, sentences).sqrt() + 3.1291,
            Self::Lix => words_per_sentence + div(long * 100.0, words),
            Self::Forcast => 20.0 - 150.0 * div(mono, words) / 10.0,
            Self::CharsPerWord => div(characters, words),
            Self::SyllablesPerWord => syllables_per_word,
        }
    }
}

impl std::fmt::Display for Measure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Evaluate one measure with plain division.
///
/// No zero guard is applied: an empty snapshot produces non-finite values.
pub fn score(measure: Measure, stats: &TextStatistics) -> f64 {
    measure.evaluate_with(stats, plain_div)
}

/// Truncated scores keyed by measure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReadabilityScores(BTreeMap<Measure, f64>);

impl ReadabilityScores {
    /// Score for `measure`, if present.
    pub fn get(&self, measure: Measure) -> Option<f64> {
        self.0.get(&measure).copied()
    }

    /// Iterate scores in measure order.
    pub fn iter(&self) -> impl Iterator<Item = (Measure, f64)> + '_ {
        self.0.iter().map(|(measure, value)| (*measure, *value))
    }

    /// Number of scores.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Compute every measure with guarded ratios, truncated to two decimals.
pub fn score_set(stats: &TextStatistics) -> ReadabilityScores {
    ReadabilityScores(
        Measure::ALL
            .into_iter()
            .map(|measure| {
                let value = measure.evaluate_with(stats, safe_div);
                (measure, truncate_two_decimals(value))
            })
            .collect(),
    )
}

/// Result of readability analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadabilityReport {
    /// Counts the scores were computed from.
    pub statistics: TextStatistics,
    /// Truncated feature scores.
    pub scores: ReadabilityScores,
    /// Flesch-Kincaid grade level from the score set.
    pub grade: f64,
    /// Maximum acceptable grade (if provided).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_grade: Option<f64>,
    /// Whether the grade exceeds the maximum.
    pub over_max: bool,
}

/// Score the readability of text.
///
/// # Arguments
///
/// * `text` - The text to analyze.
/// * `tokenizer` - Word and sentence segmentation settings.
/// * `max_grade` - Optional maximum acceptable Flesch-Kincaid grade.
#[tracing::instrument(skip(text, tokenizer), fields(text_len = text.len()))]
pub fn check_readability(
    text: &str,
    tokenizer: &Tokenizer,
    max_grade: Option<f64>,
) -> ReadabilityReport {
    let statistics = TextStatistics::from_text(text, tokenizer);
    let scores = score_set(&statistics);
    let grade = scores.get(Measure::Kincaid).unwrap_or_default();
    let over_max = max_grade.is_some_and(|max| grade > max);

    ReadabilityReport {
        statistics,
        scores,
        grade,
        max_grade,
        over_max,
    }
}
