//! Combined analysis: statistics, readability and lexical diversity in one pass.

use serde::{Deserialize, Serialize};

use crate::lexical::{self, LexicalDiversityReport};
use crate::readability::{self, ReadabilityScores};
use crate::stats::TextStatistics;
use crate::syllables::{HeuristicSyllables, SyllableCounter};
use crate::text::Tokenizer;

/// Every feature computed for one document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Aggregate counts.
    pub statistics: TextStatistics,
    /// Truncated readability scores.
    pub readability: ReadabilityScores,
    /// Lexical diversity measures.
    pub lexical: LexicalDiversityReport,
}

/// Analyze text with the default syllable counter.
#[tracing::instrument(skip(text, tokenizer), fields(text_len = text.len()))]
pub fn analyze(text: &str, tokenizer: &Tokenizer) -> AnalysisReport {
    analyze_with(text, tokenizer, &HeuristicSyllables)
}

/// Analyze text with a caller-supplied syllable counter.
///
/// The text is tokenized once and the same word sequence feeds both the
/// statistics snapshot and the lexical diversity measures.
pub fn analyze_with(
    text: &str,
    tokenizer: &Tokenizer,
    counter: &impl SyllableCounter,
) -> AnalysisReport {
    let tokenized = tokenizer.tokenize(text);
    let lexical = lexical::lexical_diversity(&tokenized.words);
    let statistics =
        TextStatistics::from_words(tokenized.words.iter().copied(), tokenized.sentences, counter);
    let readability = readability::score_set(&statistics);

    AnalysisReport {
        statistics,
        readability,
        lexical,
    }
}
