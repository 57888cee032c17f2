//! Lexical diversity: MTLD and the type-token ratio family.
//!
//! MTLD (measure of textual lexical diversity) counts how many times the
//! running type-token ratio drops below [`MTLD_THRESHOLD`] while scanning the
//! tokens, once forward and once backward. Longer stretches before each drop
//! mean a more varied vocabulary.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::numeric::{count, safe_div, truncate_two_decimals};
use crate::text::Tokenizer;

/// Type-token ratio below which an MTLD factor closes.
pub const MTLD_THRESHOLD: f64 = 0.72;

/// Compute MTLD over a token sequence.
///
/// Tokens are lower-cased here. Empty and single-token inputs yield `0.0`,
/// as does any pass whose quotient is not finite.
pub fn mtld<S: AsRef<str>>(tokens: &[S]) -> f64 {
    let forward = mtld_pass(tokens.iter().map(AsRef::as_ref));
    let backward = mtld_pass(tokens.iter().rev().map(AsRef::as_ref));
    tracing::trace!(forward, backward, "mtld passes");
    (forward + backward) / 2.0
}

fn mtld_pass<'a>(tokens: impl Iterator<Item = &'a str>) -> f64 {
    let mut types = HashSet::new();
    let mut start = 0;
    let mut len = 0;
    let mut factors = 0.0;
    let mut ttr = 1.0;
    let mut open = false;

    for (i, token) in tokens.enumerate() {
        len = i + 1;
        types.insert(token.to_lowercase());
        ttr = count(types.len()) / count(len - start);
        open = true;
        if ttr < MTLD_THRESHOLD {
            factors += 1.0;
            types.clear();
            start = len;
            open = false;
        }
    }

    if open {
        factors += (1.0 - ttr) / (1.0 - MTLD_THRESHOLD);
    }

    let quotient = count(len) / factors;
    if quotient.is_finite() { quotient } else { 0.0 }
}

/// Lexical diversity measures for one document.
///
/// Every ratio is guarded and truncated to two decimals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LexicalDiversityReport {
    /// Number of tokens.
    pub tokens: usize,
    /// Number of distinct lower-cased types.
    pub types: usize,
    /// Type-token ratio: `types / tokens`.
    pub ttr: f64,
    /// Corrected TTR: `types / sqrt(2 * tokens)`.
    pub corrected_ttr: f64,
    /// Root TTR: `types / sqrt(tokens)`.
    pub root_ttr: f64,
    /// Bilogarithmic TTR: `ln(types) / ln(tokens)`.
    pub bilog_ttr: f64,
    /// Uber index: `ln(tokens)^2 / ln(tokens / types)`.
    pub uber_index: f64,
    /// Measure of textual lexical diversity.
    pub mtld: f64,
}

/// Compute every lexical diversity measure over a token sequence.
pub fn lexical_diversity<S: AsRef<str>>(tokens: &[S]) -> LexicalDiversityReport {
    if tokens.is_empty() {
        return LexicalDiversityReport::default();
    }

    let types: HashSet<String> = tokens.iter().map(|t| t.as_ref().to_lowercase()).collect();
    let n = count(tokens.len());
    let t = count(types.len());

    LexicalDiversityReport {
        tokens: tokens.len(),
        types: types.len(),
        ttr: truncate_two_decimals(safe_div(t, n)),
        corrected_ttr: truncate_two_decimals(safe_div(t, (2.0 * n).sqrt())),
        root_ttr: truncate_two_decimals(safe_div(t, n.sqrt())),
        bilog_ttr: truncate_two_decimals(safe_div(t.ln(), n.ln())),
        uber_index: truncate_two_decimals(safe_div(n.ln().powi(2), (n / t).ln())),
        mtld: truncate_two_decimals(mtld(tokens)),
    }
}

/// Tokenize text and compute its lexical diversity.
#[tracing::instrument(skip(text, tokenizer), fields(text_len = text.len()))]
pub fn check_lexical_diversity(text: &str, tokenizer: &Tokenizer) -> LexicalDiversityReport {
    lexical_diversity(&tokenizer.words(text))
}
