//! Heuristic syllable counting for English words.
//!
//! The estimate is calibrated, not phonetic. Each hyphen- or space-separated
//! part of a word runs through a fixed pipeline of pure steps, each taking the
//! remaining text plus the syllable adjustment accumulated so far:
//!
//! 1. contractions (`'s`, `n't`, `'ll`, ...)
//! 2. inflections (`-es`, `-ed`)
//! 3. stacked derivational suffixes (`-ment`, `-ness`, `-less`, ...)
//! 4. subtract-one patterns
//! 5. add-one patterns
//! 6. mute final `e`
//!
//! The remaining text then contributes one syllable per vowel group, with a
//! floor of one group. Reordering the steps changes the counts.

use crate::dictionaries::syllable_rules::RULES;

/// Estimates syllables for a single word.
///
/// Implementations must be pure: the same word always yields the same count.
pub trait SyllableCounter {
    /// Count the syllables in `word`.
    fn count_syllables(&self, word: &str) -> usize;
}

/// The default rule-based estimator, backed by [`count_syllables`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeuristicSyllables;

impl SyllableCounter for HeuristicSyllables {
    fn count_syllables(&self, word: &str) -> usize {
        count_syllables(word)
    }
}

/// Count syllables in a word, summing over its compound parts.
///
/// The empty word has zero syllables; every other part counts at least one
/// vowel group.
pub fn count_syllables(word: &str) -> usize {
    let word = word.to_lowercase();
    let word = word.trim();
    let syllables: usize = RULES
        .part_separator
        .split(word)
        .filter(|part| !part.is_empty())
        .map(count_part)
        .sum();
    tracing::trace!(word, syllables, "counted syllables");
    syllables
}

/// Intermediate state threaded through the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Part {
    text: String,
    delta: i64,
}

type Step = fn(Part) -> Part;

/// Pipeline steps in application order.
const PIPELINE: &[Step] = &[
    contractions,
    inflections,
    stacked_suffixes,
    subtract_one,
    add_one,
    mute_e,
];

fn count_part(part: &str) -> usize {
    let Part { text, delta } = PIPELINE.iter().fold(
        Part {
            text: part.to_owned(),
            delta: 0,
        },
        |state, step| step(state),
    );
    let groups = match vowel_groups(&text) {
        0 => 1,
        n => i64::try_from(n).unwrap_or(i64::MAX),
    };
    usize::try_from(delta.saturating_add(groups)).unwrap_or(0)
}

fn contractions(Part { text, mut delta }: Part) -> Part {
    if RULES.sibilant_possessive.is_match(&text) {
        delta += 1;
    }
    let text = text.strip_suffix("'s").unwrap_or(&text);

    if RULES.voiced_negation.is_match(text) {
        delta += 1;
    }
    let text = text.strip_suffix("n't").unwrap_or(text);

    let text = RULES.silent_contraction.replace(text, "").replace('\'', "");
    Part { text, delta }
}

fn inflections(Part { mut text, mut delta }: Part) -> Part {
    if RULES.voiced_es.is_match(&text) {
        delta += 1;
    }
    if !text.ends_with("ees") && text.ends_with("es") {
        text.truncate(text.len() - 2);
    }

    if RULES.voiced_ed.is_match(&text) {
        delta += 1;
    }
    if text.ends_with("ed") && !RULES.ed_exception.is_match(&text) {
        text.truncate(text.len() - 2);
    }
    Part { text, delta }
}

fn stacked_suffixes(Part { mut text, mut delta }: Part) -> Part {
    while RULES.stacked_suffix_guard.is_match(&text) {
        delta += 1;
        text = RULES.stacked_suffix.replace(&text, "").into_owned();
    }
    Part { text, delta }
}

fn subtract_one(Part { text, delta }: Part) -> Part {
    let hits = RULES.subtract_one.iter().filter(|re| re.is_match(&text)).count();
    Part {
        delta: delta - i64::try_from(hits).unwrap_or(0),
        text,
    }
}

fn add_one(Part { text, delta }: Part) -> Part {
    let hits = RULES.add_one.iter().filter(|re| re.is_match(&text)).count();
    Part {
        delta: delta + i64::try_from(hits).unwrap_or(0),
        text,
    }
}

fn mute_e(Part { mut text, delta }: Part) -> Part {
    if text.ends_with('e') {
        text.pop();
    }
    Part { text, delta }
}

const fn is_vowel(ch: char) -> bool {
    matches!(ch, 'a' | 'e' | 'i' | 'o' | 'u' | 'y')
}

/// Number of maximal runs of `a e i o u y`.
fn vowel_groups(text: &str) -> usize {
    let mut groups = 0;
    let mut in_group = false;
    for ch in text.chars() {
        let vowel = is_vowel(ch);
        if vowel && !in_group {
            groups += 1;
        }
        in_group = vowel;
    }
    groups
}
