//! Fixed rule tables for the heuristic syllable counter.
//!
//! Every pattern here is matched against a lower-cased word part. The tables
//! are compiled once and never change; [`crate::syllables`] walks them in
//! declaration order, which is significant for the final count.

use regex::Regex;
use std::sync::LazyLock;

/// Patterns whose presence removes one syllable (silent letters, loanword spellings).
pub const SUBTRACT_ONE: &[&str] = &[
    "every",            // second e is mute anywhere in the word
    "cial",
    "tia",
    "cius",
    "[tcxgl]ious",
    "[cg]eous",         // gorgeous, curvaceous
    "eau",              // beauty, bureau
    "oui",              // bouillon
    "eye",              // y is counted as a vowel
    "ieu",              // lieutenant, adieu
    "giu",              // belgium
    "ion",
    "iou",
    "sia$",
    "[gq]ue?$",         // morgue, antique
    "qu[aeiouy]{2}",    // queen, aqueous
    "^f[io]re[^aeiou]", // compounds of fire, fore
    "^house.",
    "^home.",
    "^horse.",
    "^some.",
    "^life.",
    "^ice.",
    "^bare.",
    "^side.",
];

/// Patterns whose presence adds one syllable (hiatus, consonantal y, prefixes).
pub const ADD_ONE: &[&str] = &[
    "[^aeiouyq][aeiouy]ity$",
    "[^aeiouy]iety$",
    "ia",
    "riet",
    "[rf]ier$",                    // terrier, pacifier
    "ieth$",                       // fortieth
    "dien",
    "[^aeiouq]ue[nl]",             // influence, cruel
    "iu",
    "io",
    "ii",
    "^ide[ao]",
    "poe[tm]",                     // poem, poet
    "(^poly|pre)[aeiou]",          // polyester, preamble
    "^re([iou]|a[^ds])",           // reuse, but not read or reason
    "quiet",
    "tuit",                        // intuition
    "[^aeiouy][aeouy]at(e|ion)$",  // create, mediation
    "^co[ei]",                     // coerce, coincide
    ".[^aeiouy]re$",               // acre, cadre
    "[^aeiouy][aiouy]ing$",
    "[aeiou]{3}",                  // agreeable
    "[aeiou]y[aeiou]",             // y as a consonant
    "^mc",
    "[^q][aeiou]esc",              // acquiesce
    "[^aeiouy][aeiouy]able",       // arguable
    "[^aeiouy][aeiouy]is[mt]$",    // altruism
    "[^aeiouyl]le$",               // bottle, fickle
    "[^l]lien",                    // alien, salient
    "scien",
    "^coa[dgx].",
    "[^gq]ua[^auieo]",
];

/// Word endings that keep their `-ed` even though it is silent elsewhere.
pub const ED_EXCEPTIONS: &[&str] = &[
    "bed", "biped", "sled", "bred", "[^aeiou]shed", "cursed", "beloved", "blessed", "crooked",
    "deuced", "learned", "peaked", "wicked", "wretched", "eed",
];

/// Stackable derivational suffixes, each worth one syllable.
///
/// The leading dots keep short words such as `fly`, `bless` and `age` intact.
pub const STACKED_SUFFIX_GUARD: &str =
    "(.ments?|.ness|.ful|.doms?|.ways|.wise|..less|.hoods?|.ships?|.some|...ly|..age)$";

/// The bare suffix removed on each pass of the stacked-suffix loop.
pub const STACKED_SUFFIX: &str = "(ments?|ness|ful|doms?|ways|wise|less|hoods?|ships?|some|ly|age)$";

/// Compiled rule tables.
#[derive(Debug)]
pub struct SyllableRules {
    /// Separator between compound parts.
    pub part_separator: Regex,
    /// Possessive `'s` after a sibilant, which is voiced.
    pub sibilant_possessive: Regex,
    /// `n't` after a consonant, which forms its own syllable.
    pub voiced_negation: Regex,
    /// Contractions that never add a syllable.
    pub silent_contraction: Regex,
    /// `-es` after sibilants and consonant-l.
    pub voiced_es: Regex,
    /// `-ed` after `d`, `t` and consonant-l.
    pub voiced_ed: Regex,
    /// Words that keep their `-ed`.
    pub ed_exception: Regex,
    /// Guard for the stacked-suffix loop.
    pub stacked_suffix_guard: Regex,
    /// Suffix removed on each pass of the loop.
    pub stacked_suffix: Regex,
    /// Compiled [`SUBTRACT_ONE`], in order.
    pub subtract_one: Vec<Regex>,
    /// Compiled [`ADD_ONE`], in order.
    pub add_one: Vec<Regex>,
}

/// The shared, compile-once rule set.
pub static RULES: LazyLock<SyllableRules> = LazyLock::new(|| SyllableRules {
    part_separator: compile(r"[-\s]+"),
    sibilant_possessive: compile(r"((sh|ch|[xsz])e?|ge|ce)'s$"),
    voiced_negation: compile(r"[^aeiouy]e?n't$"),
    silent_contraction: compile(r"'(d|ve|ll|m|re)$"),
    voiced_es: compile(r"(sh|ch|[szgxc]|[^aeiouy]l)es$"),
    voiced_ed: compile(r"([dt]|[^aeiouyl]l)ed$"),
    ed_exception: compile(&format!("({})$", ED_EXCEPTIONS.join("|"))),
    stacked_suffix_guard: compile(STACKED_SUFFIX_GUARD),
    stacked_suffix: compile(STACKED_SUFFIX),
    subtract_one: SUBTRACT_ONE.iter().map(|p| compile(p)).collect(),
    add_one: ADD_ONE.iter().map(|p| compile(p)).collect(),
});

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("valid regex")
}
