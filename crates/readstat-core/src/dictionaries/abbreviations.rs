//! Built-in abbreviation list for advisory sentence boundary suppression.
//!
//! Entries are stored without their trailing period and compared
//! case-insensitively.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Default abbreviations (titles, months, company suffixes, Latin shorthands).
pub const DEFAULT_ABBREVIATIONS: &[&str] = &[
    "Adm", "Apr", "Aug", "Brig", "ca", "Capt", "cf", "Cmdr", "Co", "Col", "Comdr", "Corp", "Dec",
    "Det", "Dr", "Esq", "etc", "Feb", "fig", "Gen", "Gov", "ie", "Inc", "Insp", "Jan", "Jr", "jul",
    "Jun", "Lt", "ltd", "M", "Maj", "Mar", "Messrs", "Mlle", "Mme", "Mmes", "Mr", "Mrs", "Ms",
    "no", "Nov", "Oct", "PLC", "Prof", "Pty", "Rep", "Rev", "Sen", "Sep", "Sept", "Sgt", "Snr",
    "Sr", "St", "vs",
];

/// Lower-cased view of [`DEFAULT_ABBREVIATIONS`].
pub static ABBREVIATIONS: LazyLock<HashSet<String>> =
    LazyLock::new(|| normalize(DEFAULT_ABBREVIATIONS.iter().copied()));

/// Build a lookup set from caller-supplied abbreviations.
pub fn normalize<'a, I>(words: I) -> HashSet<String>
where
    I: IntoIterator<Item = &'a str>,
{
    words
        .into_iter()
        .map(|w| w.trim().trim_end_matches('.').to_lowercase())
        .filter(|w| !w.is_empty())
        .collect()
}
