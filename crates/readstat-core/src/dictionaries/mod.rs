//! Fixed word data used by the tokenizer and the syllable counter.

pub mod abbreviations;
pub mod syllable_rules;
