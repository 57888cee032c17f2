//! Core library for readstat.
//!
//! Readability formulas, heuristic syllable estimation and lexical diversity
//! for English text. Every engine is a pure function of its input: degenerate
//! text yields safe numeric defaults rather than errors.
//!
//! # Modules
//!
//! - [`text`] - Word and sentence tokenization
//! - [`syllables`] - Rule-based syllable counting
//! - [`stats`] - Aggregate text statistics
//! - [`readability`] - Readability formulas
//! - [`lexical`] - MTLD and the type-token ratio family
//! - [`analysis`] - All of the above in one pass
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! use readstat_core::{Measure, Tokenizer, analyze};
//!
//! let report = analyze(
//!     "I could almost always tell when movies use fake dinosaurs.",
//!     &Tokenizer::new(),
//! );
//! assert_eq!(report.statistics.num_words, 10);
//! assert_eq!(report.statistics.num_sentences, 1);
//! assert!(report.readability.get(Measure::Flesch).is_some());
//! ```
#![deny(unsafe_code)]

pub mod analysis;
pub mod config;
pub mod dictionaries;
pub mod error;
pub mod lexical;
pub mod numeric;
pub mod readability;
pub mod stats;
pub mod syllables;
pub mod text;

/// Default maximum input size in bytes (5 MiB).
pub const DEFAULT_MAX_INPUT_BYTES: usize = 5 * 1024 * 1024;

pub use analysis::{AnalysisReport, analyze, analyze_with};
pub use config::{Config, ConfigLoader, ConfigSources, LogLevel};
pub use error::{ConfigError, ConfigResult};
pub use lexical::{LexicalDiversityReport, lexical_diversity, mtld};
pub use numeric::{safe_div, truncate_two_decimals};
pub use readability::{Measure, ReadabilityReport, ReadabilityScores, score, score_set};
pub use stats::{TextStatistics, Token};
pub use syllables::{HeuristicSyllables, SyllableCounter, count_syllables};
pub use text::{SentenceInfo, Tokenized, Tokenizer};
