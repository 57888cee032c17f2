//! Command implementations.

use anyhow::Context;
use camino::Utf8Path;
use readstat_core::{Config, Tokenizer};

pub mod analyze;
pub mod diversity;
pub mod info;
pub mod readability;
pub mod syllables;

/// Read a file, rejecting it before reading when it exceeds `max_bytes`.
pub fn read_input_file(path: &Utf8Path, max_bytes: Option<usize>) -> anyhow::Result<String> {
    let metadata =
        std::fs::metadata(path.as_std_path()).with_context(|| format!("failed to read {path}"))?;
    if let Some(max) = max_bytes {
        let size = metadata.len();
        if size > u64::try_from(max).unwrap_or(u64::MAX) {
            anyhow::bail!("input too large: {path} is {size} bytes (limit: {max} bytes)");
        }
    }

    std::fs::read_to_string(path.as_std_path()).with_context(|| format!("failed to read {path}"))
}

/// Tokenizer for a command, honoring a per-invocation `--abbreviations` flag.
pub fn tokenizer_for(config: &Config, force_abbreviations: bool) -> Tokenizer {
    if force_abbreviations && !config.use_abbreviations {
        Config {
            use_abbreviations: true,
            ..config.clone()
        }
        .tokenizer()
    } else {
        config.tokenizer()
    }
}
