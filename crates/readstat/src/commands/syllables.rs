//! Syllables command.

use clap::Args;
use serde::Serialize;
use tracing::{debug, instrument};

use readstat_core::syllables;

/// Arguments for the `syllables` subcommand.
#[derive(Args, Debug)]
pub struct SyllablesArgs {
    /// Words to count.
    #[arg(required = true)]
    pub words: Vec<String>,
}

#[derive(Debug, Serialize)]
struct WordSyllables {
    word: String,
    syllables: usize,
}

/// Print the estimated syllable count for each word.
#[instrument(name = "cmd_syllables", skip_all, fields(words = args.words.len()))]
pub fn cmd_syllables(args: SyllablesArgs, global_json: bool) -> anyhow::Result<()> {
    debug!(words = ?args.words, "executing syllables command");

    let counts: Vec<WordSyllables> = args
        .words
        .into_iter()
        .map(|word| WordSyllables {
            syllables: syllables::count_syllables(&word),
            word,
        })
        .collect();

    if global_json {
        println!("{}", serde_json::to_string_pretty(&counts)?);
    } else {
        for entry in &counts {
            println!("{}\t{}", entry.word, entry.syllables);
        }
    }

    Ok(())
}
