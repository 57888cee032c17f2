//! Analyze command: statistics, readability and lexical diversity together.

use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use readstat_core::analysis;
use readstat_core::config::Config;

use super::{read_input_file, tokenizer_for};

/// Arguments for the `analyze` subcommand.
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// File to analyze.
    pub file: Utf8PathBuf,

    /// Suppress sentence breaks after known abbreviations (e.g. "fig.").
    #[arg(long)]
    pub abbreviations: bool,
}

/// Run every measure on a file.
#[instrument(name = "cmd_analyze", skip_all, fields(file = %args.file))]
pub fn cmd_analyze(
    args: AnalyzeArgs,
    global_json: bool,
    config: &Config,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, abbreviations = args.abbreviations, "executing analyze command");

    let content = read_input_file(&args.file, max_input_bytes)?;
    let tokenizer = tokenizer_for(config, args.abbreviations);
    let report = analysis::analyze(&content, &tokenizer);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let stats = &report.statistics;
    println!("{}", args.file.bold());

    println!("\n  {}", "Statistics".cyan());
    for (label, value) in [
        ("Words", stats.num_words),
        ("Sentences", stats.num_sentences),
        ("Syllables", stats.num_syllables),
        ("Characters", stats.num_characters),
        ("Unique types", stats.num_unique_types),
        ("Monosyllabic", stats.num_mono_syllables),
        ("Polysyllabic", stats.num_poly_syllables),
        ("Long words", stats.num_long_words),
        ("Longest sentence", stats.longest_sentence_len),
        ("Longest word", stats.longest_word_char_len),
        ("Most syllables", stats.longest_word_syllable_len),
    ] {
        println!("    {:<18} {:>8}", format!("{label}:").dimmed(), value);
    }

    println!("\n  {}", "Readability".cyan());
    for (measure, value) in report.readability.iter() {
        println!("    {:<18} {:>8.2}", format!("{measure}:").dimmed(), value);
    }

    let lexical = &report.lexical;
    println!("\n  {}", "Lexical diversity".cyan());
    for (label, value) in [
        ("TTR", lexical.ttr),
        ("Corrected TTR", lexical.corrected_ttr),
        ("Root TTR", lexical.root_ttr),
        ("Bilog TTR", lexical.bilog_ttr),
        ("Uber index", lexical.uber_index),
        ("MTLD", lexical.mtld),
    ] {
        println!("    {:<18} {:>8.2}", format!("{label}:").dimmed(), value);
    }

    Ok(())
}
