//! Diversity command: type-token ratios and MTLD.

use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use readstat_core::config::Config;
use readstat_core::lexical;

use super::read_input_file;

/// Arguments for the `diversity` subcommand.
#[derive(Args, Debug)]
pub struct DiversityArgs {
    /// File to analyze.
    pub file: Utf8PathBuf,
}

/// Measure lexical diversity of a file.
#[instrument(name = "cmd_diversity", skip_all, fields(file = %args.file))]
pub fn cmd_diversity(
    args: DiversityArgs,
    global_json: bool,
    config: &Config,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, "executing diversity command");

    let content = read_input_file(&args.file, max_input_bytes)?;
    let report = lexical::check_lexical_diversity(&content, &config.tokenizer());

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}", args.file.bold());
    println!(
        "  {} {} tokens, {} types",
        "Counts:".cyan(),
        report.tokens,
        report.types
    );
    for (label, value) in [
        ("TTR", report.ttr),
        ("Corrected TTR", report.corrected_ttr),
        ("Root TTR", report.root_ttr),
        ("Bilog TTR", report.bilog_ttr),
        ("Uber index", report.uber_index),
        ("MTLD", report.mtld),
    ] {
        println!("  {:<18} {:>8.2}", format!("{label}:").dimmed(), value);
    }

    Ok(())
}
