//! Readability command: every formula plus the grade-level gate.

use anyhow::bail;
use camino::{Utf8Path, Utf8PathBuf};
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use readstat_core::config::Config;
use readstat_core::readability::{self, ReadabilityReport};

use super::{read_input_file, tokenizer_for};

/// Arguments for the `readability` subcommand.
#[derive(Args, Debug)]
pub struct ReadabilityArgs {
    /// File to analyze.
    pub file: Utf8PathBuf,

    /// Suppress sentence breaks after known abbreviations (e.g. "fig.").
    #[arg(long)]
    pub abbreviations: bool,

    /// Maximum acceptable Flesch-Kincaid grade level.
    #[arg(long)]
    pub max_grade: Option<f64>,
}

/// Score readability of a file.
#[instrument(name = "cmd_readability", skip_all, fields(file = %args.file))]
pub fn cmd_readability(
    args: ReadabilityArgs,
    global_json: bool,
    config: &Config,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, max_grade = ?args.max_grade, "executing readability command");

    let content = read_input_file(&args.file, max_input_bytes)?;
    let tokenizer = tokenizer_for(config, args.abbreviations);
    let max_grade = args.max_grade.or(config.max_grade);

    let report = readability::check_readability(&content, &tokenizer, max_grade);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_report(&args.file, &report);

    if report.over_max {
        let max = report.max_grade.unwrap_or_default();
        bail!(
            "{} scores grade {:.1} (max: {:.1}). Shorten sentences or prefer shorter words.",
            args.file,
            report.grade,
            max,
        );
    } else if let Some(max) = report.max_grade {
        println!(
            "{} {} scores grade {:.1} (max: {:.1})",
            "PASS:".green(),
            args.file,
            report.grade,
            max,
        );
    }

    Ok(())
}

fn print_report(file: &Utf8Path, report: &ReadabilityReport) {
    let stats = &report.statistics;
    println!("{}", file.bold());
    println!(
        "  {} {} sentences, {} words, {} syllables",
        "Counts:".cyan(),
        stats.num_sentences,
        stats.num_words,
        stats.num_syllables,
    );
    for (measure, value) in report.scores.iter() {
        println!("  {:<18} {:>8.2}", format!("{measure}:").dimmed(), value);
    }
}
