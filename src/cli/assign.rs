use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::Args;

use crate::classify::dispatch::{ClassifyConfig, ParallelDispatcher};
use crate::classify::summary::ClassificationSummary;
use crate::cli::OutputFormat;
use crate::core::hit::ClassifiedHit;
use crate::output::{format_evalue, write_classified};
use crate::parsing::hits::read_hits_file;

#[derive(Args)]
pub struct AssignArgs {
    /// Parsed hit table (CSV, optionally gzipped)
    #[arg(required = true)]
    pub input: PathBuf,

    /// Worker threads (0 = all available CPUs)
    #[arg(long, default_value = "0")]
    pub threads: usize,
}

/// Execute assign subcommand
///
/// # Errors
///
/// Returns an error if the hit table cannot be read, classification fails,
/// or output cannot be written.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: AssignArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let hits = read_hits_file(&args.input)
        .with_context(|| format!("Failed to read hit table {}", args.input.display()))?;

    if verbose {
        eprintln!("Read {} hits from {}", hits.len(), args.input.display());
    }

    let dispatcher = ParallelDispatcher::new(&ClassifyConfig {
        threads: args.threads,
    })
    .context("Failed to start workers")?;

    let rows = dispatcher
        .classify_all(hits)
        .context("Failed to classify contigs")?;

    if verbose {
        let summary = ClassificationSummary::from_classified(&rows);
        eprintln!(
            "Classified {} contigs: {} single, {} chimera",
            summary.contigs, summary.single, summary.chimera
        );
    }

    match format {
        OutputFormat::Text => print_text_results(&rows),
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }
        OutputFormat::Tsv => write_classified(&rows, io::stdout().lock(), b'\t')
            .context("Failed to write output")?,
        OutputFormat::Csv => write_classified(&rows, io::stdout().lock(), b',')
            .context("Failed to write output")?,
    }

    Ok(())
}

fn print_text_results(rows: &[ClassifiedHit]) {
    let mut previous: Option<&str> = None;

    for row in rows {
        if previous != Some(row.query_id()) {
            if previous.is_some() {
                println!();
            }
            println!("{} ({} bp): {}", row.query_id(), row.hit.query_length, row.origin);
            previous = Some(row.query_id());
        }
        println!(
            "  {:>8}-{:<8} {}  e={}  aln={}",
            row.hit.start,
            row.hit.end,
            row.hit.hit_id,
            format_evalue(row.hit.e_val),
            row.hit.alignment_length
        );
    }
}
