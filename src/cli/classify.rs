use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Args;

use crate::classify::dispatch::{ClassifyConfig, ParallelDispatcher};
use crate::classify::summary::ClassificationSummary;
use crate::cli::OutputFormat;
use crate::output::write_assigned;
use crate::parsing::hits::read_hits_file;
use crate::parsing::taxonomy::read_taxonomy_file;

#[derive(Args)]
pub struct ClassifyArgs {
    /// Parsed hit table (CSV, optionally gzipped)
    #[arg(required = true)]
    pub input: PathBuf,

    /// Taxonomy table with `accession` and `taxid` columns
    #[arg(short, long, required = true)]
    pub taxonomy: PathBuf,

    /// Output directory, used when --output is not given
    #[arg(long, default_value = "out")]
    pub outdir: PathBuf,

    /// Output file (defaults to a name derived from the input inside --outdir)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Worker threads (0 = all available CPUs)
    #[arg(long, default_value = "0")]
    pub threads: usize,
}

/// Derive the output file name from the input name.
///
/// `parsed_blast` in the input stem becomes `contig_taxonomy`; otherwise
/// `_contig_taxonomy` is appended. The result always ends in `.csv`.
pub fn output_filename(input: &Path, outdir: &Path) -> PathBuf {
    let mut stem = input
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();

    for ext in [".gz", ".bgz", ".csv", ".tsv", ".txt"] {
        if let Some(stripped) = stem.strip_suffix(ext) {
            stem = stripped.to_string();
        }
    }

    let name = if stem.contains("parsed_blast") {
        stem.replace("parsed_blast", "contig_taxonomy")
    } else {
        format!("{stem}_contig_taxonomy")
    };

    outdir.join(format!("{name}.csv"))
}

/// Execute classify subcommand
///
/// # Errors
///
/// Returns an error naming the failed stage if reading, classification,
/// taxonomy loading or writing fails.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: ClassifyArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let hits = read_hits_file(&args.input)
        .with_context(|| format!("Failed to read hit table {}", args.input.display()))?;

    if verbose {
        eprintln!("Read {} hits from {}", hits.len(), args.input.display());
    }

    let taxonomy = read_taxonomy_file(&args.taxonomy).with_context(|| {
        format!(
            "Failed to load taxonomy table {}",
            args.taxonomy.display()
        )
    })?;

    if verbose {
        eprintln!("Loaded {} taxonomy records", taxonomy.len());
    }

    let config = ClassifyConfig {
        threads: args.threads,
    };
    let dispatcher = ParallelDispatcher::new(&config).context("Failed to start workers")?;

    if verbose {
        eprintln!("Running with {} threads", dispatcher.threads());
    }

    let assignment = dispatcher
        .assign(hits, &taxonomy)
        .context("Failed to classify contigs")?;

    let out_path = args
        .output
        .clone()
        .unwrap_or_else(|| output_filename(&args.input, &args.outdir));

    if let Some(parent) = out_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create output directory {}", parent.display()))?;
    }

    let file = File::create(&out_path)
        .with_context(|| format!("Failed to create output file {}", out_path.display()))?;
    write_assigned(&assignment.rows, taxonomy.columns(), BufWriter::new(file), b',')
        .with_context(|| format!("Failed to write output {}", out_path.display()))?;

    match format {
        OutputFormat::Text => print_text_summary(&assignment.summary, &out_path),
        OutputFormat::Json => print_json_summary(&assignment.summary, &out_path)?,
        OutputFormat::Tsv => print_delimited_summary(&assignment.summary, '\t'),
        OutputFormat::Csv => print_delimited_summary(&assignment.summary, ','),
    }

    Ok(())
}

fn print_text_summary(summary: &ClassificationSummary, out_path: &Path) {
    println!("Contig Origin Summary");
    println!("{}", "=".repeat(60));
    println!("  Contigs:            {}", summary.contigs);
    println!("  Single origin:      {}", summary.single);
    println!(
        "  Chimeric:           {} ({:.1}%)",
        summary.chimera,
        summary.chimera_fraction() * 100.0
    );
    println!("  Classified rows:    {}", summary.classified_rows);
    println!("  Without taxonomy:   {}", summary.unmatched_rows);
    println!("  Duplicates removed: {}", summary.duplicate_rows);
    println!("  Rows written:       {}", summary.output_rows);
    println!("\nDone. Wrote output to {}", out_path.display());
}

fn print_json_summary(summary: &ClassificationSummary, out_path: &Path) -> anyhow::Result<()> {
    let output = serde_json::json!({
        "output": out_path.display().to_string(),
        "summary": summary,
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_delimited_summary(summary: &ClassificationSummary, delimiter: char) {
    let header = [
        "contigs",
        "single",
        "chimera",
        "classified_rows",
        "unmatched_rows",
        "duplicate_rows",
        "output_rows",
    ];
    let values = [
        summary.contigs,
        summary.single,
        summary.chimera,
        summary.classified_rows,
        summary.unmatched_rows,
        summary.duplicate_rows,
        summary.output_rows,
    ];

    println!("{}", header.join(&delimiter.to_string()));
    println!(
        "{}",
        values
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(&delimiter.to_string())
    );
}
