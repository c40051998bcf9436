//! Command-line interface for contig-origin.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **classify**: Classify contigs, assign taxonomy and write the output table
//! - **assign**: Classify contigs only and print the classified hits
//!
//! ## Usage
//!
//! ```text
//! # Full pipeline, output written to out/sample_contig_taxonomy.csv
//! contig-origin classify sample_parsed_blast.csv --taxonomy taxonomy.csv
//!
//! # Explicit output path and thread count
//! contig-origin classify hits.csv.gz -t taxonomy.csv -o results/origins.csv --threads 8
//!
//! # Origins only, as JSON
//! contig-origin assign hits.csv --format json
//! ```

use clap::{Parser, Subcommand};

pub mod assign;
pub mod classify;

#[derive(Parser)]
#[command(name = "contig-origin")]
#[command(author = "Fulcrum Genomics")]
#[command(version)]
#[command(about = "Assign single or chimeric reference origin to assembled contigs")]
#[command(
    long_about = "contig-origin decides, from alignment hits of assembled contigs against reference genomes, whether each contig originates from a single reference or is a chimeric assembly of several.\n\nFor every contig it selects:\n- The best full-length or over-length hit when one exists\n- The best hit overall when all hits overlap\n- One best hit per disjoint region otherwise, merging neighbouring regions on the same reference"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Classify contigs and assign taxonomy to the selected hits
    Classify(classify::ClassifyArgs),

    /// Classify contigs without taxonomy and print the selected hits
    Assign(assign::AssignArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
    Csv,
}
