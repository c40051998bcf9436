use clap::Parser;
use tracing_subscriber::EnvFilter;

mod classify;
mod cli;
mod core;
mod output;
mod parsing;
mod taxonomy;
mod utils;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("contig_origin=debug,info")
    } else {
        EnvFilter::new("contig_origin=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    match cli.command {
        cli::Commands::Classify(args) => {
            cli::classify::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Assign(args) => {
            cli::assign::run(args, cli.format, cli.verbose)?;
        }
    }

    Ok(())
}
