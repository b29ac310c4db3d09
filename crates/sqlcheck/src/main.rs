//! sqlcheck CLI
//!
//! Checks SQL queries for syntax errors and obvious INSERT mistakes.

use std::io;
use std::path::PathBuf;

use clap::Parser;
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

use sqlcheck::{OutputFormat, Session, read_queries};

/// Validate SQL queries without running them.
#[derive(Parser)]
#[command(name = "sqlcheck")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Queries to check. Without queries or --file, read them interactively.
    queries: Vec<String>,

    /// File with one query per line.
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, env = "SQLCHECK_FORMAT", default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Print the token stream of each query.
    #[arg(long)]
    tokens: bool,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let mut session = Session::new(io::stdout().lock(), cli.format, cli.tokens);

    if cli.file.is_none() && cli.queries.is_empty() {
        session.run_interactive(io::stdin().lock())?;
        return Ok(());
    }

    if let Some(path) = &cli.file {
        let queries = read_queries(path)?;
        info!("Checking {} queries from {}", queries.len(), path.display());
        for query in &queries {
            session.check(query)?;
        }
    }
    for query in &cli.queries {
        session.check(query)?;
    }

    if session.failures() > 0 {
        info!(
            "{} of {} queries failed validation.",
            session.failures(),
            session.checked()
        );
        std::process::exit(1);
    }

    Ok(())
}
