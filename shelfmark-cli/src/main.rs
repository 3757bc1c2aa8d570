//! Shelfmark CLI - Interactive session over an in-memory book catalog

mod commands;
mod seed;
mod session;

use anyhow::Result;
use clap::Parser;
use shelfmark_core::config::parse_capacity;
use shelfmark_core::{Catalog, CatalogConfig};
use std::io::{self, IsTerminal};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::session::Session;

/// Parse and validate the capacity argument (must be at least 1)
fn parse_capacity_arg(s: &str) -> Result<usize, String> {
    parse_capacity(s).map_err(|e| e.to_string())
}

#[derive(Parser)]
#[command(name = "shelfmark")]
#[command(author, version, about = "Manage an in-memory book catalog", long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Maximum number of books (overrides SHELFMARK_CAPACITY)
    #[arg(long, value_parser = parse_capacity_arg)]
    capacity: Option<usize>,

    /// Start with an empty catalog instead of the sample books
    #[arg(long)]
    empty: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose {
        "shelfmark_cli=debug,shelfmark_core=debug"
    } else {
        "shelfmark_cli=info"
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = match cli.capacity {
        Some(capacity) => CatalogConfig::with_capacity(capacity),
        None => CatalogConfig::from_env()?,
    };

    let mut catalog = Catalog::from_config(&config);
    if !cli.empty {
        seed::populate(&mut catalog);
    }
    tracing::info!(
        capacity = catalog.capacity(),
        count = catalog.count(),
        "catalog ready"
    );

    let stdin = io::stdin();
    let mut session = Session::new(catalog, stdin.is_terminal());
    let mut stdout = io::stdout().lock();
    session.run(stdin.lock(), &mut stdout)?;

    tracing::info!(count = session.catalog().count(), "session closed");
    Ok(())
}
