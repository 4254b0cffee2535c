//! whereis-cli — resolve building names from your terminal
//!
//! Usage examples
//! --------------
//!
//! - Look up a building by code, name, or a misspelling of either
//!   $ whereis whereis ERIE
//!   $ whereis whereis erie haull
//!
//! - List every building
//!   $ whereis list
//!
//! - Use a custom dataset and stricter matching
//!   $ whereis --input buildings.json.gz --threshold 0.8 whereis lambton
//!
//! - Act as the chat bot, one message per stdin line
//!   $ whereis chat
mod args;

use crate::args::{CliArgs, Commands};
use anyhow::Context;
use clap::Parser;
use std::io;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use whereis_cli::Dispatcher;
use whereis_core::{Directory, MatchConfig, Resolver, SimilarityMetric};

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    init_tracing(args.verbose);

    // Load the directory once; everything below only borrows it.
    let loaded;
    let directory: &Directory = match &args.input {
        Some(path) => {
            loaded = Directory::load_from_path(path)
                .with_context(|| format!("failed to load building dataset {path}"))?;
            &loaded
        }
        None => Directory::bundled().context("bundled building dataset is invalid")?,
    };

    let metric = SimilarityMetric::from(args.metric);
    let mut config = MatchConfig::for_metric(metric);
    if let Some(threshold) = args.threshold {
        config = config.with_min_score(threshold)?;
    }
    let resolver = Resolver::with_config(directory, config);
    let dispatcher = Dispatcher::new(resolver, args.image_url.clone());

    match args.command {
        Commands::Whereis { query } => {
            let reply = dispatcher.whereis(&query.join(" "));
            print!("{reply}");
        }

        Commands::List => print!("{}", dispatcher.list()),

        Commands::Stats => {
            let stats = directory.stats();
            println!("Directory statistics:");
            println!("  Buildings: {}", stats.buildings);
            println!("  Aliases: {}", stats.aliases);
            println!("  Metric: {:?} (min score {})", config.metric(), config.min_score());
        }

        Commands::Chat => dispatcher.run_chat(io::stdin().lock(), io::stdout().lock())?,
    }

    Ok(())
}

/// Logs go to stderr so replies on stdout stay clean.
fn init_tracing(verbose: bool) {
    let default = if verbose { "whereis_core=debug,whereis_cli=debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}
