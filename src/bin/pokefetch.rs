//! Pokefetch CLI
//!
//! Looks up Pokemon from the PokeAPI and prints one card per id with
//! resolved ability and move names.

use std::process;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};

use pokefetch::api::{PokeApiClient, POKEAPI_BASE};
use pokefetch::ids::{parse_batch, random_batch, DEFAULT_RANDOM_COUNT};
use pokefetch::pipeline::Pipeline;
use pokefetch::render::TerminalSink;

#[derive(Parser)]
#[command(name = "pokefetch")]
#[command(about = "Look up Pokemon from the PokeAPI with resolved ability and move names")]
struct Args {
    /// Base URL of the PokeAPI endpoint
    #[arg(long, env = "POKEFETCH_BASE_URL", default_value = POKEAPI_BASE)]
    base_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Look up a comma-separated list of ids or names
    Search {
        /// Ids and/or names, e.g. "25,pikachu,7"
        ids: String,
    },
    /// Look up a batch of random ids
    Random {
        /// How many random ids to fetch
        #[arg(long, short = 'c', default_value_t = DEFAULT_RANDOM_COUNT)]
        count: usize,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let ids = match args.command {
        Command::Search { ids } => parse_batch(&ids)?,
        Command::Random { count } => random_batch(count),
    };

    let client = PokeApiClient::with_base_url(&args.base_url)?;
    let pipeline = Pipeline::new(Arc::new(client));

    let report = pipeline.render_batch(&ids, Arc::new(TerminalSink)).await;

    if report.failed > 0 {
        eprintln!("{} of {} lookups failed", report.failed, ids.len());
        process::exit(1);
    }

    Ok(())
}
