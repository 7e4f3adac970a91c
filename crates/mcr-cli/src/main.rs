use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod eval;
mod merge;

#[derive(Debug, Parser)]
#[command(name = "mcr")]
#[command(about = "Media contact reconciliation command line interface")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Merge a file of contact variants into one canonical record
    Merge {
        /// Path to a JSON array of variants
        #[arg(long)]
        input: PathBuf,

        /// Pretty-print the merged record
        #[arg(long)]
        pretty: bool,
    },
    /// Score a dataset of (variants, merged record) pairs with all evaluators
    Eval {
        /// Path to a JSON array of eval cases
        #[arg(long)]
        input: PathBuf,

        /// How many cases to score in parallel
        #[arg(long, default_value_t = 4)]
        concurrency: usize,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Merge { input, pretty } => merge::run_merge(&input, pretty).await,
        Commands::Eval { input, concurrency } => eval::run_eval(&input, concurrency).await,
    }
}
