use std::{fs::File, path::PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use predict::{
    dictionary,
    predictor::{Predictor, PREDICTION_LIMIT},
};
use tracing::info;

mod query;
mod repl;

use query::QueryArgs;
use repl::ReplArgs;

/// Predicts dictionary words from the letters typed so far.
#[derive(Parser, Debug)]
#[command(version)]
struct Cli {
    /// Word list with one word per line.
    #[arg(short, long, global = true, default_value = "word.txt")]
    dictionary: PathBuf,
    /// Maximum number of predictions shown per prefix.
    #[arg(short = 'n', long, global = true, default_value_t = PREDICTION_LIMIT)]
    limit: usize,
    /// Where log output is written.
    #[arg(long, global = true, default_value = "predict.log")]
    log_file: PathBuf,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the predictions for each prefix and exit.
    Query(QueryArgs),
    /// Predict interactively, one input line at a time (the default).
    Repl(ReplArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    if cli.limit == 0 {
        anyhow::bail!("--limit must be at least 1");
    }

    let file = File::create(&cli.log_file)
        .with_context(|| format!("could not create log file {}", cli.log_file.display()))?;
    tracing_subscriber::fmt()
        .with_ansi(false)
        .with_writer(file)
        .init();

    info!("Dictionary: {}", cli.dictionary.display());
    let trie = dictionary::load_path(&cli.dictionary)
        .await
        .context("a dictionary is required to make predictions")?;

    let predictor = Predictor::new(&trie).with_limit(cli.limit);
    info!("Predicting up to {} words per prefix", predictor.limit());

    match cli.command.unwrap_or(Command::Repl(ReplArgs::default())) {
        Command::Query(args) => query::execute_query(args, predictor).await,
        Command::Repl(args) => repl::execute_repl(args, predictor).await,
    }
}
