use std::io::{IsTerminal, Write};

use clap::Args;
use predict::predictor::{Predictions, Predictor};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

#[derive(Args, Debug)]
pub struct QueryArgs {
    /// Print one JSON object per prefix.
    #[arg(long)]
    json: bool,
    /// Prefixes to predict. Read one per line from stdin when omitted.
    #[arg(name = "PREFIX")]
    prefixes: Vec<String>,
}

pub async fn execute_query(args: QueryArgs, predictor: Predictor<'_>) -> anyhow::Result<()> {
    let piped = (!std::io::stdin().is_terminal()).then(|| BufReader::new(tokio::io::stdin()));
    answer(args, predictor, piped, &mut std::io::stdout()).await
}

// `input` is only read when no prefixes were given on the command line.
async fn answer<R, W>(
    args: QueryArgs,
    predictor: Predictor<'_>,
    input: Option<R>,
    out: &mut W,
) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut prefixes = args.prefixes;
    if let Some(input) = input.filter(|_| prefixes.is_empty()) {
        let mut lines = input.lines();
        while let Some(line) = lines.next_line().await? {
            prefixes.push(line);
        }
    }

    for prefix in prefixes {
        let predictions = predictor.query(&prefix.to_lowercase());
        if args.json {
            writeln!(out, "{}", serde_json::to_string(&predictions)?)?;
        } else {
            writeln!(out, "{}", summary(&predictions))?;
        }
    }
    out.flush()?;

    Ok(())
}

fn summary(predictions: &Predictions) -> String {
    if predictions.is_empty() {
        return format!("{} (0): no predictions", predictions.prefix);
    }
    format!(
        "{} ({}): {}",
        predictions.prefix,
        predictions.len(),
        predictions.words.join(", ")
    )
}
