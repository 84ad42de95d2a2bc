use std::io::{IsTerminal, Write};

use clap::Args;
use predict::predictor::{Predictions, Predictor};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tracing::info;

const QUIT: &str = ":q";

#[derive(Args, Debug, Default)]
pub struct ReplArgs {
    /// Print every slot of the prediction buffer, empty ones included.
    #[arg(long)]
    pad: bool,
}

pub async fn execute_repl(args: ReplArgs, predictor: Predictor<'_>) -> anyhow::Result<()> {
    let interactive = std::io::stdin().is_terminal();
    let input = BufReader::new(tokio::io::stdin());
    let queries = session(
        &args,
        predictor,
        input,
        &mut std::io::stdout(),
        interactive,
    )
    .await?;

    info!("Session ended after {} queries", queries);
    Ok(())
}

/// Answers every input line until `:q` or end of input, returning how many
/// lines were answered. Prompts are only written when `interactive`.
async fn session<R, W>(
    args: &ReplArgs,
    predictor: Predictor<'_>,
    input: R,
    out: &mut W,
    interactive: bool,
) -> anyhow::Result<usize>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = input.lines();
    if interactive {
        writeln!(out, "Type to see predictions, {} to quit.", QUIT)?;
    }

    let mut queries = 0usize;
    loop {
        if interactive {
            write!(out, " Input | ")?;
            out.flush()?;
        }
        let Some(line) = lines.next_line().await? else {
            break;
        };
        if line == QUIT {
            break;
        }

        let predictions = predictor.query(&line.to_lowercase());
        write!(out, "{}", render(&predictions, args.pad))?;
        out.flush()?;
        queries += 1;
    }

    Ok(queries)
}

// One block per edit: a header naming the input, then one line per slot.
fn render(predictions: &Predictions, pad: bool) -> String {
    let mut out = format!("Showing predictions for: {}\n", predictions.prefix);
    let shown = if pad { usize::MAX } else { predictions.len() };
    for slot in predictions.padded().take(shown) {
        out.push_str(slot);
        out.push('\n');
    }
    out
}
