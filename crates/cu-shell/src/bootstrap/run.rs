//! Line-oriented shell loop.

use std::sync::Arc;

use anyhow::Context;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info, warn};

use crate::bootstrap::AppRuntime;
use crate::commands::{self, map_err, Command, Reply};

/// Drive the runtime from `input` until `quit` or end of input.
///
/// Writes the initial view first, then one JSON reply per non-empty line.
pub async fn run_app<R, W>(runtime: Arc<AppRuntime>, input: R, mut output: W) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let initial = commands::navigation::start(&runtime).await;
    write_reply(&mut output, &initial).await?;

    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await.context("Failed to read command")? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let reply = match line.parse::<Command>() {
            Ok(Command::Quit) => {
                write_reply(&mut output, &Reply::Bye).await?;
                info!("shell closed by quit");
                return Ok(());
            }
            Ok(command) => {
                debug!(command = command.name(), "executing command");
                commands::execute(&runtime, command).await
            }
            Err(err) => {
                warn!(error = %err, "rejected input line");
                Reply::Error {
                    message: map_err(err),
                }
            }
        };
        write_reply(&mut output, &reply).await?;
    }

    info!("input closed");
    Ok(())
}

async fn write_reply<W>(output: &mut W, reply: &Reply) -> anyhow::Result<()>
where
    W: AsyncWrite + Unpin,
{
    let mut encoded = serde_json::to_vec(reply).context("Failed to encode reply")?;
    encoded.push(b'\n');
    output
        .write_all(&encoded)
        .await
        .context("Failed to write reply")?;
    output.flush().await.context("Failed to flush reply")?;
    Ok(())
}
