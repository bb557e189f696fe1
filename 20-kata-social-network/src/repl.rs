use std::borrow::Cow;

use anyhow::{Context, Result};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite};
use tracing::{debug, info, warn};

use crate::{
    clock::Clock,
    engine::Engine,
    entry::{LogEntry, OutputFormat, write_entry},
};

pub const QUIT_COMMAND: &str = "/quit";
pub const FAREWELL: &str = "*** leaving Kata Social Network";

const LINE_ENDINGS: &[char] = &['\n', '\r'];

/// Feeds lines from `reader` into the engine until EOF or `/quit`.
///
/// The greeting is written first; every line's entries are flushed before the
/// next line is read. Bytes that are not valid UTF-8 are replaced rather than
/// ending the session.
pub async fn run<C, R, W>(
    engine: &mut Engine<C>,
    reader: &mut R,
    writer: &mut W,
    format: OutputFormat,
) -> Result<()>
where
    C: Clock,
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    write_entries(writer, &[engine.greeting()], format).await?;
    info!("session started");

    let mut buffer = Vec::new();
    loop {
        buffer.clear();
        let bytes_read = reader
            .read_until(b'\n', &mut buffer)
            .await
            .context("failed to read input line")?;
        let input = decode_line(&buffer);
        if !handle_input(engine, bytes_read, &input, writer, format).await? {
            break;
        }
    }

    info!(posts = engine.posts().len(), "session ended");
    Ok(())
}

async fn handle_input<C, W>(
    engine: &mut Engine<C>,
    bytes_read: usize,
    input: &str,
    writer: &mut W,
    format: OutputFormat,
) -> Result<bool>
where
    C: Clock,
    W: AsyncWrite + Unpin,
{
    if bytes_read == 0 {
        debug!("input closed");
        return Ok(false);
    }

    let line = input.trim_end_matches(LINE_ENDINGS);
    if line.trim().eq_ignore_ascii_case(QUIT_COMMAND) {
        write_entries(writer, &[LogEntry::banner(FAREWELL)], format).await?;
        return Ok(false);
    }

    let entries = engine.submit(line);
    write_entries(writer, &entries, format).await?;
    Ok(true)
}

fn decode_line(bytes: &[u8]) -> Cow<'_, str> {
    let line = String::from_utf8_lossy(bytes);
    if let Cow::Owned(_) = line {
        warn!(len = bytes.len(), "input line is not valid UTF-8; replacing invalid bytes");
    }
    line
}

async fn write_entries<W>(writer: &mut W, entries: &[LogEntry], format: OutputFormat) -> Result<()>
where
    W: AsyncWrite + Unpin,
{
    for entry in entries {
        write_entry(writer, entry, format)
            .await
            .context("failed to write transcript entry")?;
    }
    Ok(())
}
