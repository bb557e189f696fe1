//! Transcript entries produced by the engine, plus helpers for writing them.
//!
//! Entries can be written as plain text lines or as newline-delimited JSON
//! objects, which keeps the transcript easy to consume from other tools.

use std::{fmt, io};

use serde::{Deserialize, Serialize};
use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::error::CommandError;

/// Marker that prefixes echoed commands and command results.
pub const PROMPT: &str = "> ";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    /// Greeting and echoed input lines.
    Command,
    /// A post listed by a read or wall command.
    Post,
    Error,
}

/// One line of engine output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LogEntry {
    pub kind: EntryKind,
    pub text: String,
}

impl LogEntry {
    pub fn banner(text: impl Into<String>) -> Self {
        Self {
            kind: EntryKind::Command,
            text: text.into(),
        }
    }

    pub fn echo(line: &str) -> Self {
        Self {
            kind: EntryKind::Command,
            text: format!("{PROMPT}{line}"),
        }
    }

    pub fn post(text: impl fmt::Display) -> Self {
        Self {
            kind: EntryKind::Post,
            text: format!("{PROMPT}{text}"),
        }
    }

    pub fn error(error: &CommandError) -> Self {
        Self {
            kind: EntryKind::Error,
            text: format!("{PROMPT}{error}"),
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == EntryKind::Error
    }
}

/// How entries are rendered onto the output stream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// The entry text, one entry per line.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

pub async fn write_entry<W>(writer: &mut W, entry: &LogEntry, format: OutputFormat) -> io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    let mut encoded = match format {
        OutputFormat::Text => entry.text.clone().into_bytes(),
        OutputFormat::Json => serde_json::to_vec(entry).map_err(to_io_error)?,
    };
    encoded.push(b'\n');
    writer.write_all(&encoded).await?;
    writer.flush().await?;
    Ok(())
}

fn to_io_error(err: serde_json::Error) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, err)
}
