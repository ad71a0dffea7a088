//! Error types for dataset probing.
//!
//! Structured errors carry the file path (and line, where known) so a failed
//! run points at the offending dataset file. Command boundaries use
//! `anyhow::Result`; the structured type converts into `anyhow::Error` for
//! free via `std::error::Error`.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProbeError {
    /// File system I/O errors (read, metadata, directory listing)
    #[error("I/O error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Dataset file parse errors
    #[error("parse error in {}{}: {message}", .path.display(), fmt_line(.line))]
    Parse {
        path: PathBuf,
        line: Option<u64>,
        message: String,
    },

    /// A CSV file is missing a column the analysis requires
    #[error("missing column '{column}' in {}", .path.display())]
    MissingColumn { column: String, path: PathBuf },

    /// Configuration file errors
    #[error("configuration error: {0}")]
    Config(String),
}

fn fmt_line(line: &Option<u64>) -> String {
    match line {
        Some(n) => format!(":{n}"),
        None => String::new(),
    }
}

impl ProbeError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn parse(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Parse {
            path: path.into(),
            line: None,
            message: message.into(),
        }
    }

    pub fn parse_at_line(path: impl Into<PathBuf>, line: u64, message: impl Into<String>) -> Self {
        Self::Parse {
            path: path.into(),
            line: Some(line),
            message: message.into(),
        }
    }

    pub fn missing_column(column: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self::MissingColumn {
            column: column.into(),
            path: path.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}
