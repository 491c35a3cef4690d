//! Error type for store loading and persistence.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors produced while reading, parsing, or writing a persisted store.
#[derive(Debug, Error, Clone)]
pub enum Error {
    #[error("{message}")]
    /// I/O error while reading an existing store file.
    Read {
        /// Path of the store being read.
        path: PathBuf,
        /// Human-readable error message.
        message: String,
    },
    #[error("{message}")]
    /// The store file exists but does not parse as a RON document.
    Parse {
        /// Path of the store being parsed.
        path: PathBuf,
        /// Human-readable error message.
        message: String,
    },
    #[error("{message}")]
    /// I/O error while writing or renaming the store file.
    Write {
        /// Path of the store being written.
        path: PathBuf,
        /// Human-readable error message.
        message: String,
    },
}

impl Error {
    /// Render a human-friendly message including the affected path.
    pub fn pretty(&self) -> String {
        match self {
            Self::Read { path, message } => {
                format!("Read error at {}: {}", path.display(), message)
            }
            Self::Parse { path, message } => {
                format!("Parse error at {}: {}", path.display(), message)
            }
            Self::Write { path, message } => {
                format!("Write error at {}: {}", path.display(), message)
            }
        }
    }

    /// Access the path attached to this error.
    pub fn path(&self) -> &Path {
        match self {
            Self::Read { path, .. } | Self::Parse { path, .. } | Self::Write { path, .. } => path,
        }
    }
}
