//! Error types for document output.
//!
//! Building a schema never fails; only turning the finished document into
//! bytes can.

use std::path::PathBuf;
use thiserror::Error;

/// Errors while serializing or writing a finished document.
#[derive(Debug, Error)]
pub enum OutputError {
    // Serialization errors (exit code 2)
    #[error("cannot serialize document: {source}")]
    Serialize {
        #[source]
        source: serde_json::Error,
    },

    // IO errors (exit code 3)
    #[error("cannot write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot write output: {source}")]
    Stream {
        #[source]
        source: std::io::Error,
    },
}

impl OutputError {
    /// Returns the exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            OutputError::Serialize { .. } => 2,
            OutputError::Write { .. } | OutputError::Stream { .. } => 3,
        }
    }
}
