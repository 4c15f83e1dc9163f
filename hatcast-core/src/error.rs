use std::{io, path::PathBuf};

use thiserror::Error;

/// Every failure the program can report.
///
/// Each variant maps to exactly one diagnostic line and one exit code; the
/// user never sees a backtrace or a raw wrapped error.
#[derive(Debug, Error)]
pub enum Error {
    /// The key file could not be opened or read.
    #[error("Key file not found. Please provide a file called {} in the working directory", path.display())]
    KeyFileNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The key file opened but its first line was missing or empty.
    #[error("Key not found in file. Paste your API key as the first line of {}", path.display())]
    KeyMissing { path: PathBuf },

    /// The HTTP request could not complete at the transport level.
    #[error("Network error, could not reach the weather service: {0}")]
    Network(#[from] reqwest::Error),

    /// The response body was not JSON of the expected shape. Recovered
    /// locally: the recommendation is skipped and the process still exits 0.
    #[error("Error processing response, unable to make a recommendation")]
    ResponseFormat(#[from] serde_json::Error),
}

impl Error {
    /// Exit code for the single top-level termination point.
    ///
    /// The original program exited 0 on a missing key line and non-zero on a
    /// missing key file; the two are normalized here to distinct non-zero
    /// codes so both failures are observable from scripts.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Network(_) => 1,
            Error::KeyFileNotFound { .. } => 2,
            Error::KeyMissing { .. } => 3,
            Error::ResponseFormat(_) => 0,
        }
    }
}
