//! Failure kinds of a refresh run.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Which network step of the run failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    ResolveVersion,
    FetchDataset,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::ResolveVersion => f.write_str("resolving version"),
            Step::FetchDataset => f.write_str("fetching dataset"),
        }
    }
}

/// Why a request did not produce a usable body.
#[derive(Debug, Error)]
pub enum TransportFailure {
    #[error(transparent)]
    Request(#[from] reqwest::Error),

    #[error("server responded with {0}")]
    Status(reqwest::StatusCode),
}

#[derive(Debug, Error)]
pub enum RefreshError {
    #[error("failed to build HTTP client")]
    Client(#[source] reqwest::Error),

    #[error("{step}: request to {url} failed")]
    Transport {
        step: Step,
        url: String,
        #[source]
        source: TransportFailure,
    },

    #[error("{step}: response from {url} is not valid JSON")]
    Parse {
        step: Step,
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("{step}: {url} has no usable `{field}` field")]
    MissingField {
        step: Step,
        url: String,
        field: &'static str,
    },

    #[error("failed to write {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl RefreshError {
    /// Process exit status for this failure kind.
    pub fn exit_code(&self) -> u8 {
        match self {
            RefreshError::Client(_) => 1,
            RefreshError::Transport { .. } => 2,
            RefreshError::Parse { .. } => 3,
            RefreshError::MissingField { .. } => 4,
            RefreshError::Write { .. } => 5,
        }
    }
}
