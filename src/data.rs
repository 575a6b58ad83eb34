use crate::error::{RefreshError, Step, TransportFailure};
use serde_json::Value;
use std::fs;
use std::io;
use std::path::Path;
use std::time::Duration;
use tracing::debug;

pub fn http_client(timeout: Duration) -> Result<reqwest::blocking::Client, RefreshError> {
    reqwest::blocking::Client::builder()
        .timeout(timeout)
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(RefreshError::Client)
}

/// GETs `url` and parses the body as JSON.
///
/// Any non-2xx status is a transport failure; the body is only parsed once
/// it has been read completely.
pub fn fetch_json(
    client: &reqwest::blocking::Client,
    step: Step,
    url: &str,
) -> Result<Value, RefreshError> {
    let transport = |source: TransportFailure| RefreshError::Transport {
        step,
        url: url.to_string(),
        source,
    };

    let response = client
        .get(url)
        .send()
        .map_err(|e| transport(e.into()))?;
    let status = response.status();
    debug!(%url, %status, "response received");
    if !status.is_success() {
        return Err(transport(TransportFailure::Status(status)));
    }

    let body = response.bytes().map_err(|e| transport(e.into()))?;
    debug!(%url, bytes = body.len(), "body read");

    serde_json::from_slice(&body).map_err(|source| RefreshError::Parse {
        step,
        url: url.to_string(),
        source,
    })
}

/// Replaces the file at `path` with `contents`. The parent directory is not created.
pub fn write_output(path: &Path, contents: &[u8]) -> Result<(), RefreshError> {
    fs::write(path, contents).map_err(|source| RefreshError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Deletes the file at `path` if there is one.
pub fn remove_stale(path: &Path) -> Result<(), RefreshError> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(source) => Err(RefreshError::Write {
            path: path.to_path_buf(),
            source,
        }),
    }
}
