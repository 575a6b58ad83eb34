//! The three-step refresh: resolve version, build URL, fetch and save.

use crate::config::RefreshConfig;
use crate::data::{fetch_json, http_client, remove_stale, write_output};
use crate::error::{RefreshError, Step};
use crate::model::{GameConfig, render_dataset};
use serde_json::Value;
use std::path::PathBuf;
use tracing::{debug, info};

/// What a successful run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefreshOutcome {
    pub version: String,
    pub dataset_url: String,
    pub output_path: PathBuf,
    pub bytes_written: usize,
}

/// Runs refreshes against one configuration, reusing a single HTTP client.
pub struct Refresher {
    config: RefreshConfig,
    client: reqwest::blocking::Client,
}

impl Refresher {
    pub fn new(config: RefreshConfig) -> Result<Self, RefreshError> {
        let client = http_client(config.request_timeout)?;
        Ok(Self { config, client })
    }

    /// Fetches the configuration document and returns its version.
    pub fn resolve_version(&self) -> Result<String, RefreshError> {
        let url = &self.config.config_endpoint;
        info!(%url, "fetching version info");
        let document = fetch_json(&self.client, Step::ResolveVersion, url)?;

        let version = GameConfig::from_value(&document)
            .version
            .ok_or_else(|| RefreshError::MissingField {
                step: Step::ResolveVersion,
                url: url.clone(),
                field: "version",
            })?;
        info!(%version, "current version identified");
        Ok(version)
    }

    /// Downloads and parses the dataset published under `version`.
    pub fn fetch_dataset(&self, version: &str) -> Result<(String, Value), RefreshError> {
        let url = self.config.dataset_url(version);
        info!(%url, "downloading dataset");
        let dataset = fetch_json(&self.client, Step::FetchDataset, &url)?;
        Ok((url, dataset))
    }

    /// Performs a full refresh.
    ///
    /// Nothing is written unless both requests succeed and both bodies parse.
    /// With the sidecar enabled, the previous `.version` file is removed
    /// before the dataset is touched, so it never outlives the data it named.
    pub fn refresh(&self) -> Result<RefreshOutcome, RefreshError> {
        let version = self.resolve_version()?;
        let (dataset_url, dataset) = self.fetch_dataset(&version)?;

        let output_path = self.config.output_path.clone();
        let rendered = render_dataset(&dataset).map_err(|e| RefreshError::Write {
            path: output_path.clone(),
            source: e.into(),
        })?;

        let sidecar = self.config.sidecar_path();
        if self.config.version_sidecar {
            remove_stale(&sidecar)?;
        }
        write_output(&output_path, &rendered)?;
        debug!(path = %output_path.display(), bytes = rendered.len(), "dataset written");

        if self.config.version_sidecar {
            write_output(&sidecar, version.as_bytes())?;
            debug!(path = %sidecar.display(), "version recorded");
        }

        info!(path = %output_path.display(), %version, "refresh complete");
        Ok(RefreshOutcome {
            version,
            dataset_url,
            output_path,
            bytes_written: rendered.len(),
        })
    }
}

/// Convenience wrapper for a one-off run.
pub fn refresh(config: RefreshConfig) -> Result<RefreshOutcome, RefreshError> {
    Refresher::new(config)?.refresh()
}
