//! Endpoints, output location and timeouts for a refresh run.

use std::path::PathBuf;
use std::time::Duration;

/// Ankama's game-data configuration document, which carries the live version.
pub const DEFAULT_CONFIG_ENDPOINT: &str = "https://wakfu.cdn.ankama.com/gamedata/config.json";
/// Root under which every published version has its own directory.
pub const DEFAULT_BASE_URL: &str = "https://wakfu.cdn.ankama.com/gamedata";
pub const DEFAULT_DATASET_FILENAME: &str = "items.json";
pub const DEFAULT_OUTPUT_PATH: &str = "data/items.json";
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Everything a [`crate::refresh::Refresher`] needs to know about where to read
/// from and where to write to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefreshConfig {
    /// URL of the JSON document holding the `version` field.
    pub config_endpoint: String,
    /// Base of the versioned dataset URL (`<base_url>/<version>/<dataset_filename>`).
    pub base_url: String,
    /// File name requested inside the version directory.
    pub dataset_filename: String,
    /// Where the pretty-printed dataset is written. The parent directory must exist.
    pub output_path: PathBuf,
    /// Applied to each of the two requests individually.
    pub request_timeout: Duration,
    /// Also write the resolved version to `<output_path>.version`.
    pub version_sidecar: bool,
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self {
            config_endpoint: DEFAULT_CONFIG_ENDPOINT.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            dataset_filename: DEFAULT_DATASET_FILENAME.to_string(),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            version_sidecar: false,
        }
    }
}

impl RefreshConfig {
    /// Builds the dataset URL for `version`.
    ///
    /// The version is inserted verbatim; it comes from the provider's own
    /// version scheme and is already URL-safe.
    pub fn dataset_url(&self, version: &str) -> String {
        format!(
            "{}/{}/{}",
            self.base_url.trim_end_matches('/'),
            version,
            self.dataset_filename
        )
    }

    /// Path of the optional file recording which version produced the output.
    pub fn sidecar_path(&self) -> PathBuf {
        let mut name = self.output_path.clone().into_os_string();
        name.push(".version");
        PathBuf::from(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dataset_url_inserts_version_between_base_and_file() {
        let config = RefreshConfig {
            base_url: "https://host/gamedata".to_string(),
            ..RefreshConfig::default()
        };
        assert_eq!(
            config.dataset_url("2.0.0.1"),
            "https://host/gamedata/2.0.0.1/items.json"
        );
    }

    #[test]
    fn test_dataset_url_does_not_double_trailing_slash() {
        let config = RefreshConfig {
            base_url: "https://host/gamedata/".to_string(),
            dataset_filename: "states.json".to_string(),
            ..RefreshConfig::default()
        };
        assert_eq!(
            config.dataset_url("1.90.1.48"),
            "https://host/gamedata/1.90.1.48/states.json"
        );
    }

    #[test]
    fn test_defaults_point_at_ankama_cdn() {
        let config = RefreshConfig::default();
        assert_eq!(
            config.dataset_url("1.90.1.48"),
            "https://wakfu.cdn.ankama.com/gamedata/1.90.1.48/items.json"
        );
        assert_eq!(config.output_path, PathBuf::from("data/items.json"));
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert!(!config.version_sidecar);
    }

    #[test]
    fn test_sidecar_path_appends_suffix() {
        let config = RefreshConfig {
            output_path: PathBuf::from("out/items.json"),
            ..RefreshConfig::default()
        };
        assert_eq!(config.sidecar_path(), PathBuf::from("out/items.json.version"));
    }
}
