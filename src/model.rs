//! Shapes of the documents served by the game-data CDN.

use serde::Serialize;
use serde_json::Value;
use serde_json::ser::{PrettyFormatter, Serializer};

/// Indentation used when the dataset is written back to disk.
pub const OUTPUT_INDENT: &[u8] = b"    ";

/// The subset of `config.json` the refresher cares about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Dot-separated build identifier (e.g. "1.90.1.48"), if the document carried one.
    pub version: Option<String>,
}

impl GameConfig {
    /// Reads the `version` field out of a raw configuration document.
    ///
    /// Anything other than a non-blank string is treated as absent; every
    /// other field is ignored. A usable version is kept exactly as served.
    pub fn from_value(value: &Value) -> Self {
        let version = value
            .get("version")
            .and_then(|v| v.as_str())
            .filter(|v| !v.trim().is_empty())
            .map(|v| v.to_string());
        Self { version }
    }
}

/// Serializes a dataset as pretty JSON with a fixed indent.
///
/// Output is deterministic for a given value, so unchanged remote data
/// produces a byte-identical file.
pub fn render_dataset(dataset: &Value) -> serde_json::Result<Vec<u8>> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(OUTPUT_INDENT);
    let mut ser = Serializer::with_formatter(&mut buf, formatter);
    dataset.serialize(&mut ser)?;
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_version_extracted_and_extra_fields_ignored() {
        let config = GameConfig::from_value(&json!({
            "version": "1.90.1.48",
            "cdn": "wakfu.cdn.ankama.com",
            "langs": ["fr", "en"]
        }));
        assert_eq!(config.version.as_deref(), Some("1.90.1.48"));
    }

    #[test]
    fn test_version_kept_verbatim() {
        let config = GameConfig::from_value(&json!({"version": " 1.90.1.48"}));
        assert_eq!(config.version.as_deref(), Some(" 1.90.1.48"));
    }

    #[test]
    fn test_missing_or_unusable_version_is_none() {
        assert_eq!(GameConfig::from_value(&json!({})).version, None);
        assert_eq!(GameConfig::from_value(&json!({"version": ""})).version, None);
        assert_eq!(GameConfig::from_value(&json!({"version": "  "})).version, None);
        assert_eq!(GameConfig::from_value(&json!({"version": 190})).version, None);
        assert_eq!(GameConfig::from_value(&json!({"version": null})).version, None);
        assert_eq!(GameConfig::from_value(&json!(["1.90.1.48"])).version, None);
    }

    #[test]
    fn test_render_uses_four_space_indent() {
        let rendered = render_dataset(&json!({"items": [1]})).unwrap();
        assert_eq!(
            String::from_utf8(rendered).unwrap(),
            "{\n    \"items\": [\n        1\n    ]\n}"
        );
    }

    #[test]
    fn test_render_preserves_key_order() {
        let value: Value = serde_json::from_str(r#"{"z": 1, "a": 2, "m": {"y": 3, "b": 4}}"#).unwrap();
        let rendered = String::from_utf8(render_dataset(&value).unwrap()).unwrap();
        let z = rendered.find("\"z\"").unwrap();
        let a = rendered.find("\"a\"").unwrap();
        let y = rendered.find("\"y\"").unwrap();
        let b = rendered.find("\"b\"").unwrap();
        assert!(z < a);
        assert!(y < b);
    }

    #[test]
    fn test_render_keeps_non_ascii_as_utf8() {
        let rendered = render_dataset(&json!({"name": "Épée"})).unwrap();
        assert!(String::from_utf8(rendered).unwrap().contains("Épée"));
    }
}
