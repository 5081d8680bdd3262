//! `CONFIG` JSON decoding.
//!
//! The launching process passes the configuration as one JSON object in the
//! `CONFIG` environment variable:
//!
//! ```json
//! {
//!   "disabledPlugins": ["network", "layout"],
//!   "pluginPaths": ["/opt/plugins"],
//!   "lastWindowPosition": {"x": 0, "y": 0, "width": 1280, "height": 800},
//!   "screenCapturePath": "/home/me/captures",
//!   "launcherMsg": "Restart to finish updating",
//!   "launcherEnabled": false
//! }
//! ```
//!
//! Decoding happens in two steps:
//!
//! 1. The text is parsed into an untyped `serde_json::Value`.  Invalid JSON
//!    is the only failure and yields [`ConfigError::Malformed`].
//! 2. Each recognised property is mapped into [`ProcessConfig`] by its own
//!    helper in `fields`, which defaults absent or wrong-shaped values.
//!    `updaterEnabled` is never read and unknown properties are ignored.

mod error;
mod fields;

use serde_json::{Map, Value};
use tracing::warn;

use crate::domain::process_config::ProcessConfig;

pub use error::{ConfigError, ConfigOrigin};

/// Name of the environment variable carrying the JSON payload.
pub const CONFIG_ENV_VAR: &str = "CONFIG";

/// Payload used when no environment source holds a value.
pub const DEFAULT_CONFIG_JSON: &str = "{}";

/// Decodes `json` into a [`ProcessConfig`], applying every field default.
///
/// `origin` is carried into the error so callers can tell which environment
/// source held the bad payload.
///
/// A valid JSON document that is not an object decodes as `{}`.
///
/// # Errors
///
/// Returns [`ConfigError::Malformed`] if `json` is not valid JSON.
///
/// # Example
///
/// ```rust
/// use process_config_core::{decode_process_config, ConfigOrigin};
///
/// let cfg = decode_process_config(r#"{"disabledPlugins": ["a", "a", "b"]}"#, ConfigOrigin::Process)
///     .expect("valid JSON");
/// assert_eq!(cfg.disabled_plugins.len(), 2);
/// assert!(cfg.launcher_enabled);
/// ```
pub fn decode_process_config(json: &str, origin: ConfigOrigin) -> Result<ProcessConfig, ConfigError> {
    let value: Value =
        serde_json::from_str(json).map_err(|source| ConfigError::Malformed { origin, source })?;

    let empty = Map::new();
    let obj = match &value {
        Value::Object(map) => map,
        other => {
            warn!("CONFIG from the {origin} is not a JSON object ({other}); using defaults");
            &empty
        }
    };

    Ok(ProcessConfig {
        disabled_plugins: fields::string_list(obj, "disabledPlugins")
            .into_iter()
            .collect(),
        plugin_paths: fields::string_list(obj, "pluginPaths"),
        last_window_position: fields::window_position(obj, "lastWindowPosition"),
        screen_capture_path: fields::optional_string(obj, "screenCapturePath"),
        launcher_msg: fields::optional_string(obj, "launcherMsg"),
        // The built-in updater stays off until release builds are signed.
        updater_enabled: false,
        launcher_enabled: fields::strict_bool(obj, "launcherEnabled", true),
    })
}

impl ProcessConfig {
    /// Serialises the record into the `CONFIG` payload shape.
    ///
    /// A host process uses this to hand its resolved configuration to the
    /// child processes it spawns.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Encode`] if serialisation fails.
    pub fn to_env_json(&self) -> Result<String, ConfigError> {
        serde_json::to_string(self).map_err(ConfigError::Encode)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::domain::window_position::WindowPosition;

    fn decode(json: &str) -> ProcessConfig {
        decode_process_config(json, ConfigOrigin::Process).expect("decode must succeed")
    }

    #[test]
    fn test_empty_object_decodes_to_defaults() {
        // Arrange / Act
        let cfg = decode("{}");

        // Assert
        assert_eq!(cfg, ProcessConfig::default());
        assert!(cfg.disabled_plugins.is_empty());
        assert!(cfg.plugin_paths.is_empty());
        assert_eq!(cfg.last_window_position, None);
        assert_eq!(cfg.screen_capture_path, None);
        assert_eq!(cfg.launcher_msg, None);
        assert!(!cfg.updater_enabled);
        assert!(cfg.launcher_enabled);
    }

    #[test]
    fn test_disabled_plugins_are_deduplicated() {
        let cfg = decode(r#"{"disabledPlugins": ["a", "a", "b"]}"#);

        let expected: BTreeSet<String> = ["a", "b"].iter().map(|s| s.to_string()).collect();
        assert_eq!(cfg.disabled_plugins, expected);
    }

    #[test]
    fn test_launcher_enabled_string_is_ignored() {
        let cfg = decode(r#"{"launcherEnabled": "yes"}"#);
        assert!(cfg.launcher_enabled);
    }

    #[test]
    fn test_launcher_enabled_false_is_respected() {
        let cfg = decode(r#"{"launcherEnabled": false}"#);
        assert!(!cfg.launcher_enabled);
    }

    #[test]
    fn test_updater_enabled_input_is_always_overridden() {
        let cfg = decode(r#"{"updaterEnabled": true}"#);
        assert!(!cfg.updater_enabled);
    }

    #[test]
    fn test_full_payload_populates_every_field() {
        // Arrange
        let json = r#"{
            "disabledPlugins": ["network", "layout"],
            "pluginPaths": ["/opt/plugins", "/home/me/plugins"],
            "lastWindowPosition": {"x": 10, "y": 20, "width": 1280, "height": 800},
            "screenCapturePath": "/tmp/captures",
            "launcherMsg": "Restart to finish updating",
            "launcherEnabled": false,
            "someFutureKey": {"nested": true}
        }"#;

        // Act
        let cfg = decode(json);

        // Assert
        assert!(cfg.is_plugin_disabled("network"));
        assert!(cfg.is_plugin_disabled("layout"));
        assert_eq!(cfg.plugin_paths, vec!["/opt/plugins", "/home/me/plugins"]);
        assert_eq!(
            cfg.last_window_position,
            Some(WindowPosition::new(10.0, 20.0, 1280.0, 800.0))
        );
        assert_eq!(cfg.screen_capture_path.as_deref(), Some("/tmp/captures"));
        assert_eq!(cfg.launcher_msg.as_deref(), Some("Restart to finish updating"));
        assert!(!cfg.launcher_enabled);
    }

    #[test]
    fn test_malformed_json_returns_error_with_origin() {
        // Arrange / Act
        let result = decode_process_config("{not json", ConfigOrigin::Host);

        // Assert
        match result {
            Err(ConfigError::Malformed { origin, .. }) => assert_eq!(origin, ConfigOrigin::Host),
            other => panic!("expected Malformed error, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_text_is_malformed() {
        let result = decode_process_config("", ConfigOrigin::Process);
        assert!(matches!(result, Err(ConfigError::Malformed { .. })));
    }

    #[test]
    fn test_non_object_documents_decode_to_defaults() {
        for json in ["null", "5", "\"text\"", "[1, 2]", "true"] {
            assert_eq!(
                decode(json),
                ProcessConfig::default(),
                "{json} must decode to the default record"
            );
        }
    }

    #[test]
    fn test_wrong_shaped_fields_do_not_reject_payload() {
        let cfg = decode(
            r#"{"disabledPlugins": 3, "lastWindowPosition": "left", "launcherMsg": ["x"]}"#,
        );
        assert_eq!(cfg, ProcessConfig::default());
    }

    #[test]
    fn test_to_env_json_decodes_back_to_equal_record() {
        // Arrange
        let original = decode(
            r#"{"disabledPlugins": ["b", "a"], "pluginPaths": ["/p"],
                "lastWindowPosition": {"x": -5, "y": 0, "width": 640, "height": 480},
                "launcherMsg": "hi", "launcherEnabled": false}"#,
        );

        // Act
        let json = original.to_env_json().expect("encode");
        let restored = decode(&json);

        // Assert
        assert_eq!(original, restored);
    }
}
