//! The process configuration record.
//!
//! One [`ProcessConfig`] describes how this application instance was
//! launched: which plugins to skip, where to look for extra plugins, where to
//! restore the main window, and whether the launcher and updater may act.
//!
//! # Defaults
//!
//! | Field                  | Default |
//! |------------------------|---------|
//! | `disabled_plugins`     | empty   |
//! | `plugin_paths`         | empty   |
//! | `last_window_position` | `None`  |
//! | `screen_capture_path`  | `None`  |
//! | `launcher_msg`         | `None`  |
//! | `updater_enabled`      | `false` |
//! | `launcher_enabled`     | `true`  |
//!
//! `ProcessConfig::default()` is exactly the record decoded from `{}`.

use std::collections::BTreeSet;

use serde::Serialize;

use super::window_position::WindowPosition;

/// Launch-time configuration shared by the main process and its renderers.
///
/// The record is built once per cache generation and shared as
/// `Arc<ProcessConfig>`; consumers treat it as read-only.
///
/// Serialises with camelCase keys, the same shape the `CONFIG` environment
/// variable carries.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessConfig {
    /// Plugin identifiers the plugin loader must not activate.
    pub disabled_plugins: BTreeSet<String>,
    /// Extra directories searched for plugins, in search order.
    pub plugin_paths: Vec<String>,
    /// Main window geometry from the previous session, if any.
    pub last_window_position: Option<WindowPosition>,
    /// Directory that screen captures are written to.
    pub screen_capture_path: Option<String>,
    /// Message handed over by the launcher, shown once at startup.
    pub launcher_msg: Option<String>,
    /// Whether the built-in updater may run.  Always `false` for decoded
    /// records: release builds are not signed for self-update.
    pub updater_enabled: bool,
    /// Whether to delegate to the launcher if one is present.
    pub launcher_enabled: bool,
}

impl ProcessConfig {
    /// Returns `true` if the plugin with `id` is listed in `disabled_plugins`.
    pub fn is_plugin_disabled(&self, id: &str) -> bool {
        self.disabled_plugins.contains(id)
    }
}

impl Default for ProcessConfig {
    fn default() -> Self {
        Self {
            disabled_plugins: BTreeSet::new(),
            plugin_paths: Vec::new(),
            last_window_position: None,
            screen_capture_path: None,
            launcher_msg: None,
            updater_enabled: false,
            launcher_enabled: true,
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
