//! Memoized access to the process configuration.
//!
//! [`ConfigProvider`] resolves the `CONFIG` payload once, decodes it, and
//! hands out the same `Arc<ProcessConfig>` on every later call until
//! [`ConfigProvider::reset_config_for_testing`] clears it.
//!
//! # States
//!
//! ```text
//!                 get_config() ok
//!  Uninitialized ─────────────────► Cached ──┐ get_config(): same Arc
//!        ▲   │ get_config() err              │
//!        │   └──► (stays Uninitialized) ◄────┘
//!        └──────── reset_config_for_testing()
//! ```
//!
//! # Source order
//!
//! 1. The host-process environment, if one was supplied with
//!    [`ConfigProvider::with_host`].
//! 2. This process's environment.
//! 3. The literal `{}`.
//!
//! An empty value counts as unset and falls through to the next source.

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use process_config_core::{
    decode_process_config, ConfigError, ConfigOrigin, ProcessConfig, CONFIG_ENV_VAR,
    DEFAULT_CONFIG_JSON,
};
use tracing::{debug, info, trace, warn};

use crate::infrastructure::env::{EnvReader, ProcessEnv};

/// Process-wide holder of the decoded [`ProcessConfig`].
///
/// Owned by the composition root and passed to consumers, typically as
/// `Arc<ConfigProvider>`.  The cache is guarded by a `Mutex` held across the
/// first read and decode, so concurrent first calls still produce exactly one
/// record.
pub struct ConfigProvider {
    host: Option<Box<dyn EnvReader>>,
    process: Box<dyn EnvReader>,
    cached: Mutex<Option<Arc<ProcessConfig>>>,
}

impl ConfigProvider {
    /// Creates a provider reading only from `process`.
    pub fn new(process: impl EnvReader + 'static) -> Self {
        Self {
            host: None,
            process: Box::new(process),
            cached: Mutex::new(None),
        }
    }

    /// Creates a provider reading from the current process environment.
    pub fn from_process_env() -> Self {
        Self::new(ProcessEnv)
    }

    /// Adds a privileged host-process source, consulted before `process`.
    pub fn with_host(mut self, host: impl EnvReader + 'static) -> Self {
        self.host = Some(Box::new(host));
        self
    }

    /// Returns the process configuration, decoding it on first use.
    ///
    /// Later calls return the same `Arc` without reading the environment
    /// again, even if `CONFIG` has changed since.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Malformed`] if the resolved `CONFIG` text is not
    /// valid JSON.  Nothing is cached in that case, so the next call reads
    /// the environment again.
    pub fn get_config(&self) -> Result<Arc<ProcessConfig>, ConfigError> {
        let mut cached = self.lock_cache();
        if let Some(cfg) = cached.as_ref() {
            trace!("process config served from cache");
            return Ok(Arc::clone(cfg));
        }

        let (json, origin) = self.resolve_json();
        let cfg = match decode_process_config(&json, origin) {
            Ok(cfg) => Arc::new(cfg),
            Err(e) => {
                warn!("rejected {CONFIG_ENV_VAR}: {e}");
                return Err(e);
            }
        };

        info!(
            "process config loaded from {origin}: {} disabled plugin(s), {} plugin path(s)",
            cfg.disabled_plugins.len(),
            cfg.plugin_paths.len()
        );
        *cached = Some(Arc::clone(&cfg));
        Ok(cfg)
    }

    /// Clears the cached record so the next [`get_config`](Self::get_config)
    /// re-reads the environment.
    ///
    /// Intended for test harnesses that simulate several launches in one
    /// process.
    pub fn reset_config_for_testing(&self) {
        *self.lock_cache() = None;
        debug!("process config cache cleared");
    }

    /// Returns `true` if a record is currently cached.
    pub fn is_cached(&self) -> bool {
        self.lock_cache().is_some()
    }

    /// Picks the first non-empty `CONFIG` value in source order.
    fn resolve_json(&self) -> (String, ConfigOrigin) {
        if let Some(json) = self.host.as_deref().and_then(read_config_var) {
            debug!("using {CONFIG_ENV_VAR} from the host process environment");
            return (json, ConfigOrigin::Host);
        }
        if let Some(json) = read_config_var(self.process.as_ref()) {
            debug!("using {CONFIG_ENV_VAR} from the process environment");
            return (json, ConfigOrigin::Process);
        }
        debug!("{CONFIG_ENV_VAR} not set; using defaults");
        (DEFAULT_CONFIG_JSON.to_string(), ConfigOrigin::Default)
    }

    fn lock_cache(&self) -> MutexGuard<'_, Option<Arc<ProcessConfig>>> {
        // The guarded value is a single Option swap, so a poisoned lock still
        // holds a consistent state.
        self.cached.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn read_config_var<R: EnvReader + ?Sized>(reader: &R) -> Option<String> {
    reader.var(CONFIG_ENV_VAR).filter(|v| !v.is_empty())
}

impl fmt::Debug for ConfigProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigProvider")
            .field("has_host", &self.host.is_some())
            .field("cached", &self.is_cached())
            .finish()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
