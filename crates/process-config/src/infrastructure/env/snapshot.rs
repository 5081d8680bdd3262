//! In-memory environment snapshot.
//!
//! The host process captures its environment with [`EnvSnapshot::capture`]
//! and hands the snapshot to the processes it hosts, which consult it before
//! their own environment.  Tests build one with [`EnvSnapshot::from_pairs`]
//! and keep a clone to change values between provider calls.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use super::EnvReader;

/// A shared, mutable map of environment variables.
///
/// Clones share the same underlying map, so a value set through one clone is
/// visible through all of them.
#[derive(Debug, Clone, Default)]
pub struct EnvSnapshot {
    vars: Arc<RwLock<HashMap<String, String>>>,
}

impl EnvSnapshot {
    /// Creates an empty snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Captures the current process environment.
    ///
    /// Variables whose name or value is not valid Unicode are skipped.
    pub fn capture() -> Self {
        let vars = std::env::vars_os()
            .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
            .collect();
        Self {
            vars: Arc::new(RwLock::new(vars)),
        }
    }

    /// Builds a snapshot from explicit `(name, value)` pairs.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let vars = pairs
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self {
            vars: Arc::new(RwLock::new(vars)),
        }
    }

    /// Sets `key` to `value`, replacing any previous value.
    pub fn set(&self, key: impl Into<String>, value: impl Into<String>) {
        self.vars
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.into(), value.into());
    }

    /// Removes `key`, returning its previous value.
    pub fn remove(&self, key: &str) -> Option<String> {
        self.vars
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key)
    }

    /// Number of variables in the snapshot.
    pub fn len(&self) -> usize {
        self.vars.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// Returns `true` if the snapshot holds no variables.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl EnvReader for EnvSnapshot {
    fn var(&self, key: &str) -> Option<String> {
        self.vars
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
