//! Application layer.
//!
//! Holds the process-wide configuration state.  Depends on the core domain
//! and on the [`EnvReader`](crate::infrastructure::env::EnvReader) capability,
//! never on a concrete environment.

pub mod config_provider;
