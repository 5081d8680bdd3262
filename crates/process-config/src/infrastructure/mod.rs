//! Infrastructure layer.
//!
//! Contains OS-facing adapters: environment variable sources and the
//! `tracing` subscriber setup used by the composition root.
//!
//! **Dependency rule**: this layer may depend on `process_config_core`, but
//! MUST NOT be imported by the core crate.

pub mod env;
pub mod logging;
