//! # process-config-core
//!
//! Shared library for the desktop shell's process configuration: the typed
//! [`ProcessConfig`] record, the decoder that maps the `CONFIG` environment
//! variable's JSON into it, and the error type for a rejected payload.
//!
//! This crate is used by every process of the application (main process and
//! renderers).  It has no dependencies on OS APIs, environment access, or
//! global state: callers hand it a string and get back a record.
//!
//! # Architecture overview
//!
//! - **`domain`** – The record itself.  [`ProcessConfig`] is a flat struct
//!   read by the window manager (last window position), plugin loader
//!   (disabled plugins, extra plugin paths), launcher and updater.
//!
//! - **`decode`** – How untrusted JSON becomes a record.  Parsing is the only
//!   step that can fail; every field is then defaulted independently so a
//!   wrong-shaped property never rejects the whole payload.

pub mod decode;
pub mod domain;

// Re-export the most-used types at the crate root so callers can write
// `process_config_core::ProcessConfig` instead of the full module path.
pub use decode::{
    decode_process_config, ConfigError, ConfigOrigin, CONFIG_ENV_VAR, DEFAULT_CONFIG_JSON,
};
pub use domain::process_config::ProcessConfig;
pub use domain::window_position::WindowPosition;
