//! Domain types for the process configuration.
//!
//! Pure data with no I/O: nothing in this module reads the environment or
//! parses text.  The `decode` module builds these types; the application
//! layer in `process-config` caches and shares them.

pub mod process_config;
pub mod window_position;
