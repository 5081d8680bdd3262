//! Environment variable sources.
//!
//! The provider reads `CONFIG` through the [`EnvReader`] capability instead
//! of calling `std::env` itself.  The host application decides which sources
//! exist:
//!
//! - [`ProcessEnv`] – this process's own environment.
//! - [`EnvSnapshot`] – an in-memory map.  Stands in for the privileged
//!   host-process environment (captured by the host and handed over), and
//!   doubles as the test source.
//!
//! # Testability
//!
//! Unit tests use the generated `MockEnvReader` to assert how often a source
//! is consulted; integration tests mutate a shared [`EnvSnapshot`].

pub mod process;
pub mod snapshot;

pub use process::ProcessEnv;
pub use snapshot::EnvSnapshot;

/// Read access to a set of environment variables.
#[cfg_attr(test, mockall::automock)]
pub trait EnvReader: Send + Sync {
    /// Returns the value of `key`, or `None` if it is not set.
    fn var(&self, key: &str) -> Option<String>;
}
