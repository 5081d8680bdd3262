//! process-config library entry point.
//!
//! Memoized access to the launch configuration that the desktop shell passes
//! to each of its processes through the `CONFIG` environment variable.
//!
//! # Architecture
//!
//! ```text
//! composition root (main process / renderer bootstrap)
//!  └─ ConfigProvider           -- owns the cached Arc<ProcessConfig>
//!       ├─ host:    EnvReader  -- privileged host-process environment (optional)
//!       └─ process: EnvReader  -- this process's environment
//! ```
//!
//! The provider is an explicit value: build it once, share it as
//! `Arc<ConfigProvider>`, and pass it to whatever needs the configuration.
//!
//! ```rust
//! use process_config::{ConfigProvider, EnvSnapshot};
//!
//! let env = EnvSnapshot::from_pairs([("CONFIG", r#"{"launcherEnabled": false}"#)]);
//! let provider = ConfigProvider::new(env);
//!
//! let cfg = provider.get_config().expect("valid CONFIG");
//! assert!(!cfg.launcher_enabled);
//! ```

pub mod application;
pub mod infrastructure;

pub use application::config_provider::ConfigProvider;
pub use infrastructure::env::{EnvReader, EnvSnapshot, ProcessEnv};
pub use process_config_core::{
    ConfigError, ConfigOrigin, ProcessConfig, WindowPosition, CONFIG_ENV_VAR,
};
