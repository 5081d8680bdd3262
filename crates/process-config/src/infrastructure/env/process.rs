//! The current process environment.

use std::env::VarError;

use tracing::warn;

use super::EnvReader;

/// [`EnvReader`] backed by `std::env::var`.
///
/// A variable whose value is not valid Unicode is treated as unset.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvReader for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        match std::env::var(key) {
            Ok(value) => Some(value),
            Err(VarError::NotPresent) => None,
            Err(VarError::NotUnicode(_)) => {
                warn!("environment variable {key} is not valid Unicode; treating as unset");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Each test owns a distinct variable name; the process environment is
    // shared by all test threads.

    #[test]
    fn test_process_env_reads_set_variable() {
        // Arrange
        let key = "PROCESS_CONFIG_TEST_PROCESS_ENV_SET";
        std::env::set_var(key, r#"{"launcherEnabled": false}"#);

        // Act
        let value = ProcessEnv.var(key);

        // Assert
        assert_eq!(value.as_deref(), Some(r#"{"launcherEnabled": false}"#));
        std::env::remove_var(key);
    }

    #[test]
    fn test_process_env_missing_variable_is_none() {
        assert_eq!(ProcessEnv.var("PROCESS_CONFIG_TEST_PROCESS_ENV_NEVER_SET"), None);
    }

    #[cfg(unix)]
    #[test]
    fn test_process_env_non_unicode_value_is_none() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let key = "PROCESS_CONFIG_TEST_PROCESS_ENV_NON_UNICODE";
        std::env::set_var(key, OsStr::from_bytes(&[0x7b, 0xff, 0x7d]));

        assert_eq!(ProcessEnv.var(key), None);
        std::env::remove_var(key);
    }
}
