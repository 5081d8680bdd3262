//! Error and provenance types for the `CONFIG` payload.

use std::fmt;

use thiserror::Error;

/// Where the decoded `CONFIG` text came from.
///
/// Sources are consulted in declaration order; the first one holding a
/// non-empty value wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigOrigin {
    /// The privileged host-process environment (the process that launched us).
    Host,
    /// This process's own environment.
    Process,
    /// Neither source had a value; the literal `{}` was used.
    Default,
}

impl fmt::Display for ConfigOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Host => "host process environment",
            Self::Process => "process environment",
            Self::Default => "built-in default",
        };
        f.write_str(label)
    }
}

/// Error type for process configuration decoding and encoding.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The `CONFIG` text is not valid JSON.
    ///
    /// This is the only error decoding can produce; wrong-shaped fields are
    /// defaulted instead.
    #[error("CONFIG from the {origin} is not valid JSON: {source}")]
    Malformed {
        origin: ConfigOrigin,
        #[source]
        source: serde_json::Error,
    },

    /// The record could not be serialized back to JSON.
    #[error("failed to encode process config as JSON: {0}")]
    Encode(#[source] serde_json::Error),
}

impl ConfigError {
    /// Returns the origin of the rejected text for [`ConfigError::Malformed`].
    pub fn origin(&self) -> Option<ConfigOrigin> {
        match self {
            Self::Malformed { origin, .. } => Some(*origin),
            Self::Encode(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_message_names_origin() {
        // Arrange
        let source = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();

        // Act
        let err = ConfigError::Malformed {
            origin: ConfigOrigin::Host,
            source,
        };

        // Assert
        let msg = err.to_string();
        assert!(msg.contains("host process environment"), "got: {msg}");
        assert_eq!(err.origin(), Some(ConfigOrigin::Host));
    }

    #[test]
    fn test_malformed_exposes_json_error_as_source() {
        use std::error::Error as _;

        let source = serde_json::from_str::<serde_json::Value>("[1,").unwrap_err();
        let err = ConfigError::Malformed {
            origin: ConfigOrigin::Process,
            source,
        };

        assert!(err.source().is_some());
    }
}
