//! Error types for pluginlock
//!
//! All modules use `PluginLockResult<T>` as their return type.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for pluginlock operations
pub type PluginLockResult<T> = Result<T, PluginLockError>;

/// All errors that can occur in pluginlock
#[derive(Error, Debug)]
pub enum PluginLockError {
    // Manifest errors
    #[error("Failed to serialize plugin lock as JSON: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Failed to write plugin lock file {path}: {source}")]
    Persist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Refusing to lock {0} with an empty digest")]
    EmptyDigest(String),

    // Plugin errors
    #[error("Invalid plugin spec '{0}', expected NAME=PATH")]
    InvalidPluginSpec(String),

    #[error("Plugin not locked: {0}")]
    PluginNotLocked(String),

    #[error("Digest mismatch for {name}: expected {expected}, got {actual}")]
    DigestMismatch {
        name: String,
        expected: String,
        actual: String,
    },

    // Configuration errors
    #[error("Invalid configuration at {path}: {reason}")]
    ConfigInvalid { path: PathBuf, reason: String },

    #[error("Failed to create config directory {path}: {source}")]
    ConfigDirCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    // IO errors
    #[error("IO error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

impl PluginLockError {
    /// Create an IO error with context
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Get actionable hint for the error
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::PluginNotLocked(_) => Some("Run: pluginlock lock NAME=PATH"),
            Self::DigestMismatch { .. } => {
                Some("The plugin binary changed since it was locked. Re-lock it if the change is expected")
            }
            Self::InvalidPluginSpec(_) => Some("Example: pluginlock lock acme/widget=./plugin-widget"),
            Self::ConfigInvalid { .. } => Some("Run: pluginlock config init --force"),
            _ => None,
        }
    }
}
