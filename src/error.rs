use thiserror::Error;

use crate::domain::Precision;

/// Unified error type for bukkit-version operations
#[derive(Error, Debug)]
pub enum BukkitVersionError {
    #[error("Missing input: no version string was supplied")]
    MissingInput,

    #[error("Malformed identifier: '{0}'")]
    MalformedIdentifier(String),

    #[error("Not a build identifier: '{0}' lacks the -SNAPSHOT marker")]
    NotABuildIdentifier(String),

    #[error("Missing required field: {0}")]
    MissingRequiredField(&'static str),

    #[error("Conflicting qualifiers: pre-releases and release candidates are mutually exclusive")]
    ConflictingQualifiers,

    #[error("Precision mismatch: only one side has a {component} component")]
    PrecisionMismatch { component: Precision },

    #[error("Host version undetectable: {0}")]
    UndetectableHost(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in bukkit-version
pub type Result<T> = std::result::Result<T, BukkitVersionError>;

impl BukkitVersionError {
    /// Create a malformed identifier error for the offending input
    pub fn malformed(raw: impl Into<String>) -> Self {
        BukkitVersionError::MalformedIdentifier(raw.into())
    }

    /// Create a not-a-build-identifier error for the offending input
    pub fn not_build(raw: impl Into<String>) -> Self {
        BukkitVersionError::NotABuildIdentifier(raw.into())
    }

    /// Create a host detection error with context
    pub fn undetectable(msg: impl Into<String>) -> Self {
        BukkitVersionError::UndetectableHost(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        BukkitVersionError::Config(msg.into())
    }
}

impl From<toml::de::Error> for BukkitVersionError {
    fn from(err: toml::de::Error) -> Self {
        BukkitVersionError::Config(err.to_string())
    }
}
