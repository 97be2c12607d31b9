use std::fmt;

/// Non-fatal issues met while detecting the host's version.
/// These should be reported to the user, but detection still succeeded.
#[derive(Debug, Clone, PartialEq)]
pub enum DetectionWarning {
    /// The host exposes no Bukkit API version; the version was recovered
    /// from the legacy `(MC: 1.x.y)` server string and is assumed beta
    LegacyFallback { server_version: String },
    /// The detected version predates the revision suffix, so comparisons
    /// finer than the pre-release level will fail against modern versions
    NoRevision { version: String },
}

impl fmt::Display for DetectionWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DetectionWarning::LegacyFallback { server_version } => {
                write!(
                    f,
                    "Host has no Bukkit API version; derived from legacy server string '{}'",
                    server_version
                )
            }
            DetectionWarning::NoRevision { version } => {
                write!(f, "Version '{}' carries no revision number", version)
            }
        }
    }
}
