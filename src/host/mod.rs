//! Host integration - obtaining and reporting the running server's version
//!
//! The core never talks to a server itself. A [HostVersionSource] supplies
//! the raw strings and [detect_version] turns them into a [Version]:
//!
//! - Modern hosts expose a Bukkit API version (`1.12.2-R0.1-SNAPSHOT`),
//!   which is parsed strictly.
//! - Hosts older than 1.0 expose only a server version string ending in
//!   `(MC: 1.x[.y])`, from which a beta version is recovered.
//!
//! Implementations:
//!
//! - [fixed::StaticHostVersion]: fixed strings, for tests and offline use
//! - [env::EnvHostVersion]: reads `BUKKIT_VERSION` / `SERVER_VERSION`

pub mod env;
pub mod fixed;
pub mod warning;

pub use env::{EnvHostVersion, BUKKIT_VERSION_VAR, SERVER_VERSION_VAR};
pub use fixed::StaticHostVersion;
pub use warning::DetectionWarning;

use crate::domain::{ComponentSet, Version};
use crate::error::{BukkitVersionError, Result};
use once_cell::sync::Lazy;
use regex::Regex;

static LEGACY_SERVER_VERSION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^.*\(MC: 1\.(?P<minor>[0-9])(?:\.(?P<patch>[0-9]))?\)$")
        .expect("legacy server grammar is a valid regex")
});

/// Source of the raw version strings reported by a server host.
///
/// All implementors must be `Send + Sync` so a detected source can be shared
/// across threads.
pub trait HostVersionSource: Send + Sync {
    /// The Bukkit API version string, `None` on hosts that predate it
    fn bukkit_version(&self) -> Option<String>;

    /// The free-form server version string, e.g. `git-Bukkit-... (MC: 1.7.3)`
    fn server_version(&self) -> Option<String>;
}

/// A successfully detected host version
#[derive(Debug, Clone, PartialEq)]
pub struct Detection {
    pub version: Version,
    pub warnings: Vec<DetectionWarning>,
}

/// Recover a beta version from a legacy `... (MC: 1.<minor>[.<patch>])` string
pub fn parse_legacy_server_version(raw: &str) -> Result<Version> {
    let captures = LEGACY_SERVER_VERSION
        .captures(raw)
        .ok_or_else(|| BukkitVersionError::undetectable(format!("unhandled beta version '{}'", raw)))?;

    // Single digit groups always fit in a u32
    let digit = |name: &str| {
        captures
            .name(name)
            .and_then(|m| m.as_str().parse::<u32>().ok())
    };

    let minor = digit("minor").ok_or_else(|| BukkitVersionError::malformed(raw))?;
    let mut components = ComponentSet::new(1, minor).beta(true);
    components.patch = digit("patch");
    components.build()
}

/// Detect the host's version.
///
/// # Returns
/// * `Ok(Detection)` - The parsed version plus any non-fatal warnings
/// * `Err` - The Bukkit version string is not a valid Bukkit API version,
///   or the host has neither string in a usable form
pub fn detect_version(source: &dyn HostVersionSource) -> Result<Detection> {
    let mut warnings = Vec::new();

    let version = match source.bukkit_version() {
        Some(raw) => Version::parse(&raw, true)?,
        None => {
            let server_version = source.server_version().ok_or_else(|| {
                BukkitVersionError::undetectable("host exposes no version string")
            })?;
            let version = parse_legacy_server_version(&server_version)?;
            tracing::warn!(%server_version, "no Bukkit API version, using legacy server string");
            warnings.push(DetectionWarning::LegacyFallback { server_version });
            version
        }
    };

    if version.revision_major().is_none() && !version.is_beta() {
        warnings.push(DetectionWarning::NoRevision {
            version: version.render_full(),
        });
    }

    tracing::debug!(
        "Detected Minecraft {}, implementing Bukkit API {}",
        version.render_plain(),
        version.render_full()
    );

    Ok(Detection { version, warnings })
}

/// Convert a Bukkit API version string to its vanilla Minecraft form.
///
/// # Example
/// ```
/// use bukkit_version::host::convert_bukkit_to_vanilla;
///
/// assert_eq!(convert_bukkit_to_vanilla("1.18-rc3-R0.1-SNAPSHOT").unwrap(), "1.18-rc3");
/// ```
pub fn convert_bukkit_to_vanilla(raw: &str) -> Result<String> {
    Ok(Version::parse(raw, true)?.render_plain())
}
