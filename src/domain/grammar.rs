//! Shape recognition for Bukkit and vanilla Minecraft version strings
//!
//! Accepts vanilla versions (`1.6.4`, `1.12.2-pre2`, `1.18-rc4`, `b1.7.3`) and
//! Bukkit API versions, which are vanilla versions usually suffixed with a
//! revision number and always with a snapshot marker (`1.2.5-R5.2-SNAPSHOT`,
//! `1.14-pre5-SNAPSHOT`). No semantic validation happens here beyond shape.

use crate::error::{BukkitVersionError, Result};
use once_cell::sync::Lazy;
use regex::Regex;

/// Trailing marker carried by every Bukkit API version string
pub const SNAPSHOT_MARKER: &str = "-SNAPSHOT";

/// Every later group is nested inside the minor group, so a minor-less
/// string can never carry a patch, qualifier, revision or snapshot marker.
/// Multi-digit numbers may not carry leading zeros, so every accepted string
/// renders back to itself.
static IDENTIFIER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"^(?P<beta>b)?(?P<major>0|[1-9][0-9]*)",
        r"(?:\.(?P<minor>0|[1-9][0-9]*)",
        r"(?:\.(?P<patch>0|[1-9][0-9]*))?",
        r"(?:-pre(?P<pre>[0-9])|-rc(?P<rc>0|[1-9][0-9]*))?",
        r"(?:-R(?P<revmajor>[0-9])(?:\.(?P<revminor>[0-9]))?)?",
        r"(?P<snapshot>-SNAPSHOT)?",
        r")?$",
    ))
    .expect("identifier grammar is a valid regex")
});

/// Named substrings extracted from a recognized identifier.
///
/// Borrowed from the input; numeric fields are still unparsed digit runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawComponents<'a> {
    pub beta: bool,
    pub major: &'a str,
    pub minor: Option<&'a str>,
    pub patch: Option<&'a str>,
    pub prerelease: Option<&'a str>,
    pub release_candidate: Option<&'a str>,
    pub revision_major: Option<&'a str>,
    pub revision_minor: Option<&'a str>,
    pub snapshot: bool,
}

/// Matches `raw` against the identifier grammar.
///
/// # Arguments
/// * `raw` - Version string to recognize, `None` when the caller had nothing
/// * `strict` - Require the trailing `-SNAPSHOT` build marker
///
/// # Returns
/// * `Ok(RawComponents)` - The string matched end to end
/// * `Err(MissingInput)` - `raw` was `None`
/// * `Err(MalformedIdentifier)` - The string does not match the grammar
/// * `Err(NotABuildIdentifier)` - Matched, but `strict` and no marker
pub fn recognize(raw: Option<&str>, strict: bool) -> Result<RawComponents<'_>> {
    let raw = raw.ok_or(BukkitVersionError::MissingInput)?;

    let captures = match IDENTIFIER.captures(raw) {
        Some(captures) => captures,
        None => {
            tracing::debug!(input = raw, "rejected by identifier grammar");
            return Err(BukkitVersionError::malformed(raw));
        }
    };

    let group = |name: &str| captures.name(name).map(|m| m.as_str());
    let snapshot = group("snapshot").is_some();

    if strict && !snapshot {
        return Err(BukkitVersionError::not_build(raw));
    }

    Ok(RawComponents {
        beta: group("beta").is_some(),
        major: group("major").ok_or_else(|| BukkitVersionError::malformed(raw))?,
        minor: group("minor"),
        patch: group("patch"),
        prerelease: group("pre"),
        release_candidate: group("rc"),
        revision_major: group("revmajor"),
        revision_minor: group("revminor"),
        snapshot,
    })
}

/// Whether `raw` is a well-formed identifier in the given mode
pub fn is_valid(raw: &str, strict: bool) -> bool {
    recognize(Some(raw), strict).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recognize_full_bukkit_string() {
        let raw = recognize(Some("1.18-rc3-R0.1-SNAPSHOT"), true).unwrap();
        assert!(!raw.beta);
        assert_eq!(raw.major, "1");
        assert_eq!(raw.minor, Some("18"));
        assert_eq!(raw.patch, None);
        assert_eq!(raw.prerelease, None);
        assert_eq!(raw.release_candidate, Some("3"));
        assert_eq!(raw.revision_major, Some("0"));
        assert_eq!(raw.revision_minor, Some("1"));
        assert!(raw.snapshot);
    }

    #[test]
    fn test_recognize_beta_prefix() {
        let raw = recognize(Some("b1.7.3"), false).unwrap();
        assert!(raw.beta);
        assert_eq!(raw.minor, Some("7"));
        assert_eq!(raw.patch, Some("3"));
        assert!(!raw.snapshot);
    }

    #[test]
    fn test_recognize_major_only_lenient() {
        let raw = recognize(Some("1"), false).unwrap();
        assert_eq!(raw.major, "1");
        assert_eq!(raw.minor, None);
    }

    #[test]
    fn test_missing_input() {
        assert!(matches!(
            recognize(None, false),
            Err(BukkitVersionError::MissingInput)
        ));
    }

    #[test]
    fn test_empty_and_garbage_are_malformed() {
        for raw in ["", "1.12.2-R0.1-SNAPSHOTx", "v1.12", "1.12 ", "x1.12"] {
            assert!(
                matches!(
                    recognize(Some(raw), false),
                    Err(BukkitVersionError::MalformedIdentifier(_))
                ),
                "'{}' should be malformed",
                raw
            );
        }
    }

    #[test]
    fn test_strict_requires_snapshot() {
        assert!(matches!(
            recognize(Some("1.12.2"), true),
            Err(BukkitVersionError::NotABuildIdentifier(_))
        ));
        assert!(recognize(Some("1.12.2"), false).is_ok());
    }

    #[test]
    fn test_nesting_rejects_minorless_suffixes() {
        assert!(!is_valid("1-SNAPSHOT", false));
        assert!(!is_valid("1-pre1", false));
        assert!(!is_valid("1-R0.1-SNAPSHOT", false));
    }

    #[test]
    fn test_qualifiers_are_mutually_exclusive() {
        assert!(!is_valid("1.19.1-pre1-rc1", false));
        assert!(!is_valid("1.19.1-rc1-pre1", false));
    }

    #[test]
    fn test_single_digit_fields() {
        assert!(!is_valid("1.12-pre10", false));
        assert!(is_valid("1.18-rc12", false));
        assert!(!is_valid("1.8-R10.1-SNAPSHOT", true));
        assert!(!is_valid("1.8-R0.12-SNAPSHOT", true));
        assert!(is_valid("1.8-R1-SNAPSHOT", true));
    }

    #[test]
    fn test_revision_separator_is_a_literal_dot() {
        assert!(!is_valid("1.8-R0x1-SNAPSHOT", true));
    }

    #[test]
    fn test_leading_zeros_rejected() {
        assert!(!is_valid("01.8-SNAPSHOT", true));
        assert!(!is_valid("1.08", false));
        assert!(!is_valid("1.18-rc03", false));
        assert!(is_valid("1.0.0", false));
        assert!(is_valid("1.10", false));
    }

    #[test]
    fn test_non_ascii_digits_rejected() {
        assert!(!is_valid("1.١٢", false));
    }
}
