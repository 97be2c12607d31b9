//! Comparison granularity, ordered from coarsest to finest

use crate::error::{BukkitVersionError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The least significant version component a comparison will look at.
///
/// Variants are declared coarsest first so the derived `Ord` matches
/// significance: `Major < Minor < ... < RevisionMinor`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Precision {
    Major,
    Minor,
    Patch,
    /// Either the pre-release or the release candidate number
    PreOrRc,
    RevisionMajor,
    #[default]
    RevisionMinor,
}

impl Precision {
    /// All levels, coarsest first
    pub const ALL: [Precision; 6] = [
        Precision::Major,
        Precision::Minor,
        Precision::Patch,
        Precision::PreOrRc,
        Precision::RevisionMajor,
        Precision::RevisionMinor,
    ];

    /// The snake_case name used in config files and on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            Precision::Major => "major",
            Precision::Minor => "minor",
            Precision::Patch => "patch",
            Precision::PreOrRc => "pre_or_rc",
            Precision::RevisionMajor => "revision_major",
            Precision::RevisionMinor => "revision_minor",
        }
    }

    /// Whether a comparison bounded at `self` should still look at `component`
    pub fn includes(&self, component: Precision) -> bool {
        component <= *self
    }
}

impl FromStr for Precision {
    type Err = BukkitVersionError;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_lowercase().replace('-', "_");
        Precision::ALL
            .into_iter()
            .find(|p| p.as_str() == normalized)
            .ok_or_else(|| BukkitVersionError::config(format!("Unknown precision level: '{}'", s)))
    }
}

impl fmt::Display for Precision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering_is_coarse_to_fine() {
        assert!(Precision::Major < Precision::Minor);
        assert!(Precision::Patch < Precision::PreOrRc);
        assert!(Precision::RevisionMajor < Precision::RevisionMinor);
        let mut sorted = Precision::ALL;
        sorted.sort();
        assert_eq!(sorted, Precision::ALL);
    }

    #[test]
    fn test_default_is_finest() {
        assert_eq!(Precision::default(), Precision::RevisionMinor);
    }

    #[test]
    fn test_includes() {
        assert!(Precision::Patch.includes(Precision::Major));
        assert!(Precision::Patch.includes(Precision::Patch));
        assert!(!Precision::Patch.includes(Precision::PreOrRc));
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("pre_or_rc".parse::<Precision>().unwrap(), Precision::PreOrRc);
        assert_eq!(
            "Revision-Major".parse::<Precision>().unwrap(),
            Precision::RevisionMajor
        );
        assert!("build".parse::<Precision>().is_err());
    }

    #[test]
    fn test_display_matches_parse() {
        for p in Precision::ALL {
            assert_eq!(p.to_string().parse::<Precision>().unwrap(), p);
        }
    }
}
