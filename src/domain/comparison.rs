//! Granularity-bounded ordering of versions
//!
//! Components are compared from most to least significant: beta flag,
//! major, minor, patch, the unified pre-release/release-candidate rank,
//! revision major and revision minor. Comparison stops at the first
//! difference or once the requested [`Precision`] has been passed.

use crate::domain::precision::Precision;
use crate::domain::version::Version;
use crate::error::{BukkitVersionError, Result};
use std::cmp::Ordering;
use std::fmt;

/// Outcome of comparing a version against another, from the first one's
/// point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Comparison {
    Newer,
    Same,
    Older,
}

impl Comparison {
    /// Swap the point of view
    pub fn invert(self) -> Self {
        match self {
            Comparison::Newer => Comparison::Older,
            Comparison::Same => Comparison::Same,
            Comparison::Older => Comparison::Newer,
        }
    }

    pub fn as_ordering(self) -> Ordering {
        match self {
            Comparison::Newer => Ordering::Greater,
            Comparison::Same => Ordering::Equal,
            Comparison::Older => Ordering::Less,
        }
    }
}

impl From<Ordering> for Comparison {
    fn from(ordering: Ordering) -> Self {
        match ordering {
            Ordering::Greater => Comparison::Newer,
            Ordering::Equal => Comparison::Same,
            Ordering::Less => Comparison::Older,
        }
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Comparison::Newer => write!(f, "newer"),
            Comparison::Same => write!(f, "same"),
            Comparison::Older => write!(f, "older"),
        }
    }
}

/// Stage of a release within the life of one version number
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Stage {
    PreRelease,
    ReleaseCandidate,
    Final,
}

/// Stage plus a reordering slot within that stage. Slot 0 is the usual
/// position; historical exceptions move qualifiers to later slots.
type Slot = (Stage, u8);

/// A release whose pre-release and release candidate numbering does not
/// follow the usual "all pre-releases, then all release candidates" order.
struct HistoricalException {
    major: u32,
    minor: u32,
    patch: u32,
    /// Where pre-releases numbered above 1 sort
    late_prerelease: Slot,
    /// Where release candidates numbered above 1 sort
    late_release_candidate: Slot,
}

/// 1.19.1 shipped as pre1, rc1, pre2, pre3, pre4, rc2, release.
const HISTORICAL_EXCEPTIONS: &[HistoricalException] = &[HistoricalException {
    major: 1,
    minor: 19,
    patch: 1,
    late_prerelease: (Stage::ReleaseCandidate, 1),
    late_release_candidate: (Stage::ReleaseCandidate, 2),
}];

/// Sort key for the pre-release/release candidate component.
///
/// Ordered by stage first, so a final release follows every release
/// candidate however large its number.
fn qualifier_key(version: &Version) -> (Slot, u32) {
    let (slot, number) = match (version.prerelease(), version.release_candidate()) {
        (Some(pre), _) => ((Stage::PreRelease, 0), pre),
        (None, Some(rc)) => ((Stage::ReleaseCandidate, 0), rc),
        (None, None) => return ((Stage::Final, 0), 0),
    };
    if version.is_beta() || number <= 1 {
        return (slot, number);
    }

    let exception = HISTORICAL_EXCEPTIONS.iter().find(|e| {
        version.major() == e.major
            && version.minor() == Some(e.minor)
            && version.patch() == Some(e.patch)
    });

    match (exception, slot.0) {
        (Some(e), Stage::PreRelease) => (e.late_prerelease, number),
        (Some(e), _) => (e.late_release_candidate, number),
        (None, _) => (slot, number),
    }
}

/// Compare an optional component present on both, neither, or one side.
fn compare_optional(
    ours: Option<u32>,
    theirs: Option<u32>,
    component: Precision,
) -> Result<Ordering> {
    match (ours, theirs) {
        (Some(a), Some(b)) => Ok(a.cmp(&b)),
        (None, None) => Ok(Ordering::Equal),
        _ => Err(BukkitVersionError::PrecisionMismatch { component }),
    }
}

type Extractor = fn(&Version, &Version) -> Result<Ordering>;

fn major(a: &Version, b: &Version) -> Result<Ordering> {
    Ok(a.major().cmp(&b.major()))
}

fn minor(a: &Version, b: &Version) -> Result<Ordering> {
    compare_optional(a.minor(), b.minor(), Precision::Minor)
}

// "1.8" is the same release as "1.8.0"
fn patch(a: &Version, b: &Version) -> Result<Ordering> {
    Ok(a.patch().unwrap_or(0).cmp(&b.patch().unwrap_or(0)))
}

fn pre_or_rc(a: &Version, b: &Version) -> Result<Ordering> {
    Ok(qualifier_key(a).cmp(&qualifier_key(b)))
}

fn revision_major(a: &Version, b: &Version) -> Result<Ordering> {
    compare_optional(
        a.revision_major(),
        b.revision_major(),
        Precision::RevisionMajor,
    )
}

fn revision_minor(a: &Version, b: &Version) -> Result<Ordering> {
    compare_optional(
        a.revision_minor(),
        b.revision_minor(),
        Precision::RevisionMinor,
    )
}

/// Numeric components in order of significance, each tagged with the
/// precision level it belongs to.
const CASCADE: [(Precision, Extractor); 6] = [
    (Precision::Major, major),
    (Precision::Minor, minor),
    (Precision::Patch, patch),
    (Precision::PreOrRc, pre_or_rc),
    (Precision::RevisionMajor, revision_major),
    (Precision::RevisionMinor, revision_minor),
];

impl Version {
    /// Compare against `other`, ignoring components finer than `precision`.
    ///
    /// Any non-beta version is newer than any beta version, whatever their
    /// numbers say.
    ///
    /// # Returns
    /// * `Ok(Comparison)` - `Newer` if `self` is newer than `other`
    /// * `Err(PrecisionMismatch)` - A component within `precision` is present
    ///   on one side only
    ///
    /// # Example
    /// ```
    /// use bukkit_version::{Comparison, Precision, Version};
    ///
    /// let a = Version::parse("1.8.8-R0.1-SNAPSHOT", true).unwrap();
    /// let b = Version::parse("1.8-R0.1-SNAPSHOT", true).unwrap();
    /// assert_eq!(a.compare(&b, Precision::Patch).unwrap(), Comparison::Newer);
    /// assert_eq!(a.compare(&b, Precision::Minor).unwrap(), Comparison::Same);
    /// ```
    pub fn compare(&self, other: &Version, precision: Precision) -> Result<Comparison> {
        match (self.is_beta(), other.is_beta()) {
            (false, true) => return Ok(Comparison::Newer),
            (true, false) => return Ok(Comparison::Older),
            _ => {}
        }

        for (component, extract) in CASCADE {
            if !precision.includes(component) {
                break;
            }
            let ordering = extract(self, other)?;
            if ordering != Ordering::Equal {
                return Ok(ordering.into());
            }
        }

        Ok(Comparison::Same)
    }

    /// Compare at the finest precision
    pub fn compare_full(&self, other: &Version) -> Result<Comparison> {
        self.compare(other, Precision::default())
    }

    /// Whether `self` is at least as new as `other` at the given precision
    pub fn is_at_least(&self, other: &Version, precision: Precision) -> Result<bool> {
        Ok(self.compare(other, precision)? != Comparison::Older)
    }
}
