use crate::domain::grammar::{self, RawComponents, SNAPSHOT_MARKER};
use crate::error::{BukkitVersionError, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Added to a release candidate number when ranking it against pre-releases
pub const RC_OFFSET: u64 = 10_000;

/// Rank given to a final release, after every pre-release and release candidate
pub const FINAL_RELEASE_RANK: u64 = RC_OFFSET * 2;

/// A Minecraft or Bukkit API version.
///
/// Built once, either by parsing or from explicit components, and never
/// mutated afterwards. `Display` renders the Bukkit API form; the alternate
/// flag (`{:#}`) renders the vanilla form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Version {
    beta: bool,
    major: u32,
    minor: Option<u32>,
    patch: Option<u32>,
    prerelease: Option<u32>,
    release_candidate: Option<u32>,
    revision_major: Option<u32>,
    revision_minor: Option<u32>,
}

/// Explicit components for [`Version::from_components`].
///
/// `major` and `minor` are optional here only so that their absence can be
/// reported as an error instead of being unrepresentable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComponentSet {
    pub beta: bool,
    pub major: Option<u32>,
    pub minor: Option<u32>,
    pub patch: Option<u32>,
    pub prerelease: Option<u32>,
    pub release_candidate: Option<u32>,
    pub revision_major: Option<u32>,
    pub revision_minor: Option<u32>,
}

impl ComponentSet {
    /// Start a component set with the two required fields filled in
    pub fn new(major: u32, minor: u32) -> Self {
        ComponentSet {
            major: Some(major),
            minor: Some(minor),
            ..Default::default()
        }
    }

    pub fn beta(mut self, beta: bool) -> Self {
        self.beta = beta;
        self
    }

    pub fn patch(mut self, patch: u32) -> Self {
        self.patch = Some(patch);
        self
    }

    pub fn prerelease(mut self, prerelease: u32) -> Self {
        self.prerelease = Some(prerelease);
        self
    }

    pub fn release_candidate(mut self, release_candidate: u32) -> Self {
        self.release_candidate = Some(release_candidate);
        self
    }

    /// Set the revision suffix (`-R<major>[.<minor>]`)
    pub fn revision(mut self, major: u32, minor: Option<u32>) -> Self {
        self.revision_major = Some(major);
        self.revision_minor = minor;
        self
    }

    /// Validate and freeze into a [`Version`]
    pub fn build(self) -> Result<Version> {
        Version::from_components(self)
    }
}

impl Version {
    /// Parse a version string.
    ///
    /// # Arguments
    /// * `raw` - Version string (e.g. "1.12.2-R0.1-SNAPSHOT" or "1.19.1-pre3")
    /// * `strict` - `true` to require a Bukkit API string (with `-SNAPSHOT`),
    ///   `false` to also accept vanilla Minecraft strings
    ///
    /// # Example
    /// ```
    /// use bukkit_version::Version;
    ///
    /// let v = Version::parse("1.8-R0.1-SNAPSHOT", true).unwrap();
    /// assert_eq!(v.minor(), Some(8));
    /// assert_eq!(v.render_plain(), "1.8");
    /// ```
    pub fn parse(raw: &str, strict: bool) -> Result<Self> {
        Self::parse_opt(Some(raw), strict)
    }

    /// Like [`Version::parse`], but reports `MissingInput` for `None`
    pub fn parse_opt(raw: Option<&str>, strict: bool) -> Result<Self> {
        let components = grammar::recognize(raw, strict)?;
        Self::from_raw(raw.unwrap_or_default(), &components)
    }

    fn from_raw(raw: &str, components: &RawComponents<'_>) -> Result<Self> {
        let number = |digits: &str| {
            digits
                .parse::<u32>()
                .map_err(|_| BukkitVersionError::malformed(raw))
        };
        let optional = |digits: Option<&str>| digits.map(number).transpose();

        Ok(Version {
            beta: components.beta,
            major: number(components.major)?,
            minor: optional(components.minor)?,
            patch: optional(components.patch)?,
            prerelease: optional(components.prerelease)?,
            release_candidate: optional(components.release_candidate)?,
            revision_major: optional(components.revision_major)?,
            revision_minor: optional(components.revision_minor)?,
        })
    }

    /// Build a version from explicit components.
    ///
    /// # Returns
    /// * `Err(MissingRequiredField)` - `major` or `minor` is absent
    /// * `Err(ConflictingQualifiers)` - Both a pre-release and a release
    ///   candidate number were supplied
    pub fn from_components(components: ComponentSet) -> Result<Self> {
        let major = components
            .major
            .ok_or(BukkitVersionError::MissingRequiredField("major"))?;
        let minor = components
            .minor
            .ok_or(BukkitVersionError::MissingRequiredField("minor"))?;

        if components.prerelease.is_some() && components.release_candidate.is_some() {
            return Err(BukkitVersionError::ConflictingQualifiers);
        }

        Ok(Version {
            beta: components.beta,
            major,
            minor: Some(minor),
            patch: components.patch,
            prerelease: components.prerelease,
            release_candidate: components.release_candidate,
            revision_major: components.revision_major,
            // A revision minor cannot be rendered without its major
            revision_minor: components.revision_major.and(components.revision_minor),
        })
    }

    pub fn is_beta(&self) -> bool {
        self.beta
    }

    pub fn major(&self) -> u32 {
        self.major
    }

    pub fn minor(&self) -> Option<u32> {
        self.minor
    }

    pub fn patch(&self) -> Option<u32> {
        self.patch
    }

    pub fn prerelease(&self) -> Option<u32> {
        self.prerelease
    }

    pub fn release_candidate(&self) -> Option<u32> {
        self.release_candidate
    }

    pub fn revision_major(&self) -> Option<u32> {
        self.revision_major
    }

    pub fn revision_minor(&self) -> Option<u32> {
        self.revision_minor
    }

    /// Whether this is a final release (neither pre-release nor release candidate)
    pub fn is_final_release(&self) -> bool {
        self.prerelease.is_none() && self.release_candidate.is_none()
    }

    /// Single ordering key covering both qualifiers.
    ///
    /// Pre-releases rank by their own number, release candidates after all
    /// pre-releases (`rc + RC_OFFSET`), final releases after both
    /// (`FINAL_RELEASE_RANK`). Release candidates numbered `RC_OFFSET` or
    /// above collide with the final release here; [`Version::compare`]
    /// orders qualifiers by stage and does not use this value.
    pub fn pre_or_rc_rank(&self) -> u64 {
        match (self.prerelease, self.release_candidate) {
            (Some(pre), _) => u64::from(pre),
            (None, Some(rc)) => u64::from(rc) + RC_OFFSET,
            (None, None) => FINAL_RELEASE_RANK,
        }
    }

    /// Vanilla Minecraft form, e.g. `1.18-rc3` or `b1.7.3`
    pub fn render_plain(&self) -> String {
        let mut out = String::new();
        if self.beta {
            out.push('b');
        }
        out.push_str(&self.major.to_string());
        if let Some(minor) = self.minor {
            out.push_str(&format!(".{}", minor));
        }
        if let Some(patch) = self.patch {
            out.push_str(&format!(".{}", patch));
        }
        if let Some(pre) = self.prerelease {
            out.push_str(&format!("-pre{}", pre));
        } else if let Some(rc) = self.release_candidate {
            out.push_str(&format!("-rc{}", rc));
        }
        out
    }

    /// Bukkit API form, e.g. `1.18-rc3-R0.1-SNAPSHOT`
    pub fn render_full(&self) -> String {
        let mut out = self.render_plain();
        if let Some(revision_major) = self.revision_major {
            out.push_str(&format!("-R{}", revision_major));
            if let Some(revision_minor) = self.revision_minor {
                out.push_str(&format!(".{}", revision_minor));
            }
        }
        out.push_str(SNAPSHOT_MARKER);
        out
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.write_str(&self.render_plain())
        } else {
            f.write_str(&self.render_full())
        }
    }
}

/// Parses strictly; use [`Version::parse`] for vanilla strings.
impl FromStr for Version {
    type Err = BukkitVersionError;

    fn from_str(s: &str) -> Result<Self> {
        Version::parse(s, true)
    }
}

impl Serialize for Version {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        // Without a minor number the Bukkit form is not parseable again
        if self.minor.is_some() {
            serializer.serialize_str(&self.render_full())
        } else {
            serializer.serialize_str(&self.render_plain())
        }
    }
}

impl<'de> Deserialize<'de> for Version {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Version::parse(&raw, false).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_parse() {
        let v = Version::parse("1.9.4-R0.1-SNAPSHOT", true).unwrap();
        assert_eq!(v.major(), 1);
        assert_eq!(v.minor(), Some(9));
        assert_eq!(v.patch(), Some(4));
        assert_eq!(v.revision_major(), Some(0));
        assert_eq!(v.revision_minor(), Some(1));
        assert!(!v.is_beta());
    }

    #[test]
    fn test_version_parse_lenient_vanilla() {
        let v = Version::parse("1.19.1-pre3", false).unwrap();
        assert_eq!(v.prerelease(), Some(3));
        assert_eq!(v.release_candidate(), None);
        assert_eq!(v.revision_major(), None);
    }

    #[test]
    fn test_version_from_str_is_strict() {
        assert!("1.12.2".parse::<Version>().is_err());
        assert!("1.12.2-R0.1-SNAPSHOT".parse::<Version>().is_ok());
    }

    #[test]
    fn test_version_parse_overflow_is_malformed() {
        assert!(matches!(
            Version::parse("1.99999999999-SNAPSHOT", true),
            Err(BukkitVersionError::MalformedIdentifier(_))
        ));
    }

    #[test]
    fn test_parse_opt_none() {
        assert!(matches!(
            Version::parse_opt(None, true),
            Err(BukkitVersionError::MissingInput)
        ));
    }

    #[test]
    fn test_from_components_requires_major_and_minor() {
        let missing_minor = ComponentSet {
            major: Some(1),
            ..Default::default()
        };
        assert!(matches!(
            Version::from_components(missing_minor),
            Err(BukkitVersionError::MissingRequiredField("minor"))
        ));

        let missing_major = ComponentSet {
            minor: Some(12),
            ..Default::default()
        };
        assert!(matches!(
            Version::from_components(missing_major),
            Err(BukkitVersionError::MissingRequiredField("major"))
        ));
    }

    #[test]
    fn test_from_components_conflicting_qualifiers() {
        let result = ComponentSet::new(1, 19)
            .prerelease(1)
            .release_candidate(1)
            .build();
        assert!(matches!(
            result,
            Err(BukkitVersionError::ConflictingQualifiers)
        ));
    }

    #[test]
    fn test_from_components_renders() {
        let v = ComponentSet::new(1, 2)
            .patch(5)
            .revision(5, Some(2))
            .build()
            .unwrap();
        assert_eq!(v.render_plain(), "1.2.5");
        assert_eq!(v.render_full(), "1.2.5-R5.2-SNAPSHOT");
    }

    #[test]
    fn test_minimal_components_render_undecorated() {
        let v = ComponentSet::new(1, 14).build().unwrap();
        assert_eq!(v.render_full(), "1.14-SNAPSHOT");
    }

    #[test]
    fn test_revision_minor_dropped_without_major() {
        let v = ComponentSet {
            major: Some(1),
            minor: Some(8),
            revision_minor: Some(1),
            ..Default::default()
        }
        .build()
        .unwrap();
        assert_eq!(v.revision_minor(), None);
    }

    #[test]
    fn test_render_beta() {
        let v = Version::parse("b1.7.3", false).unwrap();
        assert!(v.is_beta());
        assert_eq!(v.render_plain(), "b1.7.3");
        assert_eq!(v.render_full(), "b1.7.3-SNAPSHOT");
    }

    #[test]
    fn test_pre_or_rc_rank() {
        let pre = Version::parse("1.14-pre5", false).unwrap();
        let rc = Version::parse("1.14-rc1", false).unwrap();
        let release = Version::parse("1.14", false).unwrap();
        assert_eq!(pre.pre_or_rc_rank(), 5);
        assert_eq!(rc.pre_or_rc_rank(), 10_001);
        assert_eq!(release.pre_or_rc_rank(), FINAL_RELEASE_RANK);
        assert!(release.is_final_release());
    }

    #[test]
    fn test_display_forms() {
        let v = Version::parse("1.13-pre7-R0.1-SNAPSHOT", true).unwrap();
        assert_eq!(v.to_string(), "1.13-pre7-R0.1-SNAPSHOT");
        assert_eq!(format!("{:#}", v), "1.13-pre7");
    }

    #[test]
    fn test_serde_as_string() {
        #[derive(Serialize, Deserialize)]
        struct Wrapper {
            version: Version,
        }

        let wrapper = Wrapper {
            version: Version::parse("1.12.2", false).unwrap(),
        };
        let encoded = toml::to_string(&wrapper).unwrap();
        assert!(encoded.contains("\"1.12.2-SNAPSHOT\""));

        let decoded: Wrapper = toml::from_str(&encoded).unwrap();
        assert_eq!(decoded.version, wrapper.version);
    }

    #[test]
    fn test_deserialize_rejects_garbage() {
        #[derive(Debug, Deserialize)]
        struct Wrapper {
            #[allow(dead_code)]
            version: Version,
        }
        assert!(toml::from_str::<Wrapper>("version = \"one point eight\"").is_err());
    }
}
