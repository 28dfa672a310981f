// loose product versions
//
// --- Recognized forms ---
//
// numbers                                  example: 1.6.0
// numbers suffix                           example: 3.4.0.GA.
// numbers "b" beta                         example: 1.1b1
// numbers "rc" release-candidate           example: 1.1.rc1
// numbers "_" update                       example: 1.6.0_24, 1.6.0_u24
// any of the above "-" qualifier ...       example: 1.6.0_24-b07-334-10M3326
// qualifier ...                            example: r06
//
// "b" and "rc" are matched without regard to case. The canonical form of a
// version lower cases the marker part, qualifiers and suffix keep their case.
//
// --- Equality ---
//
// 1. Numbers are zero padded before comparing, 1.5 == 1.5.0.0
// 2. Pre-release, update marker and qualifiers must match exactly
// 3. The suffix is ignored, 2.0.0.SNAPSHOT == 2.0.0
//
// --- Ordering ---
//
// 1. Numbers are compared pairwise, without padding
// 2. Less numbers is LESS once the common numbers match, 1.0 < 1.0.1
// 3. beta < release candidate < final, then by marker number
// 4. Update marker and qualifiers do not take part, 1.5-SNAPSHOT compares
//    equal to 1.5 while not being == to it. For that reason Version is not
//    PartialOrd/Ord, sort with Version::compare.

mod error;
mod ordering;
mod parse;

pub mod maven;

pub use error::VersionError;
pub use ordering::cmp_versions;

use serde::{Deserialize, Serialize};

/// Release state carried by the first segment of a version.
///
/// Declared lowest first, so the derived ordering is
/// `Beta(_) < ReleaseCandidate(_) < Final`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PreRelease {
    Beta(u64),
    ReleaseCandidate(u64),
    #[default]
    Final,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Version {
    numbers: Vec<u64>,
    suffix: Option<String>,
    pre_release: PreRelease,
    update_marker: Option<String>,
    qualifiers: Vec<String>,
    canonical: String,
}

impl Version {

    pub fn parse(input: &str) -> Result<Self, VersionError> {
        let parts = parse::parse_parts(input)?;
        Ok(Self::from_parts(parts))
    }

    /// Like [`Version::parse`], with a missing string rejected the same way
    /// as an empty one.
    pub fn parse_optional(input: Option<&str>) -> Result<Self, VersionError> {
        input.ok_or_else(VersionError::absent).and_then(Self::parse)
    }

    fn from_parts(parts: parse::Parts) -> Self {
        let canonical = render(&parts);
        let parse::Parts { numbers, suffix, pre_release, update_marker, qualifiers } = parts;
        Self {
            numbers,
            suffix,
            pre_release,
            update_marker,
            qualifiers,
            canonical,
        }
    }

    /// The canonical form, see [`std::fmt::Display`].
    pub fn as_str(&self) -> &str {
        self.canonical.as_str()
    }

    /// All the leading numbers, major first.
    pub fn ordered_numbers(&self) -> &[u64] {
        &self.numbers
    }

    fn nth_number(&self, n: usize) -> u64 {
        self.numbers.get(n).copied().unwrap_or(0)
    }

    pub fn major_version(&self) -> u64 {
        self.nth_number(0)
    }

    pub fn minor_version(&self) -> u64 {
        self.nth_number(1)
    }

    pub fn service_pack_version(&self) -> u64 {
        self.nth_number(2)
    }

    pub fn patch_version(&self) -> u64 {
        self.nth_number(3)
    }

    /// Numbers only, "3.4.0" for "3.4.0.GA.-foo". Empty when there are no numbers.
    pub fn base_version_string(&self) -> String {
        join_numbers(&self.numbers)
    }

    /// Text stuck to the end of the numbers that was not recognized as a marker.
    pub fn version_part_suffix(&self) -> Option<&str> {
        self.suffix.as_deref()
    }

    pub fn pre_release(&self) -> PreRelease {
        self.pre_release
    }

    pub fn beta_number(&self) -> Option<u64> {
        match self.pre_release {
            PreRelease::Beta(n) => Some(n),
            _ => None,
        }
    }

    pub fn release_candidate_number(&self) -> Option<u64> {
        match self.pre_release {
            PreRelease::ReleaseCandidate(n) => Some(n),
            _ => None,
        }
    }

    pub fn is_beta(&self) -> bool {
        matches!(self.pre_release, PreRelease::Beta(_))
    }

    pub fn is_release_candidate(&self) -> bool {
        matches!(self.pre_release, PreRelease::ReleaseCandidate(_))
    }

    /// Neither beta nor release candidate.
    pub fn is_final(&self) -> bool {
        matches!(self.pre_release, PreRelease::Final)
    }

    /// What followed the first '_', usually but not always a number ("24", "u24").
    pub fn update_marker(&self) -> Option<&str> {
        self.update_marker.as_deref()
    }

    pub fn qualifiers(&self) -> &[String] {
        &self.qualifiers
    }
}

fn join_numbers(numbers: &[u64]) -> String {
    numbers.iter()
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join(".")
}

fn render(parts: &parse::Parts) -> String {

    let mut out = join_numbers(&parts.numbers);

    if let Some(suffix) = &parts.suffix {
        out.push_str(suffix);
    }

    match parts.pre_release {
        PreRelease::Beta(n) => out.push_str(&format!("b{n}")),
        PreRelease::ReleaseCandidate(n) => out.push_str(&format!("rc{n}")),
        PreRelease::Final => {}
    }

    if let Some(update_marker) = &parts.update_marker {
        out.push('_');
        out.push_str(update_marker);
    }

    for qualifier in &parts.qualifiers {
        out.push('-');
        out.push_str(qualifier);
    }

    out
}

impl std::str::FromStr for Version {
    type Err = VersionError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Version {
    type Error = VersionError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Version {
    type Error = VersionError;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<Version> for String {
    fn from(v: Version) -> Self {
        v.canonical
    }
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.canonical)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn v(s: &str) -> Version {
        Version::parse(s).unwrap()
    }

    #[test]
    fn plain() {
        let version = v("1.0");
        assert_eq!(version.major_version(), 1);
        assert_eq!(version.minor_version(), 0);
        assert_eq!(version.service_pack_version(), 0);
        assert_eq!(version.patch_version(), 0);
        assert!(version.is_final());
        assert_eq!(version.to_string(), "1.0");

        let version = v("1.1.1.1.1.1.1.1");
        assert_eq!(version.to_string(), "1.1.1.1.1.1.1.1");
        assert_eq!(version.ordered_numbers().len(), 8);
        assert!(version.is_final());

        let version = v("4.3.2.1");
        assert_eq!(
            (version.major_version(), version.minor_version(), version.service_pack_version(), version.patch_version()),
            (4, 3, 2, 1)
        );
    }

    #[test]
    fn invalid() {
        assert!(matches!(Version::parse(""), Err(VersionError::InvalidVersion(_))));
        assert!(matches!(Version::parse("   "), Err(VersionError::InvalidVersion(_))));
        assert!(matches!(Version::parse_optional(None), Err(VersionError::InvalidVersion(_))));
        assert!(matches!(Version::parse_optional(Some("")), Err(VersionError::InvalidVersion(_))));
        assert_eq!(Version::parse_optional(Some("1.2")).unwrap(), v("1.2"));
    }

    #[test]
    fn pre_release() {
        let version = v("1.1.rc1");
        assert!(version.is_release_candidate());
        assert!(!version.is_beta());
        assert!(!version.is_final());
        assert_eq!(version.release_candidate_number(), Some(1));
        assert_eq!(version.beta_number(), None);
        assert_eq!(version.to_string(), "1.1rc1");

        let version = v("1.1b1");
        assert!(version.is_beta());
        assert_eq!(version.beta_number(), Some(1));
        assert_eq!(version.pre_release(), PreRelease::Beta(1));

        let version = v("6.5b1-B1");
        assert_eq!(version.to_string(), "6.5b1-B1");
        assert!(version.is_beta());

        // a qualifier never makes a beta
        let version = v("6.5-BETA2");
        assert!(version.is_final());
        assert_eq!(version.qualifiers(), ["BETA2"]);
    }

    #[test]
    fn qualifiers() {
        let version = v("6.5-SNAPSHOT");
        assert_eq!(version.to_string(), "6.5-SNAPSHOT");
        assert!(version.is_final());

        for s in ["1.6.0_24-b07-334-10M3326", "  1.6.0_24-b07-334-10M3326   "] {
            let version = v(s);
            assert_eq!(version.to_string(), "1.6.0_24-b07-334-10M3326");
            assert_eq!(version.major_version(), 1);
            assert_eq!(version.ordered_numbers()[1], 6);
            assert_eq!(version.update_marker(), Some("24"));
            assert!(version.is_final());
            assert_eq!(version.qualifiers(), ["b07", "334", "10M3326"]);
        }

        let version = v(" 1.6.0_u24-b07-334-10M3326");
        assert_eq!(version.to_string(), "1.6.0_u24-b07-334-10M3326");
        assert_eq!(version.update_marker(), Some("u24"));
        assert_eq!(version.qualifiers(), ["b07", "334", "10M3326"]);

        let version = v("1.6.0u24-b07-334-10M3326");
        assert_eq!(version.to_string(), "1.6.0u24-b07-334-10M3326");

        let version = v("r06");
        assert_eq!(version.qualifiers(), ["r06"]);
        assert!(version.ordered_numbers().is_empty());
        assert_eq!(version.major_version(), 0);
        assert_eq!(version.base_version_string(), "");
        assert_eq!(version.to_string(), "-r06");
    }

    #[test]
    fn suffix() {
        let version = v("3.4.0.GA.");
        assert_eq!(version.version_part_suffix(), Some(".GA."));
        assert_eq!(version.base_version_string(), "3.4.0");
        assert!(version.qualifiers().is_empty());

        // OSGi style qualifier
        let version = v("2.0.0.SNAPSHOT");
        assert_eq!(version.version_part_suffix(), Some(".SNAPSHOT"));
        assert_eq!(version.base_version_string(), "2.0.0");
        assert!(version.qualifiers().is_empty());

        assert_eq!(v("1.0").version_part_suffix(), None);
        assert_eq!(v("1.6.0_24").version_part_suffix(), None);
    }

    #[test]
    fn canonical_is_a_fixed_point() {
        let inputs = [
            "1", "1.0", "1.5.0.0", "3.4.0.GA.", "2.0.0.SNAPSHOT", "1.1.rc1", "1.1RC1", "1.1b1",
            "6.5b1-B1", "6.5-SNAPSHOT", "1.6.0_24-b07-334-10M3326", "1.6.0_U24", "1.6.0u24",
            "r06", "guava-r06", "1.7R2", "2.2pre1-SLIDE-386476", "3.0-beta-4-jahia3",
            "4.0-20130129.191029-6", "  0.4.0-incubating ", "1.0b1_5", "1.0x_5",
        ];
        for s in inputs {
            let once = v(s).to_string();
            let twice = v(&once).to_string();
            assert_eq!(once, twice, "{s}");
        }
    }

    #[test]
    fn underscore_before_beta_is_lost() {
        // "1.0_b5" is a beta with an empty update marker, which renders with
        // the '_' after the beta number, where it no longer reads as one
        let once = v("1.0_b5");
        assert_eq!(once.beta_number(), Some(5));
        assert_eq!(once.update_marker(), Some(""));
        assert_eq!(once.to_string(), "1.0b5_");

        let twice = v(once.as_str());
        assert!(twice.is_final());
        assert_eq!(twice.update_marker(), Some(""));
        assert_eq!(twice.to_string(), "1.0_");
        assert_eq!(v(twice.as_str()).to_string(), "1.0_");
    }

    #[test]
    fn lower_cases_markers_only() {
        assert_eq!(v("1.0RC2").to_string(), "1.0rc2");
        assert_eq!(v("1.0B2").to_string(), "1.0b2");
        assert_eq!(v("3.4.0.GA").to_string(), "3.4.0.GA");
        assert_eq!(v("1.0-Final").to_string(), "1.0-Final");
    }

    #[test]
    fn conversions() {
        let version: Version = "1.2.3-x".parse().unwrap();
        assert_eq!(version.as_str(), "1.2.3-x");

        let version = Version::try_from("1.2").unwrap();
        assert_eq!(String::from(version), "1.2");

        assert!(Version::try_from(String::new()).is_err());
    }

    #[test]
    fn serde_as_string() {
        let version = v("1.6.0_24-b07");
        let json = serde_json::to_string(&version).unwrap();
        assert_eq!(json, "\"1.6.0_24-b07\"");

        let back: Version = serde_json::from_str(&json).unwrap();
        assert_eq!(back, version);
        assert_eq!(back.update_marker(), Some("24"));

        assert!(serde_json::from_str::<Version>("\"\"").is_err());

        let pre = serde_json::to_string(&PreRelease::ReleaseCandidate(2)).unwrap();
        assert_eq!(pre, r#"{"release_candidate":2}"#);
        assert_eq!(serde_json::to_string(&PreRelease::Final).unwrap(), "\"final\"");
    }
}
