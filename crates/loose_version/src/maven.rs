// Maven artifact file names and meta-versions
//
//   geronimo-stax-api_1.0_spec-1.0.1    -> ("geronimo-stax-api_1.0_spec", "1.0.1")
//   abdera-i18n-0.4.0-incubating        -> ("abdera-i18n", "0.4.0-incubating")
//   deployers-4.0-20130129.191029-6     -> ("deployers", "4.0-20130129.191029-6")
//   guava-r06                           -> no version
//
// The name is the shortest prefix that is followed by '-' and then either
// nothing or something starting with a numeric run.

use std::sync::LazyLock;

use regex::Regex;

use crate::Version;

pub const MAVEN_LATEST_VERSION: &str = "LATEST";
pub const MAVEN_SNAPSHOT_VERSION: &str = "SNAPSHOT";

static FILE_NAME_VERSION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.*?)-(([0-9.]*[0-9]+)(.*))?$").unwrap());

static TIMESTAMPED_SNAPSHOT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.*)-([0-9]{8}.[0-9]{6})-([0-9]+)$").unwrap());

/// Splits a file name (without its extension) into artifact name and version candidate.
///
/// The candidate is `None` when the name ends in a bare '-'.
pub fn split_file_name(file_name: &str) -> Option<(&str, Option<&str>)> {
    let caps = FILE_NAME_VERSION_RE.captures(file_name)?;
    let name = caps.get(1).map_or("", |m| m.as_str());
    let candidate = caps.get(2).map(|m| m.as_str()).filter(|s| !s.is_empty());
    Some((name, candidate))
}

/// Version of an artifact, taken from its file name without the extension.
///
/// `None` means no version could be found in the name, that is not an error.
pub fn extract_version(file_name: &str) -> Option<Version> {
    let Some((_, Some(candidate))) = split_file_name(file_name) else {
        tracing::debug!(file_name, "no version in file name");
        return None;
    };
    Version::parse(candidate).ok()
}

/// Deployed snapshot, `<base>-<yyyyMMdd.HHmmss>-<build>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimestampedSnapshot<'a> {
    pub base: &'a str,
    pub timestamp: &'a str,
    pub build_number: u64,
}

pub fn parse_timestamped_snapshot(s: &str) -> Option<TimestampedSnapshot<'_>> {
    let caps = TIMESTAMPED_SNAPSHOT_RE.captures(s)?;
    let base = caps.get(1)?.as_str();
    let timestamp = caps.get(2)?.as_str();
    let build_number = caps.get(3)?.as_str().parse().ok()?;
    Some(TimestampedSnapshot { base, timestamp, build_number })
}

/// The `LATEST` meta-version asks for whatever is newest, it is not a version itself.
pub fn is_latest_marker(s: &str) -> bool {
    crate::parse::trim(s) == MAVEN_LATEST_VERSION
}

impl Version {
    /// Maven (`6.5-SNAPSHOT`) or OSGi (`2.0.0.SNAPSHOT`) snapshot.
    pub fn is_snapshot(&self) -> bool {
        let snapshot = |s: &str| s.to_ascii_uppercase().ends_with(MAVEN_SNAPSHOT_VERSION);
        self.qualifiers().last().is_some_and(|q| snapshot(q))
            || self.version_part_suffix().is_some_and(snapshot)
    }
}
