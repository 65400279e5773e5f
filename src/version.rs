//! Tracker version handling.
//!
//! Trackers before 1.2.0 serve issues under `issues/show/<n>`; later
//! releases use `issues/<n>`. Anything that is not a well-formed `X.Y.Z`
//! version selects the current scheme.

use std::fmt;
use std::str::FromStr;

/// A dotted `major.minor.patch` tracker version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TrackerVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl TrackerVersion {
    pub const CURRENT_URLS_SINCE: TrackerVersion = TrackerVersion::new(1, 2, 0);

    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }
}

impl fmt::Display for TrackerVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionError(String);

impl fmt::Display for VersionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "version number '{}' must be in X.Y.Z form", self.0)
    }
}

impl std::error::Error for VersionError {}

impl FromStr for TrackerVersion {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || VersionError(s.to_string());
        let parts: Vec<&str> = s.trim().split('.').collect();
        if parts.len() != 3 {
            return Err(err());
        }

        let mut numbers = [0u32; 3];
        for (slot, part) in numbers.iter_mut().zip(&parts) {
            *slot = part.parse::<u32>().map_err(|_| err())?;
        }

        Ok(Self::new(numbers[0], numbers[1], numbers[2]))
    }
}

/// Issue URL layout served by the tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UrlScheme {
    /// `issues/show/<n>`, trackers before 1.2.0
    Legacy,
    /// `issues/<n>`
    #[default]
    Current,
}

impl UrlScheme {
    /// Pick the scheme for an optional version string. Missing or malformed
    /// versions select [`UrlScheme::Current`].
    pub fn for_version(version_number: Option<&str>) -> Self {
        match version_number.map(str::parse::<TrackerVersion>) {
            Some(Ok(v)) if v < TrackerVersion::CURRENT_URLS_SINCE => Self::Legacy,
            _ => Self::Current,
        }
    }

    pub fn issue_path(self) -> &'static str {
        match self {
            Self::Legacy => "issues/show/",
            Self::Current => "issues/",
        }
    }
}

pub fn is_version_before_120(version_number: Option<&str>) -> bool {
    UrlScheme::for_version(version_number) == UrlScheme::Legacy
}
