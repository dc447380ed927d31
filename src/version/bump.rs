//! Strict `X.Y.Z` parsing and semver bumping.

use std::fmt;

use clap::ValueEnum;
use semver::Version;

use crate::error::ReleaseError;

/// Which segment of the version to increment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum BumpKind {
    Patch,
    Minor,
    Major,
}

impl fmt::Display for BumpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BumpKind::Patch => write!(f, "patch"),
            BumpKind::Minor => write!(f, "minor"),
            BumpKind::Major => write!(f, "major"),
        }
    }
}

/// Parse a plain `major.minor.patch` version.
///
/// Stricter than `Version::parse`: pre-release and build suffixes are
/// rejected, and exactly three integer parts are required.
pub fn parse_version(text: &str) -> Result<Version, ReleaseError> {
    let invalid = || ReleaseError::InvalidVersionFormat(text.to_string());

    let parts: Vec<&str> = text.split('.').collect();
    let [major, minor, patch] = parts.as_slice() else {
        return Err(invalid());
    };

    let parse_part = |part: &&str| part.parse::<u64>().map_err(|_| invalid());

    Ok(Version::new(
        parse_part(major)?,
        parse_part(minor)?,
        parse_part(patch)?,
    ))
}

/// Apply a bump to a version.
///
/// - `Major` resets minor and patch
/// - `Minor` resets patch
/// - `Patch` increments patch only
pub fn bump_version(current: &Version, kind: BumpKind) -> Version {
    match kind {
        BumpKind::Major => Version::new(current.major + 1, 0, 0),
        BumpKind::Minor => Version::new(current.major, current.minor + 1, 0),
        BumpKind::Patch => Version::new(current.major, current.minor, current.patch + 1),
    }
}
