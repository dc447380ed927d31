//! Reading and rewriting the version in the package's version files.
//!
//! Two files carry the version:
//! - the module metadata (`__init__.py`), edited with a line pattern
//! - the project manifest (`pyproject.toml`), edited with `toml_edit` so only
//!   the version value changes

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex_lite::Regex;
use semver::Version;
use toml_edit::DocumentMut;
use tracing::debug;

use crate::error::ReleaseError;
use crate::file_utils::{read_file, write_file};
use crate::term::{print_success, print_warning};
use crate::version::parse_version;

use super::config::ReleaseConfig;

/// `__version__ = "X.Y.Z"` with either quote style. Groups: prefix, version, suffix.
static DUNDER_VERSION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(__version__ = ["'])([^"']+)(["'])"#).expect("valid __version__ regex")
});

/// The kind of version file, which decides how it is edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionFileKind {
    ModuleMetadata,
    ProjectManifest,
}

impl fmt::Display for VersionFileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VersionFileKind::ModuleMetadata => write!(f, "__init__.py"),
            VersionFileKind::ProjectManifest => write!(f, "pyproject.toml"),
        }
    }
}

/// A file that holds the version, and how to find it there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionLocation {
    pub path: PathBuf,
    pub kind: VersionFileKind,
}

impl VersionLocation {
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.kind.to_string())
    }
}

/// Result of a version substitution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    Updated,
    /// Nothing matched; the file was left untouched.
    NoMatch,
}

/// Both registered locations, metadata first.
pub fn version_locations(config: &ReleaseConfig) -> [VersionLocation; 2] {
    [
        VersionLocation {
            path: config.metadata_file.clone(),
            kind: VersionFileKind::ModuleMetadata,
        },
        VersionLocation {
            path: config.manifest_file.clone(),
            kind: VersionFileKind::ProjectManifest,
        },
    ]
}

/// Resolve a path to its registered location.
pub fn location_for(config: &ReleaseConfig, path: &Path) -> Result<VersionLocation, ReleaseError> {
    version_locations(config)
        .into_iter()
        .find(|loc| loc.path == path)
        .ok_or_else(|| ReleaseError::UnknownFileTarget(path.to_path_buf()))
}

/// Read the current version from the module metadata file.
pub fn get_current_version(config: &ReleaseConfig) -> Result<Version, ReleaseError> {
    let content = read_file(&config.metadata_file)?;

    let captures = DUNDER_VERSION
        .captures(&content)
        .ok_or_else(|| ReleaseError::VersionNotFound {
            path: config.metadata_file.clone(),
        })?;

    parse_version(&captures[2])
}

/// Rewrite the version in `location` from `old` to `new`.
///
/// Only the version text changes; quoting and surrounding content stay as
/// they were. When no version is found the file is not written and
/// `UpdateOutcome::NoMatch` is returned after printing a warning.
pub fn update_version_in_file(
    location: &VersionLocation,
    old: &Version,
    new: &Version,
) -> Result<UpdateOutcome, ReleaseError> {
    let content = read_file(&location.path)?;

    let updated = match location.kind {
        VersionFileKind::ModuleMetadata => substitute_dunder_version(&content, new),
        VersionFileKind::ProjectManifest => substitute_manifest_version(&location.path, &content, new)?,
    };

    let Some(updated) = updated else {
        debug!(path = %location.path.display(), "no version pattern matched");
        print_warning(&format!(
            "Warning: No version found to update in {}",
            location.path.display()
        ));
        return Ok(UpdateOutcome::NoMatch);
    };

    write_file(&location.path, &updated)?;
    print_success(&format!("Updated {}: {} -> {}", location.file_name(), old, new));

    Ok(UpdateOutcome::Updated)
}

fn substitute_dunder_version(content: &str, new: &Version) -> Option<String> {
    if !DUNDER_VERSION.is_match(content) {
        return None;
    }

    let replacement = format!("${{1}}{}${{3}}", new);
    Some(DUNDER_VERSION.replace_all(content, replacement.as_str()).into_owned())
}

/// Set `[project].version`, or `[tool.poetry].version` for Poetry projects.
fn substitute_manifest_version(
    path: &Path,
    content: &str,
    new: &Version,
) -> Result<Option<String>, ReleaseError> {
    let mut doc = content
        .parse::<DocumentMut>()
        .map_err(|e| ReleaseError::ManifestParse {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

    let item = if doc.get("project").and_then(|p| p.get("version")).is_some() {
        &mut doc["project"]["version"]
    } else if doc
        .get("tool")
        .and_then(|t| t.get("poetry"))
        .and_then(|p| p.get("version"))
        .is_some()
    {
        &mut doc["tool"]["poetry"]["version"]
    } else {
        return Ok(None);
    };

    let Some(value) = item.as_value_mut() else {
        return Ok(None);
    };
    if !value.is_str() {
        return Ok(None);
    }

    let decor = value.decor().clone();
    *value = toml_edit::Value::from(new.to_string());
    *value.decor_mut() = decor;

    Ok(Some(doc.to_string()))
}
