//! Release configuration.
//!
//! Paths and tool names are injected through [`ReleaseConfig`] so that the
//! pipeline can run against any project root, including temp dirs in tests.

use std::env;
use std::path::{Path, PathBuf};

use tracing::warn;

/// Default build/publish tool.
pub const DEFAULT_BUILD_TOOL: &str = "uv";

/// Upload endpoint for the test package registry.
pub const DEFAULT_TEST_REGISTRY_URL: &str = "https://test.pypi.org/legacy/";

/// Environment variable to override the build/publish tool.
pub const BUILD_TOOL_ENV_VAR: &str = "JUSTSDK_BUILD_TOOL";

/// Environment variable to override the test registry upload URL.
pub const TEST_REGISTRY_ENV_VAR: &str = "JUSTSDK_TEST_REGISTRY_URL";

/// Everything the release pipeline needs to know about the project on disk.
#[derive(Debug, Clone)]
pub struct ReleaseConfig {
    pub root: PathBuf,
    pub package_name: String,
    /// `src/<package>/__init__.py`
    pub metadata_file: PathBuf,
    /// `pyproject.toml`
    pub manifest_file: PathBuf,
    /// Build output removed before each build.
    pub dist_dir: PathBuf,
    pub build_tool: String,
    pub test_registry_url: String,
}

impl ReleaseConfig {
    /// Standard `src/` layout under `root`, with default tools.
    pub fn new(root: impl Into<PathBuf>, package_name: &str) -> Self {
        let root = root.into();
        Self {
            metadata_file: root.join("src").join(package_name).join("__init__.py"),
            manifest_file: root.join("pyproject.toml"),
            dist_dir: root.join("dist"),
            package_name: package_name.to_string(),
            build_tool: DEFAULT_BUILD_TOOL.to_string(),
            test_registry_url: DEFAULT_TEST_REGISTRY_URL.to_string(),
            root,
        }
    }

    /// Like [`ReleaseConfig::new`], then apply environment overrides.
    pub fn from_env(root: impl Into<PathBuf>, package_name: &str) -> Self {
        let mut config = Self::new(root, package_name);
        if let Some(tool) = read_env_override(BUILD_TOOL_ENV_VAR) {
            config.build_tool = tool;
        }
        if let Some(url) = read_env_override(TEST_REGISTRY_ENV_VAR) {
            config.test_registry_url = url;
        }
        config
    }

    /// The files a release rewrites and stages, in that order.
    pub fn version_files(&self) -> [&Path; 2] {
        [&self.metadata_file, &self.manifest_file]
    }

    /// The version files relative to `root`, as git sees them when run there.
    pub fn version_files_in_root(&self) -> Vec<PathBuf> {
        self.version_files()
            .iter()
            .map(|p| p.strip_prefix(&self.root).unwrap_or(p).to_path_buf())
            .collect()
    }
}

/// Read an override, warning on set-but-empty values.
fn read_env_override(name: &str) -> Option<String> {
    match env::var(name) {
        Ok(v) if !v.trim().is_empty() => Some(v.trim().to_string()),
        Ok(_) => {
            warn!("{} is set but empty, using default", name);
            None
        }
        Err(_) => None,
    }
}
