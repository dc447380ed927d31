//! Build the distribution and upload it to the package registry.

use tracing::debug;

use crate::error::ReleaseError;
use crate::term::{print_info, print_success};

use super::command::{CommandRunner, argv, run_external_command};
use super::config::ReleaseConfig;

/// Clean `dist/`, build, then publish.
///
/// With `use_test_registry` the upload goes to the test registry URL from
/// the config instead of the production registry.
pub fn build_and_publish<R: CommandRunner + ?Sized>(
    runner: &R,
    config: &ReleaseConfig,
    dry_run: bool,
    use_test_registry: bool,
) -> Result<(), ReleaseError> {
    if dry_run {
        let target = if use_test_registry { "TestPyPI" } else { "PyPI" };
        print_info(&format!("[DRY RUN] Would build and publish package to {}", target));
        return Ok(());
    }

    if config.dist_dir.exists() {
        debug!(path = %config.dist_dir.display(), "removing previous build output");
        std::fs::remove_dir_all(&config.dist_dir).map_err(|source| ReleaseError::Io {
            path: config.dist_dir.clone(),
            source,
        })?;
    }

    let tool = config.build_tool.as_str();
    run_external_command(runner, &argv(&[tool, "build"]), true)?;

    if use_test_registry {
        print_info("Publishing to TestPyPI...");
        run_external_command(
            runner,
            &argv(&[tool, "publish", "--publish-url", &config.test_registry_url]),
            true,
        )?;
        print_success("Published to TestPyPI");
        print_info(&format!(
            "Test installation: pip install --index-url https://test.pypi.org/simple/ {}",
            config.package_name
        ));
    } else {
        print_info("Publishing to PyPI...");
        run_external_command(runner, &argv(&[tool, "publish"]), true)?;
        print_success("Published to PyPI");
        print_info(&format!("Installation: pip install {}", config.package_name));
    }

    Ok(())
}
