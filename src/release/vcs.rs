//! Git operations for the release pipeline: clean-tree check, commit, tag, push.
//!
//! All operations shell out to the system `git` binary through a
//! [`CommandRunner`], inheriting the user's git config, SSH agent, and
//! credential store.

use std::path::PathBuf;

use semver::Version;
use tracing::debug;

use crate::error::ReleaseError;
use crate::term::{print_info, print_success};

use super::command::{CommandRunner, argv, run_external_command};
use super::config::ReleaseConfig;

/// Tag name for a released version.
pub fn tag_name(version: &Version) -> String {
    format!("v{}", version)
}

/// Commit message for a release commit.
pub fn commit_message(version: &Version) -> String {
    format!("bump: version {}", version)
}

/// Fail with `DirtyWorkingTree` if `git status --porcelain` reports anything.
///
/// Paths in `ignore` (relative to the project root) are excluded from the
/// status, so files this release rewrote itself do not count as dirty.
pub fn check_clean_working_tree<R: CommandRunner + ?Sized>(
    runner: &R,
    ignore: &[PathBuf],
) -> Result<(), ReleaseError> {
    let mut status_cmd = argv(&["git", "status", "--porcelain"]);
    if !ignore.is_empty() {
        status_cmd.push("--".to_string());
        status_cmd.push(".".to_string());
        status_cmd.extend(
            ignore
                .iter()
                .map(|p| format!(":(exclude){}", p.to_string_lossy())),
        );
    }

    let status = run_external_command(runner, &status_cmd, true)?;
    if !status.stdout.trim().is_empty() {
        debug!("Uncommitted changes:\n{}", status.stdout);
        return Err(ReleaseError::DirtyWorkingTree);
    }

    Ok(())
}

/// Commit the version files, tag the commit, and push both.
///
/// Steps:
/// 1. `git status --porcelain` - refuse to continue if anything other than
///    the version files is modified
/// 2. `git add <metadata> <manifest>`
/// 3. `git commit -m "bump: version X.Y.Z"`
/// 4. `git tag vX.Y.Z`
/// 5. `git push` then `git push --tags`
///
/// Git runs from the project root, so files are passed relative to it.
/// In dry-run mode nothing is executed.
pub fn perform_vcs_operations<R: CommandRunner + ?Sized>(
    runner: &R,
    config: &ReleaseConfig,
    version: &Version,
    dry_run: bool,
) -> Result<(), ReleaseError> {
    let tag = tag_name(version);

    if dry_run {
        print_info(&format!("[DRY RUN] Would create git tag: {}", tag));
        return Ok(());
    }

    let version_files = config.version_files_in_root();

    // 1. Nothing but the version bump may be uncommitted
    check_clean_working_tree(runner, &version_files)?;

    // 2. Stage only the version files
    let mut add = argv(&["git", "add"]);
    add.extend(version_files.iter().map(|p| p.to_string_lossy().into_owned()));
    run_external_command(runner, &add, true)?;

    // 3. Commit
    let message = commit_message(version);
    run_external_command(runner, &argv(&["git", "commit", "-m", &message]), true)?;

    // 4. Lightweight tag
    run_external_command(runner, &argv(&["git", "tag", &tag]), true)?;

    // 5. Push commit, then tags
    run_external_command(runner, &argv(&["git", "push"]), true)?;
    run_external_command(runner, &argv(&["git", "push", "--tags"]), true)?;

    print_success(&format!("Created git tag: {}", tag));
    Ok(())
}
