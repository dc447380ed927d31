//! Release pipeline: bump, rewrite version files, tag, build, publish.
//!
//! Steps run strictly in order and stop at the first failure. The working
//! tree is checked before any file is touched. Nothing is rolled back; a
//! failed run is recovered by fixing the cause and re-running.

pub mod command;
pub mod config;
pub mod publish;
pub mod vcs;
pub mod version_files;

use semver::Version;

use crate::error::ReleaseError;
use crate::term::{print_info, print_success};
use crate::version::{BumpKind, bump_version};

pub use self::command::{CommandOutput, CommandRunner, SystemRunner, run_external_command};
pub use self::config::ReleaseConfig;
pub use self::publish::build_and_publish;
pub use self::vcs::{check_clean_working_tree, perform_vcs_operations};
pub use self::version_files::{
    UpdateOutcome, VersionFileKind, VersionLocation, get_current_version, location_for,
    update_version_in_file, version_locations,
};

/// Options for one release run, derived from CLI flags.
#[derive(Debug, Clone, Copy)]
pub struct ReleaseOptions {
    pub bump: BumpKind,
    pub dry_run: bool,
    pub test_registry: bool,
    pub skip_vcs: bool,
}

/// What a release run did.
#[derive(Debug, Clone)]
pub struct ReleaseOutcome {
    pub previous: Version,
    pub next: Version,
    /// Per-location result; empty on dry runs.
    pub file_updates: Vec<(VersionLocation, UpdateOutcome)>,
    pub vcs_performed: bool,
    pub published: bool,
}

/// Run the full release pipeline.
pub fn run_release<R: CommandRunner + ?Sized>(
    runner: &R,
    config: &ReleaseConfig,
    options: ReleaseOptions,
) -> Result<ReleaseOutcome, ReleaseError> {
    print_info(&format!(
        "Publishing {} ({} version bump)",
        config.package_name, options.bump
    ));

    // ── Stage 1: Version calculation ──
    let previous = get_current_version(config)?;
    let next = bump_version(&previous, options.bump);

    print_info(&format!("Version: {} -> {}", previous, next));

    if options.dry_run {
        print_info("[DRY RUN] No changes will be made");
    }

    // ── Stage 2: Preflight ──
    // Checked before any file is rewritten; afterwards the bump itself
    // would show up as uncommitted changes.
    if !options.skip_vcs && !options.dry_run {
        check_clean_working_tree(runner, &[])?;
    }

    // ── Stage 3: Version file updates ──
    let mut file_updates = Vec::new();
    if !options.dry_run {
        for location in version_locations(config) {
            let outcome = update_version_in_file(&location, &previous, &next)?;
            file_updates.push((location, outcome));
        }
    }

    // ── Stage 4: Commit, tag, push ──
    if !options.skip_vcs {
        perform_vcs_operations(runner, config, &next, options.dry_run)?;
    }

    // ── Stage 5: Build and publish ──
    build_and_publish(runner, config, options.dry_run, options.test_registry)?;

    if !options.dry_run {
        print_success(&format!(
            "Successfully published {} v{}!",
            config.package_name, next
        ));
    }

    Ok(ReleaseOutcome {
        previous,
        next,
        file_updates,
        vcs_performed: !options.skip_vcs && !options.dry_run,
        published: !options.dry_run,
    })
}
