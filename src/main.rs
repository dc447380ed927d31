//! justsdk-publish - CLI entry point.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use justsdk::release::{ReleaseConfig, ReleaseOptions, SystemRunner, run_release};
use justsdk::{BumpKind, ReleaseError, print_error};

/// Bump the version, tag the release, and publish to PyPI.
#[derive(Parser, Debug)]
#[command(name = "justsdk-publish")]
#[command(about = "Bump the version, tag the release, and publish to PyPI")]
#[command(version)]
struct Cli {
    /// Type of version bump
    #[arg(value_enum)]
    bump: BumpKind,

    /// Show what would be done without making changes
    #[arg(long)]
    dry_run: bool,

    /// Publish to TestPyPI instead of PyPI
    #[arg(long)]
    test_pypi: bool,

    /// Skip git operations (tag and push)
    #[arg(long)]
    no_git: bool,

    /// Project root containing pyproject.toml
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// Python package name under src/
    #[arg(long, default_value = "justsdk")]
    package: String,

    /// Show debug logs
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = ReleaseConfig::from_env(&cli.root, &cli.package);
    let runner = SystemRunner::new(&config.root);
    let options = ReleaseOptions {
        bump: cli.bump,
        dry_run: cli.dry_run,
        test_registry: cli.test_pypi,
        skip_vcs: cli.no_git,
    };

    run_release(&runner, &config, options)
        .inspect_err(print_captured_output)
        .with_context(|| format!("Release of {} aborted", config.package_name))?;

    Ok(())
}

/// Log to stderr; `RUST_LOG` wins over `--verbose`.
fn init_tracing(verbose: bool) {
    let default = if verbose { "justsdk=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Echo what a failed command printed before the error chain is reported.
fn print_captured_output(error: &ReleaseError) {
    if let Some((stdout, stderr)) = error.captured_output() {
        print_error(&format!("stdout: {}", stdout));
        print_error(&format!("stderr: {}", stderr));
    }
}
