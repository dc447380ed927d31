//! justsdk - colored terminal output, file helpers, and release tooling.
//!
//! # Overview
//!
//! The `term` and `file_utils` modules are small helpers for scripts. The
//! `release` module drives a package release: it bumps the version in
//! `__init__.py` and `pyproject.toml`, commits and tags through the system
//! `git`, then builds and publishes with `uv`.

pub mod error;
pub mod file_utils;
pub mod release;
pub mod term;
pub mod version;

// Re-export commonly used types
pub use error::{FileError, ReleaseError};
pub use file_utils::{print_file, read_file, write_file};
pub use release::{ReleaseConfig, ReleaseOptions, ReleaseOutcome, run_release};
pub use term::{print_color, print_error, print_info, print_success, print_warning};
pub use version::{BumpKind, bump_version, parse_version};
