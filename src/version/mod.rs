//! Version parsing and semver bumping.

pub mod bump;

pub use bump::{BumpKind, bump_version, parse_version};
