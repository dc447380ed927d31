//! Subprocess execution for the release pipeline.
//!
//! External tools (`git`, `uv`) are invoked through the [`CommandRunner`]
//! trait so tests can substitute canned outputs for real processes.

use std::io;
use std::path::PathBuf;
use std::process::Command;

use tracing::debug;

use crate::error::ReleaseError;
use crate::term::print_info;

/// Captured result of a finished subprocess.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// `None` when the process was killed by a signal.
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Trait for running external commands.
///
/// This abstraction allows mocking subprocesses in tests.
#[cfg_attr(test, mockall::automock)]
pub trait CommandRunner {
    /// Run `argv[0]` with the remaining arguments and capture its output.
    ///
    /// A non-zero exit is not an error at this level.
    fn run(&self, argv: &[String]) -> Result<CommandOutput, ReleaseError>;
}

/// Runner that spawns real processes in a fixed working directory.
pub struct SystemRunner {
    cwd: PathBuf,
}

impl SystemRunner {
    pub fn new(cwd: impl Into<PathBuf>) -> Self {
        Self { cwd: cwd.into() }
    }
}

impl CommandRunner for SystemRunner {
    fn run(&self, argv: &[String]) -> Result<CommandOutput, ReleaseError> {
        let Some((program, args)) = argv.split_first() else {
            return Err(ReleaseError::SpawnFailed {
                command: String::new(),
                source: io::Error::new(io::ErrorKind::InvalidInput, "empty command"),
            });
        };

        let resolved =
            which::which(program).map_err(|_| ReleaseError::ToolNotFound(program.clone()))?;

        let output = Command::new(resolved)
            .args(args)
            .current_dir(&self.cwd)
            .output()
            .map_err(|source| ReleaseError::SpawnFailed {
                command: argv.join(" "),
                source,
            })?;

        Ok(CommandOutput {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}

/// Build an argv from string slices.
pub fn argv(parts: &[&str]) -> Vec<String> {
    parts.iter().map(|p| p.to_string()).collect()
}

/// Run a command once, synchronously.
///
/// With `check` set, a non-zero exit becomes `ReleaseError::ExternalCommand`
/// carrying the captured output. Without it the output is returned as-is.
pub fn run_external_command<R: CommandRunner + ?Sized>(
    runner: &R,
    argv: &[String],
    check: bool,
) -> Result<CommandOutput, ReleaseError> {
    let command = argv.join(" ");
    print_info(&format!("Running: {}", command));

    let output = runner.run(argv)?;
    debug!(command = %command, code = ?output.code, "command finished");

    if check && !output.success() {
        return Err(ReleaseError::ExternalCommand {
            command,
            code: output.code,
            stdout: output.stdout,
            stderr: output.stderr,
        });
    }

    Ok(output)
}
