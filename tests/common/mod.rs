//! Shared test utilities for integration tests.
//!
//! Not all functions are used by every test file, but they're shared across tests.
#![allow(dead_code)]

use std::cell::RefCell;
use std::path::Path;

use git2::{Repository, Signature};

use justsdk::release::{CommandOutput, CommandRunner, SystemRunner};
use justsdk::{ReleaseConfig, ReleaseError};

pub const INIT_PY: &str = "__version__ = \"1.1.4\"\n__author__ = \"eesuhn\"\n\nfrom .ansi import Fore\n";
pub const PYPROJECT: &str = "[project]\nname = \"justsdk\"\nversion = \"1.1.4\"\nrequires-python = \">=3.10\"\n";

/// A Python project laid out the way the release tool expects.
pub struct TestProject {
    pub dir: tempfile::TempDir,
    pub config: ReleaseConfig,
}

impl TestProject {
    /// Create `src/justsdk/__init__.py` and `pyproject.toml` in a temp directory.
    pub fn new() -> Self {
        Self::with_files(INIT_PY, PYPROJECT)
    }

    pub fn with_files(init_py: &str, pyproject: &str) -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp directory");
        let config = ReleaseConfig::new(dir.path(), "justsdk");

        let pkg_dir = config
            .metadata_file
            .parent()
            .expect("metadata file has a parent");
        std::fs::create_dir_all(pkg_dir).expect("Failed to create package dir");
        std::fs::write(&config.metadata_file, init_py).expect("Failed to write __init__.py");
        std::fs::write(&config.manifest_file, pyproject).expect("Failed to write pyproject.toml");

        Self { dir, config }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn read_init(&self) -> String {
        std::fs::read_to_string(&self.config.metadata_file).expect("Failed to read __init__.py")
    }

    pub fn read_pyproject(&self) -> String {
        std::fs::read_to_string(&self.config.manifest_file).expect("Failed to read pyproject.toml")
    }

    /// Turn the project into a git repository with everything committed.
    pub fn init_git(&self) -> Repository {
        let repo = Repository::init(self.root()).expect("Failed to init git repo");
        {
            let mut config = repo.config().expect("Failed to open repo config");
            config.set_str("user.name", "Test User").expect("Failed to set user.name");
            config
                .set_str("user.email", "test@example.com")
                .expect("Failed to set user.email");
        }

        let sig = Signature::now("Test User", "test@example.com").expect("Failed to create signature");
        let tree_id = {
            let mut index = repo.index().expect("Failed to get index");
            index
                .add_all(["*"].iter(), git2::IndexAddOption::DEFAULT, None)
                .expect("Failed to add files");
            index.write().expect("Failed to write index");
            index.write_tree().expect("Failed to write tree")
        };
        {
            let tree = repo.find_tree(tree_id).expect("Failed to find tree");
            repo.commit(Some("HEAD"), &sig, &sig, "initial", &tree, &[])
                .expect("Failed to create commit");
        }
        repo
    }
}

/// Runner that records every argv and answers from a script of outputs.
///
/// Unscripted calls succeed with empty output.
#[derive(Default)]
pub struct RecordingRunner {
    pub calls: RefCell<Vec<Vec<String>>>,
    pub responses: RefCell<Vec<(String, CommandOutput)>>,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer the first call whose joined argv starts with `prefix`.
    pub fn respond(self, prefix: &str, output: CommandOutput) -> Self {
        self.responses.borrow_mut().push((prefix.to_string(), output));
        self
    }

    pub fn commands(&self) -> Vec<String> {
        self.calls.borrow().iter().map(|argv| argv.join(" ")).collect()
    }
}

impl CommandRunner for RecordingRunner {
    fn run(&self, argv: &[String]) -> Result<CommandOutput, ReleaseError> {
        self.calls.borrow_mut().push(argv.to_vec());

        let joined = argv.join(" ");
        let mut responses = self.responses.borrow_mut();
        if let Some(pos) = responses.iter().position(|(p, _)| joined.starts_with(p)) {
            return Ok(responses.remove(pos).1);
        }

        Ok(CommandOutput {
            code: Some(0),
            ..Default::default()
        })
    }
}

/// Runner that sends `git` to the real binary, except pushes.
///
/// `git push` and every non-git command succeed without running, so a full
/// release can run against a local repository with no remote or registry.
pub struct LocalGitRunner {
    git: SystemRunner,
    pub calls: RefCell<Vec<Vec<String>>>,
}

impl LocalGitRunner {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            git: SystemRunner::new(root.as_ref()),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn commands(&self) -> Vec<String> {
        self.calls.borrow().iter().map(|argv| argv.join(" ")).collect()
    }
}

impl CommandRunner for LocalGitRunner {
    fn run(&self, argv: &[String]) -> Result<CommandOutput, ReleaseError> {
        self.calls.borrow_mut().push(argv.to_vec());

        let is_push = argv.get(1).is_some_and(|a| a == "push");
        if argv.first().is_some_and(|a| a == "git") && !is_push {
            return self.git.run(argv);
        }

        Ok(CommandOutput {
            code: Some(0),
            ..Default::default()
        })
    }
}

pub fn output(code: i32, stdout: &str, stderr: &str) -> CommandOutput {
    CommandOutput {
        code: Some(code),
        stdout: stdout.to_string(),
        stderr: stderr.to_string(),
    }
}
