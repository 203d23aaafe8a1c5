//! Common test utilities for stdeploy integration tests.
//!
//! Provides `TestProject`: an isolated project directory plus HOME, with
//! helpers to run the stdeploy binary with piped answers.

#![allow(dead_code)]

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

/// Result of running the stdeploy binary
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

impl From<Output> for TestResult {
    fn from(output: Output) -> Self {
        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }
}

/// Whether a `git` executable is on PATH. Tests that need it return early
/// when it is not.
pub fn git_available() -> bool {
    Command::new("git")
        .arg("--version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}

/// Isolated project directory with its own HOME and git identity.
pub struct TestProject {
    /// Temporary directory for the project
    pub root: TempDir,
    /// Temporary directory for HOME and bare remotes
    pub home: TempDir,
}

impl TestProject {
    /// Empty project directory
    pub fn empty() -> Self {
        TestProject {
            root: tempfile::tempdir().unwrap(),
            home: tempfile::tempdir().unwrap(),
        }
    }

    /// Project with `app.py` and `requirements.txt`
    pub fn streamlit_app() -> Self {
        let project = Self::empty();
        project.write("app.py", "import streamlit as st\n\nst.title(\"Admin\")\n");
        project.write("requirements.txt", "streamlit\nsupabase\n");
        project
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.path().join(relative)
    }

    pub fn write(&self, relative: &str, content: &str) {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    fn isolate(&self, cmd: &mut Command) {
        let config_home = self.home.path().join(".config");
        cmd.env("HOME", self.home.path())
            .env("XDG_CONFIG_HOME", &config_home)
            .env("GIT_CONFIG_NOSYSTEM", "1")
            .env("GIT_AUTHOR_NAME", "stdeploy tests")
            .env("GIT_AUTHOR_EMAIL", "tests@stdeploy.invalid")
            .env("GIT_COMMITTER_NAME", "stdeploy tests")
            .env("GIT_COMMITTER_EMAIL", "tests@stdeploy.invalid")
            .env("GIT_TERMINAL_PROMPT", "0")
            .env("STDEPLOY_NO_COLOR", "1")
            .env_remove("STDEPLOY_BRANCH")
            .env_remove("STDEPLOY_HOST")
            .env_remove("RUST_LOG");
    }

    /// Run git in the project directory; panics on failure.
    pub fn git(&self, args: &[&str]) -> String {
        self.git_in(self.root.path(), args)
    }

    fn git_in(&self, dir: &Path, args: &[&str]) -> String {
        let mut cmd = Command::new("git");
        cmd.current_dir(dir).args(args);
        self.isolate(&mut cmd);
        let output = cmd.output().unwrap();
        assert!(
            output.status.success(),
            "git {:?} failed: {}",
            args,
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8_lossy(&output.stdout).trim().to_string()
    }

    /// Initialize the project as a repository with one commit.
    pub fn init_repository(&self) {
        self.git(&["init", "--quiet"]);
        self.git(&["add", "-A"]);
        self.git(&["commit", "--quiet", "-m", "first"]);
    }

    /// Create a bare repository under HOME to push to.
    pub fn bare_remote(&self, name: &str) -> PathBuf {
        let path = self.home.path().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        self.git_in(self.home.path(), &["init", "--quiet", "--bare", name]);
        path
    }

    pub fn commit_count(&self) -> usize {
        self.git(&["rev-list", "--count", "HEAD"]).parse().unwrap()
    }

    /// Configured URL of `name`, without `insteadOf` rewriting.
    pub fn remote_url(&self, name: &str) -> Option<String> {
        let remotes = self.git(&["remote"]);
        if remotes.lines().any(|r| r == name) {
            Some(self.git(&["config", "--get", &format!("remote.{}.url", name)]))
        } else {
            None
        }
    }

    pub fn last_commit_subject(&self) -> String {
        self.git(&["log", "-1", "--format=%s"])
    }

    /// Whether the bare repository at `remote` has `branch`.
    pub fn remote_has_branch(&self, remote: &Path, branch: &str) -> bool {
        let mut cmd = Command::new("git");
        cmd.arg("--git-dir")
            .arg(remote)
            .args(["rev-parse", "--verify", "--quiet"])
            .arg(format!("refs/heads/{}", branch));
        self.isolate(&mut cmd);
        cmd.output().map(|o| o.status.success()).unwrap_or(false)
    }

    /// Route `https://<host>/` to bare repositories under HOME, so the
    /// new-repository flow can push without a network.
    pub fn redirect_host(&self, host: &str) {
        let base = format!("file://{}/", self.home.path().display());
        self.git_in(
            self.home.path(),
            &[
                "config",
                "--global",
                &format!("url.{}.insteadOf", base),
                &format!("https://{}/", host),
            ],
        );
    }

    /// Run stdeploy in the project with `input` piped to stdin.
    pub fn run(&self, input: &str) -> TestResult {
        self.run_with(&[], input, &[])
    }

    pub fn run_with(&self, args: &[&str], input: &str, env: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_stdeploy"));
        cmd.current_dir(self.root.path())
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        self.isolate(&mut cmd);
        for (key, value) in env {
            cmd.env(key, value);
        }

        let mut child = cmd.spawn().expect("Failed to execute stdeploy");
        {
            let mut stdin = child.stdin.take().unwrap();
            // The binary may exit before reading everything.
            let _ = stdin.write_all(input.as_bytes());
        }
        child.wait_with_output().unwrap().into()
    }
}
