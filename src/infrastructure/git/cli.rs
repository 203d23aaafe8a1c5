//! Git CLI adapter
//!
//! Implements [`VersionControl`] by running the `git` executable inside the
//! working directory. Captured commands report their stderr on failure; the
//! push inherits the terminal so progress and credential prompts reach the
//! operator.

use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use crate::domain::ports::VersionControl;
use crate::domain::value_objects::CommitMessage;
use crate::error::{DeployError, DeployResult};

pub struct GitCli {
    root: PathBuf,
    program: String,
}

impl GitCli {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self::with_program(root, "git")
    }

    /// Use a specific executable instead of `git` from PATH.
    pub fn with_program(root: impl Into<PathBuf>, program: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            program: program.into(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn command(&self, args: &[&str]) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(args).current_dir(&self.root);
        cmd
    }

    fn describe(&self, args: &[&str]) -> String {
        std::iter::once(self.program.as_str())
            .chain(args.iter().copied())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Run with captured output, returning stdout.
    fn run(&self, args: &[&str]) -> DeployResult<String> {
        tracing::debug!(command = %self.describe(args), "running");
        let output = self
            .command(args)
            .stdin(Stdio::null())
            .output()?;
        self.check(args, output)
    }

    fn check(&self, args: &[&str], output: Output) -> DeployResult<String> {
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
            tracing::debug!(
                command = %self.describe(args),
                status = ?output.status.code(),
                %stderr,
                "command failed"
            );
            return Err(DeployError::CommandFailed {
                command: self.describe(args),
                status: output.status.code(),
                stderr,
            });
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl VersionControl for GitCli {
    fn program(&self) -> &str {
        &self.program
    }

    fn is_available(&self) -> bool {
        Command::new(&self.program)
            .arg("--version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|s| s.success())
            .unwrap_or(false)
    }

    fn is_repository(&self) -> bool {
        self.root.join(".git").exists()
    }

    fn init(&self) -> DeployResult<()> {
        self.run(&["init"]).map(drop)
    }

    fn stage_all(&self) -> DeployResult<()> {
        self.run(&["add", "-A"]).map(drop)
    }

    fn commit(&self, message: &CommitMessage) -> DeployResult<()> {
        self.run(&["commit", "-m", message.as_str()]).map(drop)
    }

    fn is_dirty(&self) -> DeployResult<bool> {
        let status = self.run(&["status", "--porcelain"])?;
        Ok(!status.trim().is_empty())
    }

    fn remote_url(&self, name: &str) -> DeployResult<Option<String>> {
        let remotes = self.run(&["remote"])?;
        if !remotes.lines().any(|line| line.trim() == name) {
            return Ok(None);
        }
        // As configured; `remote get-url` would apply `insteadOf` rewrites.
        let key = format!("remote.{}.url", name);
        let url = self.run(&["config", "--get", &key])?;
        Ok(Some(url.trim().to_string()))
    }

    fn add_remote(&self, name: &str, url: &str) -> DeployResult<()> {
        self.run(&["remote", "add", name, url]).map(drop)
    }

    fn set_remote_url(&self, name: &str, url: &str) -> DeployResult<()> {
        self.run(&["remote", "set-url", name, url]).map(drop)
    }

    fn rename_branch(&self, branch: &str) -> DeployResult<()> {
        self.run(&["branch", "-M", branch]).map(drop)
    }

    fn push_upstream(&self, remote: &str, branch: &str) -> DeployResult<()> {
        let args = ["push", "-u", remote, branch];
        tracing::debug!(command = %self.describe(&args), "running");

        let status = self
            .command(&args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()?;

        if !status.success() {
            return Err(DeployError::CommandFailed {
                command: self.describe(&args),
                status: status.code(),
                stderr: String::new(),
            });
        }
        Ok(())
    }

    fn commit_count(&self) -> DeployResult<usize> {
        let count = self.run(&["rev-list", "--count", "HEAD"])?;
        count
            .trim()
            .parse()
            .map_err(|e: std::num::ParseIntError| DeployError::CommandFailed {
                command: self.describe(&["rev-list", "--count", "HEAD"]),
                status: Some(0),
                stderr: format!("unexpected output '{}': {}", count.trim(), e),
            })
    }
}
