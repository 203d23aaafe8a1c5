//! Version Control Port
//!
//! The git primitives the orchestrator needs. Every mutating call either
//! succeeds or returns `DeployError::CommandFailed`; callers propagate the
//! error immediately and never retry.

use crate::domain::value_objects::CommitMessage;
use crate::error::DeployResult;

/// Abstract version-control interface bound to one working directory.
///
/// Implementations:
/// - `GitCli` - shells out to the `git` executable
/// - mock implementations in tests
pub trait VersionControl {
    /// Executable name, used in error messages.
    fn program(&self) -> &str;

    /// Whether the executable can be run at all.
    fn is_available(&self) -> bool;

    /// Whether the working directory already has a repository.
    fn is_repository(&self) -> bool;

    fn init(&self) -> DeployResult<()>;

    /// Stage tracked and untracked changes.
    fn stage_all(&self) -> DeployResult<()>;

    fn commit(&self, message: &CommitMessage) -> DeployResult<()>;

    /// Whether the working tree has anything to commit, untracked files included.
    fn is_dirty(&self) -> DeployResult<bool>;

    /// URL of the named remote, `None` when it is not configured.
    fn remote_url(&self, name: &str) -> DeployResult<Option<String>>;

    fn add_remote(&self, name: &str, url: &str) -> DeployResult<()>;

    fn set_remote_url(&self, name: &str, url: &str) -> DeployResult<()>;

    /// Rename the current branch, replacing any branch with that name.
    fn rename_branch(&self, branch: &str) -> DeployResult<()>;

    /// Push `branch` to `remote` and record it as upstream.
    fn push_upstream(&self, remote: &str, branch: &str) -> DeployResult<()>;

    /// Number of commits reachable from HEAD.
    fn commit_count(&self) -> DeployResult<usize>;
}
