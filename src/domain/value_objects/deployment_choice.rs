//! Deployment choice value object - the operator's menu selection.

use std::fmt;
use std::str::FromStr;

use crate::error::DeployError;

/// What to do once the local repository is committed.
///
/// Read once per run from the menu; drives which flow executes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeploymentChoice {
    /// Create the GitHub remote from account + repository name and push
    NewRepository,
    /// Push to an existing (or prompted) `origin`
    ExistingRepository,
    /// Only print the manual checklist
    PrepareOnly,
    /// Leave without further action
    Exit,
}

impl DeploymentChoice {
    /// Menu order.
    pub const ALL: [DeploymentChoice; 4] = [
        DeploymentChoice::NewRepository,
        DeploymentChoice::ExistingRepository,
        DeploymentChoice::PrepareOnly,
        DeploymentChoice::Exit,
    ];

    /// Key the operator types to select this option.
    pub fn key(&self) -> &'static str {
        match self {
            DeploymentChoice::NewRepository => "1",
            DeploymentChoice::ExistingRepository => "2",
            DeploymentChoice::PrepareOnly => "3",
            DeploymentChoice::Exit => "4",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DeploymentChoice::NewRepository => "Create a new GitHub repository and push",
            DeploymentChoice::ExistingRepository => "Push to an existing GitHub repository",
            DeploymentChoice::PrepareOnly => "Just prepare files (deploy manually)",
            DeploymentChoice::Exit => "Exit",
        }
    }

    /// Whether this flow talks to the remote host.
    pub fn pushes(&self) -> bool {
        matches!(
            self,
            DeploymentChoice::NewRepository | DeploymentChoice::ExistingRepository
        )
    }
}

impl FromStr for DeploymentChoice {
    type Err = DeployError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();
        Self::ALL
            .into_iter()
            .find(|choice| choice.key() == trimmed)
            .ok_or_else(|| DeployError::InvalidChoice {
                input: trimmed.to_string(),
            })
    }
}

impl fmt::Display for DeploymentChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}) {}", self.key(), self.label())
    }
}
