//! Deploy Outcome
//!
//! What a completed run did.

use crate::domain::value_objects::DeploymentChoice;

/// Summary of a successful run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    /// Flow the operator selected
    pub choice: DeploymentChoice,
    /// A repository was created by this run
    pub initialized: bool,
    /// Pending changes were committed by this run
    pub committed: bool,
    /// Remote URL that was pushed to, if any
    pub pushed_to: Option<String>,
}

impl Outcome {
    pub fn pushed(&self) -> bool {
        self.pushed_to.is_some()
    }
}
