//! Commit messages written by the orchestrator.

use std::fmt;

use chrono::{Local, NaiveDateTime};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitMessage(String);

impl CommitMessage {
    /// Message for the commit created right after `git init`.
    pub fn initial(project: &str) -> Self {
        Self(format!("Initial commit: {}", project))
    }

    /// Message for committing pending changes at `at`.
    pub fn update(project: &str, at: NaiveDateTime) -> Self {
        Self(format!("Update {}: {}", project, at.format(TIMESTAMP_FORMAT)))
    }

    /// [`CommitMessage::update`] stamped with the local clock.
    pub fn update_now(project: &str) -> Self {
        Self::update(project, Local::now().naive_local())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CommitMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
