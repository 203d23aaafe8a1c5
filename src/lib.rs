//! stdeploy - push a Streamlit app to GitHub for Streamlit Cloud
//!
//! Checks the project root, initializes and commits the git repository,
//! then lets the operator pick how to publish it: a new GitHub repository,
//! an existing one, or a printed checklist for doing it by hand.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;
pub mod ui;

// Re-exports for convenience
pub use application::{DeployOrchestrator, Outcome};
pub use config::{Config, LoadedConfig};
pub use domain::value_objects::{CommitMessage, DeploymentChoice, RemoteTarget, Severity};
pub use error::{DeployError, DeployResult};
pub use infrastructure::{GitCli, TerminalConsole};
