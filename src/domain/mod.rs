//! Domain Layer
//!
//! Deployment concepts without I/O: the menu choice, the remote URL, commit
//! messages, and the ports the orchestrator talks through.
//!
//! ## Structure
//!
//! - `value_objects/` - Immutable value types (DeploymentChoice, RemoteTarget, CommitMessage)
//! - `ports/` - Interface definitions for infrastructure (VersionControl, Console)

pub mod ports;
pub mod value_objects;
