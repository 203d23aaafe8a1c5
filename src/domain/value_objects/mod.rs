//! Domain Value Objects
//!
//! Immutable value types that represent deployment concepts.

mod commit_message;
mod deployment_choice;
mod remote_target;
mod severity;

pub use commit_message::CommitMessage;
pub use deployment_choice::DeploymentChoice;
pub use remote_target::RemoteTarget;
pub use severity::Severity;
