//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (value objects, ports)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `DeployOrchestrator` - preconditions, init, commit, menu, flow dispatch
//!
//! ## Services
//!
//! - `checklist` - Manual Streamlit Cloud steps and the secrets template

pub mod checklist;
pub mod deploy;

pub use checklist::{checklist_lines, secrets_template};
pub use deploy::{DeployOrchestrator, Outcome};
