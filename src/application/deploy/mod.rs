//! Deploy Module
//!
//! Orchestrates the deployment flow for stdeploy.
//!
//! ## Structure
//!
//! - `outcome` - Result type (`Outcome`)
//! - `orchestrator` - Core use case logic (`DeployOrchestrator`)
//!
//! ## Usage
//!
//! ```ignore
//! use stdeploy::application::deploy::DeployOrchestrator;
//!
//! let mut orchestrator = DeployOrchestrator::new(root, config, GitCli::new(&root), console);
//! let outcome = orchestrator.run()?;
//! ```

mod orchestrator;
mod outcome;

pub use orchestrator::DeployOrchestrator;
pub use outcome::Outcome;
