//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `git/` - `VersionControl` backed by the git executable
//! - `console/` - `Console` backed by the terminal
//! - `secrets_guard` - gitignore check for the local secrets file

pub mod console;
pub mod git;
pub mod secrets_guard;

// Re-export for convenience
pub use console::TerminalConsole;
pub use git::GitCli;
