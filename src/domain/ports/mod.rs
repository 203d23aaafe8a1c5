//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod console;
pub mod version_control;

pub use console::Console;
pub use version_control::VersionControl;
