//! Git implementations of the version-control port.

mod cli;

pub use cli::GitCli;
