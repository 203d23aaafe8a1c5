//! Console implementations.

mod terminal;

pub use terminal::TerminalConsole;
