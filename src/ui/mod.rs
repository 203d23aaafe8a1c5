//! Terminal presentation: design tokens, capability detection and
//! severity-colored status lines.

pub mod context;
pub mod output;
pub mod terminal;
pub mod theme;

pub use context::{ColorWhen, UiContext};
