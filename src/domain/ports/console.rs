//! Console Port
//!
//! The operator-facing boundary: blocking prompts and status output.
//! Implementations can be interactive (a terminal) or scripted (tests).

use crate::domain::value_objects::Severity;
use crate::error::DeployResult;

/// Trait for talking to the operator.
///
/// Implementations:
/// - `TerminalConsole` - dialoguer prompts on a TTY, line reads when piped
/// - scripted consoles in tests
pub trait Console {
    /// Ask for one line of text. The raw answer is returned; validation
    /// belongs to the caller.
    fn prompt(&mut self, label: &str) -> DeployResult<String>;

    /// Ask a yes/no question.
    fn confirm(&mut self, label: &str, default: bool) -> DeployResult<bool>;

    /// Emit a status line colored by severity.
    fn report(&mut self, severity: Severity, message: &str);

    /// Emit a section heading.
    fn section(&mut self, title: &str);

    /// Emit a plain line.
    fn line(&mut self, text: &str);
}
