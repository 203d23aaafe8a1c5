//! Severity of a status line shown to the operator.

/// Color class of a reported message.
///
/// Only affects presentation; output is meant for humans, not parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Warning,
    Error,
}

impl Severity {
    /// Errors go to stderr, everything else to stdout.
    pub fn is_error(&self) -> bool {
        matches!(self, Severity::Error)
    }
}
