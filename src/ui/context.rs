use clap::ValueEnum;

use crate::ui::terminal::{detect_capabilities, TerminalCapabilities};

/// `--color` policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiContext {
    pub verbose: u8,
    pub caps: TerminalCapabilities,
    pub color: bool,
    pub unicode: bool,
    /// Prompts go through dialoguer; otherwise lines are read from stdin.
    pub interactive: bool,
}

impl UiContext {
    pub fn new(verbose: u8, cli_color: Option<ColorWhen>) -> Self {
        Self::from_caps(verbose, cli_color, detect_capabilities())
    }

    pub(crate) fn from_caps(
        verbose: u8,
        cli_color: Option<ColorWhen>,
        caps: TerminalCapabilities,
    ) -> Self {
        let color = match cli_color {
            Some(ColorWhen::Never) => false,
            Some(ColorWhen::Always) => true,
            Some(ColorWhen::Auto) | None => caps.supports_color && !caps.is_ci,
        };

        Self {
            verbose,
            caps,
            color,
            unicode: caps.supports_unicode,
            interactive: caps.stdin_is_tty && caps.is_tty,
        }
    }
}
