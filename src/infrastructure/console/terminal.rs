//! Terminal Console
//!
//! Prompts with dialoguer when stdin and stdout are a terminal; otherwise
//! reads plain lines so the tool can be driven through a pipe.

use std::io::{self, BufRead, Write};

use dialoguer::theme::{ColorfulTheme, SimpleTheme, Theme};
use dialoguer::{Confirm, Input};

use crate::domain::ports::Console;
use crate::domain::value_objects::Severity;
use crate::error::{DeployError, DeployResult};
use crate::ui::output::{heading, status_line};
use crate::ui::UiContext;

pub struct TerminalConsole<R = io::StdinLock<'static>> {
    ui: UiContext,
    reader: R,
}

impl TerminalConsole {
    pub fn new(ui: UiContext) -> Self {
        Self::with_reader(ui, io::stdin().lock())
    }
}

impl<R: BufRead> TerminalConsole<R> {
    /// Console reading piped answers from `reader`.
    pub fn with_reader(ui: UiContext, reader: R) -> Self {
        Self { ui, reader }
    }

    fn theme(&self) -> Box<dyn Theme> {
        if self.ui.color {
            Box::new(ColorfulTheme::default())
        } else {
            Box::new(SimpleTheme)
        }
    }

    /// One line from the reader; EOF yields an empty answer.
    fn read_line(&mut self, label: &str) -> DeployResult<String> {
        print!("{}: ", label);
        io::stdout().flush()?;

        let mut line = String::new();
        let read = self.reader.read_line(&mut line)?;
        if read == 0 {
            tracing::debug!(label, "stdin closed while prompting");
            println!();
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}

fn prompt_error(err: dialoguer::Error) -> DeployError {
    DeployError::Io(io::Error::other(err))
}

impl<R: BufRead> Console for TerminalConsole<R> {
    fn prompt(&mut self, label: &str) -> DeployResult<String> {
        if !self.ui.interactive {
            return self.read_line(label);
        }
        let theme = self.theme();
        Input::<String>::with_theme(theme.as_ref())
            .with_prompt(label)
            .allow_empty(true)
            .interact_text()
            .map_err(prompt_error)
    }

    fn confirm(&mut self, label: &str, default: bool) -> DeployResult<bool> {
        if !self.ui.interactive {
            let hint = if default { "Y/n" } else { "y/N" };
            let answer = self.read_line(&format!("{} [{}]", label, hint))?;
            return Ok(match answer.trim().to_lowercase().as_str() {
                "y" | "yes" => true,
                "n" | "no" => false,
                _ => default,
            });
        }
        let theme = self.theme();
        Confirm::with_theme(theme.as_ref())
            .with_prompt(label)
            .default(default)
            .interact()
            .map_err(prompt_error)
    }

    fn report(&mut self, severity: Severity, message: &str) {
        let line = status_line(severity, message, self.ui.color, self.ui.unicode);
        if severity.is_error() {
            eprintln!("{}", line);
        } else {
            println!("{}", line);
        }
    }

    fn section(&mut self, title: &str) {
        println!();
        println!("{}", heading(title, self.ui.color, self.ui.unicode));
    }

    fn line(&mut self, text: &str) {
        println!("{}", text);
    }
}
