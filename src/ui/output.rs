use crossterm::style::Stylize;

use crate::domain::value_objects::Severity;
use crate::ui::theme;

fn icon(severity: Severity, supports_unicode: bool) -> &'static str {
    match (supports_unicode, severity) {
        (true, Severity::Info) => theme::icons::INFO,
        (true, Severity::Success) => theme::icons::SUCCESS,
        (true, Severity::Warning) => theme::icons::WARNING,
        (true, Severity::Error) => theme::icons::ERROR,
        (false, Severity::Info) => theme::icons_ascii::INFO,
        (false, Severity::Success) => theme::icons_ascii::SUCCESS,
        (false, Severity::Warning) => theme::icons_ascii::WARNING,
        (false, Severity::Error) => theme::icons_ascii::ERROR,
    }
}

fn color(severity: Severity) -> crossterm::style::Color {
    match severity {
        Severity::Info => theme::colors::INFO,
        Severity::Success => theme::colors::SUCCESS,
        Severity::Warning => theme::colors::WARNING,
        Severity::Error => theme::colors::ERROR,
    }
}

/// `"<icon> <message>"`, icon and message colored by severity.
pub fn status_line(
    severity: Severity,
    message: &str,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let icon = icon(severity, supports_unicode);
    if !supports_color {
        return format!("{} {}", icon, message);
    }
    let color = color(severity);
    format!("{} {}", icon.with(color), message.with(color))
}

/// Bold heading, prefixed with the deploy icon.
pub fn heading(title: &str, supports_color: bool, supports_unicode: bool) -> String {
    let icon = if supports_unicode {
        theme::icons::DEPLOY
    } else {
        theme::icons_ascii::DEPLOY
    };
    if !supports_color {
        return format!("{} {}", icon, title);
    }
    format!("{} {}", icon, title.bold())
}

/// Secondary line, e.g. a hint under a status line.
pub fn hint(text: &str, supports_color: bool, supports_unicode: bool) -> String {
    let arrow = if supports_unicode {
        theme::icons::ARROW
    } else {
        theme::icons_ascii::ARROW
    };
    if !supports_color {
        return format!("  {} {}", arrow, text);
    }
    format!(
        "  {} {}",
        arrow.with(theme::colors::DIM),
        text.with(theme::colors::DIM)
    )
}
