//! stdeploy CLI
//!
//! Usage: stdeploy [-v] [--color <WHEN>] [-C <PATH>]
//!
//! Runs the interactive deployment in the current directory (or `-C`).

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use stdeploy::domain::ports::Console;
use stdeploy::domain::value_objects::Severity;
use stdeploy::logging::init_logging;
use stdeploy::ui::output::{hint, status_line};
use stdeploy::ui::UiContext;
use stdeploy::{config, DeployError, DeployOrchestrator, GitCli, TerminalConsole};

mod cli;

use cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let ui = UiContext::new(cli.verbose, cli.color);
    init_logging(cli.verbose, ui.color);

    match run(cli, ui) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_error(&err, &ui);
            let code = err
                .downcast_ref::<DeployError>()
                .map(DeployError::exit_code)
                .unwrap_or(1);
            ExitCode::from(code as u8)
        }
    }
}

fn run(cli: Cli, ui: UiContext) -> Result<()> {
    let root = resolve_root(cli.dir)?;
    let loaded = config::load(&root)?;
    match &loaded.source {
        Some(path) => tracing::info!(path = %path.display(), "loaded configuration"),
        None => tracing::debug!("using built-in configuration"),
    }

    let mut console = TerminalConsole::new(ui);
    for warning in &loaded.warnings {
        console.report(Severity::Warning, &warning.message());
    }

    let git = GitCli::new(root.clone());
    let mut orchestrator = DeployOrchestrator::new(root, loaded.config, git, console);
    let outcome = orchestrator.run()?;
    tracing::info!(
        choice = ?outcome.choice,
        pushed = outcome.pushed(),
        "deployment finished"
    );
    Ok(())
}

fn resolve_root(dir: Option<PathBuf>) -> Result<PathBuf> {
    match dir {
        Some(dir) => {
            if !dir.is_dir() {
                anyhow::bail!("'{}' is not a directory", dir.display());
            }
            Ok(dir)
        }
        None => std::env::current_dir().context("could not determine the current directory"),
    }
}

fn report_error(err: &anyhow::Error, ui: &UiContext) {
    eprintln!(
        "{}",
        status_line(Severity::Error, &format!("{:#}", err), ui.color, ui.unicode)
    );
    if let Some(advice) = err.downcast_ref::<DeployError>().and_then(DeployError::hint) {
        eprintln!("{}", hint(advice, ui.color, ui.unicode));
    }
}
