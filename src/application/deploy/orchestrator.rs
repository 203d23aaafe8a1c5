//! Deploy Orchestrator
//!
//! Runs the deployment as a straight line:
//! 1. Validate preconditions (marker files, git)
//! 2. Initialize the repository if needed
//! 3. Commit pending changes
//! 4. Prompt for a [`DeploymentChoice`]
//! 5. Execute the chosen flow
//!
//! Any error ends the run; completed steps are not undone.

use std::path::{Path, PathBuf};

use crate::application::checklist::checklist_lines;
use crate::config::Config;
use crate::domain::ports::{Console, VersionControl};
use crate::domain::value_objects::{CommitMessage, DeploymentChoice, RemoteTarget, Severity};
use crate::error::{DeployError, DeployResult};
use crate::infrastructure::secrets_guard::secrets_exposed;

use super::outcome::Outcome;

/// Deployment use case, parameterized by its ports.
pub struct DeployOrchestrator<V, C>
where
    V: VersionControl,
    C: Console,
{
    root: PathBuf,
    config: Config,
    vcs: V,
    console: C,
}

impl<V, C> DeployOrchestrator<V, C>
where
    V: VersionControl,
    C: Console,
{
    pub fn new(root: impl Into<PathBuf>, config: Config, vcs: V, console: C) -> Self {
        Self {
            root: root.into(),
            config,
            vcs,
            console,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn vcs(&self) -> &V {
        &self.vcs
    }

    pub fn console(&self) -> &C {
        &self.console
    }

    /// Run every step and dispatch on the operator's choice.
    pub fn run(&mut self) -> DeployResult<Outcome> {
        self.console.section("Streamlit Cloud deployment");

        self.validate_preconditions()?;
        let initialized = self.ensure_repository_initialized()?;
        let committed = self.ensure_committed()?;
        let choice = self.prompt_deployment_choice()?;
        tracing::info!(?choice, "deployment choice");

        let pushed_to = match choice {
            DeploymentChoice::NewRepository => Some(self.execute_new_repository_flow()?),
            DeploymentChoice::ExistingRepository => {
                Some(self.execute_existing_repository_flow()?)
            }
            DeploymentChoice::PrepareOnly => {
                self.execute_prepare_only_flow()?;
                None
            }
            DeploymentChoice::Exit => {
                self.execute_exit_flow()?;
                None
            }
        };

        Ok(Outcome {
            choice,
            initialized,
            committed,
            pushed_to,
        })
    }

    /// Both marker files must exist and git must be runnable.
    pub fn validate_preconditions(&mut self) -> DeployResult<()> {
        let markers = [&self.config.project.entry_file, &self.config.project.manifest];
        for marker in markers {
            let path = self.root.join(marker);
            if !path.is_file() {
                return Err(DeployError::MissingMarker { path });
            }
            tracing::debug!(path = %path.display(), "found marker file");
        }

        if !self.vcs.is_available() {
            return Err(DeployError::VcsUnavailable {
                program: self.vcs.program().to_string(),
            });
        }

        self.console.report(
            Severity::Success,
            &format!(
                "Found {} and {}",
                self.config.project.entry_file, self.config.project.manifest
            ),
        );
        Ok(())
    }

    /// Init, stage and commit when no repository exists. Returns whether
    /// anything was done.
    pub fn ensure_repository_initialized(&mut self) -> DeployResult<bool> {
        if self.vcs.is_repository() {
            self.console
                .report(Severity::Info, "Git repository already initialized");
            return Ok(false);
        }

        self.console
            .report(Severity::Info, "Initializing git repository...");
        self.vcs.init()?;
        self.warn_if_secrets_exposed();
        self.vcs.stage_all()?;
        self.vcs
            .commit(&CommitMessage::initial(&self.config.project.name))?;
        tracing::info!("created initial commit");

        self.console
            .report(Severity::Success, "Git repository initialized");
        Ok(true)
    }

    /// Commit everything pending. Returns whether a commit was made.
    pub fn ensure_committed(&mut self) -> DeployResult<bool> {
        if !self.vcs.is_dirty()? {
            self.console.report(Severity::Success, "Working tree clean");
            return Ok(false);
        }

        self.console
            .report(Severity::Info, "Committing pending changes...");
        self.warn_if_secrets_exposed();
        self.vcs.stage_all()?;
        let message = CommitMessage::update_now(&self.config.project.name);
        self.vcs.commit(&message)?;
        tracing::info!(%message, "committed pending changes");

        self.console.report(Severity::Success, "Changes committed");
        Ok(true)
    }

    /// Show the menu and read one selection. No retry on bad input.
    pub fn prompt_deployment_choice(&mut self) -> DeployResult<DeploymentChoice> {
        self.console.section("Deployment options");
        for choice in DeploymentChoice::ALL {
            self.console.line(&format!("  {}", choice));
        }

        let input = self.console.prompt("Enter your choice (1-4)")?;
        input.parse()
    }

    /// Prompt for account and repository name, then push there.
    pub fn execute_new_repository_flow(&mut self) -> DeployResult<String> {
        self.console.line(&format!(
            "Create an empty repository on {} first (no README, .gitignore or license).",
            self.config.remote.host
        ));
        let account = self.console.prompt("GitHub username")?;
        let repo = self.console.prompt("Repository name")?;
        self.deploy_to_new_repository(&account, &repo)
    }

    /// Point the remote at `https://<host>/<account>/<repo>.git` and push.
    pub fn deploy_to_new_repository(&mut self, account: &str, repo: &str) -> DeployResult<String> {
        let target = RemoteTarget::from_parts(&self.config.remote.host, account, repo)?;
        self.configure_remote(&target)?;
        self.push(target.into_url())
    }

    /// Reuse the configured remote, or prompt for one, then push.
    pub fn execute_existing_repository_flow(&mut self) -> DeployResult<String> {
        let remote = self.config.remote.name.clone();
        let url = match self.vcs.remote_url(&remote)? {
            Some(url) => {
                self.console
                    .report(Severity::Info, &format!("Using remote '{}': {}", remote, url));
                url
            }
            None => {
                let input = self.console.prompt("Repository URL")?;
                let target = RemoteTarget::from_url(&input)?;
                self.vcs.add_remote(&remote, target.url())?;
                self.console.report(
                    Severity::Success,
                    &format!("Added remote '{}': {}", remote, target),
                );
                target.into_url()
            }
        };
        self.push(url)
    }

    /// Print the manual checklist without touching any remote.
    pub fn execute_prepare_only_flow(&mut self) -> DeployResult<()> {
        self.console.report(
            Severity::Success,
            "Repository is committed and ready; nothing was pushed",
        );
        self.print_checklist(None);
        Ok(())
    }

    pub fn execute_exit_flow(&mut self) -> DeployResult<()> {
        self.console.report(Severity::Info, "Exiting without deploying");
        Ok(())
    }

    fn configure_remote(&mut self, target: &RemoteTarget) -> DeployResult<()> {
        let remote = self.config.remote.name.clone();
        match self.vcs.remote_url(&remote)? {
            None => {
                self.vcs.add_remote(&remote, target.url())?;
                self.console.report(
                    Severity::Success,
                    &format!("Added remote '{}': {}", remote, target),
                );
            }
            Some(existing) if existing == target.url() => {
                self.console.report(
                    Severity::Info,
                    &format!("Remote '{}' already points to {}", remote, target),
                );
            }
            Some(existing) => {
                if self.config.remote.confirm_overwrite {
                    let question =
                        format!("Remote '{}' points to {}. Replace it?", remote, existing);
                    if !self.console.confirm(&question, false)? {
                        return Err(DeployError::Aborted);
                    }
                }
                self.console.report(
                    Severity::Warning,
                    &format!("Replacing remote '{}' (was {})", remote, existing),
                );
                self.vcs.set_remote_url(&remote, target.url())?;
            }
        }
        Ok(())
    }

    fn push(&mut self, url: String) -> DeployResult<String> {
        let remote = self.config.remote.name.clone();
        let branch = self.config.remote.branch.clone();

        self.vcs.rename_branch(&branch)?;
        self.console.report(
            Severity::Info,
            &format!("Pushing '{}' to {}...", branch, url),
        );
        self.vcs.push_upstream(&remote, &branch)?;
        tracing::info!(%url, %branch, "pushed");

        self.console
            .report(Severity::Success, &format!("Pushed '{}' to {}", branch, url));
        self.print_checklist(Some(&url));
        Ok(url)
    }

    fn print_checklist(&mut self, remote: Option<&str>) {
        self.console.section("Next steps on Streamlit Cloud");
        for line in checklist_lines(&self.config, remote) {
            self.console.line(&line);
        }
    }

    fn warn_if_secrets_exposed(&mut self) {
        let secrets_file = &self.config.project.secrets_file;
        if secrets_exposed(&self.root, secrets_file) {
            let message = format!(
                "{} is not in .gitignore and will be committed; add it to .gitignore",
                secrets_file
            );
            self.console.report(Severity::Warning, &message);
        }
    }
}
