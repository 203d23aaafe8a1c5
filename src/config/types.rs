//! Configuration type definitions

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Named secrets sections, each mapping credential keys to placeholder values.
pub type SecretsSections = BTreeMap<String, BTreeMap<String, String>>;

/// Project layout configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    /// Label used in commit messages
    pub name: String,
    /// Application entry file (marker)
    pub entry_file: String,
    /// Dependency manifest (marker)
    pub manifest: String,
    /// Local secrets file that must never be committed
    pub secrets_file: String,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            name: "Streamlit admin console".to_string(),
            entry_file: "app.py".to_string(),
            manifest: "requirements.txt".to_string(),
            secrets_file: ".streamlit/secrets.toml".to_string(),
        }
    }
}

/// Remote and push configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RemoteConfig {
    /// Remote name to create or reuse
    pub name: String,
    /// Hosting platform used to build new repository URLs
    pub host: String,
    /// Canonical branch every push goes to
    pub branch: String,
    /// Ask before replacing an existing remote URL
    pub confirm_overwrite: bool,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            name: "origin".to_string(),
            host: "github.com".to_string(),
            branch: "main".to_string(),
            confirm_overwrite: false,
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub project: ProjectConfig,
    pub remote: RemoteConfig,
    /// Secrets template printed in the manual checklist
    pub secrets: SecretsSections,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            project: ProjectConfig::default(),
            remote: RemoteConfig::default(),
            secrets: default_secrets(),
        }
    }
}

/// Credentials the admin console reads from Streamlit secrets.
pub fn default_secrets() -> SecretsSections {
    fn section(entries: &[(&str, &str)]) -> BTreeMap<String, String> {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    let mut secrets = SecretsSections::new();
    secrets.insert(
        "supabase".to_string(),
        section(&[
            ("url", "https://your-project.supabase.co"),
            ("anon_key", "your-anon-key"),
        ]),
    );
    secrets.insert("openai".to_string(), section(&[("api_key", "sk-...")]));
    secrets.insert(
        "serper".to_string(),
        section(&[("api_key", "your-serper-key")]),
    );
    secrets
}
