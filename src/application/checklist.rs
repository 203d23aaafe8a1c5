//! Manual steps to finish a deployment on Streamlit Cloud.

use crate::config::{Config, SecretsSections};

pub const STREAMLIT_CLOUD_URL: &str = "https://share.streamlit.io";

/// Render the secrets sections as a TOML document to paste into the
/// Streamlit Cloud secrets editor.
pub fn secrets_template(sections: &SecretsSections) -> String {
    toml::to_string(sections).unwrap_or_default()
}

/// Numbered checklist lines. `remote` names the pushed repository when known.
pub fn checklist_lines(config: &Config, remote: Option<&str>) -> Vec<String> {
    let repository = match remote {
        Some(url) => format!("repository {}", url),
        None => "your repository".to_string(),
    };

    let mut lines = vec![
        format!("1. Open {} and choose \"New app\"", STREAMLIT_CLOUD_URL),
        format!(
            "2. Select {}, branch '{}', main file '{}'",
            repository, config.remote.branch, config.project.entry_file
        ),
    ];

    if config.secrets.is_empty() {
        lines.push("3. Add any secrets under Advanced settings > Secrets".to_string());
    } else {
        lines.push("3. Under Advanced settings > Secrets, paste:".to_string());
        lines.extend(
            secrets_template(&config.secrets)
                .lines()
                .map(|line| format!("     {}", line)),
        );
    }

    lines.push("4. Click \"Deploy\" and wait for the app to start".to_string());
    lines
}
