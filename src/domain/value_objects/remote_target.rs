//! Remote target value object - the URL `origin` should point to.

use std::fmt;

use crate::error::{DeployError, DeployResult};

/// A repository URL built once and used to configure the remote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteTarget {
    url: String,
}

impl RemoteTarget {
    /// Build `https://<host>/<account>/<repo>.git`.
    ///
    /// A `.git` suffix already typed on `repo` is not doubled.
    pub fn from_parts(host: &str, account: &str, repo: &str) -> DeployResult<Self> {
        let host = validate_segment("host", host)?;
        let account = validate_segment("GitHub username", account)?;
        let repo = repo.trim();
        let repo = validate_segment("repository name", repo.strip_suffix(".git").unwrap_or(repo))?;

        Ok(Self {
            url: format!("https://{}/{}/{}.git", host, account, repo),
        })
    }

    /// Accept an operator-supplied URL as-is.
    pub fn from_url(url: &str) -> DeployResult<Self> {
        let url = url.trim();
        if url.is_empty() {
            return Err(DeployError::InvalidInput {
                field: "repository URL",
                reason: "must not be empty".to_string(),
            });
        }
        if url.chars().any(char::is_whitespace) {
            return Err(DeployError::InvalidInput {
                field: "repository URL",
                reason: "must not contain whitespace".to_string(),
            });
        }
        Ok(Self {
            url: url.to_string(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn into_url(self) -> String {
        self.url
    }
}

impl fmt::Display for RemoteTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}

fn validate_segment<'a>(field: &'static str, value: &'a str) -> DeployResult<&'a str> {
    let value = value.trim();
    if value.is_empty() {
        return Err(DeployError::InvalidInput {
            field,
            reason: "must not be empty".to_string(),
        });
    }
    if value.contains('/') || value.chars().any(char::is_whitespace) {
        return Err(DeployError::InvalidInput {
            field,
            reason: format!("'{}' must not contain '/' or whitespace", value),
        });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn builds_github_url() {
        let target = RemoteTarget::from_parts("github.com", "acme", "admin-console").unwrap();
        assert_eq!(target.url(), "https://github.com/acme/admin-console.git");
    }

    #[test]
    fn does_not_double_git_suffix() {
        let target = RemoteTarget::from_parts("github.com", "acme", "admin-console.git").unwrap();
        assert_eq!(target.url(), "https://github.com/acme/admin-console.git");
    }

    #[test]
    fn trims_prompt_input() {
        let target = RemoteTarget::from_parts("github.com", " acme ", "console\n").unwrap();
        assert_eq!(target.to_string(), "https://github.com/acme/console.git");
    }

    #[test]
    fn rejects_empty_account() {
        let err = RemoteTarget::from_parts("github.com", "  ", "console").unwrap_err();
        assert_eq!(err.to_string(), "invalid GitHub username: must not be empty");
    }

    #[test]
    fn rejects_bare_git_suffix_as_repo() {
        assert!(RemoteTarget::from_parts("github.com", "acme", ".git").is_err());
    }

    #[test]
    fn rejects_slash_in_repo() {
        let err = RemoteTarget::from_parts("github.com", "acme", "a/b").unwrap_err();
        assert!(matches!(
            err,
            DeployError::InvalidInput {
                field: "repository name",
                ..
            }
        ));
    }

    #[test]
    fn from_url_keeps_value() {
        let target = RemoteTarget::from_url("git@github.com:acme/console.git").unwrap();
        assert_eq!(target.into_url(), "git@github.com:acme/console.git");
    }

    #[test]
    fn from_url_rejects_empty_and_spaces() {
        assert!(RemoteTarget::from_url("").is_err());
        assert!(RemoteTarget::from_url("https://github.com/a b.git").is_err());
    }

    proptest! {
        #[test]
        fn valid_segments_always_build(
            account in "[A-Za-z0-9][A-Za-z0-9-]{0,20}",
            repo in "[A-Za-z0-9_-]{1,30}",
        ) {
            let target = RemoteTarget::from_parts("github.com", &account, &repo).unwrap();
            let prefix = format!("https://github.com/{}/", account);
            prop_assert!(target.url().starts_with(&prefix));
            prop_assert!(target.url().ends_with(".git"));
            prop_assert!(!target.url().ends_with(".git.git"));
        }

        #[test]
        fn segments_with_slash_are_rejected(
            left in "[a-z]{1,8}",
            right in "[a-z]{1,8}",
        ) {
            let repo = format!("{}/{}", left, right);
            prop_assert!(RemoteTarget::from_parts("github.com", "acme", &repo).is_err());
        }
    }
}
