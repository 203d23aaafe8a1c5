//! Secrets guard
//!
//! Detects a local secrets file that `git add -A` would pick up because the
//! project's `.gitignore` does not exclude it.

use std::path::Path;

use ignore::gitignore::GitignoreBuilder;

/// Whether `secrets_file` (relative to `root`) exists and is not ignored.
///
/// Only the top-level `.gitignore` is consulted. An unreadable or invalid
/// `.gitignore` counts as not ignoring anything.
pub fn secrets_exposed(root: &Path, secrets_file: &str) -> bool {
    let relative = Path::new(secrets_file);
    if !root.join(relative).is_file() {
        return false;
    }

    let mut builder = GitignoreBuilder::new(root);
    let gitignore = root.join(".gitignore");
    if gitignore.is_file() {
        if let Some(err) = builder.add(&gitignore) {
            tracing::warn!(path = %gitignore.display(), error = %err, "could not read .gitignore");
        }
    }

    match builder.build() {
        Ok(matcher) => !matcher
            .matched_path_or_any_parents(relative, false)
            .is_ignore(),
        Err(err) => {
            tracing::warn!(error = %err, "invalid .gitignore patterns");
            true
        }
    }
}
