// SPDX-License-Identifier: PMPL-1.0-or-later

//! Publishing the batch with git.
//!
//! Three sequential invocations: `git add .`, `git commit -m <msg>`,
//! `git push origin main`. Each must succeed before the next runs; a
//! non-zero exit aborts immediately with the command's stderr attached.
//! There is no clean-tree precondition: whatever is in the working tree
//! gets staged and committed alongside the generated files. The branch
//! name is fixed.

use crate::error::AutomationError;
use crate::paths::WorkspacePaths;
use crate::types::BatchOutcome;
use colored::Colorize;
use std::path::Path;
use std::process::{Command, Stdio};

/// Commit message for a batch of locale codes.
pub fn commit_message(codes: &[String]) -> String {
    format!("feat: add new locales [{}]", codes.join(", "))
}

/// Stage, commit, and push everything the batch produced.
pub fn publish(paths: &WorkspacePaths, outcome: &BatchOutcome) -> Result<(), AutomationError> {
    let message = commit_message(&outcome.completed);

    run_git(&paths.root, &["add", "."])?;
    println!("  {} staged all changes", "git".cyan());
    run_git(&paths.root, &["commit", "-m", &message])?;
    println!("  {} committed: {message}", "git".cyan());
    run_git(&paths.root, &["push", "origin", "main"])?;
    println!("  {} pushed to origin/main", "git".cyan());
    Ok(())
}

fn run_git(root: &Path, args: &[&str]) -> Result<(), AutomationError> {
    let rendered = format!("git {}", args.join(" "));
    let output = Command::new("git")
        .args(args)
        .current_dir(root)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .map_err(|source| AutomationError::Spawn {
            command: rendered.clone(),
            source,
        })?;

    if !output.status.success() {
        return Err(AutomationError::CommandFailed {
            command: rendered,
            status: output.status.to_string(),
            stderr: clamp_output(String::from_utf8_lossy(&output.stderr).to_string()),
        });
    }
    Ok(())
}

fn clamp_output(mut value: String) -> String {
    const MAX_LEN: usize = 8192;
    if value.len() > MAX_LEN {
        value.truncate(MAX_LEN);
        value.push_str("\n...<truncated>");
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn commit_message_matches_expected_format() {
        let codes = vec!["es".to_string(), "fr".to_string()];
        assert_eq!(commit_message(&codes), "feat: add new locales [es, fr]");
    }

    #[test]
    fn commit_message_for_single_locale_has_no_separator() {
        let codes = vec!["ja".to_string()];
        assert_eq!(commit_message(&codes), "feat: add new locales [ja]");
    }

    #[test]
    #[ignore] // Requires a git binary on PATH
    fn publish_outside_a_repository_fails_with_command_error() {
        let dir = TempDir::new().expect("tempdir should create");
        let paths = WorkspacePaths::new(dir.path());
        let outcome = BatchOutcome {
            completed: vec!["fr".to_string()],
        };

        let err = publish(&paths, &outcome).expect_err("publish should fail outside a repo");
        assert!(
            matches!(
                err,
                AutomationError::CommandFailed { .. } | AutomationError::Spawn { .. }
            ),
            "{err}"
        );
    }
}
