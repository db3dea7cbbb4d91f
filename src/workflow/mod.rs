// SPDX-License-Identifier: PMPL-1.0-or-later

//! CI workflow emission.
//!
//! Writes the GitHub Actions workflow that runs the locale automation on
//! pushes to main. The YAML is emitted verbatim from a fixed template;
//! it is never parsed or validated here.

use crate::error::AutomationError;
use crate::paths::WorkspacePaths;
use std::fs;
use std::path::PathBuf;

const WORKFLOW_FILE: &str = "add-locales.yml";

const WORKFLOW_TEMPLATE: &str = "\
name: Add Locales Automation
on:
  push:
    branches: [ main ]

jobs:
  add-locales:
    runs-on: ubuntu-latest
    steps:
    - uses: actions/checkout@v4

    - name: Install Rust toolchain
      uses: dtolnay/rust-toolchain@stable

    - name: Run locale automation
      run: cargo run --release -- --add-most-used
";

/// Create `.github/workflows/add-locales.yml`. Returns the path written.
pub fn setup_github_action(paths: &WorkspacePaths) -> Result<PathBuf, AutomationError> {
    let workflows_dir = paths.workflows_dir();
    fs::create_dir_all(&workflows_dir).map_err(|source| AutomationError::Io {
        path: workflows_dir.clone(),
        source,
    })?;

    let workflow_path = workflows_dir.join(WORKFLOW_FILE);
    fs::write(&workflow_path, WORKFLOW_TEMPLATE).map_err(|source| AutomationError::Io {
        path: workflow_path.clone(),
        source,
    })?;
    Ok(workflow_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn writes_workflow_under_github_workflows() {
        let dir = TempDir::new().expect("tempdir should create");
        let paths = WorkspacePaths::new(dir.path());

        let written = setup_github_action(&paths).expect("workflow setup should succeed");
        assert_eq!(
            written,
            dir.path().join(".github").join("workflows").join("add-locales.yml")
        );

        let content = fs::read_to_string(&written).expect("workflow should read");
        assert!(content.starts_with("name: Add Locales Automation"));
        assert!(content.contains("cargo run --release -- --add-most-used"));
    }

    #[test]
    fn rerunning_overwrites_the_workflow() {
        let dir = TempDir::new().expect("tempdir should create");
        let paths = WorkspacePaths::new(dir.path());

        let written = setup_github_action(&paths).expect("first setup should succeed");
        fs::write(&written, "tampered").expect("tamper write should succeed");
        setup_github_action(&paths).expect("second setup should succeed");

        let content = fs::read_to_string(&written).expect("workflow should read");
        assert_eq!(content, WORKFLOW_TEMPLATE);
    }
}
