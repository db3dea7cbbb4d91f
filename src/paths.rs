// SPDX-License-Identifier: PMPL-1.0-or-later

//! Per-run workspace layout.
//!
//! Constructed once from the project root and passed explicitly into
//! each stage, so nothing in the pipeline depends on the process working
//! directory.

use std::path::{Path, PathBuf};

/// Resolved locations of everything the pipeline touches.
#[derive(Debug, Clone)]
pub struct WorkspacePaths {
    /// Project root; git commands run here.
    pub root: PathBuf,
    /// Directory holding per-locale `<code>.json` message files.
    pub messages_dir: PathBuf,
    /// Site configuration source file that carries the locales section.
    pub config_path: PathBuf,
    /// Canonical (English) message file all locales derive from.
    pub canonical_path: PathBuf,
}

impl WorkspacePaths {
    pub fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
            messages_dir: root.join("messages"),
            config_path: root.join("src").join("config").join("website.tsx"),
            canonical_path: root.join("messages").join("en.json"),
        }
    }

    /// Target message file for a locale code.
    pub fn message_file(&self, code: &str) -> PathBuf {
        self.messages_dir.join(format!("{code}.json"))
    }

    /// Directory that receives generated CI workflow files.
    pub fn workflows_dir(&self) -> PathBuf {
        self.root.join(".github").join("workflows")
    }
}
