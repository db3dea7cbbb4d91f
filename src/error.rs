// SPDX-License-Identifier: PMPL-1.0-or-later

//! Error taxonomy for the locale automation pipeline.
//!
//! Every stage failure maps to one of these variants so callers (and
//! tests) can tell a missing input apart from a malformed config file or
//! a failed git invocation. The batch orchestrator converts them into
//! `anyhow::Error` at the per-locale boundary.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AutomationError {
    /// A required input file (canonical message file, config document)
    /// does not exist.
    #[error("required file not found: {}", path.display())]
    NotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The canonical message file is not valid JSON.
    #[error("failed to parse {} as JSON", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A message tree could not be serialized for writing.
    #[error("failed to serialize message tree for {}", path.display())]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The config document lacks the start or end marker that delimits
    /// the locales section.
    #[error("could not find `{marker}` marker in config file {}", path.display())]
    MissingMarker { path: PathBuf, marker: &'static str },

    /// The locales section does not end with the expected closing-brace
    /// pattern, so there is no safe place to splice the new entry.
    #[error(
        "locales section of {} does not end with the expected `}},` / `}},` pattern; refusing to splice",
        path.display()
    )]
    SplicePoint { path: PathBuf },

    /// An external command could not be spawned at all.
    #[error("failed to spawn `{command}`")]
    Spawn {
        command: String,
        #[source]
        source: io::Error,
    },

    /// An external command ran but exited non-zero.
    #[error("`{command}` failed ({status}): {stderr}")]
    CommandFailed {
        command: String,
        status: String,
        stderr: String,
    },

    /// Any other file-system failure (permissions, missing parent
    /// directory on write, ...).
    #[error("file operation failed on {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Read a file to a string, classifying a missing file as `NotFound`.
pub fn read_file(path: &Path) -> Result<String, AutomationError> {
    std::fs::read_to_string(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            AutomationError::NotFound {
                path: path.to_path_buf(),
                source,
            }
        } else {
            AutomationError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })
}

/// Write a file, classifying a missing parent directory as `NotFound`.
pub fn write_file(path: &Path, contents: &str) -> Result<(), AutomationError> {
    std::fs::write(path, contents).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            AutomationError::NotFound {
                path: path.to_path_buf(),
                source,
            }
        } else {
            AutomationError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })
}
