// SPDX-License-Identifier: PMPL-1.0-or-later

//! Core types shared across the locale automation pipeline.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// One requested locale: code, display flag, display name, and optional
/// pre-supplied translation content shaped like the canonical file.
///
/// Immutable for the duration of a run. When `translation_data` is
/// `None` the generator falls back to a structural copy of the canonical
/// tree (English placeholder text).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocaleRequest {
    pub code: String,
    pub flag: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub translation_data: Option<Value>,
}

impl LocaleRequest {
    pub fn new(code: &str, flag: &str, name: &str) -> Self {
        Self {
            code: code.to_string(),
            flag: flag.to_string(),
            name: name.to_string(),
            translation_data: None,
        }
    }

    pub fn with_translation(mut self, data: Value) -> Self {
        self.translation_data = Some(data);
        self
    }
}

/// Per-locale pipeline state. Strictly sequential:
/// `Pending -> Generating -> Patching -> Done`, or `Failed` from any
/// intermediate state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LocaleStage {
    Pending,
    Generating,
    Patching,
    Done,
    Failed,
}

impl fmt::Display for LocaleStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            LocaleStage::Pending => "pending",
            LocaleStage::Generating => "generating message file",
            LocaleStage::Patching => "patching config",
            LocaleStage::Done => "done",
            LocaleStage::Failed => "failed",
        };
        f.write_str(label)
    }
}

/// Locales successfully processed in one run. Feeds the commit message;
/// never persisted beyond the process.
#[derive(Debug, Clone, Default)]
pub struct BatchOutcome {
    pub completed: Vec<String>,
}

impl BatchOutcome {
    pub fn is_empty(&self) -> bool {
        self.completed.is_empty()
    }
}
