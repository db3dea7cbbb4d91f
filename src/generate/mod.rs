// SPDX-License-Identifier: PMPL-1.0-or-later

//! Locale file generation.
//!
//! Derives a new locale's message file from the canonical English file.
//! When the request carries no translation data the output is a
//! structural copy: every key path of the canonical tree is preserved
//! and every leaf keeps its English text as placeholder content. That is
//! a known limitation of the automation, not a bug — real translations
//! arrive later, either supplied on the request or edited by hand.

use crate::error::{read_file, write_file, AutomationError};
use crate::paths::WorkspacePaths;
use crate::types::LocaleRequest;
use serde_json::{Map, Value};
use std::path::PathBuf;

/// Generate `messages/<code>.json` for one locale.
///
/// Overwrites any existing file of the same name without warning.
/// Returns the path written.
pub fn generate_message_file(
    paths: &WorkspacePaths,
    request: &LocaleRequest,
) -> Result<PathBuf, AutomationError> {
    let canonical_text = read_file(&paths.canonical_path)?;
    let canonical: Value =
        serde_json::from_str(&canonical_text).map_err(|source| AutomationError::Parse {
            path: paths.canonical_path.clone(),
            source,
        })?;

    // Supplied translation data is trusted verbatim; the caller owns the
    // contract that it mirrors the canonical key structure.
    let tree = match &request.translation_data {
        Some(data) => data.clone(),
        None => structural_copy(&canonical),
    };

    let target = paths.message_file(&request.code);
    let rendered =
        serde_json::to_string_pretty(&tree).map_err(|source| AutomationError::Serialize {
            path: target.clone(),
            source,
        })?;
    write_file(&target, &rendered)?;
    Ok(target)
}

/// Clone a message tree's shape: objects are recreated key by key,
/// everything else (strings, arrays, numbers, null) passes through
/// unchanged as placeholder content.
fn structural_copy(value: &Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut copy = Map::with_capacity(map.len());
            for (key, child) in map {
                copy.insert(key.clone(), structural_copy(child));
            }
            Value::Object(copy)
        }
        other => other.clone(),
    }
}
