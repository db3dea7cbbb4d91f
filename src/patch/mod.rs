// SPDX-License-Identifier: PMPL-1.0-or-later

//! Config document surgery.
//!
//! Splices a new locale record into the locales section of the site
//! configuration source file. The patcher works on the raw text, not a
//! parsed representation: the section is isolated between two literal
//! markers and the new entry is inserted immediately before the closing
//! braces of the last nested entry and the locales object. The file's
//! exact textual layout is preserved outside the insertion.
//!
//! The patcher is deliberately coupled to the literal layout of the
//! target file. If an autoformatter moves the markers or reindents the
//! closing braces, marker detection and the splice pattern stop
//! matching — in that case the patcher fails loudly and leaves the
//! document untouched. A silent no-op is never an acceptable outcome
//! here: an operator who sees "success" must be able to trust that the
//! entry landed.

use crate::error::{read_file, write_file, AutomationError};
use crate::paths::WorkspacePaths;
use crate::types::LocaleRequest;
use regex::Regex;

/// Opening of the locales mapping inside the config document.
const START_MARKER: &str = "locales: {";
/// First token of the section that follows the locales mapping. The
/// patcher never touches anything at or past this marker.
const END_MARKER: &str = "  blog: {";

/// What the patcher did to the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatchOutcome {
    /// The new locale record was spliced in and the file rewritten.
    Inserted,
    /// The document already mentions `<code>: {`; left byte-for-byte
    /// unchanged.
    AlreadyPresent,
}

/// Insert a locale record into the config document's locales section.
///
/// Idempotent via a textual heuristic: if the literal substring
/// `<code>: {` occurs anywhere in the document the call is a no-op.
/// The heuristic can false-positive on an unrelated structure using the
/// same key and false-negative on a differently formatted existing
/// entry; both are accepted trade-offs of staying text-based.
pub fn patch_config(
    paths: &WorkspacePaths,
    request: &LocaleRequest,
) -> Result<PatchOutcome, AutomationError> {
    let content = read_file(&paths.config_path)?;

    let duplicate_needle = format!("{}: {{", request.code);
    if content.contains(&duplicate_needle) {
        return Ok(PatchOutcome::AlreadyPresent);
    }

    let start = content
        .find(START_MARKER)
        .ok_or_else(|| AutomationError::MissingMarker {
            path: paths.config_path.clone(),
            marker: START_MARKER,
        })?;
    let section_start = start + START_MARKER.len();
    let section_end = content[section_start..]
        .find(END_MARKER)
        .map(|offset| section_start + offset)
        .ok_or_else(|| AutomationError::MissingMarker {
            path: paths.config_path.clone(),
            marker: END_MARKER,
        })?;
    let section = &content[section_start..section_end];

    // The splice point: close of the last nested entry, then close of
    // the locales object, with nothing but whitespace after. Absence is
    // a hard failure, never a silent no-op.
    let splice = Regex::new(r"\n[ \t]*\},[ \t]*\n[ \t]*\},\s*\z").unwrap();
    let splice_at = splice
        .find(section)
        .ok_or_else(|| AutomationError::SplicePoint {
            path: paths.config_path.clone(),
        })?
        .start();

    let entry = format!(
        "\n      {code}: {{\n        flag: '{flag}',\n        name: '{name}',\n      }},",
        code = request.code,
        flag = request.flag,
        name = request.name,
    );

    let mut updated = String::with_capacity(content.len() + entry.len());
    updated.push_str(&content[..section_start + splice_at]);
    updated.push_str(&entry);
    updated.push_str(&content[section_start + splice_at..]);

    write_file(&paths.config_path, &updated)?;
    Ok(PatchOutcome::Inserted)
}
