// SPDX-License-Identifier: PMPL-1.0-or-later

//! localesmith — locale-file automation for a content-driven website.
//!
//! One-shot batch pipeline with three sequential stages per run:
//!
//! 1. **Generate**: derive a per-locale JSON message file from the
//!    canonical English file (structural copy with English placeholder
//!    text, or supplied translation data verbatim).
//! 2. **Patch**: splice a matching locale record into the site config
//!    source file by marker-delimited text surgery.
//! 3. **Publish**: stage, commit, and push the batch with git.
//!
//! Stages run strictly sequentially, never concurrently; the first
//! failure aborts the whole batch before anything is committed.

pub mod batch;
pub mod error;
pub mod generate;
pub mod patch;
pub mod paths;
pub mod publish;
pub mod registry;
pub mod types;
pub mod workflow;
