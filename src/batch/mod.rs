// SPDX-License-Identifier: PMPL-1.0-or-later

//! Batch orchestration.
//!
//! Runs the per-locale pipeline strictly sequentially, one explicit
//! stage at a time: generate the message file, then patch the config.
//! Any step failure is logged once at the per-locale boundary with the
//! failing code and stage, then re-raised — the remaining queue is
//! abandoned and the publisher never runs. A failed batch therefore
//! leaves earlier locales generated-and-patched but uncommitted, and
//! later locales untouched; the operator reconciles by hand. (Whether
//! the batch should instead continue past a single failure and report a
//! summary is an open product question; until that is settled the
//! abort-on-first-failure semantics stand.)

use crate::paths::WorkspacePaths;
use crate::patch::{self, PatchOutcome};
use crate::publish;
use crate::types::{BatchOutcome, LocaleRequest, LocaleStage};
use crate::{generate, registry};
use anyhow::{Context, Result};
use colored::Colorize;

/// Tracks one locale's progress through the pipeline states.
#[derive(Debug)]
struct LocaleProgress {
    code: String,
    stage: LocaleStage,
}

impl LocaleProgress {
    fn new(code: &str) -> Self {
        Self {
            code: code.to_string(),
            stage: LocaleStage::Pending,
        }
    }

    fn advance(&mut self, stage: LocaleStage) {
        self.stage = stage;
    }
}

/// Run the generate-and-patch pipeline for every requested locale.
///
/// Stops at the first failure; locales after the failing one are never
/// attempted. Returns the codes of the locales that completed.
pub fn run_batch(paths: &WorkspacePaths, requests: &[LocaleRequest]) -> Result<BatchOutcome> {
    println!(
        "Starting locale automation for {} locale(s)...",
        requests.len()
    );

    let mut outcome = BatchOutcome::default();
    for request in requests {
        let mut progress = LocaleProgress::new(&request.code);
        match process_locale(paths, request, &mut progress) {
            Ok(()) => {
                progress.advance(LocaleStage::Done);
                println!("{} added locale: {}", "ok".green(), request.code.bold());
                outcome.completed.push(request.code.clone());
            }
            Err(err) => {
                // Log with the stage that was in flight, then mark failed
                // and re-raise to abort the remaining queue.
                eprintln!(
                    "{} locale {} failed while {}: {:#}",
                    "error".red(),
                    progress.code.bold(),
                    progress.stage,
                    err
                );
                progress.advance(LocaleStage::Failed);
                return Err(err);
            }
        }
    }
    Ok(outcome)
}

fn process_locale(
    paths: &WorkspacePaths,
    request: &LocaleRequest,
    progress: &mut LocaleProgress,
) -> Result<()> {
    println!("Processing locale: {}", request.code.bold());

    progress.advance(LocaleStage::Generating);
    let written = generate::generate_message_file(paths, request)
        .with_context(|| format!("{} for {}", LocaleStage::Generating, request.code))?;
    println!("  created {}", written.display());

    progress.advance(LocaleStage::Patching);
    match patch::patch_config(paths, request)
        .with_context(|| format!("{} for {}", LocaleStage::Patching, request.code))?
    {
        PatchOutcome::Inserted => println!("  patched config with {}", request.code),
        PatchOutcome::AlreadyPresent => {
            println!("  {} already in config, skipping patch", request.code)
        }
    }
    Ok(())
}

/// Full run: process every locale, then publish the batch with git.
///
/// Publishing happens once per batch and only when every locale
/// succeeded.
pub fn add_locales(paths: &WorkspacePaths, requests: &[LocaleRequest]) -> Result<()> {
    warn_on_unknown_codes(requests);

    let outcome = run_batch(paths, requests)?;
    publish::publish(paths, &outcome)?;
    println!(
        "{}",
        "Locale automation completed successfully".green().bold()
    );
    Ok(())
}

fn warn_on_unknown_codes(requests: &[LocaleRequest]) {
    for request in requests {
        if !registry::is_known_code(&request.code) {
            eprintln!(
                "{} `{}` is not a recognised ISO 639-1 code; using it as-is",
                "warning:".yellow(),
                request.code
            );
        }
    }
}
