// SPDX-License-Identifier: PMPL-1.0-or-later

//! Batch-level tests: abort semantics and the full generate-then-patch
//! scenario against a realistic workspace layout.

use localesmith::batch;
use localesmith::error::AutomationError;
use localesmith::paths::WorkspacePaths;
use localesmith::types::LocaleRequest;
use serde_json::json;
use std::fs;
use tempfile::TempDir;

const CONFIG: &str = "\
export const websiteConfig = {
  i18n: {
    locales: {
      en: {
        flag: '🇺🇸',
        name: 'English',
      },
    },
  },
  blog: {
    postsPerPage: 10,
  },
};
";

fn workspace() -> (TempDir, WorkspacePaths) {
    let dir = TempDir::new().expect("tempdir should create");
    let paths = WorkspacePaths::new(dir.path());
    fs::create_dir_all(&paths.messages_dir).expect("messages dir should create");
    fs::create_dir_all(paths.config_path.parent().expect("config path should have parent"))
        .expect("config dir should create");
    fs::write(
        &paths.canonical_path,
        serde_json::to_string_pretty(&json!({ "nav": { "login": "Log in" } }))
            .expect("canonical should serialize"),
    )
    .expect("canonical should write");
    fs::write(&paths.config_path, CONFIG).expect("config should write");
    (dir, paths)
}

#[test]
fn end_to_end_single_locale() {
    let (_dir, paths) = workspace();
    let requests = vec![LocaleRequest::new("fr", "🇫🇷", "French")];

    let outcome = batch::run_batch(&paths, &requests).expect("batch should succeed");
    assert_eq!(outcome.completed, vec!["fr".to_string()]);

    // Structural clone carrying the English placeholder text.
    let generated =
        fs::read_to_string(paths.message_file("fr")).expect("generated file should read");
    assert_eq!(
        generated,
        "{\n  \"nav\": {\n    \"login\": \"Log in\"\n  }\n}"
    );

    // Entry spliced before the closing locales braces, rest byte-identical.
    let expected_config = "\
export const websiteConfig = {
  i18n: {
    locales: {
      en: {
        flag: '🇺🇸',
        name: 'English',
      },
      fr: {
        flag: '🇫🇷',
        name: 'French',
      },
    },
  },
  blog: {
    postsPerPage: 10,
  },
};
";
    let config = fs::read_to_string(&paths.config_path).expect("config should read");
    assert_eq!(config, expected_config);
}

#[test]
fn batch_processes_locales_in_order() {
    let (_dir, paths) = workspace();
    let requests = vec![
        LocaleRequest::new("de", "🇩🇪", "German"),
        LocaleRequest::new("fr", "🇫🇷", "French"),
    ];

    let outcome = batch::run_batch(&paths, &requests).expect("batch should succeed");
    assert_eq!(
        outcome.completed,
        vec!["de".to_string(), "fr".to_string()]
    );

    let config = fs::read_to_string(&paths.config_path).expect("config should read");
    let de_at = config.find("de: {").expect("de entry should exist");
    let fr_at = config.find("fr: {").expect("fr entry should exist");
    assert!(de_at < fr_at, "entries should appear in processing order");
}

#[test]
fn batch_aborts_on_first_failure_and_never_publishes() {
    let (_dir, paths) = workspace();
    // The middle locale's code points into a directory that does not
    // exist, so its message-file write fails.
    let requests = vec![
        LocaleRequest::new("de", "🇩🇪", "German"),
        LocaleRequest::new("zz/bad", "🌐", "zz/bad"),
        LocaleRequest::new("fr", "🇫🇷", "French"),
    ];

    let err = batch::add_locales(&paths, &requests)
        .expect_err("batch should abort on the failing locale");

    // The failure is the generator's, not git's: publish was never
    // reached (a publish failure would surface as Spawn/CommandFailed).
    let automation_err = err
        .downcast_ref::<AutomationError>()
        .expect("error chain should carry an AutomationError");
    assert!(
        matches!(automation_err, AutomationError::NotFound { .. }),
        "{automation_err}"
    );

    // First locale is fully processed.
    assert!(paths.message_file("de").exists());
    let config = fs::read_to_string(&paths.config_path).expect("config should read");
    assert!(config.contains("de: {"));

    // Locales after the failing one are never attempted.
    assert!(!paths.message_file("fr").exists());
    assert!(!config.contains("fr: {"));
}

#[test]
fn rerunning_a_batch_skips_already_patched_locales() {
    let (_dir, paths) = workspace();
    let requests = vec![LocaleRequest::new("fr", "🇫🇷", "French")];

    batch::run_batch(&paths, &requests).expect("first run should succeed");
    let after_first = fs::read_to_string(&paths.config_path).expect("config should read");

    let outcome = batch::run_batch(&paths, &requests).expect("second run should succeed");
    assert_eq!(outcome.completed, vec!["fr".to_string()]);
    let after_second = fs::read_to_string(&paths.config_path).expect("config should read");
    assert_eq!(after_first, after_second);
}

#[test]
fn supplied_translation_data_flows_through_the_batch() {
    let (_dir, paths) = workspace();
    let requests = vec![LocaleRequest::new("es", "🇪🇸", "Spanish")
        .with_translation(json!({ "nav": { "login": "Iniciar sesión" } }))];

    batch::run_batch(&paths, &requests).expect("batch should succeed");
    let generated: serde_json::Value = serde_json::from_str(
        &fs::read_to_string(paths.message_file("es")).expect("generated file should read"),
    )
    .expect("generated file should parse");
    assert_eq!(generated["nav"]["login"], json!("Iniciar sesión"));
}
