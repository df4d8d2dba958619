// SPDX-FileCopyrightText: 2026 Regsuit Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for the regsuit configuration system.

use regsuit_config::diagnostic::ConfigError;
use regsuit_config::model::InvocationType;
use regsuit_config::{load_and_validate_str, load_config_from_str, ConfigManager};
use serde_json::json;
use serial_test::serial;

/// A full document with core options and several plugin entries.
#[test]
fn valid_json_deserializes_into_regsuit_config() {
    let json = r#"{
  "core": {
    "workingDir": ".reg",
    "actualDir": "screenshots",
    "thresholdRate": 0.01,
    "ximgdiff": { "invocationType": "client" }
  },
  "plugins": {
    "reg-keygen-git-hash-plugin": true,
    "reg-publish-s3-plugin": { "bucketName": "$AWS_BUCKET" },
    "reg-notify-slack-plugin": { "disabled": true }
  }
}"#;

    let config = load_config_from_str(json).expect("valid JSON should deserialize");
    assert_eq!(config.core.actual_dir, "screenshots");
    assert_eq!(config.core.threshold_rate, Some(0.01));
    assert_eq!(config.core.ximgdiff.invocation_type, InvocationType::Client);
    assert_eq!(config.plugins.len(), 3);
    assert_eq!(config.plugins["reg-keygen-git-hash-plugin"], json!(true));
    assert!(regsuit_config::is_disabled(&config.plugins["reg-notify-slack-plugin"]));
}

/// Unknown keys under a typed core table produce an UnknownKey diagnostic
/// with a suggestion and span.
#[test]
fn unknown_ximgdiff_key_suggests_correction() {
    let json = r#"{ "core": { "ximgdiff": { "invocationTyp": "cli" } } }"#;

    let errors = load_and_validate_str(json).expect_err("should reject unknown key");
    assert_eq!(errors.len(), 1);
    match &errors[0] {
        ConfigError::UnknownKey {
            key,
            suggestion,
            span,
            ..
        } => {
            assert_eq!(key, "invocationTyp");
            assert_eq!(suggestion.as_deref(), Some("invocationType"));
            let span = span.as_ref().expect("inline source should be located");
            assert_eq!(&json[span.offset()..span.offset() + span.len()], "invocationTyp");
        }
        other => panic!("expected UnknownKey, got {other:?}"),
    }
}

/// Core options this crate does not model are kept for plugins.
#[test]
fn unmodeled_core_keys_pass_through() {
    let config =
        load_and_validate_str(r#"{ "core": { "workingDir": ".reg", "addIgnore": true }, "plugins": {} }"#)
            .expect("unmodeled core keys should load");
    assert_eq!(config.core.working_dir, ".reg");
    assert_eq!(config.core.extra["addIgnore"], json!(true));
}

/// Unknown top-level section is rejected.
#[test]
fn unknown_top_level_section_is_rejected() {
    let errors = load_and_validate_str(r#"{ "plugin": {} }"#).expect_err("should reject");
    assert!(matches!(&errors[0], ConfigError::UnknownKey { key, .. } if key == "plugin"));
}

/// Wrong value type for a core key produces an InvalidType diagnostic.
#[test]
fn wrong_type_produces_invalid_type() {
    let errors =
        load_and_validate_str(r#"{ "core": { "enableAntialias": "yes" } }"#).expect_err("bad type");
    assert!(matches!(&errors[0], ConfigError::InvalidType { key, .. } if key == "core.enableAntialias"));
}

/// Semantic validation runs after deserialization.
#[test]
fn out_of_range_threshold_fails_validation() {
    let errors = load_and_validate_str(r#"{ "core": { "thresholdRate": 2 } }"#)
        .expect_err("should fail validation");
    assert!(matches!(&errors[0], ConfigError::Validation { .. }));
}

/// Loading from a TOML file works like JSON.
#[test]
#[serial]
fn load_from_toml_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("regconfig.toml");
    std::fs::write(
        &path,
        r#"
[core]
workingDir = ".vrt"

[plugins.reg-publish-gcs-plugin]
bucketName = "shots"
"#,
    )
    .unwrap();

    let manager = ConfigManager::load(&path).expect("toml should load");
    assert_eq!(manager.core().working_dir, ".vrt");
    assert_eq!(
        manager.raw().plugins["reg-publish-gcs-plugin"],
        json!({ "bucketName": "shots" })
    );
    assert_eq!(manager.path(), Some(path.as_path()));
}

/// Written documents load back with the same content and plugin order.
#[test]
#[serial]
fn write_then_load_preserves_document() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("regconfig.json");

    let mut manager = ConfigManager::default();
    manager.set_plugin_options("reg-publish-s3-plugin", json!({ "bucketName": "$AWS_BUCKET" }));
    manager.set_plugin_options("reg-keygen-git-hash-plugin", json!({}));
    manager.write_to_path(&path).unwrap();

    let loaded = ConfigManager::load(&path).unwrap();
    assert_eq!(loaded.raw(), manager.raw());
    let names: Vec<&str> = loaded.raw().plugin_names().collect();
    assert_eq!(names, vec!["reg-publish-s3-plugin", "reg-keygen-git-hash-plugin"]);
}

/// Plugin entries keep the order they were written in, not sorted order.
#[test]
#[serial]
fn load_keeps_authored_plugin_order() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("regconfig.json");
    std::fs::write(
        &path,
        r#"{ "plugins": { "reg-notify-slack-plugin": {}, "reg-notify-chatwork-plugin": {}, "reg-keygen-git-hash-plugin": true } }"#,
    )
    .unwrap();

    let manager = ConfigManager::load(&path).unwrap();
    let names: Vec<&str> = manager.raw().plugin_names().collect();
    assert_eq!(
        names,
        vec![
            "reg-notify-slack-plugin",
            "reg-notify-chatwork-plugin",
            "reg-keygen-git-hash-plugin"
        ]
    );
}

/// TOML plugin tables keep their authored order too.
#[test]
#[serial]
fn toml_load_keeps_authored_plugin_order() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("regconfig.toml");
    std::fs::write(
        &path,
        r#"
[plugins.reg-publish-s3-plugin]
bucketName = "shots"

[plugins.reg-keygen-git-hash-plugin]
"#,
    )
    .unwrap();

    let manager = ConfigManager::load(&path).unwrap();
    let names: Vec<&str> = manager.raw().plugin_names().collect();
    assert_eq!(names, vec!["reg-publish-s3-plugin", "reg-keygen-git-hash-plugin"]);
}

/// A missing file loads as the default document, remembering the path for `save`.
#[test]
#[serial]
fn load_of_missing_file_starts_from_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("regconfig.json");

    let manager = ConfigManager::load(&path).expect("missing file should load defaults");
    assert_eq!(manager.core().working_dir, ".reg");
    assert!(manager.raw().plugins.is_empty());
    assert_eq!(manager.path(), Some(path.as_path()));

    manager.save().unwrap();
    assert!(path.exists());
}

/// `REG_SUIT_CORE_*` variables override file values.
#[test]
#[serial]
fn env_overrides_core_values() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("regconfig.json");
    std::fs::write(&path, r#"{ "core": { "workingDir": ".reg" } }"#).unwrap();

    // SAFETY: serialized with the other env-mutating tests in this binary.
    unsafe { std::env::set_var("REG_SUIT_CORE_WORKING_DIR", ".from-env") };
    let result = ConfigManager::load(&path);
    unsafe { std::env::remove_var("REG_SUIT_CORE_WORKING_DIR") };

    assert_eq!(result.unwrap().core().working_dir, ".from-env");
}

/// `replace_env` reads the process environment.
#[test]
#[serial]
fn replace_env_reads_process_environment() {
    let mut manager = ConfigManager::new(
        serde_json::from_value(json!({
            "plugins": { "reg-notify-slack-plugin": { "webhookUrl": "$REGSUIT_TEST_WEBHOOK" } }
        }))
        .unwrap(),
    );

    unsafe { std::env::set_var("REGSUIT_TEST_WEBHOOK", "https://hooks.example/T0") };
    let url = manager.replace_env().plugins["reg-notify-slack-plugin"]["webhookUrl"].clone();
    unsafe { std::env::remove_var("REGSUIT_TEST_WEBHOOK") };

    assert_eq!(url, "https://hooks.example/T0");
}
