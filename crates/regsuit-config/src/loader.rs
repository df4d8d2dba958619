// SPDX-FileCopyrightText: 2026 Regsuit Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Merge order (later overrides earlier):
//! 1. Compiled defaults
//! 2. The configuration file (`regconfig.json`, or an explicit `.json`/`.toml` path)
//! 3. `REG_SUIT_CORE_*` environment variables (core section only)
//!
//! Figment keeps dictionaries sorted by key, so the `plugins` section is
//! re-read from the source text afterwards to keep the authored order.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    providers::{Env, Format, Json, Serialized, Toml},
    Figment,
};
use serde_json::{Map, Value};

use crate::model::RegSuitConfig;

/// File looked up in the current directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "regconfig.json";

/// Env suffix to camelCase core key.
const CORE_ENV_KEYS: &[(&str, &str)] = &[
    ("working_dir", "workingDir"),
    ("actual_dir", "actualDir"),
    ("threshold_rate", "thresholdRate"),
    ("threshold_pixel", "thresholdPixel"),
    ("matching_threshold", "matchingThreshold"),
    ("enable_antialias", "enableAntialias"),
    ("concurrency", "concurrency"),
];

/// Load `./regconfig.json` with env var overrides.
///
/// A missing file yields the compiled defaults.
pub fn load_config() -> Result<RegSuitConfig, figment::Error> {
    load_config_from_path(Path::new(DEFAULT_CONFIG_FILE))
}

/// Load configuration from a specific file path with env var overrides.
///
/// Files ending in `.toml` are parsed as TOML, everything else as JSON.
/// A missing file yields the compiled defaults.
pub fn load_config_from_path(path: &Path) -> Result<RegSuitConfig, figment::Error> {
    let mut config: RegSuitConfig = build_figment(path).extract()?;
    if let Ok(content) = std::fs::read_to_string(path) {
        let document = if is_toml(path) {
            toml::from_str::<toml::Table>(&content)
                .ok()
                .and_then(|table| serde_json::to_value(table).ok())
        } else {
            serde_json::from_str(&content).ok()
        };
        restore_plugin_order(&mut config, document);
    }
    Ok(config)
}

/// Load configuration from a JSON string only (no file lookup, no env).
pub fn load_config_from_str(json: &str) -> Result<RegSuitConfig, figment::Error> {
    let mut config: RegSuitConfig = Figment::new()
        .merge(Serialized::defaults(RegSuitConfig::default()))
        .merge(Json::string(json))
        .extract()?;
    restore_plugin_order(&mut config, serde_json::from_str(json).ok());
    Ok(config)
}

/// Replace `config.plugins` with the section as authored in `document`.
///
/// Env overrides never touch `plugins`, so the authored section is the
/// extracted one in its original order.
fn restore_plugin_order(config: &mut RegSuitConfig, document: Option<Value>) {
    if let Some(plugins) = document.and_then(authored_plugins) {
        config.plugins = plugins;
    }
}

fn authored_plugins(document: Value) -> Option<Map<String, Value>> {
    match document {
        Value::Object(mut root) => match root.remove("plugins")? {
            Value::Object(plugins) => Some(plugins),
            _ => None,
        },
        _ => None,
    }
}

/// Build the Figment used for file-based loading (exposed for diagnostic use).
pub fn build_figment(path: &Path) -> Figment {
    let figment = Figment::new().merge(Serialized::defaults(RegSuitConfig::default()));
    let figment = if is_toml(path) {
        figment.merge(Toml::file(path))
    } else {
        figment.merge(Json::file(path))
    };
    figment.merge(env_provider())
}

pub(crate) fn is_toml(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "toml")
}

/// Map `REG_SUIT_CORE_WORKING_DIR` to `core.workingDir`.
///
/// Uses an explicit table rather than `Env::split("_")` because core keys
/// are camelCase. Lowercasing is disabled so the camelCase survives.
fn env_provider() -> Env {
    Env::prefixed("REG_SUIT_CORE_").lowercase(false).map(|key| {
        let key_str = key.as_str();
        let core_key = CORE_ENV_KEYS
            .iter()
            .find(|(env, _)| env.eq_ignore_ascii_case(key_str))
            .map(|(_, core)| (*core).to_string())
            .unwrap_or_else(|| key_str.to_ascii_lowercase());
        format!("core.{core_key}").into()
    })
}
