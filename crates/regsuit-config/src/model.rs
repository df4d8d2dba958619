// SPDX-FileCopyrightText: 2026 Regsuit Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration document model.
//!
//! The document has two sections: `core` holds the global runner options,
//! and `plugins` maps each plugin name to an arbitrary options value owned by
//! that plugin. Core keys without a typed field are kept in
//! [`CoreConfig::extra`] and handed to plugins unchanged.

use regsuit_core::WorkingDirs;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Options value that marks a plugin as disabled.
pub fn disabled_marker() -> Value {
    let mut map = Map::new();
    map.insert("disabled".to_string(), Value::Bool(true));
    Value::Object(map)
}

/// Returns true if `options` is an object with `"disabled": true`.
///
/// Any other value, including `false` or a scalar, leaves the plugin enabled.
pub fn is_disabled(options: &Value) -> bool {
    options.get("disabled").and_then(Value::as_bool) == Some(true)
}

/// Top-level configuration document (`regconfig.json`).
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RegSuitConfig {
    /// Global runner options.
    #[serde(default)]
    pub core: CoreConfig,

    /// Plugin name to plugin options, in authored order.
    #[serde(default)]
    pub plugins: Map<String, Value>,
}

impl RegSuitConfig {
    /// Options configured for `name`, if the document has an entry for it.
    pub fn plugin_options(&self, name: &str) -> Option<&Value> {
        self.plugins.get(name)
    }

    /// Names of all plugins that have an entry, in document order.
    pub fn plugin_names(&self) -> impl Iterator<Item = &str> {
        self.plugins.keys().map(String::as_str)
    }
}

/// Core keys with a typed field in [`CoreConfig`].
pub const CORE_KEYS: &[&str] = &[
    "workingDir",
    "actualDir",
    "thresholdRate",
    "thresholdPixel",
    "matchingThreshold",
    "enableAntialias",
    "concurrency",
    "ximgdiff",
];

/// Global runner options shared with every plugin.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoreConfig {
    /// Directory for generated files (actual/expected/diff images, report).
    #[serde(default = "default_working_dir")]
    pub working_dir: String,

    /// Directory containing the screenshots captured by the current run.
    #[serde(default = "default_actual_dir")]
    pub actual_dir: String,

    /// Ratio of changed pixels tolerated before an image counts as failed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub threshold_rate: Option<f64>,

    /// Absolute number of changed pixels tolerated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub threshold_pixel: Option<u64>,

    /// Per-pixel color distance under which pixels are considered equal.
    #[serde(default)]
    pub matching_threshold: f64,

    /// Ignore anti-aliased pixels when comparing.
    #[serde(default)]
    pub enable_antialias: bool,

    /// Number of comparison workers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub concurrency: Option<usize>,

    /// Detail-diff report settings.
    #[serde(default)]
    pub ximgdiff: XimgdiffConfig,

    /// Core keys without a typed field, passed through to plugins.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            working_dir: default_working_dir(),
            actual_dir: default_actual_dir(),
            threshold_rate: None,
            threshold_pixel: None,
            matching_threshold: 0.0,
            enable_antialias: false,
            concurrency: None,
            ximgdiff: XimgdiffConfig::default(),
            extra: Map::new(),
        }
    }
}

impl CoreConfig {
    /// Directories derived from `working_dir`.
    pub fn working_dirs(&self) -> WorkingDirs {
        WorkingDirs::new(&self.working_dir)
    }
}

fn default_working_dir() -> String {
    ".reg".to_string()
}

fn default_actual_dir() -> String {
    "directory_contains_actual_images".to_string()
}

/// Detail-diff report settings.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct XimgdiffConfig {
    #[serde(default)]
    pub invocation_type: InvocationType,
}

/// Where the detail diff is computed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InvocationType {
    None,
    Client,
    #[default]
    Cli,
}
