// SPDX-FileCopyrightText: 2026 Regsuit Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Environment placeholder replacement.
//!
//! Plugin options commonly reference secrets as `"$SLACK_WEBHOOK_URL"` so the
//! document can be committed. Replacement walks the `plugins` section and
//! substitutes every string that is exactly one `$NAME` placeholder.

use serde_json::{Map, Value};
use tracing::warn;

use crate::model::RegSuitConfig;

/// Returns the variable name if `s` is a `$NAME` placeholder.
pub fn placeholder_name(s: &str) -> Option<&str> {
    let name = s.strip_prefix('$')?;
    let mut chars = name.chars();
    let first = chars.next()?;
    if !(first.is_ascii_alphabetic() || first == '_') {
        return None;
    }
    if chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
        Some(name)
    } else {
        None
    }
}

/// Build the replaced document from `raw` using `lookup` to resolve variables.
///
/// The core section is copied unchanged. Unset variables keep their literal
/// placeholder and are reported with a warning.
pub fn replace_placeholders<F>(raw: &RegSuitConfig, lookup: F) -> RegSuitConfig
where
    F: Fn(&str) -> Option<String>,
{
    let plugins = raw
        .plugins
        .iter()
        .map(|(name, options)| (name.clone(), replace_value(name, options, &lookup)))
        .collect::<Map<String, Value>>();

    RegSuitConfig {
        core: raw.core.clone(),
        plugins,
    }
}

fn replace_value<F>(plugin: &str, value: &Value, lookup: &F) -> Value
where
    F: Fn(&str) -> Option<String>,
{
    match value {
        Value::String(s) => match placeholder_name(s) {
            Some(var) => match lookup(var) {
                Some(resolved) => Value::String(resolved),
                None => {
                    warn!(plugin, variable = var, "environment variable is not set, keeping placeholder");
                    value.clone()
                }
            },
            None => value.clone(),
        },
        Value::Array(items) => Value::Array(
            items
                .iter()
                .map(|item| replace_value(plugin, item, lookup))
                .collect(),
        ),
        Value::Object(map) => Value::Object(
            map.iter()
                .map(|(k, v)| (k.clone(), replace_value(plugin, v, lookup)))
                .collect(),
        ),
        _ => value.clone(),
    }
}
