// SPDX-FileCopyrightText: 2026 Regsuit Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.

use tracing::warn;

use crate::diagnostic::{suggest_key, ConfigError};
use crate::model::{RegSuitConfig, CORE_KEYS};

/// Validate a deserialized configuration for semantic correctness.
///
/// Collects every failure instead of stopping at the first one.
pub fn validate_config(config: &RegSuitConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();
    let core = &config.core;

    if core.working_dir.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "core.workingDir must not be empty".to_string(),
        });
    }

    if core.actual_dir.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "core.actualDir must not be empty".to_string(),
        });
    }

    if let Some(rate) = core.threshold_rate
        && !(0.0..=1.0).contains(&rate)
    {
        errors.push(ConfigError::Validation {
            message: format!("core.thresholdRate must be between 0 and 1, got {rate}"),
        });
    }

    if !(0.0..=1.0).contains(&core.matching_threshold) {
        errors.push(ConfigError::Validation {
            message: format!(
                "core.matchingThreshold must be between 0 and 1, got {}",
                core.matching_threshold
            ),
        });
    }

    for key in core.extra.keys() {
        if let Some(suggestion) = suggest_key(key, CORE_KEYS) {
            warn!(
                key = %key,
                suggestion = %suggestion,
                "core.{key} is not a known core option; did you mean `{suggestion}`?"
            );
        }
    }

    if core.concurrency == Some(0) {
        errors.push(ConfigError::Validation {
            message: "core.concurrency must be at least 1".to_string(),
        });
    }

    for name in config.plugin_names() {
        if name.trim().is_empty() {
            errors.push(ConfigError::Validation {
                message: "plugin names must not be empty".to_string(),
            });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
