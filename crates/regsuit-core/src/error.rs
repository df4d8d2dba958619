// SPDX-FileCopyrightText: 2026 Regsuit Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the regsuit plugin system.

use thiserror::Error;

/// The primary error type used across the plugin registry and its capabilities.
#[derive(Debug, Error)]
pub enum RegSuitError {
    /// Configuration errors (invalid document, bad plugin options).
    #[error("configuration error: {0}")]
    Config(String),

    /// A plugin name could not be resolved to an installed plugin.
    #[error("plugin not found: {name}")]
    PluginNotFound { name: String },

    /// A plugin's capability failed during `init`.
    #[error("failed to initialize plugin {name}: {message}")]
    PluginInit { name: String, message: String },

    /// A preparer failed to turn interactive answers into options.
    #[error("failed to prepare plugin {name}: {message}")]
    Prepare { name: String, message: String },

    /// A plugin was initialized before the replaced configuration existed.
    #[error("internal error: the replaced configuration has not been created yet")]
    ConfigNotReplaced,

    /// Filesystem errors while reading or writing configuration.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plugin_not_found_names_the_plugin() {
        let err = RegSuitError::PluginNotFound {
            name: "reg-publish-s3-plugin".into(),
        };
        assert_eq!(err.to_string(), "plugin not found: reg-publish-s3-plugin");
    }

    #[test]
    fn prepare_error_names_the_plugin() {
        let err = RegSuitError::Prepare {
            name: "reg-notify-slack-plugin".into(),
            message: "webhook rejected".into(),
        };
        assert_eq!(
            err.to_string(),
            "failed to prepare plugin reg-notify-slack-plugin: webhook rejected"
        );
    }

    #[test]
    fn io_error_converts() {
        let err: RegSuitError = std::io::Error::other("disk gone").into();
        assert!(err.to_string().contains("disk gone"));
    }
}
