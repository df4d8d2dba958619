// SPDX-FileCopyrightText: 2026 Regsuit Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Scoped logger handed to plugins.
//!
//! `PluginLogger` is a thin handle over `tracing` that attaches a `plugin`
//! field to every event, so registry-originated lines and lines emitted by a
//! plugin itself can be attributed to the plugin name. Forking appends a
//! segment to the scope (`regsuit/reg-publish-s3-plugin`).

use std::fmt::Display;

use tracing::{debug, error, info, warn};

/// Leveled logger scoped to a plugin (or to the registry itself).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginLogger {
    scope: String,
}

impl PluginLogger {
    /// Create a logger with the given root scope.
    pub fn new(scope: impl Into<String>) -> Self {
        Self {
            scope: scope.into(),
        }
    }

    /// Create a child logger scoped to `name`.
    pub fn fork(&self, name: &str) -> Self {
        if self.scope.is_empty() {
            return Self::new(name);
        }
        Self {
            scope: format!("{}/{}", self.scope, name),
        }
    }

    /// The scope attached to every event.
    pub fn scope(&self) -> &str {
        &self.scope
    }

    /// Detail only shown with debug output enabled.
    pub fn verbose(&self, message: impl Display) {
        debug!(plugin = %self.scope, "{message}");
    }

    pub fn info(&self, message: impl Display) {
        info!(plugin = %self.scope, "{message}");
    }

    pub fn warn(&self, message: impl Display) {
        warn!(plugin = %self.scope, "{message}");
    }

    pub fn error(&self, message: impl Display) {
        error!(plugin = %self.scope, "{message}");
    }
}

impl Default for PluginLogger {
    fn default() -> Self {
        Self::new("regsuit")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_test::traced_test;

    #[test]
    fn fork_appends_scope_segment() {
        let root = PluginLogger::default();
        let child = root.fork("reg-notify-slack-plugin");
        assert_eq!(child.scope(), "regsuit/reg-notify-slack-plugin");
        assert_eq!(root.scope(), "regsuit");
    }

    #[test]
    fn fork_of_empty_scope_is_the_name() {
        let logger = PluginLogger::new("").fork("plugin-a");
        assert_eq!(logger.scope(), "plugin-a");
    }

    #[traced_test]
    #[test]
    fn events_carry_plugin_field() {
        let logger = PluginLogger::default().fork("plugin-a");
        logger.warn("choose one plugin");
        logger.verbose("options: {}");

        assert!(logs_contain("choose one plugin"));
        assert!(logs_contain("plugin=regsuit/plugin-a"));
        assert!(logs_contain("options: {}"));
    }
}
