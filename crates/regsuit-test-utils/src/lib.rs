// SPDX-FileCopyrightText: 2026 Regsuit Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for regsuit integration tests.
//!
//! # Components
//!
//! - [`MockPlugin`] - configurable plugin recording every `init`/`prepare` call
//! - [`CallLog`] - shared record of those calls
//! - [`mock_resolver`] - resolver built from a list of mock plugins
//! - [`registry_with`] - registry over mock plugins and an inline document

pub mod mock_plugin;

pub use mock_plugin::{mock_resolver, Call, CallLog, MockPlugin};

use regsuit_config::ConfigManager;
use regsuit_plugin::PluginRegistry;

/// Build a registry over `plugins` with `document` as the raw configuration.
///
/// Panics if `document` is not a valid configuration; intended for tests.
pub fn registry_with(plugins: Vec<MockPlugin>, document: serde_json::Value) -> PluginRegistry {
    let raw = serde_json::from_value(document).expect("test document should be valid");
    PluginRegistry::new(mock_resolver(plugins), ConfigManager::new(raw))
}

/// Install a fmt subscriber writing to the test output, once per process.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
        )
        .with_test_writer()
        .try_init();
}
