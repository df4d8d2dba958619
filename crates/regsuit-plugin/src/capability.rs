// SPDX-FileCopyrightText: 2026 Regsuit Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Capability contracts a plugin may implement.
//!
//! The registry only ever calls `init`, `inquire`, and `prepare`. The other
//! methods are driven by the comparison workflow once the registry has
//! selected and initialized the active capabilities.
//!
//! `init` takes `&self` because holders are shared and immutable after
//! loading; implementations keep their options behind a `OnceLock` or
//! similar.

use async_trait::async_trait;
use regsuit_config::CoreConfig;
use regsuit_core::{Answers, PluginLogger, Question, RegSuitError, WorkingDirs};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Context passed to `init` (with the plugin's options) and to `prepare`
/// (with the interactive answers).
#[derive(Debug, Clone)]
pub struct PluginContext<T = Value> {
    /// Core section of the configuration document.
    pub core_config: CoreConfig,
    /// Logger scoped to the plugin name.
    pub logger: PluginLogger,
    pub options: T,
    /// Dry-run: the plugin must not perform real side effects.
    pub no_emit: bool,
    pub working_dirs: WorkingDirs,
}

impl<T> PluginContext<T> {
    /// Same context carrying different options.
    pub fn with_options<U>(&self, options: U) -> PluginContext<U> {
        PluginContext {
            core_config: self.core_config.clone(),
            logger: self.logger.clone(),
            options,
            no_emit: self.no_emit,
            working_dirs: self.working_dirs.clone(),
        }
    }
}

impl PluginContext<Value> {
    /// Deserialize the options into the plugin's own option type.
    pub fn parse_options<O: DeserializeOwned>(&self) -> Result<O, RegSuitError> {
        serde_json::from_value(self.options.clone()).map_err(|e| {
            RegSuitError::Config(format!("invalid options for {}: {e}", self.logger.scope()))
        })
    }
}

/// Produces the keys identifying the expected and actual snapshot sets.
#[async_trait]
pub trait KeyGenerator: Send + Sync {
    fn init(&self, ctx: PluginContext) -> Result<(), RegSuitError>;

    /// Key of the snapshot set to compare against, if one exists.
    async fn expected_key(&self) -> Result<Option<String>, RegSuitError>;

    /// Key for the snapshot set produced by this run.
    async fn actual_key(&self) -> Result<String, RegSuitError>;
}

/// Stores and retrieves snapshot sets.
#[async_trait]
pub trait Publisher: Send + Sync {
    fn init(&self, ctx: PluginContext) -> Result<(), RegSuitError>;

    /// Download the snapshot set for `key` into the expected directory.
    async fn fetch(&self, key: &str) -> Result<(), RegSuitError>;

    /// Upload the working directory under `key`.
    async fn publish(&self, key: &str) -> Result<PublishResult, RegSuitError>;
}

/// Reports comparison results somewhere (chat, pull request, ...).
#[async_trait]
pub trait Notifier: Send + Sync {
    fn init(&self, ctx: PluginContext) -> Result<(), RegSuitError>;

    async fn notify(&self, params: &NotifyParams) -> Result<(), RegSuitError>;
}

/// Interactive setup: asks questions and turns answers into plugin options.
#[async_trait]
pub trait Preparer: Send + Sync {
    /// Questions in the order they should be asked.
    fn inquire(&self) -> Vec<Question>;

    async fn prepare(&self, ctx: PluginContext<Answers>) -> Result<Value, RegSuitError>;
}

/// Outcome of a publish.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishResult {
    pub report_url: Option<String>,
}

/// Image names grouped by comparison outcome.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonSummary {
    pub failed_items: Vec<String>,
    pub new_items: Vec<String>,
    pub deleted_items: Vec<String>,
    pub passed_items: Vec<String>,
}

impl ComparisonSummary {
    pub fn has_failures(&self) -> bool {
        !self.failed_items.is_empty()
    }

    /// True if anything was added, removed, or changed.
    pub fn has_changes(&self) -> bool {
        self.has_failures() || !self.new_items.is_empty() || !self.deleted_items.is_empty()
    }
}

/// Everything a notifier needs to describe a run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotifyParams {
    pub expected_key: Option<String>,
    pub actual_key: String,
    pub report_url: Option<String>,
    pub comparison: ComparisonSummary,
}
