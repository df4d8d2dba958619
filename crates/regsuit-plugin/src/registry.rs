// SPDX-FileCopyrightText: 2026 Regsuit Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Plugin registry for a single run.
//!
//! The `PluginRegistry` owns the resolver, the configuration documents, and
//! the append-only list of loaded holders. It is built once per run and
//! driven through the pipeline: load ([`crate::loader`]), set up
//! ([`crate::setup`]), then initialize ([`crate::init`]).

use regsuit_config::{is_disabled, ConfigManager, CoreConfig, RegSuitConfig};
use regsuit_core::{PluginLogger, RegSuitError};

use crate::capability::PluginContext;
use crate::holder::PluginHolder;
use crate::resolver::PluginResolver;

/// Naming convention for installable plugins: `reg-<something>-plugin`.
const PLUGIN_PREFIX: &str = "reg-";
const PLUGIN_SUFFIX: &str = "-plugin";

/// Configuration status of a loaded plugin, for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PluginStatus {
    /// Plugin has an entry and will be initialized.
    Enabled,
    /// Plugin is explicitly disabled by the user.
    Disabled,
    /// Plugin is loaded but the document has no entry for it.
    NotConfigured,
}

impl std::fmt::Display for PluginStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PluginStatus::Enabled => write!(f, "enabled"),
            PluginStatus::Disabled => write!(f, "disabled"),
            PluginStatus::NotConfigured => write!(f, "not-configured"),
        }
    }
}

/// Registry of loaded plugins for one run.
pub struct PluginRegistry {
    pub(crate) resolver: Box<dyn PluginResolver>,
    pub(crate) config: ConfigManager,
    pub(crate) holders: Vec<PluginHolder>,
    pub(crate) logger: PluginLogger,
    pub(crate) no_emit: bool,
}

impl PluginRegistry {
    /// Create an empty registry over `resolver` and `config`.
    pub fn new(resolver: impl PluginResolver + 'static, config: ConfigManager) -> Self {
        Self {
            resolver: Box::new(resolver),
            config,
            holders: Vec::new(),
            logger: PluginLogger::default(),
            no_emit: false,
        }
    }

    /// Run plugins in dry-run mode.
    pub fn with_no_emit(mut self, no_emit: bool) -> Self {
        self.no_emit = no_emit;
        self
    }

    /// Use `logger` as the parent of every plugin logger.
    pub fn with_logger(mut self, logger: PluginLogger) -> Self {
        self.logger = logger;
        self
    }

    pub fn no_emit(&self) -> bool {
        self.no_emit
    }

    pub fn config(&self) -> &ConfigManager {
        &self.config
    }

    /// Mutable access for writing prepared options and creating the replaced document.
    pub fn config_mut(&mut self) -> &mut ConfigManager {
        &mut self.config
    }

    /// Loaded holders in load order.
    pub fn holders(&self) -> &[PluginHolder] {
        &self.holders
    }

    /// Get a loaded holder by name.
    pub fn get(&self, name: &str) -> Option<&PluginHolder> {
        self.holders.iter().find(|h| h.name() == name)
    }

    pub fn len(&self) -> usize {
        self.holders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.holders.is_empty()
    }

    /// Names the resolver can produce that follow the `reg-*-plugin` convention, sorted.
    pub fn installed_plugin_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .resolver
            .available()
            .into_iter()
            .filter(|name| {
                name.len() > PLUGIN_PREFIX.len() + PLUGIN_SUFFIX.len()
                    && name.starts_with(PLUGIN_PREFIX)
                    && name.ends_with(PLUGIN_SUFFIX)
            })
            .collect();
        names.sort();
        names
    }

    /// Status of every loaded holder, in load order.
    ///
    /// Reads the replaced document when it exists, the raw one otherwise.
    pub fn statuses(&self) -> Vec<(String, PluginStatus)> {
        let document = self.config.replaced().unwrap_or(self.config.raw());
        self.holders
            .iter()
            .map(|holder| {
                let status = match document.plugin_options(holder.name()) {
                    None => PluginStatus::NotConfigured,
                    Some(options) if is_disabled(options) => PluginStatus::Disabled,
                    Some(_) => PluginStatus::Enabled,
                };
                (holder.name().to_string(), status)
            })
            .collect()
    }

    /// The replaced document, or the contract violation if setup has not finished.
    pub(crate) fn replaced_config(&self) -> Result<&RegSuitConfig, RegSuitError> {
        self.config.replaced().ok_or(RegSuitError::ConfigNotReplaced)
    }

    pub(crate) fn plugin_context<T>(
        &self,
        name: &str,
        core_config: &CoreConfig,
        options: T,
    ) -> PluginContext<T> {
        PluginContext {
            core_config: core_config.clone(),
            logger: self.logger.fork(name),
            options,
            no_emit: self.no_emit,
            working_dirs: core_config.working_dirs(),
        }
    }
}

impl std::fmt::Debug for PluginRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PluginRegistry")
            .field("holders", &self.holders)
            .field("no_emit", &self.no_emit)
            .finish()
    }
}
