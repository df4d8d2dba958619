// SPDX-FileCopyrightText: 2026 Regsuit Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Holder of the raw and replaced configuration documents.
//!
//! The raw document is what the user authored (plus any options written back
//! by interactive setup). The replaced document only exists after
//! [`ConfigManager::replace_env`] or [`ConfigManager::replace_with`] ran, and
//! is dropped again whenever the raw document changes.

use std::path::{Path, PathBuf};

use regsuit_core::RegSuitError;
use serde_json::Value;
use tracing::debug;

use crate::diagnostic::ConfigError;
use crate::model::{CoreConfig, RegSuitConfig};
use crate::replace::replace_placeholders;

/// Raw/replaced configuration pair for a single run.
#[derive(Debug, Clone, Default)]
pub struct ConfigManager {
    path: Option<PathBuf>,
    raw: RegSuitConfig,
    replaced: Option<RegSuitConfig>,
}

impl ConfigManager {
    /// Wrap an in-memory raw document.
    pub fn new(raw: RegSuitConfig) -> Self {
        Self {
            path: None,
            raw,
            replaced: None,
        }
    }

    /// Load and validate the document at `path`.
    ///
    /// A missing file yields the defaults, so `init`-style flows can start
    /// from an empty document. `save` then creates the file at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Vec<ConfigError>> {
        let path = path.as_ref();
        let raw = crate::load_and_validate_path(path)?;
        debug!(path = %path.display(), plugins = raw.plugins.len(), "configuration loaded");
        Ok(Self {
            path: Some(path.to_path_buf()),
            raw,
            replaced: None,
        })
    }

    /// The file this document was loaded from, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// The document as authored.
    pub fn raw(&self) -> &RegSuitConfig {
        &self.raw
    }

    /// The document with env placeholders substituted, once created.
    pub fn replaced(&self) -> Option<&RegSuitConfig> {
        self.replaced.as_ref()
    }

    /// Core section of the raw document.
    pub fn core(&self) -> &CoreConfig {
        &self.raw.core
    }

    /// Store options produced by interactive setup for `name`.
    pub fn set_plugin_options(&mut self, name: impl Into<String>, options: Value) {
        self.raw.plugins.insert(name.into(), options);
        self.replaced = None;
    }

    /// Create the replaced document from process environment variables.
    pub fn replace_env(&mut self) -> &RegSuitConfig {
        self.replace_with(|name| std::env::var(name).ok())
    }

    /// Create the replaced document using `lookup` to resolve placeholders.
    pub fn replace_with<F>(&mut self, lookup: F) -> &RegSuitConfig
    where
        F: Fn(&str) -> Option<String>,
    {
        self.replaced.insert(replace_placeholders(&self.raw, lookup))
    }

    /// Write the raw document as pretty-printed JSON.
    pub fn write_to_path(&self, path: impl AsRef<Path>) -> Result<(), RegSuitError> {
        let mut json = serde_json::to_string_pretty(&self.raw)
            .map_err(|e| RegSuitError::Config(format!("failed to serialize configuration: {e}")))?;
        json.push('\n');
        std::fs::write(path.as_ref(), json)?;
        Ok(())
    }

    /// Write the raw document back to the file it was loaded from.
    pub fn save(&self) -> Result<(), RegSuitError> {
        let path = self
            .path
            .clone()
            .unwrap_or_else(|| PathBuf::from(crate::loader::DEFAULT_CONFIG_FILE));
        self.write_to_path(path)
    }
}
