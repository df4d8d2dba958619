// SPDX-FileCopyrightText: 2026 Regsuit Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Plugin name resolution.
//!
//! Plugins are compiled in and registered by name in a [`StaticResolver`]
//! at startup. The registry only sees the [`PluginResolver`] trait, so tests
//! and embedders can substitute their own lookup.

use std::collections::HashMap;
use std::sync::Arc;

use regsuit_core::RegSuitError;

use crate::holder::PluginBundle;

/// Zero-argument factory producing a plugin's capabilities.
pub type PluginFactory = Arc<dyn Fn() -> PluginBundle + Send + Sync>;

/// Maps plugin names to factories.
pub trait PluginResolver: Send + Sync {
    /// Resolve `name` to its factory.
    fn resolve(&self, name: &str) -> Result<PluginFactory, RegSuitError>;

    /// Names of every plugin this resolver can produce.
    fn available(&self) -> Vec<String>;
}

/// Registration table of compiled-in plugins.
#[derive(Clone, Default)]
pub struct StaticResolver {
    factories: HashMap<String, PluginFactory>,
}

impl StaticResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `factory` under `name`, replacing any previous registration.
    pub fn register<F>(&mut self, name: impl Into<String>, factory: F)
    where
        F: Fn() -> PluginBundle + Send + Sync + 'static,
    {
        self.factories.insert(name.into(), Arc::new(factory));
    }

    /// Builder-style [`register`](Self::register).
    pub fn with<F>(mut self, name: impl Into<String>, factory: F) -> Self
    where
        F: Fn() -> PluginBundle + Send + Sync + 'static,
    {
        self.register(name, factory);
        self
    }

    pub fn len(&self) -> usize {
        self.factories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }
}

impl PluginResolver for StaticResolver {
    fn resolve(&self, name: &str) -> Result<PluginFactory, RegSuitError> {
        self.factories
            .get(name)
            .cloned()
            .ok_or_else(|| RegSuitError::PluginNotFound {
                name: name.to_string(),
            })
    }

    fn available(&self) -> Vec<String> {
        let mut names: Vec<String> = self.factories.keys().cloned().collect();
        names.sort();
        names
    }
}

impl std::fmt::Debug for StaticResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StaticResolver")
            .field("plugins", &self.available())
            .finish()
    }
}
