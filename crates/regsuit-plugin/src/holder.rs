// SPDX-FileCopyrightText: 2026 Regsuit Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Plugin holders and capability classification.
//!
//! A plugin factory returns a [`PluginBundle`]; the loader tags it with the
//! plugin name to form a [`PluginHolder`]. Classification is a set of pure
//! predicates over the holder's capability fields, evaluated on demand.

use std::sync::Arc;

use regsuit_core::CapabilityKind;

use crate::capability::{KeyGenerator, Notifier, Preparer, Publisher};

/// Capabilities produced by a plugin factory, not yet tagged with a name.
#[derive(Clone, Default)]
pub struct PluginBundle {
    pub key_generator: Option<Arc<dyn KeyGenerator>>,
    pub publisher: Option<Arc<dyn Publisher>>,
    pub notifier: Option<Arc<dyn Notifier>>,
    pub preparer: Option<Arc<dyn Preparer>>,
}

impl PluginBundle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_key_generator(mut self, key_generator: impl KeyGenerator + 'static) -> Self {
        self.key_generator = Some(Arc::new(key_generator));
        self
    }

    pub fn with_publisher(mut self, publisher: impl Publisher + 'static) -> Self {
        self.publisher = Some(Arc::new(publisher));
        self
    }

    pub fn with_notifier(mut self, notifier: impl Notifier + 'static) -> Self {
        self.notifier = Some(Arc::new(notifier));
        self
    }

    pub fn with_preparer(mut self, preparer: impl Preparer + 'static) -> Self {
        self.preparer = Some(Arc::new(preparer));
        self
    }
}

/// A loaded plugin: its name plus the capabilities its factory produced.
///
/// Fields are fixed at load time; there is no way to add or remove a
/// capability afterwards.
#[derive(Clone)]
pub struct PluginHolder {
    name: String,
    bundle: PluginBundle,
}

impl PluginHolder {
    pub fn new(name: impl Into<String>, bundle: PluginBundle) -> Self {
        Self {
            name: name.into(),
            bundle,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn has_key_generator(&self) -> bool {
        self.bundle.key_generator.is_some()
    }

    pub fn has_publisher(&self) -> bool {
        self.bundle.publisher.is_some()
    }

    pub fn has_notifier(&self) -> bool {
        self.bundle.notifier.is_some()
    }

    pub fn has_preparer(&self) -> bool {
        self.bundle.preparer.is_some()
    }

    /// Returns true if the holder fulfills `kind`.
    pub fn has(&self, kind: CapabilityKind) -> bool {
        match kind {
            CapabilityKind::KeyGenerator => self.has_key_generator(),
            CapabilityKind::Publisher => self.has_publisher(),
            CapabilityKind::Notifier => self.has_notifier(),
            CapabilityKind::Preparer => self.has_preparer(),
        }
    }

    /// All roles the holder fulfills, in declaration order.
    pub fn capabilities(&self) -> Vec<CapabilityKind> {
        [
            CapabilityKind::KeyGenerator,
            CapabilityKind::Publisher,
            CapabilityKind::Notifier,
            CapabilityKind::Preparer,
        ]
        .into_iter()
        .filter(|kind| self.has(*kind))
        .collect()
    }

    pub fn key_generator(&self) -> Option<&Arc<dyn KeyGenerator>> {
        self.bundle.key_generator.as_ref()
    }

    pub fn publisher(&self) -> Option<&Arc<dyn Publisher>> {
        self.bundle.publisher.as_ref()
    }

    pub fn notifier(&self) -> Option<&Arc<dyn Notifier>> {
        self.bundle.notifier.as_ref()
    }

    pub fn preparer(&self) -> Option<&Arc<dyn Preparer>> {
        self.bundle.preparer.as_ref()
    }
}

impl std::fmt::Debug for PluginHolder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PluginHolder")
            .field("name", &self.name)
            .field("capabilities", &self.capabilities())
            .finish()
    }
}
