// SPDX-FileCopyrightText: 2026 Regsuit Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Capability initialization.
//!
//! Key generators and publishers are single-winner roles: with no candidate
//! the feature is simply absent, and with several candidates the registry
//! refuses to pick one and asks the user to choose. Notifiers are
//! multi-winner; every enabled one is initialized.
//!
//! All entry points read the replaced document only and operate over the
//! holders loaded beforehand. A plugin without an entry in the replaced
//! document is treated as `{"disabled": true}`.

use std::sync::Arc;

use regsuit_config::{disabled_marker, is_disabled, RegSuitConfig};
use regsuit_core::{CapabilityKind, RegSuitError};

use crate::capability::{KeyGenerator, Notifier, PluginContext, Publisher};
use crate::holder::PluginHolder;
use crate::registry::PluginRegistry;

/// An initialized capability together with the plugin that provides it.
pub struct Activated<C: ?Sized> {
    pub name: String,
    pub capability: Arc<C>,
}

impl<C: ?Sized> Clone for Activated<C> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            capability: Arc::clone(&self.capability),
        }
    }
}

impl<C: ?Sized> std::fmt::Debug for Activated<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Activated").field("name", &self.name).finish()
    }
}

impl PluginRegistry {
    /// Initialize the key generator, if exactly one is loaded and enabled.
    pub fn init_key_generator(&self) -> Result<Option<Activated<dyn KeyGenerator>>, RegSuitError> {
        let replaced = self.replaced_config()?;
        let Some(holder) = self.single_candidate(CapabilityKind::KeyGenerator) else {
            return Ok(None);
        };
        let Some(capability) = holder.key_generator() else {
            return Ok(None);
        };
        let activated = self.activate(replaced, holder.name(), |ctx| capability.init(ctx))?;
        Ok(activated.then(|| Activated {
            name: holder.name().to_string(),
            capability: Arc::clone(capability),
        }))
    }

    /// Initialize the publisher, if exactly one is loaded and enabled.
    pub fn init_publisher(&self) -> Result<Option<Activated<dyn Publisher>>, RegSuitError> {
        let replaced = self.replaced_config()?;
        let Some(holder) = self.single_candidate(CapabilityKind::Publisher) else {
            return Ok(None);
        };
        let Some(capability) = holder.publisher() else {
            return Ok(None);
        };
        let activated = self.activate(replaced, holder.name(), |ctx| capability.init(ctx))?;
        Ok(activated.then(|| Activated {
            name: holder.name().to_string(),
            capability: Arc::clone(capability),
        }))
    }

    /// Initialize every enabled notifier, in load order.
    pub fn init_notifiers(&self) -> Result<Vec<Activated<dyn Notifier>>, RegSuitError> {
        let replaced = self.replaced_config()?;
        let candidates = self.candidates(CapabilityKind::Notifier);
        if candidates.is_empty() {
            self.logger.info("No notifier plugin is configured.");
        }

        let mut notifiers = Vec::new();
        for holder in candidates {
            let Some(capability) = holder.notifier() else {
                continue;
            };
            if self.activate(replaced, holder.name(), |ctx| capability.init(ctx))? {
                notifiers.push(Activated {
                    name: holder.name().to_string(),
                    capability: Arc::clone(capability),
                });
            }
        }
        Ok(notifiers)
    }

    fn candidates(&self, kind: CapabilityKind) -> Vec<&PluginHolder> {
        self.holders.iter().filter(|h| h.has(kind)).collect()
    }

    /// The only holder fulfilling `kind`, or `None` after logging why not.
    fn single_candidate(&self, kind: CapabilityKind) -> Option<&PluginHolder> {
        match self.candidates(kind).as_slice() {
            [] => {
                self.logger.info(format!("No {kind} plugin is configured."));
                None
            }
            [holder] => Some(*holder),
            many => {
                let names = many
                    .iter()
                    .map(|h| h.name())
                    .collect::<Vec<_>>()
                    .join(", ");
                self.logger.warn(format!(
                    "{} {kind} plugins are installed: {names}. Choose one of them in the configuration and disable the others.",
                    many.len()
                ));
                None
            }
        }
    }

    /// Run `init` for `name` unless the replaced document disables it.
    ///
    /// Returns whether the capability was initialized.
    fn activate<F>(&self, replaced: &RegSuitConfig, name: &str, init: F) -> Result<bool, RegSuitError>
    where
        F: FnOnce(PluginContext) -> Result<(), RegSuitError>,
    {
        let logger = self.logger.fork(name);
        let options = replaced
            .plugin_options(name)
            .cloned()
            .unwrap_or_else(disabled_marker);

        if is_disabled(&options) {
            logger.verbose(format!("{name} is disabled."));
            return Ok(false);
        }

        let ctx = self.plugin_context(name, &replaced.core, options.clone());
        init(ctx).map_err(|e| match e {
            e @ RegSuitError::PluginInit { .. } => e,
            other => RegSuitError::PluginInit {
                name: name.to_string(),
                message: other.to_string(),
            },
        })?;
        logger.verbose(format!("{name} is initialized with option: {options}"));
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::holder::tests::Noop;
    use crate::holder::PluginBundle;
    use crate::resolver::StaticResolver;
    use regsuit_config::ConfigManager;
    use serde_json::json;

    fn loaded(document: serde_json::Value) -> PluginRegistry {
        let resolver = StaticResolver::new()
            .with("kg", || PluginBundle::new().with_key_generator(Noop))
            .with("pub", || PluginBundle::new().with_publisher(Noop))
            .with("notify", || PluginBundle::new().with_notifier(Noop));
        let mut registry = PluginRegistry::new(
            resolver,
            ConfigManager::new(serde_json::from_value(document).unwrap()),
        );
        registry.load_plugins().unwrap();
        registry
    }

    #[test]
    fn init_before_replacement_is_a_contract_violation() {
        let registry = loaded(json!({ "plugins": { "kg": {} } }));
        assert!(matches!(
            registry.init_key_generator(),
            Err(RegSuitError::ConfigNotReplaced)
        ));
        assert!(matches!(
            registry.init_publisher(),
            Err(RegSuitError::ConfigNotReplaced)
        ));
        assert!(matches!(
            registry.init_notifiers(),
            Err(RegSuitError::ConfigNotReplaced)
        ));
    }

    #[test]
    fn single_enabled_candidates_are_activated() {
        let mut registry = loaded(json!({
            "plugins": { "kg": {}, "pub": true, "notify": { "channel": "#vrt" } }
        }));
        registry.config_mut().replace_with(|_| None);

        let kg = registry.init_key_generator().unwrap().unwrap();
        assert_eq!(kg.name, "kg");
        let publisher = registry.init_publisher().unwrap().unwrap();
        assert_eq!(publisher.name, "pub");
        let notifiers = registry.init_notifiers().unwrap();
        assert_eq!(notifiers.len(), 1);
        assert_eq!(notifiers[0].name, "notify");
    }

    #[test]
    fn no_candidates_is_not_an_error() {
        let mut registry = loaded(json!({}));
        registry.config_mut().replace_with(|_| None);
        assert!(registry.init_key_generator().unwrap().is_none());
        assert!(registry.init_publisher().unwrap().is_none());
        assert!(registry.init_notifiers().unwrap().is_empty());
    }

    #[test]
    fn disabled_single_candidate_yields_none() {
        let mut registry = loaded(json!({ "plugins": { "kg": { "disabled": true } } }));
        registry.config_mut().replace_with(|_| None);
        assert!(registry.init_key_generator().unwrap().is_none());
    }
}
