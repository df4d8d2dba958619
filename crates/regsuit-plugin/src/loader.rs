// SPDX-FileCopyrightText: 2026 Regsuit Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Loading plugins by name into the registry.

use regsuit_core::RegSuitError;

use crate::holder::PluginHolder;
use crate::registry::PluginRegistry;

impl PluginRegistry {
    /// Load every plugin named in the raw document's `plugins` section, in
    /// document order.
    ///
    /// Stops at the first plugin that cannot be resolved.
    pub fn load_plugins(&mut self) -> Result<(), RegSuitError> {
        let names: Vec<String> = self
            .config
            .raw()
            .plugin_names()
            .map(str::to_string)
            .collect();
        for name in &names {
            self.load_plugin(name)?;
        }
        Ok(())
    }

    /// Resolve `name`, invoke its factory, and append the holder.
    ///
    /// Loading an already-loaded name returns the existing holder.
    pub fn load_plugin(&mut self, name: &str) -> Result<&PluginHolder, RegSuitError> {
        if let Some(index) = self.holders.iter().position(|h| h.name() == name) {
            return Ok(&self.holders[index]);
        }

        let factory = match self.resolver.resolve(name) {
            Ok(factory) => factory,
            Err(e) => {
                self.logger.error(format!(
                    "Failed to load plugin '{name}'. Make sure it is installed and registered: {e}"
                ));
                return Err(e);
            }
        };

        let holder = PluginHolder::new(name, factory());
        self.logger.verbose(format!(
            "Loaded plugin {name} with capabilities {:?}",
            holder.capabilities()
        ));

        let index = self.holders.len();
        self.holders.push(holder);
        Ok(&self.holders[index])
    }
}
