// SPDX-FileCopyrightText: 2026 Regsuit Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Plugin registry and lifecycle controller.
//!
//! Plugins are resolved by name to factories, tagged as [`PluginHolder`]s,
//! classified by the capabilities they expose (key generator, publisher,
//! notifier, preparer), configured through interactive setup, and finally
//! initialized from the replaced configuration document.
//!
//! # Pipeline
//!
//! ```no_run
//! # async fn run() -> Result<(), regsuit_core::RegSuitError> {
//! use regsuit_config::ConfigManager;
//! use regsuit_plugin::{PluginRegistry, StaticResolver};
//!
//! let resolver = StaticResolver::new();
//! let config = ConfigManager::load("regconfig.json").map_err(|_| {
//!     regsuit_core::RegSuitError::Config("invalid regconfig.json".into())
//! })?;
//! let mut registry = PluginRegistry::new(resolver, config);
//!
//! registry.load_plugins()?;
//! registry.config_mut().replace_env();
//!
//! let key_generator = registry.init_key_generator()?;
//! let publisher = registry.init_publisher()?;
//! let notifiers = registry.init_notifiers()?;
//! # let _ = (key_generator, publisher, notifiers);
//! # Ok(())
//! # }
//! ```

pub mod capability;
pub mod catalog;
pub mod holder;
pub mod init;
pub mod loader;
pub mod registry;
pub mod resolver;
pub mod setup;

pub use capability::{
    ComparisonSummary, KeyGenerator, Notifier, NotifyParams, PluginContext, Preparer,
    PublishResult, Publisher,
};
pub use catalog::{known_plugins, search_catalog, PluginDescriptor};
pub use holder::{PluginBundle, PluginHolder};
pub use init::Activated;
pub use registry::{PluginRegistry, PluginStatus};
pub use resolver::{PluginFactory, PluginResolver, StaticResolver};
pub use setup::{AnswerFuture, AnswerProcessor, PluginSetupEntry};
