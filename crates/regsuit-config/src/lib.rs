// SPDX-FileCopyrightText: 2026 Regsuit Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration system for the regsuit visual-regression runner.
//!
//! Provides `regconfig.json` parsing with validation of the core section,
//! environment variable overrides, `$NAME` placeholder replacement
//! for plugin options, and miette diagnostics with typo suggestions.
//!
//! # Usage
//!
//! ```no_run
//! use regsuit_config::ConfigManager;
//!
//! let mut config = ConfigManager::load("regconfig.json").expect("config errors");
//! let replaced = config.replace_env();
//! println!("working dir: {}", replaced.core.working_dir);
//! ```

use std::path::Path;

pub mod diagnostic;
pub mod loader;
pub mod manager;
pub mod model;
pub mod replace;
pub mod validation;

pub use diagnostic::{render_errors, ConfigError};
pub use loader::{load_config, load_config_from_path, load_config_from_str, DEFAULT_CONFIG_FILE};
pub use manager::ConfigManager;
pub use model::{disabled_marker, is_disabled, CoreConfig, RegSuitConfig};

/// Load `./regconfig.json` and validate it.
pub fn load_and_validate() -> Result<RegSuitConfig, Vec<ConfigError>> {
    load_and_validate_path(Path::new(DEFAULT_CONFIG_FILE))
}

/// Load the document at `path` (JSON or TOML) and validate it.
pub fn load_and_validate_path(path: &Path) -> Result<RegSuitConfig, Vec<ConfigError>> {
    match loader::load_config_from_path(path) {
        Ok(config) => {
            validation::validate_config(&config)?;
            Ok(config)
        }
        Err(err) => {
            let sources = std::fs::read_to_string(path)
                .map(|content| vec![(path.display().to_string(), content)])
                .unwrap_or_default();
            Err(diagnostic::figment_to_config_errors(err, &sources))
        }
    }
}

/// Load configuration from a JSON string and validate it.
pub fn load_and_validate_str(json: &str) -> Result<RegSuitConfig, Vec<ConfigError>> {
    match loader::load_config_from_str(json) {
        Ok(config) => {
            validation::validate_config(&config)?;
            Ok(config)
        }
        Err(err) => {
            let sources = vec![("<inline>".to_string(), json.to_string())];
            Err(diagnostic::figment_to_config_errors(err, &sources))
        }
    }
}
