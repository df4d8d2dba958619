// SPDX-FileCopyrightText: 2026 Regsuit Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the regsuit visual-regression runner.
//!
//! This crate provides the error type, the plugin-scoped logger, and the
//! plain data types shared between the configuration system and the plugin
//! registry.

pub mod error;
pub mod logger;
pub mod types;

pub use error::RegSuitError;
pub use logger::PluginLogger;
pub use types::{Answers, CapabilityKind, Question, QuestionKind, WorkingDirs};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regsuit_error_has_all_variants() {
        let _config = RegSuitError::Config("test".into());
        let _not_found = RegSuitError::PluginNotFound {
            name: "reg-keygen-git-hash-plugin".into(),
        };
        let _init = RegSuitError::PluginInit {
            name: "test".into(),
            message: "boom".into(),
        };
        let _prepare = RegSuitError::Prepare {
            name: "test".into(),
            message: "boom".into(),
        };
        let _not_replaced = RegSuitError::ConfigNotReplaced;
        let _io = RegSuitError::Io(std::io::Error::other("test"));
    }

    #[test]
    fn capability_kind_has_four_variants() {
        use std::str::FromStr;

        let variants = [
            CapabilityKind::KeyGenerator,
            CapabilityKind::Publisher,
            CapabilityKind::Notifier,
            CapabilityKind::Preparer,
        ];

        for variant in &variants {
            let s = variant.to_string();
            let parsed = CapabilityKind::from_str(&s).expect("should parse back");
            assert_eq!(*variant, parsed);
        }
    }
}
