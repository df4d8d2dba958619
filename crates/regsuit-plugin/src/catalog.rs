// SPDX-FileCopyrightText: 2026 Regsuit Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Catalog of well-known plugins.
//!
//! Setup tooling offers these as choices when creating a new configuration.
//! The catalog is descriptive only; whether a plugin can actually be loaded
//! depends on the resolver.

use regsuit_core::CapabilityKind;
use serde::{Deserialize, Serialize};

/// Description of a known plugin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginDescriptor {
    pub name: String,
    pub description: String,
    /// Roles the plugin is known to fulfill.
    pub capabilities: Vec<CapabilityKind>,
}

fn descriptor(name: &str, description: &str, capabilities: &[CapabilityKind]) -> PluginDescriptor {
    PluginDescriptor {
        name: name.to_string(),
        description: description.to_string(),
        capabilities: capabilities.to_vec(),
    }
}

/// Returns descriptors for the well-known plugins.
pub fn known_plugins() -> Vec<PluginDescriptor> {
    use CapabilityKind::*;

    vec![
        descriptor(
            "reg-keygen-git-hash-plugin",
            "Detect the snapshot key to be compared with using Git hash.",
            &[KeyGenerator, Preparer],
        ),
        descriptor(
            "reg-simple-keygen-plugin",
            "Use a fixed key for expected snapshots and a generated one for actual snapshots.",
            &[KeyGenerator, Preparer],
        ),
        descriptor(
            "reg-publish-s3-plugin",
            "Fetch and publish snapshot images to AWS S3.",
            &[Publisher, Preparer],
        ),
        descriptor(
            "reg-publish-gcs-plugin",
            "Fetch and publish snapshot images to Google Cloud Storage.",
            &[Publisher, Preparer],
        ),
        descriptor(
            "reg-notify-github-plugin",
            "Notify reg-suit result to GitHub repository.",
            &[Notifier, Preparer],
        ),
        descriptor(
            "reg-notify-gitlab-plugin",
            "Notify reg-suit result to GitLab merge requests.",
            &[Notifier, Preparer],
        ),
        descriptor(
            "reg-notify-slack-plugin",
            "Notify reg-suit result to Slack channel.",
            &[Notifier, Preparer],
        ),
        descriptor(
            "reg-notify-chatwork-plugin",
            "Notify reg-suit result to Chatwork channel.",
            &[Notifier, Preparer],
        ),
    ]
}

/// Search the catalog by query string.
///
/// Matches name or description, case-insensitively. An empty query returns
/// every entry.
pub fn search_catalog(query: &str) -> Vec<PluginDescriptor> {
    if query.is_empty() {
        return known_plugins();
    }
    let query_lower = query.to_lowercase();
    known_plugins()
        .into_iter()
        .filter(|d| {
            d.name.to_lowercase().contains(&query_lower)
                || d.description.to_lowercase().contains(&query_lower)
        })
        .collect()
}

/// Known plugins fulfilling `kind`.
pub fn plugins_with(kind: CapabilityKind) -> Vec<PluginDescriptor> {
    known_plugins()
        .into_iter()
        .filter(|d| d.capabilities.contains(&kind))
        .collect()
}
