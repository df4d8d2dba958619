// SPDX-FileCopyrightText: 2026 Regsuit Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common types shared by the configuration system and the plugin registry.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Answers collected for a preparer's questions, keyed by question name.
pub type Answers = serde_json::Map<String, serde_json::Value>;

/// A role a plugin may fulfill.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum CapabilityKind {
    KeyGenerator,
    Publisher,
    Notifier,
    Preparer,
}

/// How an interactive question is presented to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionKind {
    /// Free-form text input.
    Input,
    /// Masked text input.
    Password,
    /// Yes/no question.
    Confirm,
    /// Single choice from `choices`.
    List,
}

/// An interactive question descriptor produced by a preparer.
///
/// The registry never renders questions; it only passes them through to the
/// setup UI in the order the preparer returned them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    /// Key under which the answer is stored.
    pub name: String,
    /// Prompt shown to the user.
    pub message: String,
    #[serde(rename = "type")]
    pub kind: QuestionKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub choices: Vec<String>,
}

impl Question {
    pub fn input(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(QuestionKind::Input, name, message)
    }

    pub fn password(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(QuestionKind::Password, name, message)
    }

    pub fn confirm(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(QuestionKind::Confirm, name, message)
    }

    pub fn list(
        name: impl Into<String>,
        message: impl Into<String>,
        choices: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        let mut q = Self::new(QuestionKind::List, name, message);
        q.choices = choices.into_iter().map(Into::into).collect();
        q
    }

    /// Set the value pre-filled in the prompt.
    pub fn with_default(mut self, default: impl Into<serde_json::Value>) -> Self {
        self.default = Some(default.into());
        self
    }

    fn new(kind: QuestionKind, name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            message: message.into(),
            kind,
            default: None,
            choices: Vec::new(),
        }
    }
}

/// Directories derived from the core `workingDir` setting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkingDirs {
    /// Root of all generated files.
    pub base: PathBuf,
    /// Snapshot of the actual images for the current run.
    pub actual: PathBuf,
    /// Expected images fetched by a publisher.
    pub expected: PathBuf,
    /// Generated difference images.
    pub diff: PathBuf,
}

impl WorkingDirs {
    pub fn new(base: impl AsRef<Path>) -> Self {
        let base = base.as_ref();
        Self {
            base: base.to_path_buf(),
            actual: base.join("actual"),
            expected: base.join("expected"),
            diff: base.join("diff"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capability_kind_displays_kebab_case() {
        assert_eq!(CapabilityKind::KeyGenerator.to_string(), "key-generator");
        assert_eq!(CapabilityKind::Notifier.to_string(), "notifier");
    }

    #[test]
    fn question_serializes_type_field() {
        let q = Question::list("region", "Which region?", ["us-east-1", "eu-west-1"])
            .with_default("us-east-1");
        let json = serde_json::to_value(&q).unwrap();
        assert_eq!(json["type"], "list");
        assert_eq!(json["default"], "us-east-1");
        assert_eq!(json["choices"][1], "eu-west-1");
    }

    #[test]
    fn question_omits_empty_optional_fields() {
        let json = serde_json::to_value(Question::confirm("pr", "Comment on PRs?")).unwrap();
        assert!(json.get("default").is_none());
        assert!(json.get("choices").is_none());
    }

    #[test]
    fn working_dirs_are_nested_under_base() {
        let dirs = WorkingDirs::new(".reg");
        assert_eq!(dirs.base, PathBuf::from(".reg"));
        assert_eq!(dirs.actual, PathBuf::from(".reg/actual"));
        assert_eq!(dirs.expected, PathBuf::from(".reg/expected"));
        assert_eq!(dirs.diff, PathBuf::from(".reg/diff"));
    }
}
