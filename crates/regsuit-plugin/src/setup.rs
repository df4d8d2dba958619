// SPDX-FileCopyrightText: 2026 Regsuit Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Interactive setup negotiation.
//!
//! For every requested plugin the registry emits a [`PluginSetupEntry`]:
//! the questions to ask, the options already present in the raw document,
//! and an [`AnswerProcessor`] that turns the user's answers into options.
//! Entries for plugins without a preparer come first, then preparer-backed
//! entries, each group in load order.
//!
//! Answer processors return futures; the caller awaits each one before
//! moving on to the next plugin.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use regsuit_core::{Answers, Question, RegSuitError};
use serde_json::Value;

use crate::holder::PluginHolder;
use crate::registry::PluginRegistry;

/// Future resolving to the options produced from a set of answers.
///
/// `None` means the plugin contributes no options of its own.
pub type AnswerFuture = Pin<Box<dyn Future<Output = Result<Option<Value>, RegSuitError>> + Send>>;

/// Bound answer-processing step for one plugin.
pub struct AnswerProcessor(Box<dyn Fn(Answers) -> AnswerFuture + Send + Sync>);

impl AnswerProcessor {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(Answers) -> AnswerFuture + Send + Sync + 'static,
    {
        Self(Box::new(f))
    }

    /// Processor for plugins without a preparer: succeeds with no options.
    pub fn no_op() -> Self {
        Self::new(|_| -> AnswerFuture {
            Box::pin(async { Ok::<Option<Value>, RegSuitError>(None) })
        })
    }

    pub fn call(&self, answers: Answers) -> AnswerFuture {
        (self.0)(answers)
    }
}

impl std::fmt::Debug for AnswerProcessor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("AnswerProcessor")
    }
}

/// Setup information for one plugin.
#[derive(Debug)]
pub struct PluginSetupEntry {
    pub name: String,
    /// Questions to ask, in preparer order. Empty for plugins without a preparer.
    pub questions: Vec<Question>,
    /// Options already in the raw document, when they are a JSON object.
    pub configured: Option<Value>,
    pub processor: AnswerProcessor,
}

impl PluginSetupEntry {
    pub fn has_questions(&self) -> bool {
        !self.questions.is_empty()
    }

    /// Run the bound processor on `answers`.
    pub async fn process(&self, answers: Answers) -> Result<Option<Value>, RegSuitError> {
        self.processor.call(answers).await
    }
}

impl PluginRegistry {
    /// Load the named plugins (if needed) and build their setup entries.
    ///
    /// The result has one entry per distinct requested name: plugins without
    /// a preparer first, then plugins with one, each group in load order.
    pub fn create_questions<S: AsRef<str>>(
        &mut self,
        names: &[S],
    ) -> Result<Vec<PluginSetupEntry>, RegSuitError> {
        for name in names {
            self.load_plugin(name.as_ref())?;
        }

        let requested: Vec<&PluginHolder> = self
            .holders
            .iter()
            .filter(|h| names.iter().any(|n| n.as_ref() == h.name()))
            .collect();

        let (with_preparer, without_preparer): (Vec<&PluginHolder>, Vec<&PluginHolder>) =
            requested.into_iter().partition(|h| h.has_preparer());

        let mut entries = Vec::with_capacity(with_preparer.len() + without_preparer.len());
        for holder in without_preparer {
            entries.push(PluginSetupEntry {
                name: holder.name().to_string(),
                questions: Vec::new(),
                configured: self.configured_options(holder.name()),
                processor: AnswerProcessor::no_op(),
            });
        }
        for holder in with_preparer {
            entries.push(self.preparer_entry(holder));
        }

        Ok(entries)
    }

    fn preparer_entry(&self, holder: &PluginHolder) -> PluginSetupEntry {
        let name = holder.name().to_string();
        let (questions, processor) = match holder.preparer() {
            Some(preparer) => {
                let preparer = Arc::clone(preparer);
                let questions = preparer.inquire();
                let template = self.plugin_context(&name, self.config.core(), ());
                let plugin = name.clone();
                let processor = AnswerProcessor::new(move |answers: Answers| -> AnswerFuture {
                    let preparer = Arc::clone(&preparer);
                    let ctx = template.with_options(answers);
                    let plugin = plugin.clone();
                    Box::pin(async move {
                        match preparer.prepare(ctx).await {
                            Ok(options) => Ok(Some(options)),
                            Err(e @ RegSuitError::Prepare { .. }) => Err(e),
                            Err(other) => Err(RegSuitError::Prepare {
                                name: plugin,
                                message: other.to_string(),
                            }),
                        }
                    })
                });
                (questions, processor)
            }
            None => (Vec::new(), AnswerProcessor::no_op()),
        };

        PluginSetupEntry {
            configured: self.configured_options(&name),
            name,
            questions,
            processor,
        }
    }

    fn configured_options(&self, name: &str) -> Option<Value> {
        self.config
            .raw()
            .plugin_options(name)
            .filter(|options| options.is_object())
            .cloned()
    }
}
