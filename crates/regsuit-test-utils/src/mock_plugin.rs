// SPDX-FileCopyrightText: 2026 Regsuit Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock plugin for deterministic registry tests.
//!
//! `MockPlugin` exposes any subset of the four capabilities and records
//! every `init` and `prepare` call in a shared [`CallLog`], so tests can
//! assert which plugins were activated, with which options, and in which
//! order.

use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;
use regsuit_core::{Answers, CapabilityKind, Question, RegSuitError};
use regsuit_plugin::{
    KeyGenerator, Notifier, NotifyParams, PluginBundle, PluginContext, Preparer, PublishResult,
    Publisher, StaticResolver,
};
use serde_json::Value;

/// One recorded capability call.
#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub plugin: String,
    pub kind: CapabilityKind,
    /// Options passed to `init`, or the answers passed to `prepare`.
    pub options: Value,
    pub no_emit: bool,
    /// Scope of the logger the plugin received.
    pub logger_scope: String,
}

/// Shared, ordered record of capability calls.
#[derive(Debug, Clone, Default)]
pub struct CallLog(Arc<Mutex<Vec<Call>>>);

impl CallLog {
    pub fn new() -> Self {
        Self::default()
    }

    fn record(&self, call: Call) {
        self.0
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(call);
    }

    /// Every recorded call, oldest first.
    pub fn calls(&self) -> Vec<Call> {
        self.0.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// Plugins whose `kind` capability was called, in call order.
    pub fn plugins_called(&self, kind: CapabilityKind) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter(|c| c.kind == kind)
            .map(|c| c.plugin)
            .collect()
    }

    /// Number of calls recorded for `plugin`.
    pub fn count_for(&self, plugin: &str) -> usize {
        self.calls().iter().filter(|c| c.plugin == plugin).count()
    }

    pub fn is_empty(&self) -> bool {
        self.calls().is_empty()
    }
}

/// Configurable plugin whose capabilities record their calls.
#[derive(Debug, Clone)]
pub struct MockPlugin {
    name: String,
    capabilities: Vec<CapabilityKind>,
    questions: Vec<Question>,
    fail_init: bool,
    fail_prepare: bool,
    log: CallLog,
}

impl MockPlugin {
    /// A plugin named `name` with no capabilities yet.
    pub fn new(name: impl Into<String>, log: &CallLog) -> Self {
        Self {
            name: name.into(),
            capabilities: Vec::new(),
            questions: Vec::new(),
            fail_init: false,
            fail_prepare: false,
            log: log.clone(),
        }
    }

    pub fn key_generator(self) -> Self {
        self.with(CapabilityKind::KeyGenerator)
    }

    pub fn publisher(self) -> Self {
        self.with(CapabilityKind::Publisher)
    }

    pub fn notifier(self) -> Self {
        self.with(CapabilityKind::Notifier)
    }

    /// Add a preparer asking `questions`. `prepare` echoes the answers back as options.
    pub fn preparer(mut self, questions: Vec<Question>) -> Self {
        self.questions = questions;
        self.with(CapabilityKind::Preparer)
    }

    /// Make every `init` call fail.
    pub fn failing_init(mut self) -> Self {
        self.fail_init = true;
        self
    }

    /// Make every `prepare` call fail with an error that does not name the plugin.
    pub fn failing_prepare(mut self) -> Self {
        self.fail_prepare = true;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Build the capability bundle, as a plugin factory would.
    pub fn bundle(&self) -> PluginBundle {
        let mut bundle = PluginBundle::new();
        for kind in &self.capabilities {
            let capability = MockCapability {
                plugin: self.name.clone(),
                questions: self.questions.clone(),
                fail_init: self.fail_init,
                fail_prepare: self.fail_prepare,
                log: self.log.clone(),
            };
            bundle = match kind {
                CapabilityKind::KeyGenerator => bundle.with_key_generator(capability),
                CapabilityKind::Publisher => bundle.with_publisher(capability),
                CapabilityKind::Notifier => bundle.with_notifier(capability),
                CapabilityKind::Preparer => bundle.with_preparer(capability),
            };
        }
        bundle
    }

    fn with(mut self, kind: CapabilityKind) -> Self {
        if !self.capabilities.contains(&kind) {
            self.capabilities.push(kind);
        }
        self
    }
}

/// Resolver producing each mock plugin under its name.
pub fn mock_resolver(plugins: Vec<MockPlugin>) -> StaticResolver {
    let mut resolver = StaticResolver::new();
    for plugin in plugins {
        let name = plugin.name.clone();
        resolver.register(name, move || plugin.bundle());
    }
    resolver
}

struct MockCapability {
    plugin: String,
    questions: Vec<Question>,
    fail_init: bool,
    fail_prepare: bool,
    log: CallLog,
}

impl MockCapability {
    fn record_init(&self, kind: CapabilityKind, ctx: PluginContext) -> Result<(), RegSuitError> {
        self.log.record(Call {
            plugin: self.plugin.clone(),
            kind,
            options: ctx.options,
            no_emit: ctx.no_emit,
            logger_scope: ctx.logger.scope().to_string(),
        });
        if self.fail_init {
            return Err(RegSuitError::PluginInit {
                name: self.plugin.clone(),
                message: "mock init failure".to_string(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl KeyGenerator for MockCapability {
    fn init(&self, ctx: PluginContext) -> Result<(), RegSuitError> {
        self.record_init(CapabilityKind::KeyGenerator, ctx)
    }

    async fn expected_key(&self) -> Result<Option<String>, RegSuitError> {
        Ok(Some("expected-key".to_string()))
    }

    async fn actual_key(&self) -> Result<String, RegSuitError> {
        Ok("actual-key".to_string())
    }
}

#[async_trait]
impl Publisher for MockCapability {
    fn init(&self, ctx: PluginContext) -> Result<(), RegSuitError> {
        self.record_init(CapabilityKind::Publisher, ctx)
    }

    async fn fetch(&self, _key: &str) -> Result<(), RegSuitError> {
        Ok(())
    }

    async fn publish(&self, key: &str) -> Result<PublishResult, RegSuitError> {
        Ok(PublishResult {
            report_url: Some(format!("https://reports.example/{key}/index.html")),
        })
    }
}

#[async_trait]
impl Notifier for MockCapability {
    fn init(&self, ctx: PluginContext) -> Result<(), RegSuitError> {
        self.record_init(CapabilityKind::Notifier, ctx)
    }

    async fn notify(&self, _params: &NotifyParams) -> Result<(), RegSuitError> {
        Ok(())
    }
}

#[async_trait]
impl Preparer for MockCapability {
    fn inquire(&self) -> Vec<Question> {
        self.questions.clone()
    }

    async fn prepare(&self, ctx: PluginContext<Answers>) -> Result<Value, RegSuitError> {
        let options = Value::Object(ctx.options);
        self.log.record(Call {
            plugin: self.plugin.clone(),
            kind: CapabilityKind::Preparer,
            options: options.clone(),
            no_emit: ctx.no_emit,
            logger_scope: ctx.logger.scope().to_string(),
        });
        if self.fail_prepare {
            return Err(RegSuitError::Config("mock prepare failure".to_string()));
        }
        Ok(options)
    }
}
