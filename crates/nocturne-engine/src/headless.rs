//! Headless engine
//!
//! A [`WebEngine`] with no rendering backend. It records every command it
//! receives and lets callers script the reported URL and page title. Shells
//! without a webview runtime use it as a stand-in, and the session tests use
//! it to observe exactly which loads the manager issued.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::engine::WebEngine;

/// A command the session issued to the engine, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineCommand {
    Load(String),
    LoadDocument { base_url: String },
    Back,
    Forward,
    Reload,
}

#[derive(Debug, Default)]
struct Inner {
    commands: Vec<EngineCommand>,
    current_url: String,
    page_title: String,
}

/// Command-recording engine. Cloning shares the underlying state, so a test
/// or shell can keep a handle while the tab owns the boxed engine.
#[derive(Debug, Clone, Default)]
pub struct HeadlessEngine {
    inner: Arc<Mutex<Inner>>,
}

impl HeadlessEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// All commands received so far, oldest first.
    pub fn commands(&self) -> Vec<EngineCommand> {
        self.inner.lock().commands.clone()
    }

    /// The most recent command, if any.
    pub fn last_command(&self) -> Option<EngineCommand> {
        self.inner.lock().commands.last().cloned()
    }

    /// Script the URL the engine reports from [`WebEngine::current_url`].
    pub fn set_current_url(&self, url: impl Into<String>) {
        self.inner.lock().current_url = url.into();
    }

    /// Script the title the engine reports from [`WebEngine::page_title`].
    pub fn set_page_title(&self, title: impl Into<String>) {
        self.inner.lock().page_title = title.into();
    }
}

impl WebEngine for HeadlessEngine {
    fn load(&mut self, url: &str) {
        tracing::debug!(url = %url, "headless engine load");
        let mut inner = self.inner.lock();
        inner.current_url = url.to_string();
        inner.commands.push(EngineCommand::Load(url.to_string()));
    }

    fn load_document(&mut self, _html: &str, base_url: &str) {
        let mut inner = self.inner.lock();
        inner.current_url = base_url.to_string();
        inner.commands.push(EngineCommand::LoadDocument {
            base_url: base_url.to_string(),
        });
    }

    fn back(&mut self) {
        self.inner.lock().commands.push(EngineCommand::Back);
    }

    fn forward(&mut self) {
        self.inner.lock().commands.push(EngineCommand::Forward);
    }

    fn reload(&mut self) {
        self.inner.lock().commands.push(EngineCommand::Reload);
    }

    fn current_url(&self) -> String {
        self.inner.lock().current_url.clone()
    }

    fn page_title(&self) -> String {
        self.inner.lock().page_title.clone()
    }
}
