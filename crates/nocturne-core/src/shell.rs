//! Shell facade
//!
//! UI toolkits hand out event closures that each need access to the one
//! session, so the session lives behind a lock in a cloneable handle. Every
//! entry point takes the write lock, mutates, and returns; the UI event loop
//! serializes the calls, so the lock is never contended in practice.

use std::sync::Arc;

use parking_lot::RwLock;

use nocturne_engine::EngineFactory;
use nocturne_navigation::{InputResolver, SearchEngine};
use nocturne_session::{Location, Session, TabId, UiSink};

use crate::config::Config;
use crate::homepage::home_document;
use crate::Result;

pub struct Shell {
    config: Config,
    session: Arc<RwLock<Session>>,
}

impl Shell {
    /// Build a shell: renders the home document, wires the resolver from the
    /// configuration, and opens the session with its default home tab.
    pub fn new(
        config: Config,
        factory: Box<dyn EngineFactory>,
        ui: Box<dyn UiSink>,
    ) -> Result<Self> {
        let resolver = InputResolver::new(config.search_engine);
        let session = Session::new(
            config.browser_name.clone(),
            home_document(&config),
            resolver,
            factory,
            ui,
        )?;

        tracing::info!(browser = %config.browser_name, "Shell initialized");

        Ok(Self {
            config,
            session: Arc::new(RwLock::new(session)),
        })
    }

    /// Run a closure against the session. Event closures that need more than
    /// one call can use this to stay consistent within one lock hold.
    pub fn with_session<F, T>(&self, f: F) -> T
    where
        F: FnOnce(&mut Session) -> T,
    {
        f(&mut self.session.write())
    }

    // === Tab operations ===

    pub fn create_tab(&self, initial: Option<Location>) -> Result<TabId> {
        Ok(self.session.write().create_tab(initial)?)
    }

    pub fn close_tab(&self, id: TabId) {
        self.session.write().close_tab(id);
    }

    pub fn set_active(&self, id: TabId) {
        self.session.write().set_active(id);
    }

    pub fn tab_count(&self) -> usize {
        self.session.read().tab_count()
    }

    pub fn active_tab_id(&self) -> Option<TabId> {
        self.session.read().active_tab_id()
    }

    // === Navigation operations ===

    pub fn navigate(&self, text: &str) {
        self.session.write().navigate(text);
    }

    pub fn go_back(&self) {
        self.session.write().go_back();
    }

    pub fn go_forward(&self) {
        self.session.write().go_forward();
    }

    pub fn reload(&self) {
        self.session.write().reload();
    }

    pub fn go_home(&self) {
        self.session.write().go_home();
    }

    // === Engine callbacks ===

    pub fn on_location_changed(&self, id: TabId, url: &str) {
        self.session.write().on_location_changed(id, url);
    }

    pub fn on_load_finished(&self, id: TabId, success: bool) {
        self.session.write().on_load_finished(id, success);
    }

    // === Settings ===

    pub fn search_engine(&self) -> SearchEngine {
        self.session.read().search_engine()
    }

    pub fn set_search_engine(&self, engine: SearchEngine) {
        self.session.write().set_search_engine(engine);
    }

    /// Select a search engine by its settings-menu name.
    pub fn set_search_engine_by_name(&self, name: &str) -> Result<()> {
        let engine: SearchEngine = name.parse()?;
        self.set_search_engine(engine);
        Ok(())
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}

impl Clone for Shell {
    fn clone(&self) -> Self {
        Self {
            config: self.config.clone(),
            session: Arc::clone(&self.session),
        }
    }
}
