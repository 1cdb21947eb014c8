//! Session manager
//!
//! Owns the ordered tab collection and the active index, mediates between UI
//! events and engine commands, and pushes display updates to the shell.
//!
//! Invariant: `active` points at an existing tab whenever `tabs` is
//! non-empty. Construction creates one default tab on the home document, and
//! `close_tab` refuses to remove the last tab, so a zero-tab session is only
//! a transient state inside `new`.

use nocturne_engine::EngineFactory;
use nocturne_navigation::InputResolver;

use crate::display::{tab_label, DisplayUpdate, UiSink};
use crate::tab::{Location, Tab, TabId, HOME_BASE_URL};
use crate::Result;

pub struct Session {
    /// Browser name, used for branded labels and the address placeholder.
    branding: String,
    /// Static home document, loaded verbatim with base `about:blank`.
    home_document: String,
    /// Address bar input resolution.
    resolver: InputResolver,
    /// Allocates one engine per tab.
    factory: Box<dyn EngineFactory>,
    /// Receives display-state pushes.
    ui: Box<dyn UiSink>,
    /// Insertion order is tab order; ids are unique.
    tabs: Vec<Tab>,
    /// Index of the active tab.
    active: Option<usize>,
}

impl Session {
    /// Create a session with one default tab showing the home document.
    pub fn new(
        branding: impl Into<String>,
        home_document: impl Into<String>,
        resolver: InputResolver,
        factory: Box<dyn EngineFactory>,
        ui: Box<dyn UiSink>,
    ) -> Result<Self> {
        let mut session = Self {
            branding: branding.into(),
            home_document: home_document.into(),
            resolver,
            factory,
            ui,
            tabs: Vec::new(),
            active: None,
        };

        session.create_tab(None)?;

        tracing::info!(branding = %session.branding, "Initialized session");

        Ok(session)
    }

    // === Tab lifecycle ===

    /// Allocate a new tab, append it, make it active, and start loading.
    /// Engine *load* failures are reported later via `on_load_finished`;
    /// the only error here is engine allocation.
    pub fn create_tab(&mut self, initial: Option<Location>) -> Result<TabId> {
        let engine = self.factory.create_engine()?;
        let location = initial.unwrap_or(Location::Home);

        let mut tab = Tab::new(engine, location.clone());
        tab.title = tab_label(&self.branding, &location, "");
        let id = tab.id;

        match &location {
            Location::Home => tab.engine.load_document(&self.home_document, HOME_BASE_URL),
            Location::Url(url) => tab.engine.load(url),
        }

        self.tabs.push(tab);
        self.active = Some(self.tabs.len() - 1);
        self.refresh_active_display();

        tracing::info!(tab_id = %id, "Created new tab");

        Ok(id)
    }

    /// Close a tab and release its engine. Silent no-op for an unknown id or
    /// the last remaining tab, so the tab count never reaches zero.
    ///
    /// Promotion rule when closing the active tab: the tab now occupying the
    /// closed index, clamped to the new last index. That is the next tab in
    /// order, or the previous one when the closed tab was last.
    pub fn close_tab(&mut self, id: TabId) {
        let Some(index) = self.index_of(id) else {
            return;
        };
        if self.tabs.len() <= 1 {
            return;
        }

        self.tabs.remove(index);

        tracing::info!(tab_id = %id, "Closed tab");

        match self.active {
            Some(current) if current == index => {
                let next = index.min(self.tabs.len() - 1);
                self.active = Some(next);
                self.tabs[next].touch();
                self.refresh_active_display();
            }
            Some(current) if current > index => {
                self.active = Some(current - 1);
            }
            _ => {}
        }
    }

    /// Make a tab active and refresh the displayed title and address from its
    /// cached fields. No engine query happens here, which keeps the address
    /// bar consistent even before the engine fires a change signal.
    pub fn set_active(&mut self, id: TabId) {
        let Some(index) = self.index_of(id) else {
            return;
        };

        self.active = Some(index);
        self.tabs[index].touch();
        self.refresh_active_display();

        tracing::debug!(tab_id = %id, "Activated tab");
    }

    // === Navigation ===

    /// Resolve address bar input and load the result in the active tab.
    /// Empty input is a no-op.
    pub fn navigate(&mut self, text: &str) {
        let Some(resolution) = self.resolver.resolve(text) else {
            return;
        };
        let Some(tab) = self.active_tab_mut() else {
            return;
        };

        tab.engine.load(resolution.url());
    }

    pub fn go_back(&mut self) {
        if let Some(tab) = self.active_tab_mut() {
            tab.engine.back();
        }
    }

    pub fn go_forward(&mut self) {
        if let Some(tab) = self.active_tab_mut() {
            tab.engine.forward();
        }
    }

    pub fn reload(&mut self) {
        if let Some(tab) = self.active_tab_mut() {
            tab.engine.reload();
        }
    }

    /// Load the home document into the active tab, bypassing input
    /// resolution entirely.
    pub fn go_home(&mut self) {
        let Some(index) = self.active else {
            return;
        };

        self.tabs[index]
            .engine
            .load_document(&self.home_document, HOME_BASE_URL);
    }

    // === Engine callbacks (delivered on the UI thread) ===

    /// The engine reports a new location for a tab. Updates the cached
    /// location; refreshes the address bar only when the tab is active.
    pub fn on_location_changed(&mut self, id: TabId, url: &str) {
        let Some(index) = self.index_of(id) else {
            return;
        };

        self.tabs[index].location = Location::from_engine_url(url);

        tracing::debug!(tab_id = %id, url = %url, "Location changed");

        if self.active == Some(index) {
            self.refresh_address_bar();
        }
    }

    /// The engine finished a load. Recomputes the tab's label from the
    /// freshly queried page title (identically for success and failure),
    /// pushes it to the tab strip unconditionally, and to the window title
    /// and status bar only when the tab is active.
    pub fn on_load_finished(&mut self, id: TabId, success: bool) {
        let Some(index) = self.index_of(id) else {
            return;
        };

        let page_title = self.tabs[index].engine.page_title();
        let label = tab_label(&self.branding, &self.tabs[index].location, &page_title);
        self.tabs[index].title = label.clone();

        tracing::debug!(tab_id = %id, success, label = %label, "Load finished");

        self.ui.push(DisplayUpdate::TabLabel {
            tab: id,
            text: label.clone(),
        });

        if self.active == Some(index) {
            let text = self.window_title(&label);
            self.ui.push(DisplayUpdate::WindowTitle { text });
            self.ui.push(DisplayUpdate::Status {
                text: if success { "Ready" } else { "Load failed" }.to_string(),
            });
        }
    }

    // === Accessors ===

    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    pub fn tab_count(&self) -> usize {
        self.tabs.len()
    }

    pub fn active_tab(&self) -> Option<&Tab> {
        self.active.map(|index| &self.tabs[index])
    }

    pub fn active_tab_id(&self) -> Option<TabId> {
        self.active_tab().map(|tab| tab.id)
    }

    pub fn branding(&self) -> &str {
        &self.branding
    }

    pub fn search_engine(&self) -> nocturne_navigation::SearchEngine {
        self.resolver.search_engine()
    }

    pub fn set_search_engine(&mut self, engine: nocturne_navigation::SearchEngine) {
        self.resolver.set_search_engine(engine);
    }

    // === Internals ===

    fn index_of(&self, id: TabId) -> Option<usize> {
        self.tabs.iter().position(|tab| tab.id == id)
    }

    fn active_tab_mut(&mut self) -> Option<&mut Tab> {
        let index = self.active?;
        self.tabs.get_mut(index)
    }

    /// Push both address bar and window title from the active tab's cache.
    fn refresh_active_display(&mut self) {
        self.refresh_address_bar();

        if let Some(tab) = self.active_tab() {
            let text = self.window_title(&tab.title);
            self.ui.push(DisplayUpdate::WindowTitle { text });
        }
    }

    fn refresh_address_bar(&mut self) {
        let Some(tab) = self.active_tab() else {
            return;
        };

        let update = DisplayUpdate::AddressBar {
            text: tab.location.address_text().to_string(),
            placeholder: tab
                .location
                .is_home()
                .then(|| self.address_placeholder()),
        };
        self.ui.push(update);
    }

    fn address_placeholder(&self) -> String {
        format!(
            "{} — Powered by {}",
            self.branding,
            self.resolver.search_engine().display_name()
        )
    }

    fn window_title(&self, label: &str) -> String {
        if label == self.branding {
            self.branding.clone()
        } else {
            format!("{} — {}", label, self.branding)
        }
    }
}
