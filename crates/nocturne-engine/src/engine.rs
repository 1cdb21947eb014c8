//! Rendering engine traits
//!
//! Commands are fire-and-forget: the engine performs navigation and rendering
//! off-thread internally and reports results later through the session's
//! `on_location_changed` / `on_load_finished` callbacks. Starting a new load
//! implicitly supersedes a pending one; cancellation is the engine's problem.

use crate::Result;

/// One instance of the host rendering engine, owned exclusively by one tab.
pub trait WebEngine: Send {
    /// Begin loading the given URL.
    fn load(&mut self, url: &str);

    /// Load an in-memory HTML document with the given base URL.
    fn load_document(&mut self, html: &str, base_url: &str);

    /// Navigate back in this engine's own history.
    fn back(&mut self);

    /// Navigate forward in this engine's own history.
    fn forward(&mut self);

    /// Reload the current page.
    fn reload(&mut self);

    /// The URL the engine currently displays.
    fn current_url(&self) -> String;

    /// The title of the currently loaded page, empty if none.
    fn page_title(&self) -> String;
}

/// Allocates engine instances, one per tab.
pub trait EngineFactory {
    fn create_engine(&self) -> Result<Box<dyn WebEngine>>;
}

impl<F> EngineFactory for F
where
    F: Fn() -> Result<Box<dyn WebEngine>>,
{
    fn create_engine(&self) -> Result<Box<dyn WebEngine>> {
        self()
    }
}
