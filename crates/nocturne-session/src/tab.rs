//! Tab data structure
//!
//! A tab exclusively owns one engine instance; dropping the tab releases the
//! engine. The `title` and `location` fields are display caches fed by engine
//! callbacks, so activating a tab can refresh the shell without querying the
//! engine.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use nocturne_engine::WebEngine;

/// Base URL the engine reports while the home document is displayed.
pub const HOME_BASE_URL: &str = "about:blank";

/// Opaque tab handle, stable for the tab's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TabId(Uuid);

impl TabId {
    pub(crate) fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl std::fmt::Display for TabId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Logical navigation target of a tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Location {
    /// The static home document.
    Home,
    /// An external URL.
    Url(String),
}

impl Location {
    /// Map an engine-reported URL back to a logical location. The home
    /// document loads with base `about:blank`, which must never leak into
    /// the address bar as a literal string.
    pub fn from_engine_url(url: &str) -> Self {
        if url.is_empty() || url == HOME_BASE_URL {
            Location::Home
        } else {
            Location::Url(url.to_string())
        }
    }

    /// Text the address bar shows for this location. Home renders empty; the
    /// shell substitutes a branded placeholder.
    pub fn address_text(&self) -> &str {
        match self {
            Location::Home => "",
            Location::Url(url) => url,
        }
    }

    pub fn is_home(&self) -> bool {
        matches!(self, Location::Home)
    }
}

pub struct Tab {
    /// Unique identifier.
    pub id: TabId,
    /// Engine instance, exclusively owned.
    pub engine: Box<dyn WebEngine>,
    /// Display title cache, recomputed on load completion.
    pub title: String,
    /// Logical location cache, updated on location-changed events.
    pub location: Location,
    /// When the tab was created.
    pub created_at: DateTime<Utc>,
    /// Last time the tab was activated.
    pub last_accessed_at: DateTime<Utc>,
}

impl Tab {
    pub(crate) fn new(engine: Box<dyn WebEngine>, location: Location) -> Self {
        let now = Utc::now();

        Self {
            id: TabId::generate(),
            engine,
            title: String::new(),
            location,
            created_at: now,
            last_accessed_at: now,
        }
    }

    pub(crate) fn touch(&mut self) {
        self.last_accessed_at = Utc::now();
    }
}

impl std::fmt::Debug for Tab {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tab")
            .field("id", &self.id)
            .field("title", &self.title)
            .field("location", &self.location)
            .finish_non_exhaustive()
    }
}
