//! Display-state synchronization
//!
//! The session never renders anything. It pushes [`DisplayUpdate`]s through a
//! registered [`UiSink`] and the shell applies them to its widgets. Updates
//! are serde-tagged so shells can forward them over an IPC boundary as-is.

use serde::{Deserialize, Serialize};

use crate::tab::{Location, TabId};

/// Maximum characters of a page title shown in a tab label.
pub const TITLE_DISPLAY_LIMIT: usize = 25;

const TRUNCATION_MARKER: char = '…';

/// Label shown for a tab whose page reported no title.
const UNTITLED_LABEL: &str = "New Tab";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DisplayUpdate {
    /// Address bar contents. `text` is empty for the home document, with the
    /// branded placeholder carried alongside; the shell resets the caret to
    /// the start when applying a non-empty text.
    AddressBar {
        text: String,
        placeholder: Option<String>,
    },
    /// Label for one tab in the tab strip.
    TabLabel { tab: TabId, text: String },
    /// Window-level title, pushed only for the active tab.
    WindowTitle { text: String },
    /// Transient status bar message.
    Status { text: String },
}

/// Receives display-state pushes. Implemented by the shell; tests use a
/// recording sink.
pub trait UiSink {
    fn push(&mut self, update: DisplayUpdate);
}

impl<F> UiSink for F
where
    F: FnMut(DisplayUpdate),
{
    fn push(&mut self, update: DisplayUpdate) {
        self(update)
    }
}

/// Compute the display label for a tab.
///
/// Home shows the branded label, a non-empty page title is truncated to
/// [`TITLE_DISPLAY_LIMIT`] characters with a marker, and a missing title
/// falls back to a fixed placeholder. Load success and failure compute the
/// same label.
pub fn tab_label(branding: &str, location: &Location, page_title: &str) -> String {
    if location.is_home() {
        return branding.to_string();
    }

    if page_title.is_empty() {
        return UNTITLED_LABEL.to_string();
    }

    let mut chars = page_title.chars();
    let mut label: String = chars.by_ref().take(TITLE_DISPLAY_LIMIT).collect();
    if chars.next().is_some() {
        label.push(TRUNCATION_MARKER);
    }

    label
}
