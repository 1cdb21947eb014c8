//! Nocturne Session Management
//!
//! The session owns the ordered tab collection and the active-tab pointer,
//! routes navigation commands to the active tab's engine, and keeps the
//! shell's display state (address text, tab labels, window title, status)
//! synchronized through a [`UiSink`].
//!
//! Everything runs on the one UI thread: engine results arrive as callbacks
//! on that thread, so no operation blocks and no locking happens here.

mod display;
mod error;
mod session;
mod tab;

pub use display::{tab_label, DisplayUpdate, UiSink, TITLE_DISPLAY_LIMIT};
pub use error::SessionError;
pub use session::Session;
pub use tab::{Location, Tab, TabId, HOME_BASE_URL};

pub type Result<T> = std::result::Result<T, SessionError>;
