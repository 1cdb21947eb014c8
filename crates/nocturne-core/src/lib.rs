//! Nocturne Core
//!
//! Ties the session layer together for a shell: configuration, the static
//! home document, and the [`Shell`] facade that UI event closures share.

mod config;
mod error;
mod homepage;
mod shell;

pub use config::Config;
pub use error::CoreError;
pub use homepage::home_document;
pub use shell::Shell;

// Re-export the pieces shells interact with.
pub use nocturne_engine::{EngineCommand, EngineError, EngineFactory, HeadlessEngine, WebEngine};
pub use nocturne_navigation::{InputResolution, InputResolver, NavigationError, SearchEngine};
pub use nocturne_session::{
    tab_label, DisplayUpdate, Location, Session, SessionError, Tab, TabId, UiSink,
};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(true).init();
}
