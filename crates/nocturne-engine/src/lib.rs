//! Nocturne Engine Seam
//!
//! The session layer never talks to a concrete rendering engine. It issues
//! commands through the [`WebEngine`] trait and allocates one engine instance
//! per tab through an [`EngineFactory`]. Engine results (location changes,
//! load completion) flow back to the session as callbacks on the UI thread.

mod engine;
mod error;
mod headless;

pub use engine::{EngineFactory, WebEngine};
pub use error::EngineError;
pub use headless::{EngineCommand, HeadlessEngine};

pub type Result<T> = std::result::Result<T, EngineError>;
