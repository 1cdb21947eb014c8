//! Nocturne Navigation
//!
//! Address bar input resolution:
//! 1. Empty input → nothing
//! 2. Accepted scheme prefix (`http://`, `https://`, `file://`) → verbatim
//! 3. Contains a dot, no spaces → `https://` prepended
//! 4. Anything else → search query against the configured engine

mod error;
mod input;
mod search;

pub use error::NavigationError;
pub use input::{InputResolution, InputResolver};
pub use search::SearchEngine;

pub type Result<T> = std::result::Result<T, NavigationError>;
