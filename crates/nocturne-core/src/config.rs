//! Browser configuration
//!
//! Constructed explicitly and handed to the shell. Nothing is persisted
//! across runs and no environment variables are read.

use serde::{Deserialize, Serialize};

use nocturne_navigation::SearchEngine;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Browser name, used for branded tab labels and the window title.
    pub browser_name: String,
    /// Search engine for address bar queries and the home page search box.
    pub search_engine: SearchEngine,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            browser_name: "Nocturne".to_string(),
            search_engine: SearchEngine::default(),
        }
    }
}
