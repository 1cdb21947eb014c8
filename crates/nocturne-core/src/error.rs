//! Core error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Session error: {0}")]
    Session(#[from] nocturne_session::SessionError),

    #[error("Navigation error: {0}")]
    Navigation(#[from] nocturne_navigation::NavigationError),

    #[error("Engine error: {0}")]
    Engine(#[from] nocturne_engine::EngineError),
}
