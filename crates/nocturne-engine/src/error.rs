//! Engine error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Failed to create engine instance: {0}")]
    CreateFailed(String),

    #[error("Engine backend unavailable: {0}")]
    BackendUnavailable(String),
}
