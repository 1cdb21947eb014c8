//! Session error types
//!
//! Deliberately small: operations against a nonexistent or absent tab are
//! silent no-ops, and engine load failures surface only through the
//! load-finished callback. The one genuine failure is engine allocation.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Engine error: {0}")]
    Engine(#[from] nocturne_engine::EngineError),
}
