//! Error handling and custom error types
//!
//! Provides unified error handling across the application using thiserror.

use crate::models::Provider;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("{provider}: {message}")]
    Provider { provider: Provider, message: String },

    #[error("Unknown provider: {0}")]
    UnknownProvider(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Generic error: {0}")]
    Generic(String),
}

pub type Result<T> = std::result::Result<T, Error>;
