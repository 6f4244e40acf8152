//! Error types for the walkthrough.

use azure_core::http::StatusCode;
use thiserror::Error;

use crate::config::ConfigError;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The HTTP client handed to the SDK could not be built.
    #[error("cannot build the HTTP client: {0}")]
    Transport(#[from] reqwest::Error),

    /// Anything the SDK reports, including non-success service responses.
    #[error(transparent)]
    Cosmos(#[from] azure_core::Error),
}

impl Error {
    /// HTTP status of a service error.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::Cosmos(e) => e.http_status(),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(StatusCode::NotFound)
    }
}

pub(crate) fn is_not_found(error: &azure_core::Error) -> bool {
    error.http_status() == Some(StatusCode::NotFound)
}

pub(crate) fn is_conflict(error: &azure_core::Error) -> bool {
    error.http_status() == Some(StatusCode::Conflict)
}

pub type Result<T> = std::result::Result<T, Error>;
