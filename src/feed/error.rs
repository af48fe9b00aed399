//! Feed error types

use thiserror::Error;

use super::records::FeedKind;

/// Why a featured list could not be loaded
#[derive(Error, Debug)]
pub enum FeedError {
    /// Request never produced a response
    #[error("Network error: {0}")]
    Network(String),

    /// Server answered with a non-success status
    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    /// Body was not valid JSON
    #[error("Decode error: {0}")]
    Decode(String),

    /// Body was JSON but not an array
    #[error("{0} feed body is not a JSON array")]
    NotAList(FeedKind),

    /// HTTP client could not be constructed
    #[error("Client error: {0}")]
    Client(String),
}

impl From<serde_json::Error> for FeedError {
    fn from(err: serde_json::Error) -> Self {
        FeedError::Decode(err.to_string())
    }
}

pub type FeedResult<T> = Result<T, FeedError>;
