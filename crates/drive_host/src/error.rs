//! Error taxonomy for drive backend calls.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Failure reported by a [`crate::DriveApiService`] or [`crate::UploadTransport`].
pub enum DriveApiError {
    /// The request could not be sent or no response arrived.
    #[error("request to `{url}` failed: {message}")]
    Transport {
        /// Request URL.
        url: String,
        /// Host-reported cause.
        message: String,
    },
    /// A response arrived but its body was not the expected JSON shape.
    #[error("response from `{url}` could not be decoded: {message}")]
    Decode {
        /// Request URL.
        url: String,
        /// Decoder-reported cause.
        message: String,
    },
    /// The active host cannot perform the operation.
    #[error("drive api unavailable: {0}")]
    Unsupported(String),
}

impl DriveApiError {
    /// Builds a [`DriveApiError::Transport`] error.
    pub fn transport(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Transport {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Builds a [`DriveApiError::Decode`] error.
    pub fn decode(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Decode {
            url: url.into(),
            message: message.into(),
        }
    }
}
