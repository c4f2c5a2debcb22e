//! Unified SDK error types.
//!
//! Every operation surfaces one of three failure classes: an invalid
//! parameter (detected locally or reported by the server), an authorization
//! failure, or a property-server failure wrapping the transport error.

use thiserror::Error;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("Invalid parameter '{parameter}': {message}")]
    InvalidParameter { parameter: String, message: String },

    #[error("User '{user_id}' is not authorized: {message}")]
    NotAuthorized { user_id: String, message: String },

    #[error("Property server error: {0}")]
    PropertyServer(#[source] HttpError),
}

impl SdkError {
    pub(crate) fn invalid_parameter(parameter: &str, message: impl Into<String>) -> Self {
        SdkError::InvalidParameter {
            parameter: parameter.to_string(),
            message: message.into(),
        }
    }

    pub fn is_invalid_parameter(&self) -> bool {
        matches!(self, SdkError::InvalidParameter { .. })
    }

    pub fn is_not_authorized(&self) -> bool {
        matches!(self, SdkError::NotAuthorized { .. })
    }

    pub fn is_property_server(&self) -> bool {
        matches!(self, SdkError::PropertyServer(_))
    }
}

/// HTTP-layer errors.
#[derive(Error, Debug)]
pub enum HttpError {
    #[cfg(feature = "http")]
    #[error("Request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("{exception_class_name} ({related_http_code}): {message}")]
    Remote {
        related_http_code: u16,
        exception_class_name: String,
        message: String,
    },

    #[error("Could not decode response: {0}")]
    Decode(String),
}
