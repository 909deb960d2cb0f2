//! Error types for the negotiation engine.

use thiserror::Error;

/// Result type for negotiation operations.
pub type NegotiationResult<T> = Result<T, NegotiationError>;

/// Errors that can occur while decoding or encoding a payload.
///
/// Every error is terminal for the call that produced it: nothing is
/// retried and no partially decoded entity or truncated body escapes.
#[derive(Debug, Error)]
pub enum NegotiationError {
    /// The declared `Content-Type` (or its charset) matches no registered decoder.
    #[error("unsupported media type: {0}")]
    UnsupportedMediaType(String),

    /// The requested `Accept` value matches no registered encoder.
    #[error("not acceptable: {0}")]
    NotAcceptable(String),

    /// The payload is not valid text, is not well-formed, or lacks a
    /// required field of the right type.
    #[error("malformed payload: {0}")]
    MalformedPayload(String),

    /// A serializer failed while producing the response body.
    #[error("encoding failed: {0}")]
    Encode(String),
}

impl NegotiationError {
    /// The HTTP status a transport layer should answer with.
    pub fn status_code(&self) -> u16 {
        match self {
            NegotiationError::UnsupportedMediaType(_) => 415,
            NegotiationError::NotAcceptable(_) => 406,
            NegotiationError::MalformedPayload(_) => 400,
            NegotiationError::Encode(_) => 500,
        }
    }

    /// Whether the caller sent something wrong, as opposed to a server-side failure.
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.status_code())
    }

    pub(crate) fn malformed(detail: impl Into<String>) -> Self {
        NegotiationError::MalformedPayload(detail.into())
    }
}
