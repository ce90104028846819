//! Error taxonomy for view data fetching.

use std::fmt;

/// Why a view failed to produce data.
///
/// The dashboard shell renders all three the same way (a failed view
/// card showing the message); the variant records whether the
/// transport, the backend, or the payload shape was at fault.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// Network or HTTP failure reaching the endpoint.
    Transport(String),
    /// HTTP-level success, but the payload reports a semantic failure
    /// (an `error` field in the body).
    Backend(String),
    /// Payload structurally malformed relative to the expected schema.
    Shape(String),
}

impl FetchError {
    /// The user-facing message.
    pub fn message(&self) -> &str {
        match self {
            FetchError::Transport(message)
            | FetchError::Backend(message)
            | FetchError::Shape(message) => message,
        }
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for FetchError {}
