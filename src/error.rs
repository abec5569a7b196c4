//! Errors returned by tracking calls.

/// Error produced by a [`Transport`](crate::Transport) before any response
/// was received. Carried through unchanged so callers can downcast it.
pub type TransportError = Box<dyn std::error::Error + Send + Sync + 'static>;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The HTTP request itself failed (connect, TLS, timeout, body read).
    #[error(transparent)]
    Transport(TransportError),

    /// Adjust did not recognise the device identifier.
    #[error("Device not found")]
    DeviceNotFound,

    /// Any other "Event failed" response; holds the trimmed response body.
    #[error("{0}")]
    Rejected(String),

    #[error("malformed response body: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("invalid custom parameters: {0}")]
    Params(String),

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl Error {
    /// Checks if Adjust rejected the event because the device is unknown.
    pub fn is_device_not_found(&self) -> bool {
        matches!(self, Error::DeviceNotFound)
    }

    /// Checks if the request never produced a response.
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Transport(_))
    }
}
