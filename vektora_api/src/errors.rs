//! Error types for the API client.

/// Errors that can occur when talking to the Vektora backend.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The request never produced a response (connection failure, timeout).
    #[error("request failed: {0}")]
    Transport(String),

    /// The API answered with a non-2xx status. `message` carries the
    /// server envelope's message when the body had one, otherwise a snippet
    /// of the raw body.
    #[error("request failed with status {status}: {message}")]
    HttpStatus { status: u16, message: String },

    /// The envelope contract was violated: `success` was false, or a
    /// nominally successful response arrived without `data`.
    #[error("{message}")]
    UnexpectedResponse { message: String },

    /// Some endpoint answered 401. Stored credentials have already been
    /// cleared; the front end should navigate to `redirect`.
    #[error("session expired")]
    SessionExpired { redirect: String },

    /// The auth endpoint rejected the supplied username/password.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// A URL could not be built from the configured base and path.
    #[error("invalid URL")]
    InvalidUrl,

    /// A 2xx body could not be decoded as the expected envelope shape.
    #[error("failed to decode response: {0}")]
    Decode(String),
}

impl Error {
    /// The server-provided failure text, when this error carries one
    /// verbatim. Notification layers prefer this over generic fallbacks.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Error::HttpStatus { message, .. } | Error::UnexpectedResponse { message } => {
                Some(message)
            }
            _ => None,
        }
    }
}
