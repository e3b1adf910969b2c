//! Unified error types for the `masta` crate.
//!
//! This module centralizes all failures that can occur while using the SDK and
//! provides a single top-level [`Error`] enum plus the convenient [`Result`] alias.
//! Errors from lower layers (`reqwest`, URL parsing, file I/O) are mapped into
//! structured variants so callers can tell a misconfigured client apart from a
//! network failure, a server refusal, or a payload that did not match its type.

use reqwest::StatusCode;
use thiserror::Error;

// --- Build-Time Error ---

/// Errors that can occur while building a [`MastaClient`](crate::MastaClient).
#[derive(Debug, Error)]
pub enum BuildError {
    /// No server URL was configured.
    #[error("No server URL was configured")]
    MissingServer,

    /// The server URL could not be parsed.
    #[error("Invalid server URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The server URL parsed, but cannot be used as an API base.
    #[error("Unsupported server URL `{0}`: expected an http(s) base URL")]
    UnsupportedScheme(String),

    /// Failed to build the HTTP client (reqwest configuration).
    #[error("Failed to build the HTTP client: {0}")]
    Http(#[from] reqwest::Error),
}

// --- The Main Operational Error Enum ---

/// The crate’s top-level error type.
///
/// It groups failures into high-level categories:
/// - [`Error::Build`] — construction of the client failed
/// - [`Error::Request`] — transport, server-side, or decoding issues of one call
/// - [`Error::Io`] — reading a local upload source failed
/// - [`Error::Cancelled`] / [`Error::DeadlineExceeded`] — the caller aborted the call
#[derive(Debug, Error)]
pub enum Error {
    /// Building the client failed.
    #[error("Client build failed: {0}")]
    Build(#[from] BuildError),

    /// HTTP request/response failed (transport, server, validation, JSON).
    #[error("Request failed: {0}")]
    Request(#[from] RequestError),

    /// Reading a local file for an upload failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The call was aborted through its cancellation token.
    #[error("The request was cancelled")]
    Cancelled,

    /// The call did not complete before its deadline.
    #[error("The request did not complete before its deadline")]
    DeadlineExceeded,
}

impl Error {
    /// HTTP status of a failed server response, if this error carries one.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::Request(RequestError::Api { status, .. })
            | Error::Request(RequestError::Http { status, .. }) => Some(*status),
            Error::Request(RequestError::Transport(e)) => e.status(),
            _ => None,
        }
    }

    /// Returns true if the call was aborted by the caller (token or deadline).
    pub fn is_cancellation(&self) -> bool {
        matches!(self, Error::Cancelled | Error::DeadlineExceeded)
    }
}

// --- Consolidated Request Error ---

/// Transport and server-side HTTP errors.
#[derive(Debug, Error)]
pub enum RequestError {
    /// Network/protocol failure from reqwest (timeouts, DNS, TLS, I/O, etc.).
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server returned a non-success status with a structured error body.
    #[error("{message} (HTTP {status})")]
    Api {
        /// The HTTP status code returned by the server.
        status: StatusCode,
        /// The server's message, from the `error` field of the body.
        message: String,
    },

    /// The server returned a non-success status and a body that was not a
    /// structured error.
    #[error("Server responded with an error: {status} - {body}")]
    Http {
        /// The HTTP status code returned by the server.
        status: StatusCode,
        /// The raw response body (or the canonical reason when it was unreadable).
        body: String,
    },

    /// Caller supplied an invalid path or argument for this API.
    #[error("Invalid request: {message}")]
    Validation {
        /// Human-readable explanation of what was invalid.
        message: String,
    },

    /// JSON decoding failed when parsing a successful server response.
    #[error("JSON decode error: {message}")]
    DecodeJson {
        /// Error message from the JSON deserializer.
        message: String,
    },
}

/// A specialized `Result` type for `masta` operations.
pub type Result<T> = std::result::Result<T, Error>;

// Ergonomic "Staircase" From Implementations ---
// A macro to reduce boilerplate for converting base errors into the top-level Error.
macro_rules! impl_from_for_error {
    ($from_type:ty, $to_variant:path) => {
        impl From<$from_type> for Error {
            fn from(err: $from_type) -> Self {
                $to_variant(err.into())
            }
        }
    };
}

impl_from_for_error!(reqwest::Error, Error::Request);
impl_from_for_error!(url::ParseError, Error::Build);
