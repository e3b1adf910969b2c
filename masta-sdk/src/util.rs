use reqwest::{Response, StatusCode};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::warn;

use crate::errors::{Error, RequestError, Result};

/// Convert non-2xx responses into a structured error.
///
/// If the status is successful (2xx), the original response is returned.
/// Otherwise the body is consumed and classified by [`classify_failure`].
pub(crate) async fn check_http_status(response: Response) -> Result<Response> {
    if response.status().is_success() {
        return Ok(response);
    }

    let status = response.status();
    let url = response.url().clone();
    let body = response.text().await.unwrap_or_else(|_| {
        status
            .canonical_reason()
            .unwrap_or("Unknown Error")
            .to_string()
    });

    let err = classify_failure(status, &body);
    warn!(%status, %url, error = %err, "server rejected request");
    Err(Error::from(err))
}

/// Error body shapes seen in the wild: `{"error": ".."}` (Mastodon, Pleroma),
/// `{"message": ".."}`, and OAuth's `{"error": "code", "error_description": ".."}`.
#[derive(Deserialize)]
struct ErrorBody {
    error: Option<String>,
    message: Option<String>,
    error_description: Option<String>,
}

/// Decode a failure body into [`RequestError::Api`], falling back to
/// [`RequestError::Http`] with the raw text.
pub(crate) fn classify_failure(status: StatusCode, body: &str) -> RequestError {
    let message = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.error_description.or(b.error).or(b.message));

    match message {
        Some(message) => RequestError::Api { status, message },
        None => RequestError::Http {
            status,
            body: body.to_string(),
        },
    }
}

/// Decode a success payload.
pub(crate) fn decode_json<T: DeserializeOwned>(bytes: &[u8]) -> Result<T> {
    serde_json::from_slice(bytes).map_err(|e| {
        Error::from(RequestError::DecodeJson {
            message: e.to_string(),
        })
    })
}
