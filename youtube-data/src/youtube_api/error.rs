//! Errors returned by [`YouTubeClient`](crate::YouTubeClient) operations.

use crate::youtube_api::transport::BoxError;
use serde_json::Value;

/// Message reported when an operation is attempted before an API key was provided.
pub const MISSING_KEY_MESSAGE: &str =
    "Please set a key using set_key. Get a key in https://console.developers.google.com";

/// Everything that can go wrong while calling the YouTube Data API.
///
/// All three cases are delivered through the same `Err` channel. Callers that care
/// about the distinction match on the variant.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No (or an empty) API key was configured.
    ///
    /// Detected before any request is built, so no network access happens.
    #[error("{}", MISSING_KEY_MESSAGE)]
    MissingKey,

    /// The HTTP request itself failed (DNS, connect, TLS, ...).
    ///
    /// The transport's error is kept untouched as the [`source`](std::error::Error::source).
    #[error("send GET request to YouTube API: {url}")]
    Transport {
        /// The requested URL, with the API key redacted.
        url: String,
        #[source]
        source: BoxError,
    },

    /// The API answered with a status other than `200 OK`.
    #[error("YouTube API request failed with status {status}: {}", api_message(.error).unwrap_or("no error details"))]
    Api {
        /// HTTP status code of the response.
        status: u16,
        /// The `error` member of the response body, forwarded as-is.
        ///
        /// This is `None` if the body had no `error` member or was not valid JSON.
        error: Option<Value>,
    },
}

impl Error {
    /// A human-readable description of the failure.
    ///
    /// For [`Error::Api`] this is the API's own `error.message` when it sent one.
    pub fn message(&self) -> String {
        match self {
            Error::Api { error, .. } => match api_message(error) {
                Some(message) => message.to_string(),
                None => self.to_string(),
            },
            _ => self.to_string(),
        }
    }

    /// The HTTP status code, if the request reached the API.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

fn api_message(error: &Option<Value>) -> Option<&str> {
    error.as_ref()?.get("message")?.as_str()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn api_error_prefers_remote_message() {
        let err = Error::Api {
            status: 403,
            error: Some(json!({ "code": 403, "message": "quota" })),
        };
        assert_eq!(err.message(), "quota");
        assert_eq!(err.status(), Some(403));
        assert_eq!(
            err.to_string(),
            "YouTube API request failed with status 403: quota"
        );
    }

    #[test]
    fn api_error_without_payload() {
        let err = Error::Api {
            status: 500,
            error: None,
        };
        assert_eq!(
            err.message(),
            "YouTube API request failed with status 500: no error details"
        );
    }

    #[test]
    fn missing_key_message() {
        assert_eq!(Error::MissingKey.message(), MISSING_KEY_MESSAGE);
        assert_eq!(Error::MissingKey.status(), None);
    }
}
