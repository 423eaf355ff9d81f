//! Error types for card data loading.
//!
//! All load failures are represented by the `CardError` enum. Any of them
//! aborts the whole setup: there is no partial catalog and no retry, a
//! consumer surfaces the error and the user reloads.
//!
//! Missing optional card fields and unknown stat field names are not
//! errors; the lookup and renderer tolerate them (see [`crate::lookup`]
//! and [`crate::render`]).

use thiserror::Error;

/// Errors that can occur while fetching and decoding the card documents.
///
/// # Examples
///
/// ```rust
/// use cardex::CardError;
///
/// let err = CardError::Status {
///     status: reqwest::StatusCode::NOT_FOUND,
///     url: "https://example.invalid/cards.json".into(),
/// };
/// assert!(err.to_string().contains("404"));
/// ```
#[derive(Debug, Error)]
pub enum CardError {
    /// The HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    Client(#[source] reqwest::Error),

    /// A request failed at the transport level (DNS, connect, timeout).
    #[error("request for {url} failed: {source}")]
    Fetch {
        url: String,
        #[source]
        source: Box<reqwest::Error>,
    },

    /// The server answered with a non-success status.
    #[error("HTTP {status} from {url}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },

    /// The response body was not the expected JSON array.
    #[error("failed to decode {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: Box<reqwest::Error>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_display() {
        let err = CardError::Status {
            status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
            url: "https://example.invalid/cards.json".into(),
        };
        let display = err.to_string();
        assert!(display.contains("500"));
        assert!(display.contains("cards.json"));
    }
}
