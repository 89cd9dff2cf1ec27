//
//  fmeflow-client
//  error.rs
//
//  Created by Ngonidzashe Mangudya on 2026/08/17.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! # Error Types
//!
//! This module provides the unified error type for all FME Flow API
//! operations, along with a crate-wide [`Result`] alias.
//!
//! ## Overview
//!
//! The FME Flow server reports every failure through its HTTP status code
//! and response body, so the crate deliberately keeps a single HTTP failure
//! variant ([`Error::Http`]) rather than one variant per status class. The
//! remaining variants cover what can go wrong before a response arrives
//! (configuration, transport) or after (decoding).
//!
//! No retry, backoff, or local recovery happens anywhere in this crate;
//! every error propagates unchanged to the caller.
//!
//! ## Example
//!
//! ```rust,no_run
//! use fmeflow_client::{Error, FmeFlowClient};
//!
//! # async fn example() -> Result<(), Error> {
//! let client = FmeFlowClient::new("https://fme.example.com", "my-token")?;
//!
//! match client.repositories().get("Samples").await {
//!     Ok(repo) => println!("found {}", repo.name),
//!     Err(e) if e.is_not_found() => println!("no such repository"),
//!     Err(e) => return Err(e),
//! }
//! # Ok(())
//! # }
//! ```

use reqwest::StatusCode;
use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for all FME Flow API operations.
///
/// # Variants
///
/// | Variant | Raised when |
/// |---------|-------------|
/// | `Config` | The client is constructed with an invalid base URL or token |
/// | `Http` | The server answered with a non-2xx status |
/// | `Network` | The request never completed (DNS, TLS, connection, timeout) |
/// | `Decode` | The response body did not match the expected JSON shape |
///
/// # Notes
///
/// - `Http` carries the status code and the raw response body verbatim;
///   the crate does not distinguish 4xx from 5xx beyond the code itself.
/// - A missing `items` envelope on a collection endpoint surfaces as
///   `Decode` at the call site; malformed server JSON is not papered over.
#[derive(Debug, Error)]
pub enum Error {
    /// The client configuration was rejected before any request was made.
    #[error("Invalid client configuration: {0}")]
    Config(String),

    /// The server answered with a non-success status code.
    ///
    /// The body is kept verbatim so callers can inspect whatever detail
    /// the server chose to include.
    #[error("FME Flow returned {status}: {body}")]
    Http {
        /// HTTP status code of the failed response.
        status: StatusCode,
        /// Raw response body, usually a JSON error document.
        body: String,
    },

    /// A transport-level failure: the request did not complete.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The response body could not be decoded into the expected type.
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl Error {
    /// Returns the HTTP status code if this is an [`Error::Http`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use fmeflow_client::Error;
    /// use reqwest::StatusCode;
    ///
    /// let err = Error::Http {
    ///     status: StatusCode::FORBIDDEN,
    ///     body: String::new(),
    /// };
    /// assert_eq!(err.status(), Some(StatusCode::FORBIDDEN));
    /// ```
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns `true` if the server reported 404 Not Found.
    ///
    /// Convenience for the common "does this resource exist" check on
    /// detail lookups such as
    /// [`RepositoryManager::get`](crate::api::RepositoryManager::get).
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(StatusCode::NOT_FOUND)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_only_on_http() {
        let http = Error::Http {
            status: StatusCode::NOT_FOUND,
            body: "missing".to_string(),
        };
        assert_eq!(http.status(), Some(StatusCode::NOT_FOUND));
        assert!(http.is_not_found());

        let config = Error::Config("bad url".to_string());
        assert_eq!(config.status(), None);
        assert!(!config.is_not_found());
    }

    #[test]
    fn test_http_display_includes_status_and_body() {
        let err = Error::Http {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            body: "{\"message\":\"boom\"}".to_string(),
        };
        let text = err.to_string();
        assert!(text.contains("500"));
        assert!(text.contains("boom"));
    }
}
