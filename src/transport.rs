//
//  fmeflow-client
//  transport.rs
//
//  Created by Ngonidzashe Mangudya on 2026/08/17.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! # HTTP Transport for the FME Flow REST API
//!
//! This module provides the single HTTP transport shared by every resource
//! manager. It owns the immutable client configuration (normalized base URL,
//! authentication token, TLS-verification flag) and funnels every request
//! through one response handler.
//!
//! ## Responsibilities
//!
//! - Join request paths onto the fixed API root (`<base>/fmerest/v3`)
//!   without ever producing a double slash
//! - Attach the `Authorization: fmetoken token=<token>` and
//!   `Accept: application/json` headers to every request
//! - Apply the per-client TLS-verification policy
//! - Map any non-2xx response to [`Error::Http`] with the status code and
//!   raw body, and decode 2xx bodies as JSON
//!
//! ## Non-responsibilities
//!
//! There is no timeout, retry, or redirect policy beyond what reqwest does
//! by default, and no caching: one method call is one (or, for aggregation,
//! several sequential) HTTP round trips.

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use crate::error::{Error, Result};

/// Path of the REST API root, appended to the caller-supplied base URL.
const API_ROOT_PATH: &str = "/fmerest/v3";

/// Shared HTTP transport for one FME Flow server.
///
/// A `Transport` is created once per [`FmeFlowClient`](crate::FmeFlowClient)
/// and shared by reference (`Arc`) with every resource manager. It is
/// immutable after construction; changing the base URL, token, or TLS policy
/// means building a new client.
#[derive(Debug)]
pub(crate) struct Transport {
    /// The underlying HTTP client, pre-configured with auth headers.
    http: Client,
    /// Caller-supplied base URL with any trailing slashes stripped.
    base_url: String,
    /// `base_url` + [`API_ROOT_PATH`]; every request path is joined to this.
    api_root: String,
}

impl Transport {
    /// Builds a transport for `base_url` authenticating with `token`.
    ///
    /// The base URL is validated (must parse, must be `http` or `https`)
    /// and normalized by stripping trailing slashes before the API root is
    /// appended. The token is baked into a default `Authorization` header
    /// marked sensitive so it never shows up in debug output.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the base URL does not parse, uses a
    /// scheme other than `http`/`https`, or the token is empty or contains
    /// characters that are not valid in an HTTP header value.
    pub(crate) fn new(base_url: &str, token: &str, verify_tls: bool) -> Result<Self> {
        let base_url = base_url.trim_end_matches('/').to_string();

        let parsed = Url::parse(&base_url)
            .map_err(|e| Error::Config(format!("invalid base URL {base_url:?}: {e}")))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(Error::Config(format!(
                "base URL must use http or https, got {:?}",
                parsed.scheme()
            )));
        }

        if token.is_empty() {
            return Err(Error::Config("API token must not be empty".to_string()));
        }

        let mut auth = HeaderValue::from_str(&format!("fmetoken token={token}"))
            .map_err(|_| Error::Config("token contains invalid header characters".to_string()))?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = Client::builder()
            .user_agent(format!("fmeflow-client/{}", crate::VERSION))
            .default_headers(headers)
            .danger_accept_invalid_certs(!verify_tls)
            .build()?;

        let api_root = format!("{base_url}{API_ROOT_PATH}");

        Ok(Self {
            http,
            base_url,
            api_root,
        })
    }

    /// Returns the normalized base URL this transport talks to.
    pub(crate) fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the full API root (`<base>/fmerest/v3`).
    pub(crate) fn api_root(&self) -> &str {
        &self.api_root
    }

    /// Joins `path` onto the API root.
    ///
    /// The path may be given with or without a leading slash; exactly one
    /// slash separates it from the root, and trailing slashes are stripped
    /// from the result. FME Flow treats `/repositories` and
    /// `/repositories/` as different resources.
    fn endpoint(&self, path: &str) -> String {
        let url = if path.starts_with('/') {
            format!("{}{}", self.api_root, path)
        } else {
            format!("{}/{}", self.api_root, path)
        };
        url.trim_end_matches('/').to_string()
    }

    /// Issues a GET request and decodes the JSON response into `T`.
    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.endpoint(path);
        tracing::debug!("GET {url}");
        self.send(self.http.get(&url)).await
    }

    /// Issues a GET request with query parameters and decodes the response.
    pub(crate) async fn get_with_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T> {
        let url = self.endpoint(path);
        tracing::debug!("GET {url} {query:?}");
        self.send(self.http.get(&url).query(query)).await
    }

    /// Issues a POST request with a JSON body and decodes the response.
    pub(crate) async fn post<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = self.endpoint(path);
        tracing::debug!("POST {url}");
        self.send(self.http.post(&url).json(body)).await
    }

    /// Sends a prepared request and translates the response.
    ///
    /// Non-2xx statuses become [`Error::Http`] carrying the status and the
    /// raw body; 2xx bodies are decoded with `serde_json`, so an unexpected
    /// shape (for example a missing `items` envelope) surfaces as
    /// [`Error::Decode`] rather than being silently tolerated.
    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::debug!(%status, "FME Flow request failed");
            return Err(Error::Http { status, body });
        }

        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}
