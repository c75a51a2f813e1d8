//! Search Client Module
//!
//! Orchestrates one search call end to end: encode the request URL, perform
//! the blocking GET, map the raw status code to the domain `Status`, and
//! decode the TSV body into phrases.
//!
//! ## Call model
//! One synchronous round trip per invocation. The whole response body is
//! buffered before any phrase is returned; there is no streaming, no retry
//! and no shared state between calls. Callers wanting parallel searches run
//! them on separate invocations. The response connection is released on
//! every exit path (success, decode error, transport error) because the
//! response object is dropped when the call returns.
//!
//! ## Submodules
//! - **`options`**: Validated mutable parameter holder.
//! - **`encode`**: Request URL construction.
//! - **`decode`**: TSV body parsing.

mod decode;
mod encode;
pub mod options;


use crate::error::{Error, Result};
use crate::model::phrase::{SearchResult, Status};
use options::Options;
use reqwest::Url;

/// Default service endpoint. Override with [`PhraseFinder::with_endpoint`],
/// e.g. to point the client at a test server.
pub const DEFAULT_ENDPOINT: &str = "http://phrasefinder.io/search";

/// Client for the PhraseFinder web service.
pub struct PhraseFinder {
    http: reqwest::blocking::Client,
    base_url: Url,
}

impl Default for PhraseFinder {
    fn default() -> Self {
        Self::new()
    }
}

impl PhraseFinder {
    /// Creates a client against the production endpoint.
    pub fn new() -> Self {
        Self {
            http: reqwest::blocking::Client::new(),
            base_url: Url::parse(DEFAULT_ENDPOINT).expect("default endpoint is a valid URL"),
        }
    }

    /// Creates a client against a custom endpoint.
    pub fn with_endpoint(endpoint: &str) -> Result<Self> {
        let base_url = Url::parse(endpoint)
            .map_err(|e| Error::invalid(format!("invalid endpoint {:?}: {}", endpoint, e)))?;
        Ok(Self {
            http: reqwest::blocking::Client::new(),
            base_url,
        })
    }

    /// Sends a request with default parameters.
    pub fn search(&self, query: &str) -> Result<SearchResult> {
        self.search_with_options(query, &Options::default())
    }

    /// Sends a request with the given parameters.
    ///
    /// Returns a [`SearchResult`] whose status is [`Status::Ok`] on
    /// success, with the matching phrases in server order. Any other status
    /// is a failed request carrying zero phrases; the body is not parsed.
    /// An HTTP status code outside the documented contract and any
    /// network/IO failure are reported as errors.
    pub fn search_with_options(&self, query: &str, options: &Options) -> Result<SearchResult> {
        let url = encode::build_url(&self.base_url, query, options);
        tracing::debug!("GET {}", url);

        let response = self.http.get(url).send()?;
        let status = Status::from_http(response.status().as_u16())?;

        if status != Status::Ok {
            tracing::warn!("Request failed with status {:?}", status);
            return Ok(SearchResult::new(status, Vec::new()));
        }

        let body = response.text()?;
        let phrases = decode::decode_body(&body)?;
        tracing::debug!("Decoded {} phrases", phrases.len());

        Ok(SearchResult::new(status, phrases))
    }
}
