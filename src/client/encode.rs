//! Request Encoder
//!
//! Builds the GET request URL from a query string and an `Options` value.
//! The query string is opaque to the client: the service's operators
//! (`?`, `*`, `/`, `+`) are percent-encoded like any other text and
//! interpreted server-side.
//!
//! The optional parameters `nmin`, `nmax` and `topk` are always emitted,
//! even when they equal the server-side defaults. The server applies the
//! same defaults either way, so this costs a few bytes per request in
//! exchange for URLs that state the full effective parameter set.

use crate::client::options::Options;
use reqwest::Url;

pub(crate) fn build_url(base: &Url, query: &str, options: &Options) -> Url {
    let mut url = base.clone();
    {
        let mut pairs = url.query_pairs_mut();
        pairs
            .append_pair("format", "tsv")
            .append_pair("query", query)
            .append_pair("corpus", options.corpus().short_code())
            .append_pair("nmin", &options.min_phrase_length().to_string())
            .append_pair("nmax", &options.max_phrase_length().to_string())
            .append_pair("topk", &options.max_results().to_string());
        if let Some(key) = options.api_key() {
            pairs.append_pair("key", key);
        }
    }
    url
}
