//! PhraseFinder Client Library
//!
//! A client for the <a href="http://phrasefinder.io">PhraseFinder</a> web
//! service, which searches phrases (n-grams) in version 2 of the Google
//! Books Ngram Dataset.
//!
//! ## Architecture Modules
//! The crate is composed of three loosely coupled layers:
//!
//! - **`model`**: The domain value types. The corpus registry with its
//!   wire codes and stable ordinals, tagged tokens, decoded phrases, and
//!   the response status table.
//! - **`client`**: The request/response pipeline. Encodes typed search
//!   parameters into a GET URL, performs the single synchronous round trip,
//!   and decodes the tab-separated response body into phrases.
//! - **`error`**: The two error kinds every fallible operation reports:
//!   invalid arguments (caller or wire contract violations) and transport
//!   failures.
//!
//! ## Example
//! ```no_run
//! use phrasefinder::{Options, PhraseFinder, Status};
//!
//! let client = PhraseFinder::new();
//! let mut options = Options::new();
//! options.set_max_results(10);
//!
//! let result = client.search_with_options("I like ???", &options)?;
//! if result.status() == Status::Ok {
//!     for phrase in result.phrases() {
//!         println!("{:.6} {}", phrase.score(), phrase);
//!     }
//! }
//! # Ok::<(), phrasefinder::Error>(())
//! ```

pub mod client;
pub mod error;
pub mod model;

pub use client::options::Options;
pub use client::{PhraseFinder, DEFAULT_ENDPOINT};
pub use error::{Error, Result};
pub use model::corpus::{Corpus, CORPUS_ID_SHIFT};
pub use model::phrase::{Phrase, SearchResult, Status, Tag, Token};
