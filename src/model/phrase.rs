//! Phrase Model
//!
//! Value types decoded from a response body: tagged tokens, phrases with
//! their frequency metadata, the response `Status`, and the `SearchResult`
//! container. Phrases are constructed only by the response decoder and are
//! read-only snapshots of one response line; there are no setters.

use crate::error::{Error, Result};
use crate::model::corpus::Corpus;
use serde::{Deserialize, Serialize};

/// Why a token appears in a matching phrase, relative to the query.
///
/// Encoded on the wire as a single-digit suffix on each token term. The
/// digit is pinned per variant, not derived from declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tag {
    /// Given literally as part of the query string.
    Given,
    /// Inserted by an application of the `?` or `*` operator.
    Inserted,
    /// The left- or right-hand side of the `/` operator.
    Alternative,
    /// Completed by an application of the `+` operator.
    Completed,
}

const ALL_TAGS: [Tag; 4] = [Tag::Given, Tag::Inserted, Tag::Alternative, Tag::Completed];

impl Tag {
    /// Returns the wire digit for this tag.
    pub fn ordinal(self) -> u8 {
        match self {
            Tag::Given => 0,
            Tag::Inserted => 1,
            Tag::Alternative => 2,
            Tag::Completed => 3,
        }
    }

    /// Looks a tag up by its wire digit. Out-of-range digits are rejected,
    /// never wrapped or clamped.
    pub fn from_ordinal(ordinal: u32) -> Result<Tag> {
        ALL_TAGS
            .get(ordinal as usize)
            .copied()
            .ok_or_else(|| Error::invalid(format!("invalid tag ordinal: {}", ordinal)))
    }
}

/// A single token (word, punctuation mark, etc.) as part of a phrase.
///
/// Equality is structural over `(text, tag)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    text: String,
    tag: Tag,
}

impl Token {
    pub(crate) fn new(text: String, tag: Tag) -> Self {
        Self { text, tag }
    }

    /// Returns the token's text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the token's tag.
    pub fn tag(&self) -> Tag {
        self.tag
    }
}

/// A phrase, also called an n-gram: an ordered token sequence plus
/// aggregate frequency metadata and a service-wide unique id.
///
/// The corpus ordinal is packed into the id's high bits; see
/// [`Corpus::from_phrase_id`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Phrase {
    tokens: Vec<Token>,
    match_count: u64,
    volume_count: u32,
    first_year: i32,
    last_year: i32,
    id: u64,
    score: f64,
}

impl Phrase {
    pub(crate) fn new(
        tokens: Vec<Token>,
        match_count: u64,
        volume_count: u32,
        first_year: i32,
        last_year: i32,
        id: u64,
        score: f64,
    ) -> Self {
        Self {
            tokens,
            match_count,
            volume_count,
            first_year,
            last_year,
            id,
            score,
        }
    }

    /// The all-zero sentinel: zero tokens, zero metadata. Stands in for
    /// "no phrase" so callers never deal with an absent value.
    pub fn empty() -> Self {
        Self::new(Vec::new(), 0, 0, 0, 0, 0, 0.0)
    }

    /// Returns the phrase's tokens in wire order.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Returns the phrase's match count, also called its absolute frequency.
    pub fn match_count(&self) -> u64 {
        self.match_count
    }

    /// Returns the number of source volumes the phrase appears in.
    pub fn volume_count(&self) -> u32 {
        self.volume_count
    }

    /// Returns the phrase's first year of occurrence.
    pub fn first_year(&self) -> i32 {
        self.first_year
    }

    /// Returns the phrase's last year of occurrence.
    pub fn last_year(&self) -> i32 {
        self.last_year
    }

    /// Returns the phrase's id, unique within the whole service.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Returns the phrase's score, also called its relative frequency.
    pub fn score(&self) -> f64 {
        self.score
    }

    /// Returns the corpus this phrase belongs to, unpacked from the id.
    pub fn corpus(&self) -> Result<Corpus> {
        Corpus::from_phrase_id(self.id)
    }
}

impl std::fmt::Display for Phrase {
    /// Whitespace-joined concatenation of the token texts.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for token in &self.tokens {
            if !first {
                f.write_str(" ")?;
            }
            f.write_str(token.text())?;
            first = false;
        }
        Ok(())
    }
}

/// Outcome of a request, derived from the HTTP status code.
///
/// The table below is the whole contract; a code outside it is a fatal
/// decode error rather than a guessed default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    /// 200. The request was successful.
    Ok,
    /// 400. A required parameter was missing or had an invalid value.
    BadRequest,
    /// 402. The usage quota was exhausted.
    PaymentRequired,
    /// 405. The request used a verb other than GET.
    MethodNotAllowed,
    /// 429. Too many requests in a short period of time.
    TooManyRequests,
    /// 500. The service failed to process the request.
    ServerError,
    /// 502. The service is currently down.
    BadGateway,
}

impl Status {
    /// Maps a transport status code to the domain status.
    pub fn from_http(code: u16) -> Result<Status> {
        match code {
            200 => Ok(Status::Ok),
            400 => Ok(Status::BadRequest),
            402 => Ok(Status::PaymentRequired),
            405 => Ok(Status::MethodNotAllowed),
            429 => Ok(Status::TooManyRequests),
            500 => Ok(Status::ServerError),
            502 => Ok(Status::BadGateway),
            other => Err(Error::invalid(format!(
                "unexpected HTTP status code: {}",
                other
            ))),
        }
    }
}

/// The outcome of one search call: a status plus the matching phrases in
/// server response order. A non-OK status always carries zero phrases.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    status: Status,
    phrases: Vec<Phrase>,
}

impl SearchResult {
    pub(crate) fn new(status: Status, phrases: Vec<Phrase>) -> Self {
        Self { status, phrases }
    }

    /// An OK result with zero phrases. Usable instead of `Option` to
    /// represent the absence of a result.
    pub fn empty() -> Self {
        Self::new(Status::Ok, Vec::new())
    }

    /// Returns the status of the response.
    pub fn status(&self) -> Status {
        self.status
    }

    /// Returns the matching phrases. Empty if the request failed or the
    /// result set is empty; never absent.
    pub fn phrases(&self) -> &[Phrase] {
        &self.phrases
    }
}
