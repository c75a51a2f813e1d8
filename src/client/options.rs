//! Search Options
//!
//! A mutable holder for the optional request parameters. Every setter
//! validates its value immediately and fails with a descriptive error
//! instead of clamping, so an invalid configuration is caught at the call
//! site that introduced it rather than at request time.

use crate::error::{Error, Result};
use crate::model::corpus::Corpus;

/// Inclusive bounds for `nmin`/`nmax`, matching the dataset's n-gram sizes.
const PHRASE_LENGTH_RANGE: std::ops::RangeInclusive<u32> = 1..=5;

/// Optional parameters sent along with a query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    corpus: Corpus,
    min_phrase_length: u32,
    max_phrase_length: u32,
    max_results: u32,
    api_key: Option<String>,
}

impl Default for Options {
    /// The documented server-side defaults.
    fn default() -> Self {
        Self {
            corpus: Corpus::AmericanEnglish,
            min_phrase_length: 1,
            max_phrase_length: 5,
            max_results: 100,
            api_key: None,
        }
    }
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the corpus to be searched.
    pub fn corpus(&self) -> Corpus {
        self.corpus
    }

    /// Sets the corpus to be searched. Defaults to American English.
    pub fn set_corpus(&mut self, corpus: Corpus) {
        self.corpus = corpus;
    }

    /// Returns the minimum length (number of tokens) of matching phrases.
    pub fn min_phrase_length(&self) -> u32 {
        self.min_phrase_length
    }

    /// Sets the minimum length of matching phrases. Must be in `[1, 5]`.
    pub fn set_min_phrase_length(&mut self, length: u32) -> Result<()> {
        if !PHRASE_LENGTH_RANGE.contains(&length) {
            return Err(Error::invalid(format!(
                "min phrase length must be in [1, 5], got {}",
                length
            )));
        }
        self.min_phrase_length = length;
        Ok(())
    }

    /// Returns the maximum length (number of tokens) of matching phrases.
    pub fn max_phrase_length(&self) -> u32 {
        self.max_phrase_length
    }

    /// Sets the maximum length of matching phrases. Must be in `[1, 5]`.
    pub fn set_max_phrase_length(&mut self, length: u32) -> Result<()> {
        if !PHRASE_LENGTH_RANGE.contains(&length) {
            return Err(Error::invalid(format!(
                "max phrase length must be in [1, 5], got {}",
                length
            )));
        }
        self.max_phrase_length = length;
        Ok(())
    }

    /// Returns the maximum number of phrases to be returned.
    pub fn max_results(&self) -> u32 {
        self.max_results
    }

    /// Sets the maximum number of phrases to be returned. A smaller value
    /// may lead to slightly faster response times.
    pub fn set_max_results(&mut self, max_results: u32) {
        self.max_results = max_results;
    }

    /// Returns the API key sent with the request, if any.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    /// Sets the API key appended to the request as the `key` parameter.
    pub fn set_api_key(&mut self, key: impl Into<String>) {
        self.api_key = Some(key.into());
    }
}
