//! Corpus Registry
//!
//! Enumerates the searchable corpora of version 2 of the Google Books
//! Ngram Dataset and pins, for each one, its wire-format short code and its
//! numeric ordinal. The ordinal is part of the service contract: it appears
//! in request URLs indirectly (via the short code) and is packed into the
//! high bits of every phrase id, so the mapping below must never change
//! once published. Both directions are written as exhaustive matches so a
//! new corpus variant fails to compile until it is added everywhere.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Number of bits the phrase id reserves below the corpus ordinal.
/// A phrase id decodes as `corpus_ordinal << CORPUS_ID_SHIFT | relative_id`.
pub const CORPUS_ID_SHIFT: u32 = 40;

/// One language/dialect-specific partition of the underlying dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Corpus {
    AmericanEnglish,
    BritishEnglish,
    Chinese,
    French,
    German,
    Russian,
    Spanish,
}

/// All corpora, indexable by ordinal.
const ALL: [Corpus; 7] = [
    Corpus::AmericanEnglish,
    Corpus::BritishEnglish,
    Corpus::Chinese,
    Corpus::French,
    Corpus::German,
    Corpus::Russian,
    Corpus::Spanish,
];

impl Corpus {
    /// Returns the short code used in request URLs, e.g. `eng-us`.
    pub fn short_code(self) -> &'static str {
        match self {
            Corpus::AmericanEnglish => "eng-us",
            Corpus::BritishEnglish => "eng-gb",
            Corpus::Chinese => "chi",
            Corpus::French => "fre",
            Corpus::German => "ger",
            Corpus::Russian => "rus",
            Corpus::Spanish => "spa",
        }
    }

    /// Returns the stable ordinal embedded in phrase ids.
    ///
    /// Pinned explicitly rather than derived from declaration order, so a
    /// future reordering of the enum cannot silently change wire semantics.
    pub fn ordinal(self) -> u8 {
        match self {
            Corpus::AmericanEnglish => 0,
            Corpus::BritishEnglish => 1,
            Corpus::Chinese => 2,
            Corpus::French => 3,
            Corpus::German => 4,
            Corpus::Russian => 5,
            Corpus::Spanish => 6,
        }
    }

    /// Looks a corpus up by its ordinal.
    pub fn from_ordinal(ordinal: u64) -> Result<Corpus> {
        ALL.get(ordinal as usize)
            .copied()
            .ok_or_else(|| Error::invalid(format!("invalid corpus ordinal: {}", ordinal)))
    }

    /// Unpacks the corpus from the high bits of a phrase id.
    pub fn from_phrase_id(id: u64) -> Result<Corpus> {
        Corpus::from_ordinal(id >> CORPUS_ID_SHIFT)
    }

    /// Number of corpora in the registry.
    pub fn count() -> usize {
        ALL.len()
    }

    /// Iterates over all corpora in ordinal order.
    pub fn all() -> impl Iterator<Item = Corpus> {
        ALL.iter().copied()
    }
}
