//! Model Module Tests
//!
//! Validates the corpus registry, the tag wire digits, token/phrase value
//! semantics, and the status code table.
//!
//! ## Test Scopes
//! - **Corpus**: Short codes, ordinal round-trips, phrase-id unpacking.
//! - **Tag**: Wire digit round-trips and out-of-range rejection.
//! - **Phrase**: Sentinel value, display form, structural token equality.
//! - **Status**: Completeness of the HTTP code table.
//! - **Serialization**: JSON compatibility of the model types.

#[cfg(test)]
mod tests {
    use crate::model::corpus::{Corpus, CORPUS_ID_SHIFT};
    use crate::model::phrase::{Phrase, Status, Tag, Token};

    // ============================================================
    // CORPUS TESTS
    // ============================================================

    #[test]
    fn test_corpus_short_codes() {
        assert_eq!(Corpus::AmericanEnglish.short_code(), "eng-us");
        assert_eq!(Corpus::BritishEnglish.short_code(), "eng-gb");
        assert_eq!(Corpus::Chinese.short_code(), "chi");
        assert_eq!(Corpus::French.short_code(), "fre");
        assert_eq!(Corpus::German.short_code(), "ger");
        assert_eq!(Corpus::Russian.short_code(), "rus");
        assert_eq!(Corpus::Spanish.short_code(), "spa");
    }

    #[test]
    fn test_corpus_short_codes_are_injective() {
        let codes: std::collections::HashSet<&str> =
            Corpus::all().map(|corpus| corpus.short_code()).collect();
        assert_eq!(codes.len(), Corpus::count());
    }

    #[test]
    fn test_corpus_ordinal_round_trip() {
        for corpus in Corpus::all() {
            let restored = Corpus::from_ordinal(corpus.ordinal() as u64).unwrap();
            assert_eq!(restored, corpus);
        }
    }

    #[test]
    fn test_corpus_from_ordinal_out_of_range() {
        assert!(Corpus::from_ordinal(7).is_err());
        assert!(Corpus::from_ordinal(255).is_err());
        assert!(Corpus::from_ordinal(u64::MAX).is_err());
    }

    #[test]
    fn test_corpus_from_phrase_id() {
        for corpus in Corpus::all() {
            // Relative id in the low bits must not disturb the unpacking.
            let id = ((corpus.ordinal() as u64) << CORPUS_ID_SHIFT) | 123_456_789;
            assert_eq!(Corpus::from_phrase_id(id).unwrap(), corpus);
        }
    }

    #[test]
    fn test_corpus_from_phrase_id_unknown_high_bits() {
        let id = 7u64 << CORPUS_ID_SHIFT;
        assert!(Corpus::from_phrase_id(id).is_err());
    }

    // ============================================================
    // TAG TESTS
    // ============================================================

    #[test]
    fn test_tag_ordinal_round_trip() {
        for tag in [Tag::Given, Tag::Inserted, Tag::Alternative, Tag::Completed] {
            assert_eq!(Tag::from_ordinal(tag.ordinal() as u32).unwrap(), tag);
        }
    }

    #[test]
    fn test_tag_wire_digits_are_pinned() {
        assert_eq!(Tag::Given.ordinal(), 0);
        assert_eq!(Tag::Inserted.ordinal(), 1);
        assert_eq!(Tag::Alternative.ordinal(), 2);
        assert_eq!(Tag::Completed.ordinal(), 3);
    }

    #[test]
    fn test_tag_from_ordinal_out_of_range() {
        // One past the enumeration's size must fail, never wrap or clamp.
        assert!(Tag::from_ordinal(4).is_err());
        assert!(Tag::from_ordinal(9).is_err());
    }

    // ============================================================
    // TOKEN / PHRASE TESTS
    // ============================================================

    #[test]
    fn test_token_structural_equality() {
        let a = Token::new("hello".to_string(), Tag::Given);
        let b = Token::new("hello".to_string(), Tag::Given);
        let c = Token::new("hello".to_string(), Tag::Inserted);
        let d = Token::new("world".to_string(), Tag::Given);

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, d);
    }

    #[test]
    fn test_empty_phrase_is_zero_initialized() {
        let phrase = Phrase::empty();

        assert!(phrase.tokens().is_empty());
        assert_eq!(phrase.match_count(), 0);
        assert_eq!(phrase.volume_count(), 0);
        assert_eq!(phrase.first_year(), 0);
        assert_eq!(phrase.last_year(), 0);
        assert_eq!(phrase.id(), 0);
        assert_eq!(phrase.score(), 0.0);
    }

    #[test]
    fn test_phrase_display_joins_token_texts() {
        let phrase = Phrase::new(
            vec![
                Token::new("I".to_string(), Tag::Given),
                Token::new("struggled".to_string(), Tag::Given),
                Token::new("to".to_string(), Tag::Inserted),
            ],
            10,
            5,
            1900,
            2000,
            42,
            0.1,
        );

        assert_eq!(phrase.to_string(), "I struggled to");
        assert_eq!(Phrase::empty().to_string(), "");
    }

    // ============================================================
    // STATUS TABLE TESTS
    // ============================================================

    #[test]
    fn test_status_table_is_complete() {
        assert_eq!(Status::from_http(200).unwrap(), Status::Ok);
        assert_eq!(Status::from_http(400).unwrap(), Status::BadRequest);
        assert_eq!(Status::from_http(402).unwrap(), Status::PaymentRequired);
        assert_eq!(Status::from_http(405).unwrap(), Status::MethodNotAllowed);
        assert_eq!(Status::from_http(429).unwrap(), Status::TooManyRequests);
        assert_eq!(Status::from_http(500).unwrap(), Status::ServerError);
        assert_eq!(Status::from_http(502).unwrap(), Status::BadGateway);
    }

    #[test]
    fn test_status_unknown_code_is_fatal() {
        // Codes outside the contract must error, not default to a guess.
        for code in [100, 201, 301, 404, 418, 503] {
            assert!(Status::from_http(code).is_err(), "code {} must fail", code);
        }
    }

    // ============================================================
    // SERIALIZATION TESTS
    // ============================================================

    #[test]
    fn test_phrase_serialization() {
        let phrase = Phrase::new(
            vec![Token::new("hello".to_string(), Tag::Given)],
            1234,
            56,
            1800,
            2008,
            (2u64 << crate::model::corpus::CORPUS_ID_SHIFT) | 99,
            0.25,
        );

        let json = serde_json::to_string(&phrase).expect("Serialization failed");
        let restored: Phrase = serde_json::from_str(&json).expect("Deserialization failed");

        assert_eq!(restored, phrase);
        assert_eq!(restored.corpus().unwrap(), Corpus::Chinese);
    }

    #[test]
    fn test_token_serialization() {
        let token = Token::new("über".to_string(), Tag::Completed);

        let json = serde_json::to_string(&token).unwrap();
        let restored: Token = serde_json::from_str(&json).unwrap();

        assert_eq!(restored, token);
    }
}
