//! Domain Model Module
//!
//! Immutable value types shared between the request and response sides of
//! the client.
//!
//! ## Submodules
//! - **`corpus`**: The registry of searchable corpora, their wire short
//!   codes, stable ordinals, and the phrase-id bit unpacking.
//! - **`phrase`**: Tokens with their tags, decoded phrases, the response
//!   `Status` enum, and the `SearchResult` container.

pub mod corpus;
pub mod phrase;

#[cfg(test)]
mod tests;
