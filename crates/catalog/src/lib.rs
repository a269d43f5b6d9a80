//! HTTP client library for the upstream movie catalog.
//!
//! Provides a typed REST wrapper around the catalog's paged listing
//! endpoints plus the response types they return. Deck building treats
//! an unreachable catalog as "no candidates right now", so the public
//! fetch surface degrades to an empty list instead of propagating
//! transport errors.

pub mod api;

pub use api::{CatalogClient, CatalogError, CatalogMovie};
