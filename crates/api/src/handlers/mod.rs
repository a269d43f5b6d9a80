//! HTTP request handlers, one module per resource.

pub mod deck;
pub mod matches;
pub mod preferences;
pub mod sessions;
