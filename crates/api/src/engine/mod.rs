//! Server-side orchestration built on top of the repositories.

pub mod deck;
