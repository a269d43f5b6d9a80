//! Domain model structs and DTOs.
//!
//! Each submodule pairs a `FromRow` entity struct matching its database
//! row with the DTOs used to write it. Projection structs (the shapes
//! actually served over the wire) also live here, next to the entity
//! they project.

pub mod deck;
pub mod matches;
pub mod movie;
pub mod preference;
pub mod session;
