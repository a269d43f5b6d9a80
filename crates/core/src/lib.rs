//! Pure domain logic shared by the cinematch server and client crates.
//!
//! Zero I/O: everything here is deterministic (or deterministic given an
//! RNG) so it can be unit-tested without a database or network.

pub mod category;
pub mod deck;
pub mod error;
pub mod participant;
pub mod polling;
pub mod session_code;
pub mod types;
