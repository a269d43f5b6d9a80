//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument. Methods meant to run inside a
//! caller-owned transaction take `&mut PgConnection` instead; the deck
//! assignment engine owns the only multi-statement transaction.

pub mod deck_repo;
pub mod match_repo;
pub mod movie_repo;
pub mod preference_repo;
pub mod session_repo;

pub use deck_repo::DeckRepo;
pub use match_repo::MatchRepo;
pub use movie_repo::MovieRepo;
pub use preference_repo::PreferenceRepo;
pub use session_repo::SessionRepo;
