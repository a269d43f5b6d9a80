/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// Movie identifiers are the upstream catalog's own ids, used verbatim
/// as the natural key of the shared movie cache.
pub type MovieId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
