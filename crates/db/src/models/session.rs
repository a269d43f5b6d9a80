//! Session model and DTOs.

use cinematch_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A session row from the `sessions` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Session {
    pub id: DbId,
    pub session_code: String,
    pub category: String,
    pub last_active_at: Timestamp,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for patching a session.
///
/// The field list here is the complete set of caller-mutable session
/// fields; updates are never assembled from caller-supplied field names.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateSession {
    pub category: Option<String>,
}

impl UpdateSession {
    /// True when the patch carries nothing to apply.
    pub fn is_empty(&self) -> bool {
        self.category.is_none()
    }
}
