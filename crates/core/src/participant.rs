//! Participant slot validation.
//!
//! A session has exactly two fixed participant slots, numbered 1 and 2.
//! The slot is a bare number with no binding to a durable identity:
//! whoever submits under a slot speaks for that slot, and a later
//! submission under the same slot overwrites the earlier one.

use crate::error::CoreError;

/// The two participant slots of a session.
pub const PARTICIPANT_SLOTS: [i16; 2] = [1, 2];

/// Validate a caller-supplied participant number.
///
/// Accepts exactly 1 or 2 and narrows to the storage width; anything
/// else is a validation error with a caller-facing message.
pub fn validate_participant_number(n: i64) -> Result<i16, CoreError> {
    match n {
        1 | 2 => Ok(n as i16),
        _ => Err(CoreError::Validation(
            "Participant number must be 1 or 2".to_string(),
        )),
    }
}
