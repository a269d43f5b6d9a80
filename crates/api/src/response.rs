//! Shared response envelope types for API handlers.
//!
//! Every application-level response is HTTP 200 with a body carrying a
//! `success` flag: `{"success": true, …payload}` on success and
//! `{"success": false, "error": …}` on failure (the failure side is
//! produced by [`AppError`]). Use [`SuccessResponse`] instead of ad-hoc
//! `json!` payloads to get compile-time type safety and consistent
//! serialization.
//!
//! [`AppError`]: crate::error::AppError

use serde::Serialize;

/// Success envelope: `{"success": true}` plus the flattened payload.
#[derive(Debug, Serialize)]
pub struct SuccessResponse<T: Serialize> {
    /// Always `true`; failures are answered through the error envelope.
    pub success: bool,
    /// Endpoint payload, flattened into the envelope object.
    #[serde(flatten)]
    pub data: T,
}

impl<T: Serialize> SuccessResponse<T> {
    /// Wrap a payload in the envelope.
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Empty payload for endpoints that acknowledge without data.
#[derive(Debug, Serialize)]
pub struct Ack {}
