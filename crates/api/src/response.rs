//! Shared response envelope for API handlers.
//!
//! All success responses carry `"success": true` with the payload fields
//! flattened alongside it, e.g. `{ "success": true, "history": [...] }`.
//! Use [`Success`] instead of ad-hoc `serde_json::json!` so payloads stay
//! typed.

use serde::Serialize;

/// Standard success envelope.
#[derive(Debug, Serialize)]
pub struct Success<T: Serialize> {
    pub success: bool,
    #[serde(flatten)]
    pub body: T,
}

impl<T: Serialize> Success<T> {
    pub fn new(body: T) -> Self {
        Self {
            success: true,
            body,
        }
    }
}
