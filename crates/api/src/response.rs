//! Shared response envelope for API handlers.
//!
//! Success responses wrap their payload in `{ "data": ... }`. Using
//! [`DataResponse`] instead of ad-hoc `serde_json::json!` keeps the shape
//! consistent and type-checked.

use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
///
/// # Example
///
/// ```ignore
/// Ok(Json(DataResponse { data: job }))
/// ```
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}
