//! HTTP handlers for all web routes.

pub mod assess;
pub mod dashboard;
pub mod records;
pub mod system;

use axum::http::HeaderMap;
use uuid::Uuid;

use epiwatch_common::{EpiwatchError, Result};

/// Resolve the caller identity from the `x-user-id` header.
///
/// Authentication lives outside this service; an absent header maps to
/// the nil UUID, a malformed one is rejected.
pub fn user_from_headers(headers: &HeaderMap) -> Result<Uuid> {
    match headers.get("x-user-id") {
        None => Ok(Uuid::nil()),
        Some(value) => {
            let raw = value.to_str().map_err(|_| {
                EpiwatchError::invalid_input("x-user-id", "header is not valid UTF-8")
            })?;
            Uuid::parse_str(raw)
                .map_err(|_| EpiwatchError::invalid_input("x-user-id", "must be a UUID"))
        }
    }
}
