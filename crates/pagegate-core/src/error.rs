//! Error types for the core crate.

use thiserror::Error;

/// Errors from core primitives.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A session-token value did not have the `salt.digest` shape.
    #[error("malformed session token")]
    MalformedToken,
}

/// Errors from admin-payload validation.
///
/// Per-field problems are never errors: bad page ids are dropped, unknown
/// themes reset to the default, unknown group keys ignored. Only a payload
/// whose top level is not a JSON object is rejected outright.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// The save payload was not a JSON object.
    #[error("settings payload must be a JSON object")]
    NotAnObject,
}
