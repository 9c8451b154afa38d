//! Admin save handling: the guarded path that mutates settings.
//!
//! Every save passes two host-side checks before any payload parsing:
//! a request-forgery nonce and the caller's admin capability. The
//! outcome is a closed enum the host maps onto its own responses.

use serde_json::Value;

use pagegate_store::SettingsStore;

use crate::error::GateError;
use crate::groups::GroupStore;

/// Host-side authorization checks for the admin surface.
pub trait AdminGuard: Send + Sync {
    /// Verify the anti-forgery nonce attached to the save.
    fn verify_nonce(&self, nonce: &str) -> bool;

    /// Whether the current caller may manage settings.
    fn is_admin(&self) -> bool;
}

/// A submitted settings save.
#[derive(Debug, Clone)]
pub struct SaveRequest {
    pub nonce: String,
    pub settings: Value,
}

/// The outcome of a save attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// Settings were normalized and persisted.
    Saved,
    /// The nonce did not verify. Nothing was read from the payload.
    SecurityCheckFailed,
    /// The caller lacks the admin capability.
    InsufficientPermissions,
    /// The payload was not a settings object.
    InvalidPayload,
    /// The store rejected the write.
    StoreFailed(String),
}

/// Run the guarded save path.
///
/// Checks run in a fixed order: nonce, capability, payload. A failure
/// at any step stops before the next, so a forged request never
/// exercises the parser.
pub async fn handle_save<S: SettingsStore>(
    guard: &dyn AdminGuard,
    groups: &GroupStore<S>,
    request: &SaveRequest,
) -> SaveOutcome {
    if !guard.verify_nonce(&request.nonce) {
        return SaveOutcome::SecurityCheckFailed;
    }
    if !guard.is_admin() {
        return SaveOutcome::InsufficientPermissions;
    }

    match groups.save(&request.settings).await {
        Ok(_) => SaveOutcome::Saved,
        Err(GateError::Validation(_)) => SaveOutcome::InvalidPayload,
        Err(error) => SaveOutcome::StoreFailed(error.to_string()),
    }
}
