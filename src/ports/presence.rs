use crate::model::StoreResult;

/// Local-presence check (passcode or biometric prompt)
///
/// The crate never matches biometrics itself; it only asks.
pub trait PresencePrompt {
    /// Ask the user to confirm presence
    ///
    /// # Errors
    ///
    /// Returns `StoreStatus::UserCanceled` when the user declines.
    fn confirm_presence(&mut self, reason: &str) -> StoreResult<()>;
}
