use tracing::debug;

use crate::model::{StoreResult, StoreStatus};
use crate::ports::PresencePrompt;

/// User who confirms every presence prompt
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysPresent;

impl PresencePrompt for AlwaysPresent {
    fn confirm_presence(&mut self, reason: &str) -> StoreResult<()> {
        debug!(reason, "Presence confirmed");
        Ok(())
    }
}

/// User who dismisses every presence prompt
#[derive(Debug, Clone, Copy, Default)]
pub struct DeclinePresence;

impl PresencePrompt for DeclinePresence {
    fn confirm_presence(&mut self, reason: &str) -> StoreResult<()> {
        debug!(reason, "Presence prompt dismissed");
        Err(StoreStatus::UserCanceled)
    }
}
