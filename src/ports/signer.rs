//! KeySigner trait - capability to use a stored private key

use crate::model::{KeyRef, StoreResult};

/// Capability to sign data with a private key held by the store
///
/// If the key carries an access control, the store asks for user presence
/// before signing.
pub trait KeySigner {
    /// Sign data using a stored private key
    ///
    /// # Errors
    ///
    /// Returns errors if:
    /// - The key is no longer in the store (`ItemNotFound`)
    /// - The key is not a private key (`Param`)
    /// - The user declined the presence prompt (`UserCanceled`)
    fn sign(&mut self, key: &KeyRef, data: &[u8]) -> StoreResult<Vec<u8>>;
}
