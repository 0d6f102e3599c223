//! Status codes reported by the secure store
//!
//! The platform store answers every call with a numeric status. Success is
//! folded into `Ok`, every other status becomes a [`StoreStatus`].

use thiserror::Error;

/// Result type for raw secure store calls
pub type StoreResult<T> = Result<T, StoreStatus>;

/// Non-success status returned by a secure store call
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreStatus {
    /// No item matched the query
    #[error("The specified item could not be found in the store")]
    ItemNotFound,

    /// An item with the same primary attributes already exists
    #[error("The specified item already exists in the store")]
    DuplicateItem,

    /// The supplied data could not be decoded
    #[error("Unable to decode the provided data")]
    Decode,

    /// Authorization failed, e.g. no passcode is enrolled for a
    /// passcode-bound item
    #[error("Authorization or authentication failed")]
    AuthFailed,

    /// The item requires user interaction and none is allowed
    #[error("User interaction is not allowed")]
    InteractionNotAllowed,

    /// The user dismissed the presence prompt
    #[error("The operation was canceled by the user")]
    UserCanceled,

    /// One or more parameters were not valid
    #[error("One or more parameters were not valid")]
    Param,

    /// The operation is not implemented by this store
    #[error("Function or operation not implemented")]
    Unimplemented,

    /// Any status without a dedicated variant
    #[error("Secure store error (status {0})")]
    Other(i32),
}

impl StoreStatus {
    /// Numeric platform code for this status
    pub fn code(self) -> i32 {
        match self {
            StoreStatus::ItemNotFound => -25300,
            StoreStatus::DuplicateItem => -25299,
            StoreStatus::Decode => -26275,
            StoreStatus::AuthFailed => -25293,
            StoreStatus::InteractionNotAllowed => -25308,
            StoreStatus::UserCanceled => -128,
            StoreStatus::Param => -50,
            StoreStatus::Unimplemented => -4,
            StoreStatus::Other(code) => code,
        }
    }

    /// Whether the status means the user declined or could not be asked
    pub fn is_presence_failure(self) -> bool {
        matches!(
            self,
            StoreStatus::UserCanceled | StoreStatus::AuthFailed | StoreStatus::InteractionNotAllowed
        )
    }
}
