//! Error types for idprov
//!
//! Every failing store mutation during provisioning aborts the attempt with
//! one [`ProvisioningError`]. Errors use thiserror for implementation.
//!
//! Failure to construct an access-control descriptor is deliberately absent:
//! it means the platform itself is broken and is raised as a panic by
//! `gateway::build_access_control`.

use std::fmt;
use thiserror::Error;

use crate::model::{CertificateError, ItemClass, StoreStatus};

/// Result type alias for provisioning operations
///
/// This is a convenience alias for `Result<T, ProvisioningError>`.
pub type ProvisioningResult<T> = Result<T, ProvisioningError>;

/// Reason a provisioning attempt was aborted
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProvisioningError {
    /// A category purge failed with something other than "nothing to delete"
    #[error("Secure store unavailable: purging {class} items failed: {status}")]
    StoreUnavailable { class: ItemClass, status: StoreStatus },

    /// The store rejected the key pair specification
    #[error("Failed to generate key pair: {status}")]
    KeyGenerationFailed { status: StoreStatus },

    /// The public key left behind by key generation could not be removed
    #[error("Failed to delete public key residue: {status}")]
    ResidueCleanupFailed { status: StoreStatus },

    /// The certificate could not be obtained, decoded or stored
    #[error("Failed to import certificate: {reason}")]
    CertificateImportFailed { reason: String },

    /// No identity could be formed or found for the tag
    #[error("No identity found for tag {tag}")]
    IdentityNotFound { tag: String },

    /// Re-adding a protected copy failed; the unprotected originals are
    /// already gone
    #[error("Failed to re-insert protected {item}: {status}")]
    ProtectionReinsertFailed {
        item: ProtectedItem,
        status: StoreStatus,
    },
}

impl ProvisioningError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ProvisioningError::StoreUnavailable { .. } => ErrorKind::StoreUnavailable,
            ProvisioningError::KeyGenerationFailed { .. } => ErrorKind::KeyGenerationFailed,
            ProvisioningError::ResidueCleanupFailed { .. } => ErrorKind::ResidueCleanupFailed,
            ProvisioningError::CertificateImportFailed { .. } => {
                ErrorKind::CertificateImportFailed
            }
            ProvisioningError::IdentityNotFound { .. } => ErrorKind::IdentityNotFound,
            ProvisioningError::ProtectionReinsertFailed { .. } => {
                ErrorKind::ProtectionReinsertFailed
            }
        }
    }
}

impl From<CertificateError> for ProvisioningError {
    fn from(err: CertificateError) -> Self {
        ProvisioningError::CertificateImportFailed {
            reason: err.to_string(),
        }
    }
}

/// Field-less mirror of [`ProvisioningError`], recorded in the aborted state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    StoreUnavailable,
    KeyGenerationFailed,
    ResidueCleanupFailed,
    CertificateImportFailed,
    IdentityNotFound,
    ProtectionReinsertFailed,
}

/// Item being re-inserted when protection failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProtectedItem {
    Certificate,
    PrivateKey,
}

impl fmt::Display for ProtectedItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProtectedItem::Certificate => f.write_str("certificate"),
            ProtectedItem::PrivateKey => f.write_str("private key"),
        }
    }
}

/// Errors from using a provisioned identity
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RetrieveError {
    #[error("No identity found for tag {tag}")]
    IdentityNotFound { tag: String },

    /// The user declined or could not be asked for presence
    #[error("User presence was not confirmed: {status}")]
    PresenceDenied { status: StoreStatus },

    #[error("Secure store error: {0}")]
    Store(StoreStatus),
}

impl From<StoreStatus> for RetrieveError {
    fn from(status: StoreStatus) -> Self {
        if status.is_presence_failure() {
            RetrieveError::PresenceDenied { status }
        } else {
            RetrieveError::Store(status)
        }
    }
}

impl From<ProvisioningError> for RetrieveError {
    fn from(err: ProvisioningError) -> Self {
        match err {
            ProvisioningError::IdentityNotFound { tag } => RetrieveError::IdentityNotFound { tag },
            ProvisioningError::StoreUnavailable { status, .. }
            | ProvisioningError::KeyGenerationFailed { status }
            | ProvisioningError::ResidueCleanupFailed { status }
            | ProvisioningError::ProtectionReinsertFailed { status, .. } => status.into(),
            ProvisioningError::CertificateImportFailed { .. } => {
                RetrieveError::Store(StoreStatus::Decode)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ProvisioningError::StoreUnavailable {
            class: ItemClass::Certificate,
            status: StoreStatus::Param,
        };
        assert!(err.to_string().contains("purging certificate items"));

        let err = ProvisioningError::ProtectionReinsertFailed {
            item: ProtectedItem::PrivateKey,
            status: StoreStatus::DuplicateItem,
        };
        assert!(err.to_string().contains("protected private key"));
    }

    #[test]
    fn test_error_kind() {
        let err = ProvisioningError::IdentityNotFound {
            tag: "tag".to_string(),
        };
        assert_eq!(err.kind(), ErrorKind::IdentityNotFound);

        let err = ProvisioningError::KeyGenerationFailed {
            status: StoreStatus::Param,
        };
        assert_eq!(err.kind(), ErrorKind::KeyGenerationFailed);
    }

    #[test]
    fn test_certificate_error_conversion() {
        let err: ProvisioningError = CertificateError::Empty.into();
        assert_eq!(err.kind(), ErrorKind::CertificateImportFailed);
        assert!(err.to_string().contains("empty"));
    }

    #[test]
    fn test_presence_status_becomes_denied() {
        assert_eq!(
            RetrieveError::from(StoreStatus::UserCanceled),
            RetrieveError::PresenceDenied {
                status: StoreStatus::UserCanceled
            }
        );
        assert_eq!(
            RetrieveError::from(StoreStatus::ItemNotFound),
            RetrieveError::Store(StoreStatus::ItemNotFound)
        );
    }

    #[test]
    fn test_result_type_alias() {
        let result: ProvisioningResult<i32> = Ok(42);
        assert_eq!(result.unwrap(), 42);
    }
}
