//! Retrieve identity use case
//!
//! Looks up a provisioned identity by tag and uses its private key. Looking
//! the identity up never prompts; signing with a protected key does.

use tracing::{debug, info};

use crate::error::{ProvisioningResult, RetrieveError};
use crate::gateway::StoreGateway;
use crate::model::{ApplicationTag, IdentityRef};
use crate::ports::{KeySigner, SecureStore};

/// Find the identity whose private key carries `tag`
///
/// # Errors
///
/// Returns [`crate::ProvisioningError::IdentityNotFound`] if no
/// certificate is bound to a private key with that tag.
pub fn retrieve_identity<S>(store: &mut S, tag: &ApplicationTag) -> ProvisioningResult<IdentityRef>
where
    S: SecureStore,
{
    let identity = StoreGateway::new(store).query_identity(tag)?;
    debug!("Retrieved identity {}", tag);
    Ok(identity)
}

/// Sign `data` with the private key of the identity carrying `tag`
///
/// If the key is protected by an access control, the store asks for user
/// presence before signing.
///
/// # Errors
///
/// - [`RetrieveError::IdentityNotFound`] if there is no such identity
/// - [`RetrieveError::PresenceDenied`] if the user declined or could not be
///   asked
/// - [`RetrieveError::Store`] for any other store failure
pub fn sign_with_identity<S>(
    store: &mut S,
    tag: &ApplicationTag,
    data: &[u8],
) -> Result<Vec<u8>, RetrieveError>
where
    S: SecureStore + KeySigner,
{
    let mut gateway = StoreGateway::new(&mut *store);
    let identity = gateway.query_identity(tag)?;
    let (_, private_key) = gateway.copy_identity_parts(&identity, tag)?;

    let signature = store.sign(&private_key, data)?;
    info!("Signed {} bytes with identity {}", data.len(), tag);
    Ok(signature)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{DeclinePresence, MemoryStore, StaticCertificate};
    use crate::config::ProvisioningConfig;
    use crate::error::ProvisioningError;
    use crate::model::{StoreStatus, Variant};
    use crate::use_cases::Provisioner;

    fn provisioned(store: MemoryStore, variant: Variant) -> MemoryStore {
        let mut provisioner =
            Provisioner::new(store, StaticCertificate::default(), ProvisioningConfig::default());
        provisioner.provision(variant).unwrap();
        provisioner.into_store()
    }

    #[test]
    fn test_retrieve_missing_identity() {
        let mut store = MemoryStore::new();
        let err = retrieve_identity(&mut store, &"missing".into()).unwrap_err();
        assert_eq!(
            err,
            ProvisioningError::IdentityNotFound {
                tag: "missing".to_string()
            }
        );
    }

    #[test]
    fn test_retrieve_does_not_prompt() {
        let mut store = provisioned(MemoryStore::new(), Variant::ProtectAtCreation);
        let tag = ProvisioningConfig::default().private_tag;
        retrieve_identity(&mut store, &tag).unwrap();
        assert_eq!(store.presence_prompts(), 0);
    }

    #[test]
    fn test_sign_with_identity() {
        let mut store = provisioned(MemoryStore::new(), Variant::RetrofitProtection);
        let tag = ProvisioningConfig::default().private_tag;

        let first = sign_with_identity(&mut store, &tag, b"challenge").unwrap();
        let second = sign_with_identity(&mut store, &tag, b"challenge").unwrap();
        assert_eq!(first, second);
        assert_ne!(first, sign_with_identity(&mut store, &tag, b"other").unwrap());
        assert_eq!(store.presence_prompts(), 3);
    }

    #[test]
    fn test_sign_presence_declined() {
        let store = MemoryStore::new().with_presence(DeclinePresence);
        let mut store = provisioned(store, Variant::ProtectAtCreation);
        let tag = ProvisioningConfig::default().private_tag;

        let err = sign_with_identity(&mut store, &tag, b"challenge").unwrap_err();
        assert_eq!(
            err,
            RetrieveError::PresenceDenied {
                status: StoreStatus::UserCanceled
            }
        );
    }

    #[test]
    fn test_sign_after_passcode_removed() {
        let mut store = provisioned(MemoryStore::new(), Variant::ProtectAtCreation);
        let tag = ProvisioningConfig::default().private_tag;
        store.remove_passcode();

        let err = sign_with_identity(&mut store, &tag, b"challenge").unwrap_err();
        assert!(matches!(err, RetrieveError::IdentityNotFound { .. }));
    }
}
