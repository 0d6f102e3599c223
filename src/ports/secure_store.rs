//! SecureStore trait - primitive operations of the platform credential store

use crate::model::{
    AccessControl, AccessPolicy, CertificateRef, IdentityRef, ItemRef, KeyPairSpec, KeyRef,
    NewItem, Query, StoreResult,
};

/// Opaque key/certificate/identity repository addressed by query predicates
///
/// Every call is synchronous and point-in-time. Implementations may block
/// (hardware key generation, presence prompts).
pub trait SecureStore {
    /// Delete every item matching `query`
    ///
    /// # Returns
    ///
    /// The number of items deleted
    ///
    /// # Errors
    ///
    /// Returns `StoreStatus::ItemNotFound` if nothing matched.
    fn delete_matching(&mut self, query: &Query) -> StoreResult<usize>;

    /// Add a key or certificate
    ///
    /// # Errors
    ///
    /// Returns errors if:
    /// - An item with the same primary attributes exists (`DuplicateItem`)
    /// - The access control cannot be honored on this device (`AuthFailed`)
    fn add(&mut self, item: NewItem) -> StoreResult<()>;

    /// Return the first item matching `query`
    ///
    /// Querying never prompts for presence; only using a protected key does.
    fn copy_matching(&mut self, query: &Query) -> StoreResult<ItemRef>;

    /// Generate a persistent key pair
    ///
    /// # Returns
    ///
    /// `(public, private)` handles
    fn generate_key_pair(&mut self, spec: &KeyPairSpec) -> StoreResult<(KeyRef, KeyRef)>;

    /// Decode a DER certificate into a handle without storing it
    ///
    /// # Errors
    ///
    /// Returns `StoreStatus::Decode` for malformed input.
    fn create_certificate(&self, der: &[u8]) -> StoreResult<CertificateRef>;

    /// Split an identity into its certificate and private key
    fn copy_identity_parts(&self, identity: &IdentityRef) -> StoreResult<(CertificateRef, KeyRef)>;

    /// Build the platform access-control descriptor for `policy`
    fn create_access_control(&self, policy: &AccessPolicy) -> StoreResult<AccessControl>;
}

impl<T: SecureStore + ?Sized> SecureStore for &mut T {
    fn delete_matching(&mut self, query: &Query) -> StoreResult<usize> {
        (**self).delete_matching(query)
    }

    fn add(&mut self, item: NewItem) -> StoreResult<()> {
        (**self).add(item)
    }

    fn copy_matching(&mut self, query: &Query) -> StoreResult<ItemRef> {
        (**self).copy_matching(query)
    }

    fn generate_key_pair(&mut self, spec: &KeyPairSpec) -> StoreResult<(KeyRef, KeyRef)> {
        (**self).generate_key_pair(spec)
    }

    fn create_certificate(&self, der: &[u8]) -> StoreResult<CertificateRef> {
        (**self).create_certificate(der)
    }

    fn copy_identity_parts(&self, identity: &IdentityRef) -> StoreResult<(CertificateRef, KeyRef)> {
        (**self).copy_identity_parts(identity)
    }

    fn create_access_control(&self, policy: &AccessPolicy) -> StoreResult<AccessControl> {
        (**self).create_access_control(policy)
    }
}
