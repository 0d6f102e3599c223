//! Typed wrapper over the secure store
//!
//! Each operation issues the query the provisioning flow needs and turns the
//! store status into the matching [`ProvisioningError`].

use tracing::{debug, info};

use crate::error::{ProtectedItem, ProvisioningError, ProvisioningResult};
use crate::model::{
    AccessControl, ApplicationLabel, ApplicationTag, CertificateBlob, CertificateRef, IdentityRef,
    ItemClass, KeyPairSpec, KeyRef, KeyType, NewItem, Query, StoreStatus,
};
use crate::ports::SecureStore;

fn log_failure(operation: &str, status: StoreStatus) {
    debug!(code = status.code(), "{} failed: {}", operation, status);
}

/// Outcome of purging one item class
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Purge {
    Deleted(usize),
    NothingToDelete,
}

pub struct StoreGateway<'a, S: SecureStore> {
    store: &'a mut S,
}

impl<'a, S: SecureStore> StoreGateway<'a, S> {
    pub fn new(store: &'a mut S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        self.store
    }

    /// Delete every item of `class`
    ///
    /// An empty class is not an error.
    pub fn delete_all(&mut self, class: ItemClass) -> ProvisioningResult<Purge> {
        match self.store.delete_matching(&Query::class(class)) {
            Ok(deleted) => Ok(Purge::Deleted(deleted)),
            Err(StoreStatus::ItemNotFound) => Ok(Purge::NothingToDelete),
            Err(status) => {
                log_failure("Purge", status);
                Err(ProvisioningError::StoreUnavailable { class, status })
            }
        }
    }

    pub fn generate_key_pair(&mut self, spec: &KeyPairSpec) -> ProvisioningResult<(KeyRef, KeyRef)> {
        debug!(
            "Generating {:?}-{} key pair, private tag {}",
            spec.key_type, spec.bits, spec.private_tag
        );
        self.store.generate_key_pair(spec).map_err(|status| {
            log_failure("Key generation", status);
            ProvisioningError::KeyGenerationFailed { status }
        })
    }

    /// Delete the key carrying `tag`
    pub fn delete_key(&mut self, tag: &ApplicationTag, key_type: KeyType) -> ProvisioningResult<()> {
        let query = Query::class(ItemClass::Key)
            .key_type(key_type)
            .application_tag(tag);
        let deleted = self
            .store
            .delete_matching(&query)
            .map_err(|status| {
                log_failure("Residue cleanup", status);
                ProvisioningError::ResidueCleanupFailed { status }
            })?;
        debug!("Deleted {} key(s) tagged {}", deleted, tag);
        Ok(())
    }

    /// Decode `blob` and store it bound to the key labelled `public_key_hash`
    pub fn import_certificate(
        &mut self,
        blob: &CertificateBlob,
        public_key_hash: &ApplicationLabel,
        label: &str,
    ) -> ProvisioningResult<CertificateRef> {
        let certificate = self.store.create_certificate(blob.as_bytes()).map_err(|status| {
            log_failure("Certificate decoding", status);
            ProvisioningError::CertificateImportFailed {
                reason: format!("certificate could not be decoded: {}", status),
            }
        })?;

        self.store
            .add(
                NewItem::certificate(certificate.clone())
                    .public_key_hash(public_key_hash)
                    .label(label),
            )
            .map_err(|status| {
                log_failure("Certificate import", status);
                ProvisioningError::CertificateImportFailed {
                    reason: format!("store rejected certificate: {}", status),
                }
            })?;

        info!("Certificate {:?} imported as {}", certificate, label);
        Ok(certificate)
    }

    pub fn query_identity(&mut self, tag: &ApplicationTag) -> ProvisioningResult<IdentityRef> {
        let not_found = || ProvisioningError::IdentityNotFound {
            tag: tag.to_string(),
        };
        let item = self
            .store
            .copy_matching(&Query::class(ItemClass::Identity).application_tag(tag))
            .map_err(|status| {
                log_failure("Identity query", status);
                not_found()
            })?;
        item.into_identity().ok_or_else(not_found)
    }

    pub fn copy_identity_parts(
        &self,
        identity: &IdentityRef,
        tag: &ApplicationTag,
    ) -> ProvisioningResult<(CertificateRef, KeyRef)> {
        self.store.copy_identity_parts(identity).map_err(|status| {
            log_failure("Identity split", status);
            ProvisioningError::IdentityNotFound {
                tag: tag.to_string(),
            }
        })
    }

    pub fn add_protected_certificate(
        &mut self,
        certificate: CertificateRef,
        access_control: &AccessControl,
        public_key_hash: &ApplicationLabel,
        label: &str,
    ) -> ProvisioningResult<()> {
        self.store
            .add(
                NewItem::certificate(certificate)
                    .access_control(access_control)
                    .public_key_hash(public_key_hash)
                    .label(label),
            )
            .map_err(|status| {
                log_failure("Protected certificate insert", status);
                ProvisioningError::ProtectionReinsertFailed {
                    item: ProtectedItem::Certificate,
                    status,
                }
            })
    }

    pub fn add_protected_key(
        &mut self,
        private_key: KeyRef,
        access_control: &AccessControl,
        application_label: &ApplicationLabel,
        tag: &ApplicationTag,
    ) -> ProvisioningResult<()> {
        self.store
            .add(
                NewItem::key(private_key)
                    .access_control(access_control)
                    .application_label(application_label)
                    .application_tag(tag),
            )
            .map_err(|status| {
                log_failure("Protected key insert", status);
                ProvisioningError::ProtectionReinsertFailed {
                    item: ProtectedItem::PrivateKey,
                    status,
                }
            })
    }
}
