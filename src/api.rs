//! Public entry points
//!
//! Thin wrappers wiring the use cases to the default configuration and the
//! bundled certificate.

use crate::adapters::StaticCertificate;
use crate::config::ProvisioningConfig;
use crate::error::{ProvisioningResult, RetrieveError};
use crate::gateway::{purge_all, StoreGateway};
use crate::ports::{CertificateSource, SecureStore, SecureStoreOps};
use crate::use_cases::{
    retrieve_identity as retrieve_identity_use_case,
    sign_with_identity as sign_with_identity_use_case, Provisioner,
};

pub use crate::model::*;

/// Provision the default identity into `store` with the bundled certificate
pub fn provision<S: SecureStore>(store: &mut S, variant: Variant) -> ProvisioningResult<()> {
    provision_with_config(
        store,
        StaticCertificate::default(),
        ProvisioningConfig::default(),
        variant,
    )
}

pub fn provision_with_config<S, C>(
    store: &mut S,
    source: C,
    config: ProvisioningConfig,
    variant: Variant,
) -> ProvisioningResult<()>
where
    S: SecureStore,
    C: CertificateSource,
{
    Provisioner::new(store, source, config).provision(variant)
}

pub fn retrieve_identity<S: SecureStore>(
    store: &mut S,
    tag: &ApplicationTag,
) -> ProvisioningResult<IdentityRef> {
    retrieve_identity_use_case(store, tag)
}

pub fn sign_with_identity<S: SecureStoreOps>(
    store: &mut S,
    tag: &ApplicationTag,
    data: &[u8],
) -> Result<Vec<u8>, RetrieveError> {
    sign_with_identity_use_case(store, tag, data)
}

/// Delete every key, certificate and identity in `store`
pub fn purge_store<S: SecureStore>(store: &mut S) -> ProvisioningResult<()> {
    purge_all(&mut StoreGateway::new(store))
}
