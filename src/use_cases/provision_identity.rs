//! Provision identity use case
//!
//! Runs the provisioning state machine: purge, generate the key pair, clear
//! the public-key residue, bind the certificate, confirm the identity and,
//! for [`Variant::RetrofitProtection`], swap in protected copies.
//!
//! Any failing step aborts the attempt without rollback. Every attempt
//! starts by purging, so re-running `provision` is the recovery path.

use tracing::{debug, info, warn};

use crate::config::ProvisioningConfig;
use crate::error::{ErrorKind, ProvisioningResult};
use crate::gateway::{build_access_control, purge_all, StoreGateway};
use crate::model::{KeyPairSpec, Variant};
use crate::ports::{CertificateSource, SecureStore};

/// Progress of a provisioning attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProvisioningState {
    Empty,
    KeysGenerated,
    ResidueCleared,
    CertificateBound,
    IdentityFormed,
    Protected,
    Verified,
    Aborted(ErrorKind),
}

fn advance(state: &mut ProvisioningState, next: ProvisioningState) {
    debug!("Provisioning state {:?} -> {:?}", state, next);
    *state = next;
}

/// Provisions one identity namespace in a secure store
///
/// Construction has no side effects; nothing touches the store until
/// [`Provisioner::provision`] is called. Taking `&mut self` keeps attempts
/// on one store strictly sequential.
#[derive(Debug)]
pub struct Provisioner<S, C> {
    store: S,
    source: C,
    config: ProvisioningConfig,
    state: ProvisioningState,
}

impl<S, C> Provisioner<S, C>
where
    S: SecureStore,
    C: CertificateSource,
{
    pub fn new(store: S, source: C, config: ProvisioningConfig) -> Self {
        Self {
            store,
            source,
            config,
            state: ProvisioningState::Empty,
        }
    }

    pub fn state(&self) -> ProvisioningState {
        self.state
    }

    pub fn config(&self) -> &ProvisioningConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Provision the identity, replacing whatever the namespace held
    ///
    /// # Errors
    ///
    /// Returns the first step failure; the state becomes
    /// [`ProvisioningState::Aborted`] and the store keeps whatever the last
    /// successful step left behind.
    ///
    /// # Panics
    ///
    /// Panics if the platform cannot construct an access-control descriptor.
    pub fn provision(&mut self, variant: Variant) -> ProvisioningResult<()> {
        self.state = ProvisioningState::Empty;
        info!("Provisioning identity {} ({:?})", self.config.private_tag, variant);

        let result = self.run(variant);
        match &result {
            Ok(()) => info!("Identity {} provisioned", self.config.private_tag),
            Err(err) => {
                warn!("Provisioning aborted in state {:?}: {}", self.state, err);
                self.state = ProvisioningState::Aborted(err.kind());
            }
        }
        result
    }

    fn run(&mut self, variant: Variant) -> ProvisioningResult<()> {
        let config = &self.config;
        let state = &mut self.state;
        let mut gateway = StoreGateway::new(&mut self.store);

        purge_all(&mut gateway)?;

        let access_control = variant
            .protects_at_creation()
            .then(|| build_access_control(gateway.store()));
        let spec = KeyPairSpec::from_config(config).with_access_control(access_control);
        let (public_key, _) = gateway.generate_key_pair(&spec)?;
        advance(state, ProvisioningState::KeysGenerated);

        let blob = self.source.issue(&public_key)?;

        gateway.delete_key(&config.public_tag, config.key_type)?;
        advance(state, ProvisioningState::ResidueCleared);

        gateway.import_certificate(&blob, &config.private_label, &config.certificate_label)?;
        advance(state, ProvisioningState::CertificateBound);

        let identity = gateway.query_identity(&config.private_tag)?;
        advance(state, ProvisioningState::IdentityFormed);

        if variant == Variant::RetrofitProtection {
            // Split before purging so the handles do not outlive their records
            let (certificate, private_key) =
                gateway.copy_identity_parts(&identity, &config.private_tag)?;

            purge_all(&mut gateway)?;
            advance(state, ProvisioningState::ResidueCleared);

            let access_control = build_access_control(gateway.store());
            gateway.add_protected_certificate(
                certificate,
                &access_control,
                &config.private_label,
                &config.certificate_label,
            )?;
            gateway.add_protected_key(
                private_key,
                &access_control,
                &config.private_label,
                &config.private_tag,
            )?;
            advance(state, ProvisioningState::Protected);

            gateway.query_identity(&config.private_tag)?;
        }

        advance(state, ProvisioningState::Verified);
        Ok(())
    }
}
