//! Ports (traits) for the secure store and its collaborators
//!
//! The provisioning core depends on these abstractions, not on a concrete
//! platform store. Any implementation must honor the same pre- and
//! postconditions; the contract tests in `contract_tests` pin them down.

mod certificate_source;
mod presence;
mod secure_store;
mod signer;

pub use certificate_source::CertificateSource;
pub use presence::PresencePrompt;
pub use secure_store::SecureStore;
pub use signer::KeySigner;

/// Combined trait for a store that can also use the keys it holds
pub trait SecureStoreOps: SecureStore + KeySigner {}

// Blanket implementation for types that implement all operation traits
impl<T> SecureStoreOps for T where T: SecureStore + KeySigner {}
