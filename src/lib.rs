//! Identity provisioning for secure credential stores
//!
//! Generates an RSA key pair inside a [`ports::SecureStore`], binds an
//! externally issued certificate to it and places the resulting identity
//! behind a user-presence access control, either at creation time or by
//! re-inserting protected copies afterwards (see [`Variant`]).

pub mod adapters;
pub mod api;
pub mod config;
pub mod error;
pub mod gateway;
pub mod model;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::ProvisioningConfig;
pub use error::{ErrorKind, ProtectedItem, ProvisioningError, ProvisioningResult, RetrieveError};
pub use model::Variant;
pub use use_cases::{Provisioner, ProvisioningState};

// Re-export public API
pub use api::{provision, provision_with_config, purge_store, retrieve_identity, sign_with_identity};
