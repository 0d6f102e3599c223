//! Provisioning configuration
//!
//! Names every attribute the provisioning flow writes into the store. The
//! defaults match the identifiers used by existing installs, so changing
//! them orphans previously provisioned identities.

use crate::model::{ApplicationLabel, ApplicationTag, KeyType};

pub const DEFAULT_PRIVATE_LABEL: &str = "com.example.keys.privateKey.kSecAttrApplicationLabel";
pub const DEFAULT_PRIVATE_TAG: &str = "com.example.keys.privateKey.kSecAttrApplicationTag";
pub const DEFAULT_PUBLIC_TAG: &str = "com.example.keys.publicKey.kSecAttrApplicationTag";
pub const DEFAULT_CERTIFICATE_LABEL: &str = "com.example.keys.mycert";
pub const DEFAULT_KEY_SIZE_BITS: u32 = 2048;

/// Attributes used for one identity namespace
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvisioningConfig {
    /// Application label of the key pair, also the public-key hash the
    /// certificate is imported with
    pub private_label: ApplicationLabel,
    /// Application tag of the private key; identities are looked up by it
    pub private_tag: ApplicationTag,
    /// Application tag of the public key, used to delete the residue
    pub public_tag: ApplicationTag,
    /// Friendly label of the imported certificate
    pub certificate_label: String,
    pub key_type: KeyType,
    pub key_size_bits: u32,
}

impl Default for ProvisioningConfig {
    fn default() -> Self {
        Self {
            private_label: ApplicationLabel::from(DEFAULT_PRIVATE_LABEL),
            private_tag: ApplicationTag::from(DEFAULT_PRIVATE_TAG),
            public_tag: ApplicationTag::from(DEFAULT_PUBLIC_TAG),
            certificate_label: DEFAULT_CERTIFICATE_LABEL.to_string(),
            key_type: KeyType::default_identity(),
            key_size_bits: DEFAULT_KEY_SIZE_BITS,
        }
    }
}
