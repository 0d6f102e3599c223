use super::{AccessControl, ApplicationLabel, ApplicationTag, KeyType};
use crate::config::ProvisioningConfig;

/// Parameters for generating a key pair inside the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPairSpec {
    pub key_type: KeyType,
    pub bits: u32,
    pub public_tag: ApplicationTag,
    pub private_tag: ApplicationTag,
    /// Shared by both halves; certificates bind to it
    pub label: ApplicationLabel,
    /// Applied to the private half only
    pub access_control: Option<AccessControl>,
}

impl KeyPairSpec {
    pub fn from_config(config: &ProvisioningConfig) -> Self {
        Self {
            key_type: config.key_type,
            bits: config.key_size_bits,
            public_tag: config.public_tag.clone(),
            private_tag: config.private_tag.clone(),
            label: config.private_label.clone(),
            access_control: None,
        }
    }

    pub fn with_access_control(mut self, access_control: Option<AccessControl>) -> Self {
        self.access_control = access_control;
        self
    }
}
