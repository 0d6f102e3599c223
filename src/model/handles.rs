//! Handles returned by the secure store
//!
//! A handle owns a copy of the item it refers to, so it stays usable after
//! the backing store record has been deleted. Re-adding a handle re-creates
//! the record.

use sha2::{Digest, Sha256};
use std::fmt;

use super::{KeyClass, KeyType};

/// Handle to one half of a key pair
#[derive(Clone, PartialEq, Eq)]
pub struct KeyRef {
    class: KeyClass,
    key_type: KeyType,
    bits: u32,
    material: Vec<u8>,
}

impl KeyRef {
    pub fn new(class: KeyClass, key_type: KeyType, bits: u32, material: Vec<u8>) -> Self {
        Self {
            class,
            key_type,
            bits,
            material,
        }
    }

    pub fn class(&self) -> KeyClass {
        self.class
    }

    pub fn key_type(&self) -> KeyType {
        self.key_type
    }

    pub fn bits(&self) -> u32 {
        self.bits
    }

    pub fn material(&self) -> &[u8] {
        &self.material
    }

    pub fn is_private(&self) -> bool {
        self.class == KeyClass::Private
    }

    /// SHA-256 over the key material, hex encoded
    pub fn fingerprint(&self) -> String {
        hex::encode(Sha256::digest(&self.material))
    }
}

impl fmt::Debug for KeyRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.class {
            KeyClass::Private => write!(
                f,
                "KeyRef {{ class: Private, {:?}-{}, material: [REDACTED] }}",
                self.key_type, self.bits
            ),
            KeyClass::Public => write!(
                f,
                "KeyRef {{ class: Public, {:?}-{}, material: {} }}",
                self.key_type,
                self.bits,
                hex::encode(&self.material[..self.material.len().min(8)])
            ),
        }
    }
}

/// Handle to a decoded certificate
#[derive(Clone, PartialEq, Eq)]
pub struct CertificateRef {
    der: Vec<u8>,
}

impl CertificateRef {
    pub fn new(der: Vec<u8>) -> Self {
        Self { der }
    }

    pub fn der(&self) -> &[u8] {
        &self.der
    }

    /// SHA-256 over the DER encoding, hex encoded
    pub fn fingerprint(&self) -> String {
        hex::encode(Sha256::digest(&self.der))
    }
}

impl fmt::Debug for CertificateRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CertificateRef({})", &self.fingerprint()[..16])
    }
}

/// Handle to an identity: a certificate paired with its private key
#[derive(Clone, PartialEq, Eq)]
pub struct IdentityRef {
    certificate: CertificateRef,
    private_key: KeyRef,
}

impl IdentityRef {
    pub fn new(certificate: CertificateRef, private_key: KeyRef) -> Self {
        Self {
            certificate,
            private_key,
        }
    }

    /// Borrow the constituent handles
    pub fn parts(&self) -> (&CertificateRef, &KeyRef) {
        (&self.certificate, &self.private_key)
    }
}

impl fmt::Debug for IdentityRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "IdentityRef {{ certificate: {:?}, private_key: {:?} }}",
            self.certificate, self.private_key
        )
    }
}

/// Result of a copy-matching query
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemRef {
    Key(KeyRef),
    Certificate(CertificateRef),
    Identity(IdentityRef),
}

impl ItemRef {
    pub fn into_key(self) -> Option<KeyRef> {
        match self {
            ItemRef::Key(key) => Some(key),
            _ => None,
        }
    }

    pub fn into_identity(self) -> Option<IdentityRef> {
        match self {
            ItemRef::Identity(identity) => Some(identity),
            _ => None,
        }
    }
}
