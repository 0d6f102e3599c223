//! Certificate blob supplied by the issuer
//!
//! The crate never parses X.509. A blob is an opaque DER encoding that the
//! secure store decodes on import.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use rustls_pki_types::pem::{self, PemObject};
use rustls_pki_types::CertificateDer;
use sha2::{Digest, Sha256};
use std::fmt;
use thiserror::Error;

/// Already-issued certificate, DER encoded
#[derive(Clone, PartialEq, Eq)]
pub struct CertificateBlob(Vec<u8>);

impl CertificateBlob {
    pub fn from_der(der: Vec<u8>) -> Result<Self, CertificateError> {
        if der.is_empty() {
            return Err(CertificateError::Empty);
        }
        Ok(Self(der))
    }

    /// Decode base64 text, skipping any character outside the base64
    /// alphabet (line breaks, indentation)
    pub fn from_base64(text: &str) -> Result<Self, CertificateError> {
        let cleaned: String = text
            .chars()
            .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '/' | '='))
            .collect();
        let der = STANDARD
            .decode(cleaned.as_bytes())
            .map_err(|e| CertificateError::InvalidBase64 {
                reason: e.to_string(),
            })?;
        Self::from_der(der)
    }

    /// Decode the first `CERTIFICATE` block of a PEM document
    pub fn from_pem(text: &str) -> Result<Self, CertificateError> {
        let certificate =
            CertificateDer::from_pem_slice(text.as_bytes()).map_err(|e| match e {
                pem::Error::NoItemsFound => CertificateError::MissingPemArmor,
                other => CertificateError::InvalidPem {
                    reason: other.to_string(),
                },
            })?;
        Self::from_der(certificate.as_ref().to_vec())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// SHA-256 over the DER encoding, hex encoded
    pub fn fingerprint(&self) -> String {
        hex::encode(Sha256::digest(&self.0))
    }
}

impl fmt::Debug for CertificateBlob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CertificateBlob({} bytes)", self.0.len())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CertificateError {
    #[error("Certificate blob is empty")]
    Empty,

    #[error("Certificate is not valid base64: {reason}")]
    InvalidBase64 { reason: String },

    #[error("PEM document has no CERTIFICATE block")]
    MissingPemArmor,

    #[error("Malformed PEM document: {reason}")]
    InvalidPem { reason: String },

    /// The issuer could not produce a certificate for the key
    #[error("Certificate issuance failed: {reason}")]
    Issuance { reason: String },
}
