//! CertificateSource trait - supply of issued certificates

use crate::model::{CertificateBlob, CertificateError, KeyRef};

/// Supplier of the certificate bound to a freshly generated key pair
///
/// A production source builds a CSR from `public_key`, sends it to an issuer
/// and returns the signed certificate.
pub trait CertificateSource {
    /// Obtain a certificate for `public_key`
    ///
    /// # Errors
    ///
    /// Returns `CertificateError::Issuance` if no certificate can be issued.
    fn issue(&mut self, public_key: &KeyRef) -> Result<CertificateBlob, CertificateError>;
}
