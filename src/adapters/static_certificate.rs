//! Certificate source returning a fixed certificate

use tracing::debug;

use crate::model::{CertificateBlob, CertificateError, KeyRef};
use crate::ports::CertificateSource;

/// Sample X.509 certificate, base64 DER
pub const SAMPLE_CERTIFICATE_BASE64: &str = "\
MIICVjCCAb8CAg37MA0GCSqGSIb3DQEBBQUAMIGbMQswCQYDVQQGEwJKUDEOMAwG\
A1UECBMFVG9reW8xEDAOBgNVBAcTB0NodW8ta3UxETAPBgNVBAoTCEZyYW5rNERE\
MRgwFgYDVQQLEw9XZWJDZXJ0IFN1cHBvcnQxGDAWBgNVBAMTD0ZyYW5rNEREIFdl\
YiBDQTEjMCEGCSqGSIb3DQEJARYUc3VwcG9ydEBmcmFuazRkZC5jb20wHhcNMTIw\
ODIyMDUyNzIzWhcNMTcwODIxMDUyNzIzWjBKMQswCQYDVQQGEwJKUDEOMAwGA1UE\
CAwFVG9reW8xETAPBgNVBAoMCEZyYW5rNEREMRgwFgYDVQQDDA93d3cuZXhhbXBs\
ZS5jb20wgZ8wDQYJKoZIhvcNAQEBBQADgY0AMIGJAoGBAMYBBrx5PlP0WNI/ZdzD\
+6Pktmurn+F2kQYbtc7XQh8/LTBvCo+P6iZoLEmUA9e7EXLRxgU1CVqeAi7QcAn9\
MwBlc8ksFJHB0rtf9pmf8Oza9E0Bynlq/4/Kb1x+d+AyhL7oK9tQwB24uHOueHi1\
C/iVv8CSWKiYe6hzN1txYe8rAgMBAAEwDQYJKoZIhvcNAQEFBQADgYEAASPdjigJ\
kXCqKWpnZ/Oc75EUcMi6HztaW8abUMlYXPIgkV2F7YanHOB7K4f7OOLjiz8DTPFf\
jC9UeuErhaA/zzWi8ewMTFZW/WshOrm3fNvcMrMLKtH534JKvcdMg6qIdjTFINIr\
evnAhf0cwULaebn+lMs8Pdl7y37+sfluVok=";

/// Certificate source that hands out the same certificate for every key
///
/// Stands in for a CSR exchange with an issuer. The certificate is not
/// checked against the key; binding happens through the application label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StaticCertificate {
    /// Base64 text decoded on every issue
    Encoded(&'static str),
    Blob(CertificateBlob),
}

impl StaticCertificate {
    pub fn new(blob: CertificateBlob) -> Self {
        Self::Blob(blob)
    }
}

impl Default for StaticCertificate {
    fn default() -> Self {
        Self::Encoded(SAMPLE_CERTIFICATE_BASE64)
    }
}

impl CertificateSource for StaticCertificate {
    fn issue(&mut self, public_key: &KeyRef) -> Result<CertificateBlob, CertificateError> {
        let blob = match self {
            StaticCertificate::Encoded(text) => CertificateBlob::from_base64(text)?,
            StaticCertificate::Blob(blob) => blob.clone(),
        };
        debug!(
            public_key = %public_key.fingerprint(),
            certificate = %blob.fingerprint(),
            "Issued static certificate"
        );
        Ok(blob)
    }
}
