//! X.509 attestation certificate handling
//!
//! Only the certificate's SubjectPublicKeyInfo is consulted here. Chain
//! building, trust stores, validity periods, and revocation are the calling
//! workflow's concern.

use p256::ecdsa::VerifyingKey;
use p256::pkcs8::DecodePublicKey;

use crate::error::{CryptoError, Result};

/// Armor prefix that marks a PEM certificate
const PEM_PREFIX: &[u8] = b"-----BEGIN";

/// Extract the P-256 public key embedded in an X.509 certificate.
///
/// Accepts DER directly, or PEM which is unwrapped first. The certificate's
/// key must be EC on P-256; any other algorithm is rejected.
pub(crate) fn public_key_from_certificate(bytes: &[u8]) -> Result<VerifyingKey> {
    if bytes.starts_with(PEM_PREFIX) {
        let (_, pem) = x509_parser::pem::parse_x509_pem(bytes)
            .map_err(|e| CryptoError::InvalidCertificate(e.to_string()))?;
        return public_key_from_der(&pem.contents);
    }
    public_key_from_der(bytes)
}

fn public_key_from_der(der: &[u8]) -> Result<VerifyingKey> {
    let (_, certificate) = x509_parser::parse_x509_certificate(der)
        .map_err(|e| CryptoError::InvalidCertificate(e.to_string()))?;
    public_key_from_spki(certificate.tbs_certificate.subject_pki.raw)
}

/// Import a DER SubjectPublicKeyInfo as a P-256 verifying key.
///
/// The import checks the algorithm identifier, so a structurally valid SPKI
/// carrying an RSA or non-P-256 EC key fails here.
pub(crate) fn public_key_from_spki(spki: &[u8]) -> Result<VerifyingKey> {
    let public_key = p256::PublicKey::from_public_key_der(spki)
        .map_err(|e| CryptoError::InvalidKeyInfo(e.to_string()))?;
    Ok(VerifyingKey::from(public_key))
}
