//! Error types for cryptographic operations

use thiserror::Error;

/// Cryptographic operation errors
///
/// Every variant is a key-material failure. A signature that merely fails to
/// verify is not an error; [`verify_signature`](crate::verify_signature)
/// reports that as [`Verification::Invalid`](crate::Verification::Invalid).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CryptoError {
    /// Raw public key encoding has the wrong length
    #[error("Invalid public key length: expected {expected}, got {actual}")]
    InvalidKeyLength { expected: usize, actual: usize },

    /// Raw public key encoding does not start with the uncompressed point marker
    #[error("Invalid point marker: expected 0x04, got 0x{0:02x}")]
    InvalidPointMarker(u8),

    /// Coordinates do not describe a point on curve P-256
    #[error("Public key point is not on curve P-256")]
    PointNotOnCurve,

    /// X.509 certificate (DER or PEM) could not be parsed
    #[error("Invalid certificate: {0}")]
    InvalidCertificate(String),

    /// SubjectPublicKeyInfo is not a valid EC P-256 key
    #[error("Invalid subject public key info: {0}")]
    InvalidKeyInfo(String),
}

/// Result type for cryptographic operations
pub type Result<T> = core::result::Result<T, CryptoError>;
