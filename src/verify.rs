//! ECDSA P-256 signature verification with SHA-256
//!
//! U2F signs registration and authentication payloads with the "SHA-256
//! with ECDSA" scheme over P-256: the message is hashed with SHA-256 and
//! the digest signed with the device key or the attestation key.
//! Signatures travel DER-encoded (a SEQUENCE of the two INTEGERs r and s).
//!
//! Raw message formats:
//! <https://fidoalliance.org/specs/fido-u2f-v1.2-ps-20170411/fido-u2f-raw-message-formats-v1.2-ps-20170411.html>

use p256::ecdsa::signature::Verifier;
use p256::ecdsa::Signature;

use crate::error::Result;
use crate::key::KeyMaterial;

/// Outcome of a signature check
///
/// `Invalid` means the key material was usable and the signature did not
/// verify. Key material that cannot be decoded is a
/// [`CryptoError`](crate::CryptoError) instead, so a caller can always tell
/// a forged signature from a corrupt key encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verification {
    /// The signature is cryptographically valid for the key and message
    Valid,
    /// The signature does not verify for the key and message
    Invalid,
}

impl Verification {
    /// True for [`Verification::Valid`]
    pub fn is_valid(self) -> bool {
        matches!(self, Verification::Valid)
    }
}

/// Verify an ECDSA P-256 signature over a message
///
/// `message` is the raw signed payload; it is hashed with SHA-256 internally,
/// never pre-hashed by the caller. `signature` is DER-encoded. The key may be
/// supplied in any [`KeyMaterial`] representation; all of them resolve to the
/// same decoded key before the check runs.
///
/// Returns `Ok(Verification::Invalid)` for any signature that fails to
/// verify, including byte sequences that are not well-formed DER. The error
/// channel is reserved for key material that cannot be decoded.
///
/// # Examples
///
/// ```
/// use p256::ecdsa::{signature::Signer, Signature, SigningKey};
/// use rand::rngs::OsRng;
/// use u2f_server_crypto::{verify_signature, KeyMaterial, Verification};
///
/// let signing_key = SigningKey::random(&mut OsRng);
/// let public_key = signing_key.verifying_key().to_encoded_point(false);
///
/// let message = b"counter and challenge bytes";
/// let signature: Signature = signing_key.sign(message);
/// let der = signature.to_der();
///
/// let outcome =
///     verify_signature(KeyMaterial::Raw(public_key.as_bytes()), message, der.as_bytes())
///         .unwrap();
/// assert_eq!(outcome, Verification::Valid);
/// ```
pub fn verify_signature(
    key: KeyMaterial<'_>,
    message: &[u8],
    signature: &[u8],
) -> Result<Verification> {
    // Resolve the key first; its failures are the hard-error channel.
    let public_key = key.resolve()?;

    // A signature that does not parse as DER cannot verify. Same outcome as
    // one that parses and fails the check.
    let signature = match Signature::from_der(signature) {
        Ok(sig) => sig,
        Err(_) => return Ok(Verification::Invalid),
    };

    match public_key.verifying_key().verify(message, &signature) {
        Ok(()) => Ok(Verification::Valid),
        Err(_) => Ok(Verification::Invalid),
    }
}
