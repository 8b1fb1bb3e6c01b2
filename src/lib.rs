//! Cryptographic verification layer for a U2F second-factor server
//!
//! This crate is the server's trust boundary: every registration and
//! authentication decision reduces to the operations here.
//!
//! - **Signature verification**: "SHA-256 with ECDSA" over P-256, with the
//!   key supplied as an attestation certificate, a decoded key, a raw
//!   uncompressed point, or a platform SubjectPublicKeyInfo export
//! - **Public key decoding**: raw 65-byte uncompressed SEC1 points with
//!   on-curve validation
//! - **Digests**: SHA-256 over signing payloads
//!
//! All operations are pure and stateless; call them concurrently from any
//! number of threads. Verification failure is a value
//! ([`Verification::Invalid`]), never an error: the error channel carries
//! only key material that cannot be decoded, so callers can distinguish a
//! forged signature from a corrupt key encoding.
//!
//! U2F raw message formats:
//! <https://fidoalliance.org/specs/fido-u2f-v1.2-ps-20170411/fido-u2f-raw-message-formats-v1.2-ps-20170411.html>
//!
//! # Examples
//!
//! ```
//! use p256::ecdsa::{signature::Signer, Signature, SigningKey};
//! use rand::rngs::OsRng;
//! use u2f_server_crypto::{sha256, verify_signature, KeyMaterial, PublicKey, Verification};
//!
//! // A device key pair, as a registration response would carry it
//! let signing_key = SigningKey::random(&mut OsRng);
//! let raw_key = signing_key.verifying_key().to_encoded_point(false);
//!
//! let payload = sha256(b"client data").as_bytes().to_vec();
//! let signature: Signature = signing_key.sign(&payload);
//! let der = signature.to_der();
//!
//! // Decode once at registration, verify on every authentication
//! let key = PublicKey::decode(raw_key.as_bytes()).unwrap();
//! let outcome = verify_signature(KeyMaterial::Decoded(&key), &payload, der.as_bytes()).unwrap();
//! assert_eq!(outcome, Verification::Valid);
//! ```

mod certificate;
pub mod digest;
pub mod error;
pub mod key;
pub mod verify;

// Re-export commonly used types
pub use digest::{sha256, Digest};
pub use error::{CryptoError, Result};
pub use key::{KeyMaterial, PublicKey};
pub use verify::{verify_signature, Verification};
