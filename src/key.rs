//! P-256 public keys and the representations U2F messages carry them in
//!
//! Registration responses carry the user public key as a raw uncompressed
//! SEC1 point (65 bytes: `0x04 || x || y`). Attestation keys arrive inside
//! X.509 certificates, and platform key stores hand keys over as DER
//! SubjectPublicKeyInfo. All of these resolve to the same validated
//! [`PublicKey`] before any signature check runs.

use core::fmt;

use p256::ecdsa::VerifyingKey;

use crate::certificate;
use crate::error::{CryptoError, Result};

/// Length of a raw uncompressed P-256 point encoding: marker byte + X + Y
pub const UNCOMPRESSED_POINT_LEN: usize = 65;

/// SEC1 marker byte for an uncompressed point
pub const UNCOMPRESSED_POINT_MARKER: u8 = 0x04;

/// Length of one coordinate in the raw encoding
pub const COORDINATE_LEN: usize = 32;

/// Key material accepted by [`verify_signature`](crate::verify_signature)
///
/// The four representations a verification call may supply. Each resolves
/// internally to a decoded [`PublicKey`] before the check runs, so the
/// verification logic exists once. Resolution failures are hard errors,
/// distinct from a signature that fails to verify.
#[derive(Debug, Clone, Copy)]
pub enum KeyMaterial<'a> {
    /// X.509 certificate, DER or PEM; verification uses the embedded key
    Certificate(&'a [u8]),
    /// A previously decoded key
    Decoded(&'a PublicKey),
    /// Raw uncompressed SEC1 point (65 bytes), decoded on the fly
    Raw(&'a [u8]),
    /// DER SubjectPublicKeyInfo, as exported by platform key stores
    Spki(&'a [u8]),
}

impl KeyMaterial<'_> {
    /// Resolve to a decoded key
    pub(crate) fn resolve(self) -> Result<PublicKey> {
        match self {
            KeyMaterial::Certificate(bytes) => PublicKey::from_certificate(bytes),
            KeyMaterial::Decoded(key) => Ok(key.clone()),
            KeyMaterial::Raw(bytes) => PublicKey::decode(bytes),
            KeyMaterial::Spki(bytes) => PublicKey::from_spki_der(bytes),
        }
    }
}

/// A validated public key on curve P-256
///
/// Wraps a `p256` verifying key. Every constructor checks that the encoded
/// point lies on the curve, so a value of this type always names a usable
/// verification key.
#[derive(Clone, Debug)]
pub struct PublicKey {
    /// The underlying p256 verifying key
    inner: VerifyingKey,
}

impl PublicKey {
    /// Decode a raw uncompressed point encoding (65 bytes: `0x04 || x || y`)
    ///
    /// This is the key format U2F registration responses carry. The decoded
    /// key is the input point itself; its coordinates survive a round trip
    /// through [`to_uncompressed`](Self::to_uncompressed) unchanged.
    ///
    /// # Errors
    ///
    /// * [`CryptoError::InvalidKeyLength`] if the input is not exactly 65 bytes
    /// * [`CryptoError::InvalidPointMarker`] if the first byte is not `0x04`
    /// * [`CryptoError::PointNotOnCurve`] if the coordinates are out of field
    ///   range or do not satisfy the curve equation
    ///
    /// # Examples
    ///
    /// ```
    /// use u2f_server_crypto::PublicKey;
    ///
    /// // The P-256 generator point in uncompressed form
    /// let raw = hex::decode(
    ///     "046b17d1f2e12c4247f8bce6e563a440f277037d812deb33a0f4a13945d898c296\
    ///      4fe342e2fe1a7f9b8ee7eb4a7c0f9e162bce33576b315ececbb6406837bf51f5",
    /// )
    /// .unwrap();
    ///
    /// let key = PublicKey::decode(&raw).unwrap();
    /// assert_eq!(key.to_uncompressed().to_vec(), raw);
    /// ```
    pub fn decode(raw: &[u8]) -> Result<Self> {
        if raw.len() != UNCOMPRESSED_POINT_LEN {
            return Err(CryptoError::InvalidKeyLength {
                expected: UNCOMPRESSED_POINT_LEN,
                actual: raw.len(),
            });
        }
        if raw[0] != UNCOMPRESSED_POINT_MARKER {
            return Err(CryptoError::InvalidPointMarker(raw[0]));
        }

        // Length and marker are right, so the only remaining failure is
        // coordinates that do not name a point on the curve.
        let inner =
            VerifyingKey::from_sec1_bytes(raw).map_err(|_| CryptoError::PointNotOnCurve)?;

        Ok(PublicKey { inner })
    }

    /// Extract the public key embedded in an X.509 certificate (DER or PEM)
    ///
    /// Only the key is read. Validity periods, signatures, and chains are
    /// not checked here; attestation trust decisions live with the caller.
    ///
    /// # Errors
    ///
    /// * [`CryptoError::InvalidCertificate`] if the certificate cannot be parsed
    /// * [`CryptoError::InvalidKeyInfo`] if the embedded key is not EC P-256
    pub fn from_certificate(bytes: &[u8]) -> Result<Self> {
        let inner = certificate::public_key_from_certificate(bytes)?;
        Ok(PublicKey { inner })
    }

    /// Import a DER SubjectPublicKeyInfo
    ///
    /// The interchange form of keys exported from platform key stores.
    ///
    /// # Errors
    ///
    /// * [`CryptoError::InvalidKeyInfo`] if the bytes are not a valid EC
    ///   P-256 SubjectPublicKeyInfo
    pub fn from_spki_der(bytes: &[u8]) -> Result<Self> {
        let inner = certificate::public_key_from_spki(bytes)?;
        Ok(PublicKey { inner })
    }

    /// Serialize in uncompressed SEC1 format (65 bytes)
    pub fn to_uncompressed(&self) -> [u8; UNCOMPRESSED_POINT_LEN] {
        let point = self.inner.to_encoded_point(false);
        let mut out = [0u8; UNCOMPRESSED_POINT_LEN];
        out.copy_from_slice(point.as_bytes());
        out
    }

    /// X and Y coordinates as 32-byte big-endian arrays
    pub fn coordinates(&self) -> ([u8; COORDINATE_LEN], [u8; COORDINATE_LEN]) {
        let encoded = self.to_uncompressed();
        let mut x = [0u8; COORDINATE_LEN];
        let mut y = [0u8; COORDINATE_LEN];
        x.copy_from_slice(&encoded[1..1 + COORDINATE_LEN]);
        y.copy_from_slice(&encoded[1 + COORDINATE_LEN..]);
        (x, y)
    }

    /// The underlying p256 verifying key
    pub(crate) fn verifying_key(&self) -> &VerifyingKey {
        &self.inner
    }
}

impl PartialEq for PublicKey {
    fn eq(&self, other: &Self) -> bool {
        self.to_uncompressed() == other.to_uncompressed()
    }
}

impl Eq for PublicKey {}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.to_uncompressed() {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}
