//! SHA-256 digests over signing payloads
//!
//! U2F signs over digests of the client data and the application identity;
//! this module produces them. Output is always 32 raw bytes; hex or base64
//! framing is a caller concern.

use core::fmt;

use sha2::{Digest as _, Sha256};

/// Number of bytes in a SHA-256 digest
pub const DIGEST_LEN: usize = 32;

/// A SHA-256 digest
///
/// Plain value type over the 32 output bytes. `Display` renders lowercase hex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digest([u8; DIGEST_LEN]);

impl Digest {
    /// Digest bytes
    pub fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.0
    }
}

impl From<[u8; DIGEST_LEN]> for Digest {
    fn from(bytes: [u8; DIGEST_LEN]) -> Self {
        Digest(bytes)
    }
}

impl From<Digest> for [u8; DIGEST_LEN] {
    fn from(digest: Digest) -> Self {
        digest.0
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

/// Compute the SHA-256 digest of a byte buffer
///
/// Deterministic and infallible; identical input always yields an identical
/// 32-byte digest.
///
/// # Examples
///
/// ```
/// use u2f_server_crypto::digest::sha256;
///
/// let digest = sha256(b"challenge");
/// assert_eq!(digest.as_bytes().len(), 32);
/// assert_eq!(digest, sha256(b"challenge"));
/// ```
pub fn sha256(data: &[u8]) -> Digest {
    let mut hasher = Sha256::new();
    hasher.update(data);
    Digest(hasher.finalize().into())
}
