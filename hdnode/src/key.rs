// SPDX-License-Identifier: CC0-1.0

//! secp256k1 keys tagged with their point encoding.
//!
//! The curve library always stores keys the same way; whether a key is meant
//! to be used with compressed or uncompressed public keys is extra information
//! carried next to it. Extended keys can only hold compressed keys, so node
//! constructors inspect this flag.

use core::fmt;

use secp256k1::SECP256K1;

/// A secret key together with the encoding of its public key.
#[derive(Copy, Clone, PartialEq, Eq)]
pub struct PrivateKey {
    /// Whether this private key should be serialized as compressed.
    pub compressed: bool,
    /// The actual secp256k1 key.
    pub inner: secp256k1::SecretKey,
}

impl PrivateKey {
    /// Constructs a compressed private key.
    pub fn new(key: secp256k1::SecretKey) -> PrivateKey {
        PrivateKey { compressed: true, inner: key }
    }

    /// Constructs an uncompressed private key.
    pub fn new_uncompressed(key: secp256k1::SecretKey) -> PrivateKey {
        PrivateKey { compressed: false, inner: key }
    }

    /// Parses a compressed private key from 32 big-endian bytes.
    pub fn from_slice(data: &[u8]) -> Result<PrivateKey, secp256k1::Error> {
        Ok(PrivateKey::new(secp256k1::SecretKey::from_slice(data)?))
    }

    /// Computes the public key, keeping the encoding of this key.
    pub fn public_key(&self) -> PublicKey {
        PublicKey {
            compressed: self.compressed,
            inner: secp256k1::PublicKey::from_secret_key(SECP256K1, &self.inner),
        }
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("PrivateKey")
            .field("compressed", &self.compressed)
            .field("inner", &"[SecretKey]")
            .finish()
    }
}

/// A public key together with its encoding.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct PublicKey {
    /// Whether this public key should be serialized as compressed.
    pub compressed: bool,
    /// The actual secp256k1 key.
    pub inner: secp256k1::PublicKey,
}

impl PublicKey {
    /// Constructs a compressed public key.
    pub fn new(key: secp256k1::PublicKey) -> PublicKey {
        PublicKey { compressed: true, inner: key }
    }

    /// Constructs an uncompressed public key.
    pub fn new_uncompressed(key: secp256k1::PublicKey) -> PublicKey {
        PublicKey { compressed: false, inner: key }
    }

    /// Parses a 33-byte compressed or 65-byte uncompressed public key.
    ///
    /// The encoding of the input is remembered.
    pub fn from_slice(data: &[u8]) -> Result<PublicKey, secp256k1::Error> {
        let compressed = data.len() == secp256k1::constants::PUBLIC_KEY_SIZE;
        Ok(PublicKey { compressed, inner: secp256k1::PublicKey::from_slice(data)? })
    }

    /// Serializes the key using its own encoding.
    pub fn to_bytes(self) -> Vec<u8> {
        if self.compressed {
            self.inner.serialize().to_vec()
        } else {
            self.inner.serialize_uncompressed().to_vec()
        }
    }
}
