// SPDX-License-Identifier: CC0-1.0

//! Extended key serialization.
//!
//! The binary layout is 78 bytes, all integers big-endian:
//!
//! | offset | size | field              |
//! |--------|------|--------------------|
//! | 0      | 4    | version            |
//! | 4      | 1    | depth              |
//! | 5      | 4    | parent fingerprint |
//! | 9      | 4    | child number       |
//! | 13     | 32   | chain code         |
//! | 45     | 33   | key data           |
//!
//! Key data is `0x00` followed by the secret key for private keys, and the
//! compressed public key otherwise. The text form is Base58Check.

use core::fmt;
use core::str::FromStr;

use secp256k1::SecretKey;
use tracing::debug;

use crate::error::{Error, FormatError};
use crate::index::ChildKeyIndex;
use crate::network::{KeyKind, Network};
use crate::node::{ChainCode, DerivationNode, Fingerprint, KeyMaterial};

/// Length of a binary extended key.
pub const ENCODED_LEN: usize = 78;

impl DerivationNode {
    /// Extended key binary encoding according to BIP 32.
    ///
    /// The node does not know its parent, so the caller supplies the parent's
    /// fingerprint; use the default (zero) fingerprint for a master key.
    pub fn encode(&self, parent_fingerprint: Fingerprint) -> [u8; ENCODED_LEN] {
        let kind = if self.is_private() { KeyKind::Private } else { KeyKind::Public };
        let mut ret = [0; ENCODED_LEN];
        ret[0..4].copy_from_slice(&self.network().version(kind));
        ret[4] = self.depth();
        ret[5..9].copy_from_slice(&parent_fingerprint[..]);
        ret[9..13].copy_from_slice(&u32::from(self.index()).to_be_bytes());
        ret[13..45].copy_from_slice(&self.chain_code()[..]);
        match self.key_material() {
            KeyMaterial::Private { secret, .. } => {
                ret[45] = 0;
                ret[46..78].copy_from_slice(&secret.secret_bytes());
            }
            KeyMaterial::Public { public } => ret[45..78].copy_from_slice(&public.serialize()),
        }
        ret
    }

    /// Decodes a binary extended key, dropping the parent fingerprint.
    ///
    /// See [`ExtendedKey::decode`] for the checks performed.
    pub fn decode(data: &[u8], expected: Option<Network>) -> Result<DerivationNode, Error> {
        ExtendedKey::decode(data, expected).map(|xkey| xkey.node)
    }

    /// Encodes the node as Base58Check text.
    pub fn to_text(&self, parent_fingerprint: Fingerprint) -> String {
        base58::encode_check(&self.encode(parent_fingerprint))
    }

    /// Decodes Base58Check text, dropping the parent fingerprint.
    pub fn from_text(text: &str, expected: Option<Network>) -> Result<DerivationNode, Error> {
        ExtendedKey::from_text(text, expected).map(|xkey| xkey.node)
    }
}

/// A serialized extended key: a node plus the fingerprint of its parent.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct ExtendedKey {
    /// Fingerprint of the parent key (0 for master)
    pub parent_fingerprint: Fingerprint,
    /// The key itself.
    pub node: DerivationNode,
}

#[cfg(feature = "serde")]
serde_string_impl!(ExtendedKey, "a BIP-32 extended key");

impl ExtendedKey {
    /// Wraps a node that has no parent.
    pub fn master(node: DerivationNode) -> ExtendedKey {
        ExtendedKey { parent_fingerprint: Fingerprint::default(), node }
    }

    /// Constructs a new master key from a seed value.
    pub fn from_seed(seed: &[u8], network: Network) -> Result<ExtendedKey, Error> {
        DerivationNode::from_seed(seed, network).map(ExtendedKey::master)
    }

    /// Derives the child at `index`, recording this key's fingerprint as its parent.
    pub fn derive<I: Into<ChildKeyIndex>>(&self, index: I) -> Result<ExtendedKey, Error> {
        Ok(ExtendedKey {
            parent_fingerprint: self.node.fingerprint(),
            node: self.node.derive(index)?,
        })
    }

    /// Derives the key at `path` below this one.
    ///
    /// An empty path returns this key unchanged.
    pub fn derive_path<P: AsRef<[ChildKeyIndex]>>(&self, path: P) -> Result<ExtendedKey, Error> {
        path.as_ref().iter().try_fold(*self, |xkey, &index| xkey.derive(index))
    }

    /// Returns a copy of this key without the private key.
    pub fn neutered(&self) -> ExtendedKey {
        ExtendedKey { parent_fingerprint: self.parent_fingerprint, node: self.node.neutered() }
    }

    /// Extended key binary encoding according to BIP 32.
    pub fn encode(&self) -> [u8; ENCODED_LEN] { self.node.encode(self.parent_fingerprint) }

    /// Decodes a binary extended key according to BIP 32.
    ///
    /// With `expected` set, the version bytes must be one of that network's
    /// two versions; otherwise they must belong to exactly one known network.
    /// Key data must agree with the version, hold a valid secret key or a
    /// valid compressed point, and a depth zero key must have neither a parent
    /// fingerprint nor a child number.
    pub fn decode(data: &[u8], expected: Option<Network>) -> Result<ExtendedKey, Error> {
        if data.len() != ENCODED_LEN {
            return Err(FormatError::PayloadLength(data.len()).into());
        }

        let mut version = [0u8; 4];
        version.copy_from_slice(&data[0..4]);
        let (network, kind) = match expected {
            Some(network) => match network.kind_of(version) {
                Some(kind) => (network, kind),
                None => return Err(Error::NetworkMismatch { expected: network, version }),
            },
            None => Network::from_version(version).ok_or(Error::UnknownNetworkVersion(version))?,
        };

        let depth = data[4];
        let mut parent_fingerprint = [0u8; 4];
        parent_fingerprint.copy_from_slice(&data[5..9]);
        let parent_fingerprint = Fingerprint::from(parent_fingerprint);
        let mut index = [0u8; 4];
        index.copy_from_slice(&data[9..13]);
        let index = u32::from_be_bytes(index);
        let chain_code = ChainCode::from_slice(&data[13..45])?;

        let key = match kind {
            KeyKind::Private if data[45] == 0 => SecretKey::from_slice(&data[46..78])
                .map(KeyMaterial::from_secret)
                .map_err(FormatError::PrivateKey)?,
            KeyKind::Public if data[45] != 0 => secp256k1::PublicKey::from_slice(&data[45..78])
                .map(|public| KeyMaterial::Public { public })
                .map_err(FormatError::PublicKey)?,
            KeyKind::Private | KeyKind::Public => return Err(FormatError::KeyKindMismatch.into()),
        };

        if depth == 0 {
            if parent_fingerprint != Fingerprint::default() {
                return Err(FormatError::ZeroDepthParentFingerprint(parent_fingerprint).into());
            }
            if index != 0 {
                return Err(FormatError::ZeroDepthChildIndex(index).into());
            }
        }

        Ok(ExtendedKey {
            parent_fingerprint,
            node: DerivationNode::at(key, chain_code, depth, ChildKeyIndex::from(index), network),
        })
    }

    /// Decodes Base58Check text.
    pub fn from_text(text: &str, expected: Option<Network>) -> Result<ExtendedKey, Error> {
        decode_check(text)
            .and_then(|data| ExtendedKey::decode(&data, expected))
            .inspect_err(|e| debug!(error = %e, "rejected extended key"))
    }
}

/// Base58 decodes `text` and verifies and strips the trailing checksum.
fn decode_check(text: &str) -> Result<Vec<u8>, Error> {
    base58::decode_check(text).map_err(|e| match e {
        base58::Error::IncorrectChecksum(_) => Error::InvalidChecksum,
        base58::Error::TooShort(ref short) =>
            FormatError::PayloadLength(short.invalid_base58_length()).into(),
        e => FormatError::Base58(e).into(),
    })
}

impl fmt::Display for ExtendedKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        base58::encode_check_to_fmt(f, &self.encode()[..])
    }
}

impl FromStr for ExtendedKey {
    type Err = Error;

    fn from_str(inp: &str) -> Result<ExtendedKey, Error> { ExtendedKey::from_text(inp, None) }
}
