// SPDX-License-Identifier: CC0-1.0

//! Derivation nodes.
//!
//! A [`DerivationNode`] is one point in a BIP-32 key tree: a key pair, a chain
//! code and its position below the master key. Nodes are immutable; deriving a
//! child or dropping the private key always produces a new node.
//!
//! A node does not remember its parent. Where the serialized form needs the
//! parent's [`Fingerprint`], it is passed in as a plain value (see
//! [`ExtendedKey`](crate::ExtendedKey)).

use core::fmt;

use hashes::{hash160, hash_newtype, sha512, Hash, HashEngine, Hmac, HmacEngine};
use secp256k1::{Scalar, SecretKey, SECP256K1};
use tracing::{debug, trace};

use crate::error::{EntropyBound, Error, SeedEntropyError};
use crate::index::{ChildKeyIndex, HARDENED_FLAG};
use crate::key::{PrivateKey, PublicKey};
use crate::network::Network;

/// HMAC key used to turn a seed into the master key.
const MASTER_KEY_DOMAIN: &[u8] = b"Bitcoin seed";

/// Shortest accepted seed, in bits.
pub const MIN_SEED_BITS: usize = 128;
/// Longest accepted seed, in bits.
pub const MAX_SEED_BITS: usize = 512;

/// A chain code
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ChainCode([u8; 32]);
impl_array_newtype!(ChainCode, 32);
impl_array_newtype_stringify!(ChainCode, 32);

impl ChainCode {
    /// Copies a chain code out of a slice, which must be exactly 32 bytes long.
    pub fn from_slice(data: &[u8]) -> Result<ChainCode, Error> {
        ChainCode::try_from(data).map_err(|_| Error::InvalidChainCodeLength(data.len()))
    }
}

/// A fingerprint
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Fingerprint([u8; 4]);
impl_array_newtype!(Fingerprint, 4);
impl_array_newtype_stringify!(Fingerprint, 4);

hash_newtype! {
    /// Extended key identifier as defined in BIP-32.
    pub struct XKeyIdentifier(hash160::Hash);
}

/// The key pair held by a node.
#[derive(Copy, Clone, PartialEq, Eq)]
pub enum KeyMaterial {
    /// Secret scalar and its public point.
    Private {
        /// The secret key.
        secret: SecretKey,
        /// The public key of `secret`.
        public: secp256k1::PublicKey,
    },
    /// Public point only.
    Public {
        /// The public key.
        public: secp256k1::PublicKey,
    },
}

impl KeyMaterial {
    pub(crate) fn from_secret(secret: SecretKey) -> KeyMaterial {
        let public = secp256k1::PublicKey::from_secret_key(SECP256K1, &secret);
        KeyMaterial::Private { secret, public }
    }

    /// Returns the public key.
    pub fn public_key(&self) -> &secp256k1::PublicKey {
        match self {
            KeyMaterial::Private { public, .. } | KeyMaterial::Public { public } => public,
        }
    }

    /// Returns the secret key, if there is one.
    pub fn private_key(&self) -> Option<&SecretKey> {
        match self {
            KeyMaterial::Private { secret, .. } => Some(secret),
            KeyMaterial::Public { .. } => None,
        }
    }

    /// Returns `true` if this holds a secret key.
    pub fn is_private(&self) -> bool { matches!(self, KeyMaterial::Private { .. }) }
}

impl fmt::Debug for KeyMaterial {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            KeyMaterial::Private { public, .. } => f
                .debug_struct("Private")
                .field("secret", &"[SecretKey]")
                .field("public", public)
                .finish(),
            KeyMaterial::Public { public } =>
                f.debug_struct("Public").field("public", public).finish(),
        }
    }
}

/// One node of a BIP-32 key tree.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct DerivationNode {
    key: KeyMaterial,
    chain_code: ChainCode,
    depth: u8,
    index: ChildKeyIndex,
    network: Network,
}

impl DerivationNode {
    /// Creates a root node holding a private key.
    ///
    /// Fails if the key is not in compressed mode or `chain_code` is not 32 bytes.
    pub fn new_private(
        key: PrivateKey,
        chain_code: &[u8],
        network: Network,
    ) -> Result<DerivationNode, Error> {
        if !key.compressed {
            return Err(Error::CompressionRequired);
        }
        let chain_code = ChainCode::from_slice(chain_code)?;
        Ok(DerivationNode::root(KeyMaterial::from_secret(key.inner), chain_code, network))
    }

    /// Creates a root node holding only a public key.
    ///
    /// Fails if the key is not in compressed mode or `chain_code` is not 32 bytes.
    pub fn new_public(
        key: PublicKey,
        chain_code: &[u8],
        network: Network,
    ) -> Result<DerivationNode, Error> {
        if !key.compressed {
            return Err(Error::CompressionRequired);
        }
        let chain_code = ChainCode::from_slice(chain_code)?;
        Ok(DerivationNode::root(KeyMaterial::Public { public: key.inner }, chain_code, network))
    }

    fn root(key: KeyMaterial, chain_code: ChainCode, network: Network) -> DerivationNode {
        DerivationNode::at(key, chain_code, 0, ChildKeyIndex::ZERO_NORMAL, network)
    }

    pub(crate) fn at(
        key: KeyMaterial,
        chain_code: ChainCode,
        depth: u8,
        index: ChildKeyIndex,
        network: Network,
    ) -> DerivationNode {
        DerivationNode { key, chain_code, depth, index, network }
    }

    /// Constructs the master node from a seed.
    ///
    /// The seed must be between 128 and 512 bits long.
    pub fn from_seed(seed: &[u8], network: Network) -> Result<DerivationNode, Error> {
        let bits = seed.len() * 8;
        if bits < MIN_SEED_BITS {
            return Err(SeedEntropyError { bits, bound: EntropyBound::TooLow }.into());
        }
        if bits > MAX_SEED_BITS {
            return Err(SeedEntropyError { bits, bound: EntropyBound::TooHigh }.into());
        }

        let mut hmac_engine: HmacEngine<sha512::Hash> = HmacEngine::new(MASTER_KEY_DOMAIN);
        hmac_engine.input(seed);
        let (il, chain_code) = split_hmac(Hmac::from_engine(hmac_engine));

        let secret = SecretKey::from_slice(&il).map_err(|_| {
            debug!(%network, "seed produced an out of range master key");
            Error::InvalidMasterKey
        })?;
        Ok(DerivationNode::root(KeyMaterial::from_secret(secret), chain_code, network))
    }

    /// Derives the child at `index`.
    ///
    /// Private nodes derive private children for any index; public-only nodes
    /// derive public children for normal indices and fail for hardened ones.
    /// If the child key at `index` is invalid the error is returned as is;
    /// moving on to the next index is up to the caller.
    ///
    /// An index built directly from its variant must still be below 2^31.
    pub fn derive<I: Into<ChildKeyIndex>>(&self, index: I) -> Result<DerivationNode, Error> {
        let index = index.into();
        if index.index() & HARDENED_FLAG != 0 {
            return Err(Error::InvalidChildKeyIndex(index.index()));
        }
        let depth = self.depth.checked_add(1).ok_or(Error::MaximumDepthExceeded)?;

        let mut hmac_engine: HmacEngine<sha512::Hash> = HmacEngine::new(&self.chain_code[..]);
        match (index, &self.key) {
            (ChildKeyIndex::Hardened { .. }, KeyMaterial::Private { secret, .. }) => {
                // Hardened key: use only secret data to prevent public derivation
                hmac_engine.input(&[0u8]);
                hmac_engine.input(&secret.secret_bytes());
            }
            (ChildKeyIndex::Hardened { .. }, KeyMaterial::Public { .. }) => {
                debug!(depth = self.depth, %index, "hardened derivation on a public-only node");
                return Err(Error::HardenedDerivationRequiresPrivateKey);
            }
            (ChildKeyIndex::Normal { .. }, key) => {
                hmac_engine.input(&key.public_key().serialize());
            }
        }
        hmac_engine.input(&u32::from(index).to_be_bytes());
        let (il, chain_code) = split_hmac(Hmac::from_engine(hmac_engine));

        let key = Scalar::from_be_bytes(il).ok().and_then(|tweak| match self.key {
            KeyMaterial::Private { secret, .. } =>
                secret.add_tweak(&tweak).ok().map(KeyMaterial::from_secret),
            KeyMaterial::Public { public } => public
                .add_exp_tweak(SECP256K1, &tweak)
                .ok()
                .map(|public| KeyMaterial::Public { public }),
        });
        let key = key.ok_or_else(|| {
            debug!(depth, %index, "derived child key is invalid");
            Error::InvalidChildKey(index)
        })?;

        trace!(depth, %index, private = key.is_private(), "derived child key");
        Ok(DerivationNode::at(key, chain_code, depth, index, self.network))
    }

    /// Derives the hardened child at `index`, which must be below 2^31.
    pub fn derive_hardened(&self, index: u32) -> Result<DerivationNode, Error> {
        self.derive(ChildKeyIndex::from_hardened_idx(index)?)
    }

    /// Derives the node at `path` below this one, one step at a time.
    ///
    /// The `path` argument can be a [`DerivationPath`](crate::DerivationPath)
    /// or a slice of [`ChildKeyIndex`].
    pub fn derive_path<P: AsRef<[ChildKeyIndex]>>(&self, path: P) -> Result<DerivationNode, Error> {
        path.as_ref().iter().try_fold(*self, |node, &index| node.derive(index))
    }

    /// Returns a copy of this node without the private key.
    pub fn neutered(&self) -> DerivationNode {
        DerivationNode {
            key: KeyMaterial::Public { public: *self.key.public_key() },
            ..*self
        }
    }

    /// Returns the HASH160 of the compressed public key.
    pub fn identifier(&self) -> XKeyIdentifier {
        XKeyIdentifier::from_raw_hash(hash160::Hash::hash(&self.public_key_bytes()))
    }

    /// Returns the first four bytes of the identifier.
    pub fn fingerprint(&self) -> Fingerprint {
        let id = self.identifier().to_byte_array();
        Fingerprint([id[0], id[1], id[2], id[3]])
    }

    /// Returns the key pair of this node.
    pub fn key_material(&self) -> &KeyMaterial { &self.key }

    /// Returns the secret key, if this node has one.
    pub fn private_key(&self) -> Option<&SecretKey> { self.key.private_key() }

    /// Returns the public key.
    pub fn public_key(&self) -> &secp256k1::PublicKey { self.key.public_key() }

    /// Returns the 33-byte compressed encoding of the public key.
    pub fn public_key_bytes(&self) -> [u8; 33] { self.key.public_key().serialize() }

    /// Returns `true` if this node holds a private key.
    pub fn is_private(&self) -> bool { self.key.is_private() }

    /// Returns the chain code.
    pub fn chain_code(&self) -> &ChainCode { &self.chain_code }

    /// Returns how many derivations this node is from the master (which is 0).
    pub fn depth(&self) -> u8 { self.depth }

    /// Returns the index this node was derived at (0 for the master).
    pub fn index(&self) -> ChildKeyIndex { self.index }

    /// Returns the network this node is used on.
    pub fn network(&self) -> Network { self.network }
}

impl From<DerivationNode> for XKeyIdentifier {
    fn from(node: DerivationNode) -> XKeyIdentifier { node.identifier() }
}

impl From<&DerivationNode> for XKeyIdentifier {
    fn from(node: &DerivationNode) -> XKeyIdentifier { node.identifier() }
}

/// Splits HMAC-SHA512 output into the key half and the chain code half.
fn split_hmac(hmac: Hmac<sha512::Hash>) -> ([u8; 32], ChainCode) {
    let bytes = hmac.to_byte_array();
    let mut il = [0u8; 32];
    let mut ir = [0u8; 32];
    il.copy_from_slice(&bytes[..32]);
    ir.copy_from_slice(&bytes[32..]);
    (il, ChainCode(ir))
}
