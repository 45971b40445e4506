// SPDX-License-Identifier: CC0-1.0

//! Error types for key derivation and extended key encoding.

use core::fmt;

use hex::DisplayHex;

use crate::index::ChildKeyIndex;
use crate::network::Network;
use crate::node::{Fingerprint, MAX_SEED_BITS, MIN_SEED_BITS};

/// A BIP-32 error.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// Key material was supplied in uncompressed form.
    CompressionRequired,
    /// A chain code was not exactly 32 bytes long.
    InvalidChainCodeLength(usize),
    /// No network is known by this name.
    UnknownNetwork(String),
    /// Version bytes do not belong to any known network.
    UnknownNetworkVersion([u8; 4]),
    /// Version bytes do not belong to the network the caller expected.
    NetworkMismatch {
        /// The network the caller asked for.
        expected: Network,
        /// The version bytes that were found.
        version: [u8; 4],
    },
    /// Seed length is outside of the allowed range.
    SeedEntropy(SeedEntropyError),
    /// The master secret computed from a seed is not a valid scalar.
    InvalidMasterKey,
    /// The child key at this index is invalid; the caller may try the next index.
    InvalidChildKey(ChildKeyIndex),
    /// A hardened child was requested from a public-only node.
    HardenedDerivationRequiresPrivateKey,
    /// A child index was provided that was out of range.
    InvalidChildKeyIndex(u32),
    /// Invalid [`ChildKeyIndex`] format.
    InvalidChildKeyIndexFormat,
    /// Deriving another level would overflow the one-byte depth field.
    MaximumDepthExceeded,
    /// The base58 checksum of an extended key did not match.
    InvalidChecksum,
    /// An extended key was malformed.
    InvalidFormat(FormatError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use Error::*;

        match *self {
            CompressionRequired => f.write_str("key material must use compressed point encoding"),
            InvalidChainCodeLength(len) =>
                write!(f, "chain code must be 32 bytes long, got {}", len),
            UnknownNetwork(ref name) => write!(f, "unknown network: {}", name),
            UnknownNetworkVersion(ref bytes) =>
                write!(f, "unknown version bytes: {}", bytes[..].as_hex()),
            NetworkMismatch { expected, ref version } => write!(
                f,
                "version bytes {} do not belong to network {}",
                version[..].as_hex(),
                expected
            ),
            SeedEntropy(ref e) => write_err!(f, "invalid seed"; e),
            InvalidMasterKey => f.write_str("seed produced an invalid master key"),
            InvalidChildKey(ref index) => write!(f, "child key {} is invalid", index),
            HardenedDerivationRequiresPrivateKey =>
                f.write_str("cannot derive hardened key from public key"),
            InvalidChildKeyIndex(ref n) =>
                write!(f, "child number {} is invalid (not within [0, 2^31 - 1])", n),
            InvalidChildKeyIndexFormat => f.write_str("invalid child number format"),
            MaximumDepthExceeded => f.write_str("key depth cannot exceed 255"),
            InvalidChecksum => f.write_str("invalid base58 checksum"),
            InvalidFormat(ref e) => write_err!(f, "invalid extended key"; e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        use Error::*;

        match *self {
            SeedEntropy(ref e) => Some(e),
            InvalidFormat(ref e) => Some(e),
            CompressionRequired
            | InvalidChainCodeLength(_)
            | UnknownNetwork(_)
            | UnknownNetworkVersion(_)
            | NetworkMismatch { .. }
            | InvalidMasterKey
            | InvalidChildKey(_)
            | HardenedDerivationRequiresPrivateKey
            | InvalidChildKeyIndex(_)
            | InvalidChildKeyIndexFormat
            | MaximumDepthExceeded
            | InvalidChecksum => None,
        }
    }
}

impl From<SeedEntropyError> for Error {
    fn from(e: SeedEntropyError) -> Error { Error::SeedEntropy(e) }
}

impl From<FormatError> for Error {
    fn from(e: FormatError) -> Error { Error::InvalidFormat(e) }
}

/// Which side of the allowed seed length range was violated.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum EntropyBound {
    /// Fewer than 128 bits.
    TooLow,
    /// More than 512 bits.
    TooHigh,
}

/// A seed was shorter than 128 bits or longer than 512 bits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedEntropyError {
    pub(crate) bits: usize,
    pub(crate) bound: EntropyBound,
}

impl SeedEntropyError {
    /// Returns the length of the rejected seed in bits.
    pub fn bits(&self) -> usize { self.bits }

    /// Returns the bound the seed violated.
    pub fn bound(&self) -> EntropyBound { self.bound }
}

impl fmt::Display for SeedEntropyError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.bound {
            EntropyBound::TooLow => write!(
                f,
                "seed entropy too low: {} bits (minimum {})",
                self.bits, MIN_SEED_BITS
            ),
            EntropyBound::TooHigh => write!(
                f,
                "seed entropy too high: {} bits (maximum {})",
                self.bits, MAX_SEED_BITS
            ),
        }
    }
}

impl std::error::Error for SeedEntropyError {}

/// The part of a serialized extended key that failed to parse.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum FormatError {
    /// The text is not valid base58.
    Base58(base58::Error),
    /// Decoded payload was not 78 bytes long.
    PayloadLength(usize),
    /// Key data does not hold a valid secret key.
    PrivateKey(secp256k1::Error),
    /// Key data does not hold a valid compressed public key.
    PublicKey(secp256k1::Error),
    /// Key data is private under a public version or the other way around.
    KeyKindMismatch,
    /// A depth zero key names a parent.
    ZeroDepthParentFingerprint(Fingerprint),
    /// A depth zero key has a nonzero child index.
    ZeroDepthChildIndex(u32),
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use FormatError::*;

        match *self {
            Base58(ref e) => write_err!(f, "invalid base58 text"; e),
            PayloadLength(len) =>
                write!(f, "decoded extended key data has wrong length {} (expected 78)", len),
            PrivateKey(ref e) => write_err!(f, "invalid private key data"; e),
            PublicKey(ref e) => write_err!(f, "invalid public key data"; e),
            KeyKindMismatch => f.write_str("key data does not match version bytes"),
            ZeroDepthParentFingerprint(ref fp) =>
                write!(f, "master key has nonzero parent fingerprint {}", fp),
            ZeroDepthChildIndex(n) => write!(f, "master key has nonzero child number {}", n),
        }
    }
}

impl std::error::Error for FormatError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        use FormatError::*;

        match *self {
            Base58(ref e) => Some(e),
            PrivateKey(ref e) | PublicKey(ref e) => Some(e),
            PayloadLength(_)
            | KeyKindMismatch
            | ZeroDepthParentFingerprint(_)
            | ZeroDepthChildIndex(_) => None,
        }
    }
}
