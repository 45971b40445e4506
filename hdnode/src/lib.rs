// SPDX-License-Identifier: CC0-1.0

//! # hdnode
//!
//! Implementation of BIP32 hierarchical deterministic wallets, as defined
//! at <https://github.com/bitcoin/bips/blob/master/bip-0032.mediawiki>.
//!
//! A single seed yields a master [`DerivationNode`]; every node derives
//! children by index, privately or (for normal indices) from its public key
//! alone. Nodes serialize to the standard 78-byte extended key format and its
//! Base58Check text (`xprv...` / `xpub...`).
//!
//! ```
//! use hdnode::{DerivationPath, ExtendedKey, Network};
//!
//! let seed = [0x2a; 32];
//! let master = ExtendedKey::from_seed(&seed, Network::Bitcoin).unwrap();
//!
//! let path: DerivationPath = "m/44'/0'/0'".parse().unwrap();
//! let account = master.derive_path(&path).unwrap();
//! let xpub = account.neutered();
//!
//! // The watch-only side derives the same receive keys.
//! let receive = xpub.derive(0u32).unwrap().derive(7u32).unwrap();
//! let private = account.derive(0u32).unwrap().derive(7u32).unwrap();
//! assert_eq!(receive.node.public_key(), private.node.public_key());
//!
//! let text = xpub.to_string();
//! assert!(text.starts_with("xpub"));
//! assert_eq!(text.parse::<ExtendedKey>().unwrap(), xpub);
//! ```
//!
//! ## Available feature flags
//!
//! * `serde` - (de)serialization of extended keys, paths, fingerprints and chain
//!   codes as strings.

#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![warn(missing_docs)]

#[macro_use]
mod internal_macros;

pub mod codec;
pub mod error;
pub mod index;
pub mod key;
pub mod network;
pub mod node;
pub mod path;

#[rustfmt::skip]                // Keep public re-exports separate.
#[doc(inline)]
pub use crate::{
    codec::ExtendedKey,
    error::{EntropyBound, Error, FormatError, SeedEntropyError},
    index::ChildKeyIndex,
    key::{PrivateKey, PublicKey},
    network::{KeyKind, Network, NetworkParams},
    node::{ChainCode, DerivationNode, Fingerprint, KeyMaterial, XKeyIdentifier},
    path::DerivationPath,
};
