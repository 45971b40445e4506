// SPDX-License-Identifier: CC0-1.0

//! Networks and the version bytes they use for extended keys.
//!
//! Every serialized extended key starts with four version bytes which tell
//! both the network the key belongs to and whether it carries a private key.
//! The set of networks is fixed; anything outside of it is rejected.

use core::fmt;
use core::str::FromStr;

use crate::error::Error;

/// Version bytes and name of a network.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct NetworkParams {
    /// Canonical lowercase name.
    pub name: &'static str,
    /// Version bytes for extended private keys.
    pub private_version: [u8; 4],
    /// Version bytes for extended public keys.
    pub public_version: [u8; 4],
}

static BITCOIN: NetworkParams = NetworkParams {
    name: "bitcoin",
    private_version: [0x04, 0x88, 0xAD, 0xE4],
    public_version: [0x04, 0x88, 0xB2, 0x1E],
};

static TESTNET: NetworkParams = NetworkParams {
    name: "testnet",
    private_version: [0x04, 0x35, 0x83, 0x94],
    public_version: [0x04, 0x35, 0x87, 0xCF],
};

/// Whether an extended key carries a private key or only a public key.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum KeyKind {
    /// `xprv`-style key.
    Private,
    /// `xpub`-style key.
    Public,
}

/// A network an extended key can be used on.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[non_exhaustive]
pub enum Network {
    /// Bitcoin mainnet (`xprv` / `xpub`).
    Bitcoin,
    /// Bitcoin testnet and its siblings (`tprv` / `tpub`).
    Testnet,
}

impl Network {
    /// All known networks.
    pub const ALL: [Network; 2] = [Network::Bitcoin, Network::Testnet];

    /// Returns the parameter table entry of this network.
    pub fn params(self) -> &'static NetworkParams {
        match self {
            Network::Bitcoin => &BITCOIN,
            Network::Testnet => &TESTNET,
        }
    }

    /// Returns the version bytes this network uses for keys of the given kind.
    pub fn version(self, kind: KeyKind) -> [u8; 4] {
        let params = self.params();
        match kind {
            KeyKind::Private => params.private_version,
            KeyKind::Public => params.public_version,
        }
    }

    /// Returns the key kind the version bytes denote on this network, if they belong to it.
    pub fn kind_of(self, version: [u8; 4]) -> Option<KeyKind> {
        let params = self.params();
        if version == params.private_version {
            Some(KeyKind::Private)
        } else if version == params.public_version {
            Some(KeyKind::Public)
        } else {
            None
        }
    }

    /// Looks up the network owning the version bytes.
    ///
    /// Returns `None` unless exactly one known network uses them.
    pub fn from_version(version: [u8; 4]) -> Option<(Network, KeyKind)> {
        let mut matches = Network::ALL
            .iter()
            .filter_map(|&network| network.kind_of(version).map(|kind| (network, kind)));
        match (matches.next(), matches.next()) {
            (Some(found), None) => Some(found),
            _ => None,
        }
    }

    /// Looks up a network by its canonical name.
    pub fn from_name(name: &str) -> Result<Network, Error> {
        Network::ALL
            .iter()
            .copied()
            .find(|network| network.params().name == name)
            .ok_or_else(|| Error::UnknownNetwork(name.to_owned()))
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { f.write_str(self.params().name) }
}

impl FromStr for Network {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> { Network::from_name(s) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_lookup() {
        assert_eq!(
            Network::from_version([0x04, 0x88, 0xAD, 0xE4]),
            Some((Network::Bitcoin, KeyKind::Private))
        );
        assert_eq!(
            Network::from_version([0x04, 0x35, 0x87, 0xCF]),
            Some((Network::Testnet, KeyKind::Public))
        );
        assert_eq!(Network::from_version([0, 0, 0, 0]), None);

        for network in Network::ALL {
            for kind in [KeyKind::Private, KeyKind::Public] {
                let version = network.version(kind);
                assert_eq!(network.kind_of(version), Some(kind));
                assert_eq!(Network::from_version(version), Some((network, kind)));
            }
        }
        assert_eq!(Network::Bitcoin.kind_of(Network::Testnet.version(KeyKind::Private)), None);
    }

    #[test]
    fn name_lookup() {
        assert_eq!("bitcoin".parse::<Network>(), Ok(Network::Bitcoin));
        assert_eq!("testnet".parse::<Network>(), Ok(Network::Testnet));
        assert_eq!("dogecoin".parse::<Network>(), Err(Error::UnknownNetwork("dogecoin".into())));

        for network in Network::ALL {
            assert_eq!(network.to_string().parse::<Network>(), Ok(network));
        }
    }
}
