// SPDX-License-Identifier: CC0-1.0

//! Child key indices.
//!
//! Indices below 2^31 select normal children, which can be derived from a
//! public key alone. Indices from 2^31 up select hardened children, which need
//! the parent's private key.

use core::fmt;
use core::str::FromStr;

use crate::error::Error;

/// The bit that marks a raw index as hardened.
pub const HARDENED_FLAG: u32 = 1 << 31;

/// A child key index.
#[derive(Copy, Clone, PartialEq, Eq, Debug, PartialOrd, Ord, Hash)]
pub enum ChildKeyIndex {
    /// Non-hardened key.
    Normal {
        /// Key index, within [0, 2^31 - 1].
        index: u32,
    },
    /// Hardened key.
    Hardened {
        /// Key index, within [0, 2^31 - 1].
        index: u32,
    },
}

impl ChildKeyIndex {
    /// Normal child number with index 0.
    pub const ZERO_NORMAL: Self = ChildKeyIndex::Normal { index: 0 };

    /// Normal child number with index 1.
    pub const ONE_NORMAL: Self = ChildKeyIndex::Normal { index: 1 };

    /// Hardened child number with index 0.
    pub const ZERO_HARDENED: Self = ChildKeyIndex::Hardened { index: 0 };

    /// Hardened child number with index 1.
    pub const ONE_HARDENED: Self = ChildKeyIndex::Hardened { index: 1 };

    /// Creates a [`Normal`] from an index, returns an error if the index is not within
    /// [0, 2^31 - 1].
    ///
    /// [`Normal`]: #variant.Normal
    pub fn from_normal_idx(index: u32) -> Result<Self, Error> {
        if index & HARDENED_FLAG == 0 {
            Ok(ChildKeyIndex::Normal { index })
        } else {
            Err(Error::InvalidChildKeyIndex(index))
        }
    }

    /// Creates a [`Hardened`] from an index, returns an error if the index is not within
    /// [0, 2^31 - 1].
    ///
    /// [`Hardened`]: #variant.Hardened
    pub fn from_hardened_idx(index: u32) -> Result<Self, Error> {
        if index & HARDENED_FLAG == 0 {
            Ok(ChildKeyIndex::Hardened { index })
        } else {
            Err(Error::InvalidChildKeyIndex(index))
        }
    }

    /// Returns `true` if the child number is a [`Normal`] value.
    ///
    /// [`Normal`]: #variant.Normal
    pub fn is_normal(&self) -> bool { !self.is_hardened() }

    /// Returns `true` if the child number is a [`Hardened`] value.
    ///
    /// [`Hardened`]: #variant.Hardened
    pub fn is_hardened(&self) -> bool {
        match self {
            ChildKeyIndex::Hardened { .. } => true,
            ChildKeyIndex::Normal { .. } => false,
        }
    }

    /// Returns the index without the hardened bit.
    pub fn index(&self) -> u32 {
        match *self {
            ChildKeyIndex::Normal { index } | ChildKeyIndex::Hardened { index } => index,
        }
    }

    /// Returns the child number that is a single increment from this one.
    ///
    /// Fails once the index would leave its half of the range.
    pub fn increment(self) -> Result<ChildKeyIndex, Error> {
        match self {
            ChildKeyIndex::Normal { index } =>
                ChildKeyIndex::from_normal_idx(index.saturating_add(1)),
            ChildKeyIndex::Hardened { index } =>
                ChildKeyIndex::from_hardened_idx(index.saturating_add(1)),
        }
    }
}

impl From<u32> for ChildKeyIndex {
    fn from(number: u32) -> Self {
        if number & HARDENED_FLAG != 0 {
            ChildKeyIndex::Hardened { index: number ^ HARDENED_FLAG }
        } else {
            ChildKeyIndex::Normal { index: number }
        }
    }
}

impl From<ChildKeyIndex> for u32 {
    fn from(cnum: ChildKeyIndex) -> Self {
        match cnum {
            ChildKeyIndex::Normal { index } => index,
            ChildKeyIndex::Hardened { index } => index | HARDENED_FLAG,
        }
    }
}

impl fmt::Display for ChildKeyIndex {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ChildKeyIndex::Hardened { index } => {
                fmt::Display::fmt(&index, f)?;
                let alt = f.alternate();
                f.write_str(if alt { "h" } else { "'" })
            }
            ChildKeyIndex::Normal { index } => fmt::Display::fmt(&index, f),
        }
    }
}

impl FromStr for ChildKeyIndex {
    type Err = Error;

    fn from_str(inp: &str) -> Result<ChildKeyIndex, Error> {
        let (digits, hardened) = match inp.strip_suffix(|c: char| c == '\'' || c == 'h') {
            Some(digits) => (digits, true),
            None => (inp, false),
        };
        // `u32::from_str` tolerates a leading '+'.
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::InvalidChildKeyIndexFormat);
        }
        let index = digits.parse().map_err(|_| Error::InvalidChildKeyIndexFormat)?;
        if hardened {
            ChildKeyIndex::from_hardened_idx(index)
        } else {
            ChildKeyIndex::from_normal_idx(index)
        }
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for ChildKeyIndex {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        u32::deserialize(deserializer).map(ChildKeyIndex::from)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for ChildKeyIndex {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        u32::from(*self).serialize(serializer)
    }
}
