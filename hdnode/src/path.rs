// SPDX-License-Identifier: CC0-1.0

//! BIP-32 derivation paths such as `m/44'/0'/0'/0/1`.

use core::fmt;
use core::ops::Index;
use core::str::FromStr;

use crate::error::Error;
use crate::index::ChildKeyIndex;

/// A BIP-32 derivation path.
#[derive(Clone, Default, PartialEq, Eq, Ord, PartialOrd, Hash)]
pub struct DerivationPath(Vec<ChildKeyIndex>);

#[cfg(feature = "serde")]
serde_string_impl!(DerivationPath, "a BIP-32 derivation path");

impl DerivationPath {
    /// The master (empty) path.
    pub const MASTER: Self = DerivationPath(Vec::new());

    /// Returns length of the derivation path.
    pub fn len(&self) -> usize { self.0.len() }

    /// Returns `true` if the derivation path is empty.
    pub fn is_empty(&self) -> bool { self.0.is_empty() }

    /// Returns whether derivation path represents master key (i.e. it's length
    /// is empty). True for `m` path.
    pub fn is_master(&self) -> bool { self.0.is_empty() }

    /// Returns `true` if every step of the path can be derived from a public key.
    pub fn is_normal(&self) -> bool { self.0.iter().all(ChildKeyIndex::is_normal) }

    /// Creates a new derivation path that is a child of this one.
    pub fn child(&self, cn: ChildKeyIndex) -> DerivationPath {
        let mut path = self.0.clone();
        path.push(cn);
        DerivationPath(path)
    }

    /// Converts into a derivation path that is a child of this one.
    pub fn into_child(self, cn: ChildKeyIndex) -> DerivationPath {
        let mut path = self.0;
        path.push(cn);
        DerivationPath(path)
    }

    /// Returns an [`Iterator`] over the children of this [`DerivationPath`]
    /// starting with the given [`ChildKeyIndex`].
    pub fn children_from(&self, cn: ChildKeyIndex) -> DerivationPathIterator {
        DerivationPathIterator::start_from(self, cn)
    }

    /// Returns an [`Iterator`] over the unhardened children of this [`DerivationPath`].
    pub fn normal_children(&self) -> DerivationPathIterator {
        DerivationPathIterator::start_from(self, ChildKeyIndex::ZERO_NORMAL)
    }

    /// Returns an [`Iterator`] over the hardened children of this [`DerivationPath`].
    pub fn hardened_children(&self) -> DerivationPathIterator {
        DerivationPathIterator::start_from(self, ChildKeyIndex::ZERO_HARDENED)
    }

    /// Concatenates `self` with `path` and return the resulting new path.
    ///
    /// ```
    /// use hdnode::{ChildKeyIndex, DerivationPath};
    /// use std::str::FromStr;
    ///
    /// let base = DerivationPath::from_str("m/42").unwrap();
    ///
    /// let deriv_1 = base.extend(DerivationPath::from_str("0/1").unwrap());
    /// let deriv_2 = base.extend([ChildKeyIndex::ZERO_NORMAL, ChildKeyIndex::ONE_NORMAL]);
    ///
    /// assert_eq!(deriv_1, deriv_2);
    /// ```
    pub fn extend<T: AsRef<[ChildKeyIndex]>>(&self, path: T) -> DerivationPath {
        let mut new_path = self.clone();
        new_path.0.extend_from_slice(path.as_ref());
        new_path
    }

    /// Returns the derivation path as a vector of raw `u32` indices, hardened
    /// steps carrying the 0x80000000 bit.
    ///
    /// ```
    /// use hdnode::DerivationPath;
    ///
    /// let path: DerivationPath = "m/84'/0'/0'/0/1".parse().unwrap();
    /// const HARDENED: u32 = 0x80000000;
    /// assert_eq!(path.to_u32_vec(), vec![84 + HARDENED, HARDENED, HARDENED, 0, 1]);
    /// ```
    pub fn to_u32_vec(&self) -> Vec<u32> { self.into_iter().map(u32::from).collect() }

    /// Creates a derivation path from a slice of raw `u32` indices.
    pub fn from_u32_slice(numbers: &[u32]) -> DerivationPath {
        numbers.iter().map(|&n| ChildKeyIndex::from(n)).collect()
    }
}

impl From<Vec<ChildKeyIndex>> for DerivationPath {
    fn from(numbers: Vec<ChildKeyIndex>) -> Self { DerivationPath(numbers) }
}

impl From<DerivationPath> for Vec<ChildKeyIndex> {
    fn from(path: DerivationPath) -> Self { path.0 }
}

impl<'a> From<&'a [ChildKeyIndex]> for DerivationPath {
    fn from(numbers: &'a [ChildKeyIndex]) -> Self { DerivationPath(numbers.to_vec()) }
}

impl core::iter::FromIterator<ChildKeyIndex> for DerivationPath {
    fn from_iter<T>(iter: T) -> Self
    where
        T: IntoIterator<Item = ChildKeyIndex>,
    {
        DerivationPath(Vec::from_iter(iter))
    }
}

impl<'a> IntoIterator for &'a DerivationPath {
    type Item = ChildKeyIndex;
    type IntoIter = core::iter::Copied<core::slice::Iter<'a, ChildKeyIndex>>;

    fn into_iter(self) -> Self::IntoIter { self.0.iter().copied() }
}

impl IntoIterator for DerivationPath {
    type Item = ChildKeyIndex;
    type IntoIter = std::vec::IntoIter<ChildKeyIndex>;

    fn into_iter(self) -> Self::IntoIter { self.0.into_iter() }
}

impl AsRef<[ChildKeyIndex]> for DerivationPath {
    fn as_ref(&self) -> &[ChildKeyIndex] { &self.0 }
}

impl<I> Index<I> for DerivationPath
where
    Vec<ChildKeyIndex>: Index<I>,
{
    type Output = <Vec<ChildKeyIndex> as Index<I>>::Output;

    #[inline]
    fn index(&self, index: I) -> &Self::Output { &self.0[index] }
}

impl FromStr for DerivationPath {
    type Err = Error;

    fn from_str(path: &str) -> Result<DerivationPath, Error> {
        if path.is_empty() || path == "m" || path == "m/" {
            return Ok(DerivationPath::MASTER);
        }

        let path = path.strip_prefix("m/").unwrap_or(path);
        path.split('/')
            .map(str::parse)
            .collect::<Result<Vec<ChildKeyIndex>, Error>>()
            .map(Into::into)
    }
}

impl fmt::Display for DerivationPath {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("m")?;
        for cn in self {
            f.write_str("/")?;
            fmt::Display::fmt(&cn, f)?;
        }
        Ok(())
    }
}

impl fmt::Debug for DerivationPath {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { fmt::Display::fmt(&self, f) }
}

/// An iterator over sibling paths below a [`DerivationPath`].
///
/// It is returned by the methods [`DerivationPath::children_from`],
/// [`DerivationPath::normal_children`] and [`DerivationPath::hardened_children`].
pub struct DerivationPathIterator<'a> {
    base: &'a DerivationPath,
    next_child: Option<ChildKeyIndex>,
}

impl<'a> DerivationPathIterator<'a> {
    /// Starts a new [`DerivationPathIterator`] at the given child.
    pub fn start_from(
        path: &'a DerivationPath,
        start: ChildKeyIndex,
    ) -> DerivationPathIterator<'a> {
        DerivationPathIterator { base: path, next_child: Some(start) }
    }
}

impl<'a> Iterator for DerivationPathIterator<'a> {
    type Item = DerivationPath;

    fn next(&mut self) -> Option<Self::Item> {
        let ret = self.next_child?;
        self.next_child = ret.increment().ok();
        Some(self.base.child(ret))
    }
}
