// SPDX-License-Identifier: CC0-1.0

//! Internal macros.
//!
//! Macros meant to be used inside this crate only.

/// Implements accessors and conversions for a fixed-size byte array newtype.
macro_rules! impl_array_newtype {
    ($thing:ident, $len:literal) => {
        impl $thing {
            /// Returns a reference to the underlying bytes.
            #[inline]
            pub fn as_bytes(&self) -> &[u8; $len] { &self.0 }

            /// Returns a copy of the underlying bytes.
            #[inline]
            pub fn to_bytes(self) -> [u8; $len] { self.0 }
        }

        impl From<[u8; $len]> for $thing {
            fn from(data: [u8; $len]) -> Self { $thing(data) }
        }

        impl From<$thing> for [u8; $len] {
            fn from(thing: $thing) -> Self { thing.0 }
        }

        impl<'a> TryFrom<&'a [u8]> for $thing {
            type Error = core::array::TryFromSliceError;

            fn try_from(data: &'a [u8]) -> Result<Self, Self::Error> {
                <[u8; $len]>::try_from(data).map($thing)
            }
        }

        impl AsRef<[u8]> for $thing {
            fn as_ref(&self) -> &[u8] { &self.0 }
        }

        impl<I: core::slice::SliceIndex<[u8]>> core::ops::Index<I> for $thing {
            type Output = I::Output;

            #[inline]
            fn index(&self, index: I) -> &Self::Output { &self.0[index] }
        }
    };
}

/// Implements hex `Display`, `Debug` and `FromStr` for a byte array newtype, plus string serde.
macro_rules! impl_array_newtype_stringify {
    ($thing:ident, $len:literal) => {
        impl core::fmt::Display for $thing {
            fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
                use hex::DisplayHex;
                core::fmt::Display::fmt(&self.0[..].as_hex(), f)
            }
        }

        impl core::fmt::Debug for $thing {
            fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
                write!(f, "{}({})", stringify!($thing), self)
            }
        }

        impl core::str::FromStr for $thing {
            type Err = hex::HexToArrayError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <[u8; $len] as hex::FromHex>::from_hex(s).map($thing)
            }
        }

        #[cfg(feature = "serde")]
        serde_string_impl!($thing, concat!("a ", $len, "-byte hex string"));
    };
}

/// Formats an error message, leaving the source to [`std::error::Error::source`].
macro_rules! write_err {
    ($writer:expr, $string:literal $(, $args:expr)*; $source:expr) => {{
        let _ = &$source;
        write!($writer, $string $(, $args)*)
    }};
}

/// Implements serde (de)serialization through the type's `Display` and `FromStr` impls.
#[cfg(feature = "serde")]
macro_rules! serde_string_impl {
    ($name:ident, $expecting:expr) => {
        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<$name, D::Error>
            where
                D: serde::de::Deserializer<'de>,
            {
                use core::fmt::{self, Formatter};
                use core::str::FromStr;

                struct Visitor;
                impl<'de> serde::de::Visitor<'de> for Visitor {
                    type Value = $name;

                    fn expecting(&self, f: &mut Formatter) -> fmt::Result {
                        f.write_str($expecting)
                    }

                    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
                    where
                        E: serde::de::Error,
                    {
                        $name::from_str(v).map_err(E::custom)
                    }
                }

                deserializer.deserialize_str(Visitor)
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.collect_str(&self)
            }
        }
    };
}
