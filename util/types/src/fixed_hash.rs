//! The 32 bytes fixed hash used for transaction, script, data and header identities.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::{fmt, str::FromStr};
use thiserror::Error;

/// The 32-byte fixed-length binary data.
///
/// The name comes from the number of bits in the data.
///
/// In JSON it is encoded as a 0x-prefixed hex string.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct H256(pub [u8; 32]);

/// The associated error of [`FromStr`] which can be returned from parsing a string.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum FromStrError {
    /// Invalid character.
    #[error("invalid character code `{chr}` at {idx}")]
    InvalidCharacter {
        /// The value of the invalid character.
        chr: u8,
        /// The index of the invalid character.
        idx: usize,
    },
    /// Invalid length.
    #[error("invalid length: {0}")]
    InvalidLength(usize),
}

/// The error which can be returned when convert a byte slice back into a Hash.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum FromSliceError {
    /// Invalid length.
    #[error("invalid length: {0}")]
    InvalidLength(usize),
}

impl H256 {
    /// The all-zero hash.
    pub const fn zero() -> Self {
        H256([0u8; 32])
    }

    /// Returns true when every byte is zero.
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|b| *b == 0)
    }

    /// Converts `Self` to a byte slice.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0[..]
    }

    /// To convert the byte slice back into `Self`.
    pub fn from_slice(input: &[u8]) -> Result<Self, FromSliceError> {
        if input.len() != 32 {
            Err(FromSliceError::InvalidLength(input.len()))
        } else {
            let mut ret = Self::zero();
            ret.0.copy_from_slice(input);
            Ok(ret)
        }
    }

    /// Parses a hex string with an optional `0x` prefix.
    ///
    /// ```
    /// use ckb_replay_types::H256;
    ///
    /// let hash = H256::from_hex_str("0x0101010101010101010101010101010101010101010101010101010101010101");
    /// assert_eq!(hash, Ok(H256([1u8; 32])));
    /// ```
    pub fn from_hex_str(input: &str) -> Result<Self, FromStrError> {
        H256::from_str(input.strip_prefix("0x").unwrap_or(input))
    }
}

impl From<[u8; 32]> for H256 {
    fn from(bytes: [u8; 32]) -> Self {
        H256(bytes)
    }
}

impl From<H256> for [u8; 32] {
    fn from(hash: H256) -> Self {
        hash.0
    }
}

impl AsRef<[u8]> for H256 {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl fmt::Debug for H256 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "H256({:#x})", self)
    }
}

impl fmt::LowerHex for H256 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if f.alternate() {
            write!(f, "0x")?;
        }
        for x in self.0.iter() {
            write!(f, "{:02x}", x)?;
        }
        Ok(())
    }
}

impl fmt::Display for H256 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:#x}", self)
    }
}

fn unhex(chr: u8) -> Option<u8> {
    match chr {
        b'0'..=b'9' => Some(chr - b'0'),
        b'a'..=b'f' => Some(chr - b'a' + 10),
        b'A'..=b'F' => Some(chr - b'A' + 10),
        _ => None,
    }
}

impl FromStr for H256 {
    type Err = FromStrError;

    /// Parses exactly 64 hex characters without prefix.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let len = input.len();
        if len != 64 {
            return Err(FromStrError::InvalidLength(len));
        }
        let mut ret = Self::zero();
        for (idx, chr) in input.bytes().enumerate() {
            let val = unhex(chr).ok_or(FromStrError::InvalidCharacter { chr, idx })?;
            if idx % 2 == 0 {
                ret.0[idx / 2] |= val << 4;
            } else {
                ret.0[idx / 2] |= val;
            }
        }
        Ok(ret)
    }
}

impl Serialize for H256 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format!("0x{}", faster_hex::hex_string(&self.0)))
    }
}

struct H256Visitor;

impl<'de> de::Visitor<'de> for H256Visitor {
    type Value = H256;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "a 0x-prefixed hexadecimal string with 64 digits")
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        let hex = v.strip_prefix("0x").ok_or_else(|| {
            E::invalid_value(de::Unexpected::Str(v), &"a 0x-prefixed hexadecimal string")
        })?;
        H256::from_str(hex).map_err(|e| E::custom(format!("invalid H256 {}: {}", v, e)))
    }
}

impl<'de> Deserialize<'de> for H256 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_str(H256Visitor)
    }
}
