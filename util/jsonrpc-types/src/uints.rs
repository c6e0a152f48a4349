use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::{fmt, marker::PhantomData, num::ParseIntError};

/// An unsigned integer which can be carried by [`JsonUint`].
pub trait Uint: Copy + fmt::LowerHex {
    /// The name used in error messages.
    const NAME: &'static str;

    fn from_str_radix(src: &str, radix: u32) -> Result<Self, ParseIntError>;
}

/// An unsigned integer encoded as a 0x-prefixed lowercase hex string without leading zeros.
///
/// | JSON   | Value                            |
/// | ------ | -------------------------------- |
/// | "0x0"  | 0                                |
/// | "0x10" | 16                               |
/// | "10"   | Invalid, the 0x prefix is needed |
/// | "0x01" | Invalid, leading zero            |
#[derive(Copy, Clone, Default, PartialEq, PartialOrd, Ord, Eq, Hash, Debug)]
pub struct JsonUint<T: Uint>(T);

impl<T: Uint> JsonUint<T> {
    pub fn value(self) -> T {
        self.0
    }

    /// Parses a number written by hand or by other tools.
    ///
    /// Accepts decimal digits, or a `0x`/`0X` prefixed hex string in any case and with leading
    /// zeros. Use the serde implementation for the strict RPC encoding.
    pub fn from_loose_str(value: &str) -> Result<Self, ParseIntError> {
        let value = value.trim();
        match value
            .strip_prefix("0x")
            .or_else(|| value.strip_prefix("0X"))
        {
            Some(hex) => T::from_str_radix(hex, 16).map(JsonUint),
            None => T::from_str_radix(value, 10).map(JsonUint),
        }
    }

    fn from_strict_str(value: &str) -> Result<Self, String> {
        let digits = value
            .strip_prefix("0x")
            .ok_or_else(|| format!("Invalid {} {}: without `0x` prefix", T::NAME, value))?;
        if digits.len() > 1 && digits.starts_with('0') {
            return Err(format!(
                "Invalid {} {}: with redundant leading zeros",
                T::NAME,
                value
            ));
        }
        if !digits.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f')) {
            return Err(format!(
                "Invalid {} {}: only digits and lowercases are allowed",
                T::NAME,
                value
            ));
        }
        T::from_str_radix(digits, 16)
            .map(JsonUint)
            .map_err(|err| format!("Invalid {} {}: {}", T::NAME, value, err))
    }
}

impl<T: Uint> fmt::Display for JsonUint<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

impl<T: Uint> From<T> for JsonUint<T> {
    fn from(value: T) -> Self {
        JsonUint(value)
    }
}

impl<T: Uint> Serialize for JsonUint<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

struct JsonUintVisitor<T>(PhantomData<T>);

impl<'de, T: Uint> de::Visitor<'de> for JsonUintVisitor<T> {
    type Value = JsonUint<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "a hex-encoded, 0x-prefixed {}", T::NAME)
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
        JsonUint::from_strict_str(value).map_err(E::custom)
    }
}

impl<'de, T: Uint> Deserialize<'de> for JsonUint<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_str(JsonUintVisitor(PhantomData))
    }
}

macro_rules! def_json_uint {
    ($alias:ident, $inner:ident) => {
        pub type $alias = JsonUint<$inner>;

        impl Uint for $inner {
            const NAME: &'static str = stringify!($alias);

            fn from_str_radix(src: &str, radix: u32) -> Result<Self, ParseIntError> {
                $inner::from_str_radix(src, radix)
            }
        }

        impl From<JsonUint<$inner>> for $inner {
            fn from(value: JsonUint<$inner>) -> Self {
                value.value()
            }
        }
    };
}

def_json_uint!(Uint32, u32);
def_json_uint!(Uint64, u64);
def_json_uint!(Uint128, u128);
