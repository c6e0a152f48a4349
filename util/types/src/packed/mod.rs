//! The molecule encoding of the chain types.
//!
//! * Numbers are little-endian.
//! * A *struct* is the plain concatenation of its fixed-size fields.
//! * A *fixvec* is an item count followed by fixed-size items. `Bytes` is a fixvec of `u8`.
//! * A *table* (and a *dynvec*) is the total size, one offset per field (item) measured from the
//!   start of the record, then the fields (items).
//! * An *option* is empty for `None`.

mod blockchain;
mod dep_group;

pub use dep_group::{DepGroupData, FormatMismatch};
pub use molecule::error::{VerificationError, VerificationResult};

use crate::{bytes::Bytes, H256};
use molecule::{pack_number, unpack_number, NUMBER_SIZE};

/// A type which has a canonical molecule encoding.
pub trait Entity: Sized {
    /// The molecule type name, used in verification errors.
    const NAME: &'static str;
    /// The size of a fixed-size encoding, `None` for dynamic ones.
    const FIXED_SIZE: Option<usize> = None;

    /// Appends the encoding to `out`.
    fn write_to(&self, out: &mut Vec<u8>);

    /// Decodes from a slice which holds exactly one encoded value.
    fn from_slice(slice: &[u8]) -> VerificationResult<Self>;

    /// The encoding as a byte vector.
    fn as_vec(&self) -> Vec<u8> {
        let mut out = Vec::new();
        self.write_to(&mut out);
        out
    }

    /// The encoding as `Bytes`.
    fn as_bytes(&self) -> Bytes {
        Bytes::from(self.as_vec())
    }
}

pub(crate) fn verify_fixed_size(
    name: &str,
    slice: &[u8],
    expected: usize,
) -> VerificationResult<()> {
    if slice.len() != expected {
        return Err(VerificationError::TotalSizeNotMatch(
            name.to_owned(),
            expected,
            slice.len(),
        ));
    }
    Ok(())
}

/// Writes a table or a dynvec from already encoded parts.
pub(crate) fn write_offsets_and_parts(out: &mut Vec<u8>, parts: &[Vec<u8>]) {
    let header_size = NUMBER_SIZE * (parts.len() + 1);
    let total_size = header_size + parts.iter().map(Vec::len).sum::<usize>();
    out.reserve(total_size);
    out.extend_from_slice(&pack_number(total_size as u32));
    let mut offset = header_size;
    for part in parts {
        out.extend_from_slice(&pack_number(offset as u32));
        offset += part.len();
    }
    for part in parts {
        out.extend_from_slice(part);
    }
}

/// Splits a table or a dynvec into its parts, verifying the header and the offsets.
pub(crate) fn read_offsets_and_parts<'a>(
    name: &str,
    slice: &'a [u8],
) -> VerificationResult<Vec<&'a [u8]>> {
    let slice_len = slice.len();
    if slice_len < NUMBER_SIZE {
        return Err(VerificationError::HeaderIsBroken(
            name.to_owned(),
            NUMBER_SIZE,
            slice_len,
        ));
    }
    let total_size = unpack_number(slice) as usize;
    if slice_len != total_size {
        return Err(VerificationError::TotalSizeNotMatch(
            name.to_owned(),
            total_size,
            slice_len,
        ));
    }
    if slice_len == NUMBER_SIZE {
        return Ok(Vec::new());
    }
    if slice_len < NUMBER_SIZE * 2 {
        return Err(VerificationError::HeaderIsBroken(
            name.to_owned(),
            NUMBER_SIZE * 2,
            slice_len,
        ));
    }
    let offset_first = unpack_number(&slice[NUMBER_SIZE..]) as usize;
    if offset_first % NUMBER_SIZE != 0 || offset_first < NUMBER_SIZE * 2 {
        return Err(VerificationError::OffsetsNotMatch(name.to_owned()));
    }
    if slice_len < offset_first {
        return Err(VerificationError::HeaderIsBroken(
            name.to_owned(),
            offset_first,
            slice_len,
        ));
    }
    let count = offset_first / NUMBER_SIZE - 1;
    let mut offsets: Vec<usize> = slice[NUMBER_SIZE..offset_first]
        .chunks_exact(NUMBER_SIZE)
        .map(|x| unpack_number(x) as usize)
        .collect();
    offsets.push(total_size);
    if offsets.windows(2).any(|pair| pair[0] > pair[1]) {
        return Err(VerificationError::OffsetsNotMatch(name.to_owned()));
    }
    Ok((0..count)
        .map(|i| &slice[offsets[i]..offsets[i + 1]])
        .collect())
}

/// Splits a table into exactly `field_count` fields.
pub(crate) fn read_table<'a>(
    name: &str,
    slice: &'a [u8],
    field_count: usize,
) -> VerificationResult<Vec<&'a [u8]>> {
    let fields = read_offsets_and_parts(name, slice)?;
    if fields.len() != field_count {
        return Err(VerificationError::FieldCountNotMatch(
            name.to_owned(),
            field_count,
            fields.len(),
        ));
    }
    Ok(fields)
}

pub(crate) fn write_fixvec<T: Entity>(out: &mut Vec<u8>, items: &[T]) {
    out.extend_from_slice(&pack_number(items.len() as u32));
    for item in items {
        item.write_to(out);
    }
}

pub(crate) fn read_fixvec<'a>(
    name: &str,
    slice: &'a [u8],
    item_size: usize,
) -> VerificationResult<std::slice::ChunksExact<'a, u8>> {
    let slice_len = slice.len();
    if slice_len < NUMBER_SIZE {
        return Err(VerificationError::HeaderIsBroken(
            name.to_owned(),
            NUMBER_SIZE,
            slice_len,
        ));
    }
    let item_count = unpack_number(slice) as usize;
    let expected = NUMBER_SIZE + item_size * item_count;
    if slice_len != expected {
        return Err(VerificationError::TotalSizeNotMatch(
            name.to_owned(),
            expected,
            slice_len,
        ));
    }
    Ok(slice[NUMBER_SIZE..].chunks_exact(item_size))
}

macro_rules! impl_entity_for_number {
    ($type:ident, $name:literal) => {
        impl Entity for $type {
            const NAME: &'static str = $name;
            const FIXED_SIZE: Option<usize> = Some(std::mem::size_of::<$type>());

            fn write_to(&self, out: &mut Vec<u8>) {
                out.extend_from_slice(&self.to_le_bytes());
            }

            fn from_slice(slice: &[u8]) -> VerificationResult<Self> {
                let mut buf = [0u8; std::mem::size_of::<$type>()];
                verify_fixed_size(Self::NAME, slice, buf.len())?;
                buf.copy_from_slice(slice);
                Ok($type::from_le_bytes(buf))
            }
        }
    };
}

impl_entity_for_number!(u8, "Byte");
impl_entity_for_number!(u32, "Uint32");
impl_entity_for_number!(u64, "Uint64");
impl_entity_for_number!(u128, "Uint128");

impl Entity for H256 {
    const NAME: &'static str = "Byte32";
    const FIXED_SIZE: Option<usize> = Some(32);

    fn write_to(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(self.as_bytes());
    }

    fn from_slice(slice: &[u8]) -> VerificationResult<Self> {
        verify_fixed_size(Self::NAME, slice, 32)?;
        let mut ret = H256::zero();
        ret.0.copy_from_slice(slice);
        Ok(ret)
    }
}

impl Entity for Bytes {
    const NAME: &'static str = "Bytes";

    fn write_to(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&pack_number(self.len() as u32));
        out.extend_from_slice(self);
    }

    fn from_slice(slice: &[u8]) -> VerificationResult<Self> {
        read_fixvec(Self::NAME, slice, 1)?;
        Ok(Bytes::copy_from_slice(&slice[NUMBER_SIZE..]))
    }
}

impl<T: Entity> Entity for Option<T> {
    const NAME: &'static str = "Option";

    fn write_to(&self, out: &mut Vec<u8>) {
        if let Some(inner) = self {
            inner.write_to(out);
        }
    }

    fn from_slice(slice: &[u8]) -> VerificationResult<Self> {
        if slice.is_empty() {
            Ok(None)
        } else {
            T::from_slice(slice).map(Some)
        }
    }
}

/// A fixvec when the item has a fixed size, a dynvec otherwise.
impl<T: Entity> Entity for Vec<T> {
    const NAME: &'static str = "Vec";

    fn write_to(&self, out: &mut Vec<u8>) {
        if T::FIXED_SIZE.is_some() {
            write_fixvec(out, self);
        } else {
            let parts: Vec<Vec<u8>> = self.iter().map(Entity::as_vec).collect();
            write_offsets_and_parts(out, &parts);
        }
    }

    fn from_slice(slice: &[u8]) -> VerificationResult<Self> {
        match T::FIXED_SIZE {
            Some(item_size) => read_fixvec(T::NAME, slice, item_size)?
                .map(T::from_slice)
                .collect(),
            None => read_offsets_and_parts(T::NAME, slice)?
                .into_iter()
                .map(T::from_slice)
                .collect(),
        }
    }
}
