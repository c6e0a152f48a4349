use super::Entity;
use crate::core::OutPoint;
use molecule::{unpack_number, NUMBER_SIZE};
use thiserror::Error;

const OUT_POINT_SIZE: usize = 36;

/// The header of a dep group blob disagrees with the blob itself.
///
/// Decoding still yields every complete out point found in the blob.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatMismatch {
    /// The blob is too short to hold the 4 bytes header.
    #[error("dep group data has {actual} bytes, shorter than its header")]
    Truncated {
        /// The blob length.
        actual: usize,
    },
    /// The header is neither the total size nor the item count of the blob.
    #[error(
        "dep group data declares {declared} but has {actual} bytes ({entries} complete out points)"
    )]
    SizeNotMatch {
        /// The header value.
        declared: u32,
        /// The blob length.
        actual: usize,
        /// The count of complete out points after the header.
        entries: usize,
    },
}

/// The decoded content of a dep group cell.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DepGroupData {
    /// Member out points, in blob order.
    pub out_points: Vec<OutPoint>,
    /// Set when the blob is malformed. The out points are then a best effort.
    pub mismatch: Option<FormatMismatch>,
}

impl DepGroupData {
    /// Decodes a dep group blob leniently.
    ///
    /// The 4 bytes header is accepted either as the item count (the canonical `OutPointVec`) or
    /// as the total byte length. The blob is parsed after the header, stopping at the last
    /// complete 36 bytes entry.
    ///
    /// ```
    /// use ckb_replay_types::{core::OutPoint, packed::DepGroupData, H256};
    ///
    /// let mut blob = 40u32.to_le_bytes().to_vec();
    /// blob.extend_from_slice(&[0x11; 32]);
    /// blob.extend_from_slice(&0u32.to_le_bytes());
    ///
    /// let decoded = DepGroupData::decode(&blob);
    /// assert_eq!(decoded.out_points, vec![OutPoint::new(H256([0x11; 32]), 0)]);
    /// assert!(decoded.mismatch.is_none());
    /// ```
    pub fn decode(data: &[u8]) -> Self {
        if data.len() < NUMBER_SIZE {
            return DepGroupData {
                out_points: Vec::new(),
                mismatch: (!data.is_empty()).then_some(FormatMismatch::Truncated {
                    actual: data.len(),
                }),
            };
        }
        let declared = unpack_number(data);
        let body = &data[NUMBER_SIZE..];
        let entries = body.len() / OUT_POINT_SIZE;
        let is_complete = body.len() % OUT_POINT_SIZE == 0;
        let matches_total_size = declared as usize == data.len();
        let matches_item_count = declared as usize == entries;

        let mismatch = if is_complete && (matches_total_size || matches_item_count) {
            None
        } else {
            Some(FormatMismatch::SizeNotMatch {
                declared,
                actual: data.len(),
                entries,
            })
        };

        let out_points = body
            .chunks_exact(OUT_POINT_SIZE)
            .filter_map(|chunk| OutPoint::from_slice(chunk).ok())
            .collect();

        DepGroupData {
            out_points,
            mismatch,
        }
    }
}
