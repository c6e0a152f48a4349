use crate::{
    core::OutPoint,
    packed::{DepGroupData, Entity, FormatMismatch},
    H256,
};

fn entry(byte: u8, index: u32) -> Vec<u8> {
    OutPoint::new(H256([byte; 32]), index).as_vec()
}

#[test]
fn total_size_header() {
    let mut blob = 40u32.to_le_bytes().to_vec();
    blob.extend(entry(0x11, 0));

    let decoded = DepGroupData::decode(&blob);
    assert_eq!(decoded.out_points, vec![OutPoint::new(H256([0x11; 32]), 0)]);
    assert_eq!(decoded.mismatch, None);
}

#[test]
fn item_count_header() {
    let members = vec![
        OutPoint::new(H256([0x22; 32]), 0),
        OutPoint::new(H256([0x33; 32]), 7),
    ];
    let blob = members.as_vec();

    let decoded = DepGroupData::decode(&blob);
    assert_eq!(decoded.out_points, members);
    assert_eq!(decoded.mismatch, None);
}

#[test]
fn mismatched_header_is_reported_and_parsing_continues() {
    let mut blob = 99u32.to_le_bytes().to_vec();
    blob.extend(entry(0x11, 0));
    blob.extend(entry(0x12, 1));

    let decoded = DepGroupData::decode(&blob);
    assert_eq!(decoded.out_points.len(), 2);
    assert_eq!(
        decoded.mismatch,
        Some(FormatMismatch::SizeNotMatch {
            declared: 99,
            actual: 76,
            entries: 2,
        })
    );
}

#[test]
fn trailing_partial_entry_is_dropped() {
    let mut blob = 1u32.to_le_bytes().to_vec();
    blob.extend(entry(0x11, 3));
    blob.extend_from_slice(&[0xff; 10]);

    let decoded = DepGroupData::decode(&blob);
    assert_eq!(decoded.out_points, vec![OutPoint::new(H256([0x11; 32]), 3)]);
    assert!(decoded.mismatch.is_some());
}

#[test]
fn short_blobs_decode_to_nothing() {
    assert_eq!(DepGroupData::decode(&[]), DepGroupData::default());

    let decoded = DepGroupData::decode(&[1, 2]);
    assert!(decoded.out_points.is_empty());
    assert_eq!(decoded.mismatch, Some(FormatMismatch::Truncated { actual: 2 }));

    let decoded = DepGroupData::decode(&[0, 0, 0, 0]);
    assert!(decoded.out_points.is_empty());
    assert_eq!(decoded.mismatch, None);
}
