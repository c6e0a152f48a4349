use crate::{
    bytes::Bytes,
    core::{CellOutput, Header, Script, ScriptHashType, Transaction},
    packed::Entity,
    H256,
};
use ckb_replay_hash::blake2b_256;
use proptest::prelude::*;

#[test]
fn script_hash_is_the_digest_of_the_encoding() {
    let script = Script::new(H256([1u8; 32]), ScriptHashType::Type, Bytes::from_static(b"args"));
    assert_eq!(
        script.calc_script_hash(),
        H256(blake2b_256(script.as_vec()))
    );
}

#[test]
fn mainnet_secp256k1_type_hash() {
    // The type id script of the secp256k1_blake160 cell in the mainnet genesis block.
    let type_id = H256::from_hex_str(
        "0x00000000000000000000000000000000000000000000000000545950455f4944",
    )
    .expect("code hash");
    let mut args = [0u8; 32];
    faster_hex::hex_decode(
        b"8536c9d5d908bd89fc70099e4284870708b6632356aad98734fcf43f6f71c304",
        &mut args,
    )
    .expect("args");
    let script = Script::new(type_id, ScriptHashType::Type, Bytes::copy_from_slice(&args));

    assert_eq!(
        format!("{:#x}", script.calc_script_hash()),
        "0x9bd7e06f3ecf4be0f2fcd2188b23f1b9fcc88e5d4b65a8637b17723bbda3cce8"
    );
}

#[test]
fn data_hash_of_empty_data_is_zero() {
    assert_eq!(CellOutput::calc_data_hash(&[]), H256::zero());
    assert_eq!(
        CellOutput::calc_data_hash(b"code"),
        H256(blake2b_256(b"code"))
    );
}

#[test]
fn tx_hash_ignores_witnesses() {
    let tx = Transaction::default();
    let mut witnessed = tx.clone();
    witnessed.witnesses.push(Bytes::from_static(b"signature"));

    assert_eq!(tx.calc_tx_hash(), witnessed.calc_tx_hash());
    assert_ne!(tx.calc_tx_hash(), H256(blake2b_256(tx.as_vec())));
}

#[test]
fn header_view_carries_its_hash() {
    let header = Header {
        number: 1,
        ..Default::default()
    };
    let view = header.clone().into_view();
    assert_eq!(view.hash, H256(blake2b_256(header.as_vec())));
    assert_eq!(view.inner, header);
}

fn hash_type_strategy() -> impl Strategy<Value = ScriptHashType> {
    prop_oneof![
        Just(ScriptHashType::Data),
        Just(ScriptHashType::Type),
        Just(ScriptHashType::Data1),
        Just(ScriptHashType::Data2),
    ]
}

proptest! {
    #[test]
    fn script_hash_is_deterministic(
        code_hash in any::<[u8; 32]>(),
        hash_type in hash_type_strategy(),
        args in proptest::collection::vec(any::<u8>(), 0..64),
    ) {
        let script = Script::new(H256(code_hash), hash_type, Bytes::from(args));
        prop_assert_eq!(script.calc_script_hash(), script.clone().calc_script_hash());
    }

    #[test]
    fn scripts_differing_in_one_field_have_distinct_hashes(
        code_hash in any::<[u8; 32]>(),
        args in proptest::collection::vec(any::<u8>(), 0..32),
        flip in 0usize..32,
    ) {
        let script = Script::new(H256(code_hash), ScriptHashType::Data, Bytes::from(args.clone()));

        let mut other_code_hash = script.clone();
        other_code_hash.code_hash.0[flip] ^= 0xff;
        prop_assert_ne!(script.calc_script_hash(), other_code_hash.calc_script_hash());

        let mut other_hash_type = script.clone();
        other_hash_type.hash_type = ScriptHashType::Type;
        prop_assert_ne!(script.calc_script_hash(), other_hash_type.calc_script_hash());

        let mut longer_args = args;
        longer_args.push(0);
        let other_args = Script::new(H256(code_hash), ScriptHashType::Data, Bytes::from(longer_args));
        prop_assert_ne!(script.calc_script_hash(), other_args.calc_script_hash());
    }
}
