use super::{sample_mock, script};
use crate::{extract_script_groups, ScriptGroupType};
use ckb_replay_fixture::MockTransaction;
use ckb_replay_types::core::ScriptHashType;
use pretty_assertions::assert_eq;

#[test]
fn groups_in_first_encounter_order() {
    let groups = extract_script_groups(&sample_mock());
    let summary: Vec<_> = groups
        .iter()
        .map(|group| {
            (
                group.group_type,
                group.script.code_hash.0[0],
                group.input_indices.clone(),
                group.output_indices.clone(),
            )
        })
        .collect();
    assert_eq!(
        summary,
        vec![
            (ScriptGroupType::Lock, 1, vec![0, 2], vec![]),
            (ScriptGroupType::Lock, 2, vec![1], vec![]),
            (ScriptGroupType::Type, 3, vec![1], vec![0]),
            (ScriptGroupType::Type, 4, vec![], vec![2]),
        ]
    );
}

#[test]
fn group_hash_is_script_hash() {
    for group in extract_script_groups(&sample_mock()) {
        assert_eq!(group.script_hash, group.script.calc_script_hash());
    }
}

#[test]
fn output_locks_do_not_form_groups() {
    let mut mock = sample_mock();
    mock.mock_info.inputs.clear();
    mock.tx.inputs.clear();
    let groups = extract_script_groups(&mock);
    assert!(groups
        .iter()
        .all(|group| group.group_type == ScriptGroupType::Type));
    assert_eq!(groups.len(), 2);
}

#[test]
fn same_script_as_lock_and_type_is_two_groups() {
    let shared = script(7, ScriptHashType::Data);
    let mut mock = sample_mock();
    mock.mock_info.inputs[0].output.lock = shared.clone();
    mock.mock_info.inputs[0].output.type_ = Some(shared.clone());

    let groups: Vec<_> = extract_script_groups(&mock)
        .into_iter()
        .filter(|group| group.script == shared)
        .collect();
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].group_type, ScriptGroupType::Lock);
    assert_eq!(groups[1].group_type, ScriptGroupType::Type);
}

#[test]
fn empty_transaction_has_no_groups() {
    assert!(extract_script_groups(&MockTransaction::default()).is_empty());
}

#[test]
fn group_type_text() {
    assert_eq!("lock".parse::<ScriptGroupType>().ok(), Some(ScriptGroupType::Lock));
    assert_eq!("type".parse::<ScriptGroupType>().ok(), Some(ScriptGroupType::Type));
    assert!("Lock".parse::<ScriptGroupType>().is_err());
    assert_eq!(ScriptGroupType::Type.to_string(), "Type");
    assert_eq!(ScriptGroupType::Type.as_str(), "type");
}
