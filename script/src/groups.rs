use crate::types::{ScriptGroup, ScriptGroupType};
use ckb_replay_fixture::MockTransaction;
use ckb_replay_types::{core::Script, H256};
use linked_hash_map::LinkedHashMap;

type Groups = LinkedHashMap<(ScriptGroupType, H256), ScriptGroup>;

/// Collects the script groups of the mock transaction in first-encounter order.
///
/// The inputs are scanned first: each resolved input joins the group of its lock script and, if
/// any, the group of its type script. The outputs of the transaction are scanned next and only
/// join type groups.
pub fn extract_script_groups(mock: &MockTransaction) -> Vec<ScriptGroup> {
    let mut groups = Groups::new();

    for (i, input) in mock.mock_info.inputs.iter().enumerate() {
        group_of(&mut groups, &input.output.lock, ScriptGroupType::Lock)
            .input_indices
            .push(i);
        if let Some(type_script) = &input.output.type_ {
            group_of(&mut groups, type_script, ScriptGroupType::Type)
                .input_indices
                .push(i);
        }
    }
    for (i, output) in mock.tx.outputs.iter().enumerate() {
        if let Some(type_script) = &output.type_ {
            group_of(&mut groups, type_script, ScriptGroupType::Type)
                .output_indices
                .push(i);
        }
    }

    groups.into_iter().map(|(_, group)| group).collect()
}

fn group_of<'a>(
    groups: &'a mut Groups,
    script: &Script,
    group_type: ScriptGroupType,
) -> &'a mut ScriptGroup {
    let group = ScriptGroup::new(script, group_type);
    groups
        .entry((group_type, group.script_hash))
        .or_insert(group)
}
