use crate::{ReprMockCellDep, ReprMockInput, ReprMockTransaction, H256};

#[test]
fn header_is_omitted_when_absent() {
    let input = ReprMockInput::default();
    let value = serde_json::to_value(&input).unwrap();
    assert!(value.get("header").is_none());

    let dep = ReprMockCellDep {
        header: Some(H256([7; 32])),
        ..Default::default()
    };
    let value = serde_json::to_value(&dep).unwrap();
    assert_eq!(value["header"], serde_json::json!(format!("{:#x}", H256([7; 32]))));
}

#[test]
fn header_defaults_to_none() {
    let json = serde_json::json!({
        "cell_dep": {
            "out_point": {
                "tx_hash": format!("{:#x}", H256::zero()),
                "index": "0x0"
            },
            "dep_type": "code"
        },
        "output": {
            "capacity": "0x0",
            "lock": {
                "code_hash": format!("{:#x}", H256::zero()),
                "hash_type": "data",
                "args": "0x"
            },
            "type": null
        },
        "data": "0x00"
    });
    let dep: ReprMockCellDep = serde_json::from_value(json).unwrap();
    assert!(dep.header.is_none());
    assert_eq!(dep.data.as_bytes(), &[0]);
}

#[test]
fn top_level_shape() {
    let value = serde_json::to_value(ReprMockTransaction::default()).unwrap();
    let object = value.as_object().unwrap();
    assert_eq!(object.len(), 2);
    assert!(object["mock_info"]["header_deps"].as_array().unwrap().is_empty());
    assert_eq!(object["tx"]["version"], "0x0");
}

#[test]
fn unknown_fields_are_ignored() {
    let json = serde_json::json!({
        "mock_info": {
            "inputs": [],
            "cell_deps": [],
            "header_deps": [],
            "extensions": []
        },
        "tx": {
            "version": "0x0",
            "cell_deps": [],
            "header_deps": [],
            "inputs": [],
            "outputs": [],
            "outputs_data": [],
            "witnesses": []
        },
        "comment": "dumped by a newer debugger"
    });
    let mock: ReprMockTransaction = serde_json::from_value(json).unwrap();
    assert_eq!(mock, ReprMockTransaction::default());
}
