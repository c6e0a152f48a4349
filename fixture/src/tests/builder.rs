use super::setup;
use crate::{FixtureBuilder, Progress, Stage};
use ckb_replay_error::ErrorKind;
use ckb_replay_types::{
    bytes::Bytes,
    core::{DepType, OutPoint},
    H256,
};
use pretty_assertions::assert_eq;

#[tokio::test]
async fn inputs_are_aligned_with_transaction() {
    let fixture = setup();
    let tx = fixture.spending_tx();
    let mock = FixtureBuilder::new(&fixture.chain)
        .build(tx.clone(), &mut |_: Progress| {})
        .await
        .unwrap();

    assert_eq!(mock.tx, tx);
    assert_eq!(mock.mock_info.inputs.len(), tx.inputs.len());
    for (mock_input, input) in mock.mock_info.inputs.iter().zip(tx.inputs.iter()) {
        assert_eq!(&mock_input.input, input);
    }
    assert_eq!(mock.mock_info.inputs[0].output.capacity, 1000);
    assert_eq!(mock.mock_info.inputs[1].output.capacity, 2000);
    // outputs_data has a single item, the second input falls back to empty data
    assert_eq!(mock.mock_info.inputs[1].data, Bytes::new());
}

#[tokio::test]
async fn dep_group_members_follow_the_group() {
    let fixture = setup();
    let tx = fixture.spending_tx();
    let mock = FixtureBuilder::new(&fixture.chain)
        .build(tx.clone(), &mut |_: Progress| {})
        .await
        .unwrap();

    let deps = &mock.mock_info.cell_deps;
    let summary: Vec<(OutPoint, DepType)> = deps
        .iter()
        .map(|dep| (dep.cell_dep.out_point, dep.cell_dep.dep_type))
        .collect();
    assert_eq!(
        summary,
        vec![
            (OutPoint::new(fixture.group_tx, 0), DepType::DepGroup),
            (OutPoint::new(fixture.code_tx, 0), DepType::Code),
            (OutPoint::new(fixture.code_tx, 1), DepType::Code),
            (OutPoint::new(fixture.code_tx, 1), DepType::Code),
        ]
    );
    assert_eq!(deps[1].data, Bytes::from_static(b"lock-binary"));
    assert_eq!(deps[2].data, Bytes::from_static(b"type-binary"));
    // expanded members never leak into the transaction
    assert_eq!(mock.tx.cell_deps.len(), 2);
}

#[tokio::test]
async fn header_deps_are_resolved() {
    let fixture = setup();
    let mock = FixtureBuilder::new(&fixture.chain)
        .build(fixture.spending_tx(), &mut |_: Progress| {})
        .await
        .unwrap();
    assert_eq!(mock.mock_info.header_deps.len(), 1);
    assert_eq!(mock.mock_info.header_deps[0].hash, fixture.header);
    assert_eq!(mock.mock_info.header_deps[0].inner.number, 7);
}

#[tokio::test]
async fn progress_events_in_order() {
    let fixture = setup();
    let mut chain = fixture.chain.clone();
    let hash = chain.insert_transaction(fixture.spending_tx());
    let mut events = Vec::new();
    FixtureBuilder::new(&chain)
        .build_from_hash(&hash, &mut |progress: Progress| events.push(progress))
        .await
        .unwrap();

    let summary: Vec<(Stage, usize, usize)> = events
        .iter()
        .map(|progress| (progress.stage, progress.current, progress.total))
        .collect();
    assert_eq!(
        summary,
        vec![
            (Stage::FetchingTx, 0, 1),
            (Stage::FetchingTx, 1, 1),
            (Stage::FetchingInputs, 0, 2),
            (Stage::FetchingInputs, 1, 2),
            (Stage::FetchingInputs, 2, 2),
            (Stage::FetchingCellDeps, 0, 2),
            (Stage::FetchingCellDeps, 1, 2),
            (Stage::FetchingCellDeps, 2, 2),
            (Stage::FetchingHeaders, 0, 1),
            (Stage::FetchingHeaders, 1, 1),
            (Stage::Done, 1, 1),
        ]
    );
    assert_eq!(events[3].message, "fetching input cells (1/2)");
    assert_eq!(events[10].to_string(), "[done] done");
}

#[tokio::test]
async fn no_header_stage_without_header_deps() {
    let fixture = setup();
    let mut tx = fixture.spending_tx();
    tx.header_deps.clear();
    let mut stages = Vec::new();
    FixtureBuilder::new(&fixture.chain)
        .build(tx, &mut |progress: Progress| stages.push(progress.stage))
        .await
        .unwrap();
    assert!(!stages.contains(&Stage::FetchingHeaders));
    assert_eq!(stages.last(), Some(&Stage::Done));
}

#[tokio::test]
async fn missing_input_transaction_aborts() {
    let fixture = setup();
    let mut tx = fixture.spending_tx();
    tx.inputs[1].previous_output = OutPoint::new(H256([0xee; 32]), 0);
    let mut done = false;
    let err = FixtureBuilder::new(&fixture.chain)
        .build(tx, &mut |progress: Progress| done |= progress.stage == Stage::Done)
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert!(!done);
}

#[tokio::test]
async fn out_of_bounds_index_aborts() {
    let fixture = setup();
    let mut tx = fixture.spending_tx();
    tx.cell_deps[1].out_point = OutPoint::new(fixture.code_tx, 2);
    let err = FixtureBuilder::new(&fixture.chain)
        .build(tx, &mut |_: Progress| {})
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert!(err.to_string().contains("out of bounds"));
}

#[tokio::test]
async fn missing_header_aborts() {
    let fixture = setup();
    let mut tx = fixture.spending_tx();
    tx.header_deps.push(H256([0xab; 32]));
    let err = FixtureBuilder::new(&fixture.chain)
        .build(tx, &mut |_: Progress| {})
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[tokio::test]
async fn unknown_transaction_hash() {
    let fixture = setup();
    let err = FixtureBuilder::new(&fixture.chain)
        .build_from_hash(&H256([0xcd; 32]), &mut |_: Progress| {})
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
}
