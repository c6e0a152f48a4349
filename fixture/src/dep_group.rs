use crate::{error::format_error, mock_tx::MockCellDep, resolver::OutPointResolver};
use ckb_replay_error::Error;
use ckb_replay_rpc_client::ChainProvider;
use ckb_replay_types::{
    core::{CellDep, DepType},
    packed::DepGroupData,
};
use log::{debug, warn};

/// Resolves every member of a dep group into a `code` cell dep, in the order stored in the group
/// data.
///
/// A size mismatch in the group data is logged and the complete entries are still expanded. An
/// unresolvable member fails the whole expansion.
pub async fn expand_dep_group<P: ChainProvider + ?Sized>(
    resolver: &OutPointResolver<'_, P>,
    group: &MockCellDep,
) -> Result<Vec<MockCellDep>, Error> {
    let decoded = DepGroupData::decode(&group.data);
    if let Some(mismatch) = &decoded.mismatch {
        warn!(
            "dep group {}: {:#}, expanding {} members",
            group.cell_dep.out_point,
            format_error(mismatch.clone()),
            decoded.out_points.len()
        );
    }
    debug!(
        "dep group {} has {} members",
        group.cell_dep.out_point,
        decoded.out_points.len()
    );

    let mut members = Vec::with_capacity(decoded.out_points.len());
    for out_point in decoded.out_points {
        let cell = resolver.resolve(&out_point).await?;
        let cell_dep = CellDep {
            out_point,
            dep_type: DepType::Code,
        };
        members.push(MockCellDep::code(cell_dep, cell));
    }
    Ok(members)
}
