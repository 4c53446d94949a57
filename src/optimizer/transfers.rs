// src/optimizer/transfers.rs

use crate::error::{RebalanceError, RebalanceResult};
use crate::model::network::{NetworkConfig, ProductId};
use crate::model::stock::{ProductBalance, Transfer};
use crate::strategy::traits::{SourceCandidate, SourcingPolicy};

/// Recommends transfers for a single product from its balance picture.
///
/// Warehouses are partitioned by the sign of their surplus; a warehouse
/// sitting at exactly zero joins neither side. Both the deficit list and
/// the candidate pool follow configured warehouse order, so the output
/// ordering is stable across runs.
pub fn recommend_transfers(
    network: &NetworkConfig,
    product: &ProductId,
    balance: &ProductBalance,
    policy: &dyn SourcingPolicy,
) -> RebalanceResult<Vec<Transfer>> {
    let mut candidates: Vec<SourceCandidate> = Vec::new();
    let mut deficits = Vec::new();

    for warehouse in &network.warehouses {
        match balance.surplus.get(warehouse) {
            Some(&s) if s > 0.0 => candidates.push(SourceCandidate {
                warehouse: warehouse.clone(),
                remaining: s,
            }),
            Some(&s) if s < 0.0 => deficits.push((warehouse, -s)),
            _ => {}
        }
    }

    if !deficits.is_empty() && candidates.is_empty() {
        return Err(RebalanceError::NoSurplusAvailable {
            product: product.clone(),
            warehouse: deficits[0].0.clone(),
        });
    }

    let mut transfers = Vec::new();
    for (deficit, need) in deficits {
        transfers.extend(policy.cover_deficit(product, deficit, need, &mut candidates, network)?);
    }
    Ok(transfers)
}
