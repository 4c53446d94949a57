// src/strategy/implementations.rs

use crate::error::{RebalanceError, RebalanceResult};
use crate::model::network::{NetworkConfig, ProductId, SourcingStrategy, WarehouseId};
use crate::model::stock::Transfer;
use crate::strategy::traits::{SourceCandidate, SourcingPolicy};

// =========================================================================
// 1. Nearest-Source Policy (Naive Greedy)
// =========================================================================

/// Matches each deficit to the single surplus warehouse with the lowest
/// transfer cost, which with a fixed per-km rate is simply the nearest.
///
/// The chosen source's surplus is deliberately NOT drawn down: the same
/// warehouse can be picked for several deficits even when its surplus
/// cannot cover them combined. This reproduces the behavior the network
/// planners have been running with; treat it as a documented limitation
/// rather than something to quietly correct.
#[derive(Debug, Clone)]
pub struct NearestSourcePolicy;

impl NearestSourcePolicy {
    pub fn new() -> Self {
        Self
    }
}

impl SourcingPolicy for NearestSourcePolicy {
    fn cover_deficit(
        &self,
        product: &ProductId,
        deficit: &WarehouseId,
        need: f64,
        candidates: &mut [SourceCandidate],
        network: &NetworkConfig,
    ) -> RebalanceResult<Vec<Transfer>> {
        // A minimum over an empty set is a precondition violation, so
        // guard it with a typed error instead of letting it slide.
        let mut best: Option<(&WarehouseId, f64)> = None;
        for candidate in candidates.iter() {
            let cost = network.transfer_cost(&candidate.warehouse, deficit, need);
            match best {
                // Strict less-than keeps ties on the first candidate in
                // configured order.
                Some((_, best_cost)) if cost >= best_cost => {}
                _ => best = Some((&candidate.warehouse, cost)),
            }
        }

        let (source, cost) = best.ok_or_else(|| RebalanceError::NoSurplusAvailable {
            product: product.clone(),
            warehouse: deficit.clone(),
        })?;

        Ok(vec![Transfer {
            from: source.clone(),
            to: deficit.clone(),
            quantity: need,
            cost,
        }])
    }
}

// =========================================================================
// 2. Capacity-Aware Policy
// =========================================================================

/// Hardened variant of the greedy assignment: still nearest-first, but
/// each shipment draws the source's surplus down, and a deficit may be
/// split across several sources when the nearest one runs dry.
///
/// Any shortfall left after all surplus is exhausted is the network-wide
/// order signal's problem, not a transfer's.
#[derive(Debug, Clone)]
pub struct CapacityAwarePolicy;

impl CapacityAwarePolicy {
    pub fn new() -> Self {
        Self
    }
}

impl SourcingPolicy for CapacityAwarePolicy {
    fn cover_deficit(
        &self,
        _product: &ProductId,
        deficit: &WarehouseId,
        mut need: f64,
        candidates: &mut [SourceCandidate],
        network: &NetworkConfig,
    ) -> RebalanceResult<Vec<Transfer>> {
        // The no-surplus-at-all case is rejected by the recommender
        // before any deficit is visited; a pool merely drained by
        // earlier deficits is not an error.
        let mut transfers = Vec::new();
        while need > 0.0 {
            let mut best: Option<usize> = None;
            for (i, candidate) in candidates.iter().enumerate() {
                if candidate.remaining <= 0.0 {
                    continue;
                }
                let closer = match best {
                    Some(j) => {
                        network.distance(&candidate.warehouse, deficit)
                            < network.distance(&candidates[j].warehouse, deficit)
                    }
                    None => true,
                };
                if closer {
                    best = Some(i);
                }
            }

            // Everything is drained; the remainder shows up in the
            // order-needed figure instead.
            let Some(i) = best else { break };

            let quantity = need.min(candidates[i].remaining);
            let source = candidates[i].warehouse.clone();
            let cost = network.transfer_cost(&source, deficit, quantity);

            candidates[i].remaining -= quantity;
            need -= quantity;

            transfers.push(Transfer {
                from: source,
                to: deficit.clone(),
                quantity,
                cost,
            });
        }

        Ok(transfers)
    }
}

/// Maps the configured toggle onto a concrete policy object.
pub fn policy_for(strategy: SourcingStrategy) -> Box<dyn SourcingPolicy> {
    match strategy {
        SourcingStrategy::NearestSource => Box::new(NearestSourcePolicy::new()),
        SourcingStrategy::CapacityAware => Box::new(CapacityAwarePolicy::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::network::TransportRate;
    use std::collections::HashMap;

    fn line_network() -> NetworkConfig {
        // Three warehouses on a line: A --100-- B --100-- C.
        let ids: Vec<WarehouseId> = ["A", "B", "C"].iter().map(|s| WarehouseId::from(*s)).collect();
        let km = [[0.0, 100.0, 200.0], [100.0, 0.0, 100.0], [200.0, 100.0, 0.0]];
        let mut distances = HashMap::new();
        for (i, a) in ids.iter().enumerate() {
            let mut row = HashMap::new();
            for (j, b) in ids.iter().enumerate() {
                row.insert(b.clone(), km[i][j]);
            }
            distances.insert(a.clone(), row);
        }
        NetworkConfig {
            warehouses: ids,
            products: vec![ProductId::from("P1")],
            distances,
            rate: TransportRate::Flat { per_km: 0.5 },
            strategy: SourcingStrategy::NearestSource,
        }
    }

    fn candidates(pairs: &[(&str, f64)]) -> Vec<SourceCandidate> {
        pairs
            .iter()
            .map(|(w, r)| SourceCandidate {
                warehouse: WarehouseId::from(*w),
                remaining: *r,
            })
            .collect()
    }

    #[test]
    fn nearest_source_picks_the_closest_warehouse() {
        let network = line_network();
        let mut pool = candidates(&[("A", 5.0), ("B", 5.0)]);
        let transfers = NearestSourcePolicy::new()
            .cover_deficit(
                &ProductId::from("P1"),
                &WarehouseId::from("C"),
                20.0,
                &mut pool,
                &network,
            )
            .unwrap();
        assert_eq!(transfers.len(), 1);
        assert_eq!(transfers[0].from, WarehouseId::from("B"));
        assert_eq!(transfers[0].quantity, 20.0);
        assert_eq!(transfers[0].cost, 100.0 * 0.5 * 20.0);
    }

    #[test]
    fn nearest_source_breaks_ties_on_configured_order() {
        let network = line_network();
        // A and C are both 100 km from B; A is listed first.
        let mut pool = candidates(&[("A", 5.0), ("C", 5.0)]);
        let transfers = NearestSourcePolicy::new()
            .cover_deficit(
                &ProductId::from("P1"),
                &WarehouseId::from("B"),
                10.0,
                &mut pool,
                &network,
            )
            .unwrap();
        assert_eq!(transfers[0].from, WarehouseId::from("A"));
    }

    #[test]
    fn nearest_source_does_not_draw_surplus_down() {
        let network = line_network();
        let mut pool = candidates(&[("B", 5.0)]);
        NearestSourcePolicy::new()
            .cover_deficit(
                &ProductId::from("P1"),
                &WarehouseId::from("C"),
                20.0,
                &mut pool,
                &network,
            )
            .unwrap();
        // Still 5.0: the naive greedy can over-commit a source.
        assert_eq!(pool[0].remaining, 5.0);
    }

    #[test]
    fn nearest_source_errors_on_empty_candidate_set() {
        let network = line_network();
        let result = NearestSourcePolicy::new().cover_deficit(
            &ProductId::from("P1"),
            &WarehouseId::from("C"),
            20.0,
            &mut [],
            &network,
        );
        assert!(matches!(
            result,
            Err(RebalanceError::NoSurplusAvailable { .. })
        ));
    }

    #[test]
    fn capacity_aware_splits_across_sources_when_the_nearest_runs_dry() {
        let network = line_network();
        let mut pool = candidates(&[("A", 30.0), ("B", 5.0)]);
        let transfers = CapacityAwarePolicy::new()
            .cover_deficit(
                &ProductId::from("P1"),
                &WarehouseId::from("C"),
                20.0,
                &mut pool,
                &network,
            )
            .unwrap();
        // B (100 km) empties first, then A (200 km) covers the rest.
        assert_eq!(transfers.len(), 2);
        assert_eq!(transfers[0].from, WarehouseId::from("B"));
        assert_eq!(transfers[0].quantity, 5.0);
        assert_eq!(transfers[1].from, WarehouseId::from("A"));
        assert_eq!(transfers[1].quantity, 15.0);
        assert_eq!(pool[0].remaining, 15.0);
        assert_eq!(pool[1].remaining, 0.0);
    }

    #[test]
    fn capacity_aware_emits_nothing_once_the_pool_is_drained() {
        let network = line_network();
        let mut pool = candidates(&[("A", 0.0), ("B", 0.0)]);
        let transfers = CapacityAwarePolicy::new()
            .cover_deficit(
                &ProductId::from("P1"),
                &WarehouseId::from("C"),
                20.0,
                &mut pool,
                &network,
            )
            .unwrap();
        assert!(transfers.is_empty());
    }

    #[test]
    fn capacity_aware_leaves_unfillable_remainder_to_order_signal() {
        let network = line_network();
        let mut pool = candidates(&[("B", 8.0)]);
        let transfers = CapacityAwarePolicy::new()
            .cover_deficit(
                &ProductId::from("P1"),
                &WarehouseId::from("C"),
                20.0,
                &mut pool,
                &network,
            )
            .unwrap();
        assert_eq!(transfers.len(), 1);
        assert_eq!(transfers[0].quantity, 8.0);
    }
}
