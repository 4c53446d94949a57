// src/strategy/traits.rs

use crate::error::RebalanceResult;
use crate::model::network::{NetworkConfig, ProductId, WarehouseId};
use crate::model::stock::Transfer;
use std::fmt::Debug;

/// A candidate source warehouse and how much surplus it has left to give.
///
/// Candidates are listed in configured warehouse order, which is what
/// makes tie-breaking deterministic.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceCandidate {
    pub warehouse: WarehouseId,
    pub remaining: f64,
}

/// Decides which surplus warehouse(s) cover a single deficit.
///
/// We require `Debug` so the chosen policy can be printed alongside a
/// plan, and `Send` + `Sync` so an optimizer can be shared across threads.
pub trait SourcingPolicy: Debug + Send + Sync {
    /// Produces the transfers covering one deficit warehouse.
    ///
    /// # Arguments
    /// * `product` - The product being rebalanced (for error reporting).
    /// * `deficit` - The warehouse that is short.
    /// * `need` - Magnitude of the shortfall (always > 0).
    /// * `candidates` - Surplus warehouses in configured order. A policy
    ///   that draws stock down mutates `remaining` in place so the
    ///   drawdown carries over to the next deficit; a policy that does
    ///   not leaves the slice untouched.
    /// * `network` - Distance matrix and transport rate.
    fn cover_deficit(
        &self,
        product: &ProductId,
        deficit: &WarehouseId,
        need: f64,
        candidates: &mut [SourceCandidate],
        network: &NetworkConfig,
    ) -> RebalanceResult<Vec<Transfer>>;
}
