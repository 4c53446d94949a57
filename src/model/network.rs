// src/model/network.rs

use crate::error::{RebalanceError, RebalanceResult};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Identifier of a warehouse in the network.
///
/// The set of valid identifiers is whatever `NetworkConfig.warehouses`
/// enumerates; nothing is compiled in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WarehouseId(pub String);

/// Identifier of a product (SKU) tracked by the network.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub String);

impl fmt::Display for WarehouseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for WarehouseId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<&str> for ProductId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// How the per-kilometer transport rate is obtained.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransportRate {
    /// A fixed $/km figure.
    Flat { per_km: f64 },
    /// Derived from a vehicle profile:
    /// fuel burned per km times fuel price, plus wear and tear.
    Vehicle {
        fuel_consumption_per_km: f64,
        fuel_price_per_unit: f64,
        maintenance_per_km: f64,
    },
}

impl TransportRate {
    /// The effective $/km rate.
    pub fn per_km(&self) -> f64 {
        match self {
            TransportRate::Flat { per_km } => *per_km,
            TransportRate::Vehicle {
                fuel_consumption_per_km,
                fuel_price_per_unit,
                maintenance_per_km,
            } => fuel_consumption_per_km * fuel_price_per_unit + maintenance_per_km,
        }
    }
}

/// Which source-selection behavior the transfer recommender uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SourcingStrategy {
    /// One nearest source per deficit; source surplus is never
    /// decremented, so a source can be over-committed across deficits.
    #[default]
    NearestSource,
    /// Nearest source first, but surplus is drawn down and a deficit
    /// may be split across several sources.
    CapacityAware,
}

/// Static description of the warehouse network.
///
/// The warehouse and product lists double as the iteration order for
/// every computation, which is what makes runs deterministic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkConfig {
    pub warehouses: Vec<WarehouseId>,
    pub products: Vec<ProductId>,
    /// Pairwise distances in km. Must be symmetric, fully defined over
    /// `warehouses`, non-negative, and zero on the diagonal.
    pub distances: HashMap<WarehouseId, HashMap<WarehouseId, f64>>,
    pub rate: TransportRate,
    #[serde(default)]
    pub strategy: SourcingStrategy,
}

impl NetworkConfig {
    /// Checks the configuration once, up front. A bad matrix is a
    /// deployment mistake, not something to discover per request.
    pub fn validate(&self) -> RebalanceResult<()> {
        if self.warehouses.is_empty() {
            return Err(RebalanceError::InvalidNetwork(
                "warehouse list is empty".to_string(),
            ));
        }
        if self.products.is_empty() {
            return Err(RebalanceError::InvalidNetwork(
                "product list is empty".to_string(),
            ));
        }
        if self.rate.per_km() < 0.0 {
            return Err(RebalanceError::InvalidNetwork(
                "transport rate is negative".to_string(),
            ));
        }

        for a in &self.warehouses {
            for b in &self.warehouses {
                let d = self
                    .distances
                    .get(a)
                    .and_then(|row| row.get(b))
                    .copied()
                    .ok_or_else(|| {
                        RebalanceError::InvalidNetwork(format!(
                            "distance {} -> {} is not defined",
                            a, b
                        ))
                    })?;

                if d < 0.0 {
                    return Err(RebalanceError::InvalidNetwork(format!(
                        "distance {} -> {} is negative",
                        a, b
                    )));
                }
                if a == b && d != 0.0 {
                    return Err(RebalanceError::InvalidNetwork(format!(
                        "distance {} -> {} must be zero",
                        a, b
                    )));
                }
                let mirrored = self
                    .distances
                    .get(b)
                    .and_then(|row| row.get(a))
                    .copied()
                    .ok_or_else(|| {
                        RebalanceError::InvalidNetwork(format!(
                            "distance {} -> {} is not defined",
                            b, a
                        ))
                    })?;
                if mirrored != d {
                    return Err(RebalanceError::InvalidNetwork(format!(
                        "distance matrix is asymmetric between {} and {}",
                        a, b
                    )));
                }
            }
        }
        Ok(())
    }

    /// Distance in km between two configured warehouses.
    ///
    /// Callers only pass identifiers drawn from `self.warehouses`, and
    /// `validate()` guarantees the matrix covers all of those.
    pub fn distance(&self, from: &WarehouseId, to: &WarehouseId) -> f64 {
        self.distances[from][to]
    }

    /// Cost of moving `quantity` units from `from` to `to`:
    /// distance x rate x quantity.
    pub fn transfer_cost(&self, from: &WarehouseId, to: &WarehouseId, quantity: f64) -> f64 {
        self.distance(from, to) * self.rate.per_km() * quantity
    }

    pub fn contains_warehouse(&self, id: &WarehouseId) -> bool {
        self.warehouses.contains(id)
    }

    pub fn contains_product(&self, id: &ProductId) -> bool {
        self.products.contains(id)
    }
}
