// src/model/stock.rs

use crate::model::network::{ProductId, WarehouseId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Current on-hand inventory per (warehouse, product).
///
/// Externally supplied and read-only to the optimizer. A missing entry
/// simply means that warehouse holds none of that product.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StockSnapshot(pub HashMap<WarehouseId, HashMap<ProductId, f64>>);

impl StockSnapshot {
    pub fn quantity(&self, warehouse: &WarehouseId, product: &ProductId) -> f64 {
        self.0
            .get(warehouse)
            .and_then(|products| products.get(product))
            .copied()
            .unwrap_or(0.0)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Forecast demand for one warehouse: per product, one expected demand
/// figure per future day. Produced by an external forecasting
/// collaborator; the optimizer only ever consumes the sum.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WarehouseForecast {
    pub predictions: HashMap<ProductId, Vec<f64>>,
}

/// Forecasts for the whole network, keyed by warehouse.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ForecastSet(pub HashMap<WarehouseId, WarehouseForecast>);

impl ForecastSet {
    /// Total forecast demand over the horizon, or `None` if this
    /// (warehouse, product) pair has no forecast data at all.
    pub fn required(&self, warehouse: &WarehouseId, product: &ProductId) -> Option<f64> {
        self.0
            .get(warehouse)
            .and_then(|f| f.predictions.get(product))
            .map(|series| series.iter().sum())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Shortage/surplus picture for a single product across the network.
///
/// Warehouses without forecast data for the product appear in neither
/// map and contribute nothing to `order_needed`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProductBalance {
    /// Forecast demand summed over the horizon, per warehouse.
    pub required: HashMap<WarehouseId, f64>,
    /// Current stock minus required; negative means deficit.
    pub surplus: HashMap<WarehouseId, f64>,
    /// Network-wide shortfall no inter-warehouse transfer can resolve.
    pub order_needed: f64,
}

/// A recommended stock movement. Produced once, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Transfer {
    pub from: WarehouseId,
    pub to: WarehouseId,
    pub quantity: f64,
    pub cost: f64,
}

/// The full result of one optimization run, keyed by product.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DistributionPlan {
    pub required_stock: HashMap<ProductId, HashMap<WarehouseId, f64>>,
    pub surplus: HashMap<ProductId, HashMap<WarehouseId, f64>>,
    pub order_needed: HashMap<ProductId, f64>,
    pub transfers: HashMap<ProductId, Vec<Transfer>>,
}
