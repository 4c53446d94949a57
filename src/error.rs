// src/error.rs

//! Failure modes of an optimization run.
//!
//! Every failure has a named variant; a run either produces a full
//! `DistributionPlan` or one of these. No partial results.

use crate::model::network::{ProductId, WarehouseId};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RebalanceError {
    /// The request carried no stock data or no forecasts at all.
    /// Rejected before any computation starts.
    #[error("missing input: {0}")]
    MissingInput(&'static str),

    /// A stock or forecast entry references a warehouse outside the
    /// configured network.
    #[error("unknown warehouse: {0}")]
    UnknownWarehouse(WarehouseId),

    /// A stock or forecast entry references a product outside the
    /// configured product list.
    #[error("unknown product: {0}")]
    UnknownProduct(ProductId),

    /// A warehouse is in deficit but no warehouse in the network holds
    /// a surplus of that product, so no transfer source exists.
    #[error("no surplus warehouse available to cover deficit of {product} at {warehouse}")]
    NoSurplusAvailable {
        product: ProductId,
        warehouse: WarehouseId,
    },

    /// The network configuration itself is unusable (asymmetric or
    /// incomplete distance matrix, negative distances, empty sets).
    #[error("invalid network configuration: {0}")]
    InvalidNetwork(String),

    /// Synthetic demand generation was given unusable distribution
    /// parameters (e.g., a negative standard deviation).
    #[error("invalid demand distribution: {0}")]
    Distribution(#[from] rand_distr::NormalError),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}

/// Result type alias for optimizer operations.
pub type RebalanceResult<T> = Result<T, RebalanceError>;
