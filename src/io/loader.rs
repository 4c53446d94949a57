// src/io/loader.rs

use crate::error::RebalanceResult;
use crate::model::network::NetworkConfig;
use crate::model::stock::{ForecastSet, StockSnapshot};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Loads and validates a network configuration from a JSON file.
///
/// Keeping the warehouse/product sets, distance matrix, and rate in a
/// config file means the optimizer core can be pointed at any network
/// fixture without recompiling.
pub fn load_network<P: AsRef<Path>>(path: P) -> RebalanceResult<NetworkConfig> {
    let reader = BufReader::new(File::open(path)?);
    let network: NetworkConfig = serde_json::from_reader(reader)?;
    network.validate()?;
    Ok(network)
}

/// Loads a stock snapshot (`warehouse -> product -> quantity`) from JSON.
pub fn load_stocks<P: AsRef<Path>>(path: P) -> RebalanceResult<StockSnapshot> {
    let reader = BufReader::new(File::open(path)?);
    Ok(serde_json::from_reader(reader)?)
}

/// Loads a forecast set (`warehouse -> {predictions: product -> series}`)
/// from JSON.
pub fn load_forecasts<P: AsRef<Path>>(path: P) -> RebalanceResult<ForecastSet> {
    let reader = BufReader::new(File::open(path)?);
    Ok(serde_json::from_reader(reader)?)
}
