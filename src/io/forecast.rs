// src/io/forecast.rs

use crate::error::RebalanceResult;
use crate::model::network::NetworkConfig;
use crate::model::stock::{ForecastSet, StockSnapshot, WarehouseForecast};
use rand::thread_rng;
use rand_distr::{Distribution, Normal};

/// Generates a forecast series where every day has the exact same
/// demand. Useful for stability checks and worked examples.
pub fn generate_constant_forecast(days: usize, value: f64) -> Vec<f64> {
    vec![value; days]
}

/// Generates a forecast series from a Normal (bell curve) distribution.
///
/// Samples are rounded to whole units and clamped at zero — demand
/// cannot be negative, and the forecasting service upstream rounds its
/// predictions the same way.
///
/// # Arguments
/// * `days` - Length of the forecast horizon.
/// * `mean` - Average daily demand (e.g., 50.0).
/// * `std_dev` - Volatility of daily demand (e.g., 10.0).
pub fn generate_normal_forecast(days: usize, mean: f64, std_dev: f64) -> RebalanceResult<Vec<f64>> {
    let mut rng = thread_rng();
    let normal = Normal::new(mean, std_dev)?;

    let mut series = Vec::with_capacity(days);
    for _ in 0..days {
        let val: f64 = normal.sample(&mut rng);
        series.push(val.round().max(0.0));
    }
    Ok(series)
}

/// Builds a full forecast set covering every configured warehouse and
/// product. Demo/test fixture; a real deployment gets these from its
/// forecasting collaborator.
pub fn generate_demo_forecasts(
    network: &NetworkConfig,
    days: usize,
    mean: f64,
    std_dev: f64,
) -> RebalanceResult<ForecastSet> {
    let mut set = ForecastSet::default();
    for warehouse in &network.warehouses {
        let mut forecast = WarehouseForecast::default();
        for product in &network.products {
            forecast
                .predictions
                .insert(product.clone(), generate_normal_forecast(days, mean, std_dev)?);
        }
        set.0.insert(warehouse.clone(), forecast);
    }
    Ok(set)
}

/// Builds a random stock snapshot over the configured network.
/// Demo/test fixture; a real deployment reads its stock store.
pub fn generate_demo_stocks(
    network: &NetworkConfig,
    mean: f64,
    std_dev: f64,
) -> RebalanceResult<StockSnapshot> {
    let mut rng = thread_rng();
    let normal = Normal::new(mean, std_dev)?;

    let mut snapshot = StockSnapshot::default();
    for warehouse in &network.warehouses {
        let products = snapshot.0.entry(warehouse.clone()).or_default();
        for product in &network.products {
            let qty: f64 = normal.sample(&mut rng);
            products.insert(product.clone(), qty.round().max(0.0));
        }
    }
    Ok(snapshot)
}
