// src/optimizer/balance.rs

use crate::model::network::{NetworkConfig, ProductId};
use crate::model::stock::{ForecastSet, ProductBalance, StockSnapshot};
use std::collections::HashMap;

/// Computes the shortage/surplus picture for one product.
///
/// Warehouses are visited in configured order. A warehouse whose
/// forecast carries no data for this product is skipped outright: it
/// contributes nothing to the network totals and gets no surplus entry.
/// That is a deliberate silent-skip, not an error; forecast coverage is
/// the forecasting collaborator's problem.
pub fn product_balance(
    network: &NetworkConfig,
    product: &ProductId,
    stocks: &StockSnapshot,
    forecasts: &ForecastSet,
) -> ProductBalance {
    let mut balance = ProductBalance::default();
    let mut total_required = 0.0;
    let mut total_current = 0.0;

    for warehouse in &network.warehouses {
        let Some(required) = forecasts.required(warehouse, product) else {
            continue;
        };
        let current = stocks.quantity(warehouse, product);

        balance.required.insert(warehouse.clone(), required);
        balance.surplus.insert(warehouse.clone(), current - required);

        total_required += required;
        total_current += current;
    }

    balance.order_needed = (total_required - total_current).max(0.0);
    balance
}

/// Balances for every configured product, keyed by product.
pub fn compute_balances(
    network: &NetworkConfig,
    stocks: &StockSnapshot,
    forecasts: &ForecastSet,
) -> HashMap<ProductId, ProductBalance> {
    network
        .products
        .iter()
        .map(|product| {
            (
                product.clone(),
                product_balance(network, product, stocks, forecasts),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::network::{SourcingStrategy, TransportRate, WarehouseId};
    use crate::model::stock::WarehouseForecast;

    fn network() -> NetworkConfig {
        let a = WarehouseId::from("A");
        let b = WarehouseId::from("B");
        let mut distances = HashMap::new();
        distances.insert(
            a.clone(),
            HashMap::from([(a.clone(), 0.0), (b.clone(), 100.0)]),
        );
        distances.insert(
            b.clone(),
            HashMap::from([(a.clone(), 100.0), (b.clone(), 0.0)]),
        );
        NetworkConfig {
            warehouses: vec![a, b],
            products: vec![ProductId::from("P1")],
            distances,
            rate: TransportRate::Flat { per_km: 0.5 },
            strategy: SourcingStrategy::NearestSource,
        }
    }

    fn forecast(entries: &[(&str, &str, &[f64])]) -> ForecastSet {
        let mut set = ForecastSet::default();
        for (w, p, series) in entries {
            set.0
                .entry(WarehouseId::from(*w))
                .or_insert_with(WarehouseForecast::default)
                .predictions
                .insert(ProductId::from(*p), series.to_vec());
        }
        set
    }

    fn stocks(entries: &[(&str, &str, f64)]) -> StockSnapshot {
        let mut snapshot = StockSnapshot::default();
        for (w, p, qty) in entries {
            snapshot
                .0
                .entry(WarehouseId::from(*w))
                .or_default()
                .insert(ProductId::from(*p), *qty);
        }
        snapshot
    }

    #[test]
    fn surplus_is_stock_minus_required() {
        let network = network();
        let stocks = stocks(&[("A", "P1", 50.0), ("B", "P1", 10.0)]);
        let forecasts = forecast(&[
            ("A", "P1", &[5.0, 5.0, 10.0]),
            ("B", "P1", &[10.0, 10.0, 10.0]),
        ]);

        let balance = product_balance(&network, &ProductId::from("P1"), &stocks, &forecasts);
        assert_eq!(balance.required[&WarehouseId::from("A")], 20.0);
        assert_eq!(balance.surplus[&WarehouseId::from("A")], 30.0);
        assert_eq!(balance.surplus[&WarehouseId::from("B")], -20.0);
        // 50 total demand against 60 on hand: nothing to reorder.
        assert_eq!(balance.order_needed, 0.0);
    }

    #[test]
    fn order_needed_covers_the_network_shortfall() {
        let network = network();
        let stocks = stocks(&[("A", "P1", 10.0), ("B", "P1", 10.0)]);
        let forecasts = forecast(&[("A", "P1", &[20.0]), ("B", "P1", &[30.0])]);

        let balance = product_balance(&network, &ProductId::from("P1"), &stocks, &forecasts);
        assert_eq!(balance.order_needed, 30.0);
    }

    #[test]
    fn warehouse_without_forecast_data_is_skipped() {
        let network = network();
        // B has plenty of stock but no forecast for P1.
        let stocks = stocks(&[("A", "P1", 10.0), ("B", "P1", 500.0)]);
        let forecasts = forecast(&[("A", "P1", &[20.0])]);

        let balance = product_balance(&network, &ProductId::from("P1"), &stocks, &forecasts);
        assert!(!balance.surplus.contains_key(&WarehouseId::from("B")));
        // B's 500 units do not count toward the network total.
        assert_eq!(balance.order_needed, 10.0);
    }

    #[test]
    fn zero_everywhere_yields_a_zero_balance() {
        let network = network();
        let stocks = stocks(&[("A", "P1", 0.0), ("B", "P1", 0.0)]);
        let forecasts = forecast(&[("A", "P1", &[0.0, 0.0]), ("B", "P1", &[0.0])]);

        let balance = product_balance(&network, &ProductId::from("P1"), &stocks, &forecasts);
        assert_eq!(balance.order_needed, 0.0);
        assert!(balance.surplus.values().all(|s| *s == 0.0));
    }
}
