// src/optimizer/engine.rs

use crate::error::{RebalanceError, RebalanceResult};
use crate::model::network::NetworkConfig;
use crate::model::stock::{DistributionPlan, ForecastSet, StockSnapshot};
use crate::optimizer::balance;
use crate::optimizer::transfers;
use crate::strategy::implementations::policy_for;
use crate::strategy::traits::SourcingPolicy;

/// The orchestrator: validates inputs, runs the balance calculator and
/// the transfer recommender, and assembles the plan.
///
/// A rebalancer is pure with respect to its inputs. Each call to
/// [`optimize`](StockRebalancer::optimize) is an independent,
/// request-scoped computation; nothing is cached between runs.
#[derive(Debug)]
pub struct StockRebalancer {
    network: NetworkConfig,
    policy: Box<dyn SourcingPolicy>,
}

impl StockRebalancer {
    /// Builds a rebalancer for a network, rejecting broken configuration
    /// (incomplete or asymmetric distance matrix, empty sets) up front.
    pub fn new(network: NetworkConfig) -> RebalanceResult<Self> {
        network.validate()?;
        let policy = policy_for(network.strategy);
        Ok(Self { network, policy })
    }

    pub fn network(&self) -> &NetworkConfig {
        &self.network
    }

    /// Runs one optimization: stock snapshot + forecasts in, full plan
    /// out. All-or-nothing; any failure drops the partial plan.
    pub fn optimize(
        &self,
        stocks: &StockSnapshot,
        forecasts: &ForecastSet,
    ) -> RebalanceResult<DistributionPlan> {
        if stocks.is_empty() {
            return Err(RebalanceError::MissingInput("current stock snapshot"));
        }
        if forecasts.is_empty() {
            return Err(RebalanceError::MissingInput("demand forecasts"));
        }
        self.check_keys(stocks, forecasts)?;

        let balances = balance::compute_balances(&self.network, stocks, forecasts);

        let mut plan = DistributionPlan::default();
        for product in &self.network.products {
            // compute_balances covers every configured product.
            let product_balance = &balances[product];

            let transfers = transfers::recommend_transfers(
                &self.network,
                product,
                product_balance,
                self.policy.as_ref(),
            )?;

            plan.required_stock
                .insert(product.clone(), product_balance.required.clone());
            plan.surplus
                .insert(product.clone(), product_balance.surplus.clone());
            plan.order_needed
                .insert(product.clone(), product_balance.order_needed);
            plan.transfers.insert(product.clone(), transfers);
        }
        Ok(plan)
    }

    /// Inputs may only reference warehouses and products the network
    /// knows about. The upstream services feeding us are supposed to
    /// guarantee this; we do not trust them to.
    fn check_keys(&self, stocks: &StockSnapshot, forecasts: &ForecastSet) -> RebalanceResult<()> {
        for (warehouse, products) in &stocks.0 {
            if !self.network.contains_warehouse(warehouse) {
                return Err(RebalanceError::UnknownWarehouse(warehouse.clone()));
            }
            for product in products.keys() {
                if !self.network.contains_product(product) {
                    return Err(RebalanceError::UnknownProduct(product.clone()));
                }
            }
        }
        for (warehouse, forecast) in &forecasts.0 {
            if !self.network.contains_warehouse(warehouse) {
                return Err(RebalanceError::UnknownWarehouse(warehouse.clone()));
            }
            for product in forecast.predictions.keys() {
                if !self.network.contains_product(product) {
                    return Err(RebalanceError::UnknownProduct(product.clone()));
                }
            }
        }
        Ok(())
    }
}
