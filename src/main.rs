mod error;
mod io;
mod model;
mod optimizer;
mod strategy;

use crate::error::RebalanceResult;
use crate::io::{forecast, loader, reporting};
use crate::model::network::{NetworkConfig, ProductId, SourcingStrategy, TransportRate, WarehouseId};
use crate::model::stock::{DistributionPlan, ForecastSet, StockSnapshot};
use crate::optimizer::engine::StockRebalancer;
use std::collections::HashMap;
use std::env;
use std::process;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> RebalanceResult<()> {
    println!("=== Warehouse Stock Rebalancing Optimizer ===");

    let args: Vec<String> = env::args().collect();

    // 1. SETUP NETWORK
    // Either load a network config from JSON, or fall back to the demo
    // network (4 warehouses, 5 products, the fixed km matrix).
    let network = match args.get(1) {
        Some(path) => loader::load_network(path)?,
        None => demo_network(),
    };
    println!(
        "Network: {} warehouses, {} products, strategy {:?}",
        network.warehouses.len(),
        network.products.len(),
        network.strategy
    );

    // 2. GATHER INPUTS
    // Stock snapshots and forecasts are external collaborators' output;
    // here they come from JSON files or a synthetic generator.
    let stocks: StockSnapshot = match args.get(2) {
        Some(path) => loader::load_stocks(path)?,
        None => forecast::generate_demo_stocks(&network, 600.0, 120.0)?,
    };
    let forecasts: ForecastSet = match args.get(3) {
        Some(path) => loader::load_forecasts(path)?,
        None => forecast::generate_demo_forecasts(&network, 10, 50.0, 10.0)?,
    };

    // 3. BUILD THE OPTIMIZER
    let rebalancer = StockRebalancer::new(network)?;

    // 4. RUN ONE OPTIMIZATION
    let plan = rebalancer.optimize(&stocks, &forecasts)?;

    // 5. PRINT THE PLAN
    print_plan(rebalancer.network(), &plan);

    // 6. EXPORT TRANSFERS
    let output_file = "transfer_plan.csv";
    reporting::write_transfer_log(output_file, rebalancer.network(), &plan)?;

    println!("\nOptimization complete.");
    Ok(())
}

fn print_plan(network: &NetworkConfig, plan: &DistributionPlan) {
    for product in &network.products {
        println!("\n--- {} ---", product);
        for warehouse in &network.warehouses {
            let Some(surplus) = plan.surplus[product].get(warehouse) else {
                continue;
            };
            let required = plan.required_stock[product][warehouse];
            println!(
                "  {}: required {:.0}, surplus {:+.0}",
                warehouse, required, surplus
            );
        }
        let order_needed = plan.order_needed[product];
        if order_needed > 0.0 {
            println!("  Reorder from supplier: {:.0} units", order_needed);
        }
        for t in &plan.transfers[product] {
            println!(
                "  Transfer {:.0} units {} -> {} (${:.2})",
                t.quantity, t.from, t.to, t.cost
            );
        }
    }
}

/// The demo deployment: four warehouses on the classic km matrix with a
/// flat $0.50/km rate and five tracked products.
fn demo_network() -> NetworkConfig {
    let warehouses: Vec<WarehouseId> = (1..=4)
        .map(|i| WarehouseId(format!("Warehouse{}", i)))
        .collect();
    let products: Vec<ProductId> = ["0349", "2167", "0191", "1342", "1432"]
        .iter()
        .map(|id| ProductId(format!("Product_{}", id)))
        .collect();

    let km = [
        [0.0, 100.0, 200.0, 300.0],
        [100.0, 0.0, 150.0, 250.0],
        [200.0, 150.0, 0.0, 100.0],
        [300.0, 250.0, 100.0, 0.0],
    ];
    let mut distances = HashMap::new();
    for (i, a) in warehouses.iter().enumerate() {
        let mut row = HashMap::new();
        for (j, b) in warehouses.iter().enumerate() {
            row.insert(b.clone(), km[i][j]);
        }
        distances.insert(a.clone(), row);
    }

    NetworkConfig {
        warehouses,
        products,
        distances,
        rate: TransportRate::Flat { per_km: 0.5 },
        strategy: SourcingStrategy::NearestSource,
    }
}
