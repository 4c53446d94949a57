// src/io/reporting.rs

use crate::error::RebalanceResult;
use crate::model::network::NetworkConfig;
use crate::model::stock::DistributionPlan;
use serde::Serialize;
use std::path::Path;

/// One CSV row of the transfer report.
#[derive(Debug, Clone, Serialize)]
pub struct TransferRecord {
    pub product: String,
    pub from: String,
    pub to: String,
    pub quantity: f64,
    pub cost: f64,
}

/// Writes the recommended transfers to a CSV file.
///
/// Rows follow configured product order, then the plan's own transfer
/// order within each product, so re-running the same input produces an
/// identical file.
///
/// # Arguments
/// * `file_path` - The path to save the file (e.g., "results/plan.csv").
/// * `network` - Supplies the product iteration order.
/// * `plan` - The optimization result to flatten.
pub fn write_transfer_log<P: AsRef<Path>>(
    file_path: P,
    network: &NetworkConfig,
    plan: &DistributionPlan,
) -> RebalanceResult<()> {
    let mut wtr = csv::Writer::from_path(file_path.as_ref())?;

    let mut rows = 0;
    for product in &network.products {
        let Some(transfers) = plan.transfers.get(product) else {
            continue;
        };
        for transfer in transfers {
            wtr.serialize(TransferRecord {
                product: product.to_string(),
                from: transfer.from.to_string(),
                to: transfer.to.to_string(),
                quantity: transfer.quantity,
                cost: transfer.cost,
            })?;
            rows += 1;
        }
    }

    // Flush the buffer to ensure all data is written
    wtr.flush()?;

    println!(
        "Successfully exported {} transfer rows to '{}'",
        rows,
        file_path.as_ref().display()
    );
    Ok(())
}
