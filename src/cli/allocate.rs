use super::{dashboard, ui};
use crate::core::allocation::{AssetAllocation, AssetName};
use crate::core::dashboard::{DashboardAction, TrustFund, reduce};
use crate::core::error::TrustError;
use anyhow::Result;
use tracing::{debug, info};

/// Candidate percentages typed by the user; missing ones keep the current value.
#[derive(Debug, Clone, Default)]
pub struct AllocationRequest {
    pub beneficiary: String,
    pub stock_portfolio: Option<f64>,
    pub real_estate: Option<f64>,
    pub cash: Option<f64>,
}

impl AllocationRequest {
    fn candidate(&self, current: &AssetAllocation) -> AssetAllocation {
        AssetAllocation::new(
            self.stock_portfolio.unwrap_or(current.stock_portfolio),
            self.real_estate.unwrap_or(current.real_estate),
            self.cash.unwrap_or(current.cash),
        )
    }
}

fn display_preview_table(
    fund: &TrustFund,
    candidate: &AssetAllocation,
    totals: &AssetAllocation,
) -> String {
    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Asset"),
        ui::header_cell("Allocation"),
        ui::header_cell("Allocated Value"),
        ui::header_cell("Total Allocated"),
    ]);

    for asset in &fund.assets {
        let pct = candidate.get(asset.name);
        table.add_row(vec![
            ui::colored_cell(asset.name.as_str(), &asset.color),
            ui::percentage_cell(pct),
            ui::amount_cell(asset.allocated_value(pct)),
            ui::total_allocation_cell(totals.get(asset.name)),
        ]);
    }
    table.to_string()
}

/// Previews `request` against `fund` and returns the state after saving it.
///
/// Fails when the beneficiary is unknown or the save would over-allocate an asset.
pub fn apply_request(fund: &TrustFund, request: &AllocationRequest) -> Result<TrustFund> {
    let current = fund
        .beneficiary(&request.beneficiary)
        .ok_or_else(|| TrustError::UnknownBeneficiary {
            name: request.beneficiary.clone(),
        })?;

    let candidate = request.candidate(&current.asset_allocations);
    let totals = fund.preview_allocations(&request.beneficiary, &candidate);
    debug!(?candidate, ?totals, "Previewing allocation");

    println!(
        "\nBeneficiary: {}\n",
        ui::style_text(&request.beneficiary, ui::StyleType::Title)
    );
    println!("{}", display_preview_table(fund, &candidate, &totals));

    let asset_names: Vec<AssetName> = fund.assets.iter().map(|a| a.name).collect();
    for notice in dashboard::allocation_notices(&totals, &asset_names) {
        println!("{notice}");
    }

    let next = reduce(
        fund,
        DashboardAction::UpdateAllocations {
            name: request.beneficiary.clone(),
            allocations: candidate,
        },
    )?;
    info!(beneficiary = %request.beneficiary, "Allocation accepted");
    Ok(next)
}

pub fn run(fund: &TrustFund, request: &AllocationRequest) -> Result<()> {
    let next = apply_request(fund, request)?;
    println!(
        "\n{}\n",
        ui::style_text("Allocation can be saved", ui::StyleType::TotalValue)
    );
    println!("{}", next.display_beneficiaries_table());
    println!(
        "{}",
        ui::style_text(
            "Changes are not written back to the configuration file.",
            ui::StyleType::Subtle
        )
    );
    Ok(())
}
