use super::ui;
use crate::core::allocation::{
    AssetAllocation, AssetName, current_totals, over_allocated_assets, under_allocated_assets,
};
use crate::core::dashboard::{DashboardAction, TrustFund, reduce};
use anyhow::Result;
use comfy_table::Cell;
use tracing::debug;

impl TrustFund {
    pub fn display_assets_table(&self) -> String {
        let mut table = ui::new_styled_table();
        table.set_header(vec![
            ui::header_cell("Asset"),
            ui::header_cell("Value"),
            ui::header_cell("Growth"),
            ui::header_cell("Share"),
        ]);

        let asset_total = self.asset_total();
        for asset in &self.assets {
            let share = if asset_total > 0.0 {
                asset.value / asset_total * 100.0
            } else {
                0.0
            };
            table.add_row(vec![
                ui::colored_cell(asset.name.as_str(), &asset.color),
                ui::amount_cell(asset.value),
                ui::change_cell(asset.growth),
                ui::percentage_cell(share),
            ]);
        }
        table.to_string()
    }

    pub fn display_beneficiaries_table(&self) -> String {
        let mut table = ui::new_styled_table();
        let mut header = vec![ui::header_cell("Beneficiary"), ui::header_cell("Share")];
        header.extend(self.assets.iter().map(|a| ui::header_cell(a.name.as_str())));
        table.set_header(header);

        for beneficiary in &self.beneficiaries {
            let mut row = vec![
                Cell::new(&beneficiary.name),
                ui::percentage_cell(beneficiary.allocation),
            ];
            row.extend(
                self.assets
                    .iter()
                    .map(|a| ui::percentage_cell(beneficiary.asset_allocations.get(a.name))),
            );
            table.add_row(row);
        }

        let totals = current_totals(&self.beneficiaries);
        let mut total_row = vec![
            Cell::new(ui::style_text("Total allocated", ui::StyleType::TotalLabel)),
            Cell::new(""),
        ];
        total_row.extend(
            self.assets
                .iter()
                .map(|a| ui::total_allocation_cell(totals.get(a.name))),
        );
        table.add_row(total_row);
        table.to_string()
    }
}

/// Warning and note lines for the given per-asset totals.
pub fn allocation_notices(totals: &AssetAllocation, assets: &[AssetName]) -> Vec<String> {
    let mut notices = Vec::new();
    let over = over_allocated_assets(totals);
    if !over.is_empty() {
        notices.push(ui::style_text(
            "Total allocation for one or more assets exceeds 100% across all beneficiaries.",
            ui::StyleType::Error,
        ));
    }
    for asset in under_allocated_assets(totals)
        .into_iter()
        .filter(|a| assets.contains(a))
    {
        notices.push(ui::style_text(
            &format!(
                "{asset} is only {:.1}% allocated; the remainder stays in the trust.",
                totals.get(asset)
            ),
            ui::StyleType::Subtle,
        ));
    }
    notices
}

/// Applies `actions` in order, starting from `fund`.
pub fn apply_actions(fund: &TrustFund, actions: Vec<DashboardAction>) -> Result<TrustFund> {
    let mut state = fund.clone();
    for action in actions {
        state = reduce(&state, action)?;
    }
    Ok(state)
}

pub fn run(fund: &TrustFund, actions: Vec<DashboardAction>) -> Result<()> {
    let fund = &apply_actions(fund, actions)?;
    debug!(
        assets = fund.assets.len(),
        beneficiaries = fund.beneficiaries.len(),
        "Rendering dashboard"
    );

    println!(
        "\n{}\n",
        ui::style_text("Trust Fund Overview", ui::StyleType::Title)
    );
    println!(
        "{} {}",
        ui::style_text("Total Value:", ui::StyleType::TotalLabel),
        ui::style_text(&format!("{:.2}", fund.total_value), ui::StyleType::TotalValue)
    );
    println!(
        "{} {}\n",
        ui::style_text("Beneficiaries:", ui::StyleType::TotalLabel),
        fund.beneficiaries.len()
    );

    println!("{}", fund.display_assets_table());
    ui::print_separator();
    println!("{}", fund.display_beneficiaries_table());

    let asset_names: Vec<AssetName> = fund.assets.iter().map(|a| a.name).collect();
    for notice in allocation_notices(&current_totals(&fund.beneficiaries), &asset_names) {
        println!("{notice}");
    }

    Ok(())
}
