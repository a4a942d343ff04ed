//! Per-asset allocation bookkeeping across beneficiaries.
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Allocation ceiling for any single asset across all beneficiaries.
pub const FULL_ALLOCATION: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum AssetName {
    #[serde(rename = "Stock Portfolio")]
    StockPortfolio,
    #[serde(rename = "Real Estate")]
    RealEstate,
    #[serde(rename = "Cash")]
    Cash,
}

impl AssetName {
    pub const ALL: [AssetName; 3] = [
        AssetName::StockPortfolio,
        AssetName::RealEstate,
        AssetName::Cash,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AssetName::StockPortfolio => "Stock Portfolio",
            AssetName::RealEstate => "Real Estate",
            AssetName::Cash => "Cash",
        }
    }
}

impl Display for AssetName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One percentage per asset. Every asset is always present.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AssetAllocation {
    #[serde(rename = "Stock Portfolio", default)]
    pub stock_portfolio: f64,
    #[serde(rename = "Real Estate", default)]
    pub real_estate: f64,
    #[serde(rename = "Cash", default)]
    pub cash: f64,
}

impl AssetAllocation {
    pub fn new(stock_portfolio: f64, real_estate: f64, cash: f64) -> Self {
        Self {
            stock_portfolio,
            real_estate,
            cash,
        }
    }

    /// Splits 100% evenly over `asset_count` assets, the default for a new beneficiary.
    pub fn equal_share(asset_count: usize) -> Self {
        let share = if asset_count == 0 {
            0.0
        } else {
            FULL_ALLOCATION / asset_count as f64
        };
        Self::new(share, share, share)
    }

    pub fn get(&self, asset: AssetName) -> f64 {
        match asset {
            AssetName::StockPortfolio => self.stock_portfolio,
            AssetName::RealEstate => self.real_estate,
            AssetName::Cash => self.cash,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (AssetName, f64)> + '_ {
        AssetName::ALL
            .into_iter()
            .map(move |asset| (asset, self.get(asset)))
    }

    fn add(self, other: &AssetAllocation) -> Self {
        Self::new(
            self.stock_portfolio + other.stock_portfolio,
            self.real_estate + other.real_estate,
            self.cash + other.cash,
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Beneficiary {
    pub name: String,
    #[serde(default)]
    pub allocation: f64,
    #[serde(default)]
    pub asset_allocations: AssetAllocation,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    pub name: AssetName,
    pub value: f64,
    #[serde(default)]
    pub growth: f64,
    #[serde(default)]
    pub color: String,
}

impl Asset {
    /// Dollar value behind `percentage` of this asset.
    pub fn allocated_value(&self, percentage: f64) -> f64 {
        percentage / 100.0 * self.value
    }
}

/// Computes what each asset's cross-beneficiary total would be if `candidate`
/// replaced the allocations of the beneficiary named `exclude_name`.
///
/// An `exclude_name` that matches nobody simply excludes nobody. Candidate values
/// are not validated and flow straight into the sums.
pub fn aggregate_allocations(
    beneficiaries: &[Beneficiary],
    exclude_name: &str,
    candidate: &AssetAllocation,
) -> AssetAllocation {
    beneficiaries
        .iter()
        .filter(|b| b.name != exclude_name)
        .fold(AssetAllocation::default(), |totals, b| {
            totals.add(&b.asset_allocations)
        })
        .add(candidate)
}

/// Sum of every beneficiary's own allocations, with nothing replaced.
pub fn current_totals(beneficiaries: &[Beneficiary]) -> AssetAllocation {
    beneficiaries
        .iter()
        .fold(AssetAllocation::default(), |totals, b| {
            totals.add(&b.asset_allocations)
        })
}

pub fn has_over_allocation(totals: &AssetAllocation) -> bool {
    totals.iter().any(|(_, total)| total > FULL_ALLOCATION)
}

pub fn over_allocated_assets(totals: &AssetAllocation) -> Vec<AssetName> {
    totals
        .iter()
        .filter(|(_, total)| *total > FULL_ALLOCATION)
        .map(|(asset, _)| asset)
        .collect()
}

/// Assets whose total is still short of 100%. Informational only.
pub fn under_allocated_assets(totals: &AssetAllocation) -> Vec<AssetName> {
    totals
        .iter()
        .filter(|(_, total)| *total < FULL_ALLOCATION)
        .map(|(asset, _)| asset)
        .collect()
}
