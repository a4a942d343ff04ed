//! Dashboard state and the reducer that edits it.
use crate::core::allocation::{
    Asset, AssetAllocation, AssetName, Beneficiary, aggregate_allocations, over_allocated_assets,
};
use crate::core::error::TrustError;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrustFund {
    pub total_value: f64,
    pub assets: Vec<Asset>,
    pub beneficiaries: Vec<Beneficiary>,
}

impl Default for TrustFund {
    fn default() -> Self {
        let split = AssetAllocation::new(60.0, 30.0, 10.0);
        TrustFund {
            total_value: 1250000.0,
            assets: vec![
                Asset {
                    name: AssetName::StockPortfolio,
                    value: 750000.0,
                    growth: 12.5,
                    color: "#EF4444".to_string(),
                },
                Asset {
                    name: AssetName::RealEstate,
                    value: 400000.0,
                    growth: 5.2,
                    color: "#3B82F6".to_string(),
                },
                Asset {
                    name: AssetName::Cash,
                    value: 100000.0,
                    growth: 0.5,
                    color: "#10B981".to_string(),
                },
            ],
            beneficiaries: vec![
                Beneficiary {
                    name: "John Smith".to_string(),
                    allocation: 50.0,
                    asset_allocations: split,
                },
                Beneficiary {
                    name: "Sarah Smith".to_string(),
                    allocation: 50.0,
                    asset_allocations: split,
                },
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DashboardAction {
    AddBeneficiary {
        name: String,
    },
    RemoveBeneficiary {
        name: String,
    },
    UpdateAllocations {
        name: String,
        allocations: AssetAllocation,
    },
}

impl TrustFund {
    /// Sum of the listed asset values.
    pub fn asset_total(&self) -> f64 {
        self.assets.iter().map(|a| a.value).sum()
    }

    pub fn beneficiary(&self, name: &str) -> Option<&Beneficiary> {
        self.beneficiaries.iter().find(|b| b.name == name)
    }

    /// Totals per asset if `candidate` were saved for `name`.
    pub fn preview_allocations(&self, name: &str, candidate: &AssetAllocation) -> AssetAllocation {
        aggregate_allocations(&self.beneficiaries, name, candidate)
    }
}

/// Applies `action` to `state`, returning the next state.
///
/// The only rejected action is an allocation update that would push an asset
/// past 100% across beneficiaries. Updates for an unknown name leave the state
/// unchanged.
pub fn reduce(state: &TrustFund, action: DashboardAction) -> Result<TrustFund, TrustError> {
    match action {
        DashboardAction::AddBeneficiary { name } => {
            if name.trim().is_empty() {
                debug!("Ignoring beneficiary with empty name");
                return Ok(state.clone());
            }
            let mut beneficiaries = state.beneficiaries.clone();
            beneficiaries.push(Beneficiary {
                name: name.clone(),
                allocation: 0.0,
                asset_allocations: AssetAllocation::equal_share(state.assets.len()),
            });
            info!(beneficiary = %name, "Added beneficiary");
            Ok(TrustFund {
                beneficiaries,
                ..state.clone()
            })
        }
        DashboardAction::RemoveBeneficiary { name } => {
            let beneficiaries = state
                .beneficiaries
                .iter()
                .filter(|b| b.name != name)
                .cloned()
                .collect();
            info!(beneficiary = %name, "Removed beneficiary");
            Ok(TrustFund {
                beneficiaries,
                ..state.clone()
            })
        }
        DashboardAction::UpdateAllocations { name, allocations } => {
            if state.beneficiary(&name).is_none() {
                debug!(beneficiary = %name, "Ignoring update for unknown beneficiary");
                return Ok(state.clone());
            }
            let totals = state.preview_allocations(&name, &allocations);
            let over = over_allocated_assets(&totals);
            if !over.is_empty() {
                debug!(beneficiary = %name, ?totals, "Rejecting allocation update");
                return Err(TrustError::OverAllocated { assets: over });
            }
            let beneficiaries = state
                .beneficiaries
                .iter()
                .map(|b| {
                    if b.name == name {
                        Beneficiary {
                            asset_allocations: allocations,
                            ..b.clone()
                        }
                    } else {
                        b.clone()
                    }
                })
                .collect();
            Ok(TrustFund {
                beneficiaries,
                ..state.clone()
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_fund_matches_asset_total() {
        let fund = TrustFund::default();
        assert_eq!(fund.asset_total(), fund.total_value);
        assert_eq!(fund.beneficiaries.len(), 2);
    }

    #[test]
    fn test_add_beneficiary_gets_equal_share() {
        let fund = TrustFund::default();
        let next = reduce(
            &fund,
            DashboardAction::AddBeneficiary {
                name: "Tom Smith".to_string(),
            },
        )
        .unwrap();

        assert_eq!(fund.beneficiaries.len(), 2);
        assert_eq!(next.beneficiaries.len(), 3);
        let tom = next.beneficiary("Tom Smith").unwrap();
        assert_eq!(tom.allocation, 0.0);
        assert_eq!(tom.asset_allocations, AssetAllocation::equal_share(3));
    }

    #[test]
    fn test_add_beneficiary_with_blank_name_is_ignored() {
        let fund = TrustFund::default();
        let next = reduce(
            &fund,
            DashboardAction::AddBeneficiary {
                name: "  ".to_string(),
            },
        )
        .unwrap();
        assert_eq!(next, fund);
    }

    #[test]
    fn test_remove_beneficiary() {
        let fund = TrustFund::default();
        let next = reduce(
            &fund,
            DashboardAction::RemoveBeneficiary {
                name: "John Smith".to_string(),
            },
        )
        .unwrap();
        assert_eq!(next.beneficiaries.len(), 1);
        assert!(next.beneficiary("John Smith").is_none());

        let unchanged = reduce(
            &next,
            DashboardAction::RemoveBeneficiary {
                name: "Nobody".to_string(),
            },
        )
        .unwrap();
        assert_eq!(unchanged, next);
    }

    #[test]
    fn test_update_within_limits_is_saved() {
        let fund = TrustFund::default();
        let allocations = AssetAllocation::new(40.0, 70.0, 90.0);
        let next = reduce(
            &fund,
            DashboardAction::UpdateAllocations {
                name: "John Smith".to_string(),
                allocations,
            },
        )
        .unwrap();
        assert_eq!(
            next.beneficiary("John Smith").unwrap().asset_allocations,
            allocations
        );
        assert_eq!(
            next.beneficiary("Sarah Smith").unwrap().asset_allocations,
            AssetAllocation::new(60.0, 30.0, 10.0)
        );
    }

    #[test]
    fn test_over_allocation_is_rejected() {
        let fund = TrustFund::default();
        let err = reduce(
            &fund,
            DashboardAction::UpdateAllocations {
                name: "John Smith".to_string(),
                allocations: AssetAllocation::new(50.0, 30.0, 20.0),
            },
        )
        .unwrap_err();
        assert_eq!(
            err,
            TrustError::OverAllocated {
                assets: vec![AssetName::StockPortfolio]
            }
        );
    }

    #[test]
    fn test_update_for_unknown_beneficiary_is_ignored() {
        let fund = TrustFund::default();
        let next = reduce(
            &fund,
            DashboardAction::UpdateAllocations {
                name: "Nobody".to_string(),
                allocations: AssetAllocation::new(10.0, 0.0, 0.0),
            },
        )
        .unwrap();
        assert_eq!(next, fund);
    }

    #[test]
    fn test_preview_reports_candidate_totals() {
        let fund = TrustFund::default();
        let totals =
            fund.preview_allocations("Sarah Smith", &AssetAllocation::new(40.0, 40.0, 40.0));
        assert_eq!(totals, AssetAllocation::new(100.0, 70.0, 50.0));
    }
}
