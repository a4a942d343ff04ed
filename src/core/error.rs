use crate::core::allocation::AssetName;
use thiserror::Error;

/// Errors raised by the trust domain rules.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TrustError {
    #[error("Total allocation exceeds 100% for {}", join_assets(.assets))]
    OverAllocated { assets: Vec<AssetName> },

    #[error("No beneficiary named '{name}'")]
    UnknownBeneficiary { name: String },

    #[error("Invalid wizard step: {step}")]
    InvalidStep { step: usize },
}

fn join_assets(assets: &[AssetName]) -> String {
    assets
        .iter()
        .map(AssetName::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
