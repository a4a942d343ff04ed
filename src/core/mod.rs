//! Trust domain rules, free of any terminal concerns

pub mod allocation;
pub mod config;
pub mod dashboard;
pub mod deed;
pub mod error;
pub mod log;
pub mod planning;
pub mod risk;
pub mod trust;
pub mod wizard;

// Re-export main types for cleaner imports
pub use allocation::{AssetAllocation, AssetName, Beneficiary, aggregate_allocations};
pub use dashboard::{DashboardAction, TrustFund, reduce};
pub use error::TrustError;
pub use risk::{AccountType, Portfolio, RiskModel, score_risk};
pub use trust::TrustFundData;
