use crate::core::dashboard::TrustFund;
use crate::core::risk::{Portfolio, RiskModel, sample_portfolio};
use crate::core::trust::TrustFundData;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};
use tracing::debug;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    #[serde(default)]
    pub trust: TrustFundData,
    #[serde(default)]
    pub fund: TrustFund,
    #[serde(default = "sample_portfolio")]
    pub portfolio: Portfolio,
    #[serde(default)]
    pub risk: RiskModel,
    pub output_dir: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            trust: TrustFundData::default(),
            fund: TrustFund::default(),
            portfolio: sample_portfolio(),
            risk: RiskModel::default(),
            output_dir: None,
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        debug!("Loading default config");
        let config_path = Self::default_config_path()?;
        Self::load_from_path(&config_path)
    }

    pub fn default_config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("org", "trustfund", "trustfund")
            .context("Could not determine project directories")?;
        Ok(proj_dirs.config_dir().join("config.yaml"))
    }

    /// Directory deed documents are written to when no output path is given.
    pub fn output_dir(&self) -> Result<PathBuf> {
        if let Some(custom_path) = &self.output_dir {
            return Ok(PathBuf::from(custom_path));
        }
        std::env::current_dir().context("Could not determine current directory")
    }

    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let config_str = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Self = serde_yaml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;
        debug!("Successfully loaded config");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::allocation::{AssetAllocation, AssetName};
    use crate::core::risk::AccountType;

    #[test]
    fn test_config_deserialization() {
        let yaml_str = r##"
trust:
  settlor:
    full_name: "Jane Doe"
    date_of_birth: "1965-04-12"
  trust_details:
    name: "Doe Family Trust"
    kind: testamentary
  trust_assets:
    - name: "Cottage"
      value: "250000"
fund:
  total_value: 500000
  assets:
    - name: "Real Estate"
      value: 250000
      growth: 3.1
      color: "#3B82F6"
    - name: "Cash"
      value: 250000
  beneficiaries:
    - name: "Amy Doe"
      allocation: 100
      asset_allocations:
        Stock Portfolio: 0
        Real Estate: 100
        Cash: 100
portfolio:
  Investment Account: 1000
  Crypto Account: 3000
output_dir: "/tmp/deeds"
"##;

        let config: AppConfig = serde_yaml::from_str(yaml_str).expect("Failed to deserialize");
        assert_eq!(config.trust.settlor.full_name, "Jane Doe");
        assert_eq!(config.trust.trust_details.name, "Doe Family Trust");
        assert_eq!(config.trust.trust_assets[0].value, "250000");
        assert_eq!(config.fund.assets.len(), 2);
        assert_eq!(config.fund.assets[0].name, AssetName::RealEstate);
        assert!(config.fund.assets[1].color.is_empty());
        assert_eq!(
            config.fund.beneficiaries[0].asset_allocations,
            AssetAllocation::new(0.0, 100.0, 100.0)
        );
        assert_eq!(config.portfolio.len(), 2);
        assert_eq!(config.portfolio[&AccountType::Crypto], 3000.0);
        assert_eq!(config.risk, RiskModel::default());
        assert_eq!(config.output_dir().unwrap(), PathBuf::from("/tmp/deeds"));
    }

    #[test]
    fn test_empty_config_uses_demo_defaults() {
        let config: AppConfig = serde_yaml::from_str("{}").expect("Failed to deserialize");
        assert_eq!(config.fund, TrustFund::default());
        assert_eq!(config.portfolio, sample_portfolio());
        assert!(config.output_dir.is_none());
        assert_eq!(config.trust.beneficiaries.len(), 1);
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = AppConfig::load_from_path("/definitely/not/here.yaml").unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.yaml"));
    }
}
