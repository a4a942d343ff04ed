//! Weighted portfolio risk score and its display bands.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::Display;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum AccountType {
    #[serde(rename = "Investment Account")]
    Investment,
    #[serde(rename = "Trading Account")]
    Trading,
    #[serde(rename = "Crypto Account")]
    Crypto,
}

impl Display for AccountType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                AccountType::Investment => "Investment Account",
                AccountType::Trading => "Trading Account",
                AccountType::Crypto => "Crypto Account",
            }
        )
    }
}

/// Account balances keyed by account type.
pub type Portfolio = BTreeMap<AccountType, f64>;

/// The demo portfolio shown on the dashboard.
pub fn sample_portfolio() -> Portfolio {
    BTreeMap::from([
        (AccountType::Investment, 500000.0),
        (AccountType::Trading, 200000.0),
        (AccountType::Crypto, 50000.0),
    ])
}

/// A score band. Scores strictly below `ceiling` fall in this band; the last
/// band has no ceiling and catches everything else.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskBand {
    pub ceiling: Option<f64>,
    pub label: String,
    pub color: String,
}

impl RiskBand {
    fn new(ceiling: Option<f64>, label: &str, color: &str) -> Self {
        Self {
            ceiling,
            label: label.to_string(),
            color: color.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskModel {
    pub weights: BTreeMap<AccountType, f64>,
    pub bands: Vec<RiskBand>,
}

impl Default for RiskModel {
    fn default() -> Self {
        RiskModel {
            weights: BTreeMap::from([
                (AccountType::Crypto, 0.4),
                (AccountType::Trading, 0.3),
                (AccountType::Investment, 0.2),
            ]),
            bands: vec![
                RiskBand::new(Some(0.3), "Low Risk", "#10B981"),
                RiskBand::new(Some(0.6), "Moderate Risk", "#F59E0B"),
                RiskBand::new(Some(0.8), "High Risk", "#EF4444"),
                RiskBand::new(None, "Very High Risk", "#7F1D1D"),
            ],
        }
    }
}

/// Share of the portfolio held in one account.
#[derive(Debug, Clone, PartialEq)]
pub struct AccountShare {
    pub account: AccountType,
    pub balance: f64,
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RiskAssessment {
    pub score: f64,
    pub label: String,
    pub color: String,
    pub total_value: f64,
    pub breakdown: Vec<AccountShare>,
}

impl RiskModel {
    fn weight(&self, account: &AccountType) -> f64 {
        self.weights.get(account).copied().unwrap_or(0.0)
    }

    /// Value-weighted risk of `portfolio`, clamped to [0, 1].
    ///
    /// An empty or zero-valued portfolio scores 0.
    pub fn score(&self, portfolio: &Portfolio) -> f64 {
        // Balances are scaled by the largest one so huge totals don't overflow.
        let scale = portfolio.values().fold(0.0_f64, |max, b| max.max(b.abs()));
        if scale == 0.0 || !scale.is_finite() {
            debug!("Largest balance is {scale}, scoring as zero risk");
            return 0.0;
        }
        let total: f64 = portfolio.values().map(|b| b / scale).sum();
        if total == 0.0 || !total.is_finite() {
            debug!("Portfolio total is {total}, scoring as zero risk");
            return 0.0;
        }

        let score: f64 = portfolio
            .iter()
            .map(|(account, balance)| balance / scale / total * self.weight(account))
            .sum();

        if score.is_nan() {
            return 0.0;
        }
        score.clamp(0.0, 1.0)
    }

    pub fn band_for(&self, score: f64) -> Option<&RiskBand> {
        self.bands
            .iter()
            .find(|band| band.ceiling.is_none_or(|ceiling| score < ceiling))
    }

    pub fn label_for(&self, score: f64) -> &str {
        self.band_for(score).map_or("Unknown", |b| b.label.as_str())
    }

    pub fn color_for(&self, score: f64) -> &str {
        self.band_for(score).map_or("#6B7280", |b| b.color.as_str())
    }

    pub fn assess(&self, portfolio: &Portfolio) -> RiskAssessment {
        let total_value: f64 = portfolio.values().sum();
        let score = self.score(portfolio);
        let breakdown = portfolio
            .iter()
            .map(|(account, balance)| AccountShare {
                account: *account,
                balance: *balance,
                percentage: if total_value > 0.0 {
                    balance / total_value * 100.0
                } else {
                    0.0
                },
            })
            .collect();

        RiskAssessment {
            score,
            label: self.label_for(score).to_string(),
            color: self.color_for(score).to_string(),
            total_value,
            breakdown,
        }
    }
}

/// Scores `portfolio` with the default weights.
pub fn score_risk(portfolio: &Portfolio) -> f64 {
    RiskModel::default().score(portfolio)
}

pub fn label_for(score: f64) -> String {
    RiskModel::default().label_for(score).to_string()
}

pub fn color_for(score: f64) -> String {
    RiskModel::default().color_for(score).to_string()
}
