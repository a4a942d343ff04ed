//! The trust record collected by the setup wizard.
use serde::{Deserialize, Serialize};
use std::fmt::Display;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Party {
    pub full_name: String,
    pub date_of_birth: String,
    pub sin: String,
    pub address: String,
    pub phone: String,
    pub email: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeedBeneficiary {
    pub full_name: String,
    pub relationship: String,
    pub date_of_birth: String,
    pub sin: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub distribution_instructions: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TrustKind {
    #[default]
    InterVivos,
    Testamentary,
    Other,
}

impl Display for TrustKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                TrustKind::InterVivos => "inter-vivos",
                TrustKind::Testamentary => "testamentary",
                TrustKind::Other => "other",
            }
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrustDetails {
    pub name: String,
    pub kind: TrustKind,
    pub other_kind: Option<String>,
    pub purpose: String,
    pub initial_property: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdditionalProvisions {
    pub duration: String,
    pub trustee_powers: String,
    pub successor_trustee: String,
    pub distribution_plan: String,
    pub special_instructions: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Advisor {
    pub name: String,
    pub contact: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfessionalAdvisors {
    pub lawyer: Advisor,
    pub accountant: Advisor,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FinancialPlanning {
    pub current_income: String,
    pub goal_amount: String,
    pub target_date: String,
    pub financial_goal: String,
}

/// An asset row as typed into the form; the value is kept as entered.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrustAsset {
    pub name: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrustFundData {
    pub settlor: Party,
    pub trustee: Party,
    pub beneficiaries: Vec<DeedBeneficiary>,
    pub trust_details: TrustDetails,
    pub additional_provisions: AdditionalProvisions,
    pub professional_advisors: ProfessionalAdvisors,
    pub financial_planning: FinancialPlanning,
    pub trust_assets: Vec<TrustAsset>,
}

impl Default for TrustFundData {
    /// A blank form: one empty beneficiary and one empty asset row.
    fn default() -> Self {
        Self {
            settlor: Party::default(),
            trustee: Party::default(),
            beneficiaries: vec![DeedBeneficiary::default()],
            trust_details: TrustDetails::default(),
            additional_provisions: AdditionalProvisions::default(),
            professional_advisors: ProfessionalAdvisors::default(),
            financial_planning: FinancialPlanning::default(),
            trust_assets: vec![TrustAsset::default()],
        }
    }
}

impl TrustFundData {
    /// Human readable trust type, honouring the free-text "other" kind.
    pub fn kind_display(&self) -> String {
        match (&self.trust_details.kind, &self.trust_details.other_kind) {
            (TrustKind::Other, Some(other)) if !other.is_empty() => other.clone(),
            (kind, _) => kind.to_string(),
        }
    }
}
