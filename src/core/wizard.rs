//! Step sequencing and immutable edits for the trust setup form.
use crate::core::error::TrustError;
use crate::core::trust::{
    AdditionalProvisions, DeedBeneficiary, FinancialPlanning, Party, ProfessionalAdvisors,
    TrustAsset, TrustDetails, TrustFundData,
};
use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum WizardStep {
    Parties = 1,
    Beneficiaries = 2,
    TrustDetails = 3,
    FinancialPlanning = 4,
    Review = 5,
}

impl WizardStep {
    pub const ALL: [WizardStep; 5] = [
        WizardStep::Parties,
        WizardStep::Beneficiaries,
        WizardStep::TrustDetails,
        WizardStep::FinancialPlanning,
        WizardStep::Review,
    ];

    pub fn number(&self) -> usize {
        *self as usize
    }

    pub fn from_number(step: usize) -> Result<Self, TrustError> {
        step.checked_sub(1)
            .and_then(|i| Self::ALL.get(i).copied())
            .ok_or(TrustError::InvalidStep { step })
    }

    pub fn next(&self) -> Self {
        Self::from_number(self.number() + 1).unwrap_or(WizardStep::Review)
    }

    pub fn prev(&self) -> Self {
        Self::from_number(self.number() - 1).unwrap_or(WizardStep::Parties)
    }
}

impl Display for WizardStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                WizardStep::Parties => "Settlor & Trustee",
                WizardStep::Beneficiaries => "Beneficiaries",
                WizardStep::TrustDetails => "Trust Details",
                WizardStep::FinancialPlanning => "Financial Planning",
                WizardStep::Review => "Review",
            }
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartyField {
    FullName,
    DateOfBirth,
    Sin,
    Address,
    Phone,
    Email,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BeneficiaryField {
    Party(PartyField),
    Relationship,
    DistributionInstructions,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanningField {
    CurrentIncome,
    GoalAmount,
    TargetDate,
    FinancialGoal,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FormEdit {
    Settlor(PartyField, String),
    Trustee(PartyField, String),
    FillSampleSettlor,
    AddBeneficiary,
    RemoveBeneficiary(usize),
    Beneficiary(usize, BeneficiaryField, String),
    AddAsset,
    RemoveAsset(usize),
    AssetName(usize, String),
    AssetValue(usize, String),
    ImportSampleAssets,
    TrustDetails(TrustDetails),
    Provisions(AdditionalProvisions),
    Advisors(ProfessionalAdvisors),
    Planning(PlanningField, String),
}

fn set_party_field(party: &Party, field: PartyField, value: String) -> Party {
    let mut party = party.clone();
    match field {
        PartyField::FullName => party.full_name = value,
        PartyField::DateOfBirth => party.date_of_birth = value,
        PartyField::Sin => party.sin = value,
        PartyField::Address => party.address = value,
        PartyField::Phone => party.phone = value,
        PartyField::Email => party.email = value,
    }
    party
}

fn set_beneficiary_field(
    beneficiary: &DeedBeneficiary,
    field: BeneficiaryField,
    value: String,
) -> DeedBeneficiary {
    let mut beneficiary = beneficiary.clone();
    match field {
        BeneficiaryField::Party(PartyField::FullName) => beneficiary.full_name = value,
        BeneficiaryField::Party(PartyField::DateOfBirth) => beneficiary.date_of_birth = value,
        BeneficiaryField::Party(PartyField::Sin) => beneficiary.sin = value,
        BeneficiaryField::Party(PartyField::Address) => beneficiary.address = value,
        BeneficiaryField::Party(PartyField::Phone) => beneficiary.phone = value,
        BeneficiaryField::Party(PartyField::Email) => beneficiary.email = value,
        BeneficiaryField::Relationship => beneficiary.relationship = value,
        BeneficiaryField::DistributionInstructions => {
            beneficiary.distribution_instructions = value
        }
    }
    beneficiary
}

fn set_planning_field(
    planning: &FinancialPlanning,
    field: PlanningField,
    value: String,
) -> FinancialPlanning {
    let mut planning = planning.clone();
    match field {
        PlanningField::CurrentIncome => planning.current_income = value,
        PlanningField::GoalAmount => planning.goal_amount = value,
        PlanningField::TargetDate => planning.target_date = value,
        PlanningField::FinancialGoal => planning.financial_goal = value,
    }
    planning
}

pub fn sample_settlor() -> Party {
    Party {
        full_name: "John Doe".to_string(),
        date_of_birth: "1970-01-01".to_string(),
        sin: "123-456-789".to_string(),
        address: "123 Example Street, Sampletown, XY 12345".to_string(),
        phone: "(555) 123-4567".to_string(),
        email: "john.doe@example.com".to_string(),
    }
}

pub fn sample_assets() -> Vec<TrustAsset> {
    [
        ("Stock Portfolio", "750000"),
        ("Real Estate", "400000"),
        ("Cash", "100000"),
    ]
    .into_iter()
    .map(|(name, value)| TrustAsset {
        name: name.to_string(),
        value: value.to_string(),
    })
    .collect()
}

/// Returns `data` with `edit` applied. Out-of-range indexes leave the record unchanged.
pub fn apply(data: &TrustFundData, edit: FormEdit) -> TrustFundData {
    let mut next = data.clone();
    match edit {
        FormEdit::Settlor(field, value) => {
            next.settlor = set_party_field(&data.settlor, field, value);
        }
        FormEdit::Trustee(field, value) => {
            next.trustee = set_party_field(&data.trustee, field, value);
        }
        FormEdit::FillSampleSettlor => next.settlor = sample_settlor(),
        FormEdit::AddBeneficiary => next.beneficiaries.push(DeedBeneficiary::default()),
        FormEdit::RemoveBeneficiary(index) => {
            if index < next.beneficiaries.len() {
                next.beneficiaries.remove(index);
            }
        }
        FormEdit::Beneficiary(index, field, value) => {
            if let Some(b) = next.beneficiaries.get_mut(index) {
                *b = set_beneficiary_field(b, field, value);
            }
        }
        FormEdit::AddAsset => next.trust_assets.push(TrustAsset::default()),
        FormEdit::RemoveAsset(index) => {
            // The form always keeps at least one asset row
            if next.trust_assets.len() > 1 && index < next.trust_assets.len() {
                next.trust_assets.remove(index);
            }
        }
        FormEdit::AssetName(index, name) => {
            if let Some(asset) = next.trust_assets.get_mut(index) {
                asset.name = name;
            }
        }
        FormEdit::AssetValue(index, value) => {
            if let Some(asset) = next.trust_assets.get_mut(index) {
                asset.value = value;
            }
        }
        FormEdit::ImportSampleAssets => next.trust_assets = sample_assets(),
        FormEdit::TrustDetails(details) => next.trust_details = details,
        FormEdit::Provisions(provisions) => next.additional_provisions = provisions,
        FormEdit::Advisors(advisors) => next.professional_advisors = advisors,
        FormEdit::Planning(field, value) => {
            next.financial_planning = set_planning_field(&data.financial_planning, field, value);
        }
    }
    next
}

/// Form progress: the current step plus the record being edited.
#[derive(Debug, Clone, PartialEq)]
pub struct Wizard {
    pub step: WizardStep,
    pub data: TrustFundData,
}

impl Default for Wizard {
    fn default() -> Self {
        Self::new(TrustFundData::default())
    }
}

impl Wizard {
    pub fn new(data: TrustFundData) -> Self {
        Self {
            step: WizardStep::Parties,
            data,
        }
    }

    pub fn next(&self) -> Self {
        Self {
            step: self.step.next(),
            data: self.data.clone(),
        }
    }

    pub fn prev(&self) -> Self {
        Self {
            step: self.step.prev(),
            data: self.data.clone(),
        }
    }

    pub fn edit(&self, edit: FormEdit) -> Self {
        Self {
            step: self.step,
            data: apply(&self.data, edit),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_navigation_saturates() {
        assert_eq!(WizardStep::Parties.prev(), WizardStep::Parties);
        assert_eq!(WizardStep::Parties.next(), WizardStep::Beneficiaries);
        assert_eq!(WizardStep::FinancialPlanning.next(), WizardStep::Review);
        assert_eq!(WizardStep::Review.next(), WizardStep::Review);
        assert_eq!(WizardStep::Review.prev(), WizardStep::FinancialPlanning);
    }

    #[test]
    fn test_step_from_number() {
        assert_eq!(WizardStep::from_number(3).unwrap(), WizardStep::TrustDetails);
        assert_eq!(
            WizardStep::from_number(0),
            Err(TrustError::InvalidStep { step: 0 })
        );
        assert!(WizardStep::from_number(6).is_err());
    }

    #[test]
    fn test_edits_leave_original_untouched() {
        let data = TrustFundData::default();
        let next = apply(
            &data,
            FormEdit::Settlor(PartyField::FullName, "Jane Doe".to_string()),
        );
        assert_eq!(next.settlor.full_name, "Jane Doe");
        assert!(data.settlor.full_name.is_empty());
    }

    #[test]
    fn test_beneficiary_rows() {
        let wizard = Wizard::default()
            .edit(FormEdit::AddBeneficiary)
            .edit(FormEdit::Beneficiary(
                1,
                BeneficiaryField::Relationship,
                "Daughter".to_string(),
            ))
            .edit(FormEdit::Beneficiary(
                7,
                BeneficiaryField::Relationship,
                "Ignored".to_string(),
            ));
        assert_eq!(wizard.data.beneficiaries.len(), 2);
        assert_eq!(wizard.data.beneficiaries[1].relationship, "Daughter");

        let wizard = wizard.edit(FormEdit::RemoveBeneficiary(0));
        assert_eq!(wizard.data.beneficiaries.len(), 1);
        assert_eq!(wizard.data.beneficiaries[0].relationship, "Daughter");
    }

    #[test]
    fn test_last_asset_row_cannot_be_removed() {
        let data = apply(&TrustFundData::default(), FormEdit::RemoveAsset(0));
        assert_eq!(data.trust_assets.len(), 1);

        let data = apply(&data, FormEdit::ImportSampleAssets);
        assert_eq!(data.trust_assets.len(), 3);
        let data = apply(&data, FormEdit::RemoveAsset(1));
        assert_eq!(data.trust_assets.len(), 2);
        assert_eq!(data.trust_assets[1].name, "Cash");
    }

    #[test]
    fn test_asset_and_planning_edits() {
        let wizard = Wizard::default()
            .next()
            .next()
            .edit(FormEdit::AssetName(0, "Cottage".to_string()))
            .edit(FormEdit::AssetValue(0, "250000".to_string()))
            .next()
            .edit(FormEdit::Planning(
                PlanningField::GoalAmount,
                "90000".to_string(),
            ));
        assert_eq!(wizard.step, WizardStep::FinancialPlanning);
        assert_eq!(wizard.data.trust_assets[0].name, "Cottage");
        assert_eq!(wizard.data.trust_assets[0].value, "250000");
        assert_eq!(wizard.data.financial_planning.goal_amount, "90000");
    }

    #[test]
    fn test_fill_sample_settlor() {
        let data = apply(&TrustFundData::default(), FormEdit::FillSampleSettlor);
        assert_eq!(data.settlor, sample_settlor());
        assert!(data.trustee.full_name.is_empty());
    }
}
