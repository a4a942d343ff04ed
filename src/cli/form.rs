use super::ui;
use crate::core::trust::{Party, TrustFundData};
use crate::core::wizard::{FormEdit, Wizard, WizardStep};
use anyhow::Result;
use comfy_table::Cell;
use tracing::debug;

/// Form step to show, 1-based, and the sample data to load before showing it.
#[derive(Debug, Clone)]
pub struct FormRequest {
    pub step: usize,
    pub sample_settlor: bool,
    pub sample_assets: bool,
}

/// Opens the form on `data`, applies the requested sample edits and moves to
/// the requested step.
pub fn open(data: &TrustFundData, request: &FormRequest) -> Result<Wizard> {
    let target = WizardStep::from_number(request.step)?;

    let mut wizard = Wizard::new(data.clone());
    if request.sample_settlor {
        wizard = wizard.edit(FormEdit::FillSampleSettlor);
    }
    if request.sample_assets {
        wizard = wizard.edit(FormEdit::ImportSampleAssets);
    }
    while wizard.step < target {
        wizard = wizard.next();
    }
    debug!(step = wizard.step.number(), "Opened setup form");
    Ok(wizard)
}

fn party_rows(role: &str, party: &Party) -> Vec<(String, String)> {
    vec![
        (format!("{role} name"), party.full_name.clone()),
        (format!("{role} date of birth"), party.date_of_birth.clone()),
        (format!("{role} SIN"), party.sin.clone()),
        (format!("{role} address"), party.address.clone()),
        (format!("{role} phone"), party.phone.clone()),
        (format!("{role} email"), party.email.clone()),
    ]
}

fn step_fields(wizard: &Wizard) -> Vec<(String, String)> {
    let data = &wizard.data;
    match wizard.step {
        WizardStep::Parties => {
            let mut rows = party_rows("Settlor", &data.settlor);
            rows.extend(party_rows("Trustee", &data.trustee));
            rows
        }
        WizardStep::Beneficiaries => data
            .beneficiaries
            .iter()
            .enumerate()
            .flat_map(|(i, b)| {
                let n = i + 1;
                [
                    (format!("Beneficiary {n} name"), b.full_name.clone()),
                    (format!("Beneficiary {n} relationship"), b.relationship.clone()),
                    (
                        format!("Beneficiary {n} distribution"),
                        b.distribution_instructions.clone(),
                    ),
                ]
            })
            .collect(),
        WizardStep::TrustDetails => {
            let details = &data.trust_details;
            let provisions = &data.additional_provisions;
            let mut rows = vec![
                ("Trust name".to_string(), details.name.clone()),
                ("Trust type".to_string(), data.kind_display()),
                ("Purpose".to_string(), details.purpose.clone()),
                ("Initial property".to_string(), details.initial_property.clone()),
            ];
            rows.extend(data.trust_assets.iter().enumerate().map(|(i, asset)| {
                let value = if asset.name.is_empty() && asset.value.is_empty() {
                    String::new()
                } else {
                    format!("{}: {}", asset.name, asset.value)
                };
                (format!("Asset {}", i + 1), value)
            }));
            rows.extend([
                ("Duration".to_string(), provisions.duration.clone()),
                ("Trustee powers".to_string(), provisions.trustee_powers.clone()),
                (
                    "Successor trustee".to_string(),
                    provisions.successor_trustee.clone(),
                ),
                (
                    "Distribution plan".to_string(),
                    provisions.distribution_plan.clone(),
                ),
                (
                    "Special instructions".to_string(),
                    provisions.special_instructions.clone(),
                ),
            ]);
            rows
        }
        WizardStep::FinancialPlanning => {
            let planning = &data.financial_planning;
            vec![
                ("Current income".to_string(), planning.current_income.clone()),
                ("Goal amount".to_string(), planning.goal_amount.clone()),
                ("Target date".to_string(), planning.target_date.clone()),
                ("Financial goal".to_string(), planning.financial_goal.clone()),
            ]
        }
        WizardStep::Review => vec![
            ("Settlor".to_string(), data.settlor.full_name.clone()),
            ("Trustee".to_string(), data.trustee.full_name.clone()),
            (
                "Beneficiaries".to_string(),
                data.beneficiaries.len().to_string(),
            ),
            ("Trust name".to_string(), data.trust_details.name.clone()),
            ("Trust type".to_string(), data.kind_display()),
            ("Assets".to_string(), data.trust_assets.len().to_string()),
        ],
    }
}

/// Field table for the wizard's current step.
pub fn display_step(wizard: &Wizard) -> String {
    let mut table = ui::new_styled_table();
    table.set_header(vec![ui::header_cell("Field"), ui::header_cell("Value")]);
    for (field, value) in step_fields(wizard) {
        let value = if value.trim().is_empty() {
            ui::style_text("(blank)", ui::StyleType::Subtle)
        } else {
            value
        };
        table.add_row(vec![Cell::new(field), Cell::new(value)]);
    }

    format!(
        "Step {} of {}: {}\n\n{}",
        wizard.step.number(),
        WizardStep::ALL.len(),
        ui::style_text(&wizard.step.to_string(), ui::StyleType::TotalLabel),
        table
    )
}

pub fn run(data: &TrustFundData, request: &FormRequest) -> Result<()> {
    let wizard = open(data, request)?;

    println!(
        "\n{}\n",
        ui::style_text("Trust Fund Setup", ui::StyleType::Title)
    );
    println!("{}", display_step(&wizard));
    if wizard.step != WizardStep::Review {
        println!("\nNext: {}", wizard.next().step);
    }
    println!(
        "{}",
        ui::style_text(
            "Changes are not written back to the configuration file.",
            ui::StyleType::Subtle
        )
    );
    Ok(())
}
