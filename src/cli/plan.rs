use super::ui;
use crate::core::planning::monthly_contribution;
use crate::core::trust::FinancialPlanning;
use anyhow::Result;
use chrono::{Local, NaiveDate};

/// Summary of the savings plan, or a hint when it cannot be computed.
pub fn describe_plan(planning: &FinancialPlanning, today: NaiveDate) -> String {
    match monthly_contribution(&planning.goal_amount, &planning.target_date, today) {
        Some(amount) => format!(
            "To reach {} by {}, you need to contribute: {} per month",
            planning.goal_amount,
            planning.target_date,
            ui::style_text(&format!("{amount:.2}"), ui::StyleType::TotalValue)
        ),
        None => ui::style_text(
            "Set a numeric goal amount and a target date at least one month ahead.",
            ui::StyleType::Warning,
        ),
    }
}

pub fn run(planning: &FinancialPlanning) -> Result<()> {
    println!(
        "\n{}\n",
        ui::style_text("Financial Planning", ui::StyleType::Title)
    );
    if !planning.financial_goal.is_empty() {
        println!("Goal: {}\n", planning.financial_goal);
    }
    println!("{}", describe_plan(planning, Local::now().date_naive()));
    Ok(())
}
