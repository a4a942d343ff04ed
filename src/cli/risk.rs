use super::ui;
use crate::core::risk::{Portfolio, RiskAssessment, RiskModel};
use anyhow::Result;
use comfy_table::{Cell, CellAlignment};
use tracing::debug;

const BAR_WIDTH: usize = 30;

impl RiskAssessment {
    pub fn display_as_table(&self, model: &RiskModel) -> String {
        let mut table = ui::new_styled_table();
        table.set_header(vec![
            ui::header_cell("Account"),
            ui::header_cell("Balance"),
            ui::header_cell("Share"),
            ui::header_cell("Weight"),
            ui::header_cell(""),
        ]);

        for share in &self.breakdown {
            let weight = model.weights.get(&share.account).copied().unwrap_or(0.0);
            table.add_row(vec![
                Cell::new(share.account.to_string()),
                ui::amount_cell(share.balance),
                ui::percentage_cell(share.percentage),
                Cell::new(format!("{weight:.2}")).set_alignment(CellAlignment::Right),
                Cell::new(ui::bar(share.percentage / 100.0, BAR_WIDTH)),
            ]);
        }

        let mut output = format!(
            "Risk Level: {}\n{}  {}% Risk\n\n",
            ui::tint_text(&self.label, &self.color),
            ui::tint_text(&ui::bar(self.score, BAR_WIDTH), &self.color),
            (self.score * 100.0).round()
        );
        output.push_str(&table.to_string());
        output.push_str(&format!(
            "\n\n{}: {}",
            ui::style_text("Total Value", ui::StyleType::TotalLabel),
            ui::style_text(&format!("{:.2}", self.total_value), ui::StyleType::TotalValue)
        ));
        output
    }
}

pub fn run(portfolio: &Portfolio, model: &RiskModel) -> Result<()> {
    let assessment = model.assess(portfolio);
    debug!(score = assessment.score, label = %assessment.label, "Assessed portfolio risk");

    println!(
        "\n{}\n",
        ui::style_text("Stock Portfolio Breakdown", ui::StyleType::Title)
    );
    println!("{}", assessment.display_as_table(model));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::risk::sample_portfolio;

    #[test]
    fn test_risk_display() {
        let model = RiskModel::default();
        let output = model.assess(&sample_portfolio()).display_as_table(&model);
        assert!(output.contains("Risk Level:"));
        assert!(output.contains("Low Risk"));
        assert!(output.contains("24% Risk"));
        assert!(output.contains("Crypto Account"));
        assert!(output.contains("66.7%"));
        assert!(output.contains("750000.00"));
    }
}
