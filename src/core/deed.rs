//! Renders the trust record into a deed document.
use crate::core::trust::{Party, TrustFundData};
use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::fmt::Write;
use std::str::FromStr;

const LONG_DATE: &str = "%B %d, %Y";

const DECLARATION: &str = "IN WITNESS WHEREOF, the parties hereto have executed this Trust Deed \
as of the day and year first above written. The Settlor hereby declares their intention to create \
a trust and transfers the initial trust property to the Trustee(s) to hold upon the trusts \
declared in this deed.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeedFormat {
    #[default]
    Text,
    Markdown,
    Json,
}

impl DeedFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            DeedFormat::Text => "txt",
            DeedFormat::Markdown => "md",
            DeedFormat::Json => "json",
        }
    }
}

impl FromStr for DeedFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(DeedFormat::Text),
            "markdown" | "md" => Ok(DeedFormat::Markdown),
            "json" => Ok(DeedFormat::Json),
            _ => Err(anyhow::anyhow!("Invalid deed format: {}", s)),
        }
    }
}

/// Formats ISO dates as "Month DD, YYYY"; anything else is shown as typed.
pub fn format_date(value: &str) -> String {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map(|d| d.format(LONG_DATE).to_string())
        .unwrap_or_else(|_| value.to_string())
}

/// File name the deed is saved under, derived from the trust name.
///
/// Path separators and other characters file systems reject become `-`, so
/// the file always lands directly in the output directory.
pub fn deed_file_name(data: &TrustFundData, format: DeedFormat) -> String {
    let stem: String = data
        .trust_details
        .name
        .trim()
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '-',
            c if c.is_control() => '-',
            c => c,
        })
        .collect();
    let stem = if stem.is_empty() { "trust-deed" } else { stem.as_str() };
    format!("{stem}.{}", format.extension())
}

/// Section/field writer shared by the text and markdown layouts.
struct Layout {
    markdown: bool,
    out: String,
}

impl Layout {
    fn title(&mut self, text: &str) {
        if self.markdown {
            let _ = writeln!(self.out, "# {text}\n");
        } else {
            let _ = writeln!(self.out, "{text:^72}\n");
        }
    }

    fn line(&mut self, text: &str) {
        let _ = writeln!(self.out, "{text}\n");
    }

    fn heading(&mut self, text: &str) {
        if self.markdown {
            let _ = writeln!(self.out, "## {text}\n");
        } else {
            let _ = writeln!(self.out, "{text}\n{}", "-".repeat(text.len()));
        }
    }

    fn subheading(&mut self, text: &str) {
        if self.markdown {
            let _ = writeln!(self.out, "### {text}\n");
        } else {
            let _ = writeln!(self.out, "  {text}");
        }
    }

    fn field(&mut self, label: &str, value: &str) {
        if self.markdown {
            let _ = writeln!(self.out, "- **{label}:** {value}");
        } else {
            let _ = writeln!(self.out, "  {:<28}{value}", format!("{label}:"));
        }
    }

    fn end_section(&mut self) {
        self.out.push('\n');
    }

    fn party(&mut self, heading: &str, party: &Party) {
        self.heading(heading);
        self.field("Full Name", &party.full_name);
        self.field("Date of Birth", &format_date(&party.date_of_birth));
        self.field("SIN", &party.sin);
        self.field("Address", &party.address);
        self.field("Contact", &format!("{} | {}", party.phone, party.email));
        self.end_section();
    }
}

fn render_layout(data: &TrustFundData, generated_on: NaiveDate, markdown: bool) -> String {
    let today = generated_on.format(LONG_DATE).to_string();
    let mut doc = Layout {
        markdown,
        out: String::new(),
    };

    doc.title("TRUST DEED");
    doc.line(&format!("This Trust Deed is made on {today}"));

    doc.party("1. SETTLOR INFORMATION", &data.settlor);
    doc.party("2. TRUSTEE INFORMATION", &data.trustee);

    doc.heading("3. BENEFICIARIES");
    for (i, beneficiary) in data.beneficiaries.iter().enumerate() {
        doc.subheading(&format!("Beneficiary {}", i + 1));
        doc.field("Full Name", &beneficiary.full_name);
        doc.field("Relationship", &beneficiary.relationship);
        doc.field("Date of Birth", &format_date(&beneficiary.date_of_birth));
        doc.field(
            "Distribution Instructions",
            &beneficiary.distribution_instructions,
        );
        doc.end_section();
    }

    let details = &data.trust_details;
    doc.heading("4. TRUST DETAILS");
    doc.field("Trust Name", &details.name);
    doc.field("Type", &data.kind_display().to_uppercase());
    doc.field("Purpose", &details.purpose);
    doc.field("Initial Property", &details.initial_property);
    for asset in data.trust_assets.iter().filter(|a| !a.name.is_empty()) {
        doc.field("Asset", &format!("{} ({})", asset.name, asset.value));
    }
    doc.end_section();

    let provisions = &data.additional_provisions;
    doc.heading("5. ADDITIONAL PROVISIONS");
    doc.field("Duration", &provisions.duration);
    doc.field("Trustee Powers", &provisions.trustee_powers);
    doc.field("Successor Trustee", &provisions.successor_trustee);
    doc.field("Distribution Plan", &provisions.distribution_plan);
    doc.field("Special Instructions", &provisions.special_instructions);
    doc.end_section();

    let planning = &data.financial_planning;
    doc.heading("6. FINANCIAL PLANNING");
    doc.field("Current Income", &planning.current_income);
    doc.field("Goal Amount", &planning.goal_amount);
    doc.field("Target Date", &format_date(&planning.target_date));
    doc.field("Financial Goal", &planning.financial_goal);
    doc.end_section();

    let advisors = &data.professional_advisors;
    doc.heading("7. PROFESSIONAL ADVISORS");
    doc.field("Legal Advisor", &advisors.lawyer.name);
    doc.field("Contact", &advisors.lawyer.contact);
    doc.field("Financial Advisor", &advisors.accountant.name);
    doc.field("Contact", &advisors.accountant.contact);
    doc.end_section();

    doc.line(DECLARATION);
    doc.line(&format!(
        "{:<34}{:<34}\n{:<34}{:<34}",
        "______________________________",
        "______________________________",
        "Settlor",
        "Trustee"
    ));
    doc.line(&format!(
        "This document was generated electronically on {today}\nPage 1 of 1"
    ));

    doc.out
}

pub fn render_deed(
    data: &TrustFundData,
    generated_on: NaiveDate,
    format: DeedFormat,
) -> Result<String> {
    match format {
        DeedFormat::Text => Ok(render_layout(data, generated_on, false)),
        DeedFormat::Markdown => Ok(render_layout(data, generated_on, true)),
        DeedFormat::Json => {
            serde_json::to_string_pretty(data).context("Failed to serialize trust record")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::trust::{DeedBeneficiary, TrustKind};
    use crate::core::wizard::{FormEdit, apply};

    fn sample() -> TrustFundData {
        let mut data = apply(&TrustFundData::default(), FormEdit::FillSampleSettlor);
        data.trust_details.name = "Doe Family Trust".to_string();
        data.trust_details.kind = TrustKind::Testamentary;
        data.beneficiaries = vec![DeedBeneficiary {
            full_name: "Amy Doe".to_string(),
            relationship: "Daughter".to_string(),
            date_of_birth: "not sure".to_string(),
            ..DeedBeneficiary::default()
        }];
        data.financial_planning.target_date = "2040-06-30".to_string();
        data
    }

    fn generated_on() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 5).unwrap()
    }

    #[test]
    fn test_text_deed_sections_in_order() {
        let deed = render_deed(&sample(), generated_on(), DeedFormat::Text).unwrap();

        assert!(deed.contains("TRUST DEED"));
        assert!(deed.contains("This Trust Deed is made on March 05, 2024"));
        assert!(deed.contains("January 01, 1970"));
        assert!(deed.contains("June 30, 2040"));
        assert!(deed.contains("not sure"));
        assert!(deed.contains("TESTAMENTARY"));
        assert!(deed.contains("IN WITNESS WHEREOF"));

        let headings = [
            "1. SETTLOR INFORMATION",
            "2. TRUSTEE INFORMATION",
            "3. BENEFICIARIES",
            "4. TRUST DETAILS",
            "5. ADDITIONAL PROVISIONS",
            "6. FINANCIAL PLANNING",
            "7. PROFESSIONAL ADVISORS",
        ];
        let positions: Vec<usize> = headings.iter().map(|h| deed.find(h).unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_markdown_deed() {
        let deed = render_deed(&sample(), generated_on(), DeedFormat::Markdown).unwrap();
        assert!(deed.starts_with("# TRUST DEED"));
        assert!(deed.contains("## 3. BENEFICIARIES"));
        assert!(deed.contains("- **Relationship:** Daughter"));
    }

    #[test]
    fn test_json_deed_round_trips_record() {
        let data = sample();
        let json = render_deed(&data, generated_on(), DeedFormat::Json).unwrap();
        let parsed: TrustFundData = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, data);
    }

    #[test]
    fn test_deed_file_name() {
        assert_eq!(
            deed_file_name(&sample(), DeedFormat::Markdown),
            "Doe Family Trust.md"
        );
        assert_eq!(
            deed_file_name(&TrustFundData::default(), DeedFormat::Text),
            "trust-deed.txt"
        );
    }

    #[test]
    fn test_deed_file_name_strips_path_characters() {
        let mut data = TrustFundData::default();
        data.trust_details.name = "Smith/Jones Trust".to_string();
        assert_eq!(
            deed_file_name(&data, DeedFormat::Text),
            "Smith-Jones Trust.txt"
        );

        data.trust_details.name = "../../escape".to_string();
        assert_eq!(deed_file_name(&data, DeedFormat::Json), "..-..-escape.json");

        data.trust_details.name = r"C:\Trusts\Doe?".to_string();
        assert_eq!(
            deed_file_name(&data, DeedFormat::Markdown),
            "C--Trusts-Doe-.md"
        );
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!("MD".parse::<DeedFormat>().unwrap(), DeedFormat::Markdown);
        assert!("pdf".parse::<DeedFormat>().is_err());
    }
}
