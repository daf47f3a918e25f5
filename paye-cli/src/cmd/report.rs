//! Terminal rendering of a [`PayeResult`]: summary lines and the
//! bracket-by-bracket breakdown table.

use paye_core::models::{PayeResult, SSNIT_RATE};
use rust_decimal::Decimal;
use tabled::{
    Table, Tabled,
    settings::{Alignment, Modify, Style, object::Rows},
};

use crate::format;

/// Row of the breakdown table.
///
/// The first row is always the SSNIT contribution (levied on basic salary,
/// outside the bracket walk); the remaining rows are the visited brackets.
#[derive(Debug, Clone, Tabled)]
pub struct BreakdownRow {
    #[tabled(rename = "Bracket")]
    pub bracket: String,

    #[tabled(rename = "Rate")]
    pub rate: String,

    #[tabled(rename = "Taxable Amount")]
    pub taxable_amount: String,

    #[tabled(rename = "Tax")]
    pub tax: String,

    #[tabled(rename = "Cum. Income")]
    pub cumulative_income: String,

    #[tabled(rename = "Cum. Tax")]
    pub cumulative_tax: String,
}

pub fn print_summary(result: &PayeResult) {
    println!("Gross Remuneration:  {}", format::ghs(result.gross_remuneration));
    println!("Total Tax Payable:   {}", format::ghs(result.total_tax));
    println!("SSNIT Contribution:  {}", format::ghs(result.ssnit_contribution));
    println!("Total Deductions:    {}", format::ghs(result.total_deductions));
    println!("Net Income:          {}", format::ghs(result.net_income));
    println!("Effective Tax Rate:  {}", format::percent(result.effective_tax_rate));
}

pub fn print_breakdown(result: &PayeResult, basic_salary: Decimal) {
    let table = Table::new(breakdown_rows(result, basic_salary))
        .with(Style::rounded())
        .with(Modify::new(Rows::new(1..)).with(Alignment::right()))
        .to_string();
    println!("{table}");
}

fn breakdown_rows(result: &PayeResult, basic_salary: Decimal) -> Vec<BreakdownRow> {
    let mut rows = vec![BreakdownRow {
        bracket: "SSNIT contribution".to_string(),
        rate: format::rate_percent(SSNIT_RATE),
        taxable_amount: format::money(basic_salary),
        tax: format::money(result.ssnit_contribution),
        cumulative_income: "—".to_string(),
        cumulative_tax: "—".to_string(),
    }];

    for line in &result.breakdown {
        let bracket = match line.upper {
            Some(upper) => format!("GHS {} – {}", format::money(line.lower), format::money(upper)),
            None => format!("GHS {}+", format::money(line.lower)),
        };
        rows.push(BreakdownRow {
            bracket,
            rate: format::rate_percent(line.rate),
            taxable_amount: format::money(line.taxable_amount),
            tax: format::money(line.tax),
            cumulative_income: format::money(line.cumulative_income),
            cumulative_tax: format::money(line.cumulative_tax),
        });
    }
    rows
}

#[cfg(test)]
mod tests {
    use paye_core::models::ghana_monthly_2024;
    use paye_core::{PayeInput, PayeWorksheet};
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn breakdown_rows_lead_with_ssnit_then_visited_brackets() {
        let schedule = ghana_monthly_2024();
        let result = PayeWorksheet::new(&schedule).calculate(&PayeInput {
            basic_salary: dec!(2000),
            allowances: dec!(500),
            benefit_in_kind: dec!(0),
            relief: dec!(100),
        });

        let rows = breakdown_rows(&result, dec!(2000));

        // SSNIT row plus the four visited brackets.
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[0].bracket, "SSNIT contribution");
        assert_eq!(rows[0].rate, "5.5%");
        assert_eq!(rows[0].tax, "110.00");
        assert_eq!(rows[1].bracket, "GHS 0.00 – 490.00");
        assert_eq!(rows[1].rate, "0%");
        assert_eq!(rows[4].bracket, "GHS 730.00 – 3,896.67");
        assert_eq!(rows[4].rate, "17.5%");
        assert_eq!(rows[4].taxable_amount, "1,670.00");
        assert_eq!(rows[4].cumulative_tax, "310.75");
    }

    #[test]
    fn top_bracket_renders_open_range() {
        let schedule = ghana_monthly_2024();
        let result = PayeWorksheet::new(&schedule).calculate(&PayeInput {
            basic_salary: dec!(0),
            allowances: dec!(60000),
            benefit_in_kind: dec!(0),
            relief: dec!(0),
        });

        let rows = breakdown_rows(&result, dec!(0));
        let last = rows.last().unwrap();

        assert_eq!(last.bracket, "GHS 50,416.67+");
        assert_eq!(last.rate, "35%");
    }
}
