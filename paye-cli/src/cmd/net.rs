use clap::Args;
use paye_core::models::ghana_monthly_2024;
use paye_core::{PayeInput, PayeWorksheet};

use crate::cmd::report;
use crate::input::parse_amount;

/// Forward computation: basic salary → net pay.
#[derive(Args, Debug)]
pub struct NetCommand {
    /// Gross monthly basic salary in GHS (commas allowed, e.g. "2,000")
    basic: String,

    /// Monthly cash allowances in GHS
    #[arg(short, long, default_value = "0")]
    allowances: String,

    /// Taxable benefit in kind in GHS
    #[arg(short, long, default_value = "0")]
    benefit_in_kind: String,

    /// Monthly deductible relief in GHS
    #[arg(short, long, default_value = "0")]
    relief: String,

    /// Print the bracket-by-bracket breakdown table
    #[arg(long)]
    breakdown: bool,

    /// Output the full result as JSON instead of formatted text
    #[arg(long)]
    json: bool,
}

impl NetCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let input = PayeInput {
            basic_salary: parse_amount(&self.basic)?,
            allowances: parse_amount(&self.allowances)?,
            benefit_in_kind: parse_amount(&self.benefit_in_kind)?,
            relief: parse_amount(&self.relief)?,
        };

        let schedule = ghana_monthly_2024();
        let result = PayeWorksheet::new(&schedule).calculate(&input);

        if self.json {
            println!("{}", serde_json::to_string_pretty(&result)?);
            return Ok(());
        }

        report::print_summary(&result);
        if self.breakdown {
            report::print_breakdown(&result, input.basic_salary);
        }
        Ok(())
    }
}
