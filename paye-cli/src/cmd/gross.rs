use clap::Args;
use paye_core::models::ghana_monthly_2024;
use paye_core::{NetToGrossSolver, PayeInput, PayeWorksheet};
use rust_decimal::Decimal;
use tracing::debug;

use crate::cmd::report;
use crate::format;
use crate::input::parse_amount;

/// Inverse computation: desired net pay → required basic salary.
#[derive(Args, Debug)]
pub struct GrossCommand {
    /// Desired net monthly pay in GHS (commas allowed, e.g. "2,079.25")
    net: String,

    /// Monthly cash allowances in GHS
    #[arg(short, long, default_value = "0")]
    allowances: String,

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

impl GrossCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let target_net = parse_amount(&self.net)?;
        let allowances = parse_amount(&self.allowances)?;
        let relief = parse_amount(&self.relief)?;

        let schedule = ghana_monthly_2024();
        let basic_salary = NetToGrossSolver::new(&schedule).solve(target_net, allowances, relief);
        debug!(%target_net, %basic_salary, "solved basic salary");

        // Report the forward evaluation of the solved salary, so every figure
        // shown is internally consistent with the breakdown.
        let result = PayeWorksheet::new(&schedule).calculate(&PayeInput {
            basic_salary,
            allowances,
            benefit_in_kind: Decimal::ZERO,
            relief,
        });

        if self.json {
            println!("{}", serde_json::to_string_pretty(&result)?);
            return Ok(());
        }

        println!("Required Basic Salary: {}", format::ghs(basic_salary));
        println!();
        report::print_summary(&result);
        if self.breakdown {
            report::print_breakdown(&result, basic_salary);
        }
        Ok(())
    }
}
