//! Monthly PAYE worksheet for the Ghana GRA bracket schedule.
//!
//! This module implements the forward computation: given monthly salary
//! inputs, it walks the ordered bracket schedule, allocating income slices to
//! brackets in order and accumulating marginal tax, then derives net pay.
//!
//! # Computation steps
//!
//! | Step | Description |
//! |------|-------------|
//! | 1    | Gross remuneration = basic salary + allowances + benefit in kind |
//! | 2    | SSNIT contribution = 5.5% × basic salary |
//! | 3    | Chargeable income = gross remuneration − deductible relief |
//! | 4    | Walk brackets, allocating chargeable income and accruing tax |
//! | 5    | Total deductions = total tax + SSNIT contribution |
//! | 6    | Net income = gross remuneration − total deductions |
//! | 7    | Effective rate = total deductions ÷ gross remuneration × 100 |
//!
//! SSNIT is deliberately **not** subtracted from the income fed to the
//! bracket walk: the bracket thresholds apply to remuneration net of relief
//! only, while net pay additionally subtracts the contribution.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use paye_core::{PayeInput, PayeWorksheet};
//! use paye_core::models::ghana_monthly_2024;
//!
//! let schedule = ghana_monthly_2024();
//! let worksheet = PayeWorksheet::new(&schedule);
//!
//! let result = worksheet.calculate(&PayeInput {
//!     basic_salary: dec!(2000),
//!     allowances: dec!(500),
//!     benefit_in_kind: dec!(0),
//!     relief: dec!(100),
//! });
//!
//! assert_eq!(result.gross_remuneration, dec!(2500));
//! assert_eq!(result.total_tax, dec!(310.75));
//! assert_eq!(result.ssnit_contribution, dec!(110));
//! assert_eq!(result.net_income, dec!(2079.25));
//! ```

use rust_decimal::Decimal;

use crate::calculations::common::floor_zero;
use crate::models::{BracketLine, BracketSchedule, PayeInput, PayeResult, SSNIT_RATE};

/// Calculator for the monthly PAYE worksheet.
///
/// Borrows a validated [`BracketSchedule`]; because the schedule invariants
/// were checked at construction, `calculate` is total and never fails.
#[derive(Debug, Clone)]
pub struct PayeWorksheet<'a> {
    schedule: &'a BracketSchedule,
}

impl<'a> PayeWorksheet<'a> {
    pub fn new(schedule: &'a BracketSchedule) -> Self {
        Self { schedule }
    }

    /// Computes the full PAYE result for one month of salary inputs.
    ///
    /// Negative inputs are clamped to zero rather than rejected; input
    /// sanitization proper belongs to the presentation layer.
    pub fn calculate(&self, input: &PayeInput) -> PayeResult {
        let basic = floor_zero(input.basic_salary);
        let allowances = floor_zero(input.allowances);
        let benefit_in_kind = floor_zero(input.benefit_in_kind);
        let relief = floor_zero(input.relief);

        let gross_remuneration = basic + allowances + benefit_in_kind;
        let ssnit_contribution = basic * SSNIT_RATE;

        let (total_tax, breakdown) = self.allocate(gross_remuneration - relief);

        let total_deductions = total_tax + ssnit_contribution;
        let net_income = gross_remuneration - total_deductions;
        let effective_tax_rate = if gross_remuneration > Decimal::ZERO {
            total_deductions / gross_remuneration * Decimal::ONE_HUNDRED
        } else {
            Decimal::ZERO
        };

        PayeResult {
            gross_remuneration,
            total_tax,
            ssnit_contribution,
            total_deductions,
            net_income,
            effective_tax_rate,
            breakdown,
        }
    }

    /// Walks the bracket schedule, allocating `chargeable` income to brackets
    /// in order.
    ///
    /// Returns the accrued tax and one [`BracketLine`] per visited bracket.
    /// Stops as soon as the allocated income reaches `chargeable`, so higher
    /// untouched brackets produce no rows. Lines are kept at full precision;
    /// they sum exactly to the returned total.
    fn allocate(&self, chargeable: Decimal) -> (Decimal, Vec<BracketLine>) {
        let mut total_tax = Decimal::ZERO;
        let mut cumulative_income = Decimal::ZERO;
        let mut cumulative_tax = Decimal::ZERO;
        let mut breakdown = Vec::new();

        for bracket in self.schedule.brackets() {
            // Only the income above the bracket's lower bound is taxable in
            // this bracket; lower slices were allocated to earlier brackets.
            let headroom = floor_zero(chargeable - bracket.min_income);
            let taxable_amount = match bracket.width() {
                Some(width) => headroom.min(width),
                None => headroom,
            };
            let tax = taxable_amount * bracket.tax_rate;

            total_tax += tax;
            cumulative_income += taxable_amount;
            cumulative_tax += tax;

            breakdown.push(BracketLine {
                lower: bracket.min_income,
                upper: bracket.max_income,
                rate: bracket.tax_rate,
                taxable_amount,
                tax,
                cumulative_income,
                cumulative_tax,
            });

            if cumulative_income >= chargeable {
                break;
            }
        }

        (total_tax, breakdown)
    }
}
