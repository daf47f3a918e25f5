use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One row of the bracket-by-bracket tax breakdown.
///
/// Rows are produced in schedule order and carry running cumulative totals,
/// so the last row's `cumulative_tax` equals the result's `total_tax`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BracketLine {
    /// Lower bound of the bracket this row covers.
    pub lower: Decimal,

    /// Upper bound, `None` for the unbounded top bracket.
    pub upper: Option<Decimal>,

    /// Marginal rate as a fraction.
    pub rate: Decimal,

    /// Income allocated to this bracket.
    pub taxable_amount: Decimal,

    /// Tax owed for this bracket (`taxable_amount × rate`).
    pub tax: Decimal,

    /// Income allocated so far, this bracket included.
    pub cumulative_income: Decimal,

    /// Tax accrued so far, this bracket included.
    pub cumulative_tax: Decimal,
}

/// Full outcome of a monthly PAYE computation.
///
/// Recomputed from scratch on every call; never partially updated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayeResult {
    /// Basic salary + allowances + benefit in kind.
    pub gross_remuneration: Decimal,

    /// Total income tax across all brackets.
    pub total_tax: Decimal,

    /// SSNIT employee contribution (5.5% of basic salary).
    pub ssnit_contribution: Decimal,

    /// `total_tax + ssnit_contribution`.
    pub total_deductions: Decimal,

    /// `gross_remuneration - total_deductions`.
    pub net_income: Decimal,

    /// Total deductions as a percentage of gross remuneration, 0 when gross
    /// remuneration is 0.
    pub effective_tax_rate: Decimal,

    /// Per-bracket allocation rows, in schedule order.
    pub breakdown: Vec<BracketLine>,
}
