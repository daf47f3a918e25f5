//! Inverse PAYE: derive the basic salary that produces a desired net pay.
//!
//! The forward function (basic salary → net income) is monotone
//! non-decreasing: a cedi of extra basic salary raises gross remuneration by
//! one cedi while tax plus SSNIT can claim at most the top marginal rate plus
//! the contribution rate of it. That makes bisection safe, provided the
//! search interval actually brackets the target.
//!
//! The naive upper bound of twice the target net is a heuristic, not a proven
//! bound, so [`NetToGrossSolver::solve`] first doubles the upper bound until
//! the forward net at that bound reaches the target, then bisects. The
//! doubling count is capped, and bisection on a bounded interval with a fixed
//! tolerance terminates, so the solve is deterministic for every input. If
//! the cap is ever hit the solver still converges to the best candidate in
//! range, silently; there is no error path.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use paye_core::NetToGrossSolver;
//! use paye_core::models::ghana_monthly_2024;
//!
//! let schedule = ghana_monthly_2024();
//! let solver = NetToGrossSolver::new(&schedule);
//!
//! // Basic 2000 + allowances 500 with relief 100 nets 2079.25.
//! let basic = solver.solve(dec!(2079.25), dec!(500), dec!(100));
//! assert!((basic - dec!(2000)).abs() <= dec!(0.02));
//! ```

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::debug;

use crate::calculations::common::floor_zero;
use crate::calculations::paye::PayeWorksheet;
use crate::models::{BracketSchedule, PayeInput};

/// Convergence tolerance, in GHS, for both the bisection interval and the
/// early exit on the computed net.
const TOLERANCE: Decimal = dec!(0.01);

/// Upper-bound doublings are capped so termination never depends on the
/// forward function's behaviour.
const MAX_DOUBLINGS: u32 = 64;

/// Numeric inverter for [`PayeWorksheet`].
#[derive(Debug, Clone)]
pub struct NetToGrossSolver<'a> {
    worksheet: PayeWorksheet<'a>,
}

impl<'a> NetToGrossSolver<'a> {
    pub fn new(schedule: &'a BracketSchedule) -> Self {
        Self {
            worksheet: PayeWorksheet::new(schedule),
        }
    }

    /// Finds the basic salary whose net income matches `target_net`, given
    /// fixed allowances and relief.
    ///
    /// Returns 0 for a non-positive target. When allowances alone already
    /// exceed the target net, the search converges to a basic salary of 0,
    /// the smallest admissible input.
    pub fn solve(&self, target_net: Decimal, allowances: Decimal, relief: Decimal) -> Decimal {
        let target = floor_zero(target_net);
        let allowances = floor_zero(allowances);
        let relief = floor_zero(relief);

        if target.is_zero() {
            return Decimal::ZERO;
        }

        let mut low = Decimal::ZERO;
        let mut high = target * dec!(2);

        let mut doublings = 0;
        while self.net_at(high, allowances, relief) < target && doublings < MAX_DOUBLINGS {
            high *= dec!(2);
            doublings += 1;
        }
        if doublings > 0 {
            debug!(%target, %high, doublings, "expanded solver upper bound");
        }

        while high - low > TOLERANCE {
            let mid = (low + high) / dec!(2);
            let net = self.net_at(mid, allowances, relief);

            if (net - target).abs() < TOLERANCE {
                return mid;
            }
            if net > target {
                high = mid;
            } else {
                low = mid;
            }
        }

        (low + high) / dec!(2)
    }

    fn net_at(&self, basic_salary: Decimal, allowances: Decimal, relief: Decimal) -> Decimal {
        self.worksheet
            .calculate(&PayeInput {
                basic_salary,
                allowances,
                benefit_in_kind: Decimal::ZERO,
                relief,
            })
            .net_income
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;
    use crate::models::{TaxBracket, ghana_monthly_2024};

    fn assert_close(actual: Decimal, expected: Decimal, tolerance: Decimal) {
        assert!(
            (actual - expected).abs() <= tolerance,
            "expected {actual} to be within {tolerance} of {expected}"
        );
    }

    // =========================================================================
    // round-trip tests (solve inverts the forward worksheet)
    // =========================================================================

    #[test]
    fn round_trip_mid_bracket() {
        let schedule = ghana_monthly_2024();
        let solver = NetToGrossSolver::new(&schedule);

        // Basic 2000, allowances 500, relief 100 nets 2079.25.
        let basic = solver.solve(dec!(2079.25), dec!(500), dec!(100));

        assert_close(basic, dec!(2000), dec!(0.02));
    }

    #[test]
    fn round_trip_without_allowances_or_relief() {
        let schedule = ghana_monthly_2024();
        let solver = NetToGrossSolver::new(&schedule);

        // Basic 5000 nets 3876.50025.
        let basic = solver.solve(dec!(3876.50025), dec!(0), dec!(0));

        assert_close(basic, dec!(5000), dec!(0.02));
    }

    #[test]
    fn round_trip_top_bracket() {
        let schedule = ghana_monthly_2024();
        let worksheet = PayeWorksheet::new(&schedule);
        let solver = NetToGrossSolver::new(&schedule);

        let target = worksheet
            .calculate(&PayeInput {
                basic_salary: dec!(60000),
                allowances: dec!(1500),
                benefit_in_kind: Decimal::ZERO,
                relief: dec!(200),
            })
            .net_income;
        let basic = solver.solve(target, dec!(1500), dec!(200));

        assert_close(basic, dec!(60000), dec!(0.05));
    }

    // =========================================================================
    // degenerate target tests
    // =========================================================================

    #[test]
    fn zero_target_yields_zero_basic() {
        let schedule = ghana_monthly_2024();
        let solver = NetToGrossSolver::new(&schedule);

        assert_eq!(solver.solve(dec!(0), dec!(500), dec!(0)), dec!(0));
    }

    #[test]
    fn negative_target_yields_zero_basic() {
        let schedule = ghana_monthly_2024();
        let solver = NetToGrossSolver::new(&schedule);

        assert_eq!(solver.solve(dec!(-100), dec!(0), dec!(0)), dec!(0));
    }

    #[test]
    fn allowances_exceeding_target_converge_to_zero_basic() {
        let schedule = ghana_monthly_2024();
        let solver = NetToGrossSolver::new(&schedule);

        // Net at basic 0 is already 1000; smallest admissible basic wins.
        let basic = solver.solve(dec!(500), dec!(1000), dec!(0));

        assert!(basic < dec!(0.01));
    }

    // =========================================================================
    // upper-bound expansion tests
    // =========================================================================

    #[test]
    fn expands_bound_when_double_target_is_insufficient() {
        // A confiscatory flat schedule where net pay is well under half of
        // basic salary, so the 2 × target starting bound cannot bracket the
        // root without expansion.
        let schedule = BracketSchedule::new(vec![TaxBracket {
            min_income: dec!(0),
            max_income: None,
            tax_rate: dec!(0.60),
        }])
        .unwrap();
        let worksheet = PayeWorksheet::new(&schedule);
        let solver = NetToGrossSolver::new(&schedule);

        let target = worksheet
            .calculate(&PayeInput {
                basic_salary: dec!(1000),
                allowances: Decimal::ZERO,
                benefit_in_kind: Decimal::ZERO,
                relief: Decimal::ZERO,
            })
            .net_income;
        // net(1000) = 1000 − 600 − 55 = 345; 2 × 345 < 1000.
        assert_eq!(target, dec!(345));

        let basic = solver.solve(target, dec!(0), dec!(0));

        assert_close(basic, dec!(1000), dec!(0.05));
    }
}
