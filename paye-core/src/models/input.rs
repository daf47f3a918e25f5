use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Monthly salary inputs for a PAYE computation.
///
/// All amounts are GHS per month and are expected to be non-negative; the
/// worksheet clamps negative values to zero rather than failing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayeInput {
    /// Gross monthly basic salary. SSNIT is levied on this component alone.
    pub basic_salary: Decimal,

    /// Cash allowances paid on top of basic salary.
    pub allowances: Decimal,

    /// Taxable value of non-cash benefits.
    pub benefit_in_kind: Decimal,

    /// Monthly deductible relief, subtracted from income before the bracket
    /// walk (qualifying reliefs, not SSNIT).
    pub relief: Decimal,
}

impl PayeInput {
    /// Basic salary plus allowances plus benefit in kind, before deductions.
    pub fn gross_remuneration(&self) -> Decimal {
        self.basic_salary + self.allowances + self.benefit_in_kind
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn gross_remuneration_sums_components() {
        let input = PayeInput {
            basic_salary: dec!(2000),
            allowances: dec!(500),
            benefit_in_kind: dec!(150),
            relief: dec!(100),
        };

        assert_eq!(input.gross_remuneration(), dec!(2650));
    }

    #[test]
    fn default_is_all_zero() {
        let input = PayeInput::default();

        assert_eq!(input.gross_remuneration(), dec!(0));
        assert_eq!(input.relief, dec!(0));
    }
}
