//! Tax bracket schedule for Ghana monthly PAYE.
//!
//! A [`BracketSchedule`] is an ordered, contiguous sequence of marginal-rate
//! brackets covering all non-negative income. The invariants the rest of the
//! crate relies on (contiguity, ordering, non-decreasing rates, an unbounded
//! top bracket) are checked once at construction, so evaluation itself never
//! has to fail.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// SSNIT employee contribution rate, applied to basic salary only.
pub const SSNIT_RATE: Decimal = dec!(0.055);

/// One marginal tax bracket.
///
/// `tax_rate` is a fraction (e.g. `0.175` for 17.5%). `max_income` is `None`
/// for the unbounded top bracket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    pub min_income: Decimal,
    pub max_income: Option<Decimal>,
    pub tax_rate: Decimal,
}

impl TaxBracket {
    /// Width of the bracket, or `None` when unbounded.
    pub fn width(&self) -> Option<Decimal> {
        self.max_income.map(|max| max - self.min_income)
    }
}

/// Errors raised when a bracket sequence violates the schedule invariants.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScheduleError {
    /// The schedule contains no brackets.
    #[error("no tax brackets provided")]
    Empty,

    /// The first bracket does not start at zero.
    #[error("first bracket must start at 0, got {0}")]
    NonZeroStart(Decimal),

    /// A bracket's upper bound is not strictly above its lower bound.
    #[error("bracket at {0} has non-positive width")]
    NonPositiveWidth(Decimal),

    /// A bracket's lower bound does not equal the previous upper bound.
    #[error("bracket at {found} is not contiguous with previous bound {expected}")]
    Gap { expected: Decimal, found: Decimal },

    /// A rate is outside [0, 1].
    #[error("tax rate {0} is outside [0, 1]")]
    RateOutOfRange(Decimal),

    /// Rates must not decrease as income rises.
    #[error("tax rate {0} is lower than the preceding bracket's rate")]
    DecreasingRate(Decimal),

    /// Only the last bracket may be unbounded, and it must be.
    #[error("an unbounded bracket may only appear last")]
    UnboundedNotLast,

    /// The last bracket has a finite upper bound.
    #[error("last bracket must be unbounded")]
    BoundedTop,
}

/// A validated, ordered bracket sequence covering `[0, ∞)`.
///
/// Deliberately not deserializable: the only way in is [`BracketSchedule::new`],
/// so a schedule in hand always satisfies the invariants.
///
/// # Example
///
/// ```
/// use paye_core::models::ghana_monthly_2024;
///
/// let schedule = ghana_monthly_2024();
/// assert_eq!(schedule.brackets().len(), 7);
/// assert!(schedule.brackets().last().unwrap().max_income.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BracketSchedule {
    brackets: Vec<TaxBracket>,
}

impl BracketSchedule {
    /// Validates the bracket sequence and wraps it.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleError`] if the sequence is empty, does not start at
    /// zero, has gaps or zero-width brackets, has a rate outside [0, 1] or a
    /// rate that decreases, or does not end with a single unbounded bracket.
    pub fn new(brackets: Vec<TaxBracket>) -> Result<Self, ScheduleError> {
        if brackets.is_empty() {
            return Err(ScheduleError::Empty);
        }

        let first = &brackets[0];
        if first.min_income != Decimal::ZERO {
            return Err(ScheduleError::NonZeroStart(first.min_income));
        }

        let last_index = brackets.len() - 1;
        let mut prev_max: Option<Decimal> = None;
        let mut prev_rate = Decimal::ZERO;

        for (i, bracket) in brackets.iter().enumerate() {
            if let Some(expected) = prev_max {
                if bracket.min_income != expected {
                    return Err(ScheduleError::Gap {
                        expected,
                        found: bracket.min_income,
                    });
                }
            }

            if bracket.tax_rate < Decimal::ZERO || bracket.tax_rate > Decimal::ONE {
                return Err(ScheduleError::RateOutOfRange(bracket.tax_rate));
            }
            if bracket.tax_rate < prev_rate {
                return Err(ScheduleError::DecreasingRate(bracket.tax_rate));
            }
            prev_rate = bracket.tax_rate;

            match bracket.max_income {
                Some(max) => {
                    if i == last_index {
                        return Err(ScheduleError::BoundedTop);
                    }
                    if max <= bracket.min_income {
                        return Err(ScheduleError::NonPositiveWidth(bracket.min_income));
                    }
                    prev_max = Some(max);
                }
                None => {
                    if i != last_index {
                        return Err(ScheduleError::UnboundedNotLast);
                    }
                }
            }
        }

        Ok(Self { brackets })
    }

    pub fn brackets(&self) -> &[TaxBracket] {
        &self.brackets
    }
}

/// The GRA monthly PAYE schedule effective January 2024, in GHS.
///
/// | Chargeable income (GHS) | Rate  |
/// |-------------------------|-------|
/// | 0 – 490                 | 0%    |
/// | 490 – 600               | 5%    |
/// | 600 – 730               | 10%   |
/// | 730 – 3,896.67          | 17.5% |
/// | 3,896.67 – 19,896.67    | 25%   |
/// | 19,896.67 – 50,416.67   | 30%   |
/// | above 50,416.67         | 35%   |
pub fn ghana_monthly_2024() -> BracketSchedule {
    let brackets = vec![
        TaxBracket {
            min_income: dec!(0),
            max_income: Some(dec!(490)),
            tax_rate: dec!(0),
        },
        TaxBracket {
            min_income: dec!(490),
            max_income: Some(dec!(600)),
            tax_rate: dec!(0.05),
        },
        TaxBracket {
            min_income: dec!(600),
            max_income: Some(dec!(730)),
            tax_rate: dec!(0.10),
        },
        TaxBracket {
            min_income: dec!(730),
            max_income: Some(dec!(3896.67)),
            tax_rate: dec!(0.175),
        },
        TaxBracket {
            min_income: dec!(3896.67),
            max_income: Some(dec!(19896.67)),
            tax_rate: dec!(0.25),
        },
        TaxBracket {
            min_income: dec!(19896.67),
            max_income: Some(dec!(50416.67)),
            tax_rate: dec!(0.30),
        },
        TaxBracket {
            min_income: dec!(50416.67),
            max_income: None,
            tax_rate: dec!(0.35),
        },
    ];

    BracketSchedule::new(brackets).expect("statutory schedule is valid")
}
