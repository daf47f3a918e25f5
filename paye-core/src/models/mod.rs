mod bracket;
mod input;
mod result;

pub use bracket::{BracketSchedule, ScheduleError, TaxBracket, SSNIT_RATE, ghana_monthly_2024};
pub use input::PayeInput;
pub use result::{BracketLine, PayeResult};
