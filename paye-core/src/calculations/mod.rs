//! PAYE calculation modules.
//!
//! [`paye`] holds the forward bracket evaluator; [`net_to_gross`] inverts it
//! numerically for "what basic salary gives me this net pay" queries.

pub mod common;
pub mod net_to_gross;
pub mod paye;

pub use net_to_gross::NetToGrossSolver;
pub use paye::PayeWorksheet;
