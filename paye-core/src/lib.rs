pub mod calculations;
pub mod models;

pub use calculations::{NetToGrossSolver, PayeWorksheet};
pub use models::*;
