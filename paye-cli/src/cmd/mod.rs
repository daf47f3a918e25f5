//! CLI subcommands.

mod gross;
mod net;
mod report;

pub use gross::GrossCommand;
pub use net::NetCommand;
