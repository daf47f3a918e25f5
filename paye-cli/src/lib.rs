pub mod cmd;
pub mod format;
pub mod input;
