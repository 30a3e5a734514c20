//! Command implementations for the cfgdrift CLI

mod check;
mod defaults;

pub use check::{run_check, run_check_file};
pub use defaults::run_defaults;
