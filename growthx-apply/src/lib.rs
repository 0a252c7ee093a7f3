//! The GrowthX application form, run in the terminal.

pub mod catalog;
pub mod logging;
