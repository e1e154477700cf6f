//! Command-line front end of the birthday list generator.

pub mod cli;
pub mod logging;
