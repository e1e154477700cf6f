//! Shared settings, errors and constants for the birthday list tools.

pub mod config;
pub mod constants;
pub mod error;
