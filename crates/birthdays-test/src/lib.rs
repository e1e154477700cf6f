//! vCard birthday list - integration test support.
//!
//! This crate re-exports the workspace crates so integration tests can use
//! `birthdays_test::` paths.

pub use birthdays_core as core;
pub use birthdays_rfc::rfc;
pub use birthdays_service as service;
