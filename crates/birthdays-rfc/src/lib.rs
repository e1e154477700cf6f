//! Contact-card formats read by the birthday list tools.

pub mod rfc;
