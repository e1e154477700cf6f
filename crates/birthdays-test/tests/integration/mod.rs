//! Integration tests for the birthday list pipeline.
//!
//! ```sh
//! cargo test -p birthdays-test
//! ```

mod helpers;
mod loading;
mod ordering;
mod reports;
