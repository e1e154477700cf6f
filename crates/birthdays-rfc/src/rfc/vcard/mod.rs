//! vCard reader (RFC 6350, RFC 2426).
//!
//! Reads the contact cards of a `.vcf` document far enough to hand out the
//! name and birthday of every card. Property values are kept verbatim so the
//! caller decides how to interpret them.
//!
//! ## Usage
//!
//! ```rust
//! use birthdays_rfc::rfc::vcard::parse;
//!
//! let input = "\
//! BEGIN:VCARD\r\n\
//! VERSION:3.0\r\n\
//! N:Doe;John;;;\r\n\
//! BDAY:1985-07-04\r\n\
//! END:VCARD\r\n";
//!
//! let cards = parse(input).unwrap();
//! assert_eq!(cards[0].birthday(), Some("1985-07-04"));
//! assert_eq!(cards[0].name().unwrap().family, vec!["Doe"]);
//! ```
//!
//! ## Submodules
//!
//! - [`core`] - Core types (`VCard`, `VCardProperty`, `VCardParameter`, `StructuredName`)
//! - [`parse`] - Parsing functions and error types

pub mod core;
pub mod parse;


pub use core::{StructuredName, VCard, VCardParameter, VCardProperty, VCardVersion};
pub use parse::{ParseError, ParseErrorKind, ParseResult, parse, parse_single};
