//! vCard core types (RFC 6350).
//!
//! - [`VCard`] - A card with its version and properties in order of appearance
//! - [`VCardProperty`] - Individual property with parameters and raw value
//! - [`VCardParameter`] - Property parameters
//! - [`StructuredName`] - N property (family, given, etc.)

mod parameter;
mod property;
mod structured;
mod vcard;

pub use parameter::VCardParameter;
pub use property::{VCardProperty, names};
pub use structured::StructuredName;
pub use vcard::{VCard, VCardVersion};
