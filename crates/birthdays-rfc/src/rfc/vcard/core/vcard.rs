//! The card itself: version plus properties in file order.

use super::property::{VCardProperty, names};
use super::structured::StructuredName;

/// Value of the `VERSION` property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VCardVersion {
    /// vCard 2.1, read with the 3.0 rules.
    V21,
    /// RFC 2426.
    V3,
    /// RFC 6350, assumed when a card omits `VERSION`.
    #[default]
    V4,
}

impl core::str::FromStr for VCardVersion {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "2.1" => Ok(Self::V21),
            "3.0" => Ok(Self::V3),
            "4.0" => Ok(Self::V4),
            _ => Err(()),
        }
    }
}

/// One `BEGIN:VCARD` ... `END:VCARD` block.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VCard {
    /// Value of the `VERSION` property.
    pub version: VCardVersion,
    /// All properties in order of appearance, excluding VERSION.
    pub properties: Vec<VCardProperty>,
}

impl VCard {
    /// Creates a new empty vCard 4.0.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_property(&mut self, prop: VCardProperty) {
        self.properties.push(prop);
    }

    /// First property called `name`.
    #[must_use]
    pub fn get_property(&self, name: &str) -> Option<&VCardProperty> {
        self.properties
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
    }

    /// Returns the FN (formatted name) value, unescaped.
    #[must_use]
    pub fn formatted_name(&self) -> Option<String> {
        self.get_property(names::FN).map(VCardProperty::text)
    }

    /// Returns the raw N (structured name) value.
    #[must_use]
    pub fn raw_name(&self) -> Option<&str> {
        self.get_property(names::N).map(|p| p.raw_value.as_str())
    }

    /// `N`, split into its components.
    #[must_use]
    pub fn name(&self) -> Option<StructuredName> {
        self.raw_name().map(StructuredName::parse)
    }

    /// Returns the raw BDAY value.
    #[must_use]
    pub fn birthday(&self) -> Option<&str> {
        self.get_property(names::BDAY).map(|p| p.raw_value.as_str())
    }

    /// Returns whether the card has no properties besides VERSION.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}
