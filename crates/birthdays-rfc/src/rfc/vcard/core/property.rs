use super::parameter::VCardParameter;
use crate::rfc::vcard::parse::unescape_text;

/// A property as read, e.g. `item1.BDAY;VALUE=date:19850704`.
///
/// The value is kept exactly as it appeared after unfolding, escapes included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VCardProperty {
    /// Optional property group (e.g., "item1" in "item1.BDAY").
    pub group: Option<String>,
    /// Uppercased.
    pub name: String,
    pub params: Vec<VCardParameter>,
    /// Raw value string.
    pub raw_value: String,
}

impl VCardProperty {
    /// Returns the value with text escapes (`\n`, `\,`, `\;`, `\\`) resolved.
    #[must_use]
    pub fn text(&self) -> String {
        unescape_text(&self.raw_value)
    }
}

#[cfg(test)]
impl VCardProperty {
    /// An ungrouped property without parameters.
    pub(crate) fn new(name: impl Into<String>, raw_value: impl Into<String>) -> Self {
        Self {
            group: None,
            name: name.into().to_ascii_uppercase(),
            params: Vec::new(),
            raw_value: raw_value.into(),
        }
    }
}

/// Property names read by this crate.
pub mod names {
    pub const FN: &str = "FN";
    pub const N: &str = "N";
    pub const BDAY: &str = "BDAY";
    pub const BEGIN: &str = "BEGIN";
    pub const END: &str = "END";
    pub const VERSION: &str = "VERSION";
}
