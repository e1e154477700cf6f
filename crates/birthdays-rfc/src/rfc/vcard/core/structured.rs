//! Structured name (N property, RFC 6350 §6.2.2).

use crate::rfc::vcard::parse::{split_component, split_structured};

/// Structured name.
///
/// Each component may hold several comma-separated values, or none.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StructuredName {
    pub family: Vec<String>,
    pub given: Vec<String>,
    /// Middle names.
    pub additional: Vec<String>,
    pub prefixes: Vec<String>,
    pub suffixes: Vec<String>,
}

impl StructuredName {
    /// Parses a raw N value (`family;given;additional;prefixes;suffixes`).
    ///
    /// Missing trailing components are treated as empty.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let parts = split_structured(raw);
        let component = |idx: usize| {
            parts
                .get(idx)
                .map(|s| split_component(s))
                .unwrap_or_default()
        };

        Self {
            family: component(0),
            given: component(1),
            additional: component(2),
            prefixes: component(3),
            suffixes: component(4),
        }
    }

    /// Formats as `family given`, the order used by birthday lists.
    #[must_use]
    pub fn family_given(&self) -> String {
        let family = self.family.join(" ");
        let given = self.given.join(" ");
        format!("{} {}", family.trim(), given.trim())
            .trim()
            .to_string()
    }
}
