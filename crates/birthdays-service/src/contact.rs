//! Contacts as read from a card file and as handed to a reporter.

use birthdays_rfc::rfc::vcard::{StructuredName, VCard};

use crate::birthday::{NormalizedBirthday, parse_birthday};

/// The two raw fields of a contact card the birthday list needs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawContact {
    /// Raw N value, `family;given;additional;prefixes;suffixes`.
    pub structured_name: String,
    /// FN value, used for the name when N is missing or blank.
    pub formatted_name: Option<String>,
    /// Raw BDAY value, empty when the card has none.
    pub birthday: String,
    /// The card had no properties at all.
    pub empty: bool,
}

impl RawContact {
    #[must_use]
    pub fn new(structured_name: impl Into<String>, birthday: impl Into<String>) -> Self {
        Self {
            structured_name: structured_name.into(),
            birthday: birthday.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn from_vcard(card: &VCard) -> Self {
        Self {
            structured_name: card.raw_name().unwrap_or_default().to_string(),
            formatted_name: card.formatted_name(),
            birthday: card.birthday().unwrap_or_default().to_string(),
            empty: card.is_empty(),
        }
    }

    /// Returns `family given`, falling back to the formatted name.
    #[must_use]
    pub fn display_name(&self) -> String {
        let name = StructuredName::parse(&self.structured_name).family_given();
        if name.is_empty() {
            self.formatted_name
                .as_deref()
                .map(str::trim)
                .unwrap_or_default()
                .to_string()
        } else {
            name
        }
    }
}

/// A contact ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayRecord {
    pub name: String,
    pub birthday: NormalizedBirthday,
    /// Built from a card without any properties.
    pub empty: bool,
}

impl DisplayRecord {
    /// Normalizes a raw contact. Birthday problems are logged and kept on the record.
    #[must_use]
    pub fn from_raw(raw: &RawContact) -> Self {
        let name = raw.display_name();
        let birthday = parse_birthday(&raw.birthday);

        if let NormalizedBirthday::Unparseable(err) = &birthday {
            tracing::warn!(name = %name, error = %err, "Birthday not recognized");
        }

        Self {
            name,
            birthday,
            empty: raw.empty,
        }
    }
}

impl From<&RawContact> for DisplayRecord {
    fn from(raw: &RawContact) -> Self {
        Self::from_raw(raw)
    }
}
