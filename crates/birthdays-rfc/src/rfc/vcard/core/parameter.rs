/// A property parameter such as `TYPE=home,work` or `VALUE=date`.
///
/// The name is stored uppercase. Values keep their case and order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VCardParameter {
    pub name: String,
    pub values: Vec<String>,
}

impl VCardParameter {
    #[must_use]
    pub fn multi(name: impl Into<String>, values: Vec<String>) -> Self {
        let mut name = name.into();
        name.make_ascii_uppercase();
        Self { name, values }
    }
}

#[cfg(test)]
impl VCardParameter {
    pub(crate) fn value(&self) -> Option<&str> {
        self.values.first().map(String::as_str)
    }
}
