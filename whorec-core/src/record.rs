use serde::{Deserialize, Serialize};

/// Registration facts extracted from a single registry response.
///
/// Only `domain` is guaranteed to be set. Every other field is best-effort
/// and stays empty when the registry output does not carry it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub domain: String,
    pub registrar: String,
    /// Date portion only, e.g. `2020-01-01`.
    pub creation_date: String,
    pub expiry_date: String,
    pub contact_email: String,
    pub contact_phone: String,
    /// In order of appearance in the response.
    pub name_servers: Vec<String>,
}

impl Record {
    pub fn new(domain: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            ..Default::default()
        }
    }

    pub fn has_dates(&self) -> bool {
        !self.creation_date.is_empty() || !self.expiry_date.is_empty()
    }

    /// True when nothing beyond the domain itself was extracted.
    pub fn is_empty(&self) -> bool {
        self.registrar.is_empty()
            && !self.has_dates()
            && self.contact_email.is_empty()
            && self.contact_phone.is_empty()
            && self.name_servers.is_empty()
    }
}
