//! Parser for registries that answer with `Key: value` lines.
//!
//! This covers the ICANN-style output used by most gTLD registries and a
//! number of ccTLDs, e.g.:
//! ```text
//! Registrar: Example Registrar, Inc.
//! Creation Date: 2020-01-15T00:00:00Z
//! Registry Expiry Date: 2030-01-15T00:00:00Z
//! Name Server: ns1.example.com
//! ```

use std::collections::HashMap;

use tracing::trace;

use super::RegistryParser;
use crate::record::Record;
use crate::whois::response::Response;

const LINE_SEPARATOR: &str = "\r\n";
const KEY_SEPARATOR: &str = ": ";

const NAME_SERVER: &str = "Name Server";
const REGISTRAR: &str = "Registrar";
const CREATION_DATE: &str = "Creation Date";
const EXPIRY_DATE: &str = "Registry Expiry Date";
const ABUSE_EMAIL: &str = "Registrar Abuse Contact Email";
const ABUSE_PHONE: &str = "Registrar Abuse Contact Phone";

#[derive(Debug, Clone, Copy, Default)]
pub struct GeneralParser;

impl GeneralParser {
    pub fn new() -> Self {
        Self
    }
}

impl RegistryParser for GeneralParser {
    fn name(&self) -> &'static str {
        "general"
    }

    fn parse(&self, response: &Response) -> Option<Record> {
        let mut record = Record::new(response.query());
        let mut fields: HashMap<&str, &str> = HashMap::new();

        for line in response.as_str().split(LINE_SEPARATOR) {
            // Exactly one separator; anything else is not a field line
            let mut parts = line.split(KEY_SEPARATOR);
            let (key, value) = match (parts.next(), parts.next(), parts.next()) {
                (Some(key), Some(value), None) => (key.trim(), value),
                _ => {
                    trace!(line = %line, "Skipping unparseable line");
                    continue;
                }
            };

            if key == NAME_SERVER {
                record.name_servers.push(value.to_string());
                continue;
            }

            fields.insert(key, value);
        }

        let field = |key: &str| fields.get(key).copied().unwrap_or_default();

        record.registrar = field(REGISTRAR).to_string();
        record.creation_date = date_part(field(CREATION_DATE)).to_string();
        record.expiry_date = date_part(field(EXPIRY_DATE)).to_string();
        record.contact_email = field(ABUSE_EMAIL).trim().to_string();
        record.contact_phone = field(ABUSE_PHONE).trim().to_string();

        Some(record)
    }
}

/// Everything before the first `T`, i.e. the date of an ISO 8601 timestamp.
fn date_part(value: &str) -> &str {
    value.split_once('T').map_or(value, |(date, _)| date)
}
