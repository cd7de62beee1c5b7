//! Parser for registries that answer in blank-line separated paragraphs.
//!
//! TWNIC is the one registered user. Dates sit in fixed columns and name
//! servers follow a header line:
//! ```text
//! Record expires on 2025-03-01 (YYYY-MM-DD)
//! Record created on 2010-03-01 (YYYY-MM-DD)
//!
//! Domain servers in listed order:
//!    ns1.example.tw
//!    ns2.example.tw
//! ```

use tracing::trace;

use super::RegistryParser;
use crate::record::Record;
use crate::whois::response::Response;

const PARAGRAPH_SEPARATOR: &str = "\n\n";
const EXPIRE_MARKER: &str = "expire";
const SERVERS_MARKER: &str = "Domain servers";
/// Zero-based column of the date in `Record expires on <date> ...`.
const DATE_COLUMN: usize = 3;

#[derive(Debug, Clone, Copy, Default)]
pub struct BlockParser;

impl BlockParser {
    pub fn new() -> Self {
        Self
    }
}

impl RegistryParser for BlockParser {
    fn name(&self) -> &'static str {
        "block"
    }

    fn parse(&self, response: &Response) -> Option<Record> {
        let mut record = Record::new(response.query());

        for paragraph in response.as_str().split(PARAGRAPH_SEPARATOR) {
            if paragraph.contains(EXPIRE_MARKER) {
                let lines: Vec<&str> = paragraph.split('\n').collect();
                let [expires, created] = lines.as_slice() else {
                    trace!(lines = lines.len(), "Skipping date paragraph without two lines");
                    continue;
                };

                record.expiry_date = date_column(expires).to_string();
                record.creation_date = date_column(created).to_string();
                continue;
            }

            if paragraph.contains(SERVERS_MARKER) {
                record.name_servers.extend(
                    paragraph
                        .split('\n')
                        .skip(1)
                        .map(|line| line.trim().to_string()),
                );
            }
        }

        Some(record)
    }
}

/// Fourth space-separated token of the trimmed line, or empty if it is short.
fn date_column(line: &str) -> &str {
    line.trim().split(' ').nth(DATE_COLUMN).unwrap_or_default()
}
