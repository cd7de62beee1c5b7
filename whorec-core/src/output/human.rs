use super::OutputFormatter;
use crate::colors::PaletteExt;
use crate::record::Record;

pub struct HumanFormatter {
    use_colors: bool,
}

impl Default for HumanFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl HumanFormatter {
    pub fn new() -> Self {
        Self { use_colors: true }
    }

    pub fn without_colors(mut self) -> Self {
        self.use_colors = false;
        self
    }

    fn label(&self, text: &str) -> String {
        if self.use_colors {
            text.field().to_string()
        } else {
            text.to_string()
        }
    }

    fn value(&self, text: &str) -> String {
        if self.use_colors {
            text.plain().to_string()
        } else {
            text.to_string()
        }
    }

    fn warning(&self, text: &str) -> String {
        if self.use_colors {
            text.caution().to_string()
        } else {
            text.to_string()
        }
    }

    fn header(&self, text: &str) -> String {
        if self.use_colors {
            format!("\n{}\n{}", text.heading(), "─".repeat(text.len()).muted())
        } else {
            format!("\n{}\n{}", text, "-".repeat(text.len()))
        }
    }

    fn line(&self, label: &str, value: &str) -> Option<String> {
        if value.is_empty() {
            return None;
        }
        Some(format!("  {}: {}", self.label(label), self.value(value)))
    }
}

impl OutputFormatter for HumanFormatter {
    fn format_record(&self, record: &Record) -> String {
        let mut output = vec![self.header(&format!("WHOIS: {}", record.domain))];

        if record.is_empty() {
            output.push(format!("  {}", self.warning("No registration data found")));
            return output.join("\n");
        }

        output.extend(
            [
                ("Registrar", &record.registrar),
                ("Created", &record.creation_date),
                ("Expires", &record.expiry_date),
                ("Abuse Email", &record.contact_email),
                ("Abuse Phone", &record.contact_phone),
            ]
            .into_iter()
            .filter_map(|(label, value)| self.line(label, value)),
        );

        if !record.name_servers.is_empty() {
            output.push(format!("  {}:", self.label("Nameservers")));
            for ns in &record.name_servers {
                output.push(format!("    - {}", self.value(ns)));
            }
        }

        output.join("\n")
    }

    fn format_absent(&self, domain: &str) -> String {
        format!(
            "{}\n  {}",
            self.header(&format!("WHOIS: {}", domain)),
            self.warning("Parsing is not implemented for this registry")
        )
    }
}
