use super::OutputFormatter;
use crate::record::Record;

pub struct JsonFormatter {
    pretty: bool,
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonFormatter {
    pub fn new() -> Self {
        Self { pretty: true }
    }

    pub fn compact(mut self) -> Self {
        self.pretty = false;
        self
    }

    fn to_json<T: serde::Serialize + ?Sized>(&self, value: &T) -> String {
        if self.pretty {
            serde_json::to_string_pretty(value)
                .unwrap_or_else(|e| format!("{{\"error\": \"{}\"}}", e))
        } else {
            serde_json::to_string(value).unwrap_or_else(|e| format!("{{\"error\": \"{}\"}}", e))
        }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_record(&self, record: &Record) -> String {
        self.to_json(record)
    }

    fn format_absent(&self, _domain: &str) -> String {
        self.to_json(&Option::<Record>::None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compact_record() {
        let mut record = Record::new("example.com");
        record.name_servers = vec!["ns1.example.com".to_string()];

        let json = JsonFormatter::new().compact().format_record(&record);
        assert_eq!(
            json,
            r#"{"domain":"example.com","registrar":"","creation_date":"","expiry_date":"","contact_email":"","contact_phone":"","name_servers":["ns1.example.com"]}"#
        );
    }

    #[test]
    fn test_absent_record_is_null() {
        assert_eq!(JsonFormatter::new().format_absent("example.edu"), "null");
    }

    #[test]
    fn test_pretty_round_trips() {
        let record = Record::new("example.com");
        let json = JsonFormatter::new().format_record(&record);
        assert!(json.contains('\n'));
        let back: Record = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}
