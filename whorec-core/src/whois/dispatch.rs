use tracing::{debug, instrument};

use super::parsers::strategy_for;
use super::response::Response;
use crate::error::{Result, WhoisError};
use crate::record::Record;

/// Splits a `name.suffix` query into its two labels.
///
/// Anything other than exactly two dot-separated labels is rejected,
/// including multi-label public suffixes such as `co.uk`.
pub fn split_domain(query: &str) -> Result<(&str, &str)> {
    let mut labels = query.split('.');
    match (labels.next(), labels.next(), labels.next()) {
        (Some(name), Some(suffix), None) => Ok((name, suffix)),
        _ => Err(WhoisError::MalformedDomain(query.to_string())),
    }
}

/// Parses a registry response with the strategy registered for its suffix.
///
/// `Ok(None)` means the suffix is known but has no extractor.
#[instrument(skip(response), fields(domain = %response.query()))]
pub fn parse(response: &Response) -> Result<Option<Record>> {
    let query = response.query();
    let (_, suffix) = split_domain(query).inspect_err(|_| debug!("Rejecting malformed domain"))?;

    if response.is_empty() {
        debug!("Registry returned an empty body");
        return Err(WhoisError::EmptyResponse(query.to_string()));
    }

    let parser = strategy_for(suffix).ok_or_else(|| {
        debug!(suffix = %suffix, "No parser registered for suffix");
        WhoisError::UnsupportedSuffix(suffix.to_string())
    })?;

    debug!(suffix = %suffix, parser = parser.name(), "Parsing response");
    Ok(parser.parse(response))
}

#[cfg(test)]
mod tests {
    use super::*;

    const COM_BODY: &str = "Registrar: Example Corp\r\nCreation Date: 2020-01-01T00:00:00Z\r\nRegistry Expiry Date: 2030-01-01T00:00:00Z\r\nName Server: ns1.example.com\r\nName Server: ns2.example.com\r\n";

    #[test]
    fn test_split_domain() {
        assert_eq!(split_domain("example.com").unwrap(), ("example", "com"));
        assert_eq!(split_domain("example.").unwrap(), ("example", ""));
        assert!(split_domain("example").is_err());
        assert!(split_domain("sub.example.com").is_err());
        assert!(split_domain("example.co.uk").is_err());
        assert!(split_domain("").is_err());
    }

    #[test]
    fn test_malformed_domain() {
        for query in ["sub.example.com", "example", "a.b.c.d"] {
            let err = parse(&Response::new(query, COM_BODY)).unwrap_err();
            assert_eq!(err, WhoisError::MalformedDomain(query.to_string()));
        }
    }

    #[test]
    fn test_malformed_domain_checked_before_empty_body() {
        let err = parse(&Response::new("sub.example.com", "")).unwrap_err();
        assert!(matches!(err, WhoisError::MalformedDomain(_)));
    }

    #[test]
    fn test_empty_response() {
        let err = parse(&Response::new("example.com", "")).unwrap_err();
        assert_eq!(err, WhoisError::EmptyResponse("example.com".to_string()));

        // Reported before the suffix is looked up
        let err = parse(&Response::new("example.zz", "")).unwrap_err();
        assert_eq!(err, WhoisError::EmptyResponse("example.zz".to_string()));
    }

    #[test]
    fn test_unsupported_suffix() {
        let err = parse(&Response::new("example.zz", COM_BODY)).unwrap_err();
        assert_eq!(err, WhoisError::UnsupportedSuffix("zz".to_string()));
        assert_eq!(err.to_string(), "unsupported suffix: zz");

        let err = parse(&Response::new("example.COM", COM_BODY)).unwrap_err();
        assert_eq!(err, WhoisError::UnsupportedSuffix("COM".to_string()));
    }

    #[test]
    fn test_general_suffix() {
        let record = parse(&Response::new("example.com", COM_BODY)).unwrap().unwrap();

        assert_eq!(record.domain, "example.com");
        assert_eq!(record.registrar, "Example Corp");
        assert_eq!(record.creation_date, "2020-01-01");
        assert_eq!(record.expiry_date, "2030-01-01");
        assert_eq!(record.name_servers, vec!["ns1.example.com", "ns2.example.com"]);
    }

    #[test]
    fn test_edu_returns_no_record() {
        let result = parse(&Response::new("example.edu", "Domain Name: EXAMPLE.EDU\r\n"));
        assert_eq!(result, Ok(None));
    }

    #[test]
    fn test_tw_uses_block_parser() {
        let body = "Record expires on 2025-03-01 (YYYY-MM-DD)\nRecord created on 2010-03-01 (YYYY-MM-DD)\n\nDomain servers in listed order:\nns1.tw\nns2.tw";
        let record = parse(&Response::new("example.tw", body)).unwrap().unwrap();

        assert_eq!(record.expiry_date, "2025-03-01");
        assert_eq!(record.creation_date, "2010-03-01");
        assert_eq!(record.name_servers, vec!["ns1.tw", "ns2.tw"]);
    }

    #[test]
    fn test_parse_is_idempotent() {
        let response = Response::new("example.org", COM_BODY);
        assert_eq!(parse(&response).unwrap(), parse(&response).unwrap());
    }

    #[test]
    fn test_response_parse_delegates() {
        let response = Response::new("example.net", COM_BODY);
        assert_eq!(response.parse(), parse(&response));
    }
}
