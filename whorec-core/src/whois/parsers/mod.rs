//! Registry-specific extraction strategies.
//!
//! Registries do not share a response grammar, so each supported suffix is
//! mapped to the parser that understands its output. The table is fixed at
//! compile time and built once on first use; adding a registry means adding
//! an entry to [`STRATEGIES`].

mod block;
mod general;

use std::collections::HashMap;

use once_cell::sync::Lazy;

use super::response::Response;
use crate::record::Record;
pub use block::BlockParser;
pub use general::GeneralParser;

/// Trait for registry-specific WHOIS parsers.
///
/// Parsers are best-effort: they never fail, they leave fields empty.
pub trait RegistryParser: Send + Sync {
    /// Short identifier used in logs and listings.
    fn name(&self) -> &'static str;

    /// Extracts a record from the response body.
    ///
    /// `None` means the registry is recognized but extraction is not
    /// implemented for it.
    fn parse(&self, response: &Response) -> Option<Record>;
}

/// Placeholder for registries whose output is recognized but not parsed.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnimplementedParser;

impl RegistryParser for UnimplementedParser {
    fn name(&self) -> &'static str {
        "unimplemented"
    }

    fn parse(&self, _response: &Response) -> Option<Record> {
        None
    }
}

static GENERAL: GeneralParser = GeneralParser;
static BLOCK: BlockParser = BlockParser;
static UNIMPLEMENTED: UnimplementedParser = UnimplementedParser;

/// Suffix to parser table. Keys are lowercase, without the leading dot.
pub static STRATEGIES: Lazy<HashMap<&'static str, &'static dyn RegistryParser>> =
    Lazy::new(|| {
        let mut m: HashMap<&'static str, &'static dyn RegistryParser> = HashMap::new();

        for suffix in [
            "com", "net", "top", "tech", "org", "gov", "pub", "cn", "app", "me", "cc", "xyz",
            "wang", "site", "club", "online", "red", "link", "info",
        ] {
            m.insert(suffix, &GENERAL);
        }

        // TWNIC answers in paragraphs rather than key/value lines
        m.insert("tw", &BLOCK);
        m.insert("edu", &UNIMPLEMENTED);

        m
    });

/// Looks up the parser for a suffix. Matching is exact and case-sensitive.
pub fn strategy_for(suffix: &str) -> Option<&'static dyn RegistryParser> {
    STRATEGIES.get(suffix).copied()
}

/// All registered suffixes, sorted.
pub fn supported_suffixes() -> Vec<&'static str> {
    let mut suffixes: Vec<&'static str> = STRATEGIES.keys().copied().collect();
    suffixes.sort_unstable();
    suffixes
}
