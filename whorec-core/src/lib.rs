//! Extraction of registration facts from raw WHOIS responses.
//!
//! Registries answer in different grammars. The suffix of the queried
//! domain selects a parser, which turns the raw body into a [`Record`].

pub mod colors;
pub mod error;
pub mod output;
pub mod record;
pub mod whois;

pub use error::{Result, WhoisError};
pub use record::Record;
pub use whois::{parse, Response};

pub use output::{OutputFormat, OutputFormatter};
