mod dispatch;
pub mod parsers;
mod response;

pub use dispatch::{parse, split_domain};
pub use parsers::{strategy_for, supported_suffixes, RegistryParser};
pub use response::Response;
