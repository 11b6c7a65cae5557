//! Read-only article filters driven by loosely typed query parameters.
//!
//! Malformed parameters never fail a request: a value that does not parse as
//! an integer, or that parses to zero, is treated as if it had not been sent.

mod params;
mod price;
mod provider;
mod service;

pub use params::parse_filter_value;
pub use price::FilterArticlesByPriceQuery;
pub use provider::FilterArticlesByProviderQuery;
pub use service::FilterQueryService;
