//! Library layer for Foodiezz: configuration, the open-now filter, result
//! deduplication, and page planning.
//!
//! Builds on the `soda_api` crate, which owns query building and the
//! HTTP transport.

pub mod aggregate;
pub mod config;
pub mod error;
pub mod finder;
pub mod open_now;
pub mod pagination;

pub use soda_api;
pub use soda_api::types;
pub use soda_api::{Client, Gateway, SoqlQuery};

pub use aggregate::{ColumnWidths, ResultAggregator};
pub use config::AppConfig;
pub use error::FoodiezzError;
pub use finder::FoodTruckFinder;
pub use open_now::OpenNowFilter;
pub use pagination::{PageSpan, Pages};
