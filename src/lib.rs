//! Localitykit - country codes and postal addresses for locality data
//!
//! This library provides the ISO 3166-1 country registry (alpha-2, alpha-3 and
//! numeric codes with their ISO 4217 currencies) and the formatter that turns
//! structured postal addresses into display lines.

pub mod config;
pub mod models;
pub mod services;
pub mod utils;

pub use models::address::{
    parse_street_direction, PostalAddress, SimplePostalAddress, StreetDirection,
};
pub use models::codes::{Alpha2Code, Alpha3Code};
pub use models::country::{Country, CountryInfo};
pub use models::currency::CurrencyCode;
pub use services::registry::{parse_alpha2, parse_alpha3};
pub use utils::error::{LookupError, LookupKind};
