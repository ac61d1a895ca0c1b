use crate::models::codes::{Alpha2Code, Alpha3Code};
use crate::models::currency::CurrencyCode;
use serde::{Deserialize, Serialize};

/// A territory recognised by ISO 3166-1.
///
/// Instances only exist inside the static country table; lookups hand out
/// `&'static Country` references to the same record regardless of which code
/// space was used to find it.
#[derive(Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Country {
    pub name: &'static str,
    pub alpha2: Alpha2Code,
    pub alpha3: Alpha3Code,
    pub numeric: u16,
    pub currency: CurrencyCode,
}

impl Country {
    /// Numeric code zero-padded to three digits, e.g. `"004"`.
    pub fn numeric_str(&self) -> String {
        format!("{:03}", self.numeric)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryInfo {
    pub country_code: String,
    pub alpha3_code: String,
    pub numeric_code: String,
    pub country_name: String,
    pub currency_code: String,
}

impl From<&Country> for CountryInfo {
    fn from(country: &Country) -> Self {
        Self {
            country_code: country.alpha2.as_str().to_string(),
            alpha3_code: country.alpha3.as_str().to_string(),
            numeric_code: country.numeric_str(),
            country_name: country.name.to_string(),
            currency_code: country.currency.as_str().to_string(),
        }
    }
}
