//! Read-only indexes over the static country table.
//!
//! Every index is built once, on first use, from the same master list that
//! generates [`Alpha2Code`] and [`Alpha3Code`], and holds references into that
//! table. A territory therefore resolves to the same `&'static Country` whichever
//! code space it is looked up through.

use crate::models::codes::{Alpha2Code, Alpha3Code, COUNTRIES};
use crate::models::country::Country;
use crate::models::currency::CurrencyCode;
use crate::utils::error::{LookupError, LookupKind};
use std::collections::HashMap;
use std::str::FromStr;
use std::sync::LazyLock;
use tracing::debug;

struct Indexes {
    by_alpha2: HashMap<Alpha2Code, &'static Country>,
    by_alpha3: HashMap<Alpha3Code, &'static Country>,
    by_numeric: HashMap<u16, &'static Country>,
    by_name: HashMap<String, &'static Country>,
    alpha2_by_str: HashMap<&'static str, Alpha2Code>,
    alpha3_by_str: HashMap<&'static str, Alpha3Code>,
}

impl Indexes {
    fn build() -> Self {
        let mut indexes = Indexes {
            by_alpha2: HashMap::with_capacity(COUNTRIES.len()),
            by_alpha3: HashMap::with_capacity(COUNTRIES.len()),
            by_numeric: HashMap::with_capacity(COUNTRIES.len()),
            by_name: HashMap::with_capacity(COUNTRIES.len()),
            alpha2_by_str: HashMap::with_capacity(COUNTRIES.len()),
            alpha3_by_str: HashMap::with_capacity(COUNTRIES.len()),
        };

        for country in COUNTRIES {
            indexes.by_alpha2.insert(country.alpha2, country);
            indexes.by_alpha3.insert(country.alpha3, country);
            indexes.by_numeric.insert(country.numeric, country);
            indexes.by_name.insert(country.name.to_lowercase(), country);
            indexes
                .alpha2_by_str
                .insert(country.alpha2.as_str(), country.alpha2);
            indexes
                .alpha3_by_str
                .insert(country.alpha3.as_str(), country.alpha3);
        }

        debug!("Built country registry with {} territories", COUNTRIES.len());
        indexes
    }
}

static INDEXES: LazyLock<Indexes> = LazyLock::new(Indexes::build);

/// All territories in master-list order (alphabetical by alpha-2 code).
pub fn all() -> &'static [Country] {
    COUNTRIES
}

/// Case-insensitive alpha-2 lookup. Only ASCII letters are case-folded.
pub fn parse_alpha2(s: &str) -> Result<Alpha2Code, LookupError> {
    INDEXES
        .alpha2_by_str
        .get(s.to_ascii_uppercase().as_str())
        .copied()
        .ok_or_else(|| LookupError::not_found(LookupKind::Alpha2, s))
}

/// Case-insensitive alpha-3 lookup. Only ASCII letters are case-folded.
pub fn parse_alpha3(s: &str) -> Result<Alpha3Code, LookupError> {
    INDEXES
        .alpha3_by_str
        .get(s.to_ascii_uppercase().as_str())
        .copied()
        .ok_or_else(|| LookupError::not_found(LookupKind::Alpha3, s))
}

pub fn by_numeric(numeric: u16) -> Option<&'static Country> {
    INDEXES.by_numeric.get(&numeric).copied()
}

/// Exact, case-insensitive match on the English short name.
pub fn by_name(name: &str) -> Option<&'static Country> {
    INDEXES.by_name.get(&name.to_lowercase()).copied()
}

pub fn with_currency(currency: CurrencyCode) -> Vec<&'static Country> {
    COUNTRIES
        .iter()
        .filter(|country| country.currency == currency)
        .collect()
}

impl Alpha2Code {
    /// The shared country record, or `None` for the sentinel.
    pub fn to_country(&self) -> Option<&'static Country> {
        INDEXES.by_alpha2.get(self).copied()
    }

    pub fn to_alpha3(&self) -> Alpha3Code {
        self.to_country()
            .map(|country| country.alpha3)
            .unwrap_or_default()
    }
}

impl Alpha3Code {
    /// The shared country record, or `None` for the sentinel.
    pub fn to_country(&self) -> Option<&'static Country> {
        INDEXES.by_alpha3.get(self).copied()
    }

    pub fn to_alpha2(&self) -> Alpha2Code {
        self.to_country()
            .map(|country| country.alpha2)
            .unwrap_or_default()
    }
}

impl FromStr for Alpha2Code {
    type Err = LookupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_alpha2(s)
    }
}

impl FromStr for Alpha3Code {
    type Err = LookupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_alpha3(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn codes_are_unique_across_the_table() {
        let alpha2: HashSet<_> = all().iter().map(|c| c.alpha2).collect();
        let alpha3: HashSet<_> = all().iter().map(|c| c.alpha3).collect();
        let numeric: HashSet<_> = all().iter().map(|c| c.numeric).collect();

        assert_eq!(all().len(), 249);
        assert_eq!(alpha2.len(), all().len());
        assert_eq!(alpha3.len(), all().len());
        assert_eq!(numeric.len(), all().len());
        assert!(!alpha2.contains(&Alpha2Code::None));
        assert!(!alpha3.contains(&Alpha3Code::None));
    }

    #[test]
    fn sentinel_strings_are_not_parseable() {
        assert!(parse_alpha2("").is_err());
        assert!(parse_alpha3("").is_err());
        assert!(parse_alpha2("none").is_err());
    }
}
