use crate::models::codes::Alpha2Code;
use crate::models::country::{Country, CountryInfo};
use crate::services::registry;
use thiserror::Error;
use tracing::{info, warn};

#[derive(Error, Debug)]
pub enum CountryError {
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Selects countries by target list and renders them as [`CountryInfo`].
pub struct CountryService {
    countries: &'static [Country],
}

impl CountryService {
    pub fn new() -> Self {
        let countries = registry::all();
        info!("Country service ready with {} countries", countries.len());
        Self { countries }
    }

    /// Resolves a target list to alpha-2 codes.
    ///
    /// An empty list, or one containing `"ALL"`, selects every country. Entries
    /// that are not known alpha-2 codes are skipped.
    pub fn get_countries_to_process(&self, target_countries: &[String]) -> Vec<Alpha2Code> {
        if target_countries.is_empty()
            || target_countries
                .iter()
                .any(|c| c.eq_ignore_ascii_case("ALL"))
        {
            return self.countries.iter().map(|c| c.alpha2).collect();
        }

        let mut codes = Vec::new();
        for target in target_countries {
            match registry::parse_alpha2(target) {
                Ok(code) if !codes.contains(&code) => codes.push(code),
                Ok(_) => {}
                Err(e) => warn!("Skipping target country: {}", e),
            }
        }
        codes
    }

    pub fn get_country_name(&self, country_code: &str) -> Option<&'static str> {
        registry::parse_alpha2(country_code)
            .ok()
            .and_then(|code| code.to_country())
            .map(|country| country.name)
    }

    pub fn get_countries(&self, target_countries: &[String]) -> Vec<CountryInfo> {
        let mut countries: Vec<CountryInfo> = self
            .get_countries_to_process(target_countries)
            .into_iter()
            .filter_map(|code| code.to_country())
            .map(CountryInfo::from)
            .collect();

        // Codepoint order of the lowercased names: "Åland Islands" sorts after "Zimbabwe".
        countries.sort_by(|a, b| {
            a.country_name
                .to_lowercase()
                .cmp(&b.country_name.to_lowercase())
        });

        countries
    }

    pub fn to_json(&self, target_countries: &[String]) -> Result<String, CountryError> {
        let countries = self.get_countries(target_countries);
        Ok(serde_json::to_string_pretty(&countries)?)
    }
}

impl Default for CountryService {
    fn default() -> Self {
        Self::new()
    }
}
