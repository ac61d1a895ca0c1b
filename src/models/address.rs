use crate::models::codes::Alpha2Code;
use crate::utils::error::{LookupError, LookupKind};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Cardinal direction attached to a street name, e.g. the `N` in `12 N Main St`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StreetDirection {
    #[default]
    None,
    North,
    South,
    East,
    West,
}

impl StreetDirection {
    /// Short lowercase token (`"n"`, `"s"`, `"e"`, `"w"`), or `""` for `None`.
    pub fn as_str(&self) -> &'static str {
        match self {
            StreetDirection::None => "",
            StreetDirection::North => "n",
            StreetDirection::South => "s",
            StreetDirection::East => "e",
            StreetDirection::West => "w",
        }
    }
}

/// Resolves a short direction token case-insensitively.
///
/// `"none"` is accepted and yields [`StreetDirection::None`], which renders back
/// as an empty string rather than the word it was parsed from.
pub fn parse_street_direction(s: &str) -> Result<StreetDirection, LookupError> {
    match s.to_ascii_lowercase().as_str() {
        "none" => Ok(StreetDirection::None),
        "n" => Ok(StreetDirection::North),
        "s" => Ok(StreetDirection::South),
        "e" => Ok(StreetDirection::East),
        "w" => Ok(StreetDirection::West),
        _ => Err(LookupError::not_found(LookupKind::StreetDirection, s)),
    }
}

impl FromStr for StreetDirection {
    type Err = LookupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_street_direction(s)
    }
}

impl fmt::Display for StreetDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl_string_serde!(StreetDirection);

/// Structured postal address. Empty strings, a zero street number and
/// [`StreetDirection::None`] all mean "absent".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PostalAddress {
    pub street_number: u32,
    pub street_number_postfix: String,
    pub pre_street_direction: StreetDirection,
    pub street_name: String,
    pub street_type_abbreviation: String,
    pub post_street_direction: StreetDirection,
    pub secondary_address_type_abbreviation: String,
    pub secondary_address_value: String,
    pub locality_name: String,
    pub region_code: String,
    pub postal_code: String,
    pub country_alpha2: Alpha2Code,
}

/// Display-oriented projection of a [`PostalAddress`] with the street parts
/// collapsed into two free-text lines.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimplePostalAddress {
    pub street_address: String,
    pub secondary_address: String,
    pub locality_name: String,
    pub region_code: String,
    pub postal_code: String,
    pub country_alpha2: Alpha2Code,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn none_token_parses_but_renders_empty() {
        let direction = parse_street_direction("NONE").unwrap();
        assert_eq!(direction, StreetDirection::None);
        assert_eq!(direction.to_string(), "");
    }

    #[test]
    fn unknown_token_is_not_found() {

        let err = parse_street_direction("north").unwrap_err();
        assert_eq!(err.kind(), LookupKind::StreetDirection);
        assert_eq!(err.input(), "north");
    }

    #[test]
    fn address_deserializes_with_missing_fields() {
        let address: PostalAddress = serde_json::from_str(
            r#"{"street_number": 10, "pre_street_direction": "N", "country_alpha2": "us"}"#,
        )
        .unwrap();
        assert_eq!(address.street_number, 10);
        assert_eq!(address.pre_street_direction, StreetDirection::North);
        assert_eq!(address.country_alpha2, Alpha2Code::US);
        assert!(address.street_name.is_empty());
    }
}
