//! Renders structured postal addresses into display lines.
//!
//! Formatting never validates: components are concatenated in a fixed order
//! whenever they are present, so odd inputs (a street type with no street name,
//! a number with no street) come out as equally odd but well-formed text.

use crate::models::address::{PostalAddress, SimplePostalAddress, StreetDirection};

/// First display line: number, directions, street name and street type.
pub fn street_address_line(address: &PostalAddress) -> String {
    let mut line = String::new();

    if address.street_number != 0 {
        line.push_str(&address.street_number.to_string());
        line.push_str(&address.street_number_postfix);
        line.push(' ');
    }

    push_direction(&mut line, address.pre_street_direction);

    if !address.street_name.is_empty() {
        line.push_str(&address.street_name);
        line.push(' ');
    }

    push_direction(&mut line, address.post_street_direction);

    if !address.street_type_abbreviation.is_empty() {
        line.push_str(&address.street_type_abbreviation);
    }

    line
}

/// Second display line: unit type and unit value, e.g. `"Apt 4B"`.
pub fn secondary_address_line(address: &PostalAddress) -> String {
    let mut line = String::new();

    if !address.secondary_address_type_abbreviation.is_empty() {
        line.push_str(&address.secondary_address_type_abbreviation);
        line.push(' ');
    }

    if !address.secondary_address_value.is_empty() {
        line.push_str(&address.secondary_address_value);
    }

    line
}

pub fn simplify(address: &PostalAddress) -> SimplePostalAddress {
    SimplePostalAddress {
        street_address: street_address_line(address),
        secondary_address: secondary_address_line(address),
        locality_name: address.locality_name.clone(),
        region_code: address.region_code.clone(),
        postal_code: address.postal_code.clone(),
        country_alpha2: address.country_alpha2,
    }
}

fn push_direction(line: &mut String, direction: StreetDirection) {
    if direction != StreetDirection::None {
        line.push_str(direction.as_str());
        line.push(' ');
    }
}

impl PostalAddress {
    pub fn to_simple(&self) -> SimplePostalAddress {
        simplify(self)
    }
}

impl From<&PostalAddress> for SimplePostalAddress {
    fn from(address: &PostalAddress) -> Self {
        simplify(address)
    }
}
