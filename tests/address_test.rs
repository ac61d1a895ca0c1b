//! Postal address formatting and street direction parsing.

use localitykit::services::formatter::{secondary_address_line, simplify, street_address_line};
use localitykit::{
    parse_street_direction, Alpha2Code, PostalAddress, SimplePostalAddress, StreetDirection,
};
use proptest::prelude::*;
use rstest::rstest;

fn main_street(number: u32) -> PostalAddress {
    PostalAddress {
        street_number: number,
        street_name: "Main".to_string(),
        street_type_abbreviation: "St".to_string(),
        ..Default::default()
    }
}

#[test]
fn numbered_street() {
    assert_eq!(street_address_line(&main_street(123)), "123 Main St");
}

#[test]
fn zero_street_number_is_omitted() {
    assert_eq!(street_address_line(&main_street(0)), "Main St");
}

#[test]
fn directions_surround_street_name() {
    let address = PostalAddress {
        street_number: 1600,
        pre_street_direction: StreetDirection::North,
        street_name: "Pennsylvania".to_string(),
        post_street_direction: StreetDirection::West,
        street_type_abbreviation: "Ave".to_string(),
        ..Default::default()
    };
    assert_eq!(street_address_line(&address), "1600 n Pennsylvania w Ave");
}

#[test]
fn street_type_without_name_is_kept() {
    let address = PostalAddress {
        street_type_abbreviation: "Blvd".to_string(),
        ..Default::default()
    };
    assert_eq!(street_address_line(&address), "Blvd");
}

#[rstest]
#[case("Apt", "4B", "Apt 4B")]
#[case("Ste", "", "Ste ")]
#[case("", "Rear", "Rear")]
#[case("", "", "")]
fn secondary_line(#[case] kind: &str, #[case] value: &str, #[case] expected: &str) {
    let address = PostalAddress {
        secondary_address_type_abbreviation: kind.to_string(),
        secondary_address_value: value.to_string(),
        ..Default::default()
    };
    assert_eq!(secondary_address_line(&address), expected);
}

#[test]
fn simplify_passes_locality_fields_through() {
    let address = PostalAddress {
        secondary_address_type_abbreviation: "Unit".to_string(),
        secondary_address_value: "7".to_string(),
        locality_name: "Springfield".to_string(),
        region_code: "IL".to_string(),
        postal_code: "62701".to_string(),
        country_alpha2: Alpha2Code::US,
        ..main_street(42)
    };

    let simple = simplify(&address);
    assert_eq!(
        simple,
        SimplePostalAddress {
            street_address: "42 Main St".to_string(),
            secondary_address: "Unit 7".to_string(),
            locality_name: "Springfield".to_string(),
            region_code: "IL".to_string(),
            postal_code: "62701".to_string(),
            country_alpha2: Alpha2Code::US,
        }
    );
    assert_eq!(SimplePostalAddress::from(&address), address.to_simple());
}

#[test]
fn simple_address_serializes_country_as_code() {
    let simple = main_street(9).to_simple();
    let json = serde_json::to_value(&simple).unwrap();
    assert_eq!(json["street_address"], "9 Main St");
    assert_eq!(json["country_alpha2"], "");
}

#[rstest]
#[case("n", StreetDirection::North, "n")]
#[case("S", StreetDirection::South, "s")]
#[case("e", StreetDirection::East, "e")]
#[case("W", StreetDirection::West, "w")]
#[case("none", StreetDirection::None, "")]
#[case("None", StreetDirection::None, "")]
fn direction_round_trip(
    #[case] input: &str,
    #[case] expected: StreetDirection,
    #[case] rendered: &str,
) {
    let direction = parse_street_direction(input).unwrap();
    assert_eq!(direction, expected);
    assert_eq!(direction.to_string(), rendered);
}

#[rstest]
#[case("")]
#[case("ne")]
#[case("north")]
fn unknown_direction_is_not_found(#[case] input: &str) {
    let err = parse_street_direction(input).unwrap_err();
    assert_eq!(err.input(), input);
}

fn direction_strategy() -> impl Strategy<Value = StreetDirection> {
    prop_oneof![
        Just(StreetDirection::None),
        Just(StreetDirection::North),
        Just(StreetDirection::South),
        Just(StreetDirection::East),
        Just(StreetDirection::West),
    ]
}

proptest! {
    #[test]
    fn formatting_is_deterministic(
        street_number in any::<u32>(),
        postfix in "[A-Z]?",
        pre in direction_strategy(),
        post in direction_strategy(),
        street_name in "[A-Za-z ]{0,12}",
        street_type in "[A-Za-z]{0,4}",
        unit_type in "[A-Za-z]{0,4}",
        unit in "[0-9A-Z]{0,4}",
    ) {
        let address = PostalAddress {
            street_number,
            street_number_postfix: postfix,
            pre_street_direction: pre,
            street_name,
            street_type_abbreviation: street_type,
            post_street_direction: post,
            secondary_address_type_abbreviation: unit_type,
            secondary_address_value: unit,
            ..Default::default()
        };

        let first = simplify(&address);
        let second = simplify(&address);
        prop_assert_eq!(&first, &second);

        if street_number == 0 {
            prop_assert!(!first.street_address.starts_with('0'));
        } else {
            prop_assert!(first.street_address.starts_with(&street_number.to_string()));
        }
    }

    #[test]
    fn parsed_directions_render_lowercase(direction in direction_strategy()) {
        let rendered = direction.to_string();
        prop_assert_eq!(rendered.to_lowercase(), rendered.clone());
        if direction != StreetDirection::None {
            prop_assert_eq!(parse_street_direction(&rendered.to_uppercase()).unwrap(), direction);
        }
    }
}
