//! Target country selection and country summaries.

use localitykit::config::Config;
use localitykit::services::country::CountryService;
use localitykit::utils::logging::init_logging;
use localitykit::{Alpha2Code, CountryInfo};
use tracing::Level;

fn targets(codes: &[&str]) -> Vec<String> {
    codes.iter().map(|c| c.to_string()).collect()
}

#[test]
fn empty_or_all_selects_every_country() {
    let service = CountryService::new();

    assert_eq!(service.get_countries_to_process(&[]).len(), 249);
    assert_eq!(
        service
            .get_countries_to_process(&targets(&["FR", "ALL"]))
            .len(),
        249
    );
}

#[test]
fn unknown_targets_are_skipped() {
    init_logging(Level::WARN);
    let service = CountryService::new();

    let codes = service.get_countries_to_process(&targets(&["us", "XX", "ca", "US"]));
    assert_eq!(codes, vec![Alpha2Code::US, Alpha2Code::CA]);
}

#[test]
fn country_name_by_code() {
    let service = CountryService::new();

    assert_eq!(service.get_country_name("jp"), Some("Japan"));
    assert_eq!(service.get_country_name("JPN"), None);
}

#[test]
fn countries_are_sorted_by_name() {
    let service = CountryService::new();

    let countries = service.get_countries(&targets(&["US", "AD", "DE"]));
    let names: Vec<_> = countries.iter().map(|c| c.country_name.as_str()).collect();
    assert_eq!(names, vec!["Andorra", "Germany", "United States"]);

    assert_eq!(
        countries[0],
        CountryInfo {
            country_code: "AD".to_string(),
            alpha3_code: "AND".to_string(),
            numeric_code: "020".to_string(),
            country_name: "Andorra".to_string(),
            currency_code: "EUR".to_string(),
        }
    );
}

#[test]
fn non_ascii_names_sort_after_ascii_names() {
    let service = CountryService::new();

    let countries = service.get_countries(&targets(&["AX", "ZW", "AF"]));
    let names: Vec<_> = countries.iter().map(|c| c.country_name.as_str()).collect();
    assert_eq!(names, vec!["Afghanistan", "Zimbabwe", "Åland Islands"]);
}

#[test]
fn json_export_round_trips() {
    let service = CountryService::new();

    let json = service.to_json(&targets(&["AQ", "NZ"])).unwrap();
    let parsed: Vec<CountryInfo> = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.len(), 2);
    assert_eq!(parsed[0].country_name, "Antarctica");
    assert_eq!(parsed[0].currency_code, "");
    assert_eq!(parsed[1].currency_code, "NZD");
}

#[test]
fn service_follows_config_targets() {
    let config = Config::from_lookup(|key| match key {
        "TARGET_COUNTRIES" => Some("gb, ie".to_string()),
        _ => None,
    })
    .unwrap();
    let service = CountryService::new();

    let codes = service.get_countries_to_process(&config.target_countries);
    assert_eq!(codes, vec![Alpha2Code::GB, Alpha2Code::IE]);
}
