//! Loads configuration from the process environment. Kept in its own test
//! binary so no other test observes the variables set here.

use localitykit::config::Config;
use std::env;
use tracing::Level;

#[test]
fn from_env_reads_process_variables() {
    env::set_var("TARGET_COUNTRIES", "nz, au");
    env::set_var("LOG_LEVEL", "warn");

    let config = Config::from_env();

    env::remove_var("TARGET_COUNTRIES");
    env::remove_var("LOG_LEVEL");

    let config = config.unwrap();
    assert_eq!(config.target_countries, vec!["NZ", "AU"]);
    assert_eq!(config.log_level, Level::WARN);
}
