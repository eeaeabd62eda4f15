use std::collections::HashMap;

use cnpj_validation_api::config::app_config::{AppConfig, LogFormat};

fn config_from(vars: &[(&str, &str)]) -> AppConfig {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect();
    AppConfig::from_lookup(|key| vars.get(key).cloned())
}

#[test]
fn from_lookup_uses_defaults_when_unset() {
    let config = config_from(&[]);

    assert_eq!(config.port, 8081);
    assert_eq!(config.tax_id_max_input_length, 64);
    assert_eq!(config.log_format, LogFormat::Compact);
}

#[test]
fn from_lookup_reads_configured_values() {
    let config = config_from(&[
        ("PORT", "9090"),
        ("TAX_ID_MAX_INPUT_LENGTH", "32"),
        ("LOG_FORMAT", "json"),
    ]);

    assert_eq!(config.port, 9090);
    assert_eq!(config.tax_id_max_input_length, 32);
    assert_eq!(config.log_format, LogFormat::Json);
}

#[test]
fn from_lookup_falls_back_on_unparseable_values() {
    let config = config_from(&[
        ("PORT", "not-a-port"),
        ("TAX_ID_MAX_INPUT_LENGTH", "-3"),
        ("LOG_FORMAT", "yaml"),
    ]);

    assert_eq!(config.port, 8081);
    assert_eq!(config.tax_id_max_input_length, 64);
    assert_eq!(config.log_format, LogFormat::Compact);
}

// The only test in this binary that touches the process environment.
#[test]
fn from_env_reads_process_environment() {
    unsafe {
        std::env::set_var("PORT", "99999");
        std::env::set_var("TAX_ID_MAX_INPUT_LENGTH", "abc");
        std::env::set_var("LOG_FORMAT", "json");
    }

    let config = AppConfig::from_env();

    assert_eq!(config.port, 8081);
    assert_eq!(config.tax_id_max_input_length, 64);
    assert_eq!(config.log_format, LogFormat::Json);

    unsafe {
        std::env::remove_var("PORT");
        std::env::remove_var("TAX_ID_MAX_INPUT_LENGTH");
        std::env::remove_var("LOG_FORMAT");
    }
}
