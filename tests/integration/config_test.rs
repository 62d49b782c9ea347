//! Configuration resolution against the real process environment
//!
//! These tests mutate environment variables, so they run serially.

use serial_test::serial;
use std::io::Write;
use std::time::Duration;

use userdesk::egui_app::config::{ENV_DEMO_API_URL, ENV_RECORD_STORE_URL, ENV_TIMEOUT_SECS};
use userdesk::egui_app::Config;
use userdesk::shared::config::ConfigError;

fn process_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

fn clear_env() {
    for key in [ENV_DEMO_API_URL, ENV_RECORD_STORE_URL, ENV_TIMEOUT_SECS] {
        std::env::remove_var(key);
    }
}

#[test]
#[serial]
fn test_environment_wins_over_file() {
    clear_env();
    let mut file = crate::assert_ok!(tempfile::NamedTempFile::new());
    crate::assert_ok!(writeln!(
        file,
        "record_store_url = \"http://records.internal:8080\"\nrequest_timeout_secs = 30"
    ));
    std::env::set_var(ENV_RECORD_STORE_URL, "http://127.0.0.1:5001");

    let config = crate::assert_ok!(Config::resolve(Some(file.path()), process_env));
    clear_env();

    assert_eq!(config.record_store_url(), "http://127.0.0.1:5001");
    assert_eq!(config.request_timeout(), Duration::from_secs(30));
    assert_eq!(config.demo_api_url(), "https://jsonplaceholder.typicode.com");
}

#[test]
#[serial]
fn test_invalid_environment_url_is_rejected() {
    clear_env();
    std::env::set_var(ENV_DEMO_API_URL, "ftp://example.com");

    let result = Config::resolve(None, process_env);
    clear_env();

    crate::assert_err!(result, ConfigError::InvalidUrl { field: "demo_api_url", .. });
}

#[test]
#[serial]
fn test_non_numeric_timeout_is_rejected() {
    clear_env();
    std::env::set_var(ENV_TIMEOUT_SECS, "soon");

    let result = Config::resolve(None, process_env);
    clear_env();

    crate::assert_err!(result, ConfigError::InvalidValue { field: "request_timeout_secs", .. });
}
