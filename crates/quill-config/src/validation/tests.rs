use super::*;

#[test]
fn default_config_is_valid() {
    assert!(validate(&QuillConfig::default()).is_ok());
}

#[test]
fn empty_base_url_is_allowed() {
    let mut config = QuillConfig::default();
    config.service.base_url = String::new();
    assert!(validate(&config).is_ok());
}

#[test]
fn base_url_without_scheme_is_rejected() {
    let mut config = QuillConfig::default();
    config.service.base_url = "127.0.0.1:8000".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("service.base_url"));
    assert!(err.contains("http://"));
}

#[test]
fn base_url_without_host_is_rejected() {
    let mut config = QuillConfig::default();
    config.service.base_url = "https://".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("has no host"));
}

#[test]
fn collects_all_errors() {
    let mut config = QuillConfig::default();
    config.service.connect_timeout_secs = 0;
    config.session.copy_indicator_ms = 99;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("service.connect_timeout_secs = 0"));
    assert!(err.contains("session.copy_indicator_ms = 99"));
}
