use config::Config;
use std::env;
use std::fs;
use std::time::Duration;
use synthetics::config::{ConfigError, ProviderConfig, load_config_from};

fn from_yaml(yaml: &str) -> Result<ProviderConfig, config::ConfigError> {
    Config::builder()
        .add_source(config::File::from_str(yaml, config::FileFormat::Yaml))
        .build()?
        .try_deserialize()
}

#[test]
fn test_provider_config_deserialization() {
    let yaml_content = r#"
host_url: "https://api.monitoring.example/v3/"
api_key: "abc123"
timeout_secs: 30
extended_timeout_secs: 900
"#;

    let provider = from_yaml(yaml_content).expect("Failed to deserialize provider config");
    assert_eq!(provider.host_url, "https://api.monitoring.example/v3/");
    assert_eq!(provider.api_key, "abc123");
    assert_eq!(provider.timeout(), Duration::from_secs(30));
    assert_eq!(provider.extended_timeout(), Duration::from_secs(900));
    assert!(provider.validate().is_ok());
}

#[test]
fn test_timeouts_default_when_missing() {
    let yaml_content = r#"
host_url: "https://api.monitoring.example/"
api_key: "abc123"
"#;

    let provider = from_yaml(yaml_content).expect("Failed to deserialize provider config");
    assert_eq!(provider.timeout_secs, 60);
    assert_eq!(provider.extended_timeout_secs, 600);
}

#[test]
fn test_missing_api_key_fails() {
    let yaml_content = r#"
host_url: "https://api.monitoring.example/"
"#;

    let result = from_yaml(yaml_content);
    assert!(result.is_err(), "api_key is required");
}

#[test]
fn test_validation_messages() {
    let mut provider = ProviderConfig::new("https://api.monitoring.example/", "");
    let err = provider.validate().unwrap_err();
    assert!(err.to_string().contains("api_key must not be empty"));

    provider.api_key = "abc".into();
    provider.host_url = "api.monitoring.example".into();
    let err = provider.validate().unwrap_err();
    assert!(err.to_string().contains("host_url is not a valid URL"));

    provider.host_url = "https://api.monitoring.example/".into();
    provider.timeout_secs = 700;
    let err = provider.validate().unwrap_err();
    assert!(
        err.to_string()
            .contains("extended_timeout_secs must not be shorter than timeout_secs")
    );
}

// File and environment sources share process-wide state, so every
// `load_config_from` case lives in this one test.
#[test]
fn test_load_config_from_file_and_env() {
    let dir = env::temp_dir();
    let stem = dir.join(format!("synthetics_config_test_{}", std::process::id()));
    let path = stem.with_extension("yaml");

    fs::write(
        &path,
        r#"
host_url: "https://file.monitoring.example/"
api_key: "file-key"
timeout_secs: 45
"#,
    )
    .expect("Failed to write temp config");
    let stem = stem.to_str().expect("temp path is not UTF-8");

    let provider = load_config_from(stem).expect("file config should load");
    assert_eq!(provider.host_url, "https://file.monitoring.example/");
    assert_eq!(provider.timeout_secs, 45);
    assert_eq!(provider.extended_timeout_secs, 600);

    unsafe {
        env::set_var("SYNTHETICS_API_KEY", "env-key");
        env::set_var("SYNTHETICS_EXTENDED_TIMEOUT_SECS", "1200");
    }
    let provider = load_config_from(stem).expect("env overrides should load");
    assert_eq!(provider.api_key, "env-key");
    assert_eq!(provider.extended_timeout_secs, 1200);
    assert_eq!(provider.host_url, "https://file.monitoring.example/");

    unsafe {
        env::set_var("SYNTHETICS_HOST_URL", "ftp://env.monitoring.example/");
    }
    let err = load_config_from(stem).unwrap_err();
    assert!(matches!(err, ConfigError::Validation(_)));

    unsafe {
        env::remove_var("SYNTHETICS_API_KEY");
        env::remove_var("SYNTHETICS_EXTENDED_TIMEOUT_SECS");
        env::remove_var("SYNTHETICS_HOST_URL");
    }
    let _ = fs::remove_file(path);

    // Without a file and without env vars nothing is configured.
    let missing = dir.join("synthetics_config_test_absent");
    let err = load_config_from(missing.to_str().expect("temp path is not UTF-8")).unwrap_err();
    assert!(matches!(err, ConfigError::Build(_)));
}
