use slow_query_detector::config::{Config, OutputConfig};

#[test]
fn test_default_config() {
    let config = Config::default();

    assert!(config.output.format.is_none());
    assert!(config.output.color);
}

#[test]
fn test_default_output_config() {
    let output = OutputConfig::default();

    assert!(output.format.is_none());
    assert!(output.color);
}

#[test]
fn test_parse_full_config() {
    let config: Config = toml::from_str(
        r#"
        [output]
        format = "json"
        color = false
        "#
    )
    .unwrap();

    assert_eq!(config.output.format.as_deref(), Some("json"));
    assert!(!config.output.color);
}

#[test]
fn test_parse_empty_config_uses_defaults() {
    let config: Config = toml::from_str("").unwrap();

    assert!(config.output.format.is_none());
    assert!(config.output.color);
}

#[test]
fn test_parse_partial_output_section() {
    let config: Config = toml::from_str("[output]\nformat = \"yaml\"\n").unwrap();

    assert_eq!(config.output.format.as_deref(), Some("yaml"));
    assert!(config.output.color);
}

#[test]
fn test_invalid_config_is_rejected() {
    let result: Result<Config, _> = toml::from_str("[output]\ncolor = \"maybe\"\n");
    assert!(result.is_err());
}
