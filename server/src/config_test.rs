use super::*;

#[test]
fn from_values_defaults_when_unset() {
    let cfg = ServerConfig::from_values(None, None).unwrap();
    assert_eq!(cfg, ServerConfig { host: DEFAULT_HOST.to_owned(), port: DEFAULT_PORT });
    assert_eq!(cfg.bind_addr(), "0.0.0.0:3000");
}

#[test]
fn from_values_treats_blank_as_unset() {
    let cfg = ServerConfig::from_values(Some("  "), Some("")).unwrap();
    assert_eq!(cfg.host, DEFAULT_HOST);
    assert_eq!(cfg.port, DEFAULT_PORT);
}

#[test]
fn from_values_parses_overrides() {
    let cfg = ServerConfig::from_values(Some("127.0.0.1"), Some(" 8080 ")).unwrap();
    assert_eq!(cfg.bind_addr(), "127.0.0.1:8080");
}

#[test]
fn from_values_rejects_non_numeric_port() {
    let err = ServerConfig::from_values(None, Some("http")).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidPort { ref value, .. } if value == "http"));
}

#[test]
fn from_values_rejects_zero_and_out_of_range_ports() {
    assert_eq!(
        ServerConfig::from_values(None, Some("0")),
        Err(ConfigError::InvalidPort { value: "0".to_owned(), reason: "port must be non-zero".to_owned() })
    );
    assert!(ServerConfig::from_values(None, Some("70000")).is_err());
}

#[test]
fn invalid_port_error_message_names_value() {
    let err = ServerConfig::from_values(None, Some("abc")).unwrap_err();
    assert!(err.to_string().starts_with("invalid PORT \"abc\": "));
}

#[test]
fn from_env_reads_host_and_port() {
    unsafe {
        std::env::set_var("HOST", "127.0.0.1");
        std::env::set_var("PORT", "4000");
    }

    let cfg = ServerConfig::from_env().unwrap();
    assert_eq!(cfg.bind_addr(), "127.0.0.1:4000");

    unsafe {
        std::env::remove_var("HOST");
        std::env::remove_var("PORT");
    }
}
