//! Logging system integration tests.
//!
//! Tests log configuration presets and subscriber installation.

use ccxt_core::logging::{LogConfig, LogFormat, LogLevel, try_init_logging};

#[test]
fn test_log_config_default() {
    let config = LogConfig::default();
    assert_eq!(config.level, LogLevel::Info);
    assert_eq!(config.format, LogFormat::Pretty);
    assert!(config.show_time);
    assert!(config.show_target);
}

#[test]
fn test_log_config_development() {
    let config = LogConfig::development();
    assert_eq!(config.level, LogLevel::Debug);
    assert_eq!(config.format, LogFormat::Pretty);
    assert!(config.show_span_events);
}

#[test]
fn test_log_config_production() {
    let config = LogConfig::production();
    assert_eq!(config.level, LogLevel::Info);
    assert_eq!(config.format, LogFormat::Json);
    assert!(config.show_thread_ids);
}

#[test]
fn test_default_directive_covers_all_crates() {
    let directive = LogConfig::production().default_directive();
    for target in ["ccxt_core=info", "ccxt_exchanges=info", "ccxt_fameex=info"] {
        assert!(directive.contains(target), "missing {target} in {directive}");
    }
}

#[test]
fn test_second_init_is_ignored() {
    // another test binary may already own the global subscriber
    let first = try_init_logging(&LogConfig::test());
    let second = try_init_logging(&LogConfig::test());
    assert!(!second || !first);
    tracing::warn!(target: "ccxt_core", "logging initialized");
}
