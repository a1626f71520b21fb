/*!
 * Tests for application configuration functionality
 */

use std::fs;

use tempfile::TempDir;
use xlf_translator::app_config::{Config, LogLevel};

/// Test default configuration values
#[test]
fn test_defaultConfig_withNoParameters_shouldHaveCorrectDefaults() {
    let config = Config::default();

    assert_eq!(config.server.port, 3000);
    assert_eq!(config.server.body_limit_bytes, 50 * 1024 * 1024);
    assert!(config.server.static_dir.is_none());
    assert_eq!(config.anthropic.endpoint, "https://api.anthropic.com");
    assert_eq!(config.anthropic.translation_max_tokens, 4000);
    assert_eq!(config.anthropic.context_max_tokens, 1000);
    assert_eq!(config.context.max_samples, 40);
    assert!(!config.anthropic.has_api_key());
    assert_eq!(config.log_level, LogLevel::Info);
}

#[test]
fn test_configValidation_withoutApiKey_shouldStillPass() {
    assert!(Config::default().validate().is_ok());
}

#[test]
fn test_configValidation_withZeroBudgets_shouldFail() {
    let mut config = Config::default();
    config.anthropic.translation_max_tokens = 0;
    assert!(config.validate().is_err());

    let mut config = Config::default();
    config.context.max_samples = 0;
    assert!(config.validate().is_err());

    let mut config = Config::default();
    config.server.port = 0;
    assert!(config.validate().is_err());
}

#[test]
fn test_loadConfig_withPartialFile_shouldFillDefaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("conf.json");
    fs::write(
        &path,
        r#"{ "server": { "port": 8080 }, "anthropic": { "model": "claude-3-haiku-20240307" }, "log_level": "debug" }"#,
    )
    .unwrap();

    let config = Config::load(&path).unwrap();

    assert_eq!(config.server.port, 8080);
    assert_eq!(config.server.bind_addr, "0.0.0.0");
    assert_eq!(config.anthropic.model, "claude-3-haiku-20240307");
    assert_eq!(config.anthropic.translation_max_tokens, 4000);
    assert_eq!(config.log_level, LogLevel::Debug);
}

#[test]
fn test_loadConfig_withMissingFile_shouldUseDefaults() {
    let dir = TempDir::new().unwrap();
    let config = Config::load(dir.path().join("absent.json")).unwrap();
    assert_eq!(config.server.port, 3000);
}

#[test]
fn test_loadConfig_withInvalidJson_shouldFail() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("conf.json");
    fs::write(&path, "{ not json").unwrap();

    let error = Config::load(&path).unwrap_err();
    assert!(error.to_string().contains("Failed to parse config file"));
}

#[test]
fn test_applyEnvApiKey_shouldIgnoreBlankValues() {
    let mut config = Config::default();

    config.apply_env_api_key(Some("  ".to_string()));
    assert!(!config.anthropic.has_api_key());

    config.apply_env_api_key(Some("sk-test".to_string()));
    assert_eq!(config.anthropic.api_key, "sk-test");

    config.apply_env_api_key(None);
    assert_eq!(config.anthropic.api_key, "sk-test");
}
