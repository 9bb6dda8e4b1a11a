/*!
 * Tests for engine configuration
 */

use subsync::app_config::{EngineConfig, LogLevel};
use crate::common;

/// Test the documented defaults
#[test]
fn test_default_config_shouldEnableCaptionsWithDefaultStyle() {
    let config = EngineConfig::default();

    assert!(config.captions_visible);
    assert_eq!(config.default_style, "Default");
    assert_eq!(config.log_level, LogLevel::Info);
    assert!(config.validate().is_ok());
}

/// Test saving and reloading a configuration file
#[test]
fn test_config_round_trip_withTempFile_shouldPreserveValues() {
    let temp_dir = common::create_temp_dir().unwrap();
    let path = temp_dir.path().join("config.json");

    let config = EngineConfig {
        captions_visible: false,
        default_style: "Sign".to_string(),
        log_level: LogLevel::Debug,
    };
    config.save_to_file(&path).unwrap();

    let loaded = EngineConfig::from_file(&path).unwrap();
    assert!(!loaded.captions_visible);
    assert_eq!(loaded.default_style, "Sign");
    assert_eq!(loaded.log_level, LogLevel::Debug);
}

/// Test that absent fields take their serde defaults
#[test]
fn test_from_json_withPartialConfig_shouldApplyDefaults() {
    let config: EngineConfig = serde_json::from_str("{\"captions_visible\": false}").unwrap();

    assert!(!config.captions_visible);
    assert_eq!(config.default_style, "Default");
    assert_eq!(config.log_level, LogLevel::Info);
}

/// Test validation of an empty default style name
#[test]
fn test_validate_withEmptyDefaultStyle_shouldFail() {
    let config = EngineConfig {
        default_style: "  ".to_string(),
        ..EngineConfig::default()
    };

    assert!(config.validate().is_err());
}

/// Test the log level mapping to log crate filters
#[test]
fn test_log_level_withEachVariant_shouldMapToLevelFilter() {
    assert_eq!(LogLevel::Error.to_level_filter(), log::LevelFilter::Error);
    assert_eq!(LogLevel::Warn.to_level_filter(), log::LevelFilter::Warn);
    assert_eq!(LogLevel::Info.to_level_filter(), log::LevelFilter::Info);
    assert_eq!(LogLevel::Debug.to_level_filter(), log::LevelFilter::Debug);
    assert_eq!(LogLevel::Trace.to_level_filter(), log::LevelFilter::Trace);
}
