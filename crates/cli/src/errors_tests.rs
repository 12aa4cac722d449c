use super::*;
use anyhow::anyhow;

#[test]
fn test_config_error_display() {
    let err = CliError::ConfigError("bad config".to_string());
    assert_eq!(format!("{}", err), "Configuration error: bad config");
}

#[test]
fn test_invalid_arguments_display() {
    let err = CliError::InvalidArguments("bad arg".to_string());
    assert_eq!(format!("{}", err), "Invalid arguments: bad arg");
}

#[test]
fn test_provider_error_display() {
    let err = CliError::ProviderError("no names".to_string());
    assert_eq!(format!("{}", err), "Display name provider error: no names");
}

#[test]
fn test_validation_failed_display() {
    let err = CliError::ValidationFailed("fail".to_string());
    assert_eq!(format!("{}", err), "Validation failed: fail");
}

#[test]
fn test_other_error_display() {
    let err = CliError::Other("other".to_string());
    assert_eq!(format!("{}", err), "Error: other");
}

#[test]
fn test_from_anyhow_error() {
    let err: CliError = anyhow!("anyhow error").into();
    assert!(matches!(err, CliError::Other(_)));
}

#[test]
fn test_from_anyhow_error_keeps_context_chain() {
    use anyhow::Context;

    let source: Result<(), std::io::Error> = Err(std::io::Error::other("disk full"));
    let err: CliError = source.context("Failed to serialize report").unwrap_err().into();
    assert_eq!(format!("{}", err), "Error: Failed to serialize report: disk full");
}

#[test]
fn test_from_config_load_error() {
    let err: CliError = ConfigLoadError::UnsupportedSchemaVersion(3).into();
    assert!(matches!(err, CliError::ConfigError(_)));
    assert_eq!(
        format!("{}", err),
        "Configuration error: Unsupported configuration schema version: 3"
    );
}

#[test]
fn test_from_title_warden_error() {
    let err: CliError = TitleWardenError::InvalidRule {
        rule: "types".to_string(),
        reason: "must not be empty".to_string(),
    }.into();
    assert!(matches!(err, CliError::ConfigError(_)));
}

#[test]
fn test_from_provider_error() {
    let err: CliError = ProviderError::Unavailable("gone".to_string()).into();
    assert!(matches!(err, CliError::ProviderError(_)));
}

#[test]
fn test_exit_codes() {
    use std::process::{ExitCode, Termination};

    let cases = vec![
        (CliError::ValidationFailed("x".to_string()), ExitCode::from(1)),
        (CliError::ConfigError("x".to_string()), ExitCode::from(2)),
        (CliError::InvalidArguments("x".to_string()), ExitCode::from(5)),
        (CliError::ProviderError("x".to_string()), ExitCode::from(6)),
    ];

    for (err, expected) in cases {
        assert_eq!(format!("{:?}", err.report()), format!("{:?}", expected));
    }
}
