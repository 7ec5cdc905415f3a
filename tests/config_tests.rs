use clap::Parser;
use hoteldesk::cli::parser::Cli;
use hoteldesk::config::Config;
use hoteldesk::connect_params;
use hoteldesk::errors::AppError;
use std::fs;

#[test]
fn test_missing_file_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = Config::load_from(&dir.path().join("nope.conf")).unwrap();

    assert_eq!(cfg, Config::default());
    assert_eq!(cfg.host, "localhost");
    assert_eq!(cfg.password, "");
    assert_eq!(cfg.logging.level, "warn");
}

#[test]
fn test_partial_file_keeps_other_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("hoteldesk.conf");
    fs::write(&path, "host: db.internal\nlogging:\n  level: debug\n").unwrap();

    let cfg = Config::load_from(&path).unwrap();

    assert_eq!(cfg.host, "db.internal");
    assert_eq!(cfg.password, "");
    assert_eq!(cfg.logging.level, "debug");
    assert_eq!(cfg.logging.format, "pretty");
}

#[test]
fn test_empty_file_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("hoteldesk.conf");
    fs::write(&path, "\n").unwrap();

    assert_eq!(Config::load_from(&path).unwrap(), Config::default());
}

#[test]
fn test_malformed_file_is_a_config_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("hoteldesk.conf");
    fs::write(&path, "host: [unclosed\n").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, AppError::Config(_)));
}

#[test]
fn test_connect_params_merge_cli_and_config() {
    let cfg = Config {
        host: "db.internal".into(),
        password: "s3cret".into(),
        ..Config::default()
    };

    let cli = Cli::try_parse_from(["hoteldesk", "hotels", "5433", "alice"]).unwrap();
    let params = connect_params(&cli, &cfg);
    assert_eq!(params.host, "db.internal");
    assert_eq!(params.port, 5433);
    assert_eq!(params.password, "s3cret");
    assert_eq!(params.url(), "postgresql://db.internal:5433/hotels");

    let cli = Cli::try_parse_from(["hoteldesk", "hotels", "5433", "alice", "--host", "127.0.0.1"])
        .unwrap();
    assert_eq!(connect_params(&cli, &cfg).host, "127.0.0.1");
}

#[test]
fn test_cli_requires_exactly_three_positionals() {
    assert!(Cli::try_parse_from(["hoteldesk", "hotels", "5432"]).is_err());
    assert!(Cli::try_parse_from(["hoteldesk", "hotels", "5432", "alice", "extra"]).is_err());
    assert!(Cli::try_parse_from(["hoteldesk", "hotels", "port", "alice"]).is_err());
}
