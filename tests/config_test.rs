use anyhow::Result;
use chrono::NaiveDate;
use stock_records::config::{LogFormat, RecordsConfig};
use stock_records::{ApplianceRecord, Clock, RecordError, ReferenceClock, VehicleRecord};
use tempfile::TempDir;

#[test]
fn test_load_config_from_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("records.toml");
    std::fs::write(
        &config_path,
        r#"
[clock]
reference_date = "2026-01-31"

[logging]
level = "debug"
format = "json"
"#,
    )?;

    let config = RecordsConfig::from_file(&config_path)?;
    let reference = NaiveDate::from_ymd_opt(2026, 1, 31).unwrap();

    assert_eq!(config.clock.reference_date, Some(reference));
    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.logging.format, LogFormat::Json);
    assert_eq!(config.clock().today(), reference);
    Ok(())
}

#[test]
fn test_empty_config_uses_defaults() -> Result<()> {
    let config = RecordsConfig::from_toml_str("")?;

    assert_eq!(config, RecordsConfig::default());
    assert_eq!(config.logging.level, "info");
    assert_eq!(config.logging.format, LogFormat::Compact);
    assert!(matches!(config.clock(), ReferenceClock::System(_)));
    Ok(())
}

#[test]
fn test_invalid_configs_are_rejected() {
    assert!(RecordsConfig::from_toml_str("[logging]\nlevel = \"loud\"\n").is_err());
    assert!(RecordsConfig::from_toml_str("[logging]\nformat = \"xml\"\n").is_err());
    assert!(RecordsConfig::from_toml_str("[clock]\nreference_date = \"1985-01-01\"\n").is_err());
    assert!(RecordsConfig::from_toml_str("[clock]\nreference_date = \"2009-12-31\"\n").is_err());
    assert!(RecordsConfig::from_toml_str("[clock]\nreference_date = \"not-a-date\"\n").is_err());
}

#[test]
fn test_missing_file_is_an_io_error() {
    let temp_dir = TempDir::new().unwrap();
    let err = RecordsConfig::from_file(temp_dir.path().join("missing.toml")).unwrap_err();
    assert!(matches!(err, RecordError::IoError(_)));
    assert!(err.to_string().starts_with("IO error"));
}

#[test]
fn test_configured_clock_drives_records() -> Result<()> {
    let config = RecordsConfig::from_toml_str("[clock]\nreference_date = \"2030-05-01\"\n")?;
    let mut vehicle = VehicleRecord::with_clock(config.clock());

    assert_eq!(vehicle.year(), 2027);
    assert!(vehicle.set_year(2031).is_ok());
    assert!(vehicle.set_year(2032).is_err());
    assert_eq!(vehicle.age(), -1);
    Ok(())
}

#[test]
fn test_earliest_reference_date_gives_valid_defaults() -> Result<()> {
    let config = RecordsConfig::from_toml_str("[clock]\nreference_date = \"2010-03-01\"\n")?;

    let mut fridge = ApplianceRecord::with_clock(config.clock());
    assert_eq!(
        fridge.manufacture_date(),
        NaiveDate::from_ymd_opt(2010, 1, 1).unwrap()
    );
    fridge.set_manufacture_date(fridge.manufacture_date())?;

    let mut vehicle = VehicleRecord::with_clock(config.clock());
    vehicle.set_year(vehicle.year())?;
    vehicle.set_registration_date(vehicle.registration_date())?;
    Ok(())
}
