use stock_records::config::{LogFormat, LoggingConfig};
use stock_records::utils::logger::init_logger;
use stock_records::VehicleRecord;

#[test]
fn test_logger_installs_once() {
    let config = LoggingConfig {
        level: "DEBUG".to_string(),
        format: LogFormat::Compact,
    };

    assert!(init_logger(&config).is_ok());

    let mut vehicle = VehicleRecord::default();
    assert!(vehicle.set_plate("??").is_err());

    let err = init_logger(&config).unwrap_err();
    assert!(err.to_string().contains("Logger initialisation failed"));
}
