//! Tests for import configuration serialization

use pretty_assertions::assert_eq;
use tripview_core::prelude::*;

#[test]
fn test_config_json_round_trip() {
    let config = ImportConfig {
        elevation_unit: DistanceUnit::Meter,
        tire_pressure_unit: AirPressureUnit::Kpa,
        delimiter: ';',
        ..Default::default()
    };
    let json = serde_json::to_string(&config).unwrap();
    let back: ImportConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back, config);
}

#[test]
fn test_partial_config_uses_defaults() {
    let config: ImportConfig =
        serde_json::from_str(r#"{ "odometer_unit": "miles", "ambient_temperature_unit": "celsius" }"#)
            .unwrap();
    assert_eq!(config.odometer_unit, DistanceUnit::Miles);
    assert_eq!(config.ambient_temperature_unit, TemperatureUnit::Celsius);
    assert_eq!(config.elevation_unit, DistanceUnit::Feet);
    assert_eq!(config.tire_pressure_unit, AirPressureUnit::Psi);
    assert_eq!(config.delimiter, ',');
    assert_eq!(config.gid_wh_multiplier, 80);
    assert!(config.validate().is_ok());
}

#[test]
fn test_unknown_unit_name_is_rejected() {
    let result = serde_json::from_str::<ImportConfig>(r#"{ "speed_unit": "furlongs" }"#);
    assert!(result.is_err());
}

#[test]
fn test_speed_in_any_distance_unit_is_valid() {
    for unit in DistanceUnit::ALL {
        let config = ImportConfig {
            speed_unit: unit,
            odometer_unit: unit,
            ..Default::default()
        };
        assert!(config.validate().is_ok(), "{unit}");
    }
}
