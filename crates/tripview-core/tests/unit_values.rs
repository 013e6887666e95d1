use tripview_core::units::{
    AirPressureUnit, Altitude, AltitudeValue, DistanceUnit, Odometer, OdometerValue, Pressure,
    PressureValue, Quantity, Speed, SpeedValue, Temperature, TemperatureUnit, TemperatureValue,
    UnitError, UnitValue,
};

fn assert_round_trip<Q: Quantity>(units: &[Q::Unit], raw: &str) {
    for &from in units {
        for &to in units {
            let original = UnitValue::<Q>::new(from, raw);
            let converted = original.convert_to(to).unwrap();
            let back = UnitValue::<Q>::new(to, converted.to_string())
                .convert_to(from)
                .unwrap();
            let expected: f64 = raw.parse().unwrap();
            assert!(
                (back - expected).abs() < 1e-2,
                "{} {:?} -> {:?} -> back gave {}",
                Q::NAME,
                from,
                to,
                back
            );
        }
    }
}

fn assert_blank_is_zero<Q: Quantity>(units: &[Q::Unit]) {
    for &from in units {
        for raw in ["", "   ", "\t", "none", "NA"] {
            let value = UnitValue::<Q>::new(from, raw);
            assert!(value.is_missing());
            for &to in units {
                assert_eq!(value.convert_to(to), Ok(0.0), "{} {:?}", Q::NAME, raw);
            }
        }
    }
}

const LENGTHS: [DistanceUnit; 2] = [DistanceUnit::Feet, DistanceUnit::Meter];

#[test]
fn test_round_trips_for_every_supported_pair() {
    assert_round_trip::<Temperature>(&TemperatureUnit::ALL, "71.6");
    assert_round_trip::<Temperature>(&TemperatureUnit::ALL, "-17.5");
    assert_round_trip::<Pressure>(&AirPressureUnit::ALL, "36.5");
    assert_round_trip::<Altitude>(&LENGTHS, "1234.5");
    assert_round_trip::<Odometer>(&DistanceUnit::ALL, "45210.7");
    assert_round_trip::<Speed>(&DistanceUnit::ALL, "62.5");
}

#[test]
fn test_blank_reading_is_zero_everywhere() {
    assert_blank_is_zero::<Temperature>(&TemperatureUnit::ALL);
    assert_blank_is_zero::<Pressure>(&AirPressureUnit::ALL);
    assert_blank_is_zero::<Altitude>(&LENGTHS);
    assert_blank_is_zero::<Odometer>(&DistanceUnit::ALL);
    assert_blank_is_zero::<Speed>(&DistanceUnit::ALL);
}

#[test]
fn test_temperature_fixed_points() {
    let freezing = TemperatureValue::new(TemperatureUnit::Fahrenheit, "32");
    assert_eq!(freezing.to_celsius(), Ok(0.0));
    let zero = TemperatureValue::new(TemperatureUnit::Celsius, "0");
    assert_eq!(zero.to_fahrenheit(), Ok(32.0));
}

#[test]
fn test_pressure_conversions() {
    let cases = [
        (AirPressureUnit::Bar, "2.0", AirPressureUnit::Psi, 29.008),
        (AirPressureUnit::Bar, "1.5", AirPressureUnit::Kpa, 150.0),
        (AirPressureUnit::Psi, "32", AirPressureUnit::Bar, 2.206),
        (AirPressureUnit::Psi, "35", AirPressureUnit::Kpa, 241.31),
        (AirPressureUnit::Kpa, "220", AirPressureUnit::Psi, 31.908),
        (AirPressureUnit::Kpa, "300", AirPressureUnit::Bar, 3.0),
    ];
    for (from, raw, to, expected) in cases {
        let value = PressureValue::new(from, raw).convert_to(to).unwrap();
        assert!(
            (value - expected).abs() < 0.01,
            "{raw} {from} -> {to}: {value}"
        );
    }
}

#[test]
fn test_altitude_conversions() {
    let feet = AltitudeValue::new(DistanceUnit::Feet, "1000");
    assert!((feet.to_meters().unwrap() - 304.8).abs() < 1e-9);
    let meters = AltitudeValue::new(DistanceUnit::Meter, "500");
    assert!((meters.to_feet().unwrap() - 1640.42).abs() < 0.01);
}

#[test]
fn test_altitude_rejects_unsupported_unit() {
    let value = AltitudeValue::new(DistanceUnit::Feet, "1000");
    assert!(matches!(
        value.convert_to(DistanceUnit::Miles),
        Err(UnitError::InvalidUnit { quantity: "altitude", .. })
    ));
    // A missing reading is zero before any unit check.
    let blank = AltitudeValue::new(DistanceUnit::Feet, "");
    assert_eq!(blank.convert_to(DistanceUnit::Kilometers), Ok(0.0));
}

#[test]
fn test_speed_conversions() {
    let mph = SpeedValue::new(DistanceUnit::Miles, "60");
    assert!((mph.to_kilometers_per_hour().unwrap() - 96.56064).abs() < 1e-9);
    assert!((mph.convert_to(DistanceUnit::Feet).unwrap() - 316_800.0).abs() < 1e-6);

    let kmh = SpeedValue::new(DistanceUnit::Kilometers, "100");
    assert!((kmh.to_miles_per_hour().unwrap() - 62.137).abs() < 0.001);
}

#[test]
fn test_odometer_delta() {
    let start = OdometerValue::new(DistanceUnit::Kilometers, "1000");
    let end = OdometerValue::new(DistanceUnit::Kilometers, "1010");
    let miles = end.delta(&start, DistanceUnit::Miles).unwrap();
    assert!((miles - 6.2137).abs() < 1e-4);
    assert!((end.to_meters().unwrap() - 1_010_000.0).abs() < 1e-9);
}

#[test]
fn test_raw_text_preserved_and_displayed() {
    let value = PressureValue::new(AirPressureUnit::Psi, "36.50");
    assert_eq!(value.raw(), "36.50");
    assert_eq!(value.source_unit(), AirPressureUnit::Psi);
    assert_eq!(value.to_string(), "36.50 psi");

    let malformed = PressureValue::new(AirPressureUnit::Psi, "--");
    assert_eq!(malformed.to_string(), "--");
    assert!(matches!(
        malformed.to_bar(),
        Err(UnitError::MalformedValue { quantity: "pressure", .. })
    ));
}
