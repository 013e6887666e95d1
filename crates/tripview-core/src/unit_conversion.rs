//! Unit Conversion Functions
//!
//! Plain conversion functions behind the unit-bearing values in [`crate::units`]:
//! - Temperature: °C ↔ °F
//! - Pressure: PSI ↔ kPa ↔ bar
//! - Length: feet / miles / kilometers ↔ meters
//! - Speed: mph ↔ km/h, ft/h, m/h
//!
//! Pressure factors are rounded to the figures the logging app displays
//! with, so converted values agree with its own screens.

/// Fahrenheit degrees per Celsius degree
pub const FAHRENHEIT_PER_CELSIUS: f64 = 1.8;

/// Fahrenheit reading at 0 °C
pub const FAHRENHEIT_FREEZING_POINT: f64 = 32.0;

/// Kilopascals per PSI
pub const KPA_PER_PSI: f64 = 6.89476;

/// PSI per bar
pub const PSI_PER_BAR: f64 = 14.5038;

/// Kilopascals per bar
pub const KPA_PER_BAR: f64 = 100.0;

/// Meters per international foot
pub const METERS_PER_FOOT: f64 = 0.3048;

/// Meters per statute mile
pub const METERS_PER_MILE: f64 = 1609.344;

/// Meters per kilometer
pub const METERS_PER_KILOMETER: f64 = 1000.0;

/// Feet per statute mile
pub const FEET_PER_MILE: f64 = 5280.0;

/// km/h per mph
pub const KMH_PER_MPH: f64 = 1.609344;

/// Convert Celsius to Fahrenheit
pub fn celsius_to_fahrenheit(c: f64) -> f64 {
    c * FAHRENHEIT_PER_CELSIUS + FAHRENHEIT_FREEZING_POINT
}

/// Convert Fahrenheit to Celsius
pub fn fahrenheit_to_celsius(f: f64) -> f64 {
    (f - FAHRENHEIT_FREEZING_POINT) / FAHRENHEIT_PER_CELSIUS
}

/// Convert kPa to PSI
pub fn kpa_to_psi(kpa: f64) -> f64 {
    kpa / KPA_PER_PSI
}

/// Convert PSI to kPa
pub fn psi_to_kpa(psi: f64) -> f64 {
    psi * KPA_PER_PSI
}

/// Convert bar to PSI
pub fn bar_to_psi(bar: f64) -> f64 {
    bar * PSI_PER_BAR
}

/// Convert PSI to bar
pub fn psi_to_bar(psi: f64) -> f64 {
    psi / PSI_PER_BAR
}

/// Convert bar to kPa
pub fn bar_to_kpa(bar: f64) -> f64 {
    bar * KPA_PER_BAR
}

/// Convert kPa to bar
pub fn kpa_to_bar(kpa: f64) -> f64 {
    kpa / KPA_PER_BAR
}

/// Convert feet to meters
pub fn feet_to_meters(feet: f64) -> f64 {
    feet * METERS_PER_FOOT
}

/// Convert meters to feet
pub fn meters_to_feet(meters: f64) -> f64 {
    meters / METERS_PER_FOOT
}

/// Convert miles to meters
pub fn miles_to_meters(miles: f64) -> f64 {
    miles * METERS_PER_MILE
}

/// Convert meters to miles
pub fn meters_to_miles(meters: f64) -> f64 {
    meters / METERS_PER_MILE
}

/// Convert kilometers to meters
pub fn kilometers_to_meters(km: f64) -> f64 {
    km * METERS_PER_KILOMETER
}

/// Convert meters to kilometers
pub fn meters_to_kilometers(meters: f64) -> f64 {
    meters / METERS_PER_KILOMETER
}

/// Convert mph to km/h
pub fn mph_to_kmh(mph: f64) -> f64 {
    mph * KMH_PER_MPH
}

/// Convert km/h to mph
pub fn kmh_to_mph(kmh: f64) -> f64 {
    kmh / KMH_PER_MPH
}

/// Convert mph to feet per hour
pub fn mph_to_feet_per_hour(mph: f64) -> f64 {
    mph * FEET_PER_MILE
}

/// Convert feet per hour to mph
pub fn feet_per_hour_to_mph(fph: f64) -> f64 {
    fph / FEET_PER_MILE
}

/// Convert mph to meters per hour
pub fn mph_to_meters_per_hour(mph: f64) -> f64 {
    mph * METERS_PER_MILE
}

/// Convert meters per hour to mph
pub fn meters_per_hour_to_mph(mh: f64) -> f64 {
    mh / METERS_PER_MILE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_celsius_fahrenheit_conversion() {
        assert!((celsius_to_fahrenheit(0.0) - 32.0).abs() < 0.01);
        assert!((fahrenheit_to_celsius(32.0) - 0.0).abs() < 0.01);
        assert!((celsius_to_fahrenheit(100.0) - 212.0).abs() < 0.01);
        assert!((fahrenheit_to_celsius(212.0) - 100.0).abs() < 0.01);
        assert!((celsius_to_fahrenheit(-40.0) + 40.0).abs() < 0.01);
    }

    #[test]
    fn test_pressure_conversion() {
        assert!((psi_to_kpa(35.0) - 241.31).abs() < 0.01);
        assert!((bar_to_psi(2.0) - 29.0076).abs() < 0.01);
        assert!((kpa_to_psi(220.0) - 31.908).abs() < 0.01);
        assert!((bar_to_kpa(1.5) - 150.0).abs() < 1e-9);
        assert!((kpa_to_bar(300.0) - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_length_conversion() {
        assert!((feet_to_meters(1000.0) - 304.8).abs() < 1e-9);
        assert!((meters_to_feet(500.0) - 1640.42).abs() < 0.01);
        assert!((meters_to_miles(miles_to_meters(12.5)) - 12.5).abs() < 1e-9);
        assert!((meters_to_kilometers(kilometers_to_meters(3.2)) - 3.2).abs() < 1e-9);
    }

    #[test]
    fn test_speed_conversion() {
        assert!((mph_to_kmh(62.137) - 100.0).abs() < 0.01);
        assert!((kmh_to_mph(100.0) - 62.137).abs() < 0.01);
        assert!((mph_to_feet_per_hour(1.0) - 5280.0).abs() < 1e-9);
        assert!((meters_per_hour_to_mph(1609.344) - 1.0).abs() < 1e-9);
    }
}
