//! Conversion tables per physical quantity
//!
//! Every quantity converts by normalizing to one base unit and then
//! converting from the base to the target. Distance units appear in three
//! quantities (altitude, odometer, speed), each with its own table, so the
//! quantity rather than the unit enum owns the arithmetic.

use serde::Serialize;
use std::fmt;

use super::{AirPressureUnit, DistanceUnit, TemperatureUnit, UnitError};
use crate::unit_conversion::{
    bar_to_kpa, bar_to_psi, celsius_to_fahrenheit, fahrenheit_to_celsius, feet_per_hour_to_mph,
    feet_to_meters, kilometers_to_meters, kmh_to_mph, kpa_to_bar, kpa_to_psi,
    meters_per_hour_to_mph, meters_to_feet, meters_to_kilometers, meters_to_miles,
    miles_to_meters, mph_to_feet_per_hour, mph_to_kmh, mph_to_meters_per_hour, psi_to_bar,
    psi_to_kpa,
};

/// A physical quantity with a closed set of units
pub trait Quantity {
    /// Unit enumeration for this quantity
    type Unit: Copy + PartialEq + fmt::Debug + fmt::Display + Serialize;

    /// Name used in error messages
    const NAME: &'static str;

    /// Convert a value in `unit` to the base unit
    fn to_base(value: f64, unit: Self::Unit) -> Result<f64, UnitError>;

    /// Convert a value in the base unit to `unit`
    fn from_base(value: f64, unit: Self::Unit) -> Result<f64, UnitError>;

    /// Whether `unit` can be used with this quantity
    fn supports(unit: Self::Unit) -> bool {
        Self::to_base(0.0, unit).is_ok()
    }

    /// Convert `value` from one unit to another
    fn convert(value: f64, from: Self::Unit, to: Self::Unit) -> Result<f64, UnitError> {
        if from == to {
            if !Self::supports(to) {
                return Err(UnitError::invalid_unit(Self::NAME, to));
            }
            return Ok(value);
        }
        Self::from_base(Self::to_base(value, from)?, to)
    }

    /// Label used when displaying a value in `unit`
    fn label(unit: Self::Unit) -> String {
        unit.to_string()
    }
}

/// Temperature; base unit Celsius
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Temperature;

/// Air pressure; base unit PSI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pressure;

/// Elevation; base unit meters, feet and meters only
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Altitude;

/// Odometer distance; base unit meters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Odometer;

/// Speed as distance per hour; base unit mph
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Speed;

impl Quantity for Temperature {
    type Unit = TemperatureUnit;
    const NAME: &'static str = "temperature";

    fn to_base(value: f64, unit: TemperatureUnit) -> Result<f64, UnitError> {
        Ok(match unit {
            TemperatureUnit::Celsius => value,
            TemperatureUnit::Fahrenheit => fahrenheit_to_celsius(value),
        })
    }

    fn from_base(value: f64, unit: TemperatureUnit) -> Result<f64, UnitError> {
        Ok(match unit {
            TemperatureUnit::Celsius => value,
            TemperatureUnit::Fahrenheit => celsius_to_fahrenheit(value),
        })
    }
}

impl Quantity for Pressure {
    type Unit = AirPressureUnit;
    const NAME: &'static str = "pressure";

    fn to_base(value: f64, unit: AirPressureUnit) -> Result<f64, UnitError> {
        Ok(match unit {
            AirPressureUnit::Psi => value,
            AirPressureUnit::Kpa => kpa_to_psi(value),
            AirPressureUnit::Bar => bar_to_psi(value),
        })
    }

    fn from_base(value: f64, unit: AirPressureUnit) -> Result<f64, UnitError> {
        Ok(match unit {
            AirPressureUnit::Psi => value,
            AirPressureUnit::Kpa => psi_to_kpa(value),
            AirPressureUnit::Bar => psi_to_bar(value),
        })
    }

    // bar <-> kPa converts directly (kPa = bar * 100), not through PSI.
    fn convert(value: f64, from: AirPressureUnit, to: AirPressureUnit) -> Result<f64, UnitError> {
        match (from, to) {
            (AirPressureUnit::Bar, AirPressureUnit::Kpa) => Ok(bar_to_kpa(value)),
            (AirPressureUnit::Kpa, AirPressureUnit::Bar) => Ok(kpa_to_bar(value)),
            _ if from == to => Ok(value),
            _ => Self::from_base(Self::to_base(value, from)?, to),
        }
    }
}

impl Quantity for Altitude {
    type Unit = DistanceUnit;
    const NAME: &'static str = "altitude";

    fn to_base(value: f64, unit: DistanceUnit) -> Result<f64, UnitError> {
        match unit {
            DistanceUnit::Meter => Ok(value),
            DistanceUnit::Feet => Ok(feet_to_meters(value)),
            other => Err(UnitError::invalid_unit(Self::NAME, other)),
        }
    }

    fn from_base(value: f64, unit: DistanceUnit) -> Result<f64, UnitError> {
        match unit {
            DistanceUnit::Meter => Ok(value),
            DistanceUnit::Feet => Ok(meters_to_feet(value)),
            other => Err(UnitError::invalid_unit(Self::NAME, other)),
        }
    }
}

impl Quantity for Odometer {
    type Unit = DistanceUnit;
    const NAME: &'static str = "odometer";

    fn to_base(value: f64, unit: DistanceUnit) -> Result<f64, UnitError> {
        Ok(match unit {
            DistanceUnit::Meter => value,
            DistanceUnit::Feet => feet_to_meters(value),
            DistanceUnit::Miles => miles_to_meters(value),
            DistanceUnit::Kilometers => kilometers_to_meters(value),
        })
    }

    fn from_base(value: f64, unit: DistanceUnit) -> Result<f64, UnitError> {
        Ok(match unit {
            DistanceUnit::Meter => value,
            DistanceUnit::Feet => meters_to_feet(value),
            DistanceUnit::Miles => meters_to_miles(value),
            DistanceUnit::Kilometers => meters_to_kilometers(value),
        })
    }
}

impl Quantity for Speed {
    type Unit = DistanceUnit;
    const NAME: &'static str = "speed";

    fn to_base(value: f64, unit: DistanceUnit) -> Result<f64, UnitError> {
        Ok(match unit {
            DistanceUnit::Miles => value,
            DistanceUnit::Kilometers => kmh_to_mph(value),
            DistanceUnit::Meter => meters_per_hour_to_mph(value),
            DistanceUnit::Feet => feet_per_hour_to_mph(value),
        })
    }

    fn from_base(value: f64, unit: DistanceUnit) -> Result<f64, UnitError> {
        Ok(match unit {
            DistanceUnit::Miles => value,
            DistanceUnit::Kilometers => mph_to_kmh(value),
            DistanceUnit::Meter => mph_to_meters_per_hour(value),
            DistanceUnit::Feet => mph_to_feet_per_hour(value),
        })
    }

    fn label(unit: DistanceUnit) -> String {
        match unit {
            DistanceUnit::Miles => "mph".to_string(),
            DistanceUnit::Kilometers => "km/h".to_string(),
            other => format!("{}/h", other),
        }
    }
}
