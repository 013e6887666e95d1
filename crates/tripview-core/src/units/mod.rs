//! Unit-Bearing Values
//!
//! A log format records each physical quantity in one fixed unit (chosen by
//! the logging app's settings). The values here keep the raw text exactly as
//! it appeared in the log, together with that source unit, and convert on
//! demand:
//! - [`TemperatureValue`]: Fahrenheit / Celsius
//! - [`PressureValue`]: PSI / bar / kPa
//! - [`AltitudeValue`]: feet / meters
//! - [`OdometerValue`]: feet / meters / miles / kilometers
//! - [`SpeedValue`]: the same four units, per hour
//!
//! A blank, whitespace-only, or `none`/`na` raw value is a missing sensor
//! reading and converts to `0` in every unit.

mod error;
mod quantity;
mod value;

pub use error::UnitError;
pub use quantity::{Altitude, Odometer, Pressure, Quantity, Speed, Temperature};
pub use value::UnitValue;

pub(crate) use value::is_missing_reading;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Temperature reading with its source unit
pub type TemperatureValue = UnitValue<Temperature>;

/// Air pressure reading with its source unit
pub type PressureValue = UnitValue<Pressure>;

/// GPS elevation reading with its source unit
pub type AltitudeValue = UnitValue<Altitude>;

/// Odometer reading with its source unit
pub type OdometerValue = UnitValue<Odometer>;

/// Speed reading; the unit is the distance travelled per hour
pub type SpeedValue = UnitValue<Speed>;

/// Distance units (also used per-hour for speed)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistanceUnit {
    Feet,
    Meter,
    Miles,
    Kilometers,
}

/// Temperature units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureUnit {
    Fahrenheit,
    Celsius,
}

/// Air pressure units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AirPressureUnit {
    Bar,
    Psi,
    Kpa,
}

impl DistanceUnit {
    /// All distance units
    pub const ALL: [DistanceUnit; 4] = [
        DistanceUnit::Feet,
        DistanceUnit::Meter,
        DistanceUnit::Miles,
        DistanceUnit::Kilometers,
    ];

    /// Short label (ft, m, mi, km)
    pub fn abbreviation(&self) -> &'static str {
        match self {
            DistanceUnit::Feet => "ft",
            DistanceUnit::Meter => "m",
            DistanceUnit::Miles => "mi",
            DistanceUnit::Kilometers => "km",
        }
    }
}

impl TemperatureUnit {
    /// All temperature units
    pub const ALL: [TemperatureUnit; 2] = [TemperatureUnit::Fahrenheit, TemperatureUnit::Celsius];

    /// Short label (°F, °C)
    pub fn abbreviation(&self) -> &'static str {
        match self {
            TemperatureUnit::Fahrenheit => "°F",
            TemperatureUnit::Celsius => "°C",
        }
    }
}

impl AirPressureUnit {
    /// All pressure units
    pub const ALL: [AirPressureUnit; 3] =
        [AirPressureUnit::Bar, AirPressureUnit::Psi, AirPressureUnit::Kpa];

    /// Short label (bar, psi, kPa)
    pub fn abbreviation(&self) -> &'static str {
        match self {
            AirPressureUnit::Bar => "bar",
            AirPressureUnit::Psi => "psi",
            AirPressureUnit::Kpa => "kPa",
        }
    }
}

impl fmt::Display for DistanceUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbreviation())
    }
}

impl fmt::Display for TemperatureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbreviation())
    }
}

impl fmt::Display for AirPressureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbreviation())
    }
}

impl FromStr for DistanceUnit {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "feet" | "foot" | "ft" => Ok(DistanceUnit::Feet),
            "meter" | "meters" | "metre" | "metres" | "m" => Ok(DistanceUnit::Meter),
            "miles" | "mile" | "mi" => Ok(DistanceUnit::Miles),
            "kilometers" | "kilometer" | "kilometres" | "km" => Ok(DistanceUnit::Kilometers),
            _ => Err(UnitError::invalid_unit("distance", s)),
        }
    }
}

impl FromStr for TemperatureUnit {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fahrenheit" | "f" | "°f" => Ok(TemperatureUnit::Fahrenheit),
            "celsius" | "c" | "°c" => Ok(TemperatureUnit::Celsius),
            _ => Err(UnitError::invalid_unit("temperature", s)),
        }
    }
}

impl FromStr for AirPressureUnit {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "bar" => Ok(AirPressureUnit::Bar),
            "psi" => Ok(AirPressureUnit::Psi),
            "kpa" => Ok(AirPressureUnit::Kpa),
            _ => Err(UnitError::invalid_unit("pressure", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_names_parse() {
        assert_eq!("ft".parse::<DistanceUnit>().unwrap(), DistanceUnit::Feet);
        assert_eq!("Kilometers".parse::<DistanceUnit>().unwrap(), DistanceUnit::Kilometers);
        assert_eq!(" C ".parse::<TemperatureUnit>().unwrap(), TemperatureUnit::Celsius);
        assert_eq!("kPa".parse::<AirPressureUnit>().unwrap(), AirPressureUnit::Kpa);
    }

    #[test]
    fn test_unknown_unit_is_invalid() {
        let err = "furlong".parse::<DistanceUnit>().unwrap_err();
        assert!(matches!(err, UnitError::InvalidUnit { quantity: "distance", .. }));
    }
}
