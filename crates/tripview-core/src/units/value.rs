//! Raw text + source unit, converted on demand

use serde::Serialize;
use std::fmt;
use std::marker::PhantomData;

use super::quantity::{Altitude, Odometer, Pressure, Quantity, Speed, Temperature};
use super::{AirPressureUnit, DistanceUnit, TemperatureUnit, UnitError};

/// Markers the logging app writes when a sensor did not report
const MISSING_MARKERS: [&str; 2] = ["none", "na"];

/// Whether a raw field is a missing sensor reading (blank, whitespace, none, na)
pub(crate) fn is_missing_reading(text: &str) -> bool {
    let trimmed = text.trim();
    trimmed.is_empty()
        || MISSING_MARKERS
            .iter()
            .any(|marker| trimmed.eq_ignore_ascii_case(marker))
}

/// A raw log value tagged with the unit it was recorded in
///
/// The raw text is stored verbatim. Every conversion re-parses it, so a value
/// never changes after construction.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(bound(serialize = "Q::Unit: Serialize"))]
pub struct UnitValue<Q: Quantity> {
    raw: String,
    unit: Q::Unit,
    #[serde(skip)]
    quantity: PhantomData<Q>,
}

impl<Q: Quantity> UnitValue<Q> {
    /// Create a value from raw log text recorded in `unit`
    pub fn new(unit: Q::Unit, raw: impl Into<String>) -> Self {
        Self {
            raw: raw.into(),
            unit,
            quantity: PhantomData,
        }
    }

    /// Create a value for an absent reading
    pub fn missing(unit: Q::Unit) -> Self {
        Self::new(unit, String::new())
    }

    /// The raw text exactly as read from the log
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The unit the value was recorded in
    pub fn source_unit(&self) -> Q::Unit {
        self.unit
    }

    /// Whether the raw text is a missing reading
    pub fn is_missing(&self) -> bool {
        is_missing_reading(&self.raw)
    }

    /// The value in its source unit (`0` when missing)
    pub fn value(&self) -> Result<f64, UnitError> {
        self.convert_to(self.unit)
    }

    /// Convert to `unit`
    ///
    /// A missing reading is `0` in every unit. Present text that is not a
    /// number fails with [`UnitError::MalformedValue`]; a unit the quantity
    /// does not support fails with [`UnitError::InvalidUnit`].
    pub fn convert_to(&self, unit: Q::Unit) -> Result<f64, UnitError> {
        if self.is_missing() {
            return Ok(0.0);
        }
        let value = self.parse()?;
        Q::convert(value, self.unit, unit)
    }

    fn parse(&self) -> Result<f64, UnitError> {
        self.raw
            .trim()
            .parse::<f64>()
            .map_err(|_| UnitError::MalformedValue {
                quantity: Q::NAME,
                raw: self.raw.clone(),
            })
    }
}

impl<Q: Quantity> fmt::Display for UnitValue<Q> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_missing() {
            return f.write_str(&self.raw);
        }
        match self.parse() {
            Ok(value) => write!(f, "{:.2} {}", value, Q::label(self.unit)),
            Err(_) => f.write_str(&self.raw),
        }
    }
}

impl UnitValue<Temperature> {
    /// Temperature in Celsius
    pub fn to_celsius(&self) -> Result<f64, UnitError> {
        self.convert_to(TemperatureUnit::Celsius)
    }

    /// Temperature in Fahrenheit
    pub fn to_fahrenheit(&self) -> Result<f64, UnitError> {
        self.convert_to(TemperatureUnit::Fahrenheit)
    }
}

impl UnitValue<Pressure> {
    /// Pressure in PSI
    pub fn to_psi(&self) -> Result<f64, UnitError> {
        self.convert_to(AirPressureUnit::Psi)
    }

    /// Pressure in bar
    pub fn to_bar(&self) -> Result<f64, UnitError> {
        self.convert_to(AirPressureUnit::Bar)
    }

    /// Pressure in kPa
    pub fn to_kpa(&self) -> Result<f64, UnitError> {
        self.convert_to(AirPressureUnit::Kpa)
    }
}

impl UnitValue<Altitude> {
    /// Elevation in meters
    pub fn to_meters(&self) -> Result<f64, UnitError> {
        self.convert_to(DistanceUnit::Meter)
    }

    /// Elevation in feet
    pub fn to_feet(&self) -> Result<f64, UnitError> {
        self.convert_to(DistanceUnit::Feet)
    }
}

impl UnitValue<Speed> {
    /// Speed in miles per hour
    pub fn to_miles_per_hour(&self) -> Result<f64, UnitError> {
        self.convert_to(DistanceUnit::Miles)
    }

    /// Speed in kilometers per hour
    pub fn to_kilometers_per_hour(&self) -> Result<f64, UnitError> {
        self.convert_to(DistanceUnit::Kilometers)
    }
}

impl UnitValue<Odometer> {
    /// Odometer reading in meters
    pub fn to_meters(&self) -> Result<f64, UnitError> {
        self.convert_to(DistanceUnit::Meter)
    }

    /// Odometer reading in miles
    pub fn to_miles(&self) -> Result<f64, UnitError> {
        self.convert_to(DistanceUnit::Miles)
    }

    /// Odometer reading in kilometers
    pub fn to_kilometers(&self) -> Result<f64, UnitError> {
        self.convert_to(DistanceUnit::Kilometers)
    }

    /// Distance travelled since an `earlier` reading, in `unit`
    ///
    /// The two readings may have been recorded in different units.
    pub fn delta(&self, earlier: &UnitValue<Odometer>, unit: DistanceUnit) -> Result<f64, UnitError> {
        Ok(self.convert_to(unit)? - earlier.convert_to(unit)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_markers() {
        assert!(is_missing_reading(""));
        assert!(is_missing_reading("   "));
        assert!(is_missing_reading("none"));
        assert!(is_missing_reading("NA"));
        assert!(!is_missing_reading("0"));
        assert!(!is_missing_reading("nan?"));
    }

    #[test]
    fn test_raw_is_kept_verbatim() {
        let value = UnitValue::<Temperature>::new(TemperatureUnit::Fahrenheit, " 71.5 ");
        assert_eq!(value.raw(), " 71.5 ");
        assert!((value.value().unwrap() - 71.5).abs() < 1e-9);
    }

    #[test]
    fn test_malformed_value() {
        let value = UnitValue::<Pressure>::new(AirPressureUnit::Psi, "35psi");
        assert_eq!(
            value.to_kpa(),
            Err(UnitError::MalformedValue {
                quantity: "pressure",
                raw: "35psi".to_string()
            })
        );
    }

    #[test]
    fn test_display() {
        let speed = UnitValue::<Speed>::new(DistanceUnit::Miles, "42.126");
        assert_eq!(speed.to_string(), "42.13 mph");

        let temp = UnitValue::<Temperature>::new(TemperatureUnit::Celsius, "none");
        assert_eq!(temp.to_string(), "none");
    }

    #[test]
    fn test_odometer_delta_mixed_units() {
        let start = UnitValue::<Odometer>::new(DistanceUnit::Miles, "100");
        let end = UnitValue::<Odometer>::new(DistanceUnit::Kilometers, "170.9344");
        let km = end.delta(&start, DistanceUnit::Kilometers).unwrap();
        assert!((km - 10.0).abs() < 1e-6);
    }
}
