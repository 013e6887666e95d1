//! Stateless scalar converters
//!
//! Fixed-point and coarse-unit telemetry columns. Blank text is a missing
//! analog reading and decodes to `0`; present text that does not parse is an
//! error.

use serde::Serialize;
use std::fmt;

use super::DecodeError;
use crate::units::is_missing_reading;

/// Offset added to raw motor and inverter temperatures
pub const SENSOR_TEMPERATURE_OFFSET: f64 = 40.0;

/// A decoded scalar
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Scalar {
    /// Floating point value
    Float(f64),
    /// Integer value
    Int(i64),
}

impl Scalar {
    /// Value as `f64`
    pub fn as_f64(&self) -> f64 {
        match self {
            Scalar::Float(v) => *v,
            Scalar::Int(v) => *v as f64,
        }
    }

    /// Value as `i64`, `None` for floats
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Scalar::Int(v) => Some(*v),
            Scalar::Float(_) => None,
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Float(v) => write!(f, "{}", v),
            Scalar::Int(v) => write!(f, "{}", v),
        }
    }
}

/// Per-column scalar transform
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScalarConverter {
    /// Plain float
    Float,
    /// Plain float; `none`/`na` also read as `0`
    FloatOrNone,
    /// Float divided by a fixed divisor
    Divide(f64),
    /// Float plus a fixed offset
    Offset(f64),
    /// Plain integer
    Int,
    /// Integer multiplied by a fixed factor
    Multiply(i64),
}

impl ScalarConverter {
    /// Ten-thousandths (SOC, AHr)
    pub const PER_10K: ScalarConverter = ScalarConverter::Divide(10_000.0);
    /// Thousandths (millivolts to volts)
    pub const PER_1K: ScalarConverter = ScalarConverter::Divide(1_000.0);
    /// 50 W steps
    pub const X50: ScalarConverter = ScalarConverter::Multiply(50);
    /// 100 W steps
    pub const X100: ScalarConverter = ScalarConverter::Multiply(100);
    /// 250 W steps
    pub const X250: ScalarConverter = ScalarConverter::Multiply(250);
    /// Motor and inverter temperature sensors
    pub const SENSOR_TEMPERATURE: ScalarConverter =
        ScalarConverter::Offset(SENSOR_TEMPERATURE_OFFSET);

    /// Convert raw text
    pub fn apply(&self, raw: &str) -> Result<Scalar, DecodeError> {
        let text = raw.trim();
        let blank = match self {
            ScalarConverter::FloatOrNone => is_missing_reading(text),
            _ => text.is_empty(),
        };

        match self {
            ScalarConverter::Int | ScalarConverter::Multiply(_) if blank => Ok(Scalar::Int(0)),
            _ if blank => Ok(Scalar::Float(0.0)),
            ScalarConverter::Float | ScalarConverter::FloatOrNone => {
                parse_float(text, raw).map(Scalar::Float)
            }
            ScalarConverter::Divide(divisor) => parse_float(text, raw).map(|v| Scalar::Float(v / divisor)),
            ScalarConverter::Offset(offset) => parse_float(text, raw).map(|v| Scalar::Float(v + offset)),
            ScalarConverter::Int => parse_int(text, raw).map(Scalar::Int),
            ScalarConverter::Multiply(factor) => {
                let value = parse_int(text, raw)?;
                value
                    .checked_mul(*factor)
                    .map(Scalar::Int)
                    .ok_or_else(|| DecodeError::malformed("integer", raw))
            }
        }
    }
}

fn parse_float(text: &str, raw: &str) -> Result<f64, DecodeError> {
    text.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| DecodeError::malformed("number", raw))
}

fn parse_int(text: &str, raw: &str) -> Result<i64, DecodeError> {
    text.parse::<i64>()
        .map_err(|_| DecodeError::malformed("integer", raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_point() {
        let soc = ScalarConverter::PER_10K.apply("853412").unwrap().as_f64();
        assert!((soc - 85.3412).abs() < 1e-9);
        let volts = ScalarConverter::PER_1K.apply("3987").unwrap().as_f64();
        assert!((volts - 3.987).abs() < 1e-9);
    }

    #[test]
    fn test_multiply() {
        assert_eq!(ScalarConverter::X250.apply("3"), Ok(Scalar::Int(750)));
        assert_eq!(ScalarConverter::X50.apply(""), Ok(Scalar::Int(0)));
        assert!(ScalarConverter::X100.apply("1.5").is_err());
    }

    #[test]
    fn test_sensor_offset() {
        assert_eq!(
            ScalarConverter::SENSOR_TEMPERATURE.apply("-12"),
            Ok(Scalar::Float(28.0))
        );
        assert_eq!(
            ScalarConverter::SENSOR_TEMPERATURE.apply(""),
            Ok(Scalar::Float(0.0))
        );
    }

    #[test]
    fn test_none_markers() {
        assert_eq!(ScalarConverter::FloatOrNone.apply("none"), Ok(Scalar::Float(0.0)));
        assert_eq!(ScalarConverter::FloatOrNone.apply("na"), Ok(Scalar::Float(0.0)));
        assert_eq!(ScalarConverter::FloatOrNone.apply("12.6"), Ok(Scalar::Float(12.6)));
        assert!(ScalarConverter::Float.apply("none").is_err());
    }
}
