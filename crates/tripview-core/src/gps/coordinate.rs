//! Degree-decimal-minute coordinates

use serde::Serialize;
use std::fmt;

use super::geodesic;

/// One coordinate axis decoded from `"D MM.MMMMM"` text
///
/// Decoding never fails: text without a degree/minute separator, or with
/// either half unparseable, decodes to `0` (an unlocked receiver writes
/// such rows).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GpsCoordinate {
    raw: String,
    degrees: f64,
}

impl GpsCoordinate {
    /// Decode a coordinate from raw log text
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let degrees = decode_ddm(&raw).unwrap_or(0.0);
        Self { raw, degrees }
    }

    /// Coordinate at exactly `0` degrees
    pub fn zero() -> Self {
        Self::new(String::new())
    }

    /// The raw text as read from the log
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Signed decimal degrees
    pub fn to_decimal_degrees(&self) -> f64 {
        self.degrees
    }

    /// Signed radians
    pub fn to_radians(&self) -> f64 {
        self.degrees.to_radians()
    }
}

impl Default for GpsCoordinate {
    fn default() -> Self {
        Self::zero()
    }
}

fn decode_ddm(raw: &str) -> Option<f64> {
    let (degree_text, minute_text) = raw.trim().split_once(' ')?;
    let degree_text = degree_text.trim();
    let degrees: i32 = degree_text.parse().ok()?;
    let minutes: f64 = minute_text.trim().parse().ok()?;
    let magnitude = f64::from(degrees.unsigned_abs()) + minutes / 60.0;
    // "-0 30.0" is half a degree south/west; the sign lives in the text.
    if degree_text.starts_with('-') {
        Some(-magnitude)
    } else {
        Some(magnitude)
    }
}

/// A latitude/longitude fix
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct GpsCoordinatePair {
    /// North-positive latitude
    pub latitude: GpsCoordinate,
    /// East-positive longitude
    pub longitude: GpsCoordinate,
}

impl GpsCoordinatePair {
    /// Pair a latitude with a longitude
    pub fn new(latitude: GpsCoordinate, longitude: GpsCoordinate) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Decode both axes from raw log text
    pub fn from_raw(latitude: &str, longitude: &str) -> Self {
        Self::new(GpsCoordinate::new(latitude), GpsCoordinate::new(longitude))
    }

    /// Latitude in decimal degrees
    pub fn latitude_degrees(&self) -> f64 {
        self.latitude.to_decimal_degrees()
    }

    /// Longitude in decimal degrees
    pub fn longitude_degrees(&self) -> f64 {
        self.longitude.to_decimal_degrees()
    }

    /// `true` for a sample recorded without a fix (both axes exactly `0`)
    pub fn is_zero(&self) -> bool {
        self.latitude_degrees() == 0.0 && self.longitude_degrees() == 0.0
    }

    /// Great-circle distance to `other` in meters
    pub fn distance_meters(&self, other: &GpsCoordinatePair) -> f64 {
        geodesic::distance_meters(self, other)
    }

    /// Initial bearing towards `other`, degrees clockwise from north
    pub fn heading_degrees(&self, other: &GpsCoordinatePair) -> f64 {
        geodesic::heading_degrees(self, other)
    }
}

impl fmt::Display for GpsCoordinatePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.6}, {:.6}",
            self.latitude_degrees(),
            self.longitude_degrees()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ddm_decoding() {
        assert!((GpsCoordinate::new("34 29.07306").to_decimal_degrees() - 34.484551).abs() < 1e-6);
        assert!(
            (GpsCoordinate::new("-117 23.9699").to_decimal_degrees() + 117.39949833).abs() < 1e-6
        );
        assert!((GpsCoordinate::new("-33 51.684").to_decimal_degrees() + 33.8614).abs() < 1e-6);
        assert!((GpsCoordinate::new("151 12.123").to_decimal_degrees() - 151.20205).abs() < 1e-6);
    }

    #[test]
    fn test_malformed_is_zero() {
        assert_eq!(GpsCoordinate::new("").to_decimal_degrees(), 0.0);
        assert_eq!(GpsCoordinate::new("0").to_decimal_degrees(), 0.0);
        assert_eq!(GpsCoordinate::new("34.5").to_decimal_degrees(), 0.0);
        assert_eq!(GpsCoordinate::new("N34 29.0").to_decimal_degrees(), 0.0);
        assert_eq!(GpsCoordinate::new("34 abc").to_decimal_degrees(), 0.0);
    }

    #[test]
    fn test_negative_zero_degrees() {
        assert!((GpsCoordinate::new("-0 30").to_decimal_degrees() + 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_pair_display_and_zero() {
        let pair = GpsCoordinatePair::from_raw("34 29.07306", "-117 23.9699");
        assert!(!pair.is_zero());
        assert_eq!(pair.to_string(), "34.484551, -117.399498");
        assert!(GpsCoordinatePair::from_raw("", "0").is_zero());
    }
}
