//! Decoded field values

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::decode::{
    ChargeMode, FrontWiperStatus, GearPosition, GidUnit, PlugState, ReadState, Scalar, UnixEpoch,
};
use crate::gps::{GpsCoordinate, GpsStatus};
use crate::units::{AltitudeValue, OdometerValue, PressureValue, SpeedValue, TemperatureValue};

/// A typed value produced by a [`Decoder`](super::Decoder)
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Text passed through unchanged
    Text(String),
    /// Numeric value
    Scalar(Scalar),
    /// One coordinate axis
    Coordinate(GpsCoordinate),
    /// Receiver status
    GpsStatus(GpsStatus),
    /// Timestamp
    Epoch(UnixEpoch),
    /// Charge units
    Gids(GidUnit),
    /// Temperature with source unit
    Temperature(TemperatureValue),
    /// Pressure with source unit
    Pressure(PressureValue),
    /// Elevation with source unit
    Altitude(AltitudeValue),
    /// Speed with source unit
    Speed(SpeedValue),
    /// Odometer with source unit
    Odometer(OdometerValue),
    /// Local date and time
    DateTime(NaiveDateTime),
    /// Local date
    Date(NaiveDate),
    /// Local time of day
    Time(NaiveTime),
    /// Shift lever position
    Gear(GearPosition),
    /// Charge connector state
    PlugState(PlugState),
    /// Charging level
    ChargeMode(ChargeMode),
    /// ECU read state
    ReadState(ReadState),
    /// Wiper switch
    WiperStatus(FrontWiperStatus),
}

impl FieldValue {
    /// Get as text, returning None if not text
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(v) => Some(v),
            _ => None,
        }
    }

    /// Get as a float, returning None if not a scalar
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FieldValue::Scalar(v) => Some(v.as_f64()),
            _ => None,
        }
    }

    /// Get as an integer, returning None unless an integer scalar
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            FieldValue::Scalar(v) => v.as_i64(),
            _ => None,
        }
    }
}

/// Extraction of a concrete type from a [`FieldValue`]
pub trait FromFieldValue: Sized {
    /// `None` when the value holds a different type
    fn from_field_value(value: FieldValue) -> Option<Self>;
}

macro_rules! from_field_value {
    ($($ty:ty => $variant:ident),+ $(,)?) => {
        $(
            impl FromFieldValue for $ty {
                fn from_field_value(value: FieldValue) -> Option<Self> {
                    match value {
                        FieldValue::$variant(v) => Some(v),
                        _ => None,
                    }
                }
            }
        )+
    };
}

from_field_value! {
    String => Text,
    Scalar => Scalar,
    GpsCoordinate => Coordinate,
    GpsStatus => GpsStatus,
    UnixEpoch => Epoch,
    GidUnit => Gids,
    TemperatureValue => Temperature,
    PressureValue => Pressure,
    AltitudeValue => Altitude,
    SpeedValue => Speed,
    OdometerValue => Odometer,
    NaiveDateTime => DateTime,
    NaiveDate => Date,
    NaiveTime => Time,
    GearPosition => Gear,
    PlugState => PlugState,
    ChargeMode => ChargeMode,
    ReadState => ReadState,
    FrontWiperStatus => WiperStatus,
}

impl FromFieldValue for f64 {
    fn from_field_value(value: FieldValue) -> Option<Self> {
        value.as_f64()
    }
}

impl FromFieldValue for i64 {
    fn from_field_value(value: FieldValue) -> Option<Self> {
        value.as_i64()
    }
}
