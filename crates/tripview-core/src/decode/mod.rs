//! Field Decoders
//!
//! Turns single raw log fields into typed values:
//! - [`UnixEpoch`]: fractional seconds since the epoch
//! - [`GidUnit`]: battery charge units with a Wh multiplier
//! - [`ScalarConverter`]: fixed-point, coarse-unit and offset columns
//! - [`CodedEnum`]: gear, plug, charge-mode, read-state and wiper codes

mod charge;
mod enums;
mod epoch;
mod error;
mod scalar;

pub use charge::{GidUnit, DEFAULT_WH_PER_GID};
pub use enums::{
    decode_enum, decode_hex_enum, ChargeMode, CodedEnum, FrontWiperStatus, GearPosition,
    PlugState, ReadState,
};
pub use epoch::UnixEpoch;
pub use error::DecodeError;
pub use scalar::{Scalar, ScalarConverter, SENSOR_TEMPERATURE_OFFSET};
