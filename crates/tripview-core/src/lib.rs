//! # TripView Core Library
//!
//! Decoding core for LeafSpy vehicle telemetry logs.

#![warn(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

//!
//! This library provides:
//! - Unit-bearing values (temperature, pressure, elevation, odometer, speed)
//! - GPS coordinate and status decoding, Haversine distance and heading
//! - Scalar converters and coded enumerations for telemetry columns
//! - Column mapping tables and record assembly for trip logs and trip history
//! - Trip summaries over assembled records
//!
//! ## Example
//!
//! ```rust,ignore
//! use tripview_core::prelude::*;
//!
//! let config = ImportConfig::default();
//! let records = TripLogReader::open("Log_ABCD1234_250301_pixel7.csv", &config)?.read_valid()?;
//!
//! if let Some(summary) = TripSummary::from_records(&records) {
//!     println!("{} over {:.1} km", summary.vin, summary.path_length_meters / 1000.0);
//! }
//! ```

pub mod config;
pub mod datalog;
pub mod decode;
pub mod gps;
pub mod unit_conversion;
pub mod units;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::config::ImportConfig;
    pub use crate::datalog::{
        LogReader, LogSchema, ParseError, RawRow, RecordAssembler, TripHistory,
        TripHistoryReader, TripHistorySchema, TripLogReader, TripLogRecord, TripLogSchema,
        TripSummary,
    };
    pub use crate::decode::{GidUnit, UnixEpoch};
    pub use crate::gps::{GpsCoordinate, GpsCoordinatePair, GpsStatus, GpsStatusFlags};
    pub use crate::units::{
        AirPressureUnit, AltitudeValue, DistanceUnit, OdometerValue, PressureValue, SpeedValue,
        TemperatureUnit, TemperatureValue, UnitError,
    };
}

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
