//! GPS Fields
//!
//! Decoders for the position columns of a trip log and the geodesic math
//! consumers run over decoded fixes.
//!
//! - [`GpsCoordinate`] / [`GpsCoordinatePair`]: `Lat`/`Long` in degrees and
//!   decimal minutes
//! - [`GpsStatus`]: the hex-packed `GPS Status` column
//! - [`geodesic`]: Haversine distance and forward-azimuth heading

mod coordinate;
pub mod geodesic;
mod status;

pub use coordinate::{GpsCoordinate, GpsCoordinatePair};
pub use status::{GpsStatus, GpsStatusFlags};
