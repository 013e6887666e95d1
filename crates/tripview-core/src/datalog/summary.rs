//! Whole-trip aggregates over assembled records

use chrono::{NaiveDateTime, TimeDelta};
use serde::Serialize;

use super::TripLogRecord;
use crate::gps::geodesic;
use crate::units::{DistanceUnit, OdometerValue, UnitError};

/// Aggregates of one trip log
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TripSummary {
    /// Number of records
    pub record_count: usize,
    /// Records without a GPS fix
    pub no_fix_count: usize,
    /// Time of the first record
    pub start: NaiveDateTime,
    /// Time of the last record
    pub end: NaiveDateTime,
    /// VIN of the first record
    pub vin: String,
    /// Haversine distance between the first and last fixes, in meters
    pub straight_line_meters: f64,
    /// Summed distance over consecutive fixes, in meters
    pub path_length_meters: f64,
    /// Battery energy at the first record, in Wh
    pub start_energy_wh: i64,
    /// Battery energy at the last record, in Wh
    pub end_energy_wh: i64,
    start_odometer: OdometerValue,
    end_odometer: OdometerValue,
}

impl TripSummary {
    /// Summarize `records`; `None` when there are none
    pub fn from_records(records: &[TripLogRecord]) -> Option<TripSummary> {
        let first = records.first()?;
        let last = records.last()?;

        let fixes = records
            .iter()
            .map(|r| &r.coordinates)
            .filter(|c| !c.is_zero());
        let straight_line_meters = match (fixes.clone().next(), fixes.clone().last()) {
            (Some(a), Some(b)) => geodesic::distance_meters(a, b),
            _ => 0.0,
        };

        Some(TripSummary {
            record_count: records.len(),
            no_fix_count: records.iter().filter(|r| !r.has_fix()).count(),
            start: first.date_time,
            end: last.date_time,
            vin: first.vin.clone(),
            straight_line_meters,
            path_length_meters: geodesic::path_length_meters(fixes),
            start_energy_wh: first.energy_wh(),
            end_energy_wh: last.energy_wh(),
            start_odometer: first.odometer.clone(),
            end_odometer: last.odometer.clone(),
        })
    }

    /// Time between the first and last record
    pub fn duration(&self) -> TimeDelta {
        self.end - self.start
    }

    /// Odometer distance covered, in `unit`
    pub fn odometer_distance(&self, unit: DistanceUnit) -> Result<f64, UnitError> {
        self.end_odometer.delta(&self.start_odometer, unit)
    }

    /// Battery energy used, in Wh (negative if the trip gained charge)
    ///
    /// Saturates at the `i64` bounds.
    pub fn energy_used_wh(&self) -> i64 {
        self.start_energy_wh.saturating_sub(self.end_energy_wh)
    }
}
