//! Trip history schema
//!
//! The per-trip summary export: one row per completed trip, distances in
//! miles and elevation in feet regardless of app settings.

use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;

use super::{ColumnTable, DecodedRow, Decoder, LogSchema, ParseError};
use crate::config::ImportConfig;
use crate::decode::ScalarConverter;
use crate::units::{AltitudeValue, DistanceUnit, OdometerValue, UnitError};

/// Logical fields of a trip history row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum HistoryField {
    Date,
    Time,
    Odometer,
    Distance,
    ElevationDelta,
    Energy,
    Gids,
    StartGids,
    EndGids,
    AmpHours,
    StateOfHealth,
    Hx,
    StartHVolt,
    EndHVolt,
    Drive,
    Regen,
    Charge,
    L1L2Count,
    QuickChargeCount,
}

/// One completed trip
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TripHistory {
    /// Blank on some exports
    pub date: Option<NaiveDate>,
    pub time: NaiveTime,
    /// `odo mi`
    pub odometer: OdometerValue,
    /// `dist mi`
    pub distance: OdometerValue,
    /// `elv ft`
    pub elevation_delta: AltitudeValue,
    pub energy: i64,
    pub gids: i64,
    pub start_gids: i64,
    pub end_gids: i64,
    pub amp_hours: f64,
    /// Passed through as text
    pub state_of_health: String,
    pub hx: f64,
    pub start_hvolt: f64,
    pub end_hvolt: f64,
    pub drive: i64,
    pub regen: i64,
    pub charge: i64,
    pub l1_l2_count: i64,
    pub quick_charge_count: i64,
}

impl TripHistory {
    /// Trip distance in `unit`
    pub fn distance_in(&self, unit: DistanceUnit) -> Result<f64, UnitError> {
        self.distance.convert_to(unit)
    }

    /// Gids consumed (start minus end)
    pub fn gids_used(&self) -> i64 {
        self.start_gids.saturating_sub(self.end_gids)
    }
}

/// Trip history column layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TripHistorySchema;

impl LogSchema for TripHistorySchema {
    type Field = HistoryField;
    type Record = TripHistory;

    const NAME: &'static str = "trip history";

    fn column_table(_config: &ImportConfig) -> ColumnTable<HistoryField> {
        use HistoryField as F;

        let float = Decoder::Scalar(ScalarConverter::Float);
        let int = Decoder::Scalar(ScalarConverter::Int);

        ColumnTable::new()
            .optional(F::Date, "Date", Decoder::Date)
            .mandatory(F::Time, "Time", Decoder::Time)
            .mandatory(F::Odometer, "odo mi", Decoder::Odometer(DistanceUnit::Miles))
            .mandatory(F::Distance, "dist mi", Decoder::Odometer(DistanceUnit::Miles))
            .mandatory(F::ElevationDelta, "elv ft", Decoder::Altitude(DistanceUnit::Feet))
            .mandatory(F::Energy, "Energy", int)
            .mandatory(F::Gids, "Gids", int)
            .mandatory(F::StartGids, "SGids", int)
            .mandatory(F::EndGids, "EGids", int)
            .mandatory(F::AmpHours, "AHr", float)
            .mandatory(F::StateOfHealth, "SOH", Decoder::Text)
            .mandatory(F::Hx, "Hx", float)
            .mandatory(F::StartHVolt, "SHVolt", float)
            .mandatory(F::EndHVolt, "EHVolt", float)
            .mandatory(F::Drive, "Drive", int)
            .mandatory(F::Regen, "Regen", int)
            .mandatory(F::Charge, "Charge", int)
            .mandatory(F::L1L2Count, "L1/L2", int)
            .mandatory(F::QuickChargeCount, "QC", int)
    }

    fn assemble(
        mut row: DecodedRow<HistoryField>,
        _config: &ImportConfig,
    ) -> Result<TripHistory, ParseError> {
        use HistoryField as F;

        Ok(TripHistory {
            date: row.take_opt(F::Date),
            time: row.take(F::Time)?,
            odometer: row.take(F::Odometer)?,
            distance: row.take(F::Distance)?,
            elevation_delta: row.take(F::ElevationDelta)?,
            energy: row.take(F::Energy)?,
            gids: row.take(F::Gids)?,
            start_gids: row.take(F::StartGids)?,
            end_gids: row.take(F::EndGids)?,
            amp_hours: row.take(F::AmpHours)?,
            state_of_health: row.take(F::StateOfHealth)?,
            hx: row.take(F::Hx)?,
            start_hvolt: row.take(F::StartHVolt)?,
            end_hvolt: row.take(F::EndHVolt)?,
            drive: row.take(F::Drive)?,
            regen: row.take(F::Regen)?,
            charge: row.take(F::Charge)?,
            l1_l2_count: row.take(F::L1L2Count)?,
            quick_charge_count: row.take(F::QuickChargeCount)?,
        })
    }
}
