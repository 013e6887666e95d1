//! Trip log schema
//!
//! One row per sample of a LeafSpy trip log: position, battery pack,
//! cell-pair voltages, tires, climate and drivetrain state.

use chrono::NaiveDateTime;
use serde::{Serialize, Serializer};

use super::{ColumnTable, DecodedRow, Decoder, LogSchema, ParseError};
use crate::config::ImportConfig;
use crate::decode::{
    ChargeMode, FrontWiperStatus, GearPosition, GidUnit, PlugState, ReadState, ScalarConverter,
    UnixEpoch,
};
use crate::gps::{GpsCoordinatePair, GpsStatus};
use crate::units::{
    AltitudeValue, OdometerValue, PressureValue, SpeedValue, TemperatureUnit, TemperatureValue,
};

/// Number of cell-pair voltage columns (`CP1`..`CP96`)
pub const CELL_PAIR_COUNT: usize = 96;

/// Logical fields of a trip log row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum TripField {
    DateTime,
    Latitude,
    Longitude,
    Elevation,
    Speed,
    Gids,
    StateOfCharge,
    AmpHours,
    PackVolts,
    PackAmps,
    MaxCellPairVolts,
    MinCellPairVolts,
    AvgCellPairVolts,
    CellPairMilliVoltDiff,
    JudgmentValue,
    PackT1F,
    PackT1C,
    PackT2F,
    PackT2C,
    PackT3F,
    PackT3C,
    PackT4F,
    PackT4C,
    /// 1-based cell pair index
    CellPair(u8),
    Bat12vAmps,
    Bat12vVolts,
    Vin,
    Hx,
    Odometer,
    QuickChargeCount,
    L1L2Count,
    TirePressureFrontLeft,
    TirePressureFrontRight,
    TirePressureRearRight,
    TirePressureRearLeft,
    Ambient,
    StateOfHealth,
    RegenWh,
    PhoneBatteryLevel,
    EpochTime,
    GpsStatus,
    MotorPower,
    AuxPower,
    AcPower,
    AcCompressorPressure,
    EstimatedAcPower,
    EstimatedHeaterPower,
    PlugState,
    ChargeMode,
    ObcOutPower,
    Gear,
    HVolt1,
    HVolt2,
    PowerSwitch,
    Bms,
    Obc,
    Debug,
    MotorTemp,
    Inverter2Temp,
    Inverter4Temp,
    Speed1,
    Speed2,
    WiperStatus,
    TorqueNm,
    Rpm,
}

/// Cell-pair voltages in volts, `CP1` at index 0
#[derive(Debug, Clone, PartialEq)]
pub struct CellPairs([f64; CELL_PAIR_COUNT]);

impl CellPairs {
    /// Voltages in column order
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Voltage of cell pair `number` (1-based, as in the column names)
    pub fn get(&self, number: usize) -> Option<f64> {
        number.checked_sub(1).and_then(|i| self.0.get(i)).copied()
    }

    /// Lowest voltage
    pub fn min(&self) -> f64 {
        self.0.iter().copied().fold(f64::INFINITY, f64::min)
    }

    /// Highest voltage
    pub fn max(&self) -> f64 {
        self.0.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }

    /// Highest minus lowest voltage
    pub fn spread(&self) -> f64 {
        self.max() - self.min()
    }
}

impl Serialize for CellPairs {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.0.iter())
    }
}

/// One assembled trip log sample
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TripLogRecord {
    /// Phone-local sample time (`Date/Time`)
    pub date_time: NaiveDateTime,
    /// Phone GPS fix (`Lat`, `Long`)
    pub coordinates: GpsCoordinatePair,
    /// GPS elevation (`Elv`)
    pub elevation: AltitudeValue,
    /// GPS speed (`Speed`)
    pub speed: SpeedValue,
    pub gids: GidUnit,
    /// State of charge in percent
    pub state_of_charge_percent: f64,
    pub amp_hours: f64,
    pub pack_volts: f64,
    pub pack_amps: f64,
    pub max_cell_pair_volts: f64,
    pub min_cell_pair_volts: f64,
    pub avg_cell_pair_volts: f64,
    pub cell_pair_millivolt_diff: f64,
    pub judgment_value: i64,
    /// Center rear of the pack
    pub pack_t1_f: TemperatureValue,
    pub pack_t1_c: TemperatureValue,
    /// Front right of the pack
    pub pack_t2_f: TemperatureValue,
    pub pack_t2_c: TemperatureValue,
    /// Left center of the pack; not present on every model year
    pub pack_t3_f: Option<TemperatureValue>,
    pub pack_t3_c: Option<TemperatureValue>,
    /// Right center of the pack
    pub pack_t4_f: TemperatureValue,
    pub pack_t4_c: TemperatureValue,
    pub cell_pairs: CellPairs,
    pub bat_12v_amps: f64,
    pub bat_12v_volts: f64,
    pub vin: String,
    pub hx: f64,
    /// `Odo(km)`
    pub odometer: OdometerValue,
    pub quick_charge_count: i64,
    pub l1_l2_count: i64,
    pub tire_pressure_front_left: PressureValue,
    pub tire_pressure_front_right: PressureValue,
    pub tire_pressure_rear_right: PressureValue,
    pub tire_pressure_rear_left: PressureValue,
    pub ambient: TemperatureValue,
    pub state_of_health: f64,
    pub regen_wh: i64,
    /// Phone battery level in percent (`BLevel`)
    pub phone_battery_percent: i64,
    pub epoch_time: UnixEpoch,
    pub gps_status: GpsStatus,
    pub motor_power_w: Option<i64>,
    pub aux_power_w: Option<i64>,
    pub ac_power_w: Option<i64>,
    pub ac_compressor_pressure: Option<String>,
    pub estimated_ac_power_w: Option<i64>,
    pub estimated_heater_power_w: Option<i64>,
    pub plug_state: Option<PlugState>,
    pub charge_mode: Option<ChargeMode>,
    pub obc_out_power: Option<String>,
    pub gear: Option<GearPosition>,
    pub hvolt1: Option<f64>,
    pub hvolt2: Option<f64>,
    pub power_switch: Option<ReadState>,
    pub bms: Option<ReadState>,
    pub obc: Option<ReadState>,
    pub debug: Option<String>,
    /// Motor temperature with the sensor offset applied
    pub motor_temp: Option<f64>,
    pub inverter_2_temp: Option<f64>,
    pub inverter_4_temp: Option<f64>,
    pub speed1: Option<String>,
    pub speed2: Option<String>,
    pub wiper_status: Option<FrontWiperStatus>,
    pub torque_nm: Option<String>,
    pub rpm: Option<String>,
}

impl TripLogRecord {
    /// Whether the sample has a GPS fix
    pub fn has_fix(&self) -> bool {
        !self.coordinates.is_zero()
    }

    /// Remaining battery energy in watt-hours
    pub fn energy_wh(&self) -> i64 {
        self.gids.energy_wh()
    }
}

/// Trip log column layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TripLogSchema;

impl LogSchema for TripLogSchema {
    type Field = TripField;
    type Record = TripLogRecord;

    const NAME: &'static str = "trip log";

    fn column_table(config: &ImportConfig) -> ColumnTable<TripField> {
        use Decoder as D;
        use TripField as F;

        let fahrenheit = D::Temperature(TemperatureUnit::Fahrenheit);
        let celsius = D::Temperature(TemperatureUnit::Celsius);
        let pressure = D::Pressure(config.tire_pressure_unit);
        let float = D::Scalar(ScalarConverter::Float);
        let int = D::Scalar(ScalarConverter::Int);
        let millivolts = D::Scalar(ScalarConverter::PER_1K);

        let mut table = ColumnTable::new()
            .mandatory(F::DateTime, "Date/Time", D::DateTime)
            .mandatory(F::Latitude, "Lat", D::Coordinate)
            .mandatory(F::Longitude, "Long", D::Coordinate)
            .mandatory(F::Elevation, "Elv", D::Altitude(config.elevation_unit))
            .mandatory(F::Speed, "Speed", D::Speed(config.speed_unit))
            .mandatory(F::Gids, "Gids", D::Gids(config.gid_wh_multiplier))
            .mandatory(F::StateOfCharge, "SOC", D::Scalar(ScalarConverter::PER_10K))
            .mandatory(F::AmpHours, "AHr", D::Scalar(ScalarConverter::PER_10K))
            .mandatory(F::PackVolts, "Pack Volts", float)
            .mandatory(F::PackAmps, "Pack Amps", float)
            .mandatory(F::MaxCellPairVolts, "Max CP mV", millivolts)
            .mandatory(F::MinCellPairVolts, "Min CP mV", millivolts)
            .mandatory(F::AvgCellPairVolts, "Avg CP mV", millivolts)
            .mandatory(F::CellPairMilliVoltDiff, "CP mV Diff", float)
            .mandatory(F::JudgmentValue, "Judgment Value", int)
            .mandatory(F::PackT1F, "Pack T1 F", fahrenheit)
            .mandatory(F::PackT1C, "Pack T1 C", celsius)
            .mandatory(F::PackT2F, "Pack T2 F", fahrenheit)
            .mandatory(F::PackT2C, "Pack T2 C", celsius)
            .optional(F::PackT3F, "Pack T3 F", fahrenheit)
            .optional(F::PackT3C, "Pack T3 C", celsius)
            .mandatory(F::PackT4F, "Pack T4 F", fahrenheit)
            .mandatory(F::PackT4C, "Pack T4 C", celsius);

        for number in 1..=CELL_PAIR_COUNT as u8 {
            table = table.mandatory(F::CellPair(number), format!("CP{}", number), millivolts);
        }

        table
            .mandatory(F::Bat12vAmps, "12v Bat Amps", D::Scalar(ScalarConverter::FloatOrNone))
            .mandatory(F::Vin, "VIN", D::Identifier)
            .mandatory(F::Hx, "Hx", float)
            .mandatory(F::Bat12vVolts, "12v Bat Volts", D::Scalar(ScalarConverter::FloatOrNone))
            .mandatory(F::Odometer, "Odo(km)", D::Odometer(config.odometer_unit))
            .mandatory(F::QuickChargeCount, "QC", int)
            .mandatory(F::L1L2Count, "L1/L2", int)
            .mandatory(F::TirePressureFrontLeft, "TP-FL", pressure)
            .mandatory(F::TirePressureFrontRight, "TP-FR", pressure)
            .mandatory(F::TirePressureRearRight, "TP-RR", pressure)
            .mandatory(F::TirePressureRearLeft, "TP-RL", pressure)
            .mandatory(F::Ambient, "Ambient", D::Temperature(config.ambient_temperature_unit))
            .mandatory(F::StateOfHealth, "SOH", float)
            .mandatory(F::RegenWh, "RegenWh", int)
            .mandatory(F::PhoneBatteryLevel, "BLevel", int)
            .mandatory(F::EpochTime, "epoch time", D::Epoch)
            .mandatory(F::GpsStatus, "GPS Status", D::GpsStatus)
            .optional(F::MotorPower, "Motor Pwr(w)", int)
            .optional(F::AuxPower, "Aux Pwr(100w)", D::Scalar(ScalarConverter::X100))
            .optional(F::AcPower, "A/C Pwr(250w)", D::Scalar(ScalarConverter::X250))
            .optional(F::AcCompressorPressure, "A/C Comp(0.1MPa)", D::Text)
            .optional(F::EstimatedAcPower, "Est Pwr A/C(50w)", D::Scalar(ScalarConverter::X50))
            .optional(F::EstimatedHeaterPower, "Est Pwr Htr(250w)", D::Scalar(ScalarConverter::X250))
            .optional(F::PlugState, "Plug State", D::PlugState)
            .optional(F::ChargeMode, "Charge Mode", D::ChargeMode)
            .optional(F::ObcOutPower, "OBC Out Pwr", D::Text)
            .optional(F::Gear, "Gear", D::Gear)
            .optional(F::HVolt1, "HVolt1", float)
            .optional(F::HVolt2, "HVolt2", float)
            .optional(F::PowerSwitch, "Power SW", D::ReadState)
            .optional(F::Bms, "BMS", D::ReadState)
            .optional(F::Obc, "OBC", D::ReadState)
            .optional(F::Debug, "Debug", D::Text)
            .optional(F::MotorTemp, "Motor Temp", D::Scalar(ScalarConverter::SENSOR_TEMPERATURE))
            .optional(F::Inverter2Temp, "Inverter 2 Temp", D::Scalar(ScalarConverter::SENSOR_TEMPERATURE))
            .optional(F::Inverter4Temp, "Inverter 4 Temp", D::Scalar(ScalarConverter::SENSOR_TEMPERATURE))
            // Both speed headers start with a space in every export.
            .optional(F::Speed1, " Speed1", D::Text)
            .optional(F::Speed2, " Speed2", D::Text)
            .optional(F::WiperStatus, "Wiper Status", D::WiperStatus)
            .optional(F::TorqueNm, "Torque Nm", D::Text)
            .optional(F::Rpm, "RPM", D::Text)
    }

    fn assemble(
        mut row: DecodedRow<TripField>,
        _config: &ImportConfig,
    ) -> Result<TripLogRecord, ParseError> {
        use TripField as F;

        let mut cells = [0.0; CELL_PAIR_COUNT];
        for (index, cell) in cells.iter_mut().enumerate() {
            *cell = row.take(F::CellPair(index as u8 + 1))?;
        }

        Ok(TripLogRecord {
            date_time: row.take(F::DateTime)?,
            coordinates: GpsCoordinatePair::new(row.take(F::Latitude)?, row.take(F::Longitude)?),
            elevation: row.take(F::Elevation)?,
            speed: row.take(F::Speed)?,
            gids: row.take(F::Gids)?,
            state_of_charge_percent: row.take(F::StateOfCharge)?,
            amp_hours: row.take(F::AmpHours)?,
            pack_volts: row.take(F::PackVolts)?,
            pack_amps: row.take(F::PackAmps)?,
            max_cell_pair_volts: row.take(F::MaxCellPairVolts)?,
            min_cell_pair_volts: row.take(F::MinCellPairVolts)?,
            avg_cell_pair_volts: row.take(F::AvgCellPairVolts)?,
            cell_pair_millivolt_diff: row.take(F::CellPairMilliVoltDiff)?,
            judgment_value: row.take(F::JudgmentValue)?,
            pack_t1_f: row.take(F::PackT1F)?,
            pack_t1_c: row.take(F::PackT1C)?,
            pack_t2_f: row.take(F::PackT2F)?,
            pack_t2_c: row.take(F::PackT2C)?,
            pack_t3_f: row.take_opt(F::PackT3F),
            pack_t3_c: row.take_opt(F::PackT3C),
            pack_t4_f: row.take(F::PackT4F)?,
            pack_t4_c: row.take(F::PackT4C)?,
            cell_pairs: CellPairs(cells),
            bat_12v_amps: row.take(F::Bat12vAmps)?,
            bat_12v_volts: row.take(F::Bat12vVolts)?,
            vin: row.take(F::Vin)?,
            hx: row.take(F::Hx)?,
            odometer: row.take(F::Odometer)?,
            quick_charge_count: row.take(F::QuickChargeCount)?,
            l1_l2_count: row.take(F::L1L2Count)?,
            tire_pressure_front_left: row.take(F::TirePressureFrontLeft)?,
            tire_pressure_front_right: row.take(F::TirePressureFrontRight)?,
            tire_pressure_rear_right: row.take(F::TirePressureRearRight)?,
            tire_pressure_rear_left: row.take(F::TirePressureRearLeft)?,
            ambient: row.take(F::Ambient)?,
            state_of_health: row.take(F::StateOfHealth)?,
            regen_wh: row.take(F::RegenWh)?,
            phone_battery_percent: row.take(F::PhoneBatteryLevel)?,
            epoch_time: row.take(F::EpochTime)?,
            gps_status: row.take(F::GpsStatus)?,
            motor_power_w: row.take_opt(F::MotorPower),
            aux_power_w: row.take_opt(F::AuxPower),
            ac_power_w: row.take_opt(F::AcPower),
            ac_compressor_pressure: row.take_opt(F::AcCompressorPressure),
            estimated_ac_power_w: row.take_opt(F::EstimatedAcPower),
            estimated_heater_power_w: row.take_opt(F::EstimatedHeaterPower),
            plug_state: row.take_opt(F::PlugState),
            charge_mode: row.take_opt(F::ChargeMode),
            obc_out_power: row.take_opt(F::ObcOutPower),
            gear: row.take_opt(F::Gear),
            hvolt1: row.take_opt(F::HVolt1),
            hvolt2: row.take_opt(F::HVolt2),
            power_switch: row.take_opt(F::PowerSwitch),
            bms: row.take_opt(F::Bms),
            obc: row.take_opt(F::Obc),
            debug: row.take_opt(F::Debug),
            motor_temp: row.take_opt(F::MotorTemp),
            inverter_2_temp: row.take_opt(F::Inverter2Temp),
            inverter_4_temp: row.take_opt(F::Inverter4Temp),
            speed1: row.take_opt(F::Speed1),
            speed2: row.take_opt(F::Speed2),
            wiper_status: row.take_opt(F::WiperStatus),
            torque_nm: row.take_opt(F::TorqueNm),
            rpm: row.take_opt(F::Rpm),
        })
    }
}
