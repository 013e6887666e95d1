//! Import configuration
//!
//! The source units and delimiter a log was exported with. The logging app
//! lets users pick these, so they are supplied by the caller; this crate
//! never loads or saves them.

use serde::{Deserialize, Serialize};

use crate::decode::DEFAULT_WH_PER_GID;
use crate::units::{
    Altitude, AirPressureUnit, DistanceUnit, Odometer, Quantity, Speed, TemperatureUnit,
    UnitError,
};

/// Units and tokenizer settings for one log export
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImportConfig {
    /// Unit of the `Elv` column
    pub elevation_unit: DistanceUnit,
    /// Per-hour unit of the `Speed` column
    pub speed_unit: DistanceUnit,
    /// Unit of the odometer columns
    pub odometer_unit: DistanceUnit,
    /// Unit of the `Ambient` column
    pub ambient_temperature_unit: TemperatureUnit,
    /// Unit of the `TP-*` tire pressure columns
    pub tire_pressure_unit: AirPressureUnit,
    /// Field delimiter; must be a single ASCII character
    pub delimiter: char,
    /// Watt-hours per Gid
    pub gid_wh_multiplier: u32,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            elevation_unit: DistanceUnit::Feet,
            speed_unit: DistanceUnit::Miles,
            odometer_unit: DistanceUnit::Kilometers,
            ambient_temperature_unit: TemperatureUnit::Fahrenheit,
            tire_pressure_unit: AirPressureUnit::Psi,
            delimiter: ',',
            gid_wh_multiplier: DEFAULT_WH_PER_GID,
        }
    }
}

impl ImportConfig {
    /// Check that each configured unit is valid for its quantity
    pub fn validate(&self) -> Result<(), UnitError> {
        check::<Altitude>(self.elevation_unit)?;
        check::<Speed>(self.speed_unit)?;
        check::<Odometer>(self.odometer_unit)?;
        Ok(())
    }

    /// Delimiter as a byte, `None` if it is not ASCII
    pub fn delimiter_byte(&self) -> Option<u8> {
        if self.delimiter.is_ascii() {
            Some(self.delimiter as u8)
        } else {
            None
        }
    }
}

fn check<Q: Quantity>(unit: Q::Unit) -> Result<(), UnitError> {
    if Q::supports(unit) {
        Ok(())
    } else {
        Err(UnitError::invalid_unit(Q::NAME, unit))
    }
}
