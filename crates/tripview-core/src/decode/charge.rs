//! Battery charge units (Gids)

use serde::Serialize;
use std::fmt;

use super::DecodeError;

/// Watt-hours per Gid reported by the battery management system
pub const DEFAULT_WH_PER_GID: u32 = 80;

const KIND: &str = "gid count";

/// An integer charge-unit reading with its energy multiplier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GidUnit {
    value: i64,
    wh_multiplier: u32,
}

impl GidUnit {
    /// Decode an integer Gid count
    pub fn parse(raw: &str, wh_multiplier: u32) -> Result<Self, DecodeError> {
        let text = raw.trim();
        if text.is_empty() {
            return Err(DecodeError::Blank { kind: KIND });
        }
        let value: i64 = text
            .parse()
            .map_err(|_| DecodeError::malformed(KIND, raw))?;
        // the energy of every decoded count must fit in an i64
        if value.checked_mul(i64::from(wh_multiplier)).is_none() {
            return Err(DecodeError::malformed(KIND, raw));
        }
        Ok(Self::new(value, wh_multiplier))
    }

    /// Build from an already decoded count
    pub fn new(value: i64, wh_multiplier: u32) -> Self {
        Self {
            value,
            wh_multiplier,
        }
    }

    /// Gid count
    pub fn value(&self) -> i64 {
        self.value
    }

    /// Watt-hours per Gid
    pub fn wh_multiplier(&self) -> u32 {
        self.wh_multiplier
    }

    /// Stored energy in watt-hours, saturating at the `i64` bounds
    pub fn energy_wh(&self) -> i64 {
        self.value.saturating_mul(i64::from(self.wh_multiplier))
    }
}

impl fmt::Display for GidUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_energy() {
        let gids = GidUnit::parse("281", DEFAULT_WH_PER_GID).unwrap();
        assert_eq!(gids.value(), 281);
        assert_eq!(gids.energy_wh(), 22_480);
        assert_eq!(GidUnit::parse("10", 75).unwrap().energy_wh(), 750);
    }

    #[test]
    fn test_rejects_non_integer() {
        assert!(matches!(
            GidUnit::parse("281.5", DEFAULT_WH_PER_GID),
            Err(DecodeError::Malformed { .. })
        ));
        assert!(matches!(
            GidUnit::parse("", DEFAULT_WH_PER_GID),
            Err(DecodeError::Blank { .. })
        ));
    }

    #[test]
    fn test_rejects_count_whose_energy_overflows() {
        assert!(matches!(
            GidUnit::parse("9223372036854775807", DEFAULT_WH_PER_GID),
            Err(DecodeError::Malformed { .. })
        ));
        assert!(matches!(
            GidUnit::parse("-115292150460684698", DEFAULT_WH_PER_GID),
            Err(DecodeError::Malformed { .. })
        ));
        let max = i64::MAX / 80;
        assert_eq!(
            GidUnit::parse(&max.to_string(), DEFAULT_WH_PER_GID).unwrap().energy_wh(),
            max * 80
        );
        assert_eq!(GidUnit::new(i64::MAX, 80).energy_wh(), i64::MAX);
        assert_eq!(GidUnit::new(i64::MIN, 80).energy_wh(), i64::MIN);
    }
}
