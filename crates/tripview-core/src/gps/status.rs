//! Packed GPS receiver status

use serde::{Serialize, Serializer};
use std::fmt;
use std::ops::{BitAnd, BitOr};

/// 7-bit receiver flag set carried in the last status byte
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct GpsStatusFlags(u8);

impl GpsStatusFlags {
    /// No flags set
    pub const NONE: GpsStatusFlags = GpsStatusFlags(0);
    /// Phone has GPS hardware
    pub const HARDWARE_AVAIL: GpsStatusFlags = GpsStatusFlags(0x01);
    /// GPS hardware is enabled
    pub const HARDWARE_ENABLED: GpsStatusFlags = GpsStatusFlags(0x02);
    /// Position logging is enabled in the app
    pub const LOGGING_ENABLED: GpsStatusFlags = GpsStatusFlags(0x04);
    /// Receiver is powered
    pub const GPS_ON: GpsStatusFlags = GpsStatusFlags(0x08);
    /// Accuracy byte is meaningful
    pub const ACCURACY_VALID: GpsStatusFlags = GpsStatusFlags(0x10);
    /// Elevation column is meaningful
    pub const ALTITUDE_VALID: GpsStatusFlags = GpsStatusFlags(0x20);
    /// Speed column is meaningful
    pub const SPEED_VALID: GpsStatusFlags = GpsStatusFlags(0x40);
    /// Every flag set
    pub const ALL: GpsStatusFlags = GpsStatusFlags(0x7F);

    const NAMED: [(GpsStatusFlags, &'static str); 7] = [
        (Self::HARDWARE_AVAIL, "HardwareAvail"),
        (Self::HARDWARE_ENABLED, "HardwareEnabled"),
        (Self::LOGGING_ENABLED, "LoggingEnabled"),
        (Self::GPS_ON, "GpsOn"),
        (Self::ACCURACY_VALID, "AccuracyValid"),
        (Self::ALTITUDE_VALID, "AltitudeValid"),
        (Self::SPEED_VALID, "SpeedValid"),
    ];

    /// Build from raw bits; the high bit is dropped
    pub fn from_bits(bits: u8) -> Self {
        GpsStatusFlags(bits & Self::ALL.0)
    }

    /// Raw bits
    pub fn bits(&self) -> u8 {
        self.0
    }

    /// Whether every flag in `other` is set
    pub fn contains(&self, other: GpsStatusFlags) -> bool {
        self.0 & other.0 == other.0
    }

    /// Set the flags in `other`
    pub fn insert(&mut self, other: GpsStatusFlags) {
        self.0 |= other.0;
    }

    /// Clear the flags in `other`
    pub fn remove(&mut self, other: GpsStatusFlags) {
        self.0 &= !other.0;
    }

    /// Whether no flag is set
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Names of the set flags, lowest bit first
    pub fn names(&self) -> Vec<&'static str> {
        Self::NAMED
            .iter()
            .filter(|(flag, _)| self.contains(*flag))
            .map(|(_, name)| *name)
            .collect()
    }
}

impl BitOr for GpsStatusFlags {
    type Output = GpsStatusFlags;

    fn bitor(self, rhs: GpsStatusFlags) -> GpsStatusFlags {
        GpsStatusFlags(self.0 | rhs.0)
    }
}

impl BitAnd for GpsStatusFlags {
    type Output = GpsStatusFlags;

    fn bitand(self, rhs: GpsStatusFlags) -> GpsStatusFlags {
        GpsStatusFlags(self.0 & rhs.0)
    }
}

impl fmt::Display for GpsStatusFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("None");
        }
        f.write_str(&self.names().join(" | "))
    }
}

impl Serialize for GpsStatusFlags {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.names())
    }
}

/// GPS status decoded from a hex byte string
///
/// Never fails to decode; blank or non-hex text yields two zero bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GpsStatus {
    bytes: Vec<u8>,
}

impl GpsStatus {
    /// Decode raw log text
    pub fn new(raw: &str) -> Self {
        let bytes = decode_hex(raw.trim()).unwrap_or_else(|| vec![0, 0]);
        Self { bytes }
    }

    /// Decoded bytes, most significant first
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Flag set from the last byte
    pub fn flags(&self) -> GpsStatusFlags {
        self.bytes
            .last()
            .map(|b| GpsStatusFlags::from_bits(*b))
            .unwrap_or_default()
    }

    /// Reported accuracy in meters, `0` unless the accuracy flag is set
    pub fn accuracy(&self) -> u8 {
        if !self.flags().contains(GpsStatusFlags::ACCURACY_VALID) {
            return 0;
        }
        match self.bytes.len() {
            2 => self.bytes[0],
            n if n >= 3 => self.bytes[n - 2],
            _ => 0,
        }
    }
}

impl Default for GpsStatus {
    fn default() -> Self {
        Self::new("")
    }
}

impl fmt::Display for GpsStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.flags().fmt(f)
    }
}

impl Serialize for GpsStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;
        let mut state = serializer.serialize_struct("GpsStatus", 2)?;
        state.serialize_field("flags", &self.flags())?;
        state.serialize_field("accuracy", &self.accuracy())?;
        state.end()
    }
}

fn decode_hex(hex: &str) -> Option<Vec<u8>> {
    if hex.is_empty() || !hex.is_ascii() {
        return None;
    }
    let padded = if hex.len() % 2 == 1 {
        format!("0{}", hex)
    } else {
        hex.to_string()
    };
    (0..padded.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&padded[i..i + 2], 16).ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_accuracy() {
        assert_eq!(GpsStatus::new("37F").accuracy(), 3);
        assert_eq!(GpsStatus::new("0C067F").accuracy(), 6);
        assert_eq!(GpsStatus::new("21047F").accuracy(), 4);
        assert_eq!(GpsStatus::new("0C0667").accuracy(), 0);
    }

    #[test]
    fn test_status_flags() {
        assert_eq!(GpsStatus::new("37F").flags(), GpsStatusFlags::ALL);
        let mut expected = GpsStatusFlags::ALL;
        expected.remove(GpsStatusFlags::GPS_ON);
        assert_eq!(GpsStatus::new("270477").flags(), expected);
        assert_eq!(GpsStatus::new("270477").accuracy(), 4);
    }

    #[test]
    fn test_blank_and_malformed() {
        for raw in ["", "  ", "0", "zz", "é1"] {
            let status = GpsStatus::new(raw);
            assert_eq!(status.accuracy(), 0, "{raw:?}");
            assert!(status.flags().is_empty(), "{raw:?}");
        }
        assert_eq!(GpsStatus::new("").bytes(), &[0, 0]);
    }

    #[test]
    fn test_flags_display() {
        assert_eq!(GpsStatusFlags::NONE.to_string(), "None");
        assert_eq!(
            (GpsStatusFlags::GPS_ON | GpsStatusFlags::SPEED_VALID).to_string(),
            "GpsOn | SpeedValid"
        );
        assert_eq!(GpsStatusFlags::from_bits(0xFF), GpsStatusFlags::ALL);
    }
}
