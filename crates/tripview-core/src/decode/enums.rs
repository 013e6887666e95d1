//! Coded vehicle state enumerations
//!
//! Each column carries a numeric code, written in decimal for most columns
//! and in hex for bitmask-style status columns.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::DecodeError;

/// An enumeration stored in the log as a numeric code
pub trait CodedEnum: Copy + Sized + 'static {
    /// Name used in error messages
    const KIND: &'static str;

    /// Every variant
    const VARIANTS: &'static [Self];

    /// Numeric code written by the logging app
    fn code(&self) -> u32;

    /// Variant name
    fn name(&self) -> &'static str;

    /// Variant for a numeric code
    fn from_code(code: u32) -> Option<Self> {
        Self::VARIANTS.iter().copied().find(|v| v.code() == code)
    }

    /// Variant for a name, ignoring case
    fn from_name(name: &str) -> Option<Self> {
        Self::VARIANTS
            .iter()
            .copied()
            .find(|v| v.name().eq_ignore_ascii_case(name))
    }
}

/// Decode a decimal code (variant names are accepted too)
pub fn decode_enum<E: CodedEnum>(raw: &str) -> Result<E, DecodeError> {
    let text = raw.trim();
    if text.is_empty() {
        return Err(DecodeError::Blank { kind: E::KIND });
    }
    match text.parse::<u32>() {
        Ok(code) => E::from_code(code).ok_or(DecodeError::UnknownCode { kind: E::KIND, code }),
        Err(_) => E::from_name(text).ok_or_else(|| DecodeError::malformed(E::KIND, raw)),
    }
}

/// Decode a hex code, with or without a `0x` prefix
pub fn decode_hex_enum<E: CodedEnum>(raw: &str) -> Result<E, DecodeError> {
    let text = raw.trim();
    let digits = text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
        .unwrap_or(text);
    if digits.is_empty() {
        return Err(DecodeError::Blank { kind: E::KIND });
    }
    let code =
        u32::from_str_radix(digits, 16).map_err(|_| DecodeError::malformed(E::KIND, raw))?;
    E::from_code(code).ok_or(DecodeError::UnknownCode { kind: E::KIND, code })
}

macro_rules! coded_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:literal {
            $($(#[$vmeta:meta])* $variant:ident = $code:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $($(#[$vmeta])* $variant),+
        }

        impl CodedEnum for $name {
            const KIND: &'static str = $kind;
            const VARIANTS: &'static [Self] = &[$($name::$variant),+];

            fn code(&self) -> u32 {
                match self {
                    $($name::$variant => $code),+
                }
            }

            fn name(&self) -> &'static str {
                match self {
                    $($name::$variant => stringify!($variant)),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.name())
            }
        }
    };
}

coded_enum! {
    /// Shift lever position
    GearPosition, "gear position" {
        /// Not reported by the car
        NotRead = 0,
        Park = 1,
        Reverse = 2,
        Neutral = 3,
        Drive = 4,
        /// Drive with stronger regen
        BMode = 7,
    }
}

coded_enum! {
    /// Charge connector state
    PlugState, "plug state" {
        NotPluggedIn = 0,
        PartiallyPluggedIn = 1,
        PluggedIn = 2,
    }
}

coded_enum! {
    /// Active charging level
    ChargeMode, "charge mode" {
        NotCharging = 0,
        /// 120 V
        Level1 = 1,
        /// 240 V
        Level2 = 2,
        /// DC quick charge
        Level3 = 3,
    }
}

coded_enum! {
    /// Whether an ECU answered the version query
    ReadState, "read state" {
        NotRead = 0,
        Read = 1,
    }
}

coded_enum! {
    /// Front wiper switch, from the hex `Wiper Status` column
    FrontWiperStatus, "wiper status" {
        None = 0x00,
        Stopped = 0x08,
        Intermittent = 0x10,
        Switch = 0x20,
        Low = 0x40,
        High = 0x80,
    }
}
