//! LeafSpy export file names

use regex::Regex;
use serde::Serialize;
use std::path::Path;
use std::sync::OnceLock;

const LOG_FILE_PATTERN: &str = r"^Log_(?P<vin>\w{8})_(?P<date>\d{6})_(?P<device>\w+)$";

fn pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(LOG_FILE_PATTERN).ok()).as_ref()
}

/// Parts of a `Log_<vin suffix>_<yymmdd>_<device>.csv` trip log name
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogFileName {
    /// Last eight characters of the VIN
    pub vin_suffix: String,
    /// Six-digit date code
    pub date_code: String,
    /// Logging device identifier
    pub device_id: String,
}

impl LogFileName {
    /// Recognize a trip log by file name; the extension is ignored
    pub fn parse<P: AsRef<Path>>(path: P) -> Option<Self> {
        let stem = path.as_ref().file_stem()?.to_str()?;
        let captures = pattern()?.captures(stem)?;
        Some(Self {
            vin_suffix: captures["vin"].to_string(),
            date_code: captures["date"].to_string(),
            device_id: captures["device"].to_string(),
        })
    }
}
