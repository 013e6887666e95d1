//! Column mapping tables
//!
//! A [`ColumnTable`] is a plain ordered list of bindings from a logical field
//! to a source column and the [`Decoder`] to apply. Source units are baked
//! into the decoders when the table is built. Binding the table to a header
//! row resolves every column once, so a missing mandatory column fails before
//! any data row is read.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use std::collections::HashMap;
use std::hash::Hash;
use tracing::{debug, trace};

use super::row::RawCell;
use super::{FieldValue, FromFieldValue, ParseError, RawRow};
use crate::decode::{
    decode_enum, decode_hex_enum, DecodeError, GidUnit, ScalarConverter, UnixEpoch,
};
use crate::gps::{GpsCoordinate, GpsStatus};
use crate::units::{
    AirPressureUnit, AltitudeValue, DistanceUnit, OdometerValue, PressureValue, SpeedValue,
    TemperatureUnit, TemperatureValue, UnitError,
};

const DATE_TIME_FORMATS: [&str; 4] = [
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y/%m/%d %H:%M:%S",
];
const DATE_FORMATS: [&str; 3] = ["%m/%d/%Y", "%Y-%m-%d", "%Y/%m/%d"];
const TIME_FORMATS: [&str; 2] = ["%H:%M:%S", "%H:%M"];

/// How one raw column becomes a [`FieldValue`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Decoder {
    /// Pass-through text; blank is allowed
    Text,
    /// Pass-through text that must not be blank
    Identifier,
    /// Scalar converter
    Scalar(ScalarConverter),
    /// Degree-decimal-minute coordinate
    Coordinate,
    /// Hex GPS status
    GpsStatus,
    /// Fractional Unix seconds
    Epoch,
    /// Gid count with watt-hours per Gid
    Gids(u32),
    /// Temperature recorded in the given unit
    Temperature(TemperatureUnit),
    /// Pressure recorded in the given unit
    Pressure(AirPressureUnit),
    /// Elevation recorded in the given unit
    Altitude(DistanceUnit),
    /// Speed recorded in the given per-hour unit
    Speed(DistanceUnit),
    /// Odometer recorded in the given unit
    Odometer(DistanceUnit),
    /// Local date and time
    DateTime,
    /// Local date
    Date,
    /// Local time of day
    Time,
    /// Decimal gear code
    Gear,
    /// Decimal plug state code
    PlugState,
    /// Decimal charge mode code
    ChargeMode,
    /// Decimal read state code
    ReadState,
    /// Hex wiper status code
    WiperStatus,
}

impl Decoder {
    /// Decode raw text; an absent value decodes like blank text
    pub fn decode(&self, raw: &str) -> Result<FieldValue, DecodeError> {
        Ok(match *self {
            Decoder::Text => FieldValue::Text(raw.to_string()),
            Decoder::Identifier => {
                if raw.trim().is_empty() {
                    return Err(DecodeError::Blank { kind: "identifier" });
                }
                FieldValue::Text(raw.to_string())
            }
            Decoder::Scalar(converter) => FieldValue::Scalar(converter.apply(raw)?),
            Decoder::Coordinate => FieldValue::Coordinate(GpsCoordinate::new(raw)),
            Decoder::GpsStatus => FieldValue::GpsStatus(GpsStatus::new(raw)),
            Decoder::Epoch => FieldValue::Epoch(UnixEpoch::parse(raw)?),
            Decoder::Gids(wh) => FieldValue::Gids(GidUnit::parse(raw, wh)?),
            Decoder::Temperature(unit) => {
                let value = TemperatureValue::new(unit, raw);
                value.value()?;
                FieldValue::Temperature(value)
            }
            Decoder::Pressure(unit) => {
                let value = PressureValue::new(unit, raw);
                value.value()?;
                FieldValue::Pressure(value)
            }
            Decoder::Altitude(unit) => {
                let value = AltitudeValue::new(unit, raw);
                value.value()?;
                FieldValue::Altitude(value)
            }
            Decoder::Speed(unit) => {
                let value = SpeedValue::new(unit, raw);
                value.value()?;
                FieldValue::Speed(value)
            }
            Decoder::Odometer(unit) => {
                let value = OdometerValue::new(unit, raw);
                value.value()?;
                FieldValue::Odometer(value)
            }
            Decoder::DateTime => FieldValue::DateTime(parse_formats(
                raw,
                "date/time",
                &DATE_TIME_FORMATS,
                NaiveDateTime::parse_from_str,
            )?),
            Decoder::Date => FieldValue::Date(parse_formats(
                raw,
                "date",
                &DATE_FORMATS,
                NaiveDate::parse_from_str,
            )?),
            Decoder::Time => FieldValue::Time(parse_formats(
                raw,
                "time",
                &TIME_FORMATS,
                NaiveTime::parse_from_str,
            )?),
            Decoder::Gear => FieldValue::Gear(decode_enum(raw)?),
            Decoder::PlugState => FieldValue::PlugState(decode_enum(raw)?),
            Decoder::ChargeMode => FieldValue::ChargeMode(decode_enum(raw)?),
            Decoder::ReadState => FieldValue::ReadState(decode_enum(raw)?),
            Decoder::WiperStatus => FieldValue::WiperStatus(decode_hex_enum(raw)?),
        })
    }
}

fn parse_formats<T>(
    raw: &str,
    kind: &'static str,
    formats: &[&str],
    parse: fn(&str, &str) -> chrono::ParseResult<T>,
) -> Result<T, DecodeError> {
    let text = raw.trim();
    if text.is_empty() {
        return Err(DecodeError::Blank { kind });
    }
    formats
        .iter()
        .find_map(|format| parse(text, format).ok())
        .ok_or_else(|| DecodeError::malformed(kind, raw))
}

/// Whether a column must be present
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    /// Header must contain the column; decode failures fail the row
    Mandatory,
    /// Column may be absent; decode failures leave the field empty
    Optional,
}

/// One logical field bound to a source column
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnBinding<F> {
    /// Logical field
    pub field: F,
    /// Exact source column name
    pub column: String,
    /// Decoder applied to the raw text
    pub decoder: Decoder,
    /// Presence requirement
    pub requirement: Requirement,
}

/// Ordered list of column bindings for one log kind
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnTable<F> {
    bindings: Vec<ColumnBinding<F>>,
}

impl<F> Default for ColumnTable<F> {
    fn default() -> Self {
        Self {
            bindings: Vec::new(),
        }
    }
}

impl<F: Copy + Eq + Hash + std::fmt::Debug> ColumnTable<F> {
    /// Empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a mandatory binding
    pub fn mandatory(mut self, field: F, column: impl Into<String>, decoder: Decoder) -> Self {
        self.push(field, column, decoder, Requirement::Mandatory);
        self
    }

    /// Add an optional binding
    pub fn optional(mut self, field: F, column: impl Into<String>, decoder: Decoder) -> Self {
        self.push(field, column, decoder, Requirement::Optional);
        self
    }

    /// Add a binding
    pub fn push(
        &mut self,
        field: F,
        column: impl Into<String>,
        decoder: Decoder,
        requirement: Requirement,
    ) {
        self.bindings.push(ColumnBinding {
            field,
            column: column.into(),
            decoder,
            requirement,
        });
    }

    /// Bindings in declaration order
    pub fn bindings(&self) -> &[ColumnBinding<F>] {
        &self.bindings
    }

    /// Binding for a logical field
    pub fn binding(&self, field: F) -> Option<&ColumnBinding<F>> {
        self.bindings.iter().find(|b| b.field == field)
    }

    /// Resolve every binding against a header row
    pub fn bind<'h, I>(self, headers: I) -> Result<BoundTable<F>, ParseError>
    where
        I: IntoIterator<Item = &'h str>,
    {
        let positions: HashMap<&str, usize> = headers
            .into_iter()
            .enumerate()
            // The first occurrence of a duplicated header wins.
            .fold(HashMap::new(), |mut map, (index, name)| {
                map.entry(name).or_insert(index);
                map
            });

        let mut bound = Vec::with_capacity(self.bindings.len());
        let mut absent = 0;
        for binding in self.bindings {
            match positions.get(binding.column.as_str()) {
                Some(&index) => bound.push((binding, index)),
                None if binding.requirement == Requirement::Mandatory => {
                    return Err(ParseError::SchemaMismatch {
                        column: binding.column,
                    });
                }
                None => {
                    debug!("Optional column '{}' not present in log", binding.column);
                    absent += 1;
                }
            }
        }

        debug!(
            "Bound {} columns ({} optional columns absent)",
            bound.len(),
            absent
        );
        Ok(BoundTable { bound })
    }
}

/// A column table resolved against a specific header row
#[derive(Debug, Clone)]
pub struct BoundTable<F> {
    bound: Vec<(ColumnBinding<F>, usize)>,
}

impl<F: Copy + Eq + Hash + std::fmt::Debug> BoundTable<F> {
    /// Whether `field` has a column in this log
    pub fn is_bound(&self, field: F) -> bool {
        self.bound.iter().any(|(b, _)| b.field == field)
    }

    /// Number of bound columns
    pub fn len(&self) -> usize {
        self.bound.len()
    }

    /// Whether no column was bound
    pub fn is_empty(&self) -> bool {
        self.bound.is_empty()
    }

    /// Decode every bound field of one row
    ///
    /// Fails on the first mandatory field that does not decode; a mandatory
    /// cell missing from a short row decodes as blank text. Optional fields
    /// that are missing or fail are left out of the result. A cell that is not
    /// valid UTF-8 fails like a malformed value.
    pub fn decode_row(&self, row: &RawRow<'_>) -> Result<DecodedRow<F>, ParseError> {
        let mut values = HashMap::with_capacity(self.bound.len());
        for (binding, index) in &self.bound {
            let optional = binding.requirement == Requirement::Optional;
            let raw = match row.cell_at(*index, &binding.column) {
                RawCell::Text(raw) => raw,
                RawCell::Absent if optional => continue,
                RawCell::Absent => "",
                RawCell::Invalid(_) if optional => {
                    trace!(
                        "Row {}: optional column '{}' is not valid UTF-8",
                        row.number(),
                        binding.column
                    );
                    continue;
                }
                RawCell::Invalid(bytes) => {
                    return Err(ParseError::MalformedValue {
                        row: row.number(),
                        column: binding.column.clone(),
                        raw: String::from_utf8_lossy(bytes).into_owned(),
                        reason: "not valid UTF-8".to_string(),
                    })
                }
            };
            match binding.decoder.decode(raw) {
                Ok(value) => {
                    values.insert(binding.field, value);
                }
                Err(err) if optional => {
                    trace!(
                        "Row {}: optional column '{}' left empty: {}",
                        row.number(),
                        binding.column,
                        err
                    );
                }
                Err(err) => return Err(field_error(row.number(), &binding.column, raw, err)),
            }
        }
        Ok(DecodedRow {
            number: row.number(),
            values,
        })
    }
}

fn field_error(row: usize, column: &str, raw: &str, err: DecodeError) -> ParseError {
    match err {
        DecodeError::Blank { .. } => ParseError::MissingField {
            row,
            column: column.to_string(),
        },
        DecodeError::Unit(err @ UnitError::InvalidUnit { .. }) => ParseError::InvalidUnit(err),
        other => ParseError::MalformedValue {
            row,
            column: column.to_string(),
            raw: raw.to_string(),
            reason: other.to_string(),
        },
    }
}

/// Decoded values of one row, keyed by logical field
#[derive(Debug, Clone)]
pub struct DecodedRow<F> {
    number: usize,
    values: HashMap<F, FieldValue>,
}

impl<F: Copy + Eq + Hash + std::fmt::Debug> DecodedRow<F> {
    /// 1-based data row number
    pub fn number(&self) -> usize {
        self.number
    }

    /// Whether `field` decoded
    pub fn contains(&self, field: F) -> bool {
        self.values.contains_key(&field)
    }

    /// Borrow a decoded value
    pub fn get(&self, field: F) -> Option<&FieldValue> {
        self.values.get(&field)
    }

    /// Take a field that must be present
    pub fn take<T: FromFieldValue>(&mut self, field: F) -> Result<T, ParseError> {
        self.values
            .remove(&field)
            .and_then(T::from_field_value)
            .ok_or_else(|| ParseError::MissingField {
                row: self.number,
                column: format!("{:?}", field),
            })
    }

    /// Take a field that may be absent
    pub fn take_opt<T: FromFieldValue>(&mut self, field: F) -> Option<T> {
        self.values.remove(&field).and_then(T::from_field_value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::{GearPosition, Scalar};

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum Field {
        Id,
        Soc,
        Gear,
    }

    fn table() -> ColumnTable<Field> {
        ColumnTable::new()
            .mandatory(Field::Id, "VIN", Decoder::Identifier)
            .mandatory(Field::Soc, "SOC", Decoder::Scalar(ScalarConverter::PER_10K))
            .optional(Field::Gear, "Gear", Decoder::Gear)
    }

    #[test]
    fn test_bind_reports_missing_mandatory_column() {
        let err = table().bind(["SOC", "Gear"]).unwrap_err();
        assert!(matches!(err, ParseError::SchemaMismatch { column } if column == "VIN"));
    }

    #[test]
    fn test_optional_column_may_be_absent() {
        let bound = table().bind(["VIN", "SOC"]).unwrap();
        assert!(!bound.is_bound(Field::Gear));
        let row = RawRow::from_record(1, ["VIN", "SOC"], ["X", "500000"]);
        let mut decoded = bound.decode_row(&row).unwrap();
        assert_eq!(decoded.take::<f64>(Field::Soc).unwrap(), 50.0);
        assert_eq!(decoded.take_opt::<GearPosition>(Field::Gear), None);
    }

    #[test]
    fn test_optional_failure_is_absent() {
        let bound = table().bind(["Gear", "SOC", "VIN"]).unwrap();
        let row = RawRow::from_record(4, ["Gear", "SOC", "VIN"], ["9", "1", "X"]);
        let decoded = bound.decode_row(&row).unwrap();
        assert!(!decoded.contains(Field::Gear));
        assert_eq!(
            decoded.get(Field::Soc),
            Some(&FieldValue::Scalar(Scalar::Float(0.0001)))
        );
    }

    #[test]
    fn test_mandatory_failures() {
        let bound = table().bind(["VIN", "SOC"]).unwrap();

        let row = RawRow::from_record(2, ["VIN", "SOC"], ["", "1"]);
        assert!(matches!(
            bound.decode_row(&row),
            Err(ParseError::MissingField { row: 2, .. })
        ));

        let row = RawRow::from_record(5, ["VIN", "SOC"], ["X", "lots"]);
        match bound.decode_row(&row) {
            Err(ParseError::MalformedValue {
                row, column, raw, ..
            }) => {
                assert_eq!(row, 5);
                assert_eq!(column, "SOC");
                assert_eq!(raw, "lots");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_unit_decoders_validate_numbers() {
        assert!(Decoder::Pressure(AirPressureUnit::Psi).decode("").is_ok());
        assert!(Decoder::Pressure(AirPressureUnit::Psi).decode("na").is_ok());
        assert!(Decoder::Pressure(AirPressureUnit::Psi).decode("3x").is_err());
        assert!(matches!(
            Decoder::Altitude(DistanceUnit::Miles).decode("12"),
            Err(DecodeError::Unit(UnitError::InvalidUnit { .. }))
        ));
    }

    #[test]
    fn test_date_time_formats() {
        let value = Decoder::DateTime.decode("03/01/2025 14:22:05").unwrap();
        let expected = NaiveDate::from_ymd_opt(2025, 3, 1)
            .and_then(|d| d.and_hms_opt(14, 22, 5))
            .unwrap();
        assert_eq!(value, FieldValue::DateTime(expected));
        assert!(Decoder::Time.decode("07:05").is_ok());
        assert!(matches!(
            Decoder::Date.decode(" "),
            Err(DecodeError::Blank { kind: "date" })
        ));
    }
}
