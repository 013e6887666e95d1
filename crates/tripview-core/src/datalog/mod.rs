//! Data Logs
//!
//! Reads exported LeafSpy logs into ordered sequences of typed records.
//!
//! Rows flow through three stages: the [`LogReader`] tokenizes input into
//! [`RawRow`]s, a bound [`ColumnTable`] decodes each mapped column, and the
//! [`LogSchema`] builds the record. Each row is decoded independently.

mod assembler;
mod error;
mod file_name;
mod history;
mod mapping;
mod reader;
mod row;
mod summary;
mod trip_log;
mod value;

pub use assembler::{Assembled, LogSchema, RecordAssembler};
pub use error::ParseError;
pub use file_name::LogFileName;
pub use history::{HistoryField, TripHistory, TripHistorySchema};
pub use mapping::{BoundTable, ColumnBinding, ColumnTable, DecodedRow, Decoder, Requirement};
pub use reader::{LogReader, Records, TripHistoryReader, TripLogReader};
pub use row::RawRow;
pub use summary::TripSummary;
pub use trip_log::{CellPairs, TripField, TripLogRecord, TripLogSchema, CELL_PAIR_COUNT};
pub use value::{FieldValue, FromFieldValue};
