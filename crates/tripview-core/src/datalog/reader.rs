//! Delimited log reader
//!
//! Tokenizes an exported log with `csv` and feeds each row to a
//! [`RecordAssembler`]. Fields are not trimmed, since some header names
//! carry a leading space, and short rows are accepted with their trailing
//! columns absent. Rows are read as bytes and each cell is checked for UTF-8
//! on its own, so a stray Latin-1 byte fails at most its own row.

use csv::{ByteRecord, ReaderBuilder, StringRecord, Trim};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, warn};

use super::{LogSchema, ParseError, RawRow, RecordAssembler, TripHistorySchema, TripLogSchema};
use crate::config::ImportConfig;

/// Reader over one log file or stream
#[derive(Debug)]
pub struct LogReader<S: LogSchema, R> {
    reader: csv::Reader<R>,
    headers: StringRecord,
    assembler: RecordAssembler<S>,
    rows_read: usize,
}

/// Reader for trip logs
pub type TripLogReader<R = File> = LogReader<TripLogSchema, R>;

/// Reader for trip history exports
pub type TripHistoryReader<R = File> = LogReader<TripHistorySchema, R>;

impl<S: LogSchema> LogReader<S, File> {
    /// Open a log file and bind its header row
    pub fn open<P: AsRef<Path>>(path: P, config: &ImportConfig) -> Result<Self, ParseError> {
        let path = path.as_ref();
        debug!("Opening {} {}", S::NAME, path.display());
        let file = File::open(path)?;
        Self::from_reader(file, config)
    }
}

impl<S: LogSchema, R: Read> LogReader<S, R> {
    /// Read the header row from `reader` and bind the schema to it
    pub fn from_reader(reader: R, config: &ImportConfig) -> Result<Self, ParseError> {
        let delimiter = config
            .delimiter_byte()
            .ok_or(ParseError::InvalidDelimiter(config.delimiter))?;

        let mut reader = ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(true)
            .flexible(true)
            .trim(Trim::None)
            .from_reader(reader);

        let headers = reader.headers()?.clone();
        let assembler = RecordAssembler::new(config, headers.iter())?;

        Ok(Self {
            reader,
            headers,
            assembler,
            rows_read: 0,
        })
    }

    /// Header row as read
    pub fn headers(&self) -> &StringRecord {
        &self.headers
    }

    /// Assembler bound to this log's headers
    pub fn assembler(&self) -> &RecordAssembler<S> {
        &self.assembler
    }

    /// Data rows read so far
    pub fn rows_read(&self) -> usize {
        self.rows_read
    }

    /// Lazily assemble the remaining rows, one result per row
    pub fn records(&mut self) -> Records<'_, S, R> {
        Records {
            reader: self,
            record: ByteRecord::new(),
        }
    }

    /// Assemble every row, stopping at the first failure
    pub fn read_all(mut self) -> Result<Vec<S::Record>, ParseError> {
        self.records().collect()
    }

    /// Assemble every row, skipping rows that fail to decode
    ///
    /// Tokenizer and I/O errors still abort the read.
    pub fn read_valid(mut self) -> Result<Vec<S::Record>, ParseError> {
        let mut records = Vec::new();
        let mut skipped = 0;
        for result in self.records() {
            match result {
                Ok(record) => records.push(record),
                Err(err) if err.is_row_error() => {
                    warn!("Skipping {} row: {}", S::NAME, err);
                    skipped += 1;
                }
                Err(err) => return Err(err),
            }
        }
        debug!(
            "Read {} {} records ({} skipped)",
            records.len(),
            S::NAME,
            skipped
        );
        Ok(records)
    }
}

/// Iterator returned by [`LogReader::records`]
pub struct Records<'r, S: LogSchema, R> {
    reader: &'r mut LogReader<S, R>,
    record: ByteRecord,
}

impl<S: LogSchema, R: Read> Iterator for Records<'_, S, R> {
    type Item = Result<S::Record, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.reader.reader.read_byte_record(&mut self.record) {
            Ok(true) => {}
            Ok(false) => return None,
            Err(err) => return Some(Err(err.into())),
        }
        self.reader.rows_read += 1;

        let LogReader {
            headers,
            assembler,
            rows_read,
            ..
        } = &*self.reader;
        let row = RawRow::from_byte_record(*rows_read, headers.iter(), self.record.iter());
        Some(assembler.assemble_row(&row))
    }
}
