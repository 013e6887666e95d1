//! Record assembly
//!
//! A [`LogSchema`] declares the column table of one log kind and how a
//! decoded row becomes its record type. [`RecordAssembler`] binds that table
//! to a header row and then turns raw rows into records one at a time. It
//! keeps no state between rows.

use std::fmt::Debug;
use std::hash::Hash;
use std::marker::PhantomData;
use tracing::{debug, warn};

use super::{ColumnTable, BoundTable, DecodedRow, ParseError, RawRow};
use crate::config::ImportConfig;

/// One log kind: its columns and its record type
pub trait LogSchema {
    /// Logical field identifier
    type Field: Copy + Eq + Hash + Debug;

    /// Assembled record
    type Record;

    /// Name used in log messages
    const NAME: &'static str;

    /// Column table with units from `config` baked in
    fn column_table(config: &ImportConfig) -> ColumnTable<Self::Field>;

    /// Build a record from a decoded row
    ///
    /// Every mandatory field is present in `row`.
    fn assemble(
        row: DecodedRow<Self::Field>,
        config: &ImportConfig,
    ) -> Result<Self::Record, ParseError>;
}

/// Turns raw rows into records for schema `S`
#[derive(Debug)]
pub struct RecordAssembler<S: LogSchema> {
    table: BoundTable<S::Field>,
    config: ImportConfig,
    schema: PhantomData<S>,
}

impl<S: LogSchema> RecordAssembler<S> {
    /// Validate `config` and bind the schema to a header row
    pub fn new<'h, I>(config: &ImportConfig, headers: I) -> Result<Self, ParseError>
    where
        I: IntoIterator<Item = &'h str>,
    {
        config.validate()?;
        let table = S::column_table(config).bind(headers)?;
        debug!("{} schema bound to {} columns", S::NAME, table.len());
        Ok(Self {
            table,
            config: config.clone(),
            schema: PhantomData,
        })
    }

    /// Configuration the assembler was built with
    pub fn config(&self) -> &ImportConfig {
        &self.config
    }

    /// Whether `field` has a column in this log
    pub fn is_bound(&self, field: S::Field) -> bool {
        self.table.is_bound(field)
    }

    /// Assemble one row
    pub fn assemble_row(&self, row: &RawRow<'_>) -> Result<S::Record, ParseError> {
        let decoded = self.table.decode_row(row)?;
        S::assemble(decoded, &self.config)
    }

    /// Assemble rows in order, one result per row
    pub fn assemble<I>(&self, rows: I) -> Assembled<'_, S, I::IntoIter>
    where
        I: IntoIterator,
    {
        Assembled {
            assembler: self,
            rows: rows.into_iter(),
        }
    }

    /// Assemble rows in order, skipping rows that fail
    pub fn assemble_valid<'a, I>(&self, rows: I) -> Vec<S::Record>
    where
        I: IntoIterator<Item = RawRow<'a>>,
    {
        self.assemble(rows)
            .filter_map(|result| match result {
                Ok(record) => Some(record),
                Err(err) => {
                    warn!("Skipping {} row: {}", S::NAME, err);
                    None
                }
            })
            .collect()
    }
}

/// Iterator returned by [`RecordAssembler::assemble`]
pub struct Assembled<'s, S: LogSchema, I> {
    assembler: &'s RecordAssembler<S>,
    rows: I,
}

impl<'s, 'a, S, I> Iterator for Assembled<'s, S, I>
where
    S: LogSchema,
    I: Iterator<Item = RawRow<'a>>,
{
    type Item = Result<S::Record, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        let row = self.rows.next()?;
        Some(self.assembler.assemble_row(&row))
    }
}
