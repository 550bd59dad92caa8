use std::fmt;
use std::io;
use std::num::ParseFloatError;

use indexmap::IndexMap;
use thiserror::Error;

use crate::table::{MassRecord, MassTable};

/// A column in the source table, selected by header name or by position.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ColumnId {
    Name(String),
    Index(usize),
}

impl From<&str> for ColumnId {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

impl From<String> for ColumnId {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

impl From<usize> for ColumnId {
    fn from(index: usize) -> Self {
        Self::Index(index)
    }
}

impl fmt::Display for ColumnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnId::Name(name) => write!(f, "{:?}", name),
            ColumnId::Index(index) => write!(f, "column {}", index),
        }
    }
}

/// A high level set of failure modes encountered while projecting a
/// delimited file into a [`MassTable`].
#[derive(Debug, Error)]
pub enum TableParserError {
    #[error("Column {0} does not match the file header (columns: {1:?})")]
    ColumnMismatch(ColumnId, Vec<String>),
    #[error("Invalid number {0:?}: {1}")]
    InvalidNumber(String, ParseFloatError),
    #[error("An error occurred while reading the table: {0}")]
    CsvError(#[from] csv::Error),
    #[error("I/O error occurred while reading: {0}")]
    IOError(#[from] io::Error),
}

/// A parser that reads a delimited table with a header row, projecting out
/// the charge and m/z columns named by a pair of [`ColumnId`]s.
///
/// Both selected columns are coerced to floating point. The two columns are
/// validated against the header before any row is read, so a selector that
/// does not resolve aborts the load without producing a partial table.
pub struct DelimitedTableReader<R: io::Read> {
    handle: csv::Reader<R>,
}

impl<R: io::Read> DelimitedTableReader<R> {
    /// Create a new [`DelimitedTableReader`] over `source`, splitting cells
    /// on `delimiter`.
    pub fn new(source: R, delimiter: u8) -> DelimitedTableReader<R> {
        let handle = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(source);
        DelimitedTableReader { handle }
    }

    /// Read the whole table into memory, keeping only the two selected
    /// columns. Row order follows the file.
    pub fn read_table(
        mut self,
        charge_column: &ColumnId,
        mz_column: &ColumnId,
    ) -> Result<MassTable, TableParserError> {
        let header: IndexMap<String, usize> = self
            .handle
            .headers()?
            .iter()
            .enumerate()
            .map(|(i, name)| (name.to_string(), i))
            .collect();

        let charge_at = resolve_column(&header, charge_column)?;
        let mz_at = resolve_column(&header, mz_column)?;

        let mut table = MassTable::default();
        for row in self.handle.records() {
            let row = row?;
            let charge = parse_cell(row.get(charge_at).unwrap_or(""))?;
            let mz = parse_cell(row.get(mz_at).unwrap_or(""))?;
            table.push(MassRecord::new(charge, mz));
        }
        Ok(table)
    }
}

fn resolve_column(
    header: &IndexMap<String, usize>,
    column: &ColumnId,
) -> Result<usize, TableParserError> {
    let position = match column {
        ColumnId::Name(name) => header.get(name).copied(),
        ColumnId::Index(index) => (*index < header.len()).then_some(*index),
    };
    position.ok_or_else(|| {
        TableParserError::ColumnMismatch(column.clone(), header.keys().cloned().collect())
    })
}

fn parse_cell(value: &str) -> Result<f64, TableParserError> {
    value
        .parse::<f64>()
        .map_err(|e| TableParserError::InvalidNumber(value.to_string(), e))
}
