//! Reading delimited mass input tables and inferring their format from
//! the file path.

mod delimited;
mod infer_format;

pub use crate::io::delimited::{ColumnId, DelimitedTableReader, TableParserError};
pub use crate::io::infer_format::{infer_from_path, TableFormat};
