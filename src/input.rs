use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::filter::MassRange;
use crate::io::{infer_from_path, ColumnId, DelimitedTableReader, TableParserError};

/// The kinds of raw input a preprocessing call accepts.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MassInput {
    /// Path to a delimited table of measured (charge, m/z) values.
    FilePath(PathBuf),
    /// One measured neutral mass.
    Single(f64),
    /// A list of measured neutral masses.
    List(Vec<f64>),
}

impl From<&str> for MassInput {
    fn from(path: &str) -> Self {
        Self::FilePath(PathBuf::from(path))
    }
}

impl From<String> for MassInput {
    fn from(path: String) -> Self {
        Self::FilePath(PathBuf::from(path))
    }
}

impl From<&Path> for MassInput {
    fn from(path: &Path) -> Self {
        Self::FilePath(path.to_path_buf())
    }
}

impl From<PathBuf> for MassInput {
    fn from(path: PathBuf) -> Self {
        Self::FilePath(path)
    }
}

impl From<f64> for MassInput {
    fn from(mass: f64) -> Self {
        Self::Single(mass)
    }
}

impl From<Vec<f64>> for MassInput {
    fn from(masses: Vec<f64>) -> Self {
        Self::List(masses)
    }
}

impl From<&[f64]> for MassInput {
    fn from(masses: &[f64]) -> Self {
        Self::List(masses.to_vec())
    }
}

/// The order-significant pair of column selectors for table inputs: the
/// charge column first, then the m/z column.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColumnPair {
    pub charge: ColumnId,
    pub mz: ColumnId,
}

impl ColumnPair {
    pub fn new<C: Into<ColumnId>, M: Into<ColumnId>>(charge: C, mz: M) -> Self {
        Self {
            charge: charge.into(),
            mz: mz.into(),
        }
    }

    /// Build from a slice holding exactly two selectors, charge first.
    /// Any other length fails with [`PreprocessError::InvalidColumns`].
    pub fn from_slice<T: Into<ColumnId> + Clone>(columns: &[T]) -> Result<Self, PreprocessError> {
        match columns {
            [charge, mz] => Ok(Self::new(charge.clone(), mz.clone())),
            _ => Err(PreprocessError::InvalidColumns(columns.len())),
        }
    }
}

/// A high level set of failure modes for a preprocessing call. A call
/// either fully succeeds or returns one of these; no partial results are
/// produced.
#[derive(Debug, Error)]
pub enum PreprocessError {
    #[error("Expected exactly two column selectors (charge, m/z), got {0}")]
    InvalidColumns(usize),
    #[error("The file {0:?} was not found")]
    FileNotFound(PathBuf),
    #[error("File cannot be opened: {0:?}, expected a .txt or .csv table")]
    UnsupportedFormat(PathBuf),
    #[error("An error occurred while parsing the table: {0}")]
    ParserError(#[from] TableParserError),
    #[error("I/O error occurred while reading: {0}")]
    IOError(#[from] io::Error),
}

/// Configuration for the input-normalization pass.
///
/// Scalar and list inputs are always filtered through the mass window.
/// Table-derived masses are returned in full unless
/// [`Preprocessor::filter_file_masses`] is enabled.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Preprocessor {
    range: MassRange,
    filter_file_masses: bool,
}

impl Preprocessor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the accepted neutral mass window.
    pub fn with_range(mut self, range: MassRange) -> Self {
        self.range = range;
        self
    }

    /// Also filter masses loaded from a file through the mass window.
    pub fn filter_file_masses(mut self, enabled: bool) -> Self {
        self.filter_file_masses = enabled;
        self
    }

    pub fn range(&self) -> MassRange {
        self.range
    }

    /// Normalize one input into an ordered list of neutral monoisotopic
    /// masses. `columns` is only consulted for the
    /// [`MassInput::FilePath`] variant.
    pub fn process(&self, input: MassInput, columns: &ColumnPair) -> Result<Vec<f64>, PreprocessError> {
        match input {
            MassInput::FilePath(path) => self.process_file(&path, columns),
            MassInput::Single(mass) => Ok(self.range.filter_single(mass)),
            MassInput::List(masses) => Ok(self.range.filter_masses(&masses)),
        }
    }

    fn process_file(&self, path: &Path, columns: &ColumnPair) -> Result<Vec<f64>, PreprocessError> {
        if !path.is_file() {
            return Err(PreprocessError::FileNotFound(path.to_path_buf()));
        }
        let format = infer_from_path(path);
        let delimiter = match format.delimiter() {
            Some(delimiter) => delimiter,
            None => return Err(PreprocessError::UnsupportedFormat(path.to_path_buf())),
        };
        log::debug!("Importing {} mass input table from {}", format, path.display());
        let handle = fs::File::open(path)?;
        let table = DelimitedTableReader::new(handle, delimiter)
            .read_table(&columns.charge, &columns.mz)?;
        let masses = table.neutral_masses();
        if self.filter_file_masses {
            Ok(self.range.filter_masses(&masses))
        } else {
            Ok(masses)
        }
    }
}

/// Normalize `input` with the default configuration: masses loaded from a
/// file are returned in full, while scalar and list inputs pass through
/// the default 0 to 4000 Da window.
///
/// `columns` must hold exactly two selectors, the charge column first and
/// the m/z column second.
pub fn handle_input<I, T>(input: I, columns: &[T]) -> Result<Vec<f64>, PreprocessError>
where
    I: Into<MassInput>,
    T: Into<ColumnId> + Clone,
{
    let columns = ColumnPair::from_slice(columns)?;
    Preprocessor::new().process(input.into(), &columns)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::utils::PROTON;
    use std::io::Write;

    const COLUMNS: [&str; 2] = ["charge", "mz"];

    #[test]
    fn test_single_in_window() {
        let result = handle_input(3.5, &COLUMNS).expect("Scalar input should not fail");
        assert_eq!(result, vec![3.5]);
    }

    #[test]
    fn test_single_out_of_window() {
        let result = handle_input(4100.7, &COLUMNS).expect("Scalar input should not fail");
        assert!(result.is_empty());
    }

    #[test]
    fn test_list() {
        let result = handle_input(vec![100.0, 5000.0, -10.0, 4000.0], &COLUMNS)
            .expect("List input should not fail");
        assert_eq!(result, vec![100.0, 4000.0]);
    }

    #[test]
    fn test_columns_shape() {
        let err = handle_input(42.0, &["a", "b", "c"]).expect_err("Three selectors should fail");
        assert!(matches!(err, PreprocessError::InvalidColumns(3)));
        let err = handle_input(42.0, &["a"]).expect_err("One selector should fail");
        assert!(matches!(err, PreprocessError::InvalidColumns(1)));
    }

    #[test_log::test]
    fn test_load_txt() {
        let masses = handle_input("./test/data/small.txt", &COLUMNS)
            .expect("Test file should load");
        assert_eq!(masses.len(), 4);
        assert_eq!(masses[0], 500.0 * 2.0 - 2.0 * PROTON);
        assert_eq!(masses[1], 250.5 - PROTON);
        assert_eq!(masses[2], 1200.75 * 3.0 - 3.0 * PROTON);
        assert_eq!(masses[3], 1100.25 * 4.0 - 4.0 * PROTON);
    }

    #[test_log::test]
    fn test_load_csv_by_position() {
        let masses = handle_input("./test/data/small.csv", &[0, 1])
            .expect("Test file should load");
        assert_eq!(masses.len(), 2);
        assert_eq!(masses[0], 500.0 * 2.0 - 2.0 * PROTON);
        assert_eq!(masses[1], 300.25 - PROTON);
    }

    #[test]
    fn test_file_masses_unfiltered_by_default() {
        // small.txt holds a mass above 4000 Da which must survive
        let masses = handle_input("./test/data/small.txt", &COLUMNS)
            .expect("Test file should load");
        assert!(masses.iter().any(|m| *m > 4000.0));
    }

    #[test]
    fn test_filter_file_masses() {
        let columns = ColumnPair::new("charge", "mz");
        let masses = Preprocessor::new()
            .with_range(MassRange::new(0.0, 1000.0))
            .filter_file_masses(true)
            .process("./test/data/small.txt".into(), &columns)
            .expect("Test file should load");
        assert_eq!(masses.len(), 2);
        assert!(masses.iter().all(|m| *m <= 1000.0));
    }

    #[test]
    fn test_custom_range_scalar() {
        let columns = ColumnPair::new("charge", "mz");
        let wide = Preprocessor::new().with_range(MassRange::new(0.0, 10000.0));
        let result = wide
            .process(MassInput::Single(9000.5), &columns)
            .expect("Scalar input should not fail");
        assert_eq!(result, vec![9000.5]);
    }

    #[test]
    fn test_file_not_found() {
        let err = handle_input("./test/data/missing.txt", &COLUMNS)
            .expect_err("Missing file should fail");
        assert!(matches!(err, PreprocessError::FileNotFound(_)));
    }

    #[test]
    fn test_unsupported_extension() {
        let err = handle_input("./test/data/small.json", &COLUMNS)
            .expect_err("A .json path should not load");
        assert!(matches!(err, PreprocessError::UnsupportedFormat(_)));
    }

    #[test]
    fn test_column_mismatch_aborts() {
        let err = handle_input("./test/data/small.txt", &["z", "mz"])
            .expect_err("Unknown column should fail");
        assert!(matches!(
            err,
            PreprocessError::ParserError(TableParserError::ColumnMismatch(_, _))
        ));
    }

    #[test]
    fn test_invalid_cell_in_file() {
        let mut handle = tempfile::Builder::new()
            .suffix(".csv")
            .tempfile()
            .expect("Temporary file should be created");
        handle
            .write_all(b"charge,mz\n2,five hundred\n")
            .expect("Temporary file should be writable");
        handle.flush().expect("Temporary file should flush");

        let err = handle_input(handle.path(), &COLUMNS)
            .expect_err("Non-numeric cell should fail");
        assert!(matches!(
            err,
            PreprocessError::ParserError(TableParserError::InvalidNumber(_, _))
        ));
    }
}
