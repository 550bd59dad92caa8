//! Convert measured mass spectrometry values (mass-to-charge ratio plus
//! charge state) into neutral monoisotopic masses, filtered to a plausible
//! mass window for downstream elemental composition estimation.
//!
//! Input may be a single mass, a list of masses, or a tab- or
//! comma-delimited table naming the columns that hold the charge and m/z
//! values. See [`handle_input`] for the one-call entry point and
//! [`Preprocessor`] for the configurable form.

pub mod filter;
pub mod input;
pub mod io;
pub mod table;
pub mod utils;

pub use crate::filter::MassRange;

pub use crate::input::{handle_input, ColumnPair, MassInput, PreprocessError, Preprocessor};

pub use crate::io::{infer_from_path, ColumnId, DelimitedTableReader, TableFormat, TableParserError};

pub use crate::table::{MassRecord, MassTable};

pub use crate::utils::{mass_charge_ratio, neutral_mass, PROTON};
