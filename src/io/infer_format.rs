use std::fmt::Display;
use std::path::Path;

/// Delimited table formats that [`mzprep`](crate) can load.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TableFormat {
    TabDelimited,
    CommaDelimited,
    Unknown,
}

impl TableFormat {
    /// The cell delimiter for this format, or `None` when the format is
    /// not one that can be read.
    pub fn delimiter(&self) -> Option<u8> {
        match self {
            TableFormat::TabDelimited => Some(b'\t'),
            TableFormat::CommaDelimited => Some(b','),
            TableFormat::Unknown => None,
        }
    }
}

impl Display for TableFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Given a path, infer the table format from its extension. `.txt` is read
/// as tab-delimited and `.csv` as comma-delimited, case-insensitively.
pub fn infer_from_path<P: AsRef<Path>>(path: P) -> TableFormat {
    let path = path.as_ref();
    if let Some(ext) = path.extension() {
        if let Some(ext) = ext.to_ascii_lowercase().to_str() {
            match ext {
                "txt" => TableFormat::TabDelimited,
                "csv" => TableFormat::CommaDelimited,
                _ => TableFormat::Unknown,
            }
        } else {
            TableFormat::Unknown
        }
    } else {
        TableFormat::Unknown
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_infer_from_path() {
        assert_eq!(infer_from_path("masses.txt"), TableFormat::TabDelimited);
        assert_eq!(infer_from_path("masses.csv"), TableFormat::CommaDelimited);
        assert_eq!(infer_from_path("run/MASSES.TXT"), TableFormat::TabDelimited);
        assert_eq!(infer_from_path("masses.json"), TableFormat::Unknown);
        assert_eq!(infer_from_path("masses"), TableFormat::Unknown);
    }

    #[test]
    fn test_delimiter() {
        assert_eq!(TableFormat::TabDelimited.delimiter(), Some(b'\t'));
        assert_eq!(TableFormat::CommaDelimited.delimiter(), Some(b','));
        assert_eq!(TableFormat::Unknown.delimiter(), None);
    }
}
