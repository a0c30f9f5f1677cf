//! Error types for claimcast-io.

use std::path::PathBuf;

use claimcast_pipeline::ErrorKind;
use claimcast_series::SeriesError;

/// Error type for all fallible operations in the claimcast-io crate.
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    /// Returned when a required file does not exist on disk.
    #[error("file not found: {}", path.display())]
    FileNotFound {
        /// Path that could not be found.
        path: PathBuf,
    },

    /// Wraps a filesystem failure.
    #[error("i/o error on {}: {source}", path.display())]
    Io {
        /// Path being read or written.
        path: PathBuf,
        /// Underlying error.
        source: std::io::Error,
    },

    /// Wraps an I/O failure surfaced through the CSV reader or writer.
    #[error("csv i/o error: {source}")]
    CsvIo {
        /// Underlying error.
        source: std::io::Error,
    },

    /// Wraps a content error originating from the CSV library.
    #[error("csv error: {reason}")]
    Csv {
        /// Description of the underlying CSV failure.
        reason: String,
    },

    /// Returned when a required column is not present in the header.
    #[error("column '{name}' not found in header")]
    MissingColumn {
        /// Name of the missing column.
        name: String,
    },

    /// Returned when a date cell cannot be parsed as a first-of-month ISO date.
    #[error("invalid date on row {row}: {value:?} ({reason})")]
    InvalidDate {
        /// 1-based data row number.
        row: usize,
        /// The raw cell content.
        value: String,
        /// Description of the parsing issue.
        reason: String,
    },

    /// Returned when a loss cell is not a number.
    #[error("invalid loss on row {row}: {value:?}")]
    InvalidLoss {
        /// 1-based data row number.
        row: usize,
        /// The raw cell content.
        value: String,
    },

    /// Returned when the parsed rows violate the monthly series invariants.
    #[error("malformed series: {0}")]
    Series(#[from] SeriesError),

    /// Returned when the summary record cannot be serialized.
    #[error("summary serialization failed: {reason}")]
    Serialization {
        /// Description of the serializer failure.
        reason: String,
    },
}

impl From<csv::Error> for IoError {
    fn from(e: csv::Error) -> Self {
        if !e.is_io_error() {
            return IoError::Csv {
                reason: e.to_string(),
            };
        }
        match e.into_kind() {
            csv::ErrorKind::Io(source) => IoError::CsvIo { source },
            other => IoError::Csv {
                reason: format!("{other:?}"),
            },
        }
    }
}

impl IoError {
    /// Classifies this error. Content problems in an input file are
    /// [`ErrorKind::MalformedInput`]; everything else is an output or
    /// filesystem failure.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingColumn { .. }
            | Self::InvalidDate { .. }
            | Self::InvalidLoss { .. }
            | Self::Series(_)
            | Self::Csv { .. } => ErrorKind::MalformedInput,
            Self::FileNotFound { .. }
            | Self::Io { .. }
            | Self::CsvIo { .. }
            | Self::Serialization { .. } => ErrorKind::Io,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_file_not_found() {
        let err = IoError::FileNotFound {
            path: PathBuf::from("/tmp/missing.csv"),
        };
        assert_eq!(err.to_string(), "file not found: /tmp/missing.csv");
    }

    #[test]
    fn display_missing_column() {
        let err = IoError::MissingColumn {
            name: "loss".to_string(),
        };
        assert_eq!(err.to_string(), "column 'loss' not found in header");
        assert_eq!(err.kind(), ErrorKind::MalformedInput);
    }

    #[test]
    fn display_invalid_date() {
        let err = IoError::InvalidDate {
            row: 3,
            value: "2019-02-15".to_string(),
            reason: "not the first of the month".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid date on row 3: \"2019-02-15\" (not the first of the month)"
        );
    }

    #[test]
    fn display_invalid_loss() {
        let err = IoError::InvalidLoss {
            row: 1,
            value: "lots".to_string(),
        };
        assert_eq!(err.to_string(), "invalid loss on row 1: \"lots\"");
    }

    #[test]
    fn series_error_is_malformed_input() {
        let err = IoError::from(SeriesError::Empty);
        assert_eq!(err.to_string(), "malformed series: series is empty");
        assert_eq!(err.kind(), ErrorKind::MalformedInput);
    }

    #[test]
    fn csv_io_failure_is_io_kind() {
        let io = std::io::Error::new(std::io::ErrorKind::StorageFull, "no space left");
        let err = IoError::from(csv::Error::from(io));
        assert!(matches!(err, IoError::CsvIo { .. }));
        assert_eq!(err.kind(), ErrorKind::Io);
        assert_eq!(err.to_string(), "csv i/o error: no space left");
    }

    #[test]
    fn csv_content_failure_is_malformed_input() {
        let mut reader = csv::ReaderBuilder::new().from_reader("a,b\n1,2,3\n".as_bytes());
        let e = reader.records().next().unwrap().unwrap_err();
        let err = IoError::from(e);
        assert!(matches!(err, IoError::Csv { .. }));
        assert_eq!(err.kind(), ErrorKind::MalformedInput);
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync + std::error::Error>() {}
        assert_impl::<IoError>();
    }
}
