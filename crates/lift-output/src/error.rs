//! Output errors.

use thiserror::Error;

/// Failure while creating or writing an output file.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("output file I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV record could not be written: {0}")]
    Csv(#[from] csv::Error),
}

pub type OutputResult<T> = Result<T, OutputError>;
