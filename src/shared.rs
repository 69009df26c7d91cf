use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Every way a scoring run can fail.
///
/// All variants are invalid-input failures: the run is aborted at the first
/// one and the output file receives the `ERROR` marker. The `Display` text is
/// the message printed to the console.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("INPUT/OUT parameters are required")]
    MissingParameters,

    #[error("Invalid parameters")]
    InvalidParameters,

    #[error("Define at least 5 players")]
    TooFewPlayers,

    #[error("Invalid line: '{0}'")]
    InvalidLine(String),

    #[error("Invalid card '{0}'")]
    InvalidCard(String),

    #[error("Could not read input file '{}': {source}", .path.display())]
    ReadInput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Could not write output file '{}': {source}", .path.display())]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl AppError {
    pub fn read_input(path: impl Into<PathBuf>, source: io::Error) -> Self {
        AppError::ReadInput {
            path: path.into(),
            source,
        }
    }

    pub fn write_output(path: impl Into<PathBuf>, source: io::Error) -> Self {
        AppError::WriteOutput {
            path: path.into(),
            source,
        }
    }
}
