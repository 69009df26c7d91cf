use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use tracing::{info, warn};

use crate::game::Winners;
use crate::shared::AppError;

/// File content written in place of a result when a run fails.
pub const ERROR_MARKER: &str = "ERROR";

/// Console timestamp layout, e.g. `10/18/2026 14:03:59`.
pub const TIMESTAMP_FORMAT: &str = "%m/%d/%Y %H:%M:%S";

pub fn console_line(at: &DateTime<Local>, message: &str) -> String {
    format!("{} {}", at.format(TIMESTAMP_FORMAT), message)
}

/// Overwrites `path` with `contents` and a trailing newline.
pub fn write_output(path: &Path, contents: &str) -> Result<(), AppError> {
    fs::write(path, format!("{contents}\n")).map_err(|e| AppError::write_output(path, e))
}

/// Sends a run's outcome to the console and the output file.
///
/// The console gets a timestamped line; the file gets the bare result so that
/// identical input always produces an identical file.
pub struct Reporter<W> {
    console: W,
    output: Option<PathBuf>,
}

impl<W: Write> Reporter<W> {
    pub fn new(console: W, output: Option<PathBuf>) -> Self {
        Self { console, output }
    }

    pub fn success(&mut self, winners: &Winners) -> Result<(), AppError> {
        let result = winners.to_string();
        self.print(&result);

        match &self.output {
            Some(path) => {
                write_output(path, &result)?;
                info!(output = %path.display(), %result, "Wrote result");
                Ok(())
            }
            None => Ok(()),
        }
    }

    /// Reports `error` and writes the error marker. Failing to write the marker
    /// is only logged since there is nowhere left to report it.
    pub fn failure(&mut self, error: &AppError) {
        self.print(&error.to_string());

        match &self.output {
            Some(path) => {
                if let Err(e) = write_output(path, ERROR_MARKER) {
                    warn!(error = %e, "Failed to write error marker");
                }
            }
            None => warn!(%error, "No output file to mark"),
        }
    }

    pub fn into_console(self) -> W {
        self.console
    }

    fn print(&mut self, message: &str) {
        let line = console_line(&Local::now(), message);
        if let Err(e) = writeln!(self.console, "{line}") {
            warn!(error = %e, "Failed to write console line");
        }
    }
}
