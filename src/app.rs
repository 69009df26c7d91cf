use std::fs;
use std::io::Write;
use std::path::Path;

use tracing::{debug, instrument};

use crate::config::Config;
use crate::game::{parse_players, select_winners, split_lines, Winners};
use crate::report::Reporter;
use crate::shared::AppError;

/// Reads the hand file named by `config` and picks the winners.
#[instrument(skip_all, fields(input = %config.input.display()))]
pub fn run(config: &Config) -> Result<Winners, AppError> {
    let contents =
        fs::read_to_string(&config.input).map_err(|e| AppError::read_input(&config.input, e))?;

    let lines = split_lines(&contents);
    let players = parse_players(&lines)?;
    debug!(players = players.len(), "Parsed hand file");

    // parse_players never returns an empty list
    select_winners(&players).ok_or(AppError::TooFewPlayers)
}

/// Runs one scoring pass from raw command-line arguments and reports the
/// outcome to `console` and the output file.
///
/// The returned result only tells the caller how the run ended; everything a
/// user sees has already been written by the time this returns.
pub fn execute<W: Write>(args: &[String], base_dir: &Path, console: W) -> Result<Winners, AppError> {
    let config = match Config::from_args(args, base_dir) {
        Ok(config) => config,
        Err(error) => {
            Reporter::new(console, Config::output_hint(args, base_dir)).failure(&error);
            return Err(error);
        }
    };

    let mut reporter = Reporter::new(console, Some(config.output.clone()));
    let outcome = run(&config).and_then(|winners| {
        reporter.success(&winners)?;
        Ok(winners)
    });

    if let Err(error) = &outcome {
        reporter.failure(error);
    }
    outcome
}
