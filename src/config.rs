use std::path::{Path, PathBuf};

use tracing::{debug, instrument};

use crate::shared::AppError;

/// Environment variable that overrides the directory relative paths resolve against.
pub const BASE_DIR_ENV: &str = "WINNER_BASE_DIR";

const EXPECTED_ARGS: usize = 4;

/// Which path the first argument introduces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flag {
    In,
    Out,
}

impl Flag {
    fn parse(arg: &str) -> Option<Self> {
        match arg.to_lowercase().as_str() {
            "--in" => Some(Flag::In),
            "--out" => Some(Flag::Out),
            _ => None,
        }
    }

    /// Returns `(input, output)` from the positional arguments.
    fn paths(self, args: &[String]) -> (&str, &str) {
        match self {
            Flag::In => (args[1].as_str(), args[3].as_str()),
            Flag::Out => (args[3].as_str(), args[1].as_str()),
        }
    }
}

/// Resolved input and output paths for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub input: PathBuf,
    pub output: PathBuf,
}

impl Config {
    /// Resolves `--in <input> <any> <output>` or `--out <output> <any> <input>`.
    ///
    /// Flags are case-insensitive and the third argument is never inspected.
    #[instrument(skip_all, fields(base_dir = %base_dir.display()))]
    pub fn from_args(args: &[String], base_dir: &Path) -> Result<Self, AppError> {
        if args.len() != EXPECTED_ARGS {
            return Err(AppError::MissingParameters);
        }

        let flag = Flag::parse(&args[0]).ok_or(AppError::InvalidParameters)?;
        let (input, output) = flag.paths(args);
        if input.is_empty() || output.is_empty() {
            return Err(AppError::InvalidParameters);
        }

        let config = Self {
            input: resolve(base_dir, input),
            output: resolve(base_dir, output),
        };
        debug!(input = %config.input.display(), output = %config.output.display(), "Resolved paths");
        Ok(config)
    }

    /// Best guess at the output path when `from_args` fails, so the error
    /// marker can still be written if the output position is recognizable.
    pub fn output_hint(args: &[String], base_dir: &Path) -> Option<PathBuf> {
        let flag = Flag::parse(args.first()?)?;
        let output = match flag {
            Flag::In => args.get(3)?,
            Flag::Out => args.get(1)?,
        };
        if output.is_empty() {
            return None;
        }
        Some(resolve(base_dir, output))
    }
}

fn resolve(base_dir: &Path, path: &str) -> PathBuf {
    let path = Path::new(path);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base_dir.join(path)
    }
}

/// Directory that relative paths are resolved against.
///
/// `WINNER_BASE_DIR` wins when set, then the directory holding the executable,
/// then the current working directory.
pub fn base_dir() -> PathBuf {
    if let Some(dir) = std::env::var_os(BASE_DIR_ENV).filter(|dir| !dir.is_empty()) {
        return PathBuf::from(dir);
    }

    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .or_else(|| std::env::current_dir().ok())
        .unwrap_or_default()
}
