use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;
use winner::{AppError, Winners};

// ============================================================================
// Test Workspace
// ============================================================================

pub const INPUT: &str = "hands.txt";
pub const OUTPUT: &str = "result.txt";

/// A scratch directory that stands in for the executable's base directory
pub struct TestWorkspace {
    dir: TempDir,
}

#[allow(dead_code)]
pub struct RunResult {
    pub outcome: Result<Winners, AppError>,
    pub console: String,
}

#[allow(dead_code)]
impl TestWorkspace {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("temp dir should be created"),
        }
    }

    pub fn base_dir(&self) -> PathBuf {
        self.dir.path().to_path_buf()
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    pub fn write_input(&self, contents: &str) -> &Self {
        fs::write(self.path(INPUT), contents).expect("input file should be written");
        self
    }

    pub fn write_output(&self, contents: &str) -> &Self {
        fs::write(self.path(OUTPUT), contents).expect("output file should be written");
        self
    }

    pub fn read_output(&self) -> String {
        fs::read_to_string(self.path(OUTPUT)).expect("output file should exist")
    }

    pub fn output_exists(&self) -> bool {
        self.path(OUTPUT).exists()
    }

    /// Runs the scorer in-process with the given raw arguments
    pub fn run(&self, args: &[&str]) -> RunResult {
        let args: Vec<String> = args.iter().map(|a| a.to_string()).collect();
        let mut console = Vec::new();
        let outcome = winner::execute(&args, self.dir.path(), &mut console);

        RunResult {
            outcome,
            console: String::from_utf8(console).expect("console output should be UTF-8"),
        }
    }

    /// Runs with the conventional `--in hands.txt --out result.txt`
    pub fn run_default(&self) -> RunResult {
        self.run(&["--in", INPUT, "--out", OUTPUT])
    }
}

#[allow(dead_code)]
impl RunResult {
    /// The console line without its 19-character timestamp
    pub fn console_message(&self) -> &str {
        let line = self.console.trim_end();
        assert!(line.len() > 20, "console line too short: {line:?}");
        &line[20..]
    }
}
