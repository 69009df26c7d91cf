pub mod hand_builders;
pub mod setup;

// Re-export main utilities for use by test files
#[allow(unused_imports)]
pub use hand_builders::HandFileBuilder;
#[allow(unused_imports)]
pub use setup::{RunResult, TestWorkspace, INPUT, OUTPUT};
