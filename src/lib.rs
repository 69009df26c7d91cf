// Library crate for the hand winner scorer
// This file exposes the public API for the binary and integration tests

pub mod app;
pub mod config;
pub mod game;
pub mod report;
pub mod shared;

// Re-export commonly used types for easier access in tests
pub use app::{execute, run};
pub use config::Config;
pub use game::{Card, Player, Rank, Suit, Winners};
pub use report::{Reporter, ERROR_MARKER};
pub use shared::AppError;
