// Public API
pub use cards::{Card, Rank, Suit};
pub use parser::{parse_line, parse_players, split_lines, MIN_PLAYERS};
pub use player::Player;
pub use winner::{select_winners, Winners};

// Internal modules
mod cards;
mod parser;
mod player;
mod winner;
