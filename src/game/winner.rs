use std::fmt;

use super::player::Player;

/// Every player tied at the highest score, in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Winners {
    pub names: Vec<String>,
    pub score: u32,
}

/// Picks all players sharing the maximum score. There is no tie-break.
///
/// Returns `None` only for an empty slice.
pub fn select_winners(players: &[Player]) -> Option<Winners> {
    let score = players.iter().map(Player::score).max()?;

    let names = players
        .iter()
        .filter(|player| player.score() == score)
        .map(|player| player.name.clone())
        .collect();

    Some(Winners { names, score })
}

impl fmt::Display for Winners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.names.join(","), self.score)
    }
}
