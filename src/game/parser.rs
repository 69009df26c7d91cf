use tracing::{debug, instrument};

use super::cards::Card;
use super::player::Player;
use crate::shared::AppError;

/// Fewest lines a hand file may contain.
pub const MIN_PLAYERS: usize = 5;

/// Parses every line of a hand file into a player.
///
/// Each line has the form `<name>:<card>[,<card>...]`. The name is kept
/// verbatim and anything after a second `:` is ignored. The first malformed
/// line or unknown card fails the whole file.
#[instrument(skip_all, fields(lines = lines.len()))]
pub fn parse_players<S: AsRef<str>>(lines: &[S]) -> Result<Vec<Player>, AppError> {
    if lines.len() < MIN_PLAYERS {
        return Err(AppError::TooFewPlayers);
    }

    lines
        .iter()
        .map(|line| parse_line(line.as_ref()))
        .collect()
}

/// Parses a single `<name>:<hand>` line.
pub fn parse_line(line: &str) -> Result<Player, AppError> {
    let mut fields = line.split(':');
    let (name, hand) = match (fields.next(), fields.next()) {
        (Some(name), Some(hand)) => (name, hand),
        _ => return Err(AppError::InvalidLine(line.to_string())),
    };

    let cards = hand
        .split(',')
        .map(Card::from_token)
        .collect::<Result<Vec<_>, _>>()?;

    let player = Player::new(name, cards);
    debug!(
        player = %player.name,
        cards = player.cards.len(),
        score = player.score(),
        "Parsed hand"
    );
    Ok(player)
}

/// Splits file contents into lines.
///
/// A leading byte order mark is dropped. `\r\n`, `\n` and a lone `\r` all end
/// a line, and a final line ending does not start an extra empty line.
pub fn split_lines(contents: &str) -> Vec<&str> {
    let mut rest = contents.strip_prefix('\u{feff}').unwrap_or(contents);
    let mut lines = Vec::new();

    while !rest.is_empty() {
        match rest.find(['\r', '\n']) {
            Some(end) => {
                lines.push(&rest[..end]);
                let ending = if rest[end..].starts_with("\r\n") { 2 } else { 1 };
                rest = &rest[end + ending..];
            }
            None => {
                lines.push(rest);
                break;
            }
        }
    }
    lines
}
