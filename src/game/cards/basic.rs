use std::fmt;
use strum::IntoEnumIterator;
use strum_macros::EnumIter;

use crate::shared::AppError;

/// Card suit. The discriminant is the bonus the suit adds to a card's score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter)]
pub enum Suit {
    Clubs = 1,
    Diamonds = 2,
    Hearts = 3,
    Spades = 4,
}

impl Suit {
    pub fn bonus(self) -> u32 {
        self as u32
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Suit::Clubs => "C",
                Suit::Diamonds => "D",
                Suit::Hearts => "H",
                Suit::Spades => "S",
            }
        )
    }
}

impl TryFrom<&str> for Suit {
    type Error = String;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            "C" => Ok(Suit::Clubs),
            "D" => Ok(Suit::Diamonds),
            "H" => Ok(Suit::Hearts),
            "S" => Ok(Suit::Spades),
            _ => Err(s.to_string()),
        }
    }
}

/// Card rank. The discriminant is the rank's face value.
///
/// `LegacyOne` is the `1` spelling some hand files use. It carries no face
/// value and is left out of the standard deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter)]
pub enum Rank {
    #[strum(disabled)]
    LegacyOne = 0,
    Ace = 1,
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
    Six = 6,
    Seven = 7,
    Eight = 8,
    Nine = 9,
    Ten = 10,
    Jack = 11,
    Queen = 12,
    King = 13,
}

impl Rank {
    pub fn value(self) -> u32 {
        self as u32
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Rank::LegacyOne => "1",
                Rank::Ace => "A",
                Rank::Two => "2",
                Rank::Three => "3",
                Rank::Four => "4",
                Rank::Five => "5",
                Rank::Six => "6",
                Rank::Seven => "7",
                Rank::Eight => "8",
                Rank::Nine => "9",
                Rank::Ten => "10",
                Rank::Jack => "J",
                Rank::Queen => "Q",
                Rank::King => "K",
            }
        )
    }
}

impl TryFrom<&str> for Rank {
    type Error = String;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            "1" => Ok(Rank::LegacyOne),
            "A" => Ok(Rank::Ace),
            "2" => Ok(Rank::Two),
            "3" => Ok(Rank::Three),
            "4" => Ok(Rank::Four),
            "5" => Ok(Rank::Five),
            "6" => Ok(Rank::Six),
            "7" => Ok(Rank::Seven),
            "8" => Ok(Rank::Eight),
            "9" => Ok(Rank::Nine),
            "10" => Ok(Rank::Ten),
            "J" => Ok(Rank::Jack),
            "Q" => Ok(Rank::Queen),
            "K" => Ok(Rank::King),
            _ => Err(s.to_string()),
        }
    }
}

/// A validated card from a hand file.
///
/// `name` is the uppercased token exactly as it appeared in the file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    name: String,
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    pub fn new(rank: Rank, suit: Suit) -> Self {
        Self {
            name: format!("{rank}{suit}"),
            rank,
            suit,
        }
    }

    /// Parses a card token case-insensitively.
    ///
    /// The suit is the last character and the rank is everything before it.
    /// Whitespace is not trimmed, so `" AS"` is rejected.
    pub fn from_token(token: &str) -> Result<Self, AppError> {
        let invalid = || AppError::InvalidCard(token.to_string());

        let name = token.to_uppercase();
        let suit_start = name
            .char_indices()
            .last()
            .map(|(index, _)| index)
            .ok_or_else(invalid)?;
        let (rank, suit) = name.split_at(suit_start);

        let rank = Rank::try_from(rank).map_err(|_| invalid())?;
        let suit = Suit::try_from(suit).map_err(|_| invalid())?;

        Ok(Self { name, rank, suit })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Face value plus suit bonus: `2..=17` for the standard deck, down to 1
    /// for a legacy `1C`.
    pub fn score(&self) -> u32 {
        self.rank.value() + self.suit.bonus()
    }

    /// The standard 52-card deck, one card per rank and suit.
    pub fn all_cards() -> Vec<Card> {
        let mut cards = Vec::new();
        for suit in Suit::iter() {
            for rank in Rank::iter() {
                cards.push(Card::new(rank, suit));
            }
        }
        cards
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
