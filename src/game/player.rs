use super::cards::Card;

/// A named hand read from one line of the input file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub name: String,
    pub cards: Vec<Card>,
}

impl Player {
    pub fn new(name: impl Into<String>, cards: Vec<Card>) -> Self {
        Self {
            name: name.into(),
            cards,
        }
    }

    /// Sum of the card scores, recomputed on every call.
    pub fn score(&self) -> u32 {
        self.cards.iter().map(Card::score).sum()
    }
}
