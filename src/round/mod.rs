use crate::game_config::GameConfig;

/// Card text of the players who get no word.
pub const MR_WHITE: &str = "mr. white";

#[derive(Debug, Clone, PartialEq)]
pub struct Round {
    pub civilian_word: String,
    pub undercover_word: String,
    cards: Vec<String>,
}

impl Round {
    /// Seats are filled undercovers first, then mr. whites, then civilians.
    pub fn new(civilian_word: &str, undercover_word: &str, config: &GameConfig) -> Self {
        let mut cards = Vec::with_capacity(config.players());
        cards.extend((0..config.undercovers()).map(|_| undercover_word.to_string()));
        cards.extend((0..config.whites()).map(|_| MR_WHITE.to_string()));
        while cards.len() < config.players() {
            cards.push(civilian_word.to_string());
        }

        Round {
            civilian_word: civilian_word.to_string(),
            undercover_word: undercover_word.to_string(),
            cards,
        }
    }

    pub fn cards(&self) -> &[String] {
        &self.cards
    }

    pub fn cards_mut(&mut self) -> &mut [String] {
        &mut self.cards
    }

    pub fn count_cards(&self, word: &str) -> usize {
        self.cards.iter().filter(|card| card.as_str() == word).count()
    }
}
