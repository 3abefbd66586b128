use std::collections::HashSet;

use rand::{seq::SliceRandom, thread_rng, Rng};

use crate::dictionary::{Dictionary, WordPair};
use crate::error::domain_error::DomainError;
use crate::game_config::GameConfig;
use crate::round::Round;

/// Order of the cards within a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SeatOrder {
    /// Undercovers, then mr. whites, then civilians.
    #[default]
    Fixed,
    /// Each round's cards are shuffled once.
    Shuffled,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Deck {
    dictionary: String,
    rounds: Vec<Round>,
}

impl Deck {
    pub fn generate(
        dictionary: Dictionary,
        config: &GameConfig,
        seat_order: SeatOrder,
    ) -> Result<Self, DomainError> {
        Deck::generate_with_rng(dictionary, config, seat_order, &mut thread_rng())
    }

    /// Distinct word pairs are drawn without replacement, so there must be at least one per round.
    pub fn generate_with_rng<R: Rng + ?Sized>(
        dictionary: Dictionary,
        config: &GameConfig,
        seat_order: SeatOrder,
        rng: &mut R,
    ) -> Result<Self, DomainError> {
        let Dictionary { name, word_pairs } = dictionary;
        let mut word_pairs = distinct_word_pairs(&name, word_pairs);

        if word_pairs.len() < config.rounds() {
            log::error!(
                "Not enough word pairs to generate the deck. Dictionary: '{name}', AvailableWordPairs: '{}', RequestedRounds: '{}'.",
                word_pairs.len(),
                config.rounds()
            );
            return Err(DomainError::NotEnoughWordPairs {
                available: word_pairs.len(),
                requested: config.rounds(),
            });
        }

        word_pairs.shuffle(rng);

        let mut rounds = Vec::with_capacity(config.rounds());
        for round_index in 0..config.rounds() {
            let word_pair = word_pairs.pop().ok_or(DomainError::NotEnoughWordPairs {
                available: round_index,
                requested: config.rounds(),
            })?;
            let mut words = word_pair.into_words();
            words.shuffle(rng);
            let [undercover_word, civilian_word] = words;

            let mut round = Round::new(&civilian_word, &undercover_word, config);
            if seat_order == SeatOrder::Shuffled {
                round.cards_mut().shuffle(rng);
            }
            log::debug!(
                "Generated round. Round: '{}', CivilianWord: '{civilian_word}', UndercoverWord: '{undercover_word}'.",
                round_index + 1
            );
            rounds.push(round);
        }

        log::info!(
            "Generated deck. Dictionary: '{name}', Rounds: '{}', Players: '{}'.",
            rounds.len(),
            config.players()
        );
        Ok(Deck {
            dictionary: name,
            rounds,
        })
    }

    pub fn dictionary(&self) -> &str {
        &self.dictionary
    }

    pub fn rounds(&self) -> &[Round] {
        &self.rounds
    }
}

/// Keeps the first occurrence of every pair, `cat,dog` and `dog,cat` being the same pair.
fn distinct_word_pairs(dictionary: &str, word_pairs: Vec<WordPair>) -> Vec<WordPair> {
    let total = word_pairs.len();
    let mut seen: HashSet<(String, String)> = HashSet::with_capacity(total);
    let distinct: Vec<WordPair> = word_pairs
        .into_iter()
        .filter(|word_pair| {
            let (first, second) = word_pair.key();
            seen.insert((first.to_string(), second.to_string()))
        })
        .collect();

    if distinct.len() < total {
        log::debug!(
            "Ignored repeated word pairs. Dictionary: '{dictionary}', WordPairs: '{total}', DistinctWordPairs: '{}'.",
            distinct.len()
        );
    }
    distinct
}
