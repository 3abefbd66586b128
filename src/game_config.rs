use crate::error::domain_error::DomainError;

/// A validated game setup. Always holds `undercovers + whites < players`.
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    dictionary: String,
    players: usize,
    undercovers: usize,
    whites: usize,
    rounds: usize,
}

impl GameConfig {
    pub const MINIMUM_PLAYERS: usize = 3;
    pub const MAXIMUM_PLAYERS: usize = 100;
    pub const MINIMUM_ROUNDS: usize = 1;

    pub fn new(
        dictionary: &str,
        players: usize,
        undercovers: usize,
        whites: usize,
        rounds: usize,
    ) -> Result<Self, DomainError> {
        GameConfig::validate_players(players)?;
        GameConfig::validate_undercovers(players, undercovers)?;
        GameConfig::validate_whites(players, undercovers, whites)?;
        GameConfig::validate_rounds(rounds)?;

        Ok(GameConfig {
            dictionary: dictionary.to_string(),
            players,
            undercovers,
            whites,
            rounds,
        })
    }

    pub fn validate_players(players: usize) -> Result<(), DomainError> {
        if players < GameConfig::MINIMUM_PLAYERS {
            Err(DomainError::NotEnoughPlayers {
                actual: players,
                minimum: GameConfig::MINIMUM_PLAYERS,
            })
        } else if players > GameConfig::MAXIMUM_PLAYERS {
            Err(DomainError::TooManyPlayers {
                actual: players,
                maximum: GameConfig::MAXIMUM_PLAYERS,
            })
        } else {
            Ok(())
        }
    }

    pub fn validate_undercovers(players: usize, undercovers: usize) -> Result<(), DomainError> {
        if undercovers >= players {
            Err(DomainError::TooManyUndercovers {
                undercovers,
                players,
            })
        } else {
            Ok(())
        }
    }

    pub fn validate_whites(
        players: usize,
        undercovers: usize,
        whites: usize,
    ) -> Result<(), DomainError> {
        let available = players.saturating_sub(undercovers);
        if whites >= available {
            Err(DomainError::TooManyMrWhites { whites, available })
        } else {
            Ok(())
        }
    }

    pub fn validate_rounds(rounds: usize) -> Result<(), DomainError> {
        if rounds < GameConfig::MINIMUM_ROUNDS {
            Err(DomainError::NotEnoughRounds {
                actual: rounds,
                minimum: GameConfig::MINIMUM_ROUNDS,
            })
        } else {
            Ok(())
        }
    }

    pub fn dictionary(&self) -> &str {
        &self.dictionary
    }

    pub fn players(&self) -> usize {
        self.players
    }

    pub fn undercovers(&self) -> usize {
        self.undercovers
    }

    pub fn whites(&self) -> usize {
        self.whites
    }

    pub fn civilians(&self) -> usize {
        self.players - self.undercovers - self.whites
    }

    pub fn rounds(&self) -> usize {
        self.rounds
    }
}
