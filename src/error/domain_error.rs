use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum DomainError {
    #[error("The dictionary {0} does not exist.")]
    DictionaryDoesNotExist(String),
    #[error("No dictionaries were found. Directory: '{0}'.")]
    NoDictionaries(String),
    #[error("The dictionary contains a line that is not a word pair. Dictionary: '{dictionary}', Line: '{line}'.")]
    MalformedWordPair { dictionary: String, line: usize },
    #[error("'{0}' is not a valid number.")]
    InvalidNumber(String),
    #[error("You must have at least {minimum} players.")]
    NotEnoughPlayers { actual: usize, minimum: usize },
    #[error("You must have at most {maximum} players.")]
    TooManyPlayers { actual: usize, maximum: usize },
    #[error("You must have fewer undercovers than players.")]
    TooManyUndercovers { undercovers: usize, players: usize },
    #[error("You must have fewer mr. whites than players minus undercovers.")]
    TooManyMrWhites { whites: usize, available: usize },
    #[error("You must have at least {minimum} round.")]
    NotEnoughRounds { actual: usize, minimum: usize },
    #[error(
        "Not enough word pairs for the requested rounds. AvailableWordPairs: '{available}', RequestedRounds: '{requested}'."
    )]
    NotEnoughWordPairs { available: usize, requested: usize },
}
