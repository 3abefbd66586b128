pub mod domain_error;

use thiserror::Error;

use self::domain_error::DomainError;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum Error {
    #[error("{0}")]
    Domain(DomainError),
    #[error("Could not list the dictionaries. Directory: '{0}', Error: '{1}'.")]
    DictionariesUnavailable(String, String),
    #[error("Could not read the dictionary. Path: '{0}', Error: '{1}'.")]
    DictionaryUnreadable(String, String),
    #[error("Could not write the HTML document. Path: '{0}', Error: '{1}'.")]
    OutputUnwritable(String, String),
    #[error("Could not read the answer from the input. Error: '{0}'.")]
    InputUnreadable(String),
    #[error("The input was closed before the game configuration was complete.")]
    InputClosed,
    #[error("Internal Error. Error: '{0}'.")]
    Internal(String),
}

impl Error {
    /// Recoverable errors are answered by asking the same question again.
    pub fn is_recoverable(&self) -> bool {
        match self {
            Error::Domain(domain_error) => match domain_error {
                DomainError::DictionaryDoesNotExist(_)
                | DomainError::InvalidNumber(_)
                | DomainError::NotEnoughPlayers { .. }
                | DomainError::TooManyPlayers { .. }
                | DomainError::TooManyUndercovers { .. }
                | DomainError::TooManyMrWhites { .. }
                | DomainError::NotEnoughRounds { .. } => true,
                DomainError::NoDictionaries(_)
                | DomainError::MalformedWordPair { .. }
                | DomainError::NotEnoughWordPairs { .. } => false,
            },
            Error::DictionariesUnavailable(_, _)
            | Error::DictionaryUnreadable(_, _)
            | Error::OutputUnwritable(_, _)
            | Error::InputUnreadable(_)
            | Error::InputClosed
            | Error::Internal(_) => false,
        }
    }

    pub fn log_and_create_internal(message: &str) -> Error {
        log::error!("{message}");
        Error::Internal(message.to_string())
    }
}

impl From<DomainError> for Error {
    fn from(error: DomainError) -> Self {
        Error::Domain(error)
    }
}
