pub mod prompt_fsm;

use std::io::{BufRead, Write};

use rust_fsm::StateMachine;

use crate::error::domain_error::DomainError;
use crate::error::Error;
use crate::game_config::GameConfig;

use self::prompt_fsm::{PromptFsm, PromptFsmInput, PromptFsmState};

/// Asks for every game setting in turn, repeating a question until its answer is valid.
pub struct Prompter<R: BufRead, W: Write> {
    input: R,
    output: W,
    fsm: StateMachine<PromptFsm>,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Prompter {
            input,
            output,
            fsm: StateMachine::default(),
        }
    }

    pub fn state(&self) -> &PromptFsmState {
        self.fsm.state()
    }

    pub fn ask_game_config(&mut self, dictionaries: &[String]) -> Result<GameConfig, Error> {
        let mut dictionary = String::new();
        let mut players = 0;
        let mut undercovers = 0;
        let mut whites = 0;
        let mut rounds = 0;

        loop {
            match self.state().clone() {
                PromptFsmState::SelectingDictionary => {
                    let question = format!("Select a dictionary ({}): ", dictionaries.join(", "));
                    dictionary = self.ask(&question, |answer| {
                        if dictionaries.iter().any(|name| name == answer) {
                            Ok(answer.to_string())
                        } else {
                            Err(DomainError::DictionaryDoesNotExist(answer.to_string()))
                        }
                    })?;
                    self.say(&format!("You selected {dictionary}."))?;
                    self.process_event(&PromptFsmInput::DictionarySelected)?;
                }
                PromptFsmState::SelectingPlayers => {
                    players = self.ask("How many players? ", |answer| {
                        let players = parse_number(answer)?;
                        GameConfig::validate_players(players)?;
                        Ok(players)
                    })?;
                    self.say(&format!("You selected {players} players."))?;
                    self.process_event(&PromptFsmInput::PlayersSelected)?;
                }
                PromptFsmState::SelectingUndercovers => {
                    undercovers = self.ask("How many undercovers? ", |answer| {
                        let undercovers = parse_number(answer)?;
                        GameConfig::validate_undercovers(players, undercovers)?;
                        Ok(undercovers)
                    })?;
                    self.say(&format!("You selected {undercovers} undercovers."))?;
                    self.process_event(&PromptFsmInput::UndercoversSelected)?;
                }
                PromptFsmState::SelectingWhites => {
                    whites = self.ask("How many mr. whites? ", |answer| {
                        let whites = parse_number(answer)?;
                        GameConfig::validate_whites(players, undercovers, whites)?;
                        Ok(whites)
                    })?;
                    self.say(&format!("You selected {whites} mr. whites."))?;
                    self.process_event(&PromptFsmInput::WhitesSelected)?;
                }
                PromptFsmState::SelectingRounds => {
                    rounds = self.ask("How many rounds? ", |answer| {
                        let rounds = parse_number(answer)?;
                        GameConfig::validate_rounds(rounds)?;
                        Ok(rounds)
                    })?;
                    self.say(&format!("You selected {rounds} rounds."))?;
                    self.process_event(&PromptFsmInput::RoundsSelected)?;
                }
                PromptFsmState::Done => break,
            }
        }

        let config = GameConfig::new(&dictionary, players, undercovers, whites, rounds)?;
        log::info!(
            "Game configured. Dictionary: '{dictionary}', Players: '{players}', Undercovers: '{undercovers}', MrWhites: '{whites}', Rounds: '{rounds}'."
        );
        Ok(config)
    }

    fn ask<T>(
        &mut self,
        question: &str,
        validate: impl Fn(&str) -> Result<T, DomainError>,
    ) -> Result<T, Error> {
        loop {
            write!(self.output, "{question}").map_err(output_error)?;
            self.output.flush().map_err(output_error)?;

            let mut line = String::new();
            let read = self
                .input
                .read_line(&mut line)
                .map_err(|error| Error::InputUnreadable(error.to_string()))?;
            if read == 0 {
                log::error!("The input was closed while in state {}.", self.state());
                return Err(Error::InputClosed);
            }

            match validate(line.trim()) {
                Ok(value) => return Ok(value),
                Err(domain_error) => {
                    let error = Error::Domain(domain_error);
                    if !error.is_recoverable() {
                        return Err(error);
                    }
                    log::debug!("Rejected answer. State: '{}', Error: '{error}'.", self.state());
                    self.say(&error.to_string())?;
                }
            }
        }
    }

    fn say(&mut self, message: &str) -> Result<(), Error> {
        writeln!(self.output, "{message}").map_err(output_error)
    }

    fn process_event(&mut self, event: &PromptFsmInput) -> Result<(), Error> {
        match self.fsm.consume(event) {
            Ok(_) => Ok(()),
            Err(error) => Err(Error::log_and_create_internal(&format!(
                "The fsm in state {:?} can't transition with an event {:?}. Error: '{error}'.",
                self.fsm.state(),
                event
            ))),
        }
    }
}

fn parse_number(answer: &str) -> Result<usize, DomainError> {
    answer
        .parse::<usize>()
        .map_err(|_| DomainError::InvalidNumber(answer.to_string()))
}

fn output_error(error: std::io::Error) -> Error {
    Error::log_and_create_internal(&format!("Could not write to the output. Error: '{error}'."))
}
