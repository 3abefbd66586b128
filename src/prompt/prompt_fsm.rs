use std::fmt;

use rust_fsm::state_machine;

/*
 * Dictionary
 * Players
 * Undercovers, bounded by players
 * Mr. whites, bounded by players minus undercovers
 * Rounds
 */
state_machine! {
    derive(Debug, Clone, PartialEq)
    pub PromptFsm(SelectingDictionary)

    SelectingDictionary => {
        DictionarySelected => SelectingPlayers
    },
    SelectingPlayers => {
        PlayersSelected => SelectingUndercovers
    },
    SelectingUndercovers => {
        UndercoversSelected => SelectingWhites
    },
    SelectingWhites => {
        WhitesSelected => SelectingRounds
    },
    SelectingRounds => {
        RoundsSelected => Done
    }
}

impl fmt::Display for PromptFsmState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}
