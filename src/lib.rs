pub mod config;
pub mod deck;
pub mod dictionary;
pub mod error;
pub mod game_config;
pub mod html;
pub mod output;
pub mod prompt;
pub mod round;
pub mod startup;
