use std::io::{BufRead, Write};
use std::path::PathBuf;

use chrono::Utc;

use crate::config::Config;
use crate::deck::Deck;
use crate::dictionary::DictionaryStore;
use crate::error::Error;
use crate::prompt::Prompter;
use crate::{html, output};

/// Runs one interactive session and returns the path of the written document.
pub fn run<R: BufRead, W: Write>(
    config: &Config,
    mut input: R,
    mut console: W,
) -> Result<PathBuf, Error> {
    let store = DictionaryStore::new(&config.dictionaries_directory);
    let dictionaries = store.list()?;

    let game_config = Prompter::new(&mut input, &mut console).ask_game_config(&dictionaries)?;

    let dictionary = store.load(game_config.dictionary())?;
    let deck = Deck::generate(dictionary, &game_config, config.seat_order())?;
    let html = html::render(&deck, &config.stylesheet);

    let file_name = output::file_name(&Utc::now(), &game_config);
    let path = output::write(&config.output_directory, &file_name, &html)?;

    writeln!(console, "Wrote HTML document to {}", path.display()).map_err(|error| {
        Error::log_and_create_internal(&format!(
            "Could not write to the output. Error: '{error}'."
        ))
    })?;
    Ok(path)
}
