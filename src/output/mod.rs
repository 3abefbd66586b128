use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, SecondsFormat, Utc};

use crate::error::Error;
use crate::game_config::GameConfig;

const ILLEGAL_FILE_NAME_CHARACTERS: [char; 9] = [':', '/', '\\', '*', '?', '"', '<', '>', '|'];

/// `<timestamp> - <dictionary> - <p> players - <u> undercovers - <w> mr. whites - <r> rounds.html`
pub fn file_name(timestamp: &DateTime<Utc>, config: &GameConfig) -> String {
    let timestamp = timestamp.to_rfc3339_opts(SecondsFormat::Millis, true);
    let file_name = format!(
        "{timestamp} - {} - {} players - {} undercovers - {} mr. whites - {} rounds.html",
        config.dictionary(),
        config.players(),
        config.undercovers(),
        config.whites(),
        config.rounds()
    );
    file_name.replace(&ILLEGAL_FILE_NAME_CHARACTERS[..], "-")
}

/// The directory must already exist.
pub fn write(directory: &Path, file_name: &str, html: &str) -> Result<PathBuf, Error> {
    let path = directory.join(file_name);
    fs::write(&path, html).map_err(|error| {
        log::error!(
            "Could not write the HTML document. Path: '{}', Error: '{error}'.",
            path.display()
        );
        Error::OutputUnwritable(path.to_string_lossy().to_string(), error.to_string())
    })?;

    log::info!(
        "Wrote HTML document. Path: '{}', Bytes: '{}'.",
        path.display(),
        html.len()
    );
    Ok(path)
}
