use std::fs;
use std::io::Cursor;
use std::path::PathBuf;

use tempfile::TempDir;
use undercover_cards::config::Config;
use undercover_cards::error::Error;
use undercover_cards::startup;

pub struct TestApp {
    // Keeps the directories alive for the duration of the test
    _root: TempDir,
    pub config: Config,
}

pub struct RunOutput {
    pub result: Result<PathBuf, Error>,
    pub stdout: String,
}

impl TestApp {
    pub fn spawn(dictionaries: &[(&str, &str)]) -> TestApp {
        let root = tempfile::tempdir().expect("Failed to create a temporary directory.");
        let dictionaries_directory = root.path().join("dictionaries");
        let output_directory = root.path().join("output");
        fs::create_dir(&dictionaries_directory).expect("Failed to create dictionaries directory.");
        fs::create_dir(&output_directory).expect("Failed to create output directory.");
        for (name, content) in dictionaries {
            fs::write(dictionaries_directory.join(format!("{name}.txt")), content)
                .expect("Failed to write dictionary.");
        }

        TestApp {
            _root: root,
            config: Config {
                dictionaries_directory,
                output_directory,
                stylesheet: "../style.css".to_string(),
                shuffle_seats: false,
            },
        }
    }

    pub fn run(&self, answers: &str) -> RunOutput {
        let mut stdout = Vec::new();
        let result = startup::run(&self.config, Cursor::new(answers.to_string()), &mut stdout);
        RunOutput {
            result,
            stdout: String::from_utf8(stdout).expect("Output is not UTF-8."),
        }
    }

    pub fn written_documents(&self) -> Vec<PathBuf> {
        fs::read_dir(&self.config.output_directory)
            .expect("Failed to read output directory.")
            .map(|entry| entry.expect("Failed to read output entry.").path())
            .collect()
    }
}

/// The text of every card, in document order.
pub fn cards(html: &str) -> Vec<String> {
    html.split("<span>")
        .skip(1)
        .filter_map(|rest| rest.split("</span>").next())
        .map(|card| card.to_string())
        .collect()
}
