use std::fs;
use std::path::PathBuf;

use glob::{glob_with, MatchOptions, Pattern};

use crate::error::domain_error::DomainError;
use crate::error::Error;

const DICTIONARY_EXTENSION: &str = "txt";

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WordPair {
    pub first: String,
    pub second: String,
}

impl WordPair {
    pub fn new(first: &str, second: &str) -> Self {
        WordPair {
            first: first.to_string(),
            second: second.to_string(),
        }
    }

    /// Identity of the pair regardless of the order of its words.
    pub fn key(&self) -> (&str, &str) {
        if self.first <= self.second {
            (self.first.as_str(), self.second.as_str())
        } else {
            (self.second.as_str(), self.first.as_str())
        }
    }

    pub fn into_words(self) -> [String; 2] {
        [self.first, self.second]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Dictionary {
    pub name: String,
    pub word_pairs: Vec<WordPair>,
}

impl Dictionary {
    /// One pair per line, the two words separated by a single comma. Blank lines are skipped.
    pub fn parse(name: &str, content: &str) -> Result<Self, DomainError> {
        let mut word_pairs = Vec::new();
        for (index, line) in content.split('\n').enumerate() {
            let line = line.strip_suffix('\r').unwrap_or(line);
            if line.trim().is_empty() {
                continue;
            }
            match line.split(',').collect::<Vec<&str>>().as_slice() {
                [first, second] => word_pairs.push(WordPair::new(first, second)),
                _ => {
                    return Err(DomainError::MalformedWordPair {
                        dictionary: name.to_string(),
                        line: index + 1,
                    })
                }
            }
        }

        Ok(Dictionary {
            name: name.to_string(),
            word_pairs,
        })
    }
}

pub struct DictionaryStore {
    directory: PathBuf,
}

impl DictionaryStore {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        DictionaryStore {
            directory: directory.into(),
        }
    }

    /// Sorted names of the dictionary files, without extension.
    pub fn list(&self) -> Result<Vec<String>, Error> {
        let directory = self.directory.to_string_lossy().to_string();
        if let Err(error) = fs::read_dir(&self.directory) {
            return Err(Error::DictionariesUnavailable(directory, error.to_string()));
        }

        let pattern = format!(
            "{}/*.{DICTIONARY_EXTENSION}",
            Pattern::escape(&directory)
        );
        let options = MatchOptions {
            require_literal_leading_dot: true,
            ..MatchOptions::new()
        };
        let paths = glob_with(&pattern, options).map_err(|error| {
            Error::log_and_create_internal(&format!(
                "Invalid dictionaries pattern. Pattern: '{pattern}', Error: '{error}'."
            ))
        })?;

        let mut names = Vec::new();
        for entry in paths {
            match entry {
                Ok(path) => match path.file_stem().and_then(|stem| stem.to_str()) {
                    Some(name) => names.push(name.to_string()),
                    None => log::debug!(
                        "Skipped dictionary file without a UTF-8 name. Path: '{}'.",
                        path.display()
                    ),
                },
                Err(error) => {
                    return Err(Error::DictionariesUnavailable(directory, error.to_string()))
                }
            }
        }
        names.sort();

        if names.is_empty() {
            return Err(Error::Domain(DomainError::NoDictionaries(directory)));
        }
        log::debug!(
            "Listed dictionaries. Directory: '{directory}', Dictionaries: '{}'.",
            names.join(",")
        );
        Ok(names)
    }

    pub fn load(&self, name: &str) -> Result<Dictionary, Error> {
        if !self.list()?.iter().any(|listed| listed == name) {
            return Err(Error::Domain(DomainError::DictionaryDoesNotExist(
                name.to_string(),
            )));
        }

        let path = self
            .directory
            .join(format!("{name}.{DICTIONARY_EXTENSION}"));
        let content = fs::read_to_string(&path).map_err(|error| {
            Error::DictionaryUnreadable(path.to_string_lossy().to_string(), error.to_string())
        })?;

        let dictionary = Dictionary::parse(name, &content)?;
        log::info!(
            "Loaded dictionary. Dictionary: '{name}', WordPairs: '{}'.",
            dictionary.word_pairs.len()
        );
        Ok(dictionary)
    }
}
