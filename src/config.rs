use std::path::PathBuf;

use config::ConfigError;
use serde::Deserialize;
use serde_aux::prelude::deserialize_bool_from_anything;

use crate::deck::SeatOrder;

const ENVIRONMENT_PREFIX: &str = "UNDERCOVER";

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Config {
    pub dictionaries_directory: PathBuf,
    pub output_directory: PathBuf,
    /// Stylesheet href as seen from a generated document.
    pub stylesheet: String,
    #[serde(deserialize_with = "deserialize_bool_from_anything")]
    pub shuffle_seats: bool,
}

impl Config {
    /// Defaults, then `config/base.yaml`, then `config/<ENVIRONMENT>.yaml`, then `UNDERCOVER_*` variables.
    pub fn get() -> Result<Config, ConfigError> {
        let base_path = std::env::current_dir().map_err(|error| {
            ConfigError::Message(format!(
                "Failed to determine the current directory. Error: '{error}'."
            ))
        })?;
        let configuration_directory = base_path.join("config");

        let mut builder = config::Config::builder()
            .set_default("dictionaries_directory", "dictionaries")?
            .set_default("output_directory", "output")?
            .set_default("stylesheet", "../style.css")?
            .set_default("shuffle_seats", false)?
            .add_source(
                config::File::from(configuration_directory.join("base.yaml")).required(false),
            );

        if let Ok(environment) = std::env::var("ENVIRONMENT") {
            let environment: Environment = environment.try_into().map_err(ConfigError::Message)?;
            let environment_filename = format!("{}.yaml", environment.as_str());
            builder = builder.add_source(
                config::File::from(configuration_directory.join(environment_filename))
                    .required(false),
            );
        }

        let config = builder
            .add_source(config::Environment::with_prefix(ENVIRONMENT_PREFIX))
            .build()?;

        config.try_deserialize::<Config>()
    }

    pub fn seat_order(&self) -> SeatOrder {
        if self.shuffle_seats {
            SeatOrder::Shuffled
        } else {
            SeatOrder::Fixed
        }
    }
}

enum Environment {
    Dev,
    Prod,
}

const DEV: &str = "dev";
const PROD: &str = "prod";

impl Environment {
    fn as_str(&self) -> &'static str {
        match self {
            Environment::Dev => DEV,
            Environment::Prod => PROD,
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(string: String) -> Result<Self, Self::Error> {
        match string.to_lowercase().as_str() {
            DEV => Ok(Self::Dev),
            PROD => Ok(Self::Prod),
            other => Err(format!(
                "{other} is not a supported environment. Use either `{DEV}` or `{PROD}`.",
            )),
        }
    }
}
