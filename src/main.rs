use std::io;
use std::process::ExitCode;

use undercover_cards::config::Config;
use undercover_cards::startup;

fn main() -> ExitCode {
    std_logger::Config::logfmt().init();

    let config = match Config::get() {
        Ok(config) => config,
        Err(error) => {
            log::error!("Unable to get the Config. Error: '{error}'.");
            eprintln!("ERROR: Unable to get the Config. {error}");
            return ExitCode::FAILURE;
        }
    };

    match startup::run(&config, io::stdin().lock(), io::stdout().lock()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(error) => {
            log::error!("The deck could not be generated. Error: '{error}'.");
            eprintln!("ERROR: {error}");
            ExitCode::FAILURE
        }
    }
}
