use std::fs;

use undercover_cards::error::{domain_error::DomainError, Error};

use crate::helpers::{cards, TestApp};

#[test]
fn generate_writes_one_card_per_player() {
    let app = TestApp::spawn(&[("animals", "cat,dog\nsun,moon")]);

    let output = app.run("animals\n4\n1\n1\n1\n");

    let path = output.result.expect("Failed to generate the deck.");
    assert_eq!(app.written_documents(), vec![path.clone()]);
    assert!(output
        .stdout
        .ends_with(&format!("Wrote HTML document to {}\n", path.display())));

    let cards = cards(&fs::read_to_string(&path).unwrap());
    assert_eq!(cards.len(), 4);
    assert_eq!(cards[1], "mr. white");
    assert_eq!(cards[2], cards[3]);
    assert_ne!(cards[0], cards[2]);
    let mut pair = vec![cards[0].as_str(), cards[2].as_str()];
    pair.sort();
    assert!(pair == vec!["cat", "dog"] || pair == vec!["moon", "sun"]);
}

#[test]
fn generate_names_the_file_after_the_configuration() {
    let app = TestApp::spawn(&[("food", "pizza,pasta\ntea,coffee\nsalt,pepper")]);

    let path = app.run("food\n5\n1\n0\n3\n").result.unwrap();

    let file_name = path.file_name().unwrap().to_str().unwrap();
    assert!(file_name.ends_with(
        " - food - 5 players - 1 undercovers - 0 mr. whites - 3 rounds.html"
    ));
    assert!(!file_name.contains(':'));
}

#[test]
fn generate_uses_a_different_pair_every_round() {
    let app = TestApp::spawn(&[("food", "pizza,pasta\ntea,coffee\nsalt,pepper\n")]);

    let path = app.run("food\n3\n1\n0\n3\n").result.unwrap();

    let cards = cards(&fs::read_to_string(path).unwrap());
    assert_eq!(cards.len(), 9);
    let mut rounds: Vec<Vec<String>> = cards
        .chunks(3)
        .map(|round| {
            let mut words = vec![round[0].clone(), round[1].clone()];
            words.sort();
            words
        })
        .collect();
    rounds.sort();
    assert_eq!(
        rounds,
        vec![
            vec!["coffee".to_string(), "tea".to_string()],
            vec!["pasta".to_string(), "pizza".to_string()],
            vec!["pepper".to_string(), "salt".to_string()],
        ]
    );
}

#[test]
fn generate_reprompts_invalid_answers() {
    let app = TestApp::spawn(&[("animals", "cat,dog")]);

    let output = app.run("plants\nanimals\n2\n3\n3\n1\n2\n0\n0\n1\n");

    assert!(output.result.is_ok());
    assert!(output.stdout.contains("The dictionary plants does not exist."));
    assert!(output.stdout.contains("You must have at least 3 players."));
    assert!(output
        .stdout
        .contains("You must have fewer undercovers than players."));
    assert!(output
        .stdout
        .contains("You must have fewer mr. whites than players minus undercovers."));
    assert!(output.stdout.contains("You must have at least 1 round."));
}

#[test]
fn generate_fails_without_writing_when_rounds_exceed_word_pairs() {
    let app = TestApp::spawn(&[("animals", "cat,dog\nsun,moon")]);

    let output = app.run("animals\n4\n1\n1\n3\n");

    assert_eq!(
        output.result,
        Err(Error::Domain(DomainError::NotEnoughWordPairs {
            available: 2,
            requested: 3
        }))
    );
    assert!(app.written_documents().is_empty());
}

#[test]
fn generate_fails_when_output_directory_is_missing() {
    let mut app = TestApp::spawn(&[("animals", "cat,dog")]);
    app.config.output_directory = app.config.output_directory.join("missing");

    let output = app.run("animals\n3\n1\n0\n1\n");

    assert!(matches!(output.result, Err(Error::OutputUnwritable(_, _))));
}

#[test]
fn generate_fails_on_malformed_dictionary() {
    let app = TestApp::spawn(&[("broken", "cat,dog\nsun")]);

    let output = app.run("broken\n3\n1\n0\n1\n");

    assert_eq!(
        output.result,
        Err(Error::Domain(DomainError::MalformedWordPair {
            dictionary: "broken".to_string(),
            line: 2
        }))
    );
    assert!(app.written_documents().is_empty());
}

#[test]
fn generate_fails_without_dictionaries() {
    let app = TestApp::spawn(&[]);

    let output = app.run("");

    assert!(matches!(
        output.result,
        Err(Error::Domain(DomainError::NoDictionaries(_)))
    ));
    assert!(output.stdout.is_empty());
}

#[test]
fn generate_escapes_words_in_the_document() {
    let app = TestApp::spawn(&[("markup", "<b>bold</b>,a & b")]);

    let path = app.run("markup\n3\n1\n0\n1\n").result.unwrap();

    let html = fs::read_to_string(path).unwrap();
    assert!(!html.contains("<b>"));
    assert!(html.contains("&lt;b&gt;bold&lt;/b&gt;"));
    assert!(html.contains("a &amp; b"));
}

#[test]
fn generate_with_shuffled_seats_keeps_role_counts() {
    let mut app = TestApp::spawn(&[("animals", "cat,dog")]);
    app.config.shuffle_seats = true;

    let path = app.run("animals\n6\n2\n1\n1\n").result.unwrap();

    let cards = cards(&fs::read_to_string(path).unwrap());
    assert_eq!(cards.len(), 6);
    assert_eq!(cards.iter().filter(|card| *card == "mr. white").count(), 1);
    let cats = cards.iter().filter(|card| *card == "cat").count();
    let dogs = cards.iter().filter(|card| *card == "dog").count();
    assert!((cats, dogs) == (2, 3) || (cats, dogs) == (3, 2));
}
