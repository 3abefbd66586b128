use crate::deck::Deck;

const DOCUMENT_TITLE: &str = "Undercover";

pub fn render(deck: &Deck, stylesheet: &str) -> String {
    let mut html = format!(
        r#"<!DOCTYPE html>
<html>
  <head>
    <meta charset="utf-8">
    <title>{DOCUMENT_TITLE}</title>
    <link rel="stylesheet" href="{}">
  </head>
  <body>
"#,
        escape(stylesheet)
    );

    for round in deck.rounds() {
        for card in round.cards() {
            html.push_str(&format!(
                r#"    <div class="card">
      <div class="card__content">
        <span>{}</span>
      </div>
    </div>
"#,
                escape(card)
            ));
        }
    }

    html.push_str("  </body>\n</html>\n");
    html
}

/// Escapes the characters that are significant in HTML text and attribute values.
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for character in text.chars() {
        match character {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}
