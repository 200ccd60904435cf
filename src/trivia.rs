//! Christmas trivia deck: fetched from the feed when the network
//! cooperates, served from the bundled deck when it does not.

use serde::Deserialize;
use std::error::Error;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crate::constants::{TRIVIA_URL, TRIVIA_USER_AGENT};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TriviaCard {
    pub id: u32,
    pub topic: String,
    pub fact: String,
}

/// Fetch the trivia deck from `url`. Errors on network failure, bad
/// JSON, or an empty deck.
pub fn fetch_trivia(url: &str) -> Result<Vec<TriviaCard>, Box<dyn Error>> {
    let cards: Vec<TriviaCard> = ureq::get(url)
        .set("User-Agent", TRIVIA_USER_AGENT)
        .timeout(Duration::from_secs(5))
        .call()?
        .into_json()?;

    if cards.is_empty() {
        return Err("trivia feed returned no cards".into());
    }
    Ok(cards)
}

/// The deck shown when the feed is unreachable. Always non-empty.
pub fn fallback_cards() -> Vec<TriviaCard> {
    vec![
        TriviaCard {
            id: 1,
            topic: "Reindeer".to_string(),
            fact: "Santa's reindeer are likely all female: male reindeer shed \
                   their antlers before winter, and the sleigh team is always \
                   drawn with a full rack."
                .to_string(),
        },
        TriviaCard {
            id: 2,
            topic: "Christmas Trees".to_string(),
            fact: "The first artificial Christmas trees were made in Germany \
                   from dyed goose feathers."
                .to_string(),
        },
        TriviaCard {
            id: 3,
            topic: "Mistletoe".to_string(),
            fact: "Mistletoe is a parasitic plant. It sinks roots into a host \
                   tree and siphons off its water and nutrients."
                .to_string(),
        },
        TriviaCard {
            id: 4,
            topic: "Santa's Suit".to_string(),
            fact: "Santa wore red long before Coca-Cola's ads, though their \
                   1930s campaign cemented the look."
                .to_string(),
        },
        TriviaCard {
            id: 5,
            topic: "Jingle Bells".to_string(),
            fact: "\"Jingle Bells\" was originally written for Thanksgiving, \
                   not Christmas."
                .to_string(),
        },
    ]
}

/// Fetch the live deck, falling back to the bundled one. Never fails
/// and never returns an empty deck.
pub fn load_trivia() -> Vec<TriviaCard> {
    fetch_trivia(TRIVIA_URL).unwrap_or_else(|_| fallback_cards())
}

/// Kick off the deck fetch on a background thread so the memory round
/// can play while it loads.
pub fn spawn_trivia_fetch() -> JoinHandle<Vec<TriviaCard>> {
    thread::spawn(load_trivia)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_deck_is_usable() {
        let cards = fallback_cards();
        assert_eq!(cards.len(), 5);
        assert!(cards.iter().all(|c| !c.topic.is_empty()));
        assert!(cards.iter().all(|c| !c.fact.is_empty()));

        let mut ids: Vec<u32> = cards.iter().map(|c| c.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 5);
    }

    #[test]
    fn test_card_parses_from_feed_json() {
        let json = r#"[{"id": 7, "topic": "Snow", "fact": "No two alike."}]"#;
        let cards: Vec<TriviaCard> = serde_json::from_str(json).unwrap();
        assert_eq!(
            cards,
            vec![TriviaCard {
                id: 7,
                topic: "Snow".to_string(),
                fact: "No two alike.".to_string(),
            }]
        );
    }

    #[test]
    fn test_card_tolerates_extra_feed_fields() {
        let json = r#"[{"id": 1, "topic": "T", "fact": "F", "source": "elf"}]"#;
        let cards: Vec<TriviaCard> = serde_json::from_str(json).unwrap();
        assert_eq!(cards[0].topic, "T");
    }
}
