use crate::trivia::TriviaCard;

#[derive(Debug, Clone)]
pub struct FlashcardGame {
    pub deck: Vec<TriviaCard>,
    pub index: usize,
    /// Whether the current card's fact side is showing.
    pub revealed: bool,
    pub complete: bool,
}

impl FlashcardGame {
    pub fn new(deck: Vec<TriviaCard>) -> Self {
        // An empty deck has nothing to show
        let complete = deck.is_empty();
        Self {
            deck,
            index: 0,
            revealed: false,
            complete,
        }
    }

    pub fn current(&self) -> Option<&TriviaCard> {
        self.deck.get(self.index)
    }

    /// 1-based position for the "card X of Y" readout.
    pub fn position(&self) -> (usize, usize) {
        (self.index + 1, self.deck.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trivia::fallback_cards;

    #[test]
    fn test_new_starts_on_first_card_unrevealed() {
        let game = FlashcardGame::new(fallback_cards());
        assert_eq!(game.index, 0);
        assert!(!game.revealed);
        assert!(!game.complete);
        assert_eq!(game.position(), (1, 5));
        assert!(game.current().is_some());
    }

    #[test]
    fn test_empty_deck_is_complete_immediately() {
        let game = FlashcardGame::new(Vec::new());
        assert!(game.complete);
        assert!(game.current().is_none());
    }
}
