//! Flashcard pacing: reveal the fact before moving on.

use super::types::FlashcardGame;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashcardInput {
    /// Reveal the current card, or step to the next one once revealed.
    Advance,
    Other,
}

pub fn process_input(game: &mut FlashcardGame, input: FlashcardInput) {
    if game.complete {
        return;
    }

    match input {
        FlashcardInput::Advance => {
            if !game.revealed {
                game.revealed = true;
            } else if game.index + 1 < game.deck.len() {
                game.index += 1;
                game.revealed = false;
            } else {
                game.complete = true;
            }
        }
        FlashcardInput::Other => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trivia::fallback_cards;

    fn advance(game: &mut FlashcardGame) {
        process_input(game, FlashcardInput::Advance);
    }

    #[test]
    fn test_advance_reveals_before_stepping() {
        let mut game = FlashcardGame::new(fallback_cards());

        advance(&mut game);
        assert!(game.revealed);
        assert_eq!(game.index, 0);

        advance(&mut game);
        assert!(!game.revealed);
        assert_eq!(game.index, 1);
    }

    #[test]
    fn test_completes_after_last_card_revealed() {
        let mut game = FlashcardGame::new(fallback_cards());
        let len = game.deck.len();

        // Two presses per card: reveal, then step
        for _ in 0..len {
            advance(&mut game);
            advance(&mut game);
        }
        assert!(game.complete);
        assert_eq!(game.index, len - 1);
    }

    #[test]
    fn test_other_keys_do_nothing() {
        let mut game = FlashcardGame::new(fallback_cards());
        process_input(&mut game, FlashcardInput::Other);
        assert!(!game.revealed);
        assert_eq!(game.index, 0);
    }

    #[test]
    fn test_complete_deck_ignores_input() {
        let mut game = FlashcardGame::new(fallback_cards());
        game.complete = true;
        advance(&mut game);
        assert_eq!(game.index, 0);
        assert!(!game.revealed);
    }
}
