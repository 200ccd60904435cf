use rand::seq::SliceRandom;
use rand::Rng;

pub const GRID_ROWS: usize = 4;
pub const GRID_COLS: usize = 4;

/// One of each symbol is paired with a twin, then the deck is shuffled.
/// Strings rather than chars so the snowflake can carry its emoji
/// variation selector and render double-width like the rest.
pub const SYMBOLS: [&str; 8] = ["🎄", "🎁", "🎅", "❄️", "⛄", "🦌", "🍬", "🔔"];

/// Reveal time before a matched pair locks in.
pub const MATCH_RESOLVE_MS: u64 = 500;
/// Reveal time before a mismatched pair flips back.
pub const MISMATCH_RESOLVE_MS: u64 = 1000;
/// Pause on the finished board before the round reports complete.
pub const COMPLETION_MS: u64 = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemoryCard {
    pub symbol: &'static str,
    pub face_up: bool,
    pub matched: bool,
}

/// A flipped pair waiting out its reveal window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingResolve {
    pub first: usize,
    pub second: usize,
    pub matched: bool,
    pub remaining_ms: u64,
}

#[derive(Debug, Clone)]
pub struct MemoryGame {
    /// Row-major 4x4 board.
    pub cards: Vec<MemoryCard>,
    pub cursor_row: usize,
    pub cursor_col: usize,
    /// First card of the pair in progress.
    pub first_pick: Option<usize>,
    pub pending: Option<PendingResolve>,
    /// Completed pair attempts.
    pub moves: u32,
    /// Countdown on the finished board, then `complete` flips.
    pub completion_ms: Option<u64>,
    pub complete: bool,
}

impl MemoryGame {
    pub fn new<R: Rng>(rng: &mut R) -> Self {
        let mut deck: Vec<&'static str> = SYMBOLS.iter().chain(SYMBOLS.iter()).copied().collect();
        deck.shuffle(rng);

        let cards = deck
            .into_iter()
            .map(|symbol| MemoryCard {
                symbol,
                face_up: false,
                matched: false,
            })
            .collect();

        Self {
            cards,
            cursor_row: GRID_ROWS / 2,
            cursor_col: GRID_COLS / 2,
            first_pick: None,
            pending: None,
            moves: 0,
            completion_ms: None,
            complete: false,
        }
    }

    /// Board index under the cursor.
    pub fn cursor_index(&self) -> usize {
        self.cursor_row * GRID_COLS + self.cursor_col
    }

    pub fn matched_pairs(&self) -> usize {
        self.cards.iter().filter(|c| c.matched).count() / 2
    }

    pub fn all_matched(&self) -> bool {
        self.cards.iter().all(|c| c.matched)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::collections::HashMap;

    #[test]
    fn test_new_deals_eight_shuffled_pairs() {
        let mut rng = ChaCha8Rng::seed_from_u64(12345);
        let game = MemoryGame::new(&mut rng);

        assert_eq!(game.cards.len(), GRID_ROWS * GRID_COLS);
        assert!(game.cards.iter().all(|c| !c.face_up && !c.matched));

        let mut counts: HashMap<&str, usize> = HashMap::new();
        for card in &game.cards {
            *counts.entry(card.symbol).or_default() += 1;
        }
        assert_eq!(counts.len(), SYMBOLS.len());
        assert!(counts.values().all(|&n| n == 2));
    }

    #[test]
    fn test_cursor_starts_centered() {
        let mut rng = ChaCha8Rng::seed_from_u64(12345);
        let game = MemoryGame::new(&mut rng);
        assert_eq!(game.cursor_row, GRID_ROWS / 2);
        assert_eq!(game.cursor_col, GRID_COLS / 2);
        assert_eq!(game.cursor_index(), GRID_ROWS / 2 * GRID_COLS + GRID_COLS / 2);
    }

    #[test]
    fn test_seeded_deals_reproduce() {
        let deal = || {
            let mut rng = ChaCha8Rng::seed_from_u64(99);
            MemoryGame::new(&mut rng)
                .cards
                .iter()
                .map(|c| c.symbol)
                .collect::<Vec<_>>()
        };
        assert_eq!(deal(), deal());
    }
}
