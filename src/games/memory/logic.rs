//! Memory Match rules: cursor movement, card flips, pair resolution.

use super::types::*;

/// UI-agnostic input actions for the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemoryInput {
    Up,
    Down,
    Left,
    Right,
    Flip,
    Other,
}

pub fn process_input(game: &mut MemoryGame, input: MemoryInput) {
    if game.complete || game.completion_ms.is_some() {
        return;
    }

    match input {
        MemoryInput::Up => game.cursor_row = game.cursor_row.saturating_sub(1),
        MemoryInput::Down => game.cursor_row = (game.cursor_row + 1).min(GRID_ROWS - 1),
        MemoryInput::Left => game.cursor_col = game.cursor_col.saturating_sub(1),
        MemoryInput::Right => game.cursor_col = (game.cursor_col + 1).min(GRID_COLS - 1),
        MemoryInput::Flip => flip_card(game),
        MemoryInput::Other => {}
    }
}

/// Flip the card under the cursor. Ignored while a pair is resolving, or
/// when the card is already face-up.
fn flip_card(game: &mut MemoryGame) {
    if game.pending.is_some() {
        return;
    }

    let idx = game.cursor_index();
    let card = &mut game.cards[idx];
    if card.face_up || card.matched {
        return;
    }
    card.face_up = true;

    match game.first_pick.take() {
        None => game.first_pick = Some(idx),
        Some(first) => {
            game.moves += 1;
            let matched = game.cards[first].symbol == game.cards[idx].symbol;
            game.pending = Some(PendingResolve {
                first,
                second: idx,
                matched,
                remaining_ms: if matched {
                    MATCH_RESOLVE_MS
                } else {
                    MISMATCH_RESOLVE_MS
                },
            });
        }
    }
}

/// Run the reveal and completion timers.
pub fn tick_memory(game: &mut MemoryGame, dt_ms: u64) {
    if game.complete {
        return;
    }

    if let Some(pending) = &mut game.pending {
        if pending.remaining_ms > dt_ms {
            pending.remaining_ms -= dt_ms;
            return;
        }
        let resolved = *pending;
        game.pending = None;

        if resolved.matched {
            game.cards[resolved.first].matched = true;
            game.cards[resolved.second].matched = true;
            if game.all_matched() {
                game.completion_ms = Some(COMPLETION_MS);
            }
        } else {
            game.cards[resolved.first].face_up = false;
            game.cards[resolved.second].face_up = false;
        }
        return;
    }

    if let Some(remaining) = &mut game.completion_ms {
        if *remaining > dt_ms {
            *remaining -= dt_ms;
        } else {
            game.completion_ms = None;
            game.complete = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn new_game() -> MemoryGame {
        let mut rng = ChaCha8Rng::seed_from_u64(12345);
        MemoryGame::new(&mut rng)
    }

    fn cursor_to(game: &mut MemoryGame, idx: usize) {
        game.cursor_row = idx / GRID_COLS;
        game.cursor_col = idx % GRID_COLS;
    }

    /// Indices of the twin of `cards[0]` and of one card that does not
    /// match it.
    fn pair_and_odd(game: &MemoryGame) -> (usize, usize) {
        let symbol = game.cards[0].symbol;
        let twin = (1..game.cards.len())
            .find(|&i| game.cards[i].symbol == symbol)
            .unwrap();
        let odd = (1..game.cards.len())
            .find(|&i| game.cards[i].symbol != symbol)
            .unwrap();
        (twin, odd)
    }

    // ── Cursor ──────────────────────────────────────────────────────────

    #[test]
    fn test_cursor_saturates_at_the_edges() {
        let mut game = new_game();

        for _ in 0..10 {
            process_input(&mut game, MemoryInput::Up);
            process_input(&mut game, MemoryInput::Left);
        }
        assert_eq!((game.cursor_row, game.cursor_col), (0, 0));

        for _ in 0..10 {
            process_input(&mut game, MemoryInput::Down);
            process_input(&mut game, MemoryInput::Right);
        }
        assert_eq!(
            (game.cursor_row, game.cursor_col),
            (GRID_ROWS - 1, GRID_COLS - 1)
        );
    }

    // ── Flipping ────────────────────────────────────────────────────────

    #[test]
    fn test_first_flip_stays_up() {
        let mut game = new_game();
        cursor_to(&mut game, 0);
        process_input(&mut game, MemoryInput::Flip);

        assert!(game.cards[0].face_up);
        assert_eq!(game.first_pick, Some(0));
        assert_eq!(game.moves, 0);
        assert!(game.pending.is_none());
    }

    #[test]
    fn test_reflipping_the_same_card_is_ignored() {
        let mut game = new_game();
        cursor_to(&mut game, 0);
        process_input(&mut game, MemoryInput::Flip);
        process_input(&mut game, MemoryInput::Flip);

        assert_eq!(game.first_pick, Some(0));
        assert_eq!(game.moves, 0);
        assert!(game.pending.is_none());
    }

    #[test]
    fn test_matching_pair_locks_after_reveal() {
        let mut game = new_game();
        let (twin, _) = pair_and_odd(&game);

        cursor_to(&mut game, 0);
        process_input(&mut game, MemoryInput::Flip);
        cursor_to(&mut game, twin);
        process_input(&mut game, MemoryInput::Flip);

        assert_eq!(game.moves, 1);
        let pending = game.pending.unwrap();
        assert!(pending.matched);

        // Reveal window still open
        tick_memory(&mut game, MATCH_RESOLVE_MS - 1);
        assert!(game.pending.is_some());
        assert!(!game.cards[0].matched);

        tick_memory(&mut game, 1);
        assert!(game.pending.is_none());
        assert!(game.cards[0].matched && game.cards[twin].matched);
        assert!(game.cards[0].face_up && game.cards[twin].face_up);
    }

    #[test]
    fn test_mismatch_flips_back_after_reveal() {
        let mut game = new_game();
        let (_, odd) = pair_and_odd(&game);

        cursor_to(&mut game, 0);
        process_input(&mut game, MemoryInput::Flip);
        cursor_to(&mut game, odd);
        process_input(&mut game, MemoryInput::Flip);

        assert_eq!(game.moves, 1);
        assert!(!game.pending.unwrap().matched);

        tick_memory(&mut game, MISMATCH_RESOLVE_MS);
        assert!(game.pending.is_none());
        assert!(!game.cards[0].face_up && !game.cards[odd].face_up);
        assert!(!game.cards[0].matched && !game.cards[odd].matched);
    }

    #[test]
    fn test_third_flip_blocked_while_pair_resolves() {
        let mut game = new_game();
        let (_, odd) = pair_and_odd(&game);

        cursor_to(&mut game, 0);
        process_input(&mut game, MemoryInput::Flip);
        cursor_to(&mut game, odd);
        process_input(&mut game, MemoryInput::Flip);

        // A third card cannot join the pair mid-reveal
        let third = (1..game.cards.len())
            .find(|&i| i != odd && !game.cards[i].face_up)
            .unwrap();
        cursor_to(&mut game, third);
        process_input(&mut game, MemoryInput::Flip);
        assert!(!game.cards[third].face_up);
        assert_eq!(game.moves, 1);
    }

    #[test]
    fn test_cursor_still_moves_during_reveal() {
        let mut game = new_game();
        let (_, odd) = pair_and_odd(&game);

        cursor_to(&mut game, 0);
        process_input(&mut game, MemoryInput::Flip);
        cursor_to(&mut game, odd);
        process_input(&mut game, MemoryInput::Flip);

        cursor_to(&mut game, 0);
        process_input(&mut game, MemoryInput::Down);
        assert_eq!(game.cursor_row, 1);
    }

    // ── Completion ──────────────────────────────────────────────────────

    #[test]
    fn test_last_match_starts_completion_countdown() {
        let mut game = new_game();
        let (twin, _) = pair_and_odd(&game);

        // All but the test pair already matched
        for (i, card) in game.cards.iter_mut().enumerate() {
            if i != 0 && i != twin {
                card.face_up = true;
                card.matched = true;
            }
        }

        cursor_to(&mut game, 0);
        process_input(&mut game, MemoryInput::Flip);
        cursor_to(&mut game, twin);
        process_input(&mut game, MemoryInput::Flip);
        tick_memory(&mut game, MATCH_RESOLVE_MS);

        assert!(game.all_matched());
        assert_eq!(game.matched_pairs(), 8);
        assert_eq!(game.completion_ms, Some(COMPLETION_MS));
        assert!(!game.complete);

        // Input is shut off during the pause
        process_input(&mut game, MemoryInput::Down);
        assert_eq!(game.cursor_row, twin / GRID_COLS);

        tick_memory(&mut game, COMPLETION_MS);
        assert!(game.complete);
        assert!(game.completion_ms.is_none());
    }

    #[test]
    fn test_complete_board_ignores_everything() {
        let mut game = new_game();
        game.complete = true;

        process_input(&mut game, MemoryInput::Flip);
        assert!(game.cards.iter().all(|c| !c.face_up));
        tick_memory(&mut game, 10_000);
        assert!(game.complete);
    }
}
