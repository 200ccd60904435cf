//! Typewriter pacing for the closing message.

use super::types::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageInput {
    /// Any key: jump straight to the fully typed message.
    Skip,
    Other,
}

pub fn process_input(game: &mut MessageGame, input: MessageInput) {
    if game.phase == MessagePhase::Done {
        return;
    }
    if input == MessageInput::Skip {
        game.shown_primary = game.primary.chars().count();
        game.shown_secondary = game.secondary.chars().count();
        game.heart_visible = true;
        game.phase = MessagePhase::Done;
    }
}

/// Advance the typewriter. One character per cadence interval, with
/// catch-up when a tick spans several intervals.
pub fn tick_message(game: &mut MessageGame, dt_ms: u64) {
    game.elapsed_ms += dt_ms;

    match game.phase {
        MessagePhase::TypingPrimary => {
            let total = game.primary.chars().count();
            game.timer_ms += dt_ms;
            while game.timer_ms >= PRIMARY_CHAR_MS && game.shown_primary < total {
                game.timer_ms -= PRIMARY_CHAR_MS;
                game.shown_primary += 1;
            }
            if game.shown_primary >= total {
                game.phase = MessagePhase::TypingSecondary;
                game.timer_ms = 0;
            }
        }
        MessagePhase::TypingSecondary => {
            let total = game.secondary.chars().count();
            game.timer_ms += dt_ms;
            while game.timer_ms >= SECONDARY_CHAR_MS && game.shown_secondary < total {
                game.timer_ms -= SECONDARY_CHAR_MS;
                game.shown_secondary += 1;
            }
            if game.shown_secondary >= total {
                game.phase = MessagePhase::HeartPending;
                game.timer_ms = 0;
            }
        }
        MessagePhase::HeartPending => {
            game.timer_ms += dt_ms;
            if game.timer_ms >= HEART_DELAY_MS {
                game.heart_visible = true;
                game.phase = MessagePhase::Done;
                game.timer_ms = 0;
            }
        }
        MessagePhase::Done => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_types_one_char_per_interval() {
        let mut game = MessageGame::new();

        tick_message(&mut game, PRIMARY_CHAR_MS - 1);
        assert_eq!(game.shown_primary, 0);

        tick_message(&mut game, 1);
        assert_eq!(game.shown_primary, 1);
        assert_eq!(game.primary_visible(), "M");

        // A long tick catches up several characters at once
        tick_message(&mut game, PRIMARY_CHAR_MS * 5);
        assert_eq!(game.shown_primary, 6);
    }

    #[test]
    fn test_phases_run_in_sequence() {
        let mut game = MessageGame::new();
        let primary_len = game.primary.chars().count() as u64;
        let secondary_len = game.secondary.chars().count() as u64;

        tick_message(&mut game, primary_len * PRIMARY_CHAR_MS);
        assert_eq!(game.phase, MessagePhase::TypingSecondary);
        assert_eq!(game.primary_visible(), PRIMARY_TEXT);
        assert_eq!(game.shown_secondary, 0);

        tick_message(&mut game, secondary_len * SECONDARY_CHAR_MS);
        assert_eq!(game.phase, MessagePhase::HeartPending);
        assert_eq!(game.secondary_visible(), SECONDARY_TEXT);
        assert!(!game.heart_visible);

        tick_message(&mut game, HEART_DELAY_MS - 1);
        assert!(!game.heart_visible);
        tick_message(&mut game, 1);
        assert!(game.heart_visible);
        assert_eq!(game.phase, MessagePhase::Done);
    }

    #[test]
    fn test_skip_reveals_everything_at_once() {
        let mut game = MessageGame::new();
        tick_message(&mut game, PRIMARY_CHAR_MS * 3);

        process_input(&mut game, MessageInput::Skip);
        assert_eq!(game.primary_visible(), PRIMARY_TEXT);
        assert_eq!(game.secondary_visible(), SECONDARY_TEXT);
        assert!(game.heart_visible);
        assert_eq!(game.phase, MessagePhase::Done);

        // Further ticks and skips are no-ops
        tick_message(&mut game, 10_000);
        process_input(&mut game, MessageInput::Skip);
        assert_eq!(game.phase, MessagePhase::Done);
    }

    #[test]
    fn test_cursor_blinks_then_rests() {
        let mut game = MessageGame::new();
        assert!(game.cursor_on());

        tick_message(&mut game, CURSOR_BLINK_MS);
        assert!(!game.cursor_on());
        tick_message(&mut game, CURSOR_BLINK_MS);
        assert!(game.cursor_on());

        process_input(&mut game, MessageInput::Skip);
        assert!(!game.cursor_on());
    }

    #[test]
    fn test_other_input_never_skips() {
        let mut game = MessageGame::new();
        process_input(&mut game, MessageInput::Other);
        assert_eq!(game.shown_primary, 0);
        assert_eq!(game.phase, MessagePhase::TypingPrimary);
    }
}
