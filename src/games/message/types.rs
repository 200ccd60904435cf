/// Typing cadence for the letter body.
pub const PRIMARY_CHAR_MS: u64 = 60;
/// Typing cadence for the closing signature, slightly slower for weight.
pub const SECONDARY_CHAR_MS: u64 = 80;
/// Pause after the signature finishes before the heart appears.
pub const HEART_DELAY_MS: u64 = 800;
/// Cursor blink half-period.
pub const CURSOR_BLINK_MS: u64 = 500;

/// Letter body, typed first.
pub const PRIMARY_TEXT: &str = "Merry Christmas, brave courier. You outran the \
storm, matched every card, and aced the trivia. May your night be calm and \
bright, and every rooftop soft with snow.";
/// Closing signature, typed after the body.
pub const SECONDARY_TEXT: &str = "Your friends at the North Pole";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessagePhase {
    TypingPrimary,
    TypingSecondary,
    HeartPending,
    Done,
}

#[derive(Debug, Clone)]
pub struct MessageGame {
    pub primary: String,
    pub secondary: String,
    pub phase: MessagePhase,
    /// Characters of `primary` revealed so far.
    pub shown_primary: usize,
    /// Characters of `secondary` revealed so far.
    pub shown_secondary: usize,
    pub heart_visible: bool,
    /// Total time on screen; drives the cursor blink.
    pub elapsed_ms: u64,
    /// Accumulator toward the next character or the heart.
    pub timer_ms: u64,
}

impl MessageGame {
    pub fn new() -> Self {
        Self {
            primary: PRIMARY_TEXT.to_string(),
            secondary: SECONDARY_TEXT.to_string(),
            phase: MessagePhase::TypingPrimary,
            shown_primary: 0,
            shown_secondary: 0,
            heart_visible: false,
            elapsed_ms: 0,
            timer_ms: 0,
        }
    }

    /// Revealed prefix of the letter body.
    pub fn primary_visible(&self) -> String {
        self.primary.chars().take(self.shown_primary).collect()
    }

    /// Revealed prefix of the closing signature.
    pub fn secondary_visible(&self) -> String {
        self.secondary.chars().take(self.shown_secondary).collect()
    }

    /// The cursor blinks on a fixed cadence and only shows at the end
    /// of the line currently being typed.
    pub fn cursor_on(&self) -> bool {
        matches!(
            self.phase,
            MessagePhase::TypingPrimary | MessagePhase::TypingSecondary
        ) && (self.elapsed_ms / CURSOR_BLINK_MS) % 2 == 0
    }
}

impl Default for MessageGame {
    fn default() -> Self {
        Self::new()
    }
}
