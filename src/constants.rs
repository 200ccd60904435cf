// Frame pacing constants
/// Input poll timeout for the main loop. Real-time screens accumulate the
/// elapsed time and step their simulation at a fixed internal rate.
pub const FRAME_POLL_MS: u64 = 25;

/// How long the victory interstitial lingers before the memory board.
pub const WON_SCREEN_MS: u64 = 2500;

// Trivia source
/// Endpoint queried for trivia cards. Any failure falls back to the
/// built-in deck, so this never has to resolve.
pub const TRIVIA_URL: &str = "https://santadash.dev/api/trivia";
pub const TRIVIA_USER_AGENT: &str = "santa-dash";
