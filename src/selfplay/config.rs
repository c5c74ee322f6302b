//! Self-play configuration.

/// Configuration for a self-play run.
#[derive(Debug, Clone)]
pub struct SelfPlayConfig {
    /// Number of games to play
    pub num_games: u32,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,

    /// Random plies played before the advisor takes over both sides
    pub opening_plies: usize,

    /// Log verbosity (0 = silent, 1 = summary, 2 = per game)
    pub verbosity: u8,
}

impl Default for SelfPlayConfig {
    fn default() -> Self {
        Self {
            num_games: 20,
            seed: None,
            opening_plies: 4,
            verbosity: 1,
        }
    }
}

impl SelfPlayConfig {
    /// Single deterministic game with no random opening
    pub fn pure_advisor() -> Self {
        Self {
            num_games: 1,
            seed: Some(0),
            opening_plies: 0,
            ..Default::default()
        }
    }
}
