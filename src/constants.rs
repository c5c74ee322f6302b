// Board geometry (fixed for the lifetime of the program)
pub const BOARD_ROWS: usize = 10;
pub const BOARD_COLS: usize = 10;

// Segment scoring
pub const SHORT_SEGMENT_LEN: usize = 3;
pub const LONG_SEGMENT_LEN: usize = 4;
pub const SEGMENT_LENGTHS: [usize; 2] = [SHORT_SEGMENT_LEN, LONG_SEGMENT_LEN];
pub const SHORT_SEGMENT_POINTS: u32 = 1;
pub const LONG_SEGMENT_POINTS: u32 = 2;

// Advisor heuristic: opponent gains are weighted this much heavier than own gains
pub const OPPONENT_GAIN_WEIGHT: f64 = 1.2;

// Tick and timing
pub const TICK_INTERVAL_MS: u64 = 100;
pub const INPUT_POLL_MS: u64 = 50;
pub const DEFAULT_THINK_DELAY_MS: u64 = 400;

// Config file
pub const CONFIG_APP_NAME: &str = "segments";
pub const CONFIG_FILE_NAME: &str = "config.json";
