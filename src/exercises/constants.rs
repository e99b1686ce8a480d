// Constants shared by the exercises

/// Approximation of pi used by the shape exercises
pub const PI_APPROX: f64 = 3.14159;

/// Tokens shorter than this end the long-word scan
pub const LONG_WORD_MIN_LEN: usize = 8;

/// Keyboard poll interval for the exercise browser, in milliseconds
pub const UI_POLL_MS: u64 = 50;
