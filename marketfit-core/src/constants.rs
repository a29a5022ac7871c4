/// marketfit version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Upper bound on sectors a single business description is classified into.
pub const MAX_SECTORS_PER_QUERY: usize = 3;

/// Number of characters in the year segment that prefixes every indicator key.
pub const YEAR_SEGMENT_LEN: usize = 4;

/// Decimal places kept on every composite score.
pub const SCORE_DECIMALS: u32 = 4;

/// Tolerance used when checking that a weight table sums to 1.0.
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;
