//! Frecency scoring.
//!
//! A tracked directory's score combines how often it is visited with how
//! recently: the score halves every nine days of inactivity and drops to
//! zero outright once the directory has gone unvisited for a month.

/// Entries older than this many minutes (30 days) score zero.
pub const STALE_CUTOFF_MINUTES: f64 = 43_200.0;

/// Half-life divisor: the score halves every 12960 minutes (9 days).
pub const HALF_LIFE_MINUTES: f64 = 12_960.0;

/// Fixed baseline shift on the age. Empirically tuned so that
/// recently-added, rarely-visited entries sit below heavily-visited
/// older ones in the typical operating range.
pub const AGE_OFFSET_MINUTES: f64 = 58_000.0;

/// Scale factor on the decayed frequency.
pub const SCORE_SCALE: f64 = 1_000.0;

/// Entries must score strictly above this to survive pruning.
/// Distinct from the stale cutoff: a low-frequency entry can decay
/// below this threshold while still inside the 30-day window.
pub const PRUNE_THRESHOLD: f64 = 1.0;

/// Compute the frecency score of an entry at time `now`.
///
/// Pure and deterministic in `(frequency, last_visited, now)`.
/// Both timestamps are seconds since the Unix epoch.
pub fn score(frequency: u64, last_visited: i64, now: i64) -> f64 {
    let age_minutes = (now - last_visited) as f64 / 60.0;
    if age_minutes > STALE_CUTOFF_MINUTES {
        return 0.0;
    }
    SCORE_SCALE
        * frequency as f64
        * f64::exp2(-(age_minutes + AGE_OFFSET_MINUTES) / HALF_LIFE_MINUTES)
}
