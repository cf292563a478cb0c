//! Heuristic constants shared by the analytics engines
//!
//! These are product decisions, not physiology. Historical charts depend on
//! the exact values, so tune here and nowhere else.

/// ---------------------------------------------------------------------------
/// Training Load (TRIMP)
/// ---------------------------------------------------------------------------

/// Duration assumed for a session logged without one (minutes)
pub const DEFAULT_SESSION_DURATION_MIN: f64 = 60.0;

/// RPE assumed when the athlete didn't rate the session
pub const DEFAULT_RPE: f64 = 5.0;

/// Load points per running kilometre
pub const DISTANCE_LOAD_PER_KM: f64 = 10.0;

/// ---------------------------------------------------------------------------
/// ACWR Windows & Zones
/// ---------------------------------------------------------------------------

/// Length of the acute window and of each chronic window (days)
pub const LOAD_WINDOW_DAYS: i64 = 7;

/// Number of 7-day windows averaged into the chronic load
pub const CHRONIC_WINDOWS: i64 = 4;

/// Number of weekly anchors in the ACWR history chart
pub const LOAD_HISTORY_WEEKS: i64 = 8;

/// Below this ratio the athlete is undertraining
pub const ACWR_OPTIMAL_MIN: f64 = 0.8;

/// Upper bound (inclusive) of the optimal zone
pub const ACWR_OPTIMAL_MAX: f64 = 1.3;

/// Upper bound (inclusive) of the caution zone; above is danger
pub const ACWR_CAUTION_MAX: f64 = 1.5;

/// Week-over-week acute load change (percent) that counts as a trend
pub const LOAD_TREND_THRESHOLD_PCT: f64 = 10.0;

/// ---------------------------------------------------------------------------
/// Weekly Aggregation
/// ---------------------------------------------------------------------------

/// A climb this many grade steps above the weekly average is a near-limit attempt
pub const HARD_ATTEMPT_OFFSET: u8 = 1;

/// Week-over-week running distance increase (percent) that triggers a warning
pub const DISTANCE_SPIKE_PCT: f64 = 25.0;

/// RPE assumed for running load when the session has none
pub const RUNNING_DEFAULT_RPE: i64 = 5;

/// Longest history a weekly chart covers (ten years of weeks)
pub const MAX_WEEKS_BACK: u32 = 520;
