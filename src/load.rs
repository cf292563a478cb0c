//! Training Load (ACWR) Engine
//!
//! Acute load is the TRIMP sum over the 7 days ending at the anchor date.
//! Chronic load is the mean of the four 7-day windows before that, always
//! divided by four. Every anchor is recomputed from scratch.

use std::collections::BTreeMap;

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::constants::{
  ACWR_CAUTION_MAX, ACWR_OPTIMAL_MAX, ACWR_OPTIMAL_MIN, CHRONIC_WINDOWS, DEFAULT_RPE,
  DEFAULT_SESSION_DURATION_MIN, DISTANCE_LOAD_PER_KM, LOAD_HISTORY_WEEKS, LOAD_TREND_THRESHOLD_PCT,
  LOAD_WINDOW_DAYS,
};
use crate::models::Session;

/// ---------------------------------------------------------------------------
/// Per-Session Load
/// ---------------------------------------------------------------------------

/// TRIMP-style load: duration x RPE, plus 10 points per km for runs
pub fn session_load(session: &Session) -> f64 {
  let duration = session
    .duration_min
    .map(|d| d as f64)
    .unwrap_or(DEFAULT_SESSION_DURATION_MIN);
  let rpe = session.rpe.map(|r| r as f64).unwrap_or(DEFAULT_RPE);
  let distance_term = if session.is_running() {
    session.distance_km.unwrap_or(0.0) * DISTANCE_LOAD_PER_KM
  } else {
    0.0
  };

  duration * rpe + distance_term
}

/// Load summed per calendar day, built once per call
fn daily_loads(sessions: &[Session]) -> BTreeMap<NaiveDate, f64> {
  let mut days = BTreeMap::new();
  for session in sessions {
    *days.entry(session.date).or_insert(0.0) += session_load(session);
  }
  days
}

/// Sum of the 7-day window ending `weeks_before` weeks before `anchor`
fn window_load(days: &BTreeMap<NaiveDate, f64>, anchor: NaiveDate, weeks_before: i64) -> f64 {
  let end = anchor - Duration::days(weeks_before * LOAD_WINDOW_DAYS);
  let start = end - Duration::days(LOAD_WINDOW_DAYS - 1);
  days.range(start..=end).map(|(_, load)| load).sum()
}

/// ---------------------------------------------------------------------------
/// Zones & Trend
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadZone {
  /// ACWR < 0.8
  Undertraining,
  /// 0.8 <= ACWR <= 1.3
  Optimal,
  /// 1.3 < ACWR <= 1.5
  Caution,
  /// ACWR > 1.5
  Danger,
}

impl LoadZone {
  pub fn from_acwr(acwr: f64) -> Self {
    if acwr < ACWR_OPTIMAL_MIN {
      Self::Undertraining
    } else if acwr <= ACWR_OPTIMAL_MAX {
      Self::Optimal
    } else if acwr <= ACWR_CAUTION_MAX {
      Self::Caution
    } else {
      Self::Danger
    }
  }

  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Undertraining => "undertraining",
      Self::Optimal => "optimal",
      Self::Caution => "caution",
      Self::Danger => "danger",
    }
  }

  pub fn recommendation(&self) -> &'static str {
    match self {
      Self::Undertraining => "Training load is low. Build volume gradually.",
      Self::Optimal => "Training load is in the optimal zone. Keep it steady.",
      Self::Caution => "Load is climbing fast. Watch for fatigue and plan a lighter day.",
      Self::Danger => "Load spike. High injury risk, back off this week.",
    }
  }
}

impl std::fmt::Display for LoadZone {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.as_str())
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadTrend {
  Increasing,
  Stable,
  Decreasing,
}

impl LoadTrend {
  pub fn from_change_pct(pct: f64) -> Self {
    if pct > LOAD_TREND_THRESHOLD_PCT {
      Self::Increasing
    } else if pct < -LOAD_TREND_THRESHOLD_PCT {
      Self::Decreasing
    } else {
      Self::Stable
    }
  }
}

/// ---------------------------------------------------------------------------
/// Load Metrics
/// ---------------------------------------------------------------------------

/// Point-in-time training load status
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadMetrics {
  pub date: NaiveDate,

  /// TRIMP sum over the last 7 days
  pub acute_load: f64,

  /// Mean weekly TRIMP over the 4 weeks before the acute window
  pub chronic_load: f64,

  /// acute / chronic, 0 without chronic load
  pub acwr: f64,

  pub zone: LoadZone,

  /// Acute load vs the previous 7 days
  pub trend: LoadTrend,
  pub trend_pct: f64,

  pub recommendation: String,
}

impl LoadMetrics {
  /// Compute load status as of `today`
  pub fn compute(sessions: &[Session], today: NaiveDate) -> Self {
    let days = daily_loads(sessions);
    Self::at_anchor(&days, today)
  }

  fn at_anchor(days: &BTreeMap<NaiveDate, f64>, anchor: NaiveDate) -> Self {
    let acute_load = window_load(days, anchor, 0);
    let chronic_total: f64 = (1..=CHRONIC_WINDOWS)
      .map(|w| window_load(days, anchor, w))
      .sum();
    let chronic_load = chronic_total / CHRONIC_WINDOWS as f64;

    let acwr = if chronic_load > 0.0 {
      acute_load / chronic_load
    } else {
      0.0
    };
    let zone = LoadZone::from_acwr(acwr);

    let previous_acute = window_load(days, anchor, 1);
    let trend_pct = if previous_acute > 0.0 {
      (acute_load - previous_acute) * 100.0 / previous_acute
    } else {
      0.0
    };

    Self {
      date: anchor,
      acute_load,
      chronic_load,
      acwr,
      zone,
      trend: LoadTrend::from_change_pct(trend_pct),
      trend_pct,
      recommendation: zone.recommendation().to_string(),
    }
  }
}

/// One sample of the ACWR history chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadHistoryPoint {
  pub week_label: String,
  pub date: NaiveDate,
  pub acwr: f64,
  pub acute: f64,
  pub chronic: f64,
  pub zone: LoadZone,
}

/// ACWR anchored at today and each of the previous 7 weeks, oldest first
pub fn compute_load_history(sessions: &[Session], today: NaiveDate) -> Vec<LoadHistoryPoint> {
  let days = daily_loads(sessions);

  (0..LOAD_HISTORY_WEEKS)
    .rev()
    .map(|weeks_ago| {
      let anchor = today - Duration::weeks(weeks_ago);
      let metrics = LoadMetrics::at_anchor(&days, anchor);
      LoadHistoryPoint {
        week_label: anchor.format("%b %-d").to_string(),
        date: anchor,
        acwr: metrics.acwr,
        acute: metrics.acute_load,
        chronic: metrics.chronic_load,
        zone: metrics.zone,
      }
    })
    .collect()
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------
