//! Weekly Aggregation Engine
//!
//! Buckets a flat session list into Monday-to-Sunday weeks ending at the
//! injected `today` and computes one metrics record per week, separately
//! for climbing (per modality) and running.
//!
//! Sessions are partitioned in a single pass; each week only ever sees its
//! own sessions.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::constants::{
  DISTANCE_SPIKE_PCT, HARD_ATTEMPT_OFFSET, MAX_WEEKS_BACK, RUNNING_DEFAULT_RPE,
};
use crate::grades::{grade_label, GradeIndex};
use crate::models::{Discipline, Session};

/// ---------------------------------------------------------------------------
/// Modality: which climbs a progression chart looks at
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[derive(Default)]
pub enum Modality {
  #[default]
  Boulder,
  Autobelay,
  Rope,
}

impl Modality {
  /// Storage-level discipline selected by this modality.
  ///
  /// Autobelay and rope both map to routes: the climbs table has no way to
  /// tell them apart, so their charts are identical.
  pub fn discipline(&self) -> Discipline {
    match self {
      Self::Boulder => Discipline::Boulder,
      Self::Autobelay | Self::Rope => Discipline::Route,
    }
  }

  fn ungraded(&self) -> GradeIndex {
    match self.discipline() {
      Discipline::Boulder => GradeIndex::Boulder(0),
      Discipline::Route => GradeIndex::Route(0),
    }
  }
}

impl std::fmt::Display for Modality {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::Boulder => write!(f, "boulder"),
      Self::Autobelay => write!(f, "autobelay"),
      Self::Rope => write!(f, "rope"),
    }
  }
}

impl std::str::FromStr for Modality {
  type Err = String;
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim().to_lowercase().as_str() {
      "boulder" => Ok(Self::Boulder),
      "autobelay" => Ok(Self::Autobelay),
      "rope" => Ok(Self::Rope),
      _ => Err(format!("Unknown modality: {}", s)),
    }
  }
}

/// ---------------------------------------------------------------------------
/// Week Boundaries
/// ---------------------------------------------------------------------------

/// A Monday-to-Sunday calendar week, both ends inclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekRange {
  pub start: NaiveDate,
  pub end: NaiveDate,
}

impl WeekRange {
  pub fn containing(date: NaiveDate) -> Self {
    let start = week_start(date);
    Self {
      start,
      end: start + Duration::days(6),
    }
  }

  pub fn contains(&self, date: NaiveDate) -> bool {
    date >= self.start && date <= self.end
  }

  /// Short chart label, e.g. "Oct 12"
  pub fn label(&self) -> String {
    self.start.format("%b %-d").to_string()
  }
}

/// Monday of the week containing `date`
pub fn week_start(date: NaiveDate) -> NaiveDate {
  date - Duration::days(date.weekday().num_days_from_monday() as i64)
}

/// `weeks_back` consecutive weeks ending with the one containing `today`, oldest first.
///
/// `weeks_back` is clamped to `1..=MAX_WEEKS_BACK`.
pub fn week_ranges(today: NaiveDate, weeks_back: u32) -> Vec<WeekRange> {
  let weeks_back = weeks_back.clamp(1, MAX_WEEKS_BACK) as i64;
  let current = week_start(today);
  (0..weeks_back)
    .rev()
    .map(|i| WeekRange::containing(current - Duration::weeks(i)))
    .collect()
}

/// Assign each accepted session to its week in one pass.
///
/// Sessions before the first week or after `today` are dropped.
fn partition<'a, F>(
  sessions: &'a [Session],
  ranges: &[WeekRange],
  today: NaiveDate,
  accept: F,
) -> Vec<Vec<&'a Session>>
where
  F: Fn(&Session) -> bool,
{
  let mut buckets: Vec<Vec<&Session>> = vec![Vec::new(); ranges.len()];
  let Some(first) = ranges.first() else {
    return buckets;
  };

  for session in sessions {
    if session.date > today || session.date < first.start || !accept(session) {
      continue;
    }
    let idx = ((session.date - first.start).num_days() / 7) as usize;
    if let Some(bucket) = buckets.get_mut(idx) {
      bucket.push(session);
    }
  }

  buckets
}

/// ---------------------------------------------------------------------------
/// Climbing Metrics
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClimbWeekMetrics {
  pub week_start: NaiveDate,
  pub week_end: NaiveDate,
  pub label: String,
  pub modality: Modality,
  pub session_count: u32,

  /// Hardest sent grade (0 = none)
  pub max_sent_index: u8,
  pub max_sent_label: String,

  /// Hardest grade tried without sending (0 = none)
  pub max_tried_index: u8,
  pub max_tried_label: String,

  /// Attempts-weighted mean grade over graded climbs, rounded
  pub avg_weighted_index: u8,
  pub avg_weighted_label: String,

  pub total_attempts: u32,
  pub sent_count: u32,
  pub flash_count: u32,
  /// Climbs with a recognised grade
  pub graded_count: u32,
  /// Graded climbs at least one step above the weekly average (heuristic)
  pub hard_attempts: u32,

  pub total_duration_min: i64,
}

impl ClimbWeekMetrics {
  /// Compute metrics for one week from that week's climbing sessions
  pub fn compute(range: &WeekRange, sessions: &[&Session], modality: Modality) -> Self {
    let discipline = modality.discipline();
    let ungraded = modality.ungraded();

    let mut max_sent = 0u8;
    let mut max_tried = 0u8;
    let mut weighted_sum = 0u64;
    let mut weight_total = 0u64;
    let mut graded: Vec<u8> = Vec::new();
    let mut total_attempts = 0u32;
    let mut sent_count = 0u32;
    let mut flash_count = 0u32;

    let climbs = sessions
      .iter()
      .flat_map(|s| s.climbs.iter())
      .filter(|c| c.discipline == discipline);

    for climb in climbs {
      let attempts = climb.effective_attempts();
      total_attempts = total_attempts.saturating_add(attempts);
      if climb.sent {
        sent_count += 1;
      }
      if climb.flash {
        flash_count += 1;
      }

      let grade = climb.grade_index();
      if !grade.is_graded() {
        continue;
      }
      let value = grade.value();
      if climb.sent {
        max_sent = max_sent.max(value);
      } else {
        max_tried = max_tried.max(value);
      }
      weighted_sum += value as u64 * attempts as u64;
      weight_total += attempts as u64;
      graded.push(value);
    }

    let avg_weighted_index = if weight_total > 0 {
      (weighted_sum as f64 / weight_total as f64).round() as u8
    } else {
      0
    };

    let hard_attempts = if avg_weighted_index > 0 {
      let threshold = avg_weighted_index.saturating_add(HARD_ATTEMPT_OFFSET);
      graded.iter().filter(|&&g| g >= threshold).count() as u32
    } else {
      0
    };

    let total_duration_min = sessions.iter().filter_map(|s| s.duration_min).sum();

    Self {
      week_start: range.start,
      week_end: range.end,
      label: range.label(),
      modality,
      session_count: sessions.len() as u32,
      max_sent_index: max_sent,
      max_sent_label: grade_label(ungraded.with_value(max_sent)),
      max_tried_index: max_tried,
      max_tried_label: grade_label(ungraded.with_value(max_tried)),
      avg_weighted_index,
      avg_weighted_label: grade_label(ungraded.with_value(avg_weighted_index)),
      total_attempts,
      sent_count,
      flash_count,
      graded_count: graded.len() as u32,
      hard_attempts,
      total_duration_min,
    }
  }

  /// Short advice based on the share of near-limit attempts
  pub fn recommendation(&self) -> &'static str {
    if self.total_attempts == 0 {
      return "No climbs logged this week.";
    }
    if self.graded_count == 0 {
      return "Log grades on your climbs to track progression.";
    }
    let hard_share = self.hard_attempts as f64 / self.graded_count as f64;
    if hard_share < 0.2 {
      "Mostly volume this week. Add a few near-limit attempts to push your grade."
    } else if hard_share > 0.5 {
      "Heavy limit week. Balance it with some volume at your average grade."
    } else {
      "Good mix of volume and near-limit attempts."
    }
  }
}

/// Grade progression for the last `weeks_back` weeks, oldest first
pub fn compute_climb_weeks(
  sessions: &[Session],
  weeks_back: u32,
  modality: Modality,
  today: NaiveDate,
) -> Vec<ClimbWeekMetrics> {
  let ranges = week_ranges(today, weeks_back);
  let buckets = partition(sessions, &ranges, today, |s| s.session_type.is_climbing());

  ranges
    .iter()
    .zip(buckets.iter())
    .map(|(range, week)| ClimbWeekMetrics::compute(range, week, modality))
    .collect()
}

/// ---------------------------------------------------------------------------
/// Running Metrics
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunningWeekMetrics {
  pub week_start: NaiveDate,
  pub week_end: NaiveDate,
  pub label: String,
  pub session_count: u32,
  pub weekly_distance_km: f64,
  pub weekly_time_min: i64,
  pub weekly_elevation_gain_m: f64,
  /// Minutes per km over the week (0 without distance)
  pub avg_pace_min_per_km: f64,
  pub goal_progress_pct: f64,
  /// Sum of duration x RPE
  pub weekly_load: i64,
  /// Distance change vs the previous week (0 when that week had none)
  pub distance_delta_pct: f64,
  /// Distance jumped more than the safe week-over-week increase
  pub distance_spike: bool,
}

impl RunningWeekMetrics {
  /// Compute one week's running totals; the week-over-week fields are filled by the caller
  pub fn compute(range: &WeekRange, sessions: &[&Session], weekly_goal_km: f64) -> Self {
    let weekly_distance_km: f64 = sessions.iter().filter_map(|s| s.distance_km).sum();
    let weekly_time_min: i64 = sessions.iter().filter_map(|s| s.duration_min).sum();
    let weekly_elevation_gain_m: f64 = sessions.iter().filter_map(|s| s.elevation_gain_m).sum();
    let weekly_load: i64 = sessions
      .iter()
      .map(|s| s.duration_min.unwrap_or(0) * s.rpe.unwrap_or(RUNNING_DEFAULT_RPE))
      .sum();

    let avg_pace_min_per_km = if weekly_distance_km > 0.0 {
      weekly_time_min as f64 / weekly_distance_km
    } else {
      0.0
    };

    let goal_progress_pct = if weekly_goal_km > 0.0 {
      weekly_distance_km * 100.0 / weekly_goal_km
    } else {
      0.0
    };

    Self {
      week_start: range.start,
      week_end: range.end,
      label: range.label(),
      session_count: sessions.len() as u32,
      weekly_distance_km,
      weekly_time_min,
      weekly_elevation_gain_m,
      avg_pace_min_per_km,
      goal_progress_pct,
      weekly_load,
      distance_delta_pct: 0.0,
      distance_spike: false,
    }
  }

  fn with_previous(mut self, previous_distance_km: f64) -> Self {
    self.distance_delta_pct = if previous_distance_km > 0.0 {
      (self.weekly_distance_km - previous_distance_km) * 100.0 / previous_distance_km
    } else {
      0.0
    };
    self.distance_spike = self.distance_delta_pct > DISTANCE_SPIKE_PCT;
    self
  }
}

/// Running volume for the last `weeks_back` weeks, oldest first.
///
/// One extra leading week is aggregated so the oldest bucket's delta
/// compares against real data.
pub fn compute_running_weeks(
  sessions: &[Session],
  weeks_back: u32,
  weekly_goal_km: f64,
  today: NaiveDate,
) -> Vec<RunningWeekMetrics> {
  let visible = week_ranges(today, weeks_back);
  let lead = visible
    .first()
    .map(|w| WeekRange::containing(w.start - Duration::weeks(1)));
  let ranges: Vec<WeekRange> = lead.into_iter().chain(visible).collect();
  let buckets = partition(sessions, &ranges, today, Session::is_running);

  let mut previous_distance = 0.0;
  let mut weeks = Vec::with_capacity(ranges.len().saturating_sub(1));

  for (i, (range, week)) in ranges.iter().zip(buckets.iter()).enumerate() {
    let metrics = RunningWeekMetrics::compute(range, week, weekly_goal_km)
      .with_previous(previous_distance);
    previous_distance = metrics.weekly_distance_km;
    if i > 0 {
      weeks.push(metrics);
    }
  }

  weeks
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
  use super::*;
  use crate::models::SessionType;
  use crate::test_utils::{date, mock_boulder, mock_route, mock_running_session, mock_session};

  fn today() -> NaiveDate {
    // Thursday
    date(2026, 10, 15)
  }

  #[test]
  fn test_week_start_is_monday() {
    assert_eq!(week_start(date(2026, 10, 15)), date(2026, 10, 12));
    assert_eq!(week_start(date(2026, 10, 12)), date(2026, 10, 12));
    assert_eq!(week_start(date(2026, 10, 18)), date(2026, 10, 12));
    assert_eq!(week_start(date(2026, 10, 11)), date(2026, 10, 5));
  }

  #[test]
  fn test_week_ranges_cover_consecutive_weeks() {
    let ranges = week_ranges(today(), 4);

    assert_eq!(ranges.len(), 4);
    assert_eq!(ranges[0].start, date(2026, 9, 21));
    assert_eq!(ranges[3].end, date(2026, 10, 18));
    assert!(ranges[3].contains(today()));

    for r in &ranges {
      assert_eq!(r.start.weekday(), chrono::Weekday::Mon);
      assert_eq!(r.end.weekday(), chrono::Weekday::Sun);
    }
    // No gaps, no overlaps
    for pair in ranges.windows(2) {
      assert_eq!(pair[0].end + Duration::days(1), pair[1].start);
    }
  }

  #[test]
  fn test_week_ranges_zero_clamps_to_one() {
    let ranges = week_ranges(today(), 0);
    assert_eq!(ranges.len(), 1);
    assert_eq!(ranges[0].label(), "Oct 12");
  }

  #[test]
  fn test_weeks_back_is_capped() {
    let climbing = compute_climb_weeks(&[], u32::MAX, Modality::Boulder, today());
    let running = compute_running_weeks(&[], u32::MAX, 20.0, today());

    assert_eq!(climbing.len(), MAX_WEEKS_BACK as usize);
    assert_eq!(running.len(), MAX_WEEKS_BACK as usize);
    assert_eq!(running.last().map(|w| w.week_start), Some(date(2026, 10, 12)));
    assert_eq!(running[0].week_start, climbing[0].week_start);
  }

  #[test]
  fn test_boulder_max_sent_this_week() {
    // Arrange: one boulder session with green and red sends
    let sessions = vec![mock_session(
      SessionType::Boulder,
      date(2026, 10, 13),
      vec![
        mock_boulder("green", true, false, 1),
        mock_boulder("red", true, false, 3),
      ],
    )];

    // Act
    let weeks = compute_climb_weeks(&sessions, 4, Modality::Boulder, today());

    // Assert
    let current = weeks.last().unwrap();
    assert_eq!(current.max_sent_index, 5);
    assert_eq!(current.max_sent_label, "Red (6b+-6c)");
    assert_eq!(current.sent_count, 2);
    assert_eq!(current.total_attempts, 4);
    assert!(weeks[..3].iter().all(|w| w.max_sent_index == 0));
  }

  #[test]
  fn test_max_tried_ignores_sends_and_ungraded() {
    let sessions = vec![mock_session(
      SessionType::Boulder,
      date(2026, 10, 12),
      vec![
        mock_boulder("yellow", true, false, 2),
        mock_boulder("purple", false, false, 5),
        mock_boulder("neon", false, false, 3),
      ],
    )];

    let week = compute_climb_weeks(&sessions, 1, Modality::Boulder, today()).remove(0);

    assert_eq!(week.max_sent_index, 4);
    assert_eq!(week.max_tried_index, 6);
    assert_eq!(week.graded_count, 2);
    // Ungraded climbs still count as attempts
    assert_eq!(week.total_attempts, 10);
  }

  #[test]
  fn test_weighted_average_and_hard_attempts() {
    // blue (2) x1, red (5) x3 => (2 + 15) / 4 = 4.25 => 4
    let sessions = vec![mock_session(
      SessionType::Boulder,
      date(2026, 10, 14),
      vec![
        mock_boulder("blue", true, true, 1),
        mock_boulder("red", false, false, 3),
      ],
    )];

    let week = compute_climb_weeks(&sessions, 1, Modality::Boulder, today()).remove(0);

    assert_eq!(week.avg_weighted_index, 4);
    assert_eq!(week.avg_weighted_label, "Yellow (6a+-6b)");
    // Only red (5) is >= 4 + 1
    assert_eq!(week.hard_attempts, 1);
    assert_eq!(week.flash_count, 1);
  }

  #[test]
  fn test_inconsistent_flash_flags_are_tolerated() {
    // Arrange: a "flash" that was never sent, and one sent after 4 attempts
    let sessions = vec![mock_session(
      SessionType::Boulder,
      date(2026, 10, 13),
      vec![
        mock_boulder("purple", false, true, 3),
        mock_boulder("blue", true, true, 4),
      ],
    )];

    // Act
    let week = compute_climb_weeks(&sessions, 1, Modality::Boulder, today()).remove(0);

    // Assert: flags are counted as logged, grades follow `sent`
    assert_eq!(week.flash_count, 2);
    assert_eq!(week.sent_count, 1);
    assert_eq!(week.max_sent_index, 2);
    assert_eq!(week.max_tried_index, 6);
    assert_eq!(week.total_attempts, 7);
    // (6 * 3 + 2 * 4) / 7 = 3.71 => 4
    assert_eq!(week.avg_weighted_index, 4);
    assert_eq!(week.hard_attempts, 1);
  }

  #[test]
  fn test_weighted_average_stays_within_graded_range() {
    let sessions = vec![mock_session(
      SessionType::Hybrid,
      date(2026, 10, 13),
      vec![
        mock_route("6a", true, 1),
        mock_route("6c+", false, 7),
        mock_route("7a", false, 2),
        mock_route("mystery", false, 40),
      ],
    )];

    let week = compute_climb_weeks(&sessions, 1, Modality::Rope, today()).remove(0);

    assert!(week.avg_weighted_index >= 13 && week.avg_weighted_index <= 19);
  }

  #[test]
  fn test_average_zero_without_graded_climbs() {
    let sessions = vec![mock_session(
      SessionType::Boulder,
      date(2026, 10, 13),
      vec![mock_boulder("", true, false, 2)],
    )];

    let week = compute_climb_weeks(&sessions, 1, Modality::Boulder, today()).remove(0);

    assert_eq!(week.avg_weighted_index, 0);
    assert_eq!(week.avg_weighted_label, "-");
    assert_eq!(week.hard_attempts, 0);
    assert_eq!(week.max_sent_label, "-");
  }

  #[test]
  fn test_autobelay_and_rope_select_routes() {
    let sessions = vec![mock_session(
      SessionType::Hybrid,
      date(2026, 10, 13),
      vec![mock_boulder("black", true, false, 1), mock_route("6b", true, 1)],
    )];

    let rope = compute_climb_weeks(&sessions, 1, Modality::Rope, today());
    let autobelay = compute_climb_weeks(&sessions, 1, Modality::Autobelay, today());
    let boulder = compute_climb_weeks(&sessions, 1, Modality::Boulder, today());

    assert_eq!(rope[0].max_sent_label, "6b");
    assert_eq!(rope[0].max_sent_index, autobelay[0].max_sent_index);
    assert_eq!(boulder[0].max_sent_index, 7);
  }

  #[test]
  fn test_climb_scope_and_window() {
    let sessions = vec![
      // Strength day with a stray climb: not a climbing session
      mock_session(
        SessionType::Training,
        date(2026, 10, 13),
        vec![mock_boulder("black", true, false, 1)],
      ),
      // Before the window
      mock_session(
        SessionType::Boulder,
        date(2026, 10, 4),
        vec![mock_boulder("purple", true, false, 1)],
      ),
      // Later this week but after today
      mock_session(
        SessionType::Boulder,
        date(2026, 10, 17),
        vec![mock_boulder("purple", true, false, 1)],
      ),
      mock_session(
        SessionType::Boulder,
        date(2026, 10, 12),
        vec![mock_boulder("green", true, false, 1)],
      ),
    ];

    let weeks = compute_climb_weeks(&sessions, 1, Modality::Boulder, today());

    assert_eq!(weeks[0].max_sent_index, 3);
    assert_eq!(weeks[0].session_count, 1);
    assert_eq!(weeks[0].total_duration_min, 90);
  }

  #[test]
  fn test_climb_weeks_empty_sessions() {
    let weeks = compute_climb_weeks(&[], 6, Modality::Boulder, today());

    assert_eq!(weeks.len(), 6);
    for w in &weeks {
      assert_eq!(w.total_attempts, 0);
      assert_eq!(w.max_sent_index, 0);
      assert_eq!(w.total_duration_min, 0);
      assert_eq!(w.recommendation(), "No climbs logged this week.");
    }
  }

  #[test]
  fn test_recommendation_thresholds() {
    let range = WeekRange::containing(today());
    let mut week = ClimbWeekMetrics::compute(&range, &[], Modality::Boulder);
    week.total_attempts = 10;
    week.graded_count = 10;

    week.hard_attempts = 1;
    assert!(week.recommendation().starts_with("Mostly volume"));
    week.hard_attempts = 6;
    assert!(week.recommendation().starts_with("Heavy limit"));
    week.hard_attempts = 3;
    assert!(week.recommendation().starts_with("Good mix"));
  }

  #[test]
  fn test_running_goal_progress() {
    let sessions = vec![
      mock_running_session(date(2026, 10, 12), Some(8.0), Some(45), Some(6)),
      mock_running_session(date(2026, 10, 14), Some(7.0), Some(40), None),
    ];

    let week = compute_running_weeks(&sessions, 1, 20.0, today()).remove(0);

    assert_eq!(week.weekly_distance_km, 15.0);
    assert_eq!(week.goal_progress_pct, 75.0);
    assert_eq!(week.weekly_time_min, 85);
    // 45 * 6 + 40 * 5
    assert_eq!(week.weekly_load, 470);
    assert_eq!(week.session_count, 2);
  }

  #[test]
  fn test_running_distance_delta_and_spike() {
    let sessions = vec![
      mock_running_session(date(2026, 10, 7), Some(10.0), Some(60), Some(5)),
      mock_running_session(date(2026, 10, 13), Some(13.0), Some(75), Some(5)),
    ];

    let weeks = compute_running_weeks(&sessions, 2, 20.0, today());

    assert_eq!(weeks.len(), 2);
    assert_eq!(weeks[1].distance_delta_pct, 30.0);
    assert!(weeks[1].distance_spike);
    // Previous week compares against the lead week, which had nothing
    assert_eq!(weeks[0].distance_delta_pct, 0.0);
    assert!(!weeks[0].distance_spike);
  }

  #[test]
  fn test_oldest_week_delta_uses_lead_week() {
    let sessions = vec![
      mock_running_session(date(2026, 10, 1), Some(20.0), Some(120), None),
      mock_running_session(date(2026, 10, 6), Some(10.0), Some(60), None),
    ];

    let weeks = compute_running_weeks(&sessions, 2, 0.0, today());

    assert_eq!(weeks[0].week_start, date(2026, 10, 5));
    assert_eq!(weeks[0].distance_delta_pct, -50.0);
    assert!(!weeks[0].distance_spike);
  }

  #[test]
  fn test_running_zero_goal_and_missing_fields() {
    let sessions = vec![
      mock_running_session(date(2026, 10, 13), None, None, None),
      // Climbing sessions never count toward running volume
      mock_session(SessionType::Boulder, date(2026, 10, 13), vec![]),
    ];

    let week = compute_running_weeks(&sessions, 1, 0.0, today()).remove(0);

    assert_eq!(week.session_count, 1);
    assert_eq!(week.goal_progress_pct, 0.0);
    assert_eq!(week.avg_pace_min_per_km, 0.0);
    assert_eq!(week.weekly_load, 0);
    assert_eq!(week.weekly_distance_km, 0.0);
  }

  #[test]
  fn test_running_pace() {
    let sessions = vec![mock_running_session(date(2026, 10, 13), Some(8.0), Some(44), Some(4))];

    let week = compute_running_weeks(&sessions, 1, 30.0, today()).remove(0);

    crate::assert_approx_eq!(week.avg_pace_min_per_km, 5.5, 1e-9);
  }

  #[test]
  fn test_modality_parse() {
    assert_eq!("Autobelay".parse::<Modality>(), Ok(Modality::Autobelay));
    assert!("trad".parse::<Modality>().is_err());
    assert_eq!(Modality::Rope.to_string(), "rope");
  }
}
