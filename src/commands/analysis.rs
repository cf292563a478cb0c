//! Analytics commands: load a user's sessions, then run an engine as of `today`

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{get_sessions, resolve_today};
use crate::constants::MAX_WEEKS_BACK;
use crate::db::AppState;
use crate::load::{compute_load_history, LoadHistoryPoint, LoadMetrics};
use crate::weekly::{
  compute_climb_weeks, compute_running_weeks, ClimbWeekMetrics, Modality, RunningWeekMetrics,
};

fn validate_weeks(weeks_back: u32) -> Result<u32, String> {
  if weeks_back == 0 {
    return Err("weeks_back must be at least 1".to_string());
  }
  if weeks_back > MAX_WEEKS_BACK {
    return Err(format!("weeks_back must be at most {}", MAX_WEEKS_BACK));
  }
  Ok(weeks_back)
}

fn validate_goal(weekly_goal_km: f64) -> Result<f64, String> {
  if !weekly_goal_km.is_finite() || weekly_goal_km < 0.0 {
    return Err(format!("Invalid weekly goal: {}", weekly_goal_km));
  }
  Ok(weekly_goal_km)
}

/// ---------------------------------------------------------------------------
/// Climbing
/// ---------------------------------------------------------------------------

pub async fn get_climb_progression(
  state: &AppState,
  user_id: &str,
  weeks_back: u32,
  modality: Modality,
  today: Option<NaiveDate>,
) -> Result<Vec<ClimbWeekMetrics>, String> {
  let weeks_back = validate_weeks(weeks_back)?;
  let sessions = get_sessions(state, user_id).await?;
  let weeks = compute_climb_weeks(&sessions, weeks_back, modality, resolve_today(today));

  debug!(user_id, %modality, weeks = weeks.len(), "Computed climb progression");
  Ok(weeks)
}

/// ---------------------------------------------------------------------------
/// Running
/// ---------------------------------------------------------------------------

pub async fn get_running_weeks(
  state: &AppState,
  user_id: &str,
  weeks_back: u32,
  weekly_goal_km: f64,
  today: Option<NaiveDate>,
) -> Result<Vec<RunningWeekMetrics>, String> {
  let weeks_back = validate_weeks(weeks_back)?;
  let weekly_goal_km = validate_goal(weekly_goal_km)?;
  let sessions = get_sessions(state, user_id).await?;

  Ok(compute_running_weeks(&sessions, weeks_back, weekly_goal_km, resolve_today(today)))
}

/// ---------------------------------------------------------------------------
/// Training Load
/// ---------------------------------------------------------------------------

pub async fn get_training_load(
  state: &AppState,
  user_id: &str,
  today: Option<NaiveDate>,
) -> Result<LoadMetrics, String> {
  let sessions = get_sessions(state, user_id).await?;
  let metrics = LoadMetrics::compute(&sessions, resolve_today(today));

  debug!(user_id, acwr = metrics.acwr, zone = %metrics.zone, "Computed training load");
  Ok(metrics)
}

pub async fn get_load_history(
  state: &AppState,
  user_id: &str,
  today: Option<NaiveDate>,
) -> Result<Vec<LoadHistoryPoint>, String> {
  let sessions = get_sessions(state, user_id).await?;
  Ok(compute_load_history(&sessions, resolve_today(today)))
}

/// ---------------------------------------------------------------------------
/// Dashboard
/// ---------------------------------------------------------------------------

/// Everything the analytics page shows, from a single session load
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dashboard {
  pub today: NaiveDate,
  pub climbing: Vec<ClimbWeekMetrics>,
  /// Advice for the current week's climbing
  pub climbing_recommendation: String,
  pub running: Vec<RunningWeekMetrics>,
  pub load: LoadMetrics,
  pub load_history: Vec<LoadHistoryPoint>,
}

pub async fn get_dashboard(
  state: &AppState,
  user_id: &str,
  weeks_back: u32,
  modality: Modality,
  weekly_goal_km: f64,
  today: Option<NaiveDate>,
) -> Result<Dashboard, String> {
  let weeks_back = validate_weeks(weeks_back)?;
  let weekly_goal_km = validate_goal(weekly_goal_km)?;
  let today = resolve_today(today);
  let sessions = get_sessions(state, user_id).await?;

  let climbing = compute_climb_weeks(&sessions, weeks_back, modality, today);
  let climbing_recommendation = climbing
    .last()
    .map(|w| w.recommendation().to_string())
    .unwrap_or_default();

  Ok(Dashboard {
    today,
    climbing_recommendation,
    climbing,
    running: compute_running_weeks(&sessions, weeks_back, weekly_goal_km, today),
    load: LoadMetrics::compute(&sessions, today),
    load_history: compute_load_history(&sessions, today),
  })
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------
