//! Environment configuration
//!
//! Values come from the process environment, with `.env` loaded first by the
//! binary. CLI flags override whatever is set here.

use std::env;

use crate::constants::MAX_WEEKS_BACK;
use crate::error::{AppError, AppResult};

/// ---------------------------------------------------------------------------
/// Configuration Constants
/// ---------------------------------------------------------------------------

pub const DATABASE_URL_VAR: &str = "CLIMB_LOG_DATABASE_URL";
pub const USER_ID_VAR: &str = "CLIMB_LOG_USER_ID";
pub const WEEKS_BACK_VAR: &str = "CLIMB_LOG_WEEKS_BACK";
pub const WEEKLY_GOAL_KM_VAR: &str = "CLIMB_LOG_WEEKLY_GOAL_KM";
pub const LOG_VAR: &str = "CLIMB_LOG_LOG";

const DEFAULT_DATABASE_URL: &str = "sqlite://climb-log.db?mode=rwc";
const DEFAULT_WEEKS_BACK: u32 = 8;
const DEFAULT_WEEKLY_GOAL_KM: f64 = 20.0;
const DEFAULT_LOG_DIRECTIVES: &str = "info";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
  pub database_url: String,
  pub user_id: Option<String>,
  pub weeks_back: u32,
  pub weekly_goal_km: f64,
  pub log_directives: String,
}

impl Default for AppConfig {
  fn default() -> Self {
    Self {
      database_url: DEFAULT_DATABASE_URL.to_string(),
      user_id: None,
      weeks_back: DEFAULT_WEEKS_BACK,
      weekly_goal_km: DEFAULT_WEEKLY_GOAL_KM,
      log_directives: DEFAULT_LOG_DIRECTIVES.to_string(),
    }
  }
}

impl AppConfig {
  pub fn from_env() -> AppResult<Self> {
    let defaults = Self::default();

    let weeks_back = match non_empty_var(WEEKS_BACK_VAR) {
      Some(raw) => {
        let weeks: u32 = raw
          .parse()
          .map_err(|_| {
            AppError::Config(format!("{} is not a whole number: {}", WEEKS_BACK_VAR, raw))
          })?;
        if weeks == 0 {
          return Err(AppError::Config(format!("{} must be at least 1", WEEKS_BACK_VAR)));
        }
        if weeks > MAX_WEEKS_BACK {
          return Err(AppError::Config(format!(
            "{} must be at most {}",
            WEEKS_BACK_VAR, MAX_WEEKS_BACK
          )));
        }
        weeks
      }
      None => defaults.weeks_back,
    };

    let weekly_goal_km = match non_empty_var(WEEKLY_GOAL_KM_VAR) {
      Some(raw) => {
        let goal: f64 = raw
          .parse()
          .map_err(|_| {
            AppError::Config(format!("{} is not a number: {}", WEEKLY_GOAL_KM_VAR, raw))
          })?;
        if !goal.is_finite() || goal < 0.0 {
          return Err(AppError::Config(format!("{} must be zero or more", WEEKLY_GOAL_KM_VAR)));
        }
        goal
      }
      None => defaults.weekly_goal_km,
    };

    Ok(Self {
      database_url: non_empty_var(DATABASE_URL_VAR).unwrap_or(defaults.database_url),
      user_id: non_empty_var(USER_ID_VAR),
      weeks_back,
      weekly_goal_km,
      log_directives: non_empty_var(LOG_VAR).unwrap_or(defaults.log_directives),
    })
  }
}

fn non_empty_var(name: &str) -> Option<String> {
  env::var(name)
    .ok()
    .map(|v| v.trim().to_string())
    .filter(|v| !v.is_empty())
}
