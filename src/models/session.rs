use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::climb::Climb;

/// What kind of training a session was
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionType {
  Boulder,
  Rope,
  /// Bouldering and roped climbing in the same session
  Hybrid,
  /// Strength / hangboard / conditioning
  Training,
  Running,
}

impl SessionType {
  /// Sessions whose climbs feed the grade progression charts
  pub fn is_climbing(&self) -> bool {
    matches!(self, Self::Boulder | Self::Rope | Self::Hybrid)
  }

  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Boulder => "boulder",
      Self::Rope => "rope",
      Self::Hybrid => "hybrid",
      Self::Training => "training",
      Self::Running => "running",
    }
  }
}

impl std::fmt::Display for SessionType {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.as_str())
  }
}

impl std::str::FromStr for SessionType {
  type Err = String;
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim().to_lowercase().as_str() {
      "boulder" => Ok(Self::Boulder),
      "rope" => Ok(Self::Rope),
      "hybrid" => Ok(Self::Hybrid),
      "training" => Ok(Self::Training),
      "running" => Ok(Self::Running),
      _ => Err(format!("Unknown session type: {}", s)),
    }
  }
}

/// A single day's training activity, as fetched from the backend
///
/// Every numeric field is optional; the engines substitute defaults rather
/// than reject a row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
  pub id: i64,
  pub date: NaiveDate,
  pub session_type: SessionType,
  pub duration_min: Option<i64>,
  /// Rate of perceived exertion, 1-10
  pub rpe: Option<i64>,
  pub distance_km: Option<f64>,
  pub elevation_gain_m: Option<f64>,
  #[serde(default)]
  pub climbs: Vec<Climb>,
}

impl Session {
  pub fn is_running(&self) -> bool {
    self.session_type == SessionType::Running
  }
}
