use serde::{Deserialize, Serialize};

use crate::grades::{color_to_index, french_to_index, GradeIndex};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Discipline {
  Boulder,
  /// Any roped climb; autobelay and lead are stored the same way
  Route,
}

impl std::fmt::Display for Discipline {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::Boulder => write!(f, "boulder"),
      Self::Route => write!(f, "route"),
    }
  }
}

impl std::str::FromStr for Discipline {
  type Err = String;
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim().to_lowercase().as_str() {
      "boulder" => Ok(Self::Boulder),
      "route" => Ok(Self::Route),
      _ => Err(format!("Unknown discipline: {}", s)),
    }
  }
}

/// One boulder problem or route, with all attempts made on it in a session
///
/// `flash` should imply `sent` and `attempts == 1`, but nothing enforces it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Climb {
  pub discipline: Discipline,
  /// Boulder colour band (boulder only)
  pub color_band: Option<String>,
  /// French grade token (route only)
  pub grade_value: Option<String>,
  pub sent: bool,
  pub flash: bool,
  pub attempts: i64,
}

impl Climb {
  /// Grade on the scale matching this climb's discipline
  pub fn grade_index(&self) -> GradeIndex {
    match self.discipline {
      Discipline::Boulder => GradeIndex::Boulder(color_to_index(self.color_band.as_deref())),
      Discipline::Route => GradeIndex::Route(french_to_index(self.grade_value.as_deref())),
    }
  }

  /// Attempts used for sums and weighting; a logged climb counts at least once
  pub fn effective_attempts(&self) -> u32 {
    self.attempts.clamp(1, u32::MAX as i64) as u32
  }
}
