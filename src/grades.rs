//! Grade normalization
//!
//! Maps boulder colour bands and French route grades onto dense ordinal
//! indices. Index 0 means "ungraded" on both scales and must be filtered
//! out of max/average computations. The two scales are not comparable,
//! which `GradeIndex` enforces by keeping them as separate variants.

use serde::{Deserialize, Serialize};

/// Boulder colour bands, easiest first
pub const BOULDER_COLORS: [&str; 7] =
  ["white", "blue", "green", "yellow", "red", "purple", "black"];

/// Approximate French range for each colour band (annotation only, never arithmetic)
const BOULDER_FRENCH_RANGES: [&str; 7] =
  ["3-4", "4+-5", "5+-6a", "6a+-6b", "6b+-6c", "6c+-7a", "7a+"];

/// French route grades, easiest first
pub const FRENCH_GRADES: [&str; 35] = [
  "4a", "4a+", "4b", "4b+", "4c", "4c+", //
  "5a", "5a+", "5b", "5b+", "5c", "5c+", //
  "6a", "6a+", "6b", "6b+", "6c", "6c+", //
  "7a", "7a+", "7b", "7b+", "7c", "7c+", //
  "8a", "8a+", "8b", "8b+", "8c", "8c+", //
  "9a", "9a+", "9b", "9b+", "9c",
];

/// Placeholder rendered for an ungraded index
pub const UNGRADED_LABEL: &str = "-";

/// Case-insensitive exact-match lookup, 1-based; 0 when absent or unknown
fn lookup(scale: &[&str], value: Option<&str>) -> u8 {
  let Some(value) = value else {
    return 0;
  };
  scale
    .iter()
    .position(|g| g.eq_ignore_ascii_case(value))
    .map(|p| (p + 1) as u8)
    .unwrap_or(0)
}

fn reverse_lookup(scale: &[&'static str], index: u8) -> Option<&'static str> {
  if index == 0 {
    return None;
  }
  scale.get(index as usize - 1).copied()
}

pub fn color_to_index(color: Option<&str>) -> u8 {
  lookup(&BOULDER_COLORS, color)
}

/// Colour at a boulder index; `None` for 0 and anything past black
pub fn index_to_color(index: u8) -> Option<&'static str> {
  reverse_lookup(&BOULDER_COLORS, index)
}

pub fn french_to_index(grade: Option<&str>) -> u8 {
  lookup(&FRENCH_GRADES, grade)
}

pub fn index_to_french(index: u8) -> Option<&'static str> {
  reverse_lookup(&FRENCH_GRADES, index)
}

/// Human label for a boulder index, e.g. "Red (6b+-6c)"
pub fn boulder_label(index: u8) -> String {
  match index_to_color(index) {
    Some(color) => {
      let mut chars = color.chars();
      let capitalized = match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
        None => String::new(),
      };
      format!("{} ({})", capitalized, BOULDER_FRENCH_RANGES[index as usize - 1])
    }
    None => UNGRADED_LABEL.to_string(),
  }
}

/// ---------------------------------------------------------------------------
/// Tagged Grade Index
/// ---------------------------------------------------------------------------

/// An ordinal grade on one modality's scale
///
/// Ordering is only defined within a scale: comparing a boulder index with a
/// route index yields `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GradeIndex {
  Boulder(u8),
  Route(u8),
}

impl GradeIndex {
  pub fn value(&self) -> u8 {
    match self {
      Self::Boulder(i) | Self::Route(i) => *i,
    }
  }

  pub fn is_graded(&self) -> bool {
    self.value() > 0
  }

  /// Same scale, different position
  pub fn with_value(&self, value: u8) -> Self {
    match self {
      Self::Boulder(_) => Self::Boulder(value),
      Self::Route(_) => Self::Route(value),
    }
  }

  pub fn label(&self) -> String {
    grade_label(*self)
  }
}

impl PartialOrd for GradeIndex {
  fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
    match (self, other) {
      (Self::Boulder(a), Self::Boulder(b)) | (Self::Route(a), Self::Route(b)) => a.partial_cmp(b),
      _ => None,
    }
  }
}

/// "-" for ungraded, the colour label for boulders, the French token for routes
pub fn grade_label(grade: GradeIndex) -> String {
  match grade {
    GradeIndex::Boulder(i) => boulder_label(i),
    GradeIndex::Route(i) => index_to_french(i)
      .map(str::to_string)
      .unwrap_or_else(|| UNGRADED_LABEL.to_string()),
  }
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------
