//! Climbing and running training log analytics
//!
//! Grade normalization, weekly aggregation and training load (ACWR) over a
//! user's sessions, plus the SQLite loader and command layer that feed them.

pub mod commands;
pub mod config;
pub mod constants;
pub mod db;
pub mod error;
pub mod grades;
pub mod load;
pub mod logging;
pub mod models;
pub mod weekly;

#[cfg(test)]
mod test_utils;

pub use error::{AppError, AppResult};
pub use grades::GradeIndex;
pub use load::{compute_load_history, LoadHistoryPoint, LoadMetrics, LoadTrend, LoadZone};
pub use models::{Climb, Discipline, Session, SessionType};
pub use weekly::{
  compute_climb_weeks, compute_running_weeks, ClimbWeekMetrics, Modality, RunningWeekMetrics,
};
