//! Test utilities and helpers for unit testing
//!
//! This module provides common test infrastructure including:
//! - Database setup/teardown
//! - Session and climb seeding
//! - Mock session factories
//! - Helper assertions

use chrono::NaiveDate;
use sqlx::SqlitePool;

use crate::models::{Climb, Discipline, Session, SessionType};

/// ---------------------------------------------------------------------------
/// Database Test Utilities
/// ---------------------------------------------------------------------------

/// Create an in-memory SQLite database for testing
/// Runs all migrations and returns a ready-to-use pool
///
/// Uses max_connections(1) to prevent multiple pool connections from creating
/// isolated in-memory databases, which would cause intermittent test failures
pub async fn setup_test_db() -> SqlitePool {
  crate::db::initialize_db("sqlite::memory:", 1)
    .await
    .expect("Failed to create in-memory database")
}

/// Close a test database pool
pub async fn teardown_test_db(pool: SqlitePool) {
  pool.close().await;
}

/// Insert one session row and return its id
pub async fn seed_test_session(
  pool: &SqlitePool,
  user_id: &str,
  session_type: &str,
  date: NaiveDate,
  duration_min: Option<i64>,
  rpe: Option<i64>,
  distance_km: Option<f64>,
) -> i64 {
  let result = sqlx::query(
    r#"
    INSERT INTO sessions (user_id, date, session_type, duration_min, rpe, distance_km)
    VALUES (?1, ?2, ?3, ?4, ?5, ?6)
    "#,
  )
  .bind(user_id)
  .bind(date)
  .bind(session_type)
  .bind(duration_min)
  .bind(rpe)
  .bind(distance_km)
  .execute(pool)
  .await
  .expect("Failed to insert test session");

  result.last_insert_rowid()
}

/// Insert one climb row for an existing session
#[allow(clippy::too_many_arguments)]
pub async fn seed_test_climb(
  pool: &SqlitePool,
  session_id: i64,
  position: i64,
  discipline: &str,
  color_band: Option<&str>,
  grade_value: Option<&str>,
  sent: bool,
  flash: bool,
  attempts: i64,
) {
  sqlx::query(
    r#"
    INSERT INTO climbs
      (session_id, position, discipline, color_band, grade_value, sent, flash, attempts)
    VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
    "#,
  )
  .bind(session_id)
  .bind(position)
  .bind(discipline)
  .bind(color_band)
  .bind(grade_value)
  .bind(sent)
  .bind(flash)
  .bind(attempts)
  .execute(pool)
  .await
  .expect("Failed to insert test climb");
}

/// ---------------------------------------------------------------------------
/// Mock Data Factories
/// ---------------------------------------------------------------------------

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
  NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
}

/// Climbing session: 90 min at RPE 6
pub fn mock_session(session_type: SessionType, date: NaiveDate, climbs: Vec<Climb>) -> Session {
  Session {
    id: 0,
    date,
    session_type,
    duration_min: Some(90),
    rpe: Some(6),
    distance_km: None,
    elevation_gain_m: None,
    climbs,
  }
}

/// Session with only the fields the load engine reads
pub fn mock_load_session(
  session_type: SessionType,
  date: NaiveDate,
  duration_min: Option<i64>,
  rpe: Option<i64>,
) -> Session {
  Session {
    id: 0,
    date,
    session_type,
    duration_min,
    rpe,
    distance_km: None,
    elevation_gain_m: None,
    climbs: Vec::new(),
  }
}

pub fn mock_running_session(
  date: NaiveDate,
  distance_km: Option<f64>,
  duration_min: Option<i64>,
  rpe: Option<i64>,
) -> Session {
  Session {
    id: 0,
    date,
    session_type: SessionType::Running,
    duration_min,
    rpe,
    distance_km,
    elevation_gain_m: distance_km.map(|d| d * 10.0),
    climbs: Vec::new(),
  }
}

pub fn mock_boulder(color: &str, sent: bool, flash: bool, attempts: i64) -> Climb {
  Climb {
    discipline: Discipline::Boulder,
    color_band: Some(color.to_string()),
    grade_value: None,
    sent,
    flash,
    attempts,
  }
}

pub fn mock_route(grade: &str, sent: bool, attempts: i64) -> Climb {
  Climb {
    discipline: Discipline::Route,
    color_band: None,
    grade_value: Some(grade.to_string()),
    sent,
    flash: sent && attempts == 1,
    attempts,
  }
}

/// ---------------------------------------------------------------------------
/// Test Macros
/// ---------------------------------------------------------------------------

/// Assert two floats are approximately equal within a tolerance
#[macro_export]
macro_rules! assert_approx_eq {
  ($left:expr, $right:expr, $tolerance:expr) => {
    let diff = ($left - $right).abs();
    assert!(
      diff < $tolerance,
      "Values not approximately equal: {} vs {} (diff: {}, tolerance: {})",
      $left,
      $right,
      diff,
      $tolerance
    );
  };
}

/// ---------------------------------------------------------------------------
/// Tests for Test Utilities
/// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
  use super::*;

  #[tokio::test]
  async fn test_setup_db_creates_schema() {
    let pool = setup_test_db().await;

    let tables: Vec<(String,)> = sqlx::query_as(
      "SELECT name FROM sqlite_master WHERE type='table' AND name IN ('sessions', 'climbs')",
    )
    .fetch_all(&pool)
    .await
    .expect("Failed to query tables");

    assert_eq!(tables.len(), 2, "Expected sessions and climbs tables");

    teardown_test_db(pool).await;
  }

  #[tokio::test]
  async fn test_seed_session_and_climb() {
    let pool = setup_test_db().await;

    let id =
      seed_test_session(&pool, "u1", "boulder", date(2026, 10, 1), Some(60), Some(5), None).await;
    seed_test_climb(&pool, id, 0, "boulder", Some("blue"), None, true, false, 2).await;

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM climbs WHERE session_id = ?1")
      .bind(id)
      .fetch_one(&pool)
      .await
      .expect("Failed to count climbs");

    assert_eq!(count, 1);

    teardown_test_db(pool).await;
  }

  #[test]
  fn test_mock_factories_create_valid_data() {
    let run = mock_running_session(date(2026, 10, 1), Some(10.0), Some(55), None);
    assert!(run.is_running());
    assert_eq!(run.elevation_gain_m, Some(100.0));

    let route = mock_route("6a", true, 1);
    assert!(route.flash);
    assert_eq!(route.discipline, Discipline::Route);

    let session = mock_session(
      SessionType::Boulder,
      date(2026, 10, 1),
      vec![mock_boulder("red", true, false, 2)],
    );
    assert_eq!(session.climbs.len(), 1);
    assert_eq!(session.duration_min, Some(90));
  }
}
