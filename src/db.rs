//! Session-fetching layer
//!
//! Reads one user's sessions and their climbs from SQLite. Rows the
//! analytics can't interpret are skipped with a warning.

use std::collections::HashMap;

use chrono::NaiveDate;
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};
use tracing::{debug, info, warn};

use crate::error::AppResult;
use crate::models::{Climb, Discipline, Session, SessionType};

pub type DbPool = SqlitePool;

/// Application state holding the database connection pool
pub struct AppState {
  pub db: DbPool,
}

/// Create the connection pool and run migrations
pub async fn initialize_db(database_url: &str, max_connections: u32) -> AppResult<DbPool> {
  info!(database_url, "Initializing database");

  let pool = SqlitePoolOptions::new()
    .max_connections(max_connections.max(1))
    .connect(database_url)
    .await?;

  sqlx::migrate!("./migrations").run(&pool).await?;

  info!("Database initialized successfully");

  Ok(pool)
}

#[derive(Debug, sqlx::FromRow)]
struct SessionRow {
  id: i64,
  date: NaiveDate,
  session_type: String,
  duration_min: Option<i64>,
  rpe: Option<i64>,
  distance_km: Option<f64>,
  elevation_gain_m: Option<f64>,
}

#[derive(Debug, sqlx::FromRow)]
struct ClimbRow {
  session_id: i64,
  discipline: String,
  color_band: Option<String>,
  grade_value: Option<String>,
  sent: bool,
  flash: bool,
  attempts: i64,
}

/// Load every session for `user_id`, oldest first, with climbs in logged order
pub async fn load_sessions(pool: &DbPool, user_id: &str) -> AppResult<Vec<Session>> {
  let session_rows: Vec<SessionRow> = sqlx::query_as(
    r#"
    SELECT id, date, session_type, duration_min, rpe, distance_km, elevation_gain_m
    FROM sessions
    WHERE user_id = ?1
    ORDER BY date, id
    "#,
  )
  .bind(user_id)
  .fetch_all(pool)
  .await?;

  let climb_rows: Vec<ClimbRow> = sqlx::query_as(
    r#"
    SELECT c.session_id, c.discipline, c.color_band, c.grade_value, c.sent, c.flash, c.attempts
    FROM climbs c
    JOIN sessions s ON s.id = c.session_id
    WHERE s.user_id = ?1
    ORDER BY c.session_id, c.position, c.id
    "#,
  )
  .bind(user_id)
  .fetch_all(pool)
  .await?;

  let mut climbs_by_session: HashMap<i64, Vec<Climb>> = HashMap::new();
  for row in climb_rows {
    let discipline: Discipline = match row.discipline.parse() {
      Ok(d) => d,
      Err(e) => {
        warn!(session_id = row.session_id, "Skipping climb: {}", e);
        continue;
      }
    };
    climbs_by_session.entry(row.session_id).or_default().push(Climb {
      discipline,
      color_band: row.color_band,
      grade_value: row.grade_value,
      sent: row.sent,
      flash: row.flash,
      attempts: row.attempts,
    });
  }

  let mut sessions = Vec::with_capacity(session_rows.len());
  for row in session_rows {
    let session_type: SessionType = match row.session_type.parse() {
      Ok(t) => t,
      Err(e) => {
        warn!(session_id = row.id, "Skipping session: {}", e);
        continue;
      }
    };
    sessions.push(Session {
      id: row.id,
      date: row.date,
      session_type,
      duration_min: row.duration_min,
      rpe: row.rpe,
      distance_km: row.distance_km,
      elevation_gain_m: row.elevation_gain_m,
      climbs: climbs_by_session.remove(&row.id).unwrap_or_default(),
    });
  }

  debug!(user_id, count = sessions.len(), "Loaded sessions");

  Ok(sessions)
}
