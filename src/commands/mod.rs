pub mod analysis;

use chrono::{NaiveDate, Utc};

use crate::db::{load_sessions, AppState};
use crate::models::Session;

/// The analytics reference date; the wall clock is only read here
pub fn resolve_today(today: Option<NaiveDate>) -> NaiveDate {
  today.unwrap_or_else(|| Utc::now().date_naive())
}

pub async fn get_sessions(state: &AppState, user_id: &str) -> Result<Vec<Session>, String> {
  load_sessions(&state.db, user_id)
    .await
    .map_err(|e| format!("Failed to fetch sessions: {}", e))
}
