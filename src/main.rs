//! climb-log: print training analytics for one user as JSON
//!
//! Usage:
//! ```bash
//! # Boulder grade progression for the last 8 weeks
//! climb-log --user abc123 climb --modality boulder --weeks 8
//!
//! # Running volume against a 25 km weekly goal
//! climb-log --user abc123 running --goal-km 25
//!
//! # ACWR status as of a fixed date
//! climb-log --user abc123 --today 2026-10-15 load
//! ```

use std::process::ExitCode;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::{error, info};

use climb_log_lib::commands::analysis::{
  get_climb_progression, get_dashboard, get_load_history, get_running_weeks, get_training_load,
};
use climb_log_lib::config::AppConfig;
use climb_log_lib::db::{initialize_db, AppState};
use climb_log_lib::logging::init_logging;
use climb_log_lib::weekly::Modality;

const MAX_CONNECTIONS: u32 = 5;

#[derive(Parser)]
#[command(
  name = "climb-log",
  about = "Training log analytics",
  long_about = "Grade progression, running volume and training load (ACWR) \
                from a climb-log database."
)]
struct Cli {
  #[command(subcommand)]
  command: Command,

  /// Database URL override
  #[arg(long, global = true)]
  database_url: Option<String>,

  /// User whose sessions are analysed (defaults to CLIMB_LOG_USER_ID)
  #[arg(long, global = true)]
  user: Option<String>,

  /// Reference date, YYYY-MM-DD (defaults to today, UTC)
  #[arg(long, global = true)]
  today: Option<NaiveDate>,

  /// Enable debug logging
  #[arg(long, short = 'v', global = true)]
  verbose: bool,
}

#[derive(Subcommand)]
enum Command {
  /// Weekly grade progression
  Climb {
    #[arg(long, default_value = "boulder")]
    modality: Modality,

    #[arg(long)]
    weeks: Option<u32>,
  },

  /// Weekly running volume
  Running {
    #[arg(long)]
    weeks: Option<u32>,

    #[arg(long)]
    goal_km: Option<f64>,
  },

  /// Current acute:chronic workload status
  Load,

  /// ACWR over the last 8 weeks
  History,

  /// Everything above in one report
  Dashboard {
    #[arg(long, default_value = "boulder")]
    modality: Modality,

    #[arg(long)]
    weeks: Option<u32>,

    #[arg(long)]
    goal_km: Option<f64>,
  },
}

fn to_json<T: Serialize>(value: &T) -> Result<String, String> {
  serde_json::to_string_pretty(value).map_err(|e| format!("Failed to serialize report: {}", e))
}

async fn run(cli: Cli, config: AppConfig) -> Result<String, String> {
  let user_id = cli
    .user
    .or(config.user_id)
    .ok_or_else(|| "No user given: pass --user or set CLIMB_LOG_USER_ID".to_string())?;
  let database_url = cli.database_url.unwrap_or(config.database_url);

  let db = initialize_db(&database_url, MAX_CONNECTIONS)
    .await
    .map_err(|e| e.to_string())?;
  let state = AppState { db };
  let today = cli.today;

  info!(user_id = %user_id, "Running report");

  let report = match cli.command {
    Command::Climb { modality, weeks } => {
      let weeks = weeks.unwrap_or(config.weeks_back);
      to_json(&get_climb_progression(&state, &user_id, weeks, modality, today).await?)
    }
    Command::Running { weeks, goal_km } => {
      let weeks = weeks.unwrap_or(config.weeks_back);
      let goal_km = goal_km.unwrap_or(config.weekly_goal_km);
      to_json(&get_running_weeks(&state, &user_id, weeks, goal_km, today).await?)
    }
    Command::Load => to_json(&get_training_load(&state, &user_id, today).await?),
    Command::History => to_json(&get_load_history(&state, &user_id, today).await?),
    Command::Dashboard { modality, weeks, goal_km } => {
      let weeks = weeks.unwrap_or(config.weeks_back);
      let goal_km = goal_km.unwrap_or(config.weekly_goal_km);
      to_json(&get_dashboard(&state, &user_id, weeks, modality, goal_km, today).await?)
    }
  };

  state.db.close().await;
  report
}

#[tokio::main]
async fn main() -> ExitCode {
  // Load environment variables from .env file
  dotenvy::dotenv().ok();

  let cli = Cli::parse();
  let config = AppConfig::from_env();

  let directives = match (&config, cli.verbose) {
    (_, true) => "debug".to_string(),
    (Ok(c), false) => c.log_directives.clone(),
    (Err(_), false) => "info".to_string(),
  };
  init_logging(&directives);

  let config = match config {
    Ok(c) => c,
    Err(e) => {
      error!("{}", e);
      return ExitCode::FAILURE;
    }
  };

  match run(cli, config).await {
    Ok(report) => {
      println!("{}", report);
      ExitCode::SUCCESS
    }
    Err(e) => {
      error!("{}", e);
      ExitCode::FAILURE
    }
  }
}
