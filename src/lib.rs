//! MLB Stats API Data Collection CLI Library
//!
//! A Rust library for fetching baseball game data from the MLB Stats API
//! (schedules, box scores, pitch-by-pitch live feeds), persisting results as
//! per-game CSV files, merging them into season-wide datasets, and computing
//! standard sabermetric formulas over the merged data.
//!
//! ## Features
//!
//! - **Schedule Resolution**: Turn season/league/date-range filters into game lists
//! - **Resilient Fetching**: Exponential-backoff retries on transient network failures
//! - **Record Extraction**: Flatten nested live-feed and box-score JSON into flat rows
//! - **CSV Persistence**: One file per game per category, merged into season files
//! - **Sabermetrics**: AVG/OBP/SLG/OPS and friends for hitters, ERA/WHIP/FIP for pitchers
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use mlb_gumbo::{
//!     commands::fetch_games::{handle_fetch, FetchParams},
//!     LeagueId, Season, SportId,
//! };
//!
//! # async fn example() -> mlb_gumbo::Result<()> {
//! let params = FetchParams {
//!     season: Season::new(2024),
//!     league_id: Some(LeagueId::new(135)),
//!     sport_id: SportId::new(17),
//!     // ... other parameters
//! #   use_date_range: false,
//! #   start_date: None,
//! #   end_date: None,
//! #   regular_season: true,
//! #   include_postseason: false,
//! #   team_id: None,
//! #   venue_id: None,
//! #   home_only: false,
//! #   away_only: false,
//! #   output_dir: "output".into(),
//! #   throttle_secs: 1,
//! };
//!
//! handle_fetch(params).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Set a default league ID to avoid passing it in every command:
//! ```bash
//! export GUMBO_LEAGUE_ID=135
//! ```

pub mod cli;
pub mod commands;
pub mod error;
pub mod metrics;
pub mod statsapi;
pub mod storage;

// Re-export commonly used types
pub use cli::types::{GamePk, LeagueId, PlayerId, Season, Side, SportId, TeamId, VenueId};
pub use error::{Result, StatsError};
pub use statsapi::schedule::GameRef;

pub const LEAGUE_ID_ENV_VAR: &str = "GUMBO_LEAGUE_ID";
