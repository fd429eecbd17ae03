//! Command implementations for the MLB Stats API CLI

pub mod fetch_games;
pub mod hitter_metrics;
pub mod merge_outputs;
pub mod meta;
pub mod pitcher_metrics;


use crate::cli::types::LeagueId;
use crate::error::Result;
use crate::LEAGUE_ID_ENV_VAR;

/// American League; the default when neither the CLI nor the environment
/// names a league.
pub const DEFAULT_LEAGUE_ID: LeagueId = LeagueId(103);

/// Resolve the league to fetch: CLI flag, then `GUMBO_LEAGUE_ID`, then the
/// default. A set-but-unparseable env var is an error, not a silent default.
pub fn resolve_league_id(league_id: Option<LeagueId>) -> Result<LeagueId> {
    match league_id {
        Some(id) => Ok(id),
        None => match std::env::var(LEAGUE_ID_ENV_VAR) {
            Ok(raw) => raw.parse(),
            Err(_) => Ok(DEFAULT_LEAGUE_ID),
        },
    }
}
