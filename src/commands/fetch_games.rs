//! Fetch command: schedule -> per-game live feed + box score -> CSV files.
//!
//! Games are processed strictly one at a time with a fixed throttle delay
//! between them. A failed game is logged and skipped; the run continues.

use crate::cli::types::{DateRange, GameType, LeagueId, Season, Side, SportId, TeamId, VenueId};
use crate::error::Result;
use crate::statsapi::extract::{hitter_lines, pitch_events, pitcher_lines};
use crate::statsapi::http::{FetchConfig, StatsApiClient};
use crate::statsapi::schedule::{GameRef, ScheduleConfig, ScheduleFilter, ScheduleResolver};
use crate::storage::models::PitchEvent;
use crate::storage::{per_game_file, write_rows, Category};
use chrono::NaiveDate;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{error, info};

use super::resolve_league_id;

/// Configuration parameters for the fetch command.
#[derive(Debug)]
pub struct FetchParams {
    pub season: Season,
    pub league_id: Option<LeagueId>,
    pub sport_id: SportId,
    pub use_date_range: bool,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub regular_season: bool,
    pub include_postseason: bool,
    pub team_id: Option<TeamId>,
    pub venue_id: Option<VenueId>,
    pub home_only: bool,
    pub away_only: bool,
    pub output_dir: PathBuf,
    pub throttle_secs: u64,
}

impl FetchParams {
    fn game_types(&self) -> Vec<GameType> {
        let mut types = Vec::new();
        if self.regular_season {
            types.push(GameType::Regular);
        }
        if self.include_postseason {
            types.push(GameType::Postseason);
        }
        if types.is_empty() {
            // Nothing toggled means regular season.
            types.push(GameType::Regular);
        }
        types
    }

    fn date_range(&self) -> Option<DateRange> {
        if !self.use_date_range {
            return None;
        }
        match (self.start_date, self.end_date) {
            (Some(start), Some(end)) => Some(DateRange::new(start, end)),
            _ => None,
        }
    }

    fn side(&self) -> Option<Side> {
        if self.home_only {
            Some(Side::Home)
        } else if self.away_only {
            Some(Side::Away)
        } else {
            None
        }
    }
}

/// Resolve the schedule and process each game sequentially.
pub async fn handle_fetch(params: FetchParams) -> Result<()> {
    let league_id = resolve_league_id(params.league_id)?;

    let client = StatsApiClient::new(FetchConfig {
        throttle: Duration::from_secs(params.throttle_secs),
        ..FetchConfig::default()
    })?;
    let resolver = ScheduleResolver::new(&client, ScheduleConfig::default());

    let filter = ScheduleFilter {
        season: params.season,
        league_id,
        sport_id: params.sport_id,
        date_range: params.date_range(),
        game_types: params.game_types(),
        team_id: params.team_id,
        venue_id: params.venue_id,
        side: params.side(),
    };

    let games = resolver.resolve(&filter).await?;
    if games.is_empty() {
        println!(
            "No games matched season {} in league {}",
            params.season, league_id
        );
        return Ok(());
    }
    println!(
        "Processing {} games for season {} into {}",
        games.len(),
        params.season,
        params.output_dir.display()
    );

    std::fs::create_dir_all(&params.output_dir)?;
    for (index, game) in games.iter().enumerate() {
        info!(game_pk = %game.game_pk, date = %game.date, "processing game");
        process_game(&client, game, &params.output_dir).await;
        // Throttle between games, not after the last one.
        if index + 1 < games.len() {
            client.throttle().await;
        }
    }

    println!("Done: {} games processed", games.len());
    Ok(())
}

/// Fetch and persist one game. Failures are logged per category; a bad game
/// never aborts the run.
async fn process_game(client: &StatsApiClient, game: &GameRef, output_dir: &Path) {
    match client.live_feed(game.game_pk).await {
        Ok(feed) => {
            let rows: Vec<PitchEvent> = pitch_events(&feed, game).collect();
            if rows.is_empty() {
                info!(game_pk = %game.game_pk, "no pitch events in live feed");
            } else if let Err(e) = write_game_rows(output_dir, Category::PitchByPitch, game, &rows)
            {
                error!(game_pk = %game.game_pk, error = %e, "failed to save pitch-by-pitch CSV");
            }
        }
        Err(e) => {
            error!(game_pk = %game.game_pk, error = %e, "could not fetch live feed");
        }
    }

    match client.boxscore(game.game_pk).await {
        Ok(boxscore) => {
            let hitters = hitter_lines(&boxscore, game);
            if !hitters.is_empty() {
                if let Err(e) = write_game_rows(output_dir, Category::Hitters, game, &hitters) {
                    error!(game_pk = %game.game_pk, error = %e, "failed to save hitters CSV");
                }
            }
            let pitchers = pitcher_lines(&boxscore, game);
            if !pitchers.is_empty() {
                if let Err(e) = write_game_rows(output_dir, Category::Pitchers, game, &pitchers) {
                    error!(game_pk = %game.game_pk, error = %e, "failed to save pitchers CSV");
                }
            }
        }
        Err(e) => {
            error!(game_pk = %game.game_pk, error = %e, "could not fetch boxscore");
        }
    }
}

fn write_game_rows<R: serde::Serialize>(
    output_dir: &Path,
    category: Category,
    game: &GameRef,
    rows: &[R],
) -> Result<()> {
    let path = per_game_file(output_dir, category, game.date, game.game_pk);
    write_rows(&path, rows)?;
    info!(file = %path.display(), rows = rows.len(), "saved");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> FetchParams {
        FetchParams {
            season: Season::new(2024),
            league_id: None,
            sport_id: SportId::new(17),
            use_date_range: false,
            start_date: None,
            end_date: None,
            regular_season: false,
            include_postseason: false,
            team_id: None,
            venue_id: None,
            home_only: false,
            away_only: false,
            output_dir: PathBuf::from("output"),
            throttle_secs: 0,
        }
    }

    #[test]
    fn test_game_types_default_to_regular_season() {
        assert_eq!(params().game_types(), vec![GameType::Regular]);
    }

    #[test]
    fn test_game_types_both_toggles() {
        let mut p = params();
        p.regular_season = true;
        p.include_postseason = true;
        assert_eq!(
            p.game_types(),
            vec![GameType::Regular, GameType::Postseason]
        );
    }

    #[test]
    fn test_date_range_needs_flag_and_both_bounds() {
        let mut p = params();
        p.start_date = Some("2024-12-01".parse().unwrap());
        p.end_date = Some("2024-12-15".parse().unwrap());
        // Dates without the toggle are ignored, matching the flag's meaning.
        assert!(p.date_range().is_none());

        p.use_date_range = true;
        let range = p.date_range().unwrap();
        assert_eq!(range.start.to_string(), "2024-12-01");

        p.end_date = None;
        assert!(p.date_range().is_none());
    }

    #[test]
    fn test_side_from_toggles() {
        let mut p = params();
        assert!(p.side().is_none());
        p.home_only = true;
        assert_eq!(p.side(), Some(Side::Home));
        p.home_only = false;
        p.away_only = true;
        assert_eq!(p.side(), Some(Side::Away));
    }
}
