//! Schedule resolution: filters in, ordered game references out.

use crate::cli::types::{DateRange, GamePk, GameType, LeagueId, Season, Side, SportId, TeamId, VenueId};
use crate::error::Result;
use crate::statsapi::http::StatsApiClient;
use crate::statsapi::types::{ScheduleGame, ScheduleResponse};
use chrono::NaiveDate;
use std::collections::HashSet;
use tracing::{info, warn};


/// One resolved game: the key the per-game endpoints take, plus its date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameRef {
    pub game_pk: GamePk,
    pub date: NaiveDate,
}

/// Resolver configuration, passed at construction.
#[derive(Debug, Clone)]
pub struct ScheduleConfig {
    /// Leagues whose schedule endpoint rejects the `gameTypes` parameter.
    /// For these, the request omits the parameter and game-type filtering
    /// happens locally against each returned game.
    pub game_type_unsupported: HashSet<LeagueId>,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        // LIDOM (131) returns an error for any gameTypes value.
        Self {
            game_type_unsupported: HashSet::from([LeagueId::new(131)]),
        }
    }
}

/// Everything the schedule endpoint can be filtered by.
#[derive(Debug, Clone)]
pub struct ScheduleFilter {
    pub season: Season,
    pub league_id: LeagueId,
    pub sport_id: SportId,
    pub date_range: Option<DateRange>,
    /// Requested game types; an empty list means no game-type restriction.
    pub game_types: Vec<GameType>,
    pub team_id: Option<TeamId>,
    pub venue_id: Option<VenueId>,
    /// Restrict to games where `team_id` is home or away. No effect
    /// without a team id.
    pub side: Option<Side>,
}

impl ScheduleFilter {
    fn base_query(&self) -> Vec<(&'static str, String)> {
        let mut query = vec![
            ("sportId", self.sport_id.to_string()),
            ("leagueId", self.league_id.to_string()),
            ("season", self.season.to_string()),
        ];
        if let Some(range) = &self.date_range {
            query.push(("startDate", range.start.to_string()));
            query.push(("endDate", range.end.to_string()));
        }
        query
    }

    /// Local filters applied to every returned game, regardless of which
    /// parameters the upstream honored.
    fn keep(&self, game: &ScheduleGame) -> bool {
        let home = game.teams.home.team.as_ref().map(|t| t.id);
        let away = game.teams.away.team.as_ref().map(|t| t.id);

        if let Some(team) = self.team_id {
            if home != Some(team) && away != Some(team) {
                return false;
            }
            match self.side {
                Some(Side::Home) if home != Some(team) => return false,
                Some(Side::Away) if away != Some(team) => return false,
                _ => {}
            }
        }

        if let Some(venue) = self.venue_id {
            if game.venue.as_ref().and_then(|v| v.id) != Some(venue) {
                return false;
            }
        }

        if !self.game_types.is_empty() {
            // Games without a type field are kept; filtering on an absent
            // value would silently drop whole leagues.
            if let Some(code) = game.game_type.as_deref() {
                if !self.game_types.iter().any(|t| t.code() == code) {
                    return false;
                }
            }
        }

        true
    }
}

/// Turns a [`ScheduleFilter`] into an ordered list of [`GameRef`].
pub struct ScheduleResolver<'a> {
    client: &'a StatsApiClient,
    config: ScheduleConfig,
}

impl<'a> ScheduleResolver<'a> {
    pub fn new(client: &'a StatsApiClient, config: ScheduleConfig) -> Self {
        Self { client, config }
    }

    pub async fn resolve(&self, filter: &ScheduleFilter) -> Result<Vec<GameRef>> {
        let mut games = Vec::new();

        if self.config.game_type_unsupported.contains(&filter.league_id) {
            // One request without the parameter; the game-type restriction in
            // `keep` does the filtering instead.
            warn!(
                league_id = %filter.league_id,
                "league does not accept a gameTypes parameter, filtering locally"
            );
            let schedule = self.client.schedule(&filter.base_query()).await?;
            collect_games(&schedule, filter, &mut games);
        } else {
            // The endpoint takes one gameTypes value per request.
            for game_type in &filter.game_types {
                let mut query = filter.base_query();
                query.push(("gameTypes", game_type.code().to_string()));
                let schedule = self.client.schedule(&query).await?;
                collect_games(&schedule, filter, &mut games);
            }
            if filter.game_types.is_empty() {
                let schedule = self.client.schedule(&filter.base_query()).await?;
                collect_games(&schedule, filter, &mut games);
            }
        }

        info!(
            games = games.len(),
            season = %filter.season,
            league_id = %filter.league_id,
            "resolved schedule"
        );
        Ok(games)
    }
}

fn collect_games(schedule: &ScheduleResponse, filter: &ScheduleFilter, out: &mut Vec<GameRef>) {
    for date in &schedule.dates {
        for game in &date.games {
            if filter.keep(game) {
                out.push(GameRef {
                    game_pk: game.game_pk,
                    date: date.date,
                });
            }
        }
    }
}
