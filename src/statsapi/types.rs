//! Typed views of the Stats API payloads.
//!
//! Only the fields the extractors consume are modeled; everything else in the
//! upstream documents is ignored. Fields that are absent for some games are
//! `Option` or defaulted so that extraction never fails on a missing key.

use crate::cli::types::{GamePk, LeagueId, PlayerId, SportId, TeamId, VenueId};
use chrono::NaiveDate;
use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;


/// Deserialize a stats block, mapping an empty JSON object to `None`.
///
/// Box scores carry `batting`/`pitching` keys for every player with `{}` as
/// the value when the player did not bat or pitch; those must not produce rows.
fn de_stats_block<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: serde::de::DeserializeOwned,
{
    let raw: Option<Value> = Deserialize::deserialize(deserializer)?;
    match raw {
        None => Ok(None),
        Some(Value::Object(map)) if map.is_empty() => Ok(None),
        Some(value) => serde_json::from_value(value)
            .map(Some)
            .map_err(de::Error::custom),
    }
}

// ---------------------------------------------------------------------------
// Schedule
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleResponse {
    #[serde(default)]
    pub dates: Vec<ScheduleDate>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleDate {
    pub date: NaiveDate,
    #[serde(default)]
    pub games: Vec<ScheduleGame>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleGame {
    pub game_pk: GamePk,
    #[serde(default)]
    pub game_type: Option<String>,
    #[serde(default)]
    pub teams: ScheduleTeams,
    #[serde(default)]
    pub venue: Option<VenueRef>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScheduleTeams {
    #[serde(default)]
    pub home: ScheduleSide,
    #[serde(default)]
    pub away: ScheduleSide,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScheduleSide {
    #[serde(default)]
    pub team: Option<TeamRef>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TeamRef {
    pub id: TeamId,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VenueRef {
    #[serde(default)]
    pub id: Option<VenueId>,
    #[serde(default)]
    pub name: Option<String>,
}

// ---------------------------------------------------------------------------
// Live feed (GUMBO)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveFeed {
    #[serde(default)]
    pub live_data: LiveData,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LiveData {
    #[serde(default)]
    pub plays: Plays,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plays {
    #[serde(default)]
    pub all_plays: Vec<Play>,
}

/// One at-bat (or other plate event) with its per-pitch sub-events.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Play {
    #[serde(default)]
    pub about: PlayAbout,
    #[serde(default)]
    pub result: PlayResult,
    #[serde(default)]
    pub matchup: Matchup,
    #[serde(default)]
    pub play_events: Vec<PlayEvent>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayAbout {
    #[serde(default)]
    pub at_bat_index: Option<u32>,
    #[serde(default)]
    pub inning: Option<u8>,
    #[serde(default)]
    pub half_inning: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayResult {
    #[serde(default)]
    pub event: Option<String>,
    #[serde(default)]
    pub event_type: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub rbi: Option<u8>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Matchup {
    #[serde(default)]
    pub batter: Option<Person>,
    #[serde(default)]
    pub pitcher: Option<Person>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub id: PlayerId,
    #[serde(default)]
    pub full_name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayEvent {
    #[serde(default)]
    pub pitch_number: Option<u16>,
    #[serde(default, rename = "type")]
    pub event_type: Option<String>,
    #[serde(default)]
    pub details: Option<EventDetails>,
    #[serde(default)]
    pub pitch_data: Option<PitchData>,
    #[serde(default)]
    pub hit_data: Option<HitData>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDetails {
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub call: Option<CallRef>,
    #[serde(default, rename = "type")]
    pub pitch_type: Option<PitchTypeRef>,
    #[serde(default)]
    pub is_in_play: Option<bool>,
    #[serde(default)]
    pub is_strike: Option<bool>,
    #[serde(default)]
    pub is_ball: Option<bool>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CallRef {
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PitchTypeRef {
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PitchData {
    #[serde(default)]
    pub start_speed: Option<f64>,
    #[serde(default)]
    pub end_speed: Option<f64>,
    #[serde(default)]
    pub strike_zone_top: Option<f64>,
    #[serde(default)]
    pub strike_zone_bottom: Option<f64>,
    #[serde(default)]
    pub zone: Option<u8>,
    #[serde(default)]
    pub breaks: Option<PitchBreaks>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PitchBreaks {
    #[serde(default)]
    pub spin_rate: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HitData {
    #[serde(default)]
    pub coordinates: Option<HitCoordinates>,
    #[serde(default)]
    pub launch_angle: Option<f64>,
    #[serde(default)]
    pub launch_speed: Option<f64>,
    #[serde(default)]
    pub total_distance: Option<f64>,
    #[serde(default)]
    pub trajectory: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HitCoordinates {
    #[serde(default, rename = "coordX")]
    pub coord_x: Option<f64>,
    #[serde(default, rename = "coordY")]
    pub coord_y: Option<f64>,
}

// ---------------------------------------------------------------------------
// Box score
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct Boxscore {
    #[serde(default)]
    pub teams: BoxscoreTeams,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct BoxscoreTeams {
    #[serde(default)]
    pub home: BoxscoreTeam,
    #[serde(default)]
    pub away: BoxscoreTeam,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct BoxscoreTeam {
    #[serde(default)]
    pub team: Option<TeamRef>,
    /// Keyed by `"ID<playerId>"`; a BTreeMap keeps extraction order stable.
    #[serde(default)]
    pub players: BTreeMap<String, BoxscorePlayer>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoxscorePlayer {
    #[serde(default)]
    pub person: Option<Person>,
    #[serde(default)]
    pub position: Option<PositionRef>,
    #[serde(default)]
    pub batting_order: Option<String>,
    #[serde(default)]
    pub is_substitute: Option<bool>,
    #[serde(default)]
    pub stats: PlayerGameStats,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PositionRef {
    #[serde(default)]
    pub abbreviation: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlayerGameStats {
    #[serde(default, deserialize_with = "de_stats_block")]
    pub batting: Option<BattingStats>,
    #[serde(default, deserialize_with = "de_stats_block")]
    pub pitching: Option<PitchingStats>,
}

/// One player's cumulative batting line in one game.
///
/// Counting stats default to zero when the upstream omits them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BattingStats {
    #[serde(default)]
    pub runs: u32,
    #[serde(default)]
    pub doubles: u32,
    #[serde(default)]
    pub triples: u32,
    #[serde(default)]
    pub home_runs: u32,
    #[serde(default)]
    pub strike_outs: u32,
    #[serde(default)]
    pub base_on_balls: u32,
    #[serde(default)]
    pub intentional_walks: u32,
    #[serde(default)]
    pub hits: u32,
    #[serde(default)]
    pub hit_by_pitch: u32,
    #[serde(default)]
    pub at_bats: u32,
    #[serde(default)]
    pub caught_stealing: u32,
    #[serde(default)]
    pub stolen_bases: u32,
    #[serde(default)]
    pub ground_into_double_play: u32,
    #[serde(default)]
    pub plate_appearances: u32,
    #[serde(default)]
    pub total_bases: u32,
    #[serde(default)]
    pub rbi: u32,
    #[serde(default)]
    pub left_on_base: u32,
    #[serde(default)]
    pub sac_bunts: u32,
    #[serde(default)]
    pub sac_flies: u32,
}

/// One player's cumulative pitching line in one game.
///
/// `innings_pitched` stays a string in baseball thirds notation ("6.2");
/// the aggregator converts it to outs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PitchingStats {
    #[serde(default)]
    pub games_started: u32,
    #[serde(default)]
    pub batters_faced: u32,
    #[serde(default)]
    pub wins: u32,
    #[serde(default)]
    pub losses: u32,
    #[serde(default)]
    pub saves: u32,
    #[serde(default)]
    pub holds: u32,
    #[serde(default)]
    pub blown_saves: u32,
    #[serde(default)]
    pub home_runs: u32,
    #[serde(default)]
    pub base_on_balls: u32,
    #[serde(default)]
    pub strike_outs: u32,
    #[serde(default)]
    pub hits: u32,
    #[serde(default)]
    pub earned_runs: u32,
    #[serde(default)]
    pub hit_by_pitch: u32,
    #[serde(default)]
    pub wild_pitches: u32,
    #[serde(default)]
    pub balks: u32,
    #[serde(default)]
    pub number_of_pitches: u32,
    #[serde(default)]
    pub balls: u32,
    #[serde(default)]
    pub strikes: u32,
    #[serde(default)]
    pub innings_pitched: String,
}

// ---------------------------------------------------------------------------
// Metadata listings
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct LeaguesResponse {
    #[serde(default)]
    pub leagues: Vec<LeagueMeta>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeagueMeta {
    pub id: LeagueId,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub abbreviation: Option<String>,
    #[serde(default)]
    pub sport: Option<SportRef>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SportRef {
    #[serde(default)]
    pub id: Option<SportId>,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TeamsResponse {
    #[serde(default)]
    pub teams: Vec<TeamMeta>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMeta {
    pub id: TeamId,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub abbreviation: Option<String>,
    #[serde(default)]
    pub location_name: Option<String>,
    #[serde(default)]
    pub league: Option<LeagueRef>,
    #[serde(default)]
    pub sport: Option<SportRef>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeagueRef {
    #[serde(default)]
    pub id: Option<LeagueId>,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VenuesResponse {
    #[serde(default)]
    pub venues: Vec<VenueMeta>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VenueMeta {
    pub id: VenueId,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
}
