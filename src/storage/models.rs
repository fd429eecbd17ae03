//! Flat row types persisted to CSV.
//!
//! Column names follow the upstream camelCase spelling so merged files line
//! up with the raw API field names. Every measurement field is optional;
//! absent values serialize as empty cells.

use crate::cli::types::{GamePk, PlayerId, Side, TeamId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One pitch (or non-pitch play event) within one at-bat within one game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PitchEvent {
    pub game_pk: GamePk,
    pub date: NaiveDate,
    pub at_bat_index: Option<u32>,
    pub inning: Option<u8>,
    pub half_inning: Option<String>,
    pub batter: Option<String>,
    pub batter_id: Option<PlayerId>,
    pub pitcher: Option<String>,
    pub pitcher_id: Option<PlayerId>,
    pub at_bat_result: Option<String>,
    pub at_bat_result_type: Option<String>,
    pub rbi: Option<u8>,
    pub event_type: Option<String>,
    pub pitch_number: Option<u16>,
    pub description: Option<String>,
    pub call_description: Option<String>,
    pub pitch_type: Option<String>,
    pub is_in_play: Option<bool>,
    pub is_strike: Option<bool>,
    pub is_ball: Option<bool>,
    pub start_speed: Option<f64>,
    pub end_speed: Option<f64>,
    pub spin_rate: Option<f64>,
    pub strike_zone_top: Option<f64>,
    pub strike_zone_bottom: Option<f64>,
    pub zone: Option<u8>,
    #[serde(rename = "coordinates_x")]
    pub coordinates_x: Option<f64>,
    #[serde(rename = "coordinates_y")]
    pub coordinates_y: Option<f64>,
    pub launch_angle: Option<f64>,
    pub launch_speed: Option<f64>,
    pub total_distance: Option<f64>,
    pub trajectory: Option<String>,
}

/// One player's cumulative batting line in one game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HitterLine {
    pub game_pk: GamePk,
    pub date: NaiveDate,
    pub team_id: Option<TeamId>,
    pub team_name: Option<String>,
    pub player_id: Option<PlayerId>,
    pub player_name: Option<String>,
    pub position: Option<String>,
    pub batting_order: Option<String>,
    pub is_substitute: Option<bool>,
    pub side: Side,
    pub runs: u32,
    pub doubles: u32,
    pub triples: u32,
    pub home_runs: u32,
    pub strike_outs: u32,
    pub base_on_balls: u32,
    pub intentional_walks: u32,
    pub hits: u32,
    pub hit_by_pitch: u32,
    pub at_bats: u32,
    pub caught_stealing: u32,
    pub stolen_bases: u32,
    pub ground_into_double_play: u32,
    pub plate_appearances: u32,
    pub total_bases: u32,
    pub rbi: u32,
    pub left_on_base: u32,
    pub sac_bunts: u32,
    pub sac_flies: u32,
}

/// One player's cumulative pitching line in one game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PitcherLine {
    pub game_pk: GamePk,
    pub date: NaiveDate,
    pub team_id: Option<TeamId>,
    pub team_name: Option<String>,
    pub player_id: Option<PlayerId>,
    pub player_name: Option<String>,
    pub position: Option<String>,
    pub is_substitute: Option<bool>,
    pub side: Side,
    pub games_started: u32,
    pub batters_faced: u32,
    pub wins: u32,
    pub losses: u32,
    pub saves: u32,
    pub holds: u32,
    pub blown_saves: u32,
    pub home_runs: u32,
    pub base_on_balls: u32,
    pub strike_outs: u32,
    pub hits: u32,
    pub earned_runs: u32,
    pub hit_by_pitch: u32,
    pub wild_pitches: u32,
    pub balks: u32,
    pub number_of_pitches: u32,
    pub balls: u32,
    pub strikes: u32,
    /// Baseball thirds notation, e.g. "6.2" = 6 innings and 2 outs.
    pub innings_pitched: String,
}
