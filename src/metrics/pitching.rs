//! Pitcher aggregation: ERA/WHIP, per-nine rates, batted-ball rates, FIP.

use super::innings::{ip_to_outs, outs_to_ip};
use super::{ratio, round_to};
use crate::cli::types::{GamePk, PlayerId, TeamId};
use crate::storage::models::PitcherLine;
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;

/// Row selection for one pitcher and/or one team over a date window.
#[derive(Debug, Clone, Default)]
pub struct PitcherFilter {
    pub player_id: Option<PlayerId>,
    pub team_id: Option<TeamId>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl PitcherFilter {
    pub fn matches(&self, row: &PitcherLine) -> bool {
        if let Some(player_id) = self.player_id {
            if row.player_id != Some(player_id) {
                return false;
            }
        }
        if let Some(team_id) = self.team_id {
            if row.team_id != Some(team_id) {
                return false;
            }
        }
        if let Some(start) = self.start_date {
            if row.date < start {
                return false;
            }
        }
        if let Some(end) = self.end_date {
            if row.date > end {
                return false;
            }
        }
        true
    }
}

/// Derived pitcher metrics. Serialized field names match the conventional
/// stat abbreviations.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PitcherMetrics {
    #[serde(rename = "ERA")]
    pub era: f64,
    #[serde(rename = "WHIP")]
    pub whip: f64,
    #[serde(rename = "G")]
    pub games: u32,
    #[serde(rename = "GS")]
    pub games_started: u32,
    #[serde(rename = "TBF")]
    pub batters_faced: u32,
    #[serde(rename = "Wins")]
    pub wins: u32,
    #[serde(rename = "Losses")]
    pub losses: u32,
    #[serde(rename = "Saves")]
    pub saves: u32,
    #[serde(rename = "Holds")]
    pub holds: u32,
    #[serde(rename = "BS")]
    pub blown_saves: u32,
    #[serde(rename = "InningsPitched")]
    pub innings_pitched: f64,
    #[serde(rename = "HR")]
    pub home_runs: u32,
    #[serde(rename = "Strikeouts")]
    pub strikeouts: u32,
    #[serde(rename = "Walks")]
    pub walks: u32,
    #[serde(rename = "HBP")]
    pub hit_by_pitch: u32,
    #[serde(rename = "WP")]
    pub wild_pitches: u32,
    #[serde(rename = "BK")]
    pub balks: u32,
    #[serde(rename = "Pitches")]
    pub pitches: u32,
    #[serde(rename = "Balls")]
    pub balls: u32,
    #[serde(rename = "Strikes")]
    pub strikes: u32,
    #[serde(rename = "K/9")]
    pub k_per_9: f64,
    #[serde(rename = "BB/9")]
    pub bb_per_9: f64,
    #[serde(rename = "H/9")]
    pub h_per_9: f64,
    #[serde(rename = "HR/9")]
    pub hr_per_9: f64,
    /// Infinite when the pitcher struck batters out but never walked one.
    #[serde(rename = "K/BB")]
    pub k_per_bb: f64,
    #[serde(rename = "K%")]
    pub k_pct: f64,
    #[serde(rename = "BB%")]
    pub bb_pct: f64,
    #[serde(rename = "K%-BB%")]
    pub k_minus_bb_pct: f64,
    #[serde(rename = "BIP")]
    pub balls_in_play: i64,
    #[serde(rename = "HR% (BIP)")]
    pub hr_per_bip: f64,
    #[serde(rename = "BABIP")]
    pub babip: f64,
    #[serde(rename = "FIP")]
    pub fip: f64,
}

/// FIP = (13*HR + 3*BB - 2*K) / IP + constant; zero innings yields zero.
pub fn fip(home_runs: u32, walks: u32, strikeouts: u32, innings: f64, constant: f64) -> f64 {
    if innings <= 0.0 {
        return 0.0;
    }
    (13.0 * home_runs as f64 + 3.0 * walks as f64 - 2.0 * strikeouts as f64) / innings + constant
}

/// FIP constant normalizing league FIP to league ERA:
/// `lgERA - (13*lgHR + 3*lgBB - 2*lgK) / lgIP`, computed over every row in
/// the (date-filtered) dataset.
pub fn league_fip_constant(rows: &[PitcherLine]) -> f64 {
    let mut home_runs = 0u32;
    let mut walks = 0u32;
    let mut strikeouts = 0u32;
    let mut earned_runs = 0u32;
    let mut outs = 0u32;
    for row in rows {
        home_runs += row.home_runs;
        walks += row.base_on_balls;
        strikeouts += row.strike_outs;
        earned_runs += row.earned_runs;
        outs += ip_to_outs(&row.innings_pitched);
    }
    let innings = outs as f64 / 3.0;
    if innings <= 0.0 {
        return 0.0;
    }
    let league_era = 9.0 * earned_runs as f64 / innings;
    league_era
        - (13.0 * home_runs as f64 + 3.0 * walks as f64 - 2.0 * strikeouts as f64) / innings
}

/// Aggregate a pitcher's (or team's) rows into derived metrics.
///
/// Returns `None` when no rows match. Re-entries in one game are collapsed
/// to the line with the most outs recorded before summing.
pub fn aggregate(
    rows: &[PitcherLine],
    filter: &PitcherFilter,
    fip_constant: f64,
) -> Option<PitcherMetrics> {
    let mut per_game: BTreeMap<(GamePk, Option<PlayerId>), &PitcherLine> = BTreeMap::new();
    for row in rows.iter().filter(|r| filter.matches(r)) {
        per_game
            .entry((row.game_pk, row.player_id))
            .and_modify(|current| {
                if ip_to_outs(&row.innings_pitched) > ip_to_outs(&current.innings_pitched) {
                    *current = row;
                }
            })
            .or_insert(row);
    }
    if per_game.is_empty() {
        return None;
    }

    let games = per_game.len() as u32;
    let mut games_started = 0u32;
    let mut batters_faced = 0u32;
    let mut wins = 0u32;
    let mut losses = 0u32;
    let mut saves = 0u32;
    let mut holds = 0u32;
    let mut blown_saves = 0u32;
    let mut home_runs = 0u32;
    let mut walks = 0u32;
    let mut strikeouts = 0u32;
    let mut hits = 0u32;
    let mut earned_runs = 0u32;
    let mut hit_by_pitch = 0u32;
    let mut wild_pitches = 0u32;
    let mut balks = 0u32;
    let mut pitches = 0u32;
    let mut balls = 0u32;
    let mut strikes = 0u32;
    let mut outs = 0u32;
    for line in per_game.values() {
        games_started += line.games_started;
        batters_faced += line.batters_faced;
        wins += line.wins;
        losses += line.losses;
        saves += line.saves;
        holds += line.holds;
        blown_saves += line.blown_saves;
        home_runs += line.home_runs;
        walks += line.base_on_balls;
        strikeouts += line.strike_outs;
        hits += line.hits;
        earned_runs += line.earned_runs;
        hit_by_pitch += line.hit_by_pitch;
        wild_pitches += line.wild_pitches;
        balks += line.balks;
        pitches += line.number_of_pitches;
        balls += line.balls;
        strikes += line.strikes;
        outs += ip_to_outs(&line.innings_pitched);
    }

    let innings = outs_to_ip(outs);

    let k_per_bb = if walks > 0 {
        strikeouts as f64 / walks as f64
    } else if strikeouts > 0 {
        f64::INFINITY
    } else {
        0.0
    };

    let k_pct = ratio(strikeouts as f64, batters_faced as f64);
    let bb_pct = ratio(walks as f64, batters_faced as f64);
    let balls_in_play =
        batters_faced as i64 - (strikeouts + walks + hit_by_pitch + home_runs) as i64;
    let bip = balls_in_play as f64;

    Some(PitcherMetrics {
        era: round_to(ratio(9.0 * earned_runs as f64, innings), 2),
        whip: round_to(ratio((walks + hits) as f64, innings), 3),
        games,
        games_started,
        batters_faced,
        wins,
        losses,
        saves,
        holds,
        blown_saves,
        innings_pitched: innings,
        home_runs,
        strikeouts,
        walks,
        hit_by_pitch,
        wild_pitches,
        balks,
        pitches,
        balls,
        strikes,
        k_per_9: round_to(ratio(9.0 * strikeouts as f64, innings), 2),
        bb_per_9: round_to(ratio(9.0 * walks as f64, innings), 2),
        h_per_9: round_to(ratio(9.0 * hits as f64, innings), 2),
        hr_per_9: round_to(ratio(9.0 * home_runs as f64, innings), 2),
        k_per_bb: round_to(k_per_bb, 2),
        k_pct: round_to(k_pct, 3),
        bb_pct: round_to(bb_pct, 3),
        k_minus_bb_pct: round_to(k_pct - bb_pct, 3),
        balls_in_play,
        hr_per_bip: round_to(ratio(home_runs as f64, bip), 3),
        babip: round_to(ratio((hits - home_runs.min(hits)) as f64, bip), 3),
        fip: round_to(fip(home_runs, walks, strikeouts, innings, fip_constant), 2),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::types::Side;

    fn line(game_pk: u64, date: &str, player: u64) -> PitcherLine {
        PitcherLine {
            game_pk: GamePk::new(game_pk),
            date: date.parse().unwrap(),
            team_id: Some(TeamId::new(693)),
            team_name: Some("Leones del Caracas".to_string()),
            player_id: Some(PlayerId::new(player)),
            player_name: Some("Test Pitcher".to_string()),
            position: Some("P".to_string()),
            is_substitute: Some(false),
            side: Side::Home,
            games_started: 0,
            batters_faced: 0,
            wins: 0,
            losses: 0,
            saves: 0,
            holds: 0,
            blown_saves: 0,
            home_runs: 0,
            base_on_balls: 0,
            strike_outs: 0,
            hits: 0,
            earned_runs: 0,
            hit_by_pitch: 0,
            wild_pitches: 0,
            balks: 0,
            number_of_pitches: 0,
            balls: 0,
            strikes: 0,
            innings_pitched: "0.0".to_string(),
        }
    }

    fn player_filter(player: u64) -> PitcherFilter {
        PitcherFilter {
            player_id: Some(PlayerId::new(player)),
            ..Default::default()
        }
    }

    #[test]
    fn test_era_and_whip() {
        let mut l = line(1, "2024-11-01", 42);
        l.innings_pitched = "9.0".to_string();
        l.earned_runs = 3;
        l.hits = 7;
        l.base_on_balls = 2;
        let metrics = aggregate(&[l], &player_filter(42), 0.0).unwrap();
        assert_eq!(metrics.innings_pitched, 9.0);
        assert_eq!(metrics.era, 3.0);
        assert_eq!(metrics.whip, 1.0);
    }

    #[test]
    fn test_innings_summed_in_outs_not_decimals() {
        let mut a = line(1, "2024-11-01", 42);
        a.innings_pitched = "5.2".to_string();
        let mut b = line(2, "2024-11-06", 42);
        b.innings_pitched = "4.1".to_string();
        let metrics = aggregate(&[a, b], &player_filter(42), 0.0).unwrap();
        // 17 + 13 outs = 30 outs = 10.0 innings; naive decimal addition
        // would give 9.3.
        assert_eq!(metrics.innings_pitched, 10.0);
    }

    #[test]
    fn test_zero_innings_all_rates_zero() {
        let l = line(1, "2024-11-01", 42);
        let metrics = aggregate(&[l], &player_filter(42), 3.1).unwrap();
        assert_eq!(metrics.era, 0.0);
        assert_eq!(metrics.whip, 0.0);
        assert_eq!(metrics.k_per_9, 0.0);
        assert_eq!(metrics.babip, 0.0);
        assert_eq!(metrics.fip, 0.0);
        assert_eq!(metrics.k_per_bb, 0.0);
    }

    #[test]
    fn test_k_per_bb_infinite_without_walks() {
        let mut l = line(1, "2024-11-01", 42);
        l.innings_pitched = "3.0".to_string();
        l.strike_outs = 5;
        let metrics = aggregate(&[l], &player_filter(42), 0.0).unwrap();
        assert_eq!(metrics.k_per_bb, f64::INFINITY);
    }

    #[test]
    fn test_duplicate_game_keeps_longest_outing() {
        let mut short = line(9, "2024-11-01", 42);
        short.innings_pitched = "0.2".to_string();
        short.strike_outs = 1;
        let mut long = line(9, "2024-11-01", 42);
        long.innings_pitched = "6.0".to_string();
        long.strike_outs = 8;

        let metrics = aggregate(&[short, long], &player_filter(42), 0.0).unwrap();
        assert_eq!(metrics.games, 1);
        assert_eq!(metrics.strikeouts, 8);
        assert_eq!(metrics.innings_pitched, 6.0);
    }

    #[test]
    fn test_team_filter_spans_multiple_pitchers_per_game() {
        let mut starter = line(9, "2024-11-01", 42);
        starter.innings_pitched = "6.0".to_string();
        starter.strike_outs = 6;
        let mut reliever = line(9, "2024-11-01", 43);
        reliever.innings_pitched = "3.0".to_string();
        reliever.strike_outs = 3;

        let filter = PitcherFilter {
            team_id: Some(TeamId::new(693)),
            ..Default::default()
        };
        let metrics = aggregate(&[starter, reliever], &filter, 0.0).unwrap();
        // Distinct pitchers in the same game are separate outings, not dupes.
        assert_eq!(metrics.games, 2);
        assert_eq!(metrics.strikeouts, 9);
        assert_eq!(metrics.innings_pitched, 9.0);
    }

    #[test]
    fn test_fip_and_league_constant() {
        // League of one pitcher: constant makes league FIP equal league ERA.
        let mut l = line(1, "2024-11-01", 42);
        l.innings_pitched = "9.0".to_string();
        l.earned_runs = 4;
        l.home_runs = 1;
        l.base_on_balls = 3;
        l.strike_outs = 9;
        let rows = vec![l];

        let constant = league_fip_constant(&rows);
        let metrics = aggregate(&rows, &player_filter(42), constant).unwrap();
        assert_eq!(metrics.era, 4.0);
        assert_eq!(metrics.fip, 4.0);
    }

    #[test]
    fn test_league_fip_constant_empty_is_zero() {
        assert_eq!(league_fip_constant(&[]), 0.0);
    }

    #[test]
    fn test_babip_and_bip() {
        let mut l = line(1, "2024-11-01", 42);
        l.innings_pitched = "9.0".to_string();
        l.batters_faced = 40;
        l.strike_outs = 10;
        l.base_on_balls = 4;
        l.hit_by_pitch = 1;
        l.home_runs = 2;
        l.hits = 9;
        let metrics = aggregate(&[l], &player_filter(42), 0.0).unwrap();
        // BIP = 40 - (10 + 4 + 1 + 2) = 23; BABIP = (9 - 2) / 23
        assert_eq!(metrics.balls_in_play, 23);
        assert_eq!(metrics.babip, 0.304);
    }
}
