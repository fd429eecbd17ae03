//! Hitter aggregation: AVG/OBP/SLG/OPS and supporting stats.

use super::{ratio, round_to};
use crate::cli::types::{GamePk, PlayerId, Side, TeamId};
use crate::storage::models::HitterLine;
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;

/// Row selection for one hitter over a date window.
#[derive(Debug, Clone)]
pub struct HitterFilter {
    pub player_id: PlayerId,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub side: Option<Side>,
    pub team_id: Option<TeamId>,
    pub position: Option<String>,
}

impl HitterFilter {
    fn matches(&self, row: &HitterLine) -> bool {
        if row.player_id != Some(self.player_id) {
            return false;
        }
        if row.date < self.start_date || row.date > self.end_date {
            return false;
        }
        if let Some(side) = self.side {
            if row.side != side {
                return false;
            }
        }
        if let Some(team_id) = self.team_id {
            if row.team_id != Some(team_id) {
                return false;
            }
        }
        if let Some(position) = &self.position {
            if row.position.as_deref() != Some(position.as_str()) {
                return false;
            }
        }
        true
    }
}

/// Derived hitter metrics. Serialized field names match the conventional
/// stat abbreviations.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HitterMetrics {
    #[serde(rename = "AVG")]
    pub avg: f64,
    #[serde(rename = "OBP")]
    pub obp: f64,
    #[serde(rename = "SLG")]
    pub slg: f64,
    #[serde(rename = "OPS")]
    pub ops: f64,
    #[serde(rename = "PlateAppearances")]
    pub plate_appearances: u32,
    #[serde(rename = "AtBats")]
    pub at_bats: u32,
    #[serde(rename = "Hits")]
    pub hits: u32,
    #[serde(rename = "Runs")]
    pub runs: u32,
    #[serde(rename = "RBI")]
    pub rbi: u32,
    #[serde(rename = "Doubles")]
    pub doubles: u32,
    #[serde(rename = "Triples")]
    pub triples: u32,
    #[serde(rename = "HomeRuns")]
    pub home_runs: u32,
    #[serde(rename = "Walks")]
    pub walks: u32,
    #[serde(rename = "Strikeouts")]
    pub strikeouts: u32,
    #[serde(rename = "StolenBases")]
    pub stolen_bases: u32,
    #[serde(rename = "ISO")]
    pub iso: f64,
    /// Infinite when the hitter walked but never struck out.
    #[serde(rename = "BB/K")]
    pub bb_per_k: f64,
    #[serde(rename = "SB%")]
    pub sb_pct: f64,
    #[serde(rename = "HR%")]
    pub hr_pct: f64,
    #[serde(rename = "K%")]
    pub k_pct: f64,
    #[serde(rename = "BB%")]
    pub bb_pct: f64,
}

/// Aggregate one hitter's rows into derived metrics.
///
/// Returns `None` when no rows match the filter. A player can carry several
/// lines for the same game (substitutions re-enter the box score); only the
/// line with the most plate appearances per game contributes to the sums.
pub fn aggregate(rows: &[HitterLine], filter: &HitterFilter) -> Option<HitterMetrics> {
    let mut per_game: BTreeMap<GamePk, &HitterLine> = BTreeMap::new();
    for row in rows.iter().filter(|r| filter.matches(r)) {
        per_game
            .entry(row.game_pk)
            .and_modify(|current| {
                if row.plate_appearances > current.plate_appearances {
                    *current = row;
                }
            })
            .or_insert(row);
    }
    if per_game.is_empty() {
        return None;
    }

    let mut at_bats = 0u32;
    let mut hits = 0u32;
    let mut walks = 0u32;
    let mut hbp = 0u32;
    let mut sac_flies = 0u32;
    let mut plate_appearances = 0u32;
    let mut total_bases = 0u32;
    let mut strikeouts = 0u32;
    let mut stolen_bases = 0u32;
    let mut caught_stealing = 0u32;
    let mut home_runs = 0u32;
    let mut runs = 0u32;
    let mut rbi = 0u32;
    let mut doubles = 0u32;
    let mut triples = 0u32;
    for line in per_game.values() {
        at_bats += line.at_bats;
        hits += line.hits;
        walks += line.base_on_balls;
        hbp += line.hit_by_pitch;
        sac_flies += line.sac_flies;
        plate_appearances += line.plate_appearances;
        total_bases += line.total_bases;
        strikeouts += line.strike_outs;
        stolen_bases += line.stolen_bases;
        caught_stealing += line.caught_stealing;
        home_runs += line.home_runs;
        runs += line.runs;
        rbi += line.rbi;
        doubles += line.doubles;
        triples += line.triples;
    }

    let avg = ratio(hits as f64, at_bats as f64);
    let obp = ratio(
        (hits + walks + hbp) as f64,
        (at_bats + walks + hbp + sac_flies) as f64,
    );
    let slg = ratio(total_bases as f64, at_bats as f64);
    let ops = obp + slg;

    let bb_per_k = if strikeouts > 0 {
        walks as f64 / strikeouts as f64
    } else if walks > 0 {
        f64::INFINITY
    } else {
        0.0
    };
    let sb_attempts = stolen_bases + caught_stealing;

    Some(HitterMetrics {
        avg: round_to(avg, 3),
        obp: round_to(obp, 3),
        slg: round_to(slg, 3),
        ops: round_to(ops, 3),
        plate_appearances,
        at_bats,
        hits,
        runs,
        rbi,
        doubles,
        triples,
        home_runs,
        walks,
        strikeouts,
        stolen_bases,
        iso: round_to(slg - avg, 3),
        bb_per_k: round_to(bb_per_k, 3),
        sb_pct: round_to(ratio(stolen_bases as f64, sb_attempts as f64), 3),
        hr_pct: round_to(ratio(home_runs as f64, plate_appearances as f64), 3),
        k_pct: round_to(ratio(strikeouts as f64, plate_appearances as f64), 3),
        bb_pct: round_to(ratio(walks as f64, plate_appearances as f64), 3),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(game_pk: u64, date: &str) -> HitterLine {
        HitterLine {
            game_pk: GamePk::new(game_pk),
            date: date.parse().unwrap(),
            team_id: Some(TeamId::new(693)),
            team_name: Some("Leones del Caracas".to_string()),
            player_id: Some(PlayerId::new(600524)),
            player_name: Some("Test Hitter".to_string()),
            position: Some("SS".to_string()),
            batting_order: Some("100".to_string()),
            is_substitute: Some(false),
            side: Side::Home,
            runs: 0,
            doubles: 0,
            triples: 0,
            home_runs: 0,
            strike_outs: 0,
            base_on_balls: 0,
            intentional_walks: 0,
            hits: 0,
            hit_by_pitch: 0,
            at_bats: 0,
            caught_stealing: 0,
            stolen_bases: 0,
            ground_into_double_play: 0,
            plate_appearances: 0,
            total_bases: 0,
            rbi: 0,
            left_on_base: 0,
            sac_bunts: 0,
            sac_flies: 0,
        }
    }

    fn filter() -> HitterFilter {
        HitterFilter {
            player_id: PlayerId::new(600524),
            start_date: "2024-10-01".parse().unwrap(),
            end_date: "2025-01-25".parse().unwrap(),
            side: None,
            team_id: None,
            position: None,
        }
    }

    #[test]
    fn test_avg_is_hits_over_at_bats() {
        let mut rows = Vec::new();
        for pk in 0..10u64 {
            let mut l = line(pk, "2024-11-01");
            l.at_bats = 10;
            l.hits = 3;
            l.plate_appearances = 10;
            rows.push(l);
        }
        let metrics = aggregate(&rows, &filter()).unwrap();
        assert_eq!(metrics.at_bats, 100);
        assert_eq!(metrics.hits, 30);
        assert_eq!(metrics.avg, 0.300);
    }

    #[test]
    fn test_zero_at_bats_yields_zero_not_error() {
        let mut l = line(1, "2024-11-01");
        l.base_on_balls = 2;
        l.plate_appearances = 2;
        let metrics = aggregate(&[l], &filter()).unwrap();
        assert_eq!(metrics.avg, 0.0);
        assert_eq!(metrics.slg, 0.0);
        assert_eq!(metrics.sb_pct, 0.0);
        // Walks without strikeouts: the one infinite sentinel.
        assert_eq!(metrics.bb_per_k, f64::INFINITY);
    }

    #[test]
    fn test_all_zero_rows_yield_all_zero_metrics() {
        let rows = vec![line(1, "2024-11-01"), line(2, "2024-11-02")];
        let metrics = aggregate(&rows, &filter()).unwrap();
        assert_eq!(metrics.avg, 0.0);
        assert_eq!(metrics.obp, 0.0);
        assert_eq!(metrics.ops, 0.0);
        assert_eq!(metrics.bb_per_k, 0.0);
        assert_eq!(metrics.hr_pct, 0.0);
        assert_eq!(metrics.plate_appearances, 0);
    }

    #[test]
    fn test_duplicate_game_rows_keep_max_plate_appearances() {
        let mut early = line(7, "2024-11-01");
        early.plate_appearances = 2;
        early.at_bats = 2;
        early.hits = 1;

        let mut final_line = line(7, "2024-11-01");
        final_line.plate_appearances = 5;
        final_line.at_bats = 4;
        final_line.hits = 2;

        let metrics = aggregate(&[early, final_line], &filter()).unwrap();
        // Only the 5-PA line contributes.
        assert_eq!(metrics.plate_appearances, 5);
        assert_eq!(metrics.at_bats, 4);
        assert_eq!(metrics.hits, 2);
        assert_eq!(metrics.avg, 0.5);
    }

    #[test]
    fn test_empty_filter_result_is_none() {
        let mut l = line(1, "2024-11-01");
        l.player_id = Some(PlayerId::new(999));
        assert!(aggregate(&[l], &filter()).is_none());
    }

    #[test]
    fn test_date_window_and_side_filters() {
        let mut in_window = line(1, "2024-11-01");
        in_window.at_bats = 4;
        in_window.hits = 4;
        in_window.plate_appearances = 4;

        let mut out_of_window = line(2, "2025-02-01");
        out_of_window.at_bats = 4;
        out_of_window.plate_appearances = 4;

        let mut away_game = line(3, "2024-11-02");
        away_game.side = Side::Away;
        away_game.at_bats = 4;
        away_game.plate_appearances = 4;

        let mut f = filter();
        f.side = Some(Side::Home);
        let metrics = aggregate(&[in_window, out_of_window, away_game], &f).unwrap();
        assert_eq!(metrics.at_bats, 4);
        assert_eq!(metrics.avg, 1.0);
    }

    #[test]
    fn test_ops_is_obp_plus_slg() {
        let mut l = line(1, "2024-11-01");
        l.at_bats = 4;
        l.hits = 2;
        l.total_bases = 6;
        l.base_on_balls = 1;
        l.plate_appearances = 5;
        let metrics = aggregate(&[l], &filter()).unwrap();
        // OBP = 3/5, SLG = 6/4
        assert_eq!(metrics.obp, 0.6);
        assert_eq!(metrics.slg, 1.5);
        assert_eq!(metrics.ops, 2.1);
    }
}
