//! Pitcher metrics command: single pitcher, team aggregate, or per-pitcher
//! table written to CSV.

use crate::cli::types::{PlayerId, TeamId};
use crate::error::Result;
use crate::metrics::pitching::{aggregate, league_fip_constant, PitcherFilter, PitcherMetrics};
use crate::storage::models::PitcherLine;
use crate::storage::read_rows;
use chrono::NaiveDate;
use std::collections::BTreeSet;
use std::path::PathBuf;
use tracing::info;

/// Configuration parameters for the pitcher metrics command.
#[derive(Debug)]
pub struct PitcherMetricsParams {
    pub file: PathBuf,
    pub player_id: Option<PlayerId>,
    pub team_id: Option<TeamId>,
    pub aggregate: bool,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub as_json: bool,
}

pub fn handle_pitcher_metrics(params: PitcherMetricsParams) -> Result<()> {
    let rows: Vec<PitcherLine> = read_rows(&params.file)?;

    // The FIP constant normalizes to the league in the same date window,
    // so restrict by date before anything else.
    let window_filter = PitcherFilter {
        start_date: params.start_date,
        end_date: params.end_date,
        ..Default::default()
    };
    let window: Vec<PitcherLine> = rows
        .into_iter()
        .filter(|r| window_filter.matches(r))
        .collect();
    let fip_constant = league_fip_constant(&window);
    info!(fip_constant, rows = window.len(), "league window");

    if params.player_id.is_some() || params.aggregate {
        let filter = PitcherFilter {
            player_id: params.player_id,
            team_id: params.team_id,
            ..Default::default()
        };
        let Some(metrics) = aggregate(&window, &filter, fip_constant) else {
            println!("No data matched the requested pitcher filters");
            return Ok(());
        };
        if params.as_json {
            println!("{}", serde_json::to_string_pretty(&metrics)?);
        } else {
            print_text(&metrics);
        }
        return Ok(());
    }

    // Team mode without --aggregate: one row per pitcher, written to CSV.
    let Some(team_id) = params.team_id else {
        println!("Provide --player-id or --team-id");
        return Ok(());
    };
    per_pitcher_table(&window, team_id, fip_constant)
}

fn per_pitcher_table(window: &[PitcherLine], team_id: TeamId, fip_constant: f64) -> Result<()> {
    let team_filter = PitcherFilter {
        team_id: Some(team_id),
        ..Default::default()
    };
    let player_ids: BTreeSet<PlayerId> = window
        .iter()
        .filter(|r| team_filter.matches(r))
        .filter_map(|r| r.player_id)
        .collect();
    if player_ids.is_empty() {
        println!("No data found for team {team_id}");
        return Ok(());
    }

    let out_file = PathBuf::from(format!("pitching_metrics_team_{team_id}.csv"));
    let mut writer = csv::Writer::from_path(&out_file)?;
    writer.write_record([
        "playerId",
        "name",
        "ERA",
        "WHIP",
        "G",
        "GS",
        "TBF",
        "InningsPitched",
        "HR",
        "Strikeouts",
        "Walks",
        "K/9",
        "BB/9",
        "K/BB",
        "K%",
        "BB%",
        "BABIP",
        "FIP",
    ])?;

    for player_id in player_ids {
        let filter = PitcherFilter {
            player_id: Some(player_id),
            team_id: Some(team_id),
            ..Default::default()
        };
        let Some(m) = aggregate(window, &filter, fip_constant) else {
            continue;
        };
        let name = window
            .iter()
            .find(|r| r.player_id == Some(player_id))
            .and_then(|r| r.player_name.clone())
            .unwrap_or_default();
        writer.write_record([
            player_id.to_string(),
            name,
            format!("{:.2}", m.era),
            format!("{:.3}", m.whip),
            m.games.to_string(),
            m.games_started.to_string(),
            m.batters_faced.to_string(),
            format!("{:.1}", m.innings_pitched),
            m.home_runs.to_string(),
            m.strikeouts.to_string(),
            m.walks.to_string(),
            format!("{:.2}", m.k_per_9),
            format!("{:.2}", m.bb_per_9),
            format!("{:.2}", m.k_per_bb),
            format!("{:.3}", m.k_pct),
            format!("{:.3}", m.bb_pct),
            format!("{:.3}", m.babip),
            format!("{:.2}", m.fip),
        ])?;
    }
    writer.flush()?;
    println!("Saved individual pitcher stats to {}", out_file.display());
    Ok(())
}

fn print_text(metrics: &PitcherMetrics) {
    println!("ERA: {:.2}", metrics.era);
    println!("WHIP: {:.3}", metrics.whip);
    println!("FIP: {:.2}", metrics.fip);
    println!("G: {}", metrics.games);
    println!("GS: {}", metrics.games_started);
    println!("TBF: {}", metrics.batters_faced);
    println!("Wins: {}", metrics.wins);
    println!("Losses: {}", metrics.losses);
    println!("Saves: {}", metrics.saves);
    println!("Holds: {}", metrics.holds);
    println!("BS: {}", metrics.blown_saves);
    println!("InningsPitched: {:.1}", metrics.innings_pitched);
    println!("HR: {}", metrics.home_runs);
    println!("Strikeouts: {}", metrics.strikeouts);
    println!("Walks: {}", metrics.walks);
    println!("HBP: {}", metrics.hit_by_pitch);
    println!("WP: {}", metrics.wild_pitches);
    println!("BK: {}", metrics.balks);
    println!("Pitches: {}", metrics.pitches);
    println!("Balls: {}", metrics.balls);
    println!("Strikes: {}", metrics.strikes);
    println!("K/9: {:.2}", metrics.k_per_9);
    println!("BB/9: {:.2}", metrics.bb_per_9);
    println!("H/9: {:.2}", metrics.h_per_9);
    println!("HR/9: {:.2}", metrics.hr_per_9);
    println!("K/BB: {:.2}", metrics.k_per_bb);
    println!("K%: {:.3}", metrics.k_pct);
    println!("BB%: {:.3}", metrics.bb_pct);
    println!("K%-BB%: {:.3}", metrics.k_minus_bb_pct);
    println!("BIP: {}", metrics.balls_in_play);
    println!("HR% (BIP): {:.3}", metrics.hr_per_bip);
    println!("BABIP: {:.3}", metrics.babip);
}
