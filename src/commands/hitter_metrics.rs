//! Hitter metrics command: aggregate one hitter's merged box-score rows.

use crate::cli::types::{PlayerId, Side, TeamId};
use crate::error::Result;
use crate::metrics::hitting::{aggregate, HitterFilter, HitterMetrics};
use crate::storage::models::HitterLine;
use crate::storage::read_rows;
use chrono::NaiveDate;
use std::path::PathBuf;

/// Configuration parameters for the hitter metrics command.
#[derive(Debug)]
pub struct HitterMetricsParams {
    pub file: PathBuf,
    pub player_id: PlayerId,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub side: Option<Side>,
    pub team_id: Option<TeamId>,
    pub position: Option<String>,
    pub as_json: bool,
}

pub fn handle_hitter_metrics(params: HitterMetricsParams) -> Result<()> {
    let rows: Vec<HitterLine> = read_rows(&params.file)?;

    let filter = HitterFilter {
        player_id: params.player_id,
        start_date: params.start_date,
        end_date: params.end_date,
        side: params.side,
        team_id: params.team_id,
        position: params.position.clone(),
    };

    let Some(metrics) = aggregate(&rows, &filter) else {
        println!(
            "No data found for player {} between {} and {}",
            params.player_id, params.start_date, params.end_date
        );
        return Ok(());
    };

    if params.as_json {
        println!("{}", serde_json::to_string_pretty(&metrics)?);
    } else {
        println!(
            "Hitter metrics for player {} ({} to {})\n",
            params.player_id, params.start_date, params.end_date
        );
        print_text(&metrics);
    }
    Ok(())
}

fn print_text(metrics: &HitterMetrics) {
    println!("AVG: {:.3}", metrics.avg);
    println!("OBP: {:.3}", metrics.obp);
    println!("SLG: {:.3}", metrics.slg);
    println!("OPS: {:.3}", metrics.ops);
    println!("PlateAppearances: {}", metrics.plate_appearances);
    println!("AtBats: {}", metrics.at_bats);
    println!("Hits: {}", metrics.hits);
    println!("Runs: {}", metrics.runs);
    println!("RBI: {}", metrics.rbi);
    println!("Doubles: {}", metrics.doubles);
    println!("Triples: {}", metrics.triples);
    println!("HomeRuns: {}", metrics.home_runs);
    println!("Walks: {}", metrics.walks);
    println!("Strikeouts: {}", metrics.strikeouts);
    println!("StolenBases: {}", metrics.stolen_bases);
    println!("ISO: {:.3}", metrics.iso);
    println!("BB/K: {:.3}", metrics.bb_per_k);
    println!("SB%: {:.3}", metrics.sb_pct);
    println!("HR%: {:.3}", metrics.hr_pct);
    println!("K%: {:.3}", metrics.k_pct);
    println!("BB%: {:.3}", metrics.bb_pct);
}
