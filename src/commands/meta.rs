//! Meta command: fetch league, team, and venue listings as JSON files.

use crate::cli::types::LeagueId;
use crate::error::Result;
use crate::statsapi::http::{FetchConfig, StatsApiClient};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Configuration parameters for the meta command.
#[derive(Debug)]
pub struct MetaParams {
    pub league_ids: Vec<LeagueId>,
    pub output_dir: PathBuf,
}

pub async fn handle_meta(params: MetaParams) -> Result<()> {
    let client = StatsApiClient::new(FetchConfig::default())?;
    let meta_dir = params.output_dir.join("meta");
    std::fs::create_dir_all(&meta_dir)?;

    let leagues = client.leagues().await?;
    save_json(&meta_dir, "leagues.json", &leagues.leagues)?;
    println!("Saved {} leagues to leagues.json", leagues.leagues.len());

    let venues = client.venues().await?;
    save_json(&meta_dir, "venues.json", &venues.venues)?;
    println!("Saved {} venues to venues.json", venues.venues.len());

    let mut all_teams = Vec::new();
    for league_id in &params.league_ids {
        client.throttle().await;
        match client.teams(*league_id).await {
            Ok(teams) => {
                info!(league_id = %league_id, teams = teams.teams.len(), "fetched teams");
                all_teams.extend(teams.teams);
            }
            Err(e) => {
                // Winter leagues come and go; a dead league id should not
                // sink the rest of the listing.
                warn!(league_id = %league_id, error = %e, "failed to fetch teams");
            }
        }
    }
    if !params.league_ids.is_empty() {
        save_json(&meta_dir, "teams.json", &all_teams)?;
        println!("Saved {} teams to teams.json", all_teams.len());
    }

    Ok(())
}

fn save_json<T: Serialize>(dir: &Path, name: &str, data: &T) -> Result<()> {
    let path = dir.join(name);
    std::fs::write(&path, serde_json::to_string_pretty(data)?)?;
    info!(file = %path.display(), "saved");
    Ok(())
}
