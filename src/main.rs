//! Entry point: parse CLI and dispatch to command handlers.

use clap::Parser;
use mlb_gumbo::{
    cli::{Commands, Gumbo},
    commands::{
        fetch_games::{handle_fetch, FetchParams},
        hitter_metrics::{handle_hitter_metrics, HitterMetricsParams},
        merge_outputs::{handle_merge, MergeParams},
        meta::{handle_meta, MetaParams},
        pitcher_metrics::{handle_pitcher_metrics, PitcherMetricsParams},
    },
    Result,
};
use tracing_subscriber::EnvFilter;

/// Run the CLI.
#[tokio::main]
async fn main() -> Result<()> {
    init_logging();
    let app = Gumbo::parse();

    match app.command {
        Commands::Fetch {
            schedule,
            output_dir,
            throttle_secs,
        } => {
            handle_fetch(FetchParams {
                season: schedule.season,
                league_id: schedule.league_id,
                sport_id: schedule.sport_id,
                use_date_range: schedule.use_date_range,
                start_date: schedule.start_date,
                end_date: schedule.end_date,
                regular_season: schedule.regular_season,
                include_postseason: schedule.include_postseason,
                team_id: schedule.team_id,
                venue_id: schedule.venue_id,
                home_only: schedule.home_only,
                away_only: schedule.away_only,
                output_dir,
                throttle_secs,
            })
            .await?
        }

        Commands::Merge { args } => handle_merge(MergeParams {
            all: args.all,
            pbp: args.pbp,
            hitters: args.hitters,
            pitchers: args.pitchers,
            season: args.season,
            output_dir: args.output_dir,
        })?,

        Commands::HitterMetrics { args } => handle_hitter_metrics(HitterMetricsParams {
            file: args.file,
            player_id: args.player_id,
            start_date: args.start_date,
            end_date: args.end_date,
            side: args.side,
            team_id: args.team_id,
            position: args.position,
            as_json: args.json,
        })?,

        Commands::PitcherMetrics { args } => handle_pitcher_metrics(PitcherMetricsParams {
            file: args.file,
            player_id: args.player_id,
            team_id: args.team_id,
            aggregate: args.aggregate,
            start_date: args.start_date,
            end_date: args.end_date,
            as_json: args.json,
        })?,

        Commands::Meta { args } => {
            handle_meta(MetaParams {
                league_ids: args.league_ids,
                output_dir: args.output_dir,
            })
            .await?
        }
    }

    Ok(())
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();
}
