//! CLI argument definitions and parsing structures.

use super::types::{LeagueId, PlayerId, Season, Side, SportId, TeamId, VenueId};
use chrono::NaiveDate;
use clap::{ArgGroup, Args, Parser, Subcommand};
use std::path::PathBuf;

/// Schedule filtering arguments shared by the fetch command.
#[derive(Debug, Args)]
pub struct ScheduleArgs {
    /// Season year (e.g. 2024).
    #[clap(long, short)]
    pub season: Season,

    /// League ID (or set `GUMBO_LEAGUE_ID` env var; 103 = AL, 104 = NL, 135 = LVBP).
    #[clap(long, short)]
    pub league_id: Option<LeagueId>,

    /// Sport ID (1 = MLB, 17 = winter-league baseball).
    #[clap(long, default_value_t = SportId(1))]
    pub sport_id: SportId,

    /// Use a date range filter instead of the full season.
    #[clap(long)]
    pub use_date_range: bool,

    /// Start date (YYYY-MM-DD).
    #[clap(long)]
    pub start_date: Option<NaiveDate>,

    /// End date (YYYY-MM-DD).
    #[clap(long)]
    pub end_date: Option<NaiveDate>,

    /// Include regular season games.
    #[clap(long)]
    pub regular_season: bool,

    /// Include postseason games.
    #[clap(long)]
    pub include_postseason: bool,

    /// Filter by team ID (matches either side of the matchup).
    #[clap(long, short)]
    pub team_id: Option<TeamId>,

    /// Filter by venue (stadium) ID.
    #[clap(long)]
    pub venue_id: Option<VenueId>,

    /// Only include games where the team is home.
    #[clap(long, conflicts_with = "away_only")]
    pub home_only: bool,

    /// Only include games where the team is away.
    #[clap(long)]
    pub away_only: bool,
}

#[derive(Debug, Args)]
pub struct MergeArgs {
    /// Merge all categories (pitch-by-pitch, hitters, pitchers).
    #[clap(long)]
    pub all: bool,

    /// Merge pitch-by-pitch CSVs.
    #[clap(long)]
    pub pbp: bool,

    /// Merge hitters box-score CSVs.
    #[clap(long)]
    pub hitters: bool,

    /// Merge pitchers box-score CSVs.
    #[clap(long)]
    pub pitchers: bool,

    /// Optional season filter (matched against per-game file names).
    #[clap(long, short)]
    pub season: Option<Season>,

    /// Directory holding the per-game CSVs.
    #[clap(long, short, default_value = "output")]
    pub output_dir: PathBuf,
}

#[derive(Debug, Args)]
pub struct HitterMetricsArgs {
    /// Merged hitters box-score CSV.
    #[clap(long, default_value = "output/merged_hitters_boxscore_all.csv")]
    pub file: PathBuf,

    /// Player ID to aggregate.
    #[clap(long, short)]
    pub player_id: PlayerId,

    /// Start date (YYYY-MM-DD).
    #[clap(long, short)]
    pub start_date: NaiveDate,

    /// End date (YYYY-MM-DD).
    #[clap(long, short)]
    pub end_date: NaiveDate,

    /// Only count home or away games.
    #[clap(long)]
    pub side: Option<Side>,

    /// Filter by team ID.
    #[clap(long, short)]
    pub team_id: Option<TeamId>,

    /// Filter by position abbreviation (e.g. SS).
    #[clap(long)]
    pub position: Option<String>,

    /// Output results as JSON instead of text lines.
    #[clap(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
#[clap(group(ArgGroup::new("target").required(true).multiple(true)))]
pub struct PitcherMetricsArgs {
    /// Merged pitchers box-score CSV.
    #[clap(long, default_value = "output/merged_pitchers_boxscore_all.csv")]
    pub file: PathBuf,

    /// Pitcher to aggregate.
    #[clap(long, short, group = "target")]
    pub player_id: Option<PlayerId>,

    /// Filter by team ID.
    #[clap(long, short, group = "target")]
    pub team_id: Option<TeamId>,

    /// Aggregate all pitchers on the team into a single line
    /// (without this, per-pitcher rows are written to a CSV).
    #[clap(long, short, requires = "team_id")]
    pub aggregate: bool,

    /// Start date (YYYY-MM-DD).
    #[clap(long, short)]
    pub start_date: Option<NaiveDate>,

    /// End date (YYYY-MM-DD).
    #[clap(long, short)]
    pub end_date: Option<NaiveDate>,

    /// Output results as JSON instead of text lines.
    #[clap(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct MetaArgs {
    /// League IDs to fetch team listings for (repeatable): `-l 103 -l 104`.
    #[clap(long = "league-id", short)]
    pub league_ids: Vec<LeagueId>,

    /// Directory to save metadata files (written under `<dir>/meta/`).
    #[clap(long, short, default_value = "output")]
    pub output_dir: PathBuf,
}

#[derive(Debug, Parser)]
#[clap(
    name = "mlb-gumbo",
    about = "Fetch MLB Stats API game data and boxscores with filters",
    version
)]
pub struct Gumbo {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Fetch schedule, live feed, and box scores; write per-game CSVs.
    ///
    /// Resolves the schedule for the given filters, then fetches each game's
    /// hydrated live feed and box score sequentially, writing one
    /// pitch-by-pitch file and one hitters/pitchers file pair per game.
    Fetch {
        #[clap(flatten)]
        schedule: ScheduleArgs,

        /// Directory to save outputs.
        #[clap(long, short, default_value = "output")]
        output_dir: PathBuf,

        /// Seconds to sleep between games (upstream rate-limit courtesy).
        #[clap(long, default_value_t = 1)]
        throttle_secs: u64,
    },

    /// Merge per-game CSVs into season-wide files.
    Merge {
        #[clap(flatten)]
        args: MergeArgs,
    },

    /// Compute hitter rate stats (AVG/OBP/SLG/OPS, ...) from a merged hitters file.
    HitterMetrics {
        #[clap(flatten)]
        args: HitterMetricsArgs,
    },

    /// Compute pitcher rate stats (ERA/WHIP/FIP, ...) from a merged pitchers file.
    PitcherMetrics {
        #[clap(flatten)]
        args: PitcherMetricsArgs,
    },

    /// Fetch league, team, and venue metadata listings as JSON.
    Meta {
        #[clap(flatten)]
        args: MetaArgs,
    },
}
