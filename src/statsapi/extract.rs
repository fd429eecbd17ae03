//! Flattening of nested game payloads into flat rows.
//!
//! One pass over the live feed yields pitch events lazily; box scores yield
//! one line per player per stat block. Missing optional fields become empty
//! values, never errors.

use crate::cli::types::{PlayerId, Side};
use crate::statsapi::schedule::GameRef;
use crate::statsapi::types::{
    BattingStats, Boxscore, BoxscorePlayer, BoxscoreTeam, LiveFeed, PitchingStats, Play, PlayEvent,
};
use crate::storage::models::{HitterLine, PitcherLine, PitchEvent};


/// Per-at-bat context copied onto each of its pitch events.
#[derive(Debug, Clone)]
struct AtBatContext {
    game: GameRef,
    at_bat_index: Option<u32>,
    inning: Option<u8>,
    half_inning: Option<String>,
    batter: Option<String>,
    batter_id: Option<PlayerId>,
    pitcher: Option<String>,
    pitcher_id: Option<PlayerId>,
    at_bat_result: Option<String>,
    at_bat_result_type: Option<String>,
    rbi: Option<u8>,
}

impl AtBatContext {
    fn from_play(play: &Play, game: &GameRef) -> Self {
        Self {
            game: *game,
            at_bat_index: play.about.at_bat_index,
            inning: play.about.inning,
            half_inning: play.about.half_inning.clone(),
            batter: play
                .matchup
                .batter
                .as_ref()
                .and_then(|p| p.full_name.clone()),
            batter_id: play.matchup.batter.as_ref().map(|p| p.id),
            pitcher: play
                .matchup
                .pitcher
                .as_ref()
                .and_then(|p| p.full_name.clone()),
            pitcher_id: play.matchup.pitcher.as_ref().map(|p| p.id),
            at_bat_result: play.result.event.clone(),
            at_bat_result_type: play.result.event_type.clone(),
            rbi: play.result.rbi,
        }
    }

    fn row(&self, event: &PlayEvent) -> PitchEvent {
        let details = event.details.as_ref();
        let pitch = event.pitch_data.as_ref();
        let hit = event.hit_data.as_ref();
        let coordinates = hit.and_then(|h| h.coordinates.as_ref());

        PitchEvent {
            game_pk: self.game.game_pk,
            date: self.game.date,
            at_bat_index: self.at_bat_index,
            inning: self.inning,
            half_inning: self.half_inning.clone(),
            batter: self.batter.clone(),
            batter_id: self.batter_id,
            pitcher: self.pitcher.clone(),
            pitcher_id: self.pitcher_id,
            at_bat_result: self.at_bat_result.clone(),
            at_bat_result_type: self.at_bat_result_type.clone(),
            rbi: self.rbi,
            event_type: event.event_type.clone(),
            pitch_number: event.pitch_number,
            description: details.and_then(|d| d.description.clone()),
            call_description: details
                .and_then(|d| d.call.as_ref())
                .and_then(|c| c.description.clone()),
            pitch_type: details
                .and_then(|d| d.pitch_type.as_ref())
                .and_then(|t| t.description.clone()),
            is_in_play: details.and_then(|d| d.is_in_play),
            is_strike: details.and_then(|d| d.is_strike),
            is_ball: details.and_then(|d| d.is_ball),
            start_speed: pitch.and_then(|p| p.start_speed),
            end_speed: pitch.and_then(|p| p.end_speed),
            spin_rate: pitch
                .and_then(|p| p.breaks.as_ref())
                .and_then(|b| b.spin_rate),
            strike_zone_top: pitch.and_then(|p| p.strike_zone_top),
            strike_zone_bottom: pitch.and_then(|p| p.strike_zone_bottom),
            zone: pitch.and_then(|p| p.zone),
            coordinates_x: coordinates.and_then(|c| c.coord_x),
            coordinates_y: coordinates.and_then(|c| c.coord_y),
            launch_angle: hit.and_then(|h| h.launch_angle),
            launch_speed: hit.and_then(|h| h.launch_speed),
            total_distance: hit.and_then(|h| h.total_distance),
            trajectory: hit.and_then(|h| h.trajectory.clone()),
        }
    }
}

/// Lazily flatten a live feed into pitch-event rows, one pass, in feed order.
pub fn pitch_events<'a>(
    feed: &'a LiveFeed,
    game: &'a GameRef,
) -> impl Iterator<Item = PitchEvent> + 'a {
    feed.live_data.plays.all_plays.iter().flat_map(move |play| {
        let ctx = AtBatContext::from_play(play, game);
        play.play_events.iter().map(move |event| ctx.row(event))
    })
}

/// Flatten a box score into hitter lines, both sides, in roster-key order.
pub fn hitter_lines(boxscore: &Boxscore, game: &GameRef) -> Vec<HitterLine> {
    let mut lines = Vec::new();
    for (side, team) in sides(boxscore) {
        for player in team.players.values() {
            if let Some(batting) = player.stats.batting.as_ref() {
                lines.push(hitter_line(game, side, team, player, batting));
            }
        }
    }
    lines
}

/// Flatten a box score into pitcher lines, both sides, in roster-key order.
pub fn pitcher_lines(boxscore: &Boxscore, game: &GameRef) -> Vec<PitcherLine> {
    let mut lines = Vec::new();
    for (side, team) in sides(boxscore) {
        for player in team.players.values() {
            if let Some(pitching) = player.stats.pitching.as_ref() {
                lines.push(pitcher_line(game, side, team, player, pitching));
            }
        }
    }
    lines
}

fn sides(boxscore: &Boxscore) -> [(Side, &BoxscoreTeam); 2] {
    [
        (Side::Home, &boxscore.teams.home),
        (Side::Away, &boxscore.teams.away),
    ]
}

fn hitter_line(
    game: &GameRef,
    side: Side,
    team: &BoxscoreTeam,
    player: &BoxscorePlayer,
    batting: &BattingStats,
) -> HitterLine {
    HitterLine {
        game_pk: game.game_pk,
        date: game.date,
        team_id: team.team.as_ref().map(|t| t.id),
        team_name: team.team.as_ref().and_then(|t| t.name.clone()),
        player_id: player.person.as_ref().map(|p| p.id),
        player_name: player.person.as_ref().and_then(|p| p.full_name.clone()),
        position: player
            .position
            .as_ref()
            .and_then(|p| p.abbreviation.clone()),
        batting_order: player.batting_order.clone(),
        is_substitute: player.is_substitute,
        side,
        runs: batting.runs,
        doubles: batting.doubles,
        triples: batting.triples,
        home_runs: batting.home_runs,
        strike_outs: batting.strike_outs,
        base_on_balls: batting.base_on_balls,
        intentional_walks: batting.intentional_walks,
        hits: batting.hits,
        hit_by_pitch: batting.hit_by_pitch,
        at_bats: batting.at_bats,
        caught_stealing: batting.caught_stealing,
        stolen_bases: batting.stolen_bases,
        ground_into_double_play: batting.ground_into_double_play,
        plate_appearances: batting.plate_appearances,
        total_bases: batting.total_bases,
        rbi: batting.rbi,
        left_on_base: batting.left_on_base,
        sac_bunts: batting.sac_bunts,
        sac_flies: batting.sac_flies,
    }
}

fn pitcher_line(
    game: &GameRef,
    side: Side,
    team: &BoxscoreTeam,
    player: &BoxscorePlayer,
    pitching: &PitchingStats,
) -> PitcherLine {
    PitcherLine {
        game_pk: game.game_pk,
        date: game.date,
        team_id: team.team.as_ref().map(|t| t.id),
        team_name: team.team.as_ref().and_then(|t| t.name.clone()),
        player_id: player.person.as_ref().map(|p| p.id),
        player_name: player.person.as_ref().and_then(|p| p.full_name.clone()),
        position: player
            .position
            .as_ref()
            .and_then(|p| p.abbreviation.clone()),
        is_substitute: player.is_substitute,
        side,
        games_started: pitching.games_started,
        batters_faced: pitching.batters_faced,
        wins: pitching.wins,
        losses: pitching.losses,
        saves: pitching.saves,
        holds: pitching.holds,
        blown_saves: pitching.blown_saves,
        home_runs: pitching.home_runs,
        base_on_balls: pitching.base_on_balls,
        strike_outs: pitching.strike_outs,
        hits: pitching.hits,
        earned_runs: pitching.earned_runs,
        hit_by_pitch: pitching.hit_by_pitch,
        wild_pitches: pitching.wild_pitches,
        balks: pitching.balks,
        number_of_pitches: pitching.number_of_pitches,
        balls: pitching.balls,
        strikes: pitching.strikes,
        innings_pitched: pitching.innings_pitched.clone(),
    }
}
