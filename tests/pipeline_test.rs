//! End-to-end pipeline test: extract from payloads, persist per-game CSVs,
//! merge, and aggregate metrics from the merged dataset.

use mlb_gumbo::metrics::hitting::{self, HitterFilter};
use mlb_gumbo::metrics::pitching::{self, league_fip_constant, PitcherFilter};
use mlb_gumbo::statsapi::extract::{hitter_lines, pitch_events, pitcher_lines};
use mlb_gumbo::statsapi::types::{Boxscore, LiveFeed};
use mlb_gumbo::storage::models::{HitterLine, PitcherLine, PitchEvent};
use mlb_gumbo::storage::{merge_category, per_game_file, read_rows, write_rows, Category};
use mlb_gumbo::{GamePk, GameRef, PlayerId};
use serde_json::json;
use tempfile::tempdir;

fn boxscore(batter_hits: u32, pitcher_so: u32) -> Boxscore {
    serde_json::from_value(json!({
        "teams": {
            "home": {
                "team": { "id": 693, "name": "Leones del Caracas" },
                "players": {
                    "ID600524": {
                        "person": { "id": 600524, "fullName": "Test Hitter" },
                        "position": { "abbreviation": "SS" },
                        "stats": {
                            "batting": {
                                "atBats": 4,
                                "hits": batter_hits,
                                "plateAppearances": 4,
                                "totalBases": batter_hits,
                                "strikeOuts": 1
                            }
                        }
                    },
                    "ID700100": {
                        "person": { "id": 700100, "fullName": "Test Pitcher" },
                        "position": { "abbreviation": "P" },
                        "stats": {
                            "pitching": {
                                "inningsPitched": "6.0",
                                "strikeOuts": pitcher_so,
                                "baseOnBalls": 2,
                                "hits": 5,
                                "earnedRuns": 2,
                                "battersFaced": 24,
                                "gamesStarted": 1
                            }
                        }
                    }
                }
            },
            "away": {
                "team": { "id": 694, "name": "Tiburones de La Guaira" },
                "players": {}
            }
        }
    }))
    .unwrap()
}

fn live_feed() -> LiveFeed {
    serde_json::from_value(json!({
        "liveData": {
            "plays": {
                "allPlays": [
                    {
                        "about": { "atBatIndex": 0, "inning": 1, "halfInning": "bottom" },
                        "matchup": {
                            "batter": { "id": 600524, "fullName": "Test Hitter" },
                            "pitcher": { "id": 800100, "fullName": "Opposing Pitcher" }
                        },
                        "playEvents": [
                            { "pitchNumber": 1, "type": "pitch",
                              "details": { "isBall": true, "isStrike": false } },
                            { "pitchNumber": 2, "type": "pitch",
                              "details": { "isInPlay": true },
                              "pitchData": { "startSpeed": 93.0 } }
                        ]
                    }
                ]
            }
        }
    }))
    .unwrap()
}

#[test]
fn test_fetch_extract_merge_aggregate_pipeline() {
    let dir = tempdir().unwrap();

    let games = [
        GameRef {
            game_pk: GamePk::new(1),
            date: "2024-11-02".parse().unwrap(),
        },
        GameRef {
            game_pk: GamePk::new(2),
            date: "2024-11-05".parse().unwrap(),
        },
    ];

    // Per-game extraction and persistence, the fetch command's inner loop.
    for (game, (hits, so)) in games.iter().zip([(2u32, 7u32), (1, 5)]) {
        let feed = live_feed();
        let events: Vec<PitchEvent> = pitch_events(&feed, game).collect();
        assert_eq!(events.len(), 2);
        write_rows(
            &per_game_file(dir.path(), Category::PitchByPitch, game.date, game.game_pk),
            &events,
        )
        .unwrap();

        let box_ = boxscore(hits, so);
        write_rows(
            &per_game_file(dir.path(), Category::Hitters, game.date, game.game_pk),
            &hitter_lines(&box_, game),
        )
        .unwrap();
        write_rows(
            &per_game_file(dir.path(), Category::Pitchers, game.date, game.game_pk),
            &pitcher_lines(&box_, game),
        )
        .unwrap();
    }

    // Merge into season-wide datasets.
    let (pbp_path, pbp_rows) =
        merge_category::<PitchEvent>(dir.path(), Category::PitchByPitch, None)
            .unwrap()
            .unwrap();
    assert_eq!(pbp_rows, 4);
    let merged_events: Vec<PitchEvent> = read_rows(&pbp_path).unwrap();
    assert_eq!(merged_events[0].batter_id, Some(PlayerId::new(600524)));

    let (hitters_path, _) = merge_category::<HitterLine>(dir.path(), Category::Hitters, None)
        .unwrap()
        .unwrap();
    let (pitchers_path, _) = merge_category::<PitcherLine>(dir.path(), Category::Pitchers, None)
        .unwrap()
        .unwrap();

    // Aggregate the hitter: 3 hits in 8 at-bats over two games.
    let hitter_rows: Vec<HitterLine> = read_rows(&hitters_path).unwrap();
    let metrics = hitting::aggregate(
        &hitter_rows,
        &HitterFilter {
            player_id: PlayerId::new(600524),
            start_date: "2024-10-01".parse().unwrap(),
            end_date: "2025-01-25".parse().unwrap(),
            side: None,
            team_id: None,
            position: None,
        },
    )
    .unwrap();
    assert_eq!(metrics.at_bats, 8);
    assert_eq!(metrics.hits, 3);
    assert_eq!(metrics.avg, 0.375);

    // Aggregate the pitcher: 12 innings, 4 earned runs -> 3.00 ERA.
    let pitcher_rows: Vec<PitcherLine> = read_rows(&pitchers_path).unwrap();
    let constant = league_fip_constant(&pitcher_rows);
    let pitcher = pitching::aggregate(
        &pitcher_rows,
        &PitcherFilter {
            player_id: Some(PlayerId::new(700100)),
            ..Default::default()
        },
        constant,
    )
    .unwrap();
    assert_eq!(pitcher.games, 2);
    assert_eq!(pitcher.innings_pitched, 12.0);
    assert_eq!(pitcher.era, 3.0);
    assert_eq!(pitcher.strikeouts, 12);
    // The lone pitcher in the league: FIP normalizes to league ERA.
    assert_eq!(pitcher.fip, 3.0);
}
