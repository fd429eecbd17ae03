//! Filter types for schedule resolution and metric aggregation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Game type requested from the schedule endpoint.
///
/// The Stats API encodes these as single-letter codes in the `gameTypes`
/// query parameter and in each game's `gameType` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum GameType {
    /// Regular season games (code "R")
    Regular,
    /// Postseason games (code "P")
    Postseason,
}

impl GameType {
    /// Single-letter code used on the wire.
    pub fn code(&self) -> &'static str {
        match self {
            GameType::Regular => "R",
            GameType::Postseason => "P",
        }
    }
}

impl fmt::Display for GameType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Which side of the matchup a team played on.
///
/// Serializes as lowercase `home`/`away`, matching the box-score CSV column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Home,
    Away,
}

impl Side {
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Home => "home",
            Side::Away => "away",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
