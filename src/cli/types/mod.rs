//! Type-safe wrappers and enums shared across the CLI and library.

pub mod filters;
pub mod ids;
pub mod time;

pub use filters::{GameType, Side};
pub use ids::{GamePk, LeagueId, PlayerId, SportId, TeamId, VenueId};
pub use time::{DateRange, Season};
