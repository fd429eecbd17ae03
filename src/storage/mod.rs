//! On-disk persistence: flat row models and CSV file handling.

pub mod files;
pub mod models;

pub use files::{merge_category, per_game_file, per_game_files, read_rows, write_rows, Category};
pub use models::{HitterLine, PitcherLine, PitchEvent};
