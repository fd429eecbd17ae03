//! CSV persistence: per-game files and season-wide merges.
//!
//! File naming follows `{date}_gamePk_{pk}_{category}.csv` for per-game
//! output and `merged_{category}_{season|all}.csv` for merged datasets.

use crate::cli::types::{GamePk, Season};
use crate::error::{Result, StatsError};
use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Per-game output category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    PitchByPitch,
    Hitters,
    Pitchers,
}

impl Category {
    /// Per-game file name suffix.
    pub fn suffix(&self) -> &'static str {
        match self {
            Category::PitchByPitch => "_pitch_by_pitch.csv",
            Category::Hitters => "_hitters.csv",
            Category::Pitchers => "_pitchers.csv",
        }
    }

    /// Name of the merged season-wide file.
    pub fn merged_file_name(&self, season: Option<Season>) -> String {
        let tag = season.map_or_else(|| "all".to_string(), |s| s.to_string());
        match self {
            Category::PitchByPitch => format!("merged_pitch_by_pitch_{tag}.csv"),
            Category::Hitters => format!("merged_hitters_boxscore_{tag}.csv"),
            Category::Pitchers => format!("merged_pitchers_boxscore_{tag}.csv"),
        }
    }
}

/// Path of one game's CSV for the given category.
pub fn per_game_file(dir: &Path, category: Category, date: NaiveDate, game_pk: GamePk) -> PathBuf {
    dir.join(format!("{date}_gamePk_{game_pk}{}", category.suffix()))
}

/// Write rows to `path`, creating parent directories as needed.
/// Headers come from the row type's field names.
pub fn write_rows<R: Serialize>(path: &Path, rows: &[R]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut writer = csv::Writer::from_path(path)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

/// Read all rows from `path`.
///
/// A missing file is a user-facing [`StatsError::MissingDataFile`], not a
/// bare IO error.
pub fn read_rows<R: DeserializeOwned>(path: &Path) -> Result<Vec<R>> {
    if !path.exists() {
        return Err(StatsError::MissingDataFile {
            path: path.to_path_buf(),
        });
    }
    let mut reader = csv::Reader::from_path(path)?;
    let mut rows = Vec::new();
    for row in reader.deserialize() {
        rows.push(row?);
    }
    Ok(rows)
}

/// List per-game files for a category, sorted by name (dates sort
/// lexicographically), optionally restricted to file names mentioning a
/// season year.
pub fn per_game_files(dir: &Path, category: Category, season: Option<Season>) -> Result<Vec<PathBuf>> {
    let season_tag = season.map(|s| s.to_string());
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let name = entry.file_name();
        let Some(name) = name.to_str() else { continue };
        if !name.contains("_gamePk_") || !name.ends_with(category.suffix()) {
            continue;
        }
        if let Some(tag) = &season_tag {
            if !name.contains(tag.as_str()) {
                continue;
            }
        }
        files.push(entry.path());
    }
    files.sort();
    Ok(files)
}

/// Concatenate all per-game files of one category into the merged file.
///
/// Returns the merged path and total row count, or `None` when no per-game
/// files matched (informational, not an error).
pub fn merge_category<R>(
    dir: &Path,
    category: Category,
    season: Option<Season>,
) -> Result<Option<(PathBuf, usize)>>
where
    R: Serialize + DeserializeOwned,
{
    let files = per_game_files(dir, category, season)?;
    if files.is_empty() {
        warn!(?category, "no per-game files matched");
        return Ok(None);
    }

    let mut all_rows: Vec<R> = Vec::new();
    for file in &files {
        info!(file = %file.display(), "reading");
        all_rows.extend(read_rows::<R>(file)?);
    }

    let merged_path = dir.join(category.merged_file_name(season));
    write_rows(&merged_path, &all_rows)?;
    info!(
        file = %merged_path.display(),
        rows = all_rows.len(),
        "saved merged file"
    );
    Ok(Some((merged_path, all_rows.len())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_per_game_file_naming() {
        let path = per_game_file(
            Path::new("output"),
            Category::PitchByPitch,
            "2024-11-02".parse().unwrap(),
            GamePk::new(748534),
        );
        assert_eq!(
            path.to_str().unwrap(),
            "output/2024-11-02_gamePk_748534_pitch_by_pitch.csv"
        );
    }

    #[test]
    fn test_merged_file_names() {
        assert_eq!(
            Category::Hitters.merged_file_name(None),
            "merged_hitters_boxscore_all.csv"
        );
        assert_eq!(
            Category::Pitchers.merged_file_name(Some(Season::new(2024))),
            "merged_pitchers_boxscore_2024.csv"
        );
        assert_eq!(
            Category::PitchByPitch.merged_file_name(None),
            "merged_pitch_by_pitch_all.csv"
        );
    }
}
