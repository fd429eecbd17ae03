//! Merge command: concatenate per-game CSVs into season-wide files.

use crate::cli::types::Season;
use crate::error::Result;
use crate::storage::models::{HitterLine, PitcherLine, PitchEvent};
use crate::storage::{merge_category, Category};
use std::path::PathBuf;

/// Configuration parameters for the merge command.
#[derive(Debug)]
pub struct MergeParams {
    pub all: bool,
    pub pbp: bool,
    pub hitters: bool,
    pub pitchers: bool,
    pub season: Option<Season>,
    pub output_dir: PathBuf,
}

impl MergeParams {
    fn categories(&self) -> Vec<Category> {
        let mut categories = Vec::new();
        if self.all || self.pbp {
            categories.push(Category::PitchByPitch);
        }
        if self.all || self.hitters {
            categories.push(Category::Hitters);
        }
        if self.all || self.pitchers {
            categories.push(Category::Pitchers);
        }
        categories
    }
}

pub fn handle_merge(params: MergeParams) -> Result<()> {
    let categories = params.categories();
    if categories.is_empty() {
        println!("Nothing selected; pass --all or one of --pbp/--hitters/--pitchers");
        return Ok(());
    }
    if !params.output_dir.exists() {
        println!(
            "Output folder {} does not exist",
            params.output_dir.display()
        );
        return Ok(());
    }

    for category in categories {
        let merged = match category {
            Category::PitchByPitch => {
                merge_category::<PitchEvent>(&params.output_dir, category, params.season)?
            }
            Category::Hitters => {
                merge_category::<HitterLine>(&params.output_dir, category, params.season)?
            }
            Category::Pitchers => {
                merge_category::<PitcherLine>(&params.output_dir, category, params.season)?
            }
        };
        match merged {
            Some((path, rows)) => println!("Merged {} rows into {}", rows, path.display()),
            None => println!(
                "No per-game files matched {:?} in {}",
                category,
                params.output_dir.display()
            ),
        }
    }
    Ok(())
}
