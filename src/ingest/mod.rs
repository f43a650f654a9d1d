//! Startup ingestion: announcements, then recipes, then the recipe
//! duplicate cleanup. Any error aborts the whole sequence.

mod announcements;
mod recipes;
mod source;

pub use announcements::{load_announcements, CommitMode};
pub use recipes::{load_recipes, remove_duplicate_recipes};

use std::path::Path;

use crate::config::Config;
use crate::db::Repository;
use crate::error::Result;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub read: usize,
    pub inserted: usize,
    pub skipped: usize,
}

pub async fn run(repository: &Repository, config: &Config) -> Result<()> {
    load_announcements(
        repository,
        Path::new(&config.announcements_path),
        config.announcement_commit,
    )
    .await?;

    load_recipes(repository, Path::new(&config.recipes_path)).await?;
    remove_duplicate_recipes(repository).await?;

    tracing::info!(
        "Store ready: {} announcements, {} recipes",
        repository.count_announcements().await?,
        repository.count_recipes().await?
    );
    Ok(())
}
