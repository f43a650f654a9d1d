use std::path::Path;

use crate::db::Repository;
use crate::error::Result;
use crate::models::{NewRecipe, RecipeRecord};

use super::source::{parse_record, read_array};
use super::LoadReport;

/// Inserts each recipe unless a stored recipe already has the same
/// (recipe_name, recipe_url). Every insert commits on its own, so only
/// previously committed rows are seen by the lookup.
pub async fn load_recipes(repository: &Repository, path: &Path) -> Result<LoadReport> {
    let items = read_array(path).await?;
    let mut report = LoadReport {
        read: items.len(),
        ..LoadReport::default()
    };

    for (index, item) in items.into_iter().enumerate() {
        let record: RecipeRecord = parse_record(path, index, item)?;

        if repository
            .recipe_exists(record.recipe_name.clone(), record.recipe_url.clone())
            .await?
        {
            tracing::info!(
                "Skipping duplicate recipe {:?} ({:?})",
                record.recipe_name,
                record.recipe_url
            );
            report.skipped += 1;
            continue;
        }

        repository.insert_recipe(NewRecipe::new(record)).await?;
        report.inserted += 1;
    }

    tracing::info!(
        "Loaded recipes from {}: {} read, {} inserted, {} skipped",
        path.display(),
        report.read,
        report.inserted,
        report.skipped
    );
    Ok(report)
}

/// Keeps the lowest-id recipe of every (recipe_name, recipe_url) group and
/// deletes the rest. Returns the number of rows removed; running it again
/// on a clean store removes nothing.
pub async fn remove_duplicate_recipes(repository: &Repository) -> Result<usize> {
    let groups = repository.find_duplicate_recipes().await?;

    for group in &groups {
        tracing::info!(
            "Duplicate recipe group {:?} ({:?}): {} records",
            group.recipe_name,
            group.recipe_url,
            group.count
        );
    }

    let removed = if groups.is_empty() {
        0
    } else {
        repository.remove_duplicates(groups).await?
    };

    tracing::info!("Removed {} duplicate recipes", removed);
    Ok(removed)
}
