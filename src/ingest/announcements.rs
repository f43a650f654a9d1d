use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::db::Repository;
use crate::error::Result;
use crate::models::{AnnouncementRecord, NewAnnouncement};

use super::source::{parse_record, read_array};
use super::LoadReport;

/// How announcement rows are committed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommitMode {
    /// Validate everything, then commit all rows in one transaction.
    #[default]
    Batch,
    /// Commit each row as soon as it validates; a bad record leaves the prefix stored.
    PerRecord,
}

pub async fn load_announcements(
    repository: &Repository,
    path: &Path,
    mode: CommitMode,
) -> Result<LoadReport> {
    let items = read_array(path).await?;
    let read = items.len();

    let inserted = match mode {
        CommitMode::Batch => {
            let batch = items
                .into_iter()
                .enumerate()
                .map(|(index, item)| {
                    parse_record::<AnnouncementRecord>(path, index, item).map(NewAnnouncement::new)
                })
                .collect::<Result<Vec<_>>>()?;
            repository.insert_announcements(batch).await?
        }
        CommitMode::PerRecord => {
            let mut inserted = 0;
            for (index, item) in items.into_iter().enumerate() {
                let record: AnnouncementRecord = parse_record(path, index, item)?;
                repository.insert_announcement(NewAnnouncement::new(record)).await?;
                inserted += 1;
            }
            inserted
        }
    };

    let report = LoadReport {
        read,
        inserted,
        skipped: 0,
    };
    tracing::info!(
        "Loaded announcements from {}: {} read, {} inserted",
        path.display(),
        report.read,
        report.inserted
    );
    Ok(report)
}
