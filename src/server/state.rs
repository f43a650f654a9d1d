use std::sync::Arc;

use crate::db::Repository;

pub struct AppState {
    pub repository: Repository,
}

impl AppState {
    pub fn new(repository: Repository) -> Arc<Self> {
        Arc::new(Self { repository })
    }
}
