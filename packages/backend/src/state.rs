use std::sync::Arc;
use std::time::Instant;

use crate::store::SkillStore;

#[derive(Clone)]
pub struct AppState {
    started_at: Instant,
    store: Arc<SkillStore>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            started_at: Instant::now(),
            store: Arc::new(SkillStore::new()),
        }
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }

    pub fn store(&self) -> Arc<SkillStore> {
        Arc::clone(&self.store)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
