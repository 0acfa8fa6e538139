#![allow(dead_code)]

use std::sync::{Arc, Mutex, Once};

use catalog_core::{ActivityLog, CatalogRepository, Site, StoreError};
use chrono::NaiveDate;

pub fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(catalog_logging::initialize_for_tests);
}

/// Activity log pinned to 2024-05-06 07:08:09.
pub fn fixed_activity() -> ActivityLog {
    ActivityLog::with_clock(Arc::new(|| {
        NaiveDate::from_ymd_opt(2024, 5, 6)
            .and_then(|date| date.and_hms_opt(7, 8, 9))
            .expect("valid fixed timestamp")
    }))
}

pub fn site(url: &str, key_points: &[&str], description: &str, field: &str, tags: &[&str]) -> Site {
    Site::new(
        url,
        key_points.iter().map(|s| s.to_string()).collect(),
        description,
        field,
        tags.iter().map(|s| s.to_string()).collect(),
    )
}

#[derive(Debug, Default)]
struct Inner {
    persisted: Option<Vec<Site>>,
    saves: usize,
    fail_saves: bool,
    corrupt: bool,
}

/// Repository double that records every save.
#[derive(Debug, Clone, Default)]
pub struct MemoryRepository {
    inner: Arc<Mutex<Inner>>,
}

impl MemoryRepository {
    pub fn with_sites(sites: Vec<Site>) -> Self {
        let repo = Self::default();
        repo.inner.lock().unwrap().persisted = Some(sites);
        repo
    }

    pub fn corrupt() -> Self {
        let repo = Self::default();
        repo.inner.lock().unwrap().corrupt = true;
        repo
    }

    pub fn fail_saves(&self, fail: bool) {
        self.inner.lock().unwrap().fail_saves = fail;
    }

    pub fn saves(&self) -> usize {
        self.inner.lock().unwrap().saves
    }

    pub fn persisted(&self) -> Option<Vec<Site>> {
        self.inner.lock().unwrap().persisted.clone()
    }
}

impl CatalogRepository for MemoryRepository {
    fn load(&self) -> Result<Vec<Site>, StoreError> {
        let inner = self.inner.lock().unwrap();
        if inner.corrupt {
            return Err(StoreError::corrupt(self.location(), "not a list of sites"));
        }
        Ok(inner.persisted.clone().unwrap_or_default())
    }

    fn save(&self, sites: &[Site]) -> Result<(), StoreError> {
        let mut inner = self.inner.lock().unwrap();
        if inner.fail_saves {
            return Err(StoreError::persistence("memory://catalog", "disk full"));
        }
        inner.saves += 1;
        inner.persisted = Some(sites.to_vec());
        Ok(())
    }

    fn location(&self) -> String {
        "memory://catalog".to_string()
    }
}
