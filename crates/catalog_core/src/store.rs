use std::fmt;

use catalog_logging::{catalog_error, catalog_info};

use crate::{ActivityLog, CatalogRepository, Site, StoreError};

/// Result of a delete request. Neither variant is a failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted { url: String, removed: usize },
    NotFound { url: String },
}

impl DeleteOutcome {
    pub fn is_deleted(&self) -> bool {
        matches!(self, DeleteOutcome::Deleted { .. })
    }
}

impl fmt::Display for DeleteOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeleteOutcome::Deleted { url, .. } => write!(f, "site {url} deleted."),
            DeleteOutcome::NotFound { url } => write!(f, "site {url} not found."),
        }
    }
}

/// The in-memory catalog plus its write-through repository and activity trail.
///
/// Mutations are staged and only committed once the repository accepted the
/// new collection, so memory never runs ahead of disk.
#[derive(Debug)]
pub struct CatalogStore<R> {
    sites: Vec<Site>,
    repository: R,
    activity: ActivityLog,
}

impl<R: CatalogRepository> CatalogStore<R> {
    /// Loads the persisted catalog. A corrupt document is returned as an error,
    /// never replaced by an empty catalog.
    pub fn open(repository: R, activity: ActivityLog) -> Result<Self, StoreError> {
        let sites = repository.load()?;
        catalog_info!(
            "Loaded {} sites from {}",
            sites.len(),
            repository.location()
        );
        Ok(Self {
            sites,
            repository,
            activity,
        })
    }

    pub fn add(&mut self, site: Site) -> Result<(), StoreError> {
        let url = site.url.clone();
        self.sites.push(site);
        if let Err(err) = self.repository.save(&self.sites) {
            self.sites.pop();
            catalog_error!("Failed to add site {}: {}", url, err);
            return Err(err);
        }
        self.activity.record(format!("added site {url}"));
        Ok(())
    }

    /// Removes every site whose url equals `url` exactly.
    pub fn delete(&mut self, url: &str) -> Result<DeleteOutcome, StoreError> {
        let remaining: Vec<Site> = self
            .sites
            .iter()
            .filter(|site| site.url != url)
            .cloned()
            .collect();
        let removed = self.sites.len() - remaining.len();

        if removed == 0 {
            self.activity
                .record(format!("site {url} not found for deletion"));
            return Ok(DeleteOutcome::NotFound {
                url: url.to_string(),
            });
        }

        if let Err(err) = self.repository.save(&remaining) {
            catalog_error!("Failed to delete site {}: {}", url, err);
            return Err(err);
        }
        self.sites = remaining;
        self.activity.record(format!("deleted site {url}"));
        Ok(DeleteOutcome::Deleted {
            url: url.to_string(),
            removed,
        })
    }

    pub fn search(&mut self, query: &str) -> Vec<Site> {
        crate::search::search(&self.sites, query, &mut self.activity)
    }

    pub fn list(&self) -> &[Site] {
        &self.sites
    }

    /// Every url on its own line, in insertion order.
    pub fn url_listing(&self) -> String {
        self.sites
            .iter()
            .map(|site| site.url.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn activity(&self) -> &ActivityLog {
        &self.activity
    }
}
