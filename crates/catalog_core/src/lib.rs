//! Catalog core: site records, search, activity trail and the in-memory store.
mod activity;
mod error;
mod input;
mod repository;
mod search;
mod site;
mod store;

pub use activity::{ActivityLog, Clock, TIMESTAMP_FORMAT};
pub use error::StoreError;
pub use input::{split_list, SiteForm};
pub use repository::CatalogRepository;
pub use search::{matching, search};
pub use site::Site;
pub use store::{CatalogStore, DeleteOutcome};
