use crate::{Site, StoreError};

/// Durable home of the catalog. Every save replaces the whole collection.
pub trait CatalogRepository: Send + Sync {
    /// Returns the persisted catalog, or an empty one if nothing was persisted yet.
    fn load(&self) -> Result<Vec<Site>, StoreError>;

    /// Overwrites the persisted catalog with `sites`.
    fn save(&self, sites: &[Site]) -> Result<(), StoreError>;

    /// Human-readable location used in diagnostics.
    fn location(&self) -> String;
}
