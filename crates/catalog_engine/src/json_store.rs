use std::fs;
use std::path::PathBuf;

use catalog_core::{CatalogRepository, Site, StoreError};
use catalog_logging::{catalog_debug, catalog_info};
use serde::{Deserialize, Serialize};

use crate::persist::AtomicFileWriter;

/// Backing document used when no path is configured.
pub const DEFAULT_DATA_FILE: &str = "websites.json";

/// On-disk shape of one site. Keys match documents written by earlier
/// versions of the catalog; English names are accepted when reading.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct PersistedSite {
    #[serde(rename = "网址", alias = "url")]
    url: String,
    #[serde(rename = "重点", alias = "keyPoints")]
    key_points: Vec<String>,
    #[serde(rename = "介绍", alias = "description")]
    description: String,
    #[serde(rename = "领域", alias = "field")]
    field: String,
    #[serde(rename = "魔法标签", alias = "magicTags")]
    magic_tags: Vec<String>,
}

impl From<PersistedSite> for Site {
    fn from(site: PersistedSite) -> Self {
        Site {
            url: site.url,
            key_points: site.key_points,
            description: site.description,
            field: site.field,
            magic_tags: site.magic_tags,
        }
    }
}

impl From<&Site> for PersistedSite {
    fn from(site: &Site) -> Self {
        PersistedSite {
            url: site.url.clone(),
            key_points: site.key_points.clone(),
            description: site.description.clone(),
            field: site.field.clone(),
            magic_tags: site.magic_tags.clone(),
        }
    }
}

/// Stores the whole catalog as one pretty-printed JSON array.
#[derive(Debug, Clone)]
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn split_path(&self) -> Result<(PathBuf, String), StoreError> {
        let filename = self
            .path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| StoreError::persistence(self.location(), "path has no file name"))?;
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        Ok((dir, filename.to_string()))
    }
}

impl CatalogRepository for JsonFileRepository {
    fn load(&self) -> Result<Vec<Site>, StoreError> {
        let content = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                catalog_info!("No catalog at {:?}; starting empty", self.path);
                return Ok(Vec::new());
            }
            Err(err) => return Err(StoreError::persistence(self.location(), err)),
        };

        // Bad encoding and bad JSON are both corruption of an existing document.
        let persisted: Vec<PersistedSite> = serde_json::from_slice(&content)
            .map_err(|err| StoreError::corrupt(self.location(), err))?;
        Ok(persisted.into_iter().map(Site::from).collect())
    }

    fn save(&self, sites: &[Site]) -> Result<(), StoreError> {
        let persisted: Vec<PersistedSite> = sites.iter().map(PersistedSite::from).collect();
        let content = to_pretty_json(&persisted)
            .map_err(|err| StoreError::persistence(self.location(), err))?;

        let (dir, filename) = self.split_path()?;
        AtomicFileWriter::new(dir)
            .write(&filename, &content)
            .map_err(|err| StoreError::persistence(self.location(), err))?;
        catalog_debug!("Saved {} sites to {:?}", sites.len(), self.path);
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

fn to_pretty_json<T: Serialize>(value: &T) -> Result<String, serde_json::Error> {
    let mut buffer = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
    value.serialize(&mut serializer)?;
    // serde_json only ever emits valid UTF-8.
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}
