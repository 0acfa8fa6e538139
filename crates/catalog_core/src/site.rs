/// One bookmark entry in the catalog.
///
/// `url` acts as the identity for deletion but is not unique; duplicates are
/// kept side by side in insertion order.
///
/// Records built from form text always carry at least one (possibly empty)
/// key point and magic tag; see [`crate::split_list`]. Neither `Site::new`
/// nor the store enforces that for records built directly.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Site {
    pub url: String,
    pub key_points: Vec<String>,
    pub description: String,
    pub field: String,
    pub magic_tags: Vec<String>,
}

impl Site {
    pub fn new(
        url: impl Into<String>,
        key_points: Vec<String>,
        description: impl Into<String>,
        field: impl Into<String>,
        magic_tags: Vec<String>,
    ) -> Self {
        Self {
            url: url.into(),
            key_points,
            description: description.into(),
            field: field.into(),
            magic_tags,
        }
    }

    /// True if `needle` (already lowercased) occurs in any searchable attribute.
    pub(crate) fn matches_lowercase(&self, needle: &str) -> bool {
        contains(&self.url, needle)
            || self.key_points.iter().any(|point| contains(point, needle))
            || contains(&self.description, needle)
            || contains(&self.field, needle)
            || self.magic_tags.iter().any(|tag| contains(tag, needle))
    }
}

fn contains(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}
