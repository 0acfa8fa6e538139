use crate::Site;

/// Splits comma-separated form text into list elements.
///
/// Segments are kept verbatim: no trimming, and empty segments survive, so
/// `""` yields `[""]` and `"a,,b"` yields `["a", "", "b"]`.
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(',').map(ToOwned::to_owned).collect()
}

/// Raw text for a new site as entered by a user.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SiteForm {
    pub url: String,
    pub key_points: String,
    pub description: String,
    pub field: String,
    pub magic_tags: String,
}

impl SiteForm {
    pub fn into_site(self) -> Site {
        Site {
            key_points: split_list(&self.key_points),
            magic_tags: split_list(&self.magic_tags),
            url: self.url,
            description: self.description,
            field: self.field,
        }
    }
}
