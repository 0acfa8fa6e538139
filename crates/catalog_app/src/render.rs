use catalog_core::Site;

/// One-line summary of a site with list fields joined by `", "`.
pub fn site_line(site: &Site) -> String {
    format!(
        "url: {}, key points: {}, description: {}, field: {}, magic tags: {}",
        site.url,
        site.key_points.join(", "),
        site.description,
        site.field,
        site.magic_tags.join(", ")
    )
}

pub fn search_results(results: &[Site]) -> String {
    if results.is_empty() {
        return "No matching sites.\n".to_string();
    }
    let mut text = String::new();
    for site in results {
        text.push_str(&site_line(site));
        text.push('\n');
    }
    text
}

pub fn url_listing(listing: &str) -> String {
    if listing.is_empty() {
        "The catalog is empty.\n".to_string()
    } else {
        format!("{listing}\n")
    }
}
