use catalog_logging::catalog_debug;

use crate::{ActivityLog, Site};

/// Sites where `query` occurs, ignoring case, in the url, description, field,
/// or any key point or magic tag. Insertion order is preserved and an empty
/// query matches everything.
pub fn matching<'a>(sites: &'a [Site], query: &str) -> Vec<&'a Site> {
    let needle = query.to_lowercase();
    sites
        .iter()
        .filter(|site| site.matches_lowercase(&needle))
        .collect()
}

/// Runs [`matching`] and records the outcome in the activity trail.
pub fn search(sites: &[Site], query: &str, activity: &mut ActivityLog) -> Vec<Site> {
    let results: Vec<Site> = matching(sites, query).into_iter().cloned().collect();
    catalog_debug!(
        "search query={:?} scanned={} hits={}",
        query,
        sites.len(),
        results.len()
    );

    if results.is_empty() {
        activity.record(format!("search keyword '{query}' found no results"));
    } else {
        activity.record(format!(
            "search keyword '{query}' found {} results",
            results.len()
        ));
    }
    results
}
