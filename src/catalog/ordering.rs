//! Sort order for catalog entries

use std::cmp::Ordering;

use semver::Version;

use crate::catalog::nvr::BuildId;
use crate::catalog::types::CatalogEntry;

/// Parse a release string into a semver::Version.
///
/// A leading `v` is ignored and partial versions are padded with zeros:
/// - "v1.2.3-4" -> Version(1, 2, 3, pre: 4)
/// - "1.2" -> Version(1, 2, 0)
pub fn parse_release(release: &str) -> Option<Version> {
    let release = release.strip_prefix('v').unwrap_or(release);
    let parts: Vec<&str> = release.split('.').collect();
    let normalized = match parts.len() {
        1 => format!("{}.0.0", parts[0]),
        2 => format!("{}.{}.0", parts[0], parts[1]),
        _ => release.to_string(),
    };
    Version::parse(&normalized).ok()
}

/// Compare two releases by semver precedence.
///
/// Releases that aren't valid semver sort below every valid one and are
/// compared with each other as plain strings.
pub fn compare_releases(a: &str, b: &str) -> Ordering {
    match (parse_release(a), parse_release(b)) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Greater,
        (None, Some(_)) => Ordering::Less,
        (None, None) => a.cmp(b),
    }
}

/// Presentation order: OCP version descending, operator ascending, release
/// descending.
pub fn compare_entries(a: &CatalogEntry, b: &CatalogEntry) -> Ordering {
    b.platform_version
        .cmp(&a.platform_version)
        .then_with(|| a.component.cmp(&b.component))
        .then_with(|| compare_releases(&b.component_release, &a.component_release))
}

pub fn sort_entries(entries: &mut [CatalogEntry]) {
    entries.sort_by(compare_entries);
}

/// Key used to order raw records before deduplication
pub fn processing_key(id: &BuildId) -> String {
    format!("{}-{}-{}", id.component, id.version, id.release)
}
