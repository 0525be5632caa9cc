//! Parsing of bundle build names (NVRs) and index image references

/// Separator between the operator name and its release in a bundle NVR
pub const BUNDLE_MARKER: &str = "-bundle-container-";

/// Path segment preceding the index number in an index image reference
pub const INDEX_MARKER: &str = "/iib:";

/// Placeholder for version and release when an NVR can't be split
pub const NOT_APPLICABLE: &str = "n/a";

/// Outcome of a lenient extraction
///
/// A fallback still carries a usable value so the record is kept; `reason`
/// says why the expected shape wasn't found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extracted<T> {
    Parsed(T),
    Fallback { value: T, reason: String },
}

impl<T> Extracted<T> {
    /// Why the expected shape wasn't found, if it wasn't
    pub fn reason(&self) -> Option<&str> {
        match self {
            Extracted::Parsed(_) => None,
            Extracted::Fallback { reason, .. } => Some(reason.as_str()),
        }
    }

    pub fn into_value(self) -> T {
        match self {
            Extracted::Parsed(value) | Extracted::Fallback { value, .. } => value,
        }
    }
}

/// Operator name, version and release taken from a bundle NVR
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildId {
    pub component: String,
    pub version: String,
    pub release: String,
}

/// Split a bundle NVR like `foo-bundle-container-1.2.3-4`
///
/// - `component`: everything before [`BUNDLE_MARKER`]
/// - `release`: everything after it
/// - `version`: `release` up to the first `-`
///
/// Without the marker the whole name becomes the component and both version
/// and release are [`NOT_APPLICABLE`].
pub fn parse_build_name(name: &str) -> Extracted<BuildId> {
    let Some((component, release)) = name.split_once(BUNDLE_MARKER) else {
        return Extracted::Fallback {
            value: BuildId {
                component: name.to_string(),
                version: NOT_APPLICABLE.to_string(),
                release: NOT_APPLICABLE.to_string(),
            },
            reason: format!("could not find operator and version in NVR: {}", name),
        };
    };

    let version = release.split('-').next().unwrap_or(release);

    Extracted::Parsed(BuildId {
        component: component.to_string(),
        version: version.to_string(),
        release: release.to_string(),
    })
}

/// Extract the index number from an image reference like `registry/iib:12345`
pub fn parse_index_number(image_ref: &str) -> Extracted<String> {
    match image_ref.split_once(INDEX_MARKER) {
        Some((_, number)) => Extracted::Parsed(number.to_string()),
        None => Extracted::Fallback {
            value: image_ref.to_string(),
            reason: format!("could not find index number in index image: {}", image_ref),
        },
    }
}
