//! Deduplication of raw messages into catalog entries

use std::collections::HashSet;

use tracing::{debug, warn};

use crate::catalog::nvr::{Extracted, parse_build_name, parse_index_number};
use crate::catalog::ordering::{processing_key, sort_entries};
use crate::catalog::types::{CatalogEntry, RawMessage};

/// (OCP version, operator, operator version)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct ScopeKey {
    platform_version: String,
    component: String,
    component_version: String,
}

fn log_fallback<T>(extracted: Extracted<T>) -> T {
    if let Some(reason) = extracted.reason() {
        warn!("{}", reason);
    }
    extracted.into_value()
}

/// Reduce raw messages to one catalog entry per scope key.
///
/// Messages are first sorted by `operator-version-release` (plain string
/// order), then the first message seen for each scope key is kept. Messages
/// without an added bundle image are skipped and don't claim their key.
/// The result is returned in presentation order.
pub fn aggregate(records: Vec<RawMessage>) -> Vec<CatalogEntry> {
    let mut parsed: Vec<_> = records
        .into_iter()
        .map(|record| {
            let id = log_fallback(parse_build_name(&record.msg.artifact.nvr));
            (processing_key(&id), id, record)
        })
        .collect();
    parsed.sort_by(|(a, _, _), (b, _, _)| a.cmp(b));

    let mut seen = HashSet::new();
    let mut entries = Vec::new();

    for (key, id, record) in parsed {
        let msg = record.msg;
        let scope = ScopeKey {
            platform_version: msg.index.ocp_version.clone(),
            component: id.component.clone(),
            component_version: id.version.clone(),
        };
        if seen.contains(&scope) {
            debug!("Skipping {} for {}: already have a build", key, msg.index.ocp_version);
            continue;
        }

        let Some(bundle_image) = msg.index.added_bundle_images.into_iter().next() else {
            warn!(
                "Skipping {} (msg {}): no added bundle images",
                msg.artifact.nvr,
                record.msg_id.as_deref().unwrap_or("unknown")
            );
            continue;
        };

        let index_number = log_fallback(parse_index_number(&msg.index.index_image));
        seen.insert(scope);
        entries.push(CatalogEntry {
            component: id.component,
            component_image: bundle_image,
            component_release: id.release,
            component_version: id.version,
            platform_version: msg.index.ocp_version,
            index_image: msg.index.index_image,
            index_number,
            generated_at: msg.generated_at,
        });
    }

    sort_entries(&mut entries);
    entries
}
