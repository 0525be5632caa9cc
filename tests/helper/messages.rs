//! datagrepper response builders

use serde_json::{Value, json};

/// One raw "index built" message
pub fn raw_message(nvr: &str, ocp_version: &str, index_image: &str) -> Value {
    json!({
        "i": 1,
        "msg_id": format!("{}-{}", ocp_version, nvr),
        "topic": "/topic/VirtualTopic.eng.ci.redhat-container-image.index.built",
        "headers": { "CI_TYPE": "custom" },
        "msg": {
            "artifact": {
                "nvr": nvr,
                "type": "brew-build"
            },
            "index": {
                "added_bundle_images": [format!("registry-proxy.example.com/rh-osbs/{}", nvr)],
                "index_image": index_image,
                "ocp_version": ocp_version
            },
            "generated_at": "2024-05-01T12:00:00Z",
            "version": "0.2.1"
        }
    })
}

/// A full `/raw` response page
pub fn page_body(page: u32, pages: u32, raw_messages: Vec<Value>) -> String {
    let count = raw_messages.len();
    json!({
        "arguments": {
            "contains": ["workload-availability"],
            "page": page,
            "rows_per_page": 100
        },
        "count": count,
        "pages": pages,
        "raw_messages": raw_messages,
        "total": count
    })
    .to_string()
}
