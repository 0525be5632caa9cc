//! datagrepper `/raw` endpoint implementation

use std::time::Duration;

use tracing::{debug, warn};

use crate::catalog::error::FeedError;
use crate::catalog::feed::Feed;
use crate::catalog::types::Messages;
use crate::config::FeedConfig;

/// Longest response body kept in a `FeedError::Server`
const MAX_ERROR_BODY_CHARS: usize = 1024;

fn truncate_body(body: String) -> String {
    match body.char_indices().nth(MAX_ERROR_BODY_CHARS) {
        Some((end, _)) => format!("{}... ({} bytes total)", &body[..end], body.len()),
        None => body,
    }
}

/// Feed implementation backed by a datagrepper instance
pub struct DatagrepperFeed {
    client: reqwest::Client,
    base_url: String,
    topic: String,
    contains: String,
    delta_secs: u64,
    rows_per_page: u32,
}

impl DatagrepperFeed {
    pub fn new(config: &FeedConfig) -> Self {
        Self {
            client: reqwest::Client::builder()
                .user_agent("find-index-image")
                .timeout(Duration::from_millis(config.timeout_ms))
                .danger_accept_invalid_certs(config.accept_invalid_certs)
                .build()
                .expect("Failed to create HTTP client"),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            topic: config.topic.clone(),
            contains: config.contains.clone(),
            delta_secs: config.delta_secs,
            rows_per_page: config.effective_rows_per_page(),
        }
    }

    fn page_url(&self, page: u32) -> Result<reqwest::Url, FeedError> {
        let delta = self.delta_secs.to_string();
        let rows_per_page = self.rows_per_page.to_string();
        let page = page.to_string();
        reqwest::Url::parse_with_params(
            &format!("{}/raw", self.base_url),
            &[
                ("topic", self.topic.as_str()),
                ("delta", delta.as_str()),
                ("contains", self.contains.as_str()),
                ("rows_per_page", rows_per_page.as_str()),
                ("page", page.as_str()),
            ],
        )
        .map_err(|e| FeedError::InvalidUrl(format!("{}: {}", self.base_url, e)))
    }
}

#[async_trait::async_trait]
impl Feed for DatagrepperFeed {
    async fn fetch_page(&self, page: u32) -> Result<Messages, FeedError> {
        let url = self.page_url(page)?;

        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            warn!("datagrepper returned status {}: {}", status, url);
            return Err(FeedError::Server {
                status: status.as_u16(),
                body: truncate_body(body),
            });
        }

        serde_json::from_str(&body).map_err(|e| {
            warn!("Failed to parse datagrepper response for page {}: {}", page, e);
            debug!("Unparsable datagrepper response body: {}", body);
            FeedError::Server {
                status: status.as_u16(),
                body: truncate_body(body),
            }
        })
    }
}
