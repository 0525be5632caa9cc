//! Feed trait and sequential page retrieval

#[cfg(test)]
use mockall::automock;
use tracing::debug;

use crate::catalog::error::FeedError;
use crate::catalog::types::{Messages, RawMessage};

/// Trait for fetching pages of index-built messages
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait Feed: Send + Sync {
    /// Fetches a single page of messages
    ///
    /// # Arguments
    /// * `page` - 1-based page number
    ///
    /// # Returns
    /// * `Ok(Messages)` - The decoded page envelope
    /// * `Err(FeedError)` - Network failure, non-success status or undecodable body
    async fn fetch_page(&self, page: u32) -> Result<Messages, FeedError>;
}

/// Fetch every page of the query, in order
///
/// The page count is only known from the first response, so pages are
/// requested one after another. An empty first page means the query matched
/// nothing and yields `FeedError::NotFound`.
pub async fn fetch_all(feed: &dyn Feed) -> Result<Vec<RawMessage>, FeedError> {
    let mut records = Vec::new();
    let mut page = 1;

    loop {
        let messages = feed.fetch_page(page).await?;

        if page == 1 && messages.raw_messages.is_empty() {
            return Err(FeedError::NotFound);
        }

        debug!(
            "Fetched page {}/{} with {} messages",
            page,
            messages.pages,
            messages.raw_messages.len()
        );
        records.extend(messages.raw_messages);

        // `>=` so a feed reporting 0 pages still stops after the first one
        if page >= messages.pages {
            break;
        }
        page += 1;
    }

    Ok(records)
}
