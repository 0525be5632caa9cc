//! Feed test doubles

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;

use find_index_image::catalog::datagrepper::DatagrepperFeed;
use find_index_image::catalog::error::FeedError;
use find_index_image::catalog::feed::Feed;
use find_index_image::catalog::types::Messages;
use find_index_image::config::FeedConfig;

/// Feed serving fixed pages, counting requests and concurrent page walks
pub struct CountingFeed {
    pages: Vec<Messages>,
    delay: Duration,
    requests: AtomicUsize,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
}

impl CountingFeed {
    pub fn new(pages: Vec<Messages>, delay: Duration) -> Self {
        Self {
            pages,
            delay,
            requests: AtomicUsize::new(0),
            in_flight: AtomicUsize::new(0),
            max_in_flight: AtomicUsize::new(0),
        }
    }

    pub fn requests(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }

    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Feed for CountingFeed {
    async fn fetch_page(&self, page: u32) -> Result<Messages, FeedError> {
        self.requests.fetch_add(1, Ordering::SeqCst);
        let current = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(current, Ordering::SeqCst);

        tokio::time::sleep(self.delay).await;

        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        self.pages
            .get(page as usize - 1)
            .cloned()
            .ok_or(FeedError::NotFound)
    }
}

/// Feed that can be taken offline, so requests fail at the transport level
pub struct SwitchableFeed {
    online: DatagrepperFeed,
    offline: DatagrepperFeed,
    is_offline: AtomicBool,
}

impl SwitchableFeed {
    pub fn new(base_url: &str) -> Self {
        let config = |base_url: &str| FeedConfig {
            base_url: base_url.to_string(),
            ..FeedConfig::default()
        };
        Self {
            online: DatagrepperFeed::new(&config(base_url)),
            // Port 1 is reserved and refuses connections
            offline: DatagrepperFeed::new(&config("http://127.0.0.1:1")),
            is_offline: AtomicBool::new(false),
        }
    }

    pub fn go_offline(&self) {
        self.is_offline.store(true, Ordering::SeqCst);
    }
}

#[async_trait]
impl Feed for SwitchableFeed {
    async fn fetch_page(&self, page: u32) -> Result<Messages, FeedError> {
        if self.is_offline.load(Ordering::SeqCst) {
            self.offline.fetch_page(page).await
        } else {
            self.online.fetch_page(page).await
        }
    }
}
