use std::sync::Arc;

use crate::models::PostsFeed;
use crate::state::{StateCell, Subscription};

pub type FeedSnapshot = Option<Arc<PostsFeed>>;

/// Single slot holding the last successfully fetched feed, `None` until the first fetch.
#[derive(Clone, Default)]
pub struct FeedCache {
    cell: StateCell<FeedSnapshot>,
}

impl FeedCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn observe(&self) -> Subscription<FeedSnapshot> {
        self.cell.subscribe()
    }

    /// Swaps the whole snapshot; the previous feed is never merged into the new one.
    pub fn replace(&self, feed: Arc<PostsFeed>) {
        self.cell.replace(Some(feed));
    }

    pub fn current(&self) -> FeedSnapshot {
        self.cell.get()
    }

    pub fn observer_count(&self) -> usize {
        self.cell.subscriber_count()
    }
}
