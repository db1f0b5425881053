use std::collections::HashSet;

use tracing::debug;

use crate::state::{StateCell, Subscription};

pub type FavoriteIds = HashSet<String>;

/// Post ids the user marked as favorite. Local only, nothing is persisted.
#[derive(Clone, Default)]
pub struct FavoritesSet {
    cell: StateCell<FavoriteIds>,
}

impl FavoritesSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn observe(&self) -> Subscription<FavoriteIds> {
        self.cell.subscribe()
    }

    /// Adds `post_id` if absent, removes it otherwise. Returns whether it is now a favorite.
    pub fn toggle(&self, post_id: &str) -> bool {
        let next = self.cell.update(|current| {
            let mut next = current.clone();
            if !next.remove(post_id) {
                next.insert(post_id.to_owned());
            }
            next
        });
        let favorite = next.contains(post_id);
        debug!(post_id, favorite, "toggled favorite");
        favorite
    }

    pub fn contains(&self, post_id: &str) -> bool {
        self.cell.read(|ids| ids.contains(post_id))
    }

    pub fn snapshot(&self) -> FavoriteIds {
        self.cell.get()
    }

    pub fn observer_count(&self) -> usize {
        self.cell.subscriber_count()
    }
}
